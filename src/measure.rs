//! Title width as a reader sees it.
//!
//! Underlines are typed to match the visible width of the title, so a title with accented or CJK
//! characters needs fewer punctuation bytes than it has bytes itself. Titles in legacy single-byte
//! encodings are measured in bytes.

/// Code points in `buf` if it looks like UTF-8, judged from leading bytes alone.
///
/// Continuation bytes are skipped without being checked. Returns `None` when a byte cannot start
/// a sequence or the last sequence runs past the end of the buffer.
#[must_use]
pub fn utf8_len(buf: &[u8]) -> Option<usize> {
    let mut pos = 0;
    let mut len = 0;
    while pos < buf.len() {
        let b = buf[pos];
        pos += if b & 0x80 == 0 {
            1
        } else if b & 0xe0 == 0xc0 {
            2
        } else if b & 0xf0 == 0xe0 {
            3
        } else if b & 0xf8 == 0xf0 {
            4
        } else {
            return None;
        };
        if pos > buf.len() {
            return None;
        }
        len += 1;
    }
    Some(len)
}

/// Width used to decide whether an underline is long enough for `buf`.
#[must_use]
pub fn display_len(buf: &[u8]) -> usize {
    utf8_len(buf).unwrap_or(buf.len())
}

#[cfg(test)]
#[path = "tests/measure.rs"]
mod tests;
