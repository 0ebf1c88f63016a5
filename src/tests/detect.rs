use super::{is_uniform_punctuation, Detection, HeadingDetector};
use crate::section::Level;

fn feed_all(detector: &mut HeadingDetector, lines: &[&str]) -> Vec<Detection> {
    lines
        .iter()
        .map(|line| detector.feed(line.as_bytes()))
        .collect()
}

#[test]
fn test_title_and_underline() {
    let mut detector = HeadingDetector::new();
    let detections = feed_all(&mut detector, &["Title", "====="]);

    assert_eq!(
        detections,
        vec![Detection::Candidate, Detection::Underline(Level::Chapter)]
    );
    assert_eq!(detector.candidate().text(), b"Title");
}

#[test]
fn test_longer_underline_is_accepted() {
    let mut detector = HeadingDetector::new();
    let detections = feed_all(&mut detector, &["Hi", "----------"]);

    assert_eq!(detections[1], Detection::Underline(Level::Chapter));
}

#[test]
fn test_short_underline_is_text() {
    let mut detector = HeadingDetector::new();
    let detections = feed_all(&mut detector, &["Hi", "-"]);

    assert_eq!(detections[1], Detection::Candidate);
    assert_eq!(detector.candidate().text(), b"-");
    assert!(
        detector.levels().assigned().is_empty(),
        "Rejected underlines must not claim a level"
    );
}

#[test]
fn test_mixed_underline_is_text() {
    let mut detector = HeadingDetector::new();
    let detections = feed_all(&mut detector, &["Hi", "--=--"]);

    assert_eq!(detections[1], Detection::Candidate);
}

#[test]
fn test_underline_needs_a_candidate() {
    let mut detector = HeadingDetector::new();
    let detections = feed_all(&mut detector, &["", "====="]);

    assert_eq!(detections, vec![Detection::Blank, Detection::Candidate]);
}

#[test]
fn test_blank_line_clears_candidate() {
    let mut detector = HeadingDetector::new();
    let detections = feed_all(&mut detector, &["Title", "", "====="]);

    assert_eq!(detections[1], Detection::Blank);
    assert_eq!(detections[2], Detection::Candidate);
}

#[test]
fn test_indented_line_is_blank() {
    let mut detector = HeadingDetector::new();
    let detections = feed_all(&mut detector, &["    quoted text", "==============="]);

    assert_eq!(detections[0], Detection::Blank);
    assert!(detector.levels().assigned().is_empty());
}

#[test]
fn test_underline_measured_in_code_points() {
    let mut detector = HeadingDetector::new();
    // 9 bytes, 3 code points
    let detections = feed_all(&mut detector, &["見出し", "==="]);

    assert_eq!(detections[1], Detection::Underline(Level::Chapter));
}

#[test]
fn test_invalid_utf8_measured_in_bytes() {
    let mut detector = HeadingDetector::new();
    assert_eq!(detector.feed(b"Caf\xe9"), Detection::Candidate);
    assert_eq!(detector.candidate().display_len(), 4);
    assert_eq!(detector.feed(b"==="), Detection::Candidate);

    assert_eq!(detector.feed(b"Caf\xe9"), Detection::Candidate);
    assert_eq!(detector.feed(b"===="), Detection::Underline(Level::Chapter));
}

#[test]
fn test_fifth_underline_character_becomes_candidate() {
    let mut detector = HeadingDetector::new();
    let lines = ["A", "=", "B", "-", "C", "~", "D", "^", "E", "#"];
    let detections = feed_all(&mut detector, &lines);

    assert_eq!(detections[7], Detection::Underline(Level::Subsubsection));
    assert_eq!(detections[9], Detection::Candidate);
    assert_eq!(detector.candidate().text(), b"#");
}

#[test]
fn test_candidate_survives_its_underline() {
    let mut detector = HeadingDetector::new();
    let detections = feed_all(&mut detector, &["Title", "=====", "-----"]);

    assert_eq!(detections[1], Detection::Underline(Level::Chapter));
    assert_eq!(detections[2], Detection::Underline(Level::Section));
}

#[test]
fn test_reset_forgets_candidate_and_levels() {
    let mut detector = HeadingDetector::new();
    feed_all(&mut detector, &["Title", "=====", "Next"]);
    detector.reset();

    assert!(detector.candidate().is_empty());
    assert!(detector.levels().assigned().is_empty());
    assert_eq!(detector.feed(b"-----"), Detection::Candidate);
}

#[test]
fn test_uniform_punctuation() {
    assert!(is_uniform_punctuation(b"="));
    assert!(is_uniform_punctuation(b"~~~~~~"));
    assert!(!is_uniform_punctuation(b""));
    assert!(!is_uniform_punctuation(b"aaaa"));
    assert!(!is_uniform_punctuation(b"==== "));
    assert!(!is_uniform_punctuation(b"--=--"));
}
