//! rst-outline: section outlines for underline-titled plain-text documents.
//!
//! Documents written in the style of reStructuredText mark a heading by underlining its title with a run of
//! one punctuation character. The character carries no fixed meaning: the first one used in a
//! document marks chapters, the second sections, and so on for up to four levels. This crate
//! scans such documents in a single pass and reports every heading with its parent.
//!
//! The pipeline is [`detect`] (title plus underline recognition, using [`classify`] for levels
//! and [`measure`] for title width) feeding [`hierarchy`], which emits to a [`TagSink`] such as
//! [`Outline`]. [`scan()`] wires it together for one document.

pub mod classify;
pub mod config;
pub mod detect;
pub mod error;
pub mod hierarchy;
pub mod input;
pub mod measure;
pub mod output;
pub mod scan;
pub mod section;

pub use error::{Error, Result};
pub use hierarchy::{Heading, TagSink};
pub use scan::{scan, Scanner};
pub use section::{Level, Outline, Section};
