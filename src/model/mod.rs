//! Core data model for exam conversion.
//!
//! A parsed exam is an ordered list of [`Question`]s, each holding the raw
//! markdown of its stem and its lettered [`Choice`]s. Nothing here is HTML
//! yet; rendering happens when the QTI documents are assembled.

mod question;

pub use question::{Choice, Question};
