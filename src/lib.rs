//! # mdqti
//!
//! Convert Markdown multiple-choice exams into QTI 1.2 packages that
//! learning-management systems (Canvas and friends) can import.
//!
//! ## Pipeline
//!
//! - [`parse`]: markdown → [`Question`]s, aware of fenced code blocks
//! - [`markdown`]: stem/choice fragments → escaped HTML
//! - [`qti`]: questions → assessment and manifest XML
//! - [`export`]: XML → ZIP package (or inline XML)
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mdqti::export::{PackageExporter, write_package_file};
//! use mdqti::{AssessmentConfig, convert};
//!
//! let markdown = std::fs::read_to_string("exam.md")?;
//! let conversion = convert(&markdown, &AssessmentConfig::new("Midterm"))?;
//! write_package_file(&PackageExporter::new(), &conversion.documents, Path::new("exam.zip"))?;
//! # Ok::<(), mdqti::Error>(())
//! ```
//!
//! ## Exam Format
//!
//! ```text
//! 1. Which of these is a Python keyword?
//!    a. function
//!    *b. def
//!    c. method
//! ```
//!
//! The `*` marks the correct answer. Stems and choices may contain inline
//! code and fenced code blocks.

pub mod error;
pub mod export;
pub mod markdown;
pub mod model;
pub mod parse;
pub mod qti;

pub use error::{Error, Result};
pub use model::{Choice, Question};
pub use parse::parse_exam;
pub use qti::{AssessmentConfig, QtiDocuments, QtiGenerator};

/// Parsed questions together with their serialized QTI documents.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub questions: Vec<Question>,
    pub documents: QtiDocuments,
}

/// Parse `markdown` and generate both QTI documents.
///
/// Fails with [`Error::NoQuestions`] when nothing parses, so callers never
/// produce an empty assessment.
pub fn convert(markdown: &str, config: &AssessmentConfig) -> Result<Conversion> {
    let questions = parse_exam(markdown);
    if questions.is_empty() {
        return Err(Error::NoQuestions);
    }

    let documents = QtiGenerator::new()
        .with_config(config.clone())
        .generate(&questions)?;

    Ok(Conversion {
        questions,
        documents,
    })
}
