//! Export module for writing QTI documents.
//!
//! # Architecture
//!
//! The [`Exporter`] trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write + Seek` destination
//!
//! [`write_package_file`] wraps the package exporter with atomic file
//! replacement, and [`write_xml`] covers inline mode, where only the
//! assessment document is emitted.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use mdqti::export::{Exporter, PackageExporter};
//! use mdqti::parse::parse_exam;
//! use mdqti::qti::QtiGenerator;
//!
//! let questions = parse_exam("1. Q\n*a. yes\nb. no\n");
//! let docs = QtiGenerator::new().generate(&questions)?;
//!
//! let mut out = Cursor::new(Vec::new());
//! PackageExporter::new().export(&docs, &mut out)?;
//! assert!(!out.into_inner().is_empty());
//! # Ok::<(), mdqti::Error>(())
//! ```

use std::io::{Seek, Write};

use crate::error::Result;
use crate::qti::QtiDocuments;

mod file;
mod package;

pub use file::{default_output_path, resolve_output_path, write_package_file};
pub use package::{PackageConfig, PackageExporter};

/// Trait for exporting QTI documents to a specific container format.
pub trait Exporter {
    /// Export the documents to the provided writer.
    ///
    /// The writer can be:
    /// - `std::fs::File` for disk output
    /// - `std::io::Cursor<Vec<u8>>` for in-memory output
    /// - Any other type implementing `Write + Seek`
    fn export<W: Write + Seek>(&self, docs: &QtiDocuments, writer: &mut W) -> Result<()>;
}

/// Write the assessment document alone, without packaging.
pub fn write_xml<W: Write>(docs: &QtiDocuments, writer: &mut W) -> Result<()> {
    writer.write_all(docs.assessment_xml.as_bytes())?;
    writer.flush()?;
    Ok(())
}
