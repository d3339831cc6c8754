//! QTI content package (ZIP) exporter.

use std::io::{Seek, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;
use crate::qti::{MANIFEST_FILE, QtiDocuments};

use super::Exporter;

/// Configuration for package export.
#[derive(Debug, Clone, Default)]
pub struct PackageConfig {
    /// Compression level for deflate (0-9, default 6).
    pub compression_level: Option<u32>,
}

/// QTI package exporter.
///
/// The archive holds exactly two deflated members: `imsmanifest.xml` at the
/// root and the assessment document at `{id}/{id}.xml`.
pub struct PackageExporter {
    config: PackageConfig,
}

impl PackageExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: PackageConfig::default(),
        }
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: PackageConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for PackageExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for PackageExporter {
    fn export<W: Write + Seek>(&self, docs: &QtiDocuments, writer: &mut W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);

        let compression_level = self.config.compression_level.unwrap_or(6).min(9);
        let deflated = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(compression_level as i64));

        zip.start_file(MANIFEST_FILE, deflated)?;
        zip.write_all(docs.manifest_xml.as_bytes())?;

        zip.start_file(docs.assessment_path(), deflated)?;
        zip.write_all(docs.assessment_xml.as_bytes())?;

        zip.finish()?;
        Ok(())
    }
}
