//! QTI 1.2 document assembly.
//!
//! Questions become two XML documents:
//!
//! - the assessment (`questestinterop`), one `item` per question with its
//!   rendered stem, choices and scoring rule
//! - the package manifest (`imsmanifest.xml`) pointing at the assessment
//!
//! Documents are built as [`Element`] trees ([`tree`]) and serialized
//! separately ([`writer`]). Identifiers come from an [`IdGenerator`], which
//! defaults to random UUID-backed ids.
//!
//! # Example
//!
//! ```
//! use mdqti::parse::parse_exam;
//! use mdqti::qti::{AssessmentConfig, QtiGenerator, SequentialIds};
//!
//! let questions = parse_exam("1. What is 2 + 2?\n   a. 3\n   *b. 4\n");
//! let docs = QtiGenerator::new()
//!     .with_config(AssessmentConfig::new("Arithmetic"))
//!     .with_ids(SequentialIds::new())
//!     .generate(&questions)?;
//!
//! assert!(docs.assessment_xml.contains("title=\"Arithmetic\""));
//! assert!(docs.manifest_xml.contains(&docs.assessment_path()));
//! # Ok::<(), mdqti::Error>(())
//! ```

pub mod assessment;
pub mod ident;
pub mod manifest;
pub mod tree;
pub mod writer;

use crate::error::Result;
use crate::model::Question;

pub use assessment::{answer_id, build_assessment, build_item};
pub use ident::{IdGenerator, RandomIds, SequentialIds, is_identifier};
pub use manifest::{MANIFEST_FILE, assessment_path, build_manifest};
pub use tree::{Element, Node};
pub use writer::{XmlFormat, to_xml_string, write_document};

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Assessment";

/// Configuration for assessment generation.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    pub title: String,
    /// Fixed assessment identifier. Generated when `None`.
    pub assessment_id: Option<String>,
}

impl AssessmentConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            assessment_id: None,
        }
    }

    pub fn with_assessment_id(mut self, id: impl Into<String>) -> Self {
        self.assessment_id = Some(id.into());
        self
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

/// Serialized documents for one exam, sharing an assessment identifier.
#[derive(Debug, Clone)]
pub struct QtiDocuments {
    pub assessment_id: String,
    pub assessment_xml: String,
    pub manifest_xml: String,
}

impl QtiDocuments {
    /// Archive path of the assessment document.
    pub fn assessment_path(&self) -> String {
        assessment_path(&self.assessment_id)
    }
}

/// Assembles QTI documents from parsed questions.
pub struct QtiGenerator<G = RandomIds> {
    config: AssessmentConfig,
    ids: G,
}

impl QtiGenerator {
    /// Create a generator with default configuration and random identifiers.
    pub fn new() -> Self {
        Self {
            config: AssessmentConfig::default(),
            ids: RandomIds,
        }
    }
}

impl Default for QtiGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> QtiGenerator<G> {
    pub fn with_config(mut self, config: AssessmentConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the identifier source.
    pub fn with_ids<H: IdGenerator>(self, ids: H) -> QtiGenerator<H> {
        QtiGenerator {
            config: self.config,
            ids,
        }
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Configured assessment id, or a freshly generated one.
    fn resolve_assessment_id(&mut self) -> String {
        match &self.config.assessment_id {
            Some(id) => id.clone(),
            None => self.ids.next_id(),
        }
    }

    /// Build the assessment tree without serializing it.
    pub fn assessment_tree(&mut self, questions: &[Question], assessment_id: &str) -> Element {
        build_assessment(questions, &self.config.title, assessment_id, &mut self.ids)
    }

    /// Serialize the assessment document alone.
    pub fn assessment_xml(&mut self, questions: &[Question]) -> Result<String> {
        let id = self.resolve_assessment_id();
        to_xml_string(&self.assessment_tree(questions, &id))
    }

    /// Serialize both documents under one assessment identifier.
    pub fn generate(&mut self, questions: &[Question]) -> Result<QtiDocuments> {
        let assessment_id = self.resolve_assessment_id();
        tracing::debug!(%assessment_id, questions = questions.len(), "generating QTI documents");

        let assessment_xml = to_xml_string(&self.assessment_tree(questions, &assessment_id))?;
        let manifest_xml = to_xml_string(&build_manifest(&assessment_id))?;

        Ok(QtiDocuments {
            assessment_id,
            assessment_xml,
            manifest_xml,
        })
    }
}

/// Serialize the assessment document with a random identifier source.
///
/// `assessment_id` is generated when `None`.
pub fn generate_assessment(
    questions: &[Question],
    title: &str,
    assessment_id: Option<&str>,
) -> Result<String> {
    let mut config = AssessmentConfig::new(title);
    config.assessment_id = assessment_id.map(str::to_string);
    QtiGenerator::new().with_config(config).assessment_xml(questions)
}

/// Serialize the manifest for an assessment.
pub fn generate_manifest(assessment_id: &str) -> Result<String> {
    to_xml_string(&build_manifest(assessment_id))
}
