use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::domain::document::DocumentDescriptor;

/// Stable violation codes reported by [`ValidationPolicy::validate`].
///
/// Codes are part of the API contract: callers key structured error
/// responses on them, so they never change casing or wording.
pub mod violation {
    /// No document was supplied at all.
    pub const NO_DOCUMENT: &str = "NoDocument";
    /// Declared length exceeds the configured maximum.
    pub const SIZE_EXCEEDED: &str = "DocumentSizeExceeded";
    /// Declared content type is not in the allowed set.
    pub const INVALID_TYPE: &str = "InvalidDocumentType";
}

/// Accumulated validation failures, keyed by violation code.
///
/// An empty outcome means the document is acceptable. A single document can
/// violate several rules at once, so each code maps to one or more messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationOutcome {
    violations: BTreeMap<String, Vec<String>>,
}

impl ValidationOutcome {
    pub fn add(&mut self, code: &str, message: impl Into<String>) {
        self.violations
            .entry(code.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.violations.contains_key(code)
    }

    pub fn violations(&self) -> &BTreeMap<String, Vec<String>> {
        &self.violations
    }

    /// Messages recorded for a code, empty when the code is absent.
    pub fn messages(&self, code: &str) -> &[String] {
        self.violations.get(code).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Size and content-type rules a document must satisfy to be stored.
///
/// Built once from configuration at startup and shared read-only for the
/// lifetime of the service.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    max_size_bytes: u64,
    allowed_content_types: HashSet<String>,
}

impl ValidationPolicy {
    pub fn new(max_size_bytes: u64, allowed_content_types: impl IntoIterator<Item = String>) -> Self {
        Self {
            max_size_bytes,
            allowed_content_types: allowed_content_types.into_iter().collect(),
        }
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Check a document against the policy. Pure function of its inputs.
    ///
    /// `None` means no document was provided; that short-circuits with
    /// `NoDocument`. Otherwise the size and type checks both run, even when
    /// one has already failed, so the outcome can carry both codes.
    pub fn validate(&self, document: Option<&DocumentDescriptor>) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();

        let Some(document) = document else {
            outcome.add(violation::NO_DOCUMENT, "Document not uploaded");
            return outcome;
        };

        if document.length.is_some_and(|len| len > self.max_size_bytes) {
            outcome.add(
                violation::SIZE_EXCEEDED,
                format!(
                    "Document size is bigger than maximum allowed document size {}",
                    self.max_size_bytes
                ),
            );
        }

        if !self.allowed_content_types.contains(&document.content_type) {
            outcome.add(violation::INVALID_TYPE, "Uploaded Document type is not supported");
        }

        outcome
    }
}
