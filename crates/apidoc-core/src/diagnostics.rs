//! Non-fatal findings collected while building the model

use facet::Facet;

/// A warning raised during model construction
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Warning {
    /// Line of the element, if the reflector knew it (1-indexed)
    pub line: Option<usize>,
    /// Source file of the element, if known
    pub file: Option<String>,
    /// Human readable message
    pub message: String,
}

/// Append-only warning log
///
/// Not shared between threads: parallel builds give each worker its own
/// `Diagnostics` and merge them with [`Diagnostics::extend`].
#[derive(Debug, Clone, Default, Facet)]
pub struct Diagnostics {
    /// Warnings in the order they were recorded
    pub warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning
    pub fn warn(&mut self, line: Option<usize>, file: Option<String>, message: impl Into<String>) {
        self.warnings.push(Warning {
            line,
            file,
            message: message.into(),
        });
    }

    /// Number of recorded warnings
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Merge another log into this one, keeping its order after ours
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }
}
