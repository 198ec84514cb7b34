use strum::EnumMessage;
use strum_macros::EnumMessage;
use thiserror::Error;

/// Sundry error code
///
/// Operations on collections that are given valid input never fail. These
/// errors describe the inputs for which no result is defined.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumMessage)]
pub enum Error {
    /// Reduce of empty collection with no initial value.
    ///
    /// A reduction without an explicit initial accumulator takes its seed
    /// from the first element of the collection. An empty collection has no
    /// such element; supply an initial value for inputs that may be empty.
    #[error("reduce of empty collection with no initial value")]
    EmptyReduce,
    /// Value is not a collection.
    ///
    /// The operation requires a sequence or a mapping, but was given an
    /// atomic value.
    #[error("value is not a collection")]
    NotACollection,
    /// Value is not a sequence.
    ///
    /// The operation requires an ordered sequence.
    #[error("value is not a sequence")]
    NotASequence,
    /// Value is not a mapping.
    ///
    /// The operation requires a key-value mapping.
    #[error("value is not a mapping")]
    NotAMapping,
}

impl Error {
    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
