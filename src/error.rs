use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error produced by a fallible column accessor.
pub type AccessorError = Box<dyn StdError + Send + Sync>;

#[derive(Error, Debug)]
/// Report generation error
pub enum ReportError {
    /// Reading a column value from an entity failed. Carries the friendly
    /// name of the entity type the failure was observed on.
    #[error("error converting entities of type {entity}: {source}")]
    PropertyAccess {
        entity: String,
        #[source]
        source: AccessorError,
    },

    #[error("invalid report input: {0}")]
    InvalidInput(String),

    /// Failure raised by the workbook encoder, propagated untranslated.
    #[error("workbook encoder: {0}")]
    Encoding(String),
}
