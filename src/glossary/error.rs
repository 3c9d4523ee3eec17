use thiserror::Error;

use crate::language::Language;

/// Errors raised while building a glossary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlossaryError {
    /// A source term is empty or whitespace only
    #[error("Glossary contains an empty term")]
    EmptyTerm,
    /// A term has no translation
    #[error("Term '{term}' has an empty translation")]
    EmptyTranslation { term: String },
    /// The same term is defined twice
    #[error("Term '{term}' is defined more than once")]
    DuplicateTerm { term: String },
    /// Source and target languages are the same
    #[error("Source and target language are both '{0}'")]
    SameLanguage(Language),
}
