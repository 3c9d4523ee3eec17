//! ru-pl-glossary
//!
//! ドキュメントを手作業で翻訳するための、ロシア語 → ポーランド語の用語集

pub mod app;
pub mod config;
pub mod glossary;
pub mod language;
pub mod logging;

pub use glossary::{
    Glossary,
    GlossaryError,
};
pub use language::Language;
