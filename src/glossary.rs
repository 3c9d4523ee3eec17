//! Term dictionary: documentation terms and their translations.
//!
//! The glossary is a read-only reference for manual translation. It is never
//! applied to any input text.

/// Glossary construction errors
mod error;
/// Built-in term table
mod terms;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

pub use error::GlossaryError;

use crate::language::Language;

/// An immutable mapping from source terms to target terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glossary {
    /// Language of the keys
    source: Language,
    /// Language of the values
    target: Language,
    /// Term → translation
    terms: HashMap<&'static str, &'static str>,
}

impl Glossary {
    /// The built-in Russian → Polish glossary.
    pub fn builtin() -> Result<Self, GlossaryError> {
        Self::from_pairs(Language::Russian, Language::Polish, terms::RU_PL)
    }

    /// 用語ペアから辞書を作成する
    ///
    /// # Arguments
    /// * `source` - キー側の言語
    /// * `target` - 値側の言語
    /// * `pairs` - (用語, 訳語) のリスト
    ///
    /// # Errors
    /// - 空の用語・訳語
    /// - 重複した用語（大文字・小文字は区別する）
    /// - `source` と `target` が同じ言語
    pub fn from_pairs(
        source: Language,
        target: Language,
        pairs: &[(&'static str, &'static str)],
    ) -> Result<Self, GlossaryError> {
        if source == target {
            return Err(GlossaryError::SameLanguage(source));
        }

        let mut terms = HashMap::with_capacity(pairs.len());
        for &(term, translation) in pairs {
            if term.trim().is_empty() {
                return Err(GlossaryError::EmptyTerm);
            }
            if translation.trim().is_empty() {
                return Err(GlossaryError::EmptyTranslation { term: term.to_string() });
            }
            match terms.entry(term) {
                Entry::Occupied(_) => {
                    return Err(GlossaryError::DuplicateTerm { term: term.to_string() });
                }
                Entry::Vacant(entry) => {
                    entry.insert(translation);
                }
            }
        }

        tracing::trace!("Built {source} -> {target} glossary with {} terms", terms.len());
        Ok(Self { source, target, terms })
    }

    /// Looks up a term. Matching is exact and case-sensitive.
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&'static str> {
        self.terms.get(term).copied()
    }

    /// Returns the translation, or `term` itself when the glossary has none.
    #[must_use]
    pub fn term_or_key<'a>(&self, term: &'a str) -> &'a str {
        let translation: Option<&'a str> = self.get(term);
        translation.unwrap_or(term)
    }

    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[must_use]
    pub const fn source(&self) -> Language {
        self.source
    }

    #[must_use]
    pub const fn target(&self) -> Language {
        self.target
    }

    /// Iterates over (term, translation) pairs in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.terms.iter().map(|(&term, &translation)| (term, translation))
    }
}
