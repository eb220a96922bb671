//! Checks that a compiled grammar can be loaded by the tree-sitter runtime.
//!
//! A [`Language`] produced by a generated binding is only usable if the
//! runtime linked into this process understands the ABI it was generated for
//! and a [`Parser`] accepts it. [`verify`] runs those checks and turns any
//! rejection into a [`GrammarLoadError`] instead of a null handle or a panic
//! deep inside the parser.

use thiserror::Error;
use tree_sitter::{Language, LanguageError, Parser};

/// Reasons a grammar fails to load.
#[derive(Debug, Error)]
pub enum GrammarLoadError {
    #[error(
        "Error loading {name} parser grammar: ABI version {version} is outside the supported range {min}..={max}"
    )]
    IncompatibleVersion {
        name: String,
        version: usize,
        min: usize,
        max: usize,
    },

    #[error("Error loading {name} parser grammar: rejected by the parser")]
    Rejected {
        name: String,
        #[source]
        source: LanguageError,
    },
}

impl GrammarLoadError {
    /// The display name of the grammar that failed to load.
    pub fn grammar_name(&self) -> &str {
        match self {
            Self::IncompatibleVersion { name, .. } | Self::Rejected { name, .. } => name,
        }
    }
}

/// Verifies that `language` can drive a parser.
///
/// `name` is only used in diagnostics. Verification holds no state between
/// calls, so it may run any number of times and from any thread.
pub fn verify(language: &Language, name: &str) -> Result<(), GrammarLoadError> {
    new_parser(language, name).map(|_| ())
}

/// Verifies `language` and returns the parser that accepted it.
pub(crate) fn new_parser(language: &Language, name: &str) -> Result<Parser, GrammarLoadError> {
    accept(language, name, language.version())
}

/// Runs the checks against `abi_version` rather than the version the
/// language reports.
fn accept(language: &Language, name: &str, abi_version: usize) -> Result<Parser, GrammarLoadError> {
    let result = check_abi_version(name, abi_version).and_then(|()| {
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .map_err(|source| GrammarLoadError::Rejected {
                name: name.to_string(),
                source,
            })?;
        Ok(parser)
    });

    #[cfg(feature = "tracing")]
    match &result {
        Ok(_) => tracing::debug!(
            grammar = name,
            abi_version,
            node_kinds = language.node_kind_count(),
            "grammar loaded"
        ),
        Err(err) => tracing::warn!(grammar = name, error = %err, "grammar failed to load"),
    }

    result
}

/// Checks an ABI version against the range supported by the linked runtime.
pub fn check_abi_version(name: &str, version: usize) -> Result<(), GrammarLoadError> {
    let min = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION;
    let max = tree_sitter::LANGUAGE_VERSION;
    if (min..=max).contains(&version) {
        Ok(())
    } else {
        Err(GrammarLoadError::IncompatibleVersion {
            name: name.to_string(),
            version,
            min,
            max,
        })
    }
}
