//! Rust bindings for the `tree-sitter-lox` grammar.
//!
//! The parser tables are generated from `src/grammar.json` when the crate is
//! built and linked in as a static library. [`language`] hands out the raw
//! [`Language`]; [`load`] and [`parser`] verify it against the linked runtime
//! first.
//!
//! ```
//! let mut parser = tree_sitter_lox::parser().unwrap();
//! let tree = parser.parse("print 1 + 2;", None).unwrap();
//! assert!(!tree.root_node().has_error());
//! ```

mod verify;

pub use verify::{check_abi_version, verify, GrammarLoadError};

use tree_sitter::{Language, Parser};

extern "C" {
    fn tree_sitter_lox() -> Language;
}

/// The grammar name, as declared in `grammar.json`.
pub const LANGUAGE_NAME: &str = "lox";

/// Human-readable name used in diagnostics.
pub const DISPLAY_NAME: &str = "Lox";

/// File extensions conventionally used for Lox sources.
pub const FILE_EXTENSIONS: &[&str] = &["lox"];

/// The grammar the parser was generated from.
pub const GRAMMAR_JSON: &str = include_str!("../../src/grammar.json");

/// The highlight query for Lox.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");

/// Returns the Tree-sitter [`Language`] for this grammar.
pub fn language() -> Language {
    unsafe { tree_sitter_lox() }
}

/// Returns the Lox [`Language`] once the runtime has accepted it.
pub fn load() -> Result<Language, GrammarLoadError> {
    let language = language();
    verify(&language, DISPLAY_NAME)?;
    Ok(language)
}

/// Creates a [`Parser`] for Lox sources.
pub fn parser() -> Result<Parser, GrammarLoadError> {
    verify::new_parser(&language(), DISPLAY_NAME)
}
