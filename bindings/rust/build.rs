use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

const GRAMMAR_NAME: &str = "lox";

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let grammar_path = manifest_dir.join("src").join("grammar.json");

    println!("cargo:rerun-if-changed={}", grammar_path.display());

    let parser_path = generate_parser(&grammar_path, &out_dir)?;

    let mut c_config = cc::Build::new();
    c_config
        .std("c11")
        .include(&out_dir)
        .warnings(false)
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs");

    #[cfg(target_env = "msvc")]
    c_config.flag("-utf-8");

    c_config.file(&parser_path);
    c_config.compile("tree-sitter-lox");

    Ok(())
}

/// Generates `parser.c` and the `tree_sitter/parser.h` header it includes
/// into `out_dir`, returning the path of the generated parser.
fn generate_parser(grammar_path: &Path, out_dir: &Path) -> Result<PathBuf> {
    let grammar_json = fs::read_to_string(grammar_path)
        .with_context(|| format!("failed to read {}", grammar_path.display()))?;

    let (name, c_code) = tree_sitter_generate::generate_parser_for_grammar(&grammar_json)
        .with_context(|| format!("failed to generate a parser from {}", grammar_path.display()))?;
    if name != GRAMMAR_NAME {
        bail!(
            "{} declares grammar `{}`, expected `{}`",
            grammar_path.display(),
            name,
            GRAMMAR_NAME
        );
    }

    let header_dir = out_dir.join("tree_sitter");
    fs::create_dir_all(&header_dir)
        .with_context(|| format!("failed to create {}", header_dir.display()))?;
    fs::write(header_dir.join("parser.h"), tree_sitter::PARSER_HEADER)
        .context("failed to write tree_sitter/parser.h")?;

    let parser_path = out_dir.join("parser.c");
    fs::write(&parser_path, c_code)
        .with_context(|| format!("failed to write {}", parser_path.display()))?;

    Ok(parser_path)
}
