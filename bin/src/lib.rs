use std::io::Write;

use errors::LoxErrors;
use itertools::Itertools;
use parser::{render, Parser};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("{0}")]
    Diagnostics(#[from] LoxErrors),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Write every scanned token before parsing.
    pub dump_tokens: bool,
}

/// Scans and parses `source`, writing the prefix rendering of the tree to `out`.
/// Any lexical error stops the run before parsing.
pub fn run(source: &str, out: &mut impl Write, options: Options) -> Result<(), RunError> {
    let (tokens, scan_errors) = scanner::scan(source);

    if options.dump_tokens {
        writeln!(out, "{}", tokens.iter().map(|t| t.describe()).join("\n"))?;
    }

    if !scan_errors.is_empty() {
        log::debug!("{} scan error(s), skipping parse", scan_errors.len());
        return Err(LoxErrors::from_iter(scan_errors).into());
    }

    let expr = Parser::new(tokens).parse_to_end().map_err(LoxErrors::from)?;
    writeln!(out, "{}", render(&expr))?;
    Ok(())
}
