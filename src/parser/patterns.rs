//! Regex patterns for Fortran constant declarations
//!
//! Fixed patterns are compiled once at first use via `LazyLock`. The real
//! declaration prefix depends on the configured kind parameter and is built
//! by [`build_real_param_re`] instead.
//!
//! All regexes use case-insensitive + unicode flags

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Build a case-insensitive regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. All patterns in this module are
/// compile-time constants covered by tests, so the panic can only occur at
/// first access of a `LazyLock` static during development.
fn build_re(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(true)
        .build()
        .unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

// Anchor pattern
const SOL_STR: &str = r"^"; // Declarations must start in column 1

// Shared `, PARAMETER ::` tail of a constant declaration
const PARAM_TAIL_STR: &str = r"\s*,\s*PARAMETER\s*::\s*";

// ===== DECLARATION PREFIXES =====

// INTEGER, PARAMETER ::
pub static INT_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(&format!(r"{SOL_STR}INTEGER{PARAM_TAIL_STR}")));

/// Build the `REAL(<kind>), PARAMETER ::` prefix regex for a kind parameter.
///
/// The kind is escaped, so any string yields a valid pattern.
#[must_use]
pub fn build_real_param_re(kind: &str) -> Regex {
    let kind = regex::escape(kind);
    build_re(&format!(
        r"{SOL_STR}REAL\s*\(\s*{kind}\s*\){PARAM_TAIL_STR}"
    ))
}

// ===== NUMERIC LITERALS =====

// Z'FF' or Z"FF"
pub static HEX_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r#"\bZ(?:'([0-9A-F]+)'|"([0-9A-F]+)")"#));

// 2.99D8, 1D-3, .5D+2 (mantissa must not continue an identifier)
pub static D_EXPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"(?:\b\d+(?:\.\d*)?|\.\d+)D[+-]?\d+"));
