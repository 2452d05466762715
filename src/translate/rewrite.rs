//! Literal and name rewrites for recognized declarations
//!
//! Each [`Rewrite`] pairs a predicate ([`Rewrite::matches`]) with a
//! substitution ([`Rewrite::apply`]). [`REWRITE_PIPELINE`] fixes the order in
//! which they run on a line whose declaration prefix was already replaced.

use std::borrow::Cow;

use regex::Captures;

use crate::parser::patterns::{D_EXPONENT_RE, HEX_LITERAL_RE};
use crate::parser::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// `ELECTRON$` -> `ELECTRON`
    StripSigil,
    /// `Z'FF'` -> `0xFF`
    HexLiteral,
    /// `2.99D8` -> `2.99E8`, first literal right of `=` only
    DoubleExponent,
    /// `1.0_RP` at end of line -> `1.0`
    PrecisionSuffix,
}

/// Rewrites in application order
pub const REWRITE_PIPELINE: [Rewrite; 4] = [
    Rewrite::StripSigil,
    Rewrite::HexLiteral,
    Rewrite::DoubleExponent,
    Rewrite::PrecisionSuffix,
];

impl Rewrite {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rewrite::StripSigil => "strip-sigil",
            Rewrite::HexLiteral => "hex-literal",
            Rewrite::DoubleExponent => "double-exponent",
            Rewrite::PrecisionSuffix => "precision-suffix",
        }
    }

    /// Check whether this rewrite would change `line`
    #[must_use]
    pub fn matches(self, line: &str, dialect: &Dialect) -> bool {
        match self {
            Rewrite::StripSigil => line.contains(dialect.sigil),
            Rewrite::HexLiteral => HEX_LITERAL_RE.is_match(line),
            Rewrite::DoubleExponent => exponent_letter_pos(line).is_some(),
            Rewrite::PrecisionSuffix => line.ends_with(dialect.precision_suffix.as_str()),
        }
    }

    /// Apply this rewrite, borrowing `line` unchanged when it does not match
    #[must_use]
    pub fn apply<'a>(self, line: &'a str, dialect: &Dialect) -> Cow<'a, str> {
        match self {
            Rewrite::StripSigil => {
                if line.contains(dialect.sigil) {
                    Cow::Owned(line.replace(dialect.sigil, ""))
                } else {
                    Cow::Borrowed(line)
                }
            }
            Rewrite::HexLiteral => HEX_LITERAL_RE.replace_all(line, |caps: &Captures| {
                let digits = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                format!("0x{digits}")
            }),
            Rewrite::DoubleExponent => match exponent_letter_pos(line) {
                Some(pos) => {
                    let mut rewritten = line.to_string();
                    rewritten.replace_range(pos..=pos, "E");
                    Cow::Owned(rewritten)
                }
                None => Cow::Borrowed(line),
            },
            Rewrite::PrecisionSuffix => match line.strip_suffix(dialect.precision_suffix.as_str()) {
                Some(rest) => Cow::Owned(rest.to_string()),
                None => Cow::Borrowed(line),
            },
        }
    }
}

/// Byte position of the exponent letter in the first `D`-exponent literal
/// on the right-hand side of the first `=`
fn exponent_letter_pos(line: &str) -> Option<usize> {
    let rhs_start = line.find('=')? + 1;
    let literal = D_EXPONENT_RE.find_at(line, rhs_start)?;
    literal
        .as_str()
        .find(|c: char| c.eq_ignore_ascii_case(&'D'))
        .map(|offset| literal.start() + offset)
}

/// Run every rewrite of [`REWRITE_PIPELINE`] over `line` in order
#[must_use]
pub fn apply_rewrites(line: &str, dialect: &Dialect) -> String {
    let mut current = line.to_string();
    for rewrite in REWRITE_PIPELINE {
        if !rewrite.matches(&current, dialect) {
            continue;
        }
        let rewritten = rewrite.apply(&current, dialect).into_owned();
        tracing::trace!(rule = rewrite.name(), before = %current, after = %rewritten);
        current = rewritten;
    }
    current
}
