//! Lexical conventions of the Fortran sources being scanned.
//!
//! A [`Dialect`] bundles the characters and prefixes the translator needs to
//! recognize a constant declaration: comment introducer, continuation
//! marker, the `$` splice sigil used in Bmad-style names, and the kind
//! parameter that marks double-precision reals.

use regex::Regex;

use super::patterns::{build_real_param_re, INT_PARAM_RE};
use crate::translate::DeclKind;

/// Kind parameter used by Bmad for double-precision reals
pub const DEFAULT_REAL_KIND: &str = "RP";

#[derive(Debug, Clone)]
pub struct Dialect {
    /// Starts a comment that runs to end of line
    pub comment: char,
    /// Trailing marker joining a statement with the next physical line
    pub continuation: char,
    /// Character allowed in names that has no C++ counterpart
    pub sigil: char,
    /// Kind parameter of double-precision reals, uppercase (e.g. `RP`)
    pub real_kind: String,
    /// Literal suffix derived from the kind (e.g. `_RP`)
    pub precision_suffix: String,
    real_param_re: Regex,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::new(DEFAULT_REAL_KIND)
    }
}

impl Dialect {
    /// Create a dialect whose double-precision kind parameter is `real_kind`
    #[must_use]
    pub fn new(real_kind: &str) -> Self {
        let real_kind = real_kind.trim().to_uppercase();
        Self {
            comment: '!',
            continuation: '&',
            sigil: '$',
            precision_suffix: format!("_{real_kind}"),
            real_param_re: build_real_param_re(&real_kind),
            real_kind,
        }
    }

    /// Truncate `line` at the first comment introducer and drop trailing whitespace
    #[must_use]
    pub fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        let code = match line.find(self.comment) {
            Some(pos) => &line[..pos],
            None => line,
        };
        code.trim_end()
    }

    /// Replace a leading `INTEGER, PARAMETER ::` or `REAL(<kind>), PARAMETER ::`
    /// with the matching C++ declaration keyword
    ///
    /// Returns `None` if the line does not start a constant declaration.
    #[must_use]
    pub fn substitute_prefix(&self, line: &str) -> Option<(DeclKind, String)> {
        let (kind, re) = if INT_PARAM_RE.is_match(line) {
            (DeclKind::Int, &*INT_PARAM_RE)
        } else if self.real_param_re.is_match(line) {
            (DeclKind::Double, &self.real_param_re)
        } else {
            return None;
        };
        let rewritten = re.replace(line, kind.cpp_prefix()).into_owned();
        Some((kind, rewritten))
    }

    /// Split off continuation markers
    ///
    /// A marker leading a continuation line is dropped, keeping the line's
    /// indent. Returns the remaining text and whether a trailing marker was
    /// present, i.e. whether the statement continues on the next line.
    ///
    /// The trailing marker is checked first, so a line holding only the
    /// marker keeps the statement open.
    #[must_use]
    pub fn split_continuation(&self, line: &str) -> (String, bool) {
        let body = line.trim_start();
        let indent = &line[..line.len() - body.len()];
        match body.trim_end().strip_suffix(self.continuation) {
            Some(rest) => {
                let rest = rest.strip_prefix(self.continuation).unwrap_or(rest);
                (format!("{indent}{}", rest.trim_end()), true)
            }
            None => {
                let body = body.strip_prefix(self.continuation).unwrap_or(body);
                (format!("{indent}{body}"), false)
            }
        }
    }
}
