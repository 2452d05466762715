//! Stateful line-by-line translator
//!
//! [`LineTranslator`] turns one physical Fortran line at a time into at most
//! one C++ line. The only state carried between lines is whether the last
//! emitted line ended in a continuation marker.

use std::fmt;

use super::rewrite::apply_rewrites;
use crate::parser::Dialect;

/// Default number of spaces before each emitted declaration line
pub const DEFAULT_INDENT: usize = 2;

/// Type of a recognized constant declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `INTEGER, PARAMETER ::`
    Int,
    /// `REAL(RP), PARAMETER ::`
    Double,
}

impl DeclKind {
    /// C++ text replacing the Fortran declaration prefix
    #[must_use]
    pub fn cpp_prefix(self) -> &'static str {
        match self {
            DeclKind::Int => "const int ",
            DeclKind::Double => "const double ",
        }
    }
}

/// One translated line of C++ output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDeclaration {
    /// Translated text without indent or terminator
    pub text: String,
    /// `false` while the declaration continues on the next line
    pub terminated: bool,
    /// Set on the line that opened the declaration, `None` on continuation lines
    pub kind: Option<DeclKind>,
}

impl EmittedDeclaration {
    /// Render with `indent` leading spaces and a `;` if terminated
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let terminator = if self.terminated { ";" } else { "" };
        format!("{:indent$}{}{terminator}", "", self.text)
    }
}

impl fmt::Display for EmittedDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_INDENT))
    }
}

/// Translates Fortran `PARAMETER` declarations to C++ constants, line by line
///
/// Create one translator per input file; the continuation state never
/// crosses a file boundary.
#[derive(Debug)]
pub struct LineTranslator<'d> {
    dialect: &'d Dialect,
    continuation_pending: bool,
}

impl<'d> LineTranslator<'d> {
    #[must_use]
    pub fn new(dialect: &'d Dialect) -> Self {
        Self {
            dialect,
            continuation_pending: false,
        }
    }

    /// Whether the last emitted line left its declaration open
    #[must_use]
    pub fn continuation_pending(&self) -> bool {
        self.continuation_pending
    }

    /// Translate one physical source line
    ///
    /// Returns `None` for anything that is not (part of) a scalar integer or
    /// double-precision constant declaration.
    pub fn translate_line(&mut self, line: &str) -> Option<EmittedDeclaration> {
        let code = self.dialect.strip_comment(line);
        // Comment-only lines may sit inside a continued declaration
        if code.trim().is_empty() {
            return None;
        }

        let code = code.to_uppercase();
        // Array constructors: (/ ... /) is caught by the paren guard below
        if code.contains('[') {
            return None;
        }

        let (kind, code) = match self.dialect.substitute_prefix(&code) {
            Some((kind, rewritten)) => (Some(kind), rewritten),
            None if self.continuation_pending => (None, code),
            None => return None,
        };

        // Sized declarations such as `N(3)`, or values computed by a call
        if code.contains('(') {
            return None;
        }

        let code = apply_rewrites(&code, self.dialect);
        let (text, continued) = self.dialect.split_continuation(&code);
        self.continuation_pending = continued;

        Some(EmittedDeclaration {
            text,
            terminated: !continued,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_all(lines: &[&str]) -> Vec<String> {
        let dialect = Dialect::default();
        let mut translator = LineTranslator::new(&dialect);
        lines
            .iter()
            .filter_map(|line| translator.translate_line(line))
            .map(|decl| decl.to_string())
            .collect()
    }

    fn translate_one(line: &str) -> Option<String> {
        let dialect = Dialect::default();
        LineTranslator::new(&dialect)
            .translate_line(line)
            .map(|decl| decl.to_string())
    }

    #[test]
    fn test_integer_parameter() {
        assert_eq!(
            translate_one("integer, parameter :: n_pole_maxx = 21"),
            Some("  const int N_POLE_MAXX = 21;".to_string())
        );
    }

    #[test]
    fn test_real_parameter() {
        assert_eq!(
            translate_one("real(rp), parameter :: pi = 3.14159265358979_rp"),
            Some("  const double PI = 3.14159265358979;".to_string())
        );
    }

    #[test]
    fn test_case_insensitive() {
        let upper = translate_one("INTEGER, PARAMETER :: ELECTRON$ = -1");
        assert_eq!(translate_one("integer, parameter :: electron$ = -1"), upper);
        assert_eq!(translate_one("Integer, Parameter :: Electron$ = -1"), upper);
        assert_eq!(upper, Some("  const int ELECTRON = -1;".to_string()));
    }

    #[test]
    fn test_hex_conversion() {
        assert_eq!(
            translate_one("INTEGER, PARAMETER :: MASK = Z'FF'"),
            Some("  const int MASK = 0xFF;".to_string())
        );
    }

    #[test]
    fn test_exponent_conversion() {
        assert_eq!(
            translate_one("REAL(RP), PARAMETER :: C_LIGHT = 2.99D8"),
            Some("  const double C_LIGHT = 2.99E8;".to_string())
        );
    }

    #[test]
    fn test_suffix_strip() {
        assert_eq!(
            translate_one("REAL(RP), PARAMETER :: ONE = 1.0_RP"),
            Some("  const double ONE = 1.0;".to_string())
        );
    }

    #[test]
    fn test_array_exclusion() {
        assert_eq!(translate_one("INTEGER, PARAMETER :: ARR(3) = 0"), None);
        assert_eq!(translate_one("INTEGER, PARAMETER :: ARR = [1, 2, 3]"), None);
        assert_eq!(
            translate_one("REAL(RP), PARAMETER :: V = (/ 1.0, 2.0 /)"),
            None
        );
        assert_eq!(
            translate_one("REAL(RP), PARAMETER :: TWOPI = 2 * ACOS(-1.0_RP)"),
            None
        );
    }

    #[test]
    fn test_comment_stripping() {
        assert_eq!(
            translate_one("INTEGER, PARAMETER :: N = 3 ! was 1D6 before"),
            Some("  const int N = 3;".to_string())
        );
        // Exponent in the comment must not trigger a rewrite of the code
        assert_eq!(
            translate_one("REAL(RP), PARAMETER :: X1D2 = 1.5 ! 2D3"),
            Some("  const double X1D2 = 1.5;".to_string())
        );
    }

    #[test]
    fn test_non_declarations_dropped() {
        assert!(translate_all(&[
            "module physical_constants",
            "implicit none",
            "integer :: counter",
            "real(rp) :: scratch = 1.0_rp",
            "x = 2.5d3",
            "character(*), parameter :: name = 'bmad'",
            "logical, parameter :: debug = .false.",
            "end module",
        ])
        .is_empty());
    }

    #[test]
    fn test_indented_declaration_dropped() {
        // Prefix must start in column 1
        assert_eq!(translate_one("  integer, parameter :: n = 3"), None);
    }

    #[test]
    fn test_continuation_reconstruction() {
        let output = translate_all(&[
            "integer, parameter :: off$ = 1, &",
            "                      on$ = 2",
        ]);
        assert_eq!(
            output,
            vec![
                "  const int OFF = 1,".to_string(),
                "                        ON = 2;".to_string(),
            ]
        );
    }

    #[test]
    fn test_continuation_over_several_lines() {
        let output = translate_all(&[
            "integer, parameter :: val1$ = 1, val2$ = 2, &",
            "            val3$ = 3, val4$ = 4, &   ! trailing comment",
            "",
            "! comment inside the declaration",
            "            val5$ = 5",
            "integer, parameter :: done$ = 6",
        ]);
        assert_eq!(
            output,
            vec![
                "  const int VAL1 = 1, VAL2 = 2,".to_string(),
                "              VAL3 = 3, VAL4 = 4,".to_string(),
                "              VAL5 = 5;".to_string(),
                "  const int DONE = 6;".to_string(),
            ]
        );
    }

    #[test]
    fn test_marker_only_line_keeps_declaration_open() {
        let output = translate_all(&[
            "integer, parameter :: a = 1, &",
            "     &",
            "   b = 2",
        ]);
        assert_eq!(
            output,
            vec![
                "  const int A = 1,".to_string(),
                "       ".to_string(),
                "     B = 2;".to_string(),
            ]
        );
    }

    #[test]
    fn test_continuation_state() {
        let dialect = Dialect::default();
        let mut translator = LineTranslator::new(&dialect);
        assert!(!translator.continuation_pending());

        let first = translator
            .translate_line("real(rp), parameter :: a = 1, &")
            .unwrap();
        assert!(!first.terminated);
        assert_eq!(first.kind, Some(DeclKind::Double));
        assert!(translator.continuation_pending());

        let second = translator.translate_line("   b = 2").unwrap();
        assert!(second.terminated);
        assert_eq!(second.kind, None);
        assert!(!translator.continuation_pending());

        // No longer inside a declaration
        assert!(translator.translate_line("   c = 3").is_none());
    }

    #[test]
    fn test_skipped_continuation_line_keeps_state() {
        let dialect = Dialect::default();
        let mut translator = LineTranslator::new(&dialect);
        translator.translate_line("integer, parameter :: a = 1, &");
        assert!(translator.translate_line("   b(2) = 2, &").is_none());
        assert!(translator.continuation_pending());
    }

    #[test]
    fn test_new_declaration_while_continuation_pending() {
        let output = translate_all(&[
            "integer, parameter :: a = 1, &",
            "integer, parameter :: b = 2",
        ]);
        assert_eq!(
            output,
            vec![
                "  const int A = 1,".to_string(),
                "  const int B = 2;".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_indent() {
        let decl = EmittedDeclaration {
            text: "const int N = 3".to_string(),
            terminated: true,
            kind: Some(DeclKind::Int),
        };
        assert_eq!(decl.render(4), "    const int N = 3;");
        assert_eq!(decl.render(0), "const int N = 3;");

        let open = EmittedDeclaration {
            terminated: false,
            ..decl
        };
        assert_eq!(open.to_string(), "  const int N = 3");
    }

    #[test]
    fn test_idempotent() {
        let lines = [
            "integer, parameter :: a$ = 1, &",
            "    b$ = Z'10'",
            "real(rp), parameter :: c = 6.02214129d23",
        ];
        assert_eq!(translate_all(&lines), translate_all(&lines));
    }
}
