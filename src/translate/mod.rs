//! Fortran to C++ constant translation.
//!
//! This module contains the line-by-line translation logic:
//! - [`translator`]: [`LineTranslator`], the stateful per-file scanner
//! - [`rewrite`]: Ordered table of literal and name rewrites applied to
//!   recognized declaration lines
//!
//! Lines that cannot be translated with confidence (arrays, sized
//! declarations, non-parameter statements) are dropped rather than
//! partially translated.

pub mod rewrite;
pub mod translator;

pub use rewrite::{apply_rewrites, Rewrite, REWRITE_PIPELINE};
pub use translator::{DeclKind, EmittedDeclaration, LineTranslator};
