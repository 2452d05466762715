//! Fortran source recognition utilities.
//!
//! This module provides what the translator needs to read Fortran declarations:
//! - [`Dialect`]: Comment, continuation and kind conventions of the sources
//! - [`patterns`]: Precompiled regex patterns for declaration prefixes and literals
//!
//! Recognition is deliberately line-oriented: a fixed set of patterns, not a
//! grammar, since only a handful of declaration shapes are of interest.

pub mod dialect;
pub mod patterns;

pub use dialect::{Dialect, DEFAULT_REAL_KIND};
