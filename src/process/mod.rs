//! Header generation.
//!
//! This module turns the configured list of Fortran sources into one C++
//! header:
//!
//! - [`header`]: The fixed preamble/postamble (include guard, `TRUE`/`FALSE`
//!   workaround, namespace)
//! - [`pipeline`]: Per-file translation with a fresh [`LineTranslator`] and
//!   whole-document rendering
//!
//! The main entry points are [`render_header`], which renders the document in
//! memory, and [`write_header`], which writes it out.
//!
//! [`LineTranslator`]: crate::translate::LineTranslator

pub mod header;
pub mod pipeline;

pub use header::HeaderLayout;
pub use pipeline::{
    render_header, translate_file, translate_path, write_header, FileSummary, GeneratedHeader,
};
