//! Error types and result aliases for fconstgen.
//!
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//! - [`GenerateError`]: Fatal conditions raised while reading input sources
//!
//! Lines that are not recognized as constant declarations are never errors;
//! they are dropped by the translator.

use std::io;
use std::path::PathBuf;

use anyhow::Result as AnyhowResult;
use thiserror::Error;

pub type Result<T> = AnyhowResult<T>;

#[derive(Error, Debug)]
pub enum GenerateError {
    /// An input path does not exist or could not be read to the end
    #[error("cannot read input file {}: {source}", .path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
