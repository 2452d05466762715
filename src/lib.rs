//! fconstgen - C++ constants header generator for Fortran sources
//!
//! Scans Fortran modules for scalar `INTEGER`/`REAL(RP)` `PARAMETER`
//! declarations and re-emits them as `const int`/`const double` declarations
//! inside a C++ namespace, so numeric constants are defined once.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod process;
pub mod translate;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::{GenerateError, Result};
pub use parser::Dialect;
pub use translate::{DeclKind, EmittedDeclaration, LineTranslator};
