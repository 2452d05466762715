//! Command-line interface for fconstgen.
//!
//! Defines CLI arguments using clap builder API. Every argument is optional:
//! a bare `fconstgen` performs the configured run.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Fortran sources replacing the configured input list
    pub inputs: Vec<PathBuf>,

    /// Generated header path
    pub output: Option<PathBuf>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Write the header to stdout instead of the output file
    pub stdout: bool,

    /// Silent mode (no confirmation line)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("fconstgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a C++ constants header from Fortran PARAMETER declarations")
        .arg(
            Arg::new("inputs")
                .help("Fortran files to scan, in order [default: configured list]")
                .value_name("FILE")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Header file to generate [default: include/bmad_enums.h]")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file path [default: ./fconstgen.toml if present]")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Write the header to stdout instead of the output file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Do not print the confirmation line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from `std::env::args`
#[must_use]
pub fn parse_args() -> CliArgs {
    from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an explicit argument list (first item is the binary name)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    from_matches(&build_cli().get_matches_from(args))
}

fn from_matches(matches: &ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        stdout: matches.get_flag("stdout"),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = parse_args_from(vec!["fconstgen"]);
        assert!(args.inputs.is_empty());
        assert_eq!(args.output, None);
        assert_eq!(args.config, None);
        assert!(!args.stdout);
        assert!(!args.silent);
        assert!(!args.debug);
    }

    #[test]
    fn test_inputs_keep_order() {
        let args = parse_args_from(vec!["fconstgen", "b.f90", "a.f90", "c.f90"]);
        assert_eq!(
            args.inputs,
            vec![
                PathBuf::from("b.f90"),
                PathBuf::from("a.f90"),
                PathBuf::from("c.f90")
            ]
        );
    }

    #[test]
    fn test_output() {
        let args = parse_args_from(vec!["fconstgen", "-o", "gen/consts.h"]);
        assert_eq!(args.output, Some(PathBuf::from("gen/consts.h")));
        let args = parse_args_from(vec!["fconstgen", "--output", "x.h"]);
        assert_eq!(args.output, Some(PathBuf::from("x.h")));
    }

    #[test]
    fn test_config() {
        let args = parse_args_from(vec!["fconstgen", "--config", "my.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
        let args = parse_args_from(vec!["fconstgen", "-c", "my.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_flags() {
        let args = parse_args_from(vec!["fconstgen", "-s", "-S", "-D"]);
        assert!(args.stdout);
        assert!(args.silent);
        assert!(args.debug);

        let args = parse_args_from(vec!["fconstgen", "--stdout", "--silent", "--debug"]);
        assert!(args.stdout);
        assert!(args.silent);
        assert!(args.debug);
    }

    #[test]
    fn test_flags_with_inputs() {
        let args = parse_args_from(vec!["fconstgen", "--stdout", "consts.f90"]);
        assert!(args.stdout);
        assert_eq!(args.inputs, vec![PathBuf::from("consts.f90")]);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(build_cli()
            .try_get_matches_from(vec!["fconstgen", "--recursive"])
            .is_err());
    }
}
