//! Header generation pipeline
//!
//! Implements the batch run:
//! - Render the preamble
//! - Translate each input file in order, appending its declarations
//! - Render the postamble
//!
//! The document is assembled in memory so a missing input never leaves a
//! truncated header behind.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::header::HeaderLayout;
use crate::config::Config;
use crate::error::GenerateError;
use crate::parser::Dialect;
use crate::translate::{DeclKind, LineTranslator};
use crate::Result;

/// Counts gathered while translating one input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSummary {
    /// Physical lines read
    pub lines_read: usize,
    /// Output lines written, continuation lines included
    pub lines_emitted: usize,
    /// `const int` declarations opened
    pub int_decls: usize,
    /// `const double` declarations opened
    pub double_decls: usize,
    /// The file ended inside a continued declaration
    pub unterminated: bool,
}

/// A fully rendered header and what went into it
#[derive(Debug, Clone)]
pub struct GeneratedHeader {
    pub contents: Vec<u8>,
    pub files: Vec<(PathBuf, FileSummary)>,
}

impl GeneratedHeader {
    /// Number of declaration lines across all inputs
    #[must_use]
    pub fn lines_emitted(&self) -> usize {
        self.files.iter().map(|(_, s)| s.lines_emitted).sum()
    }
}

/// Translate one Fortran source, appending C++ lines to `output`
///
/// Scanner state starts fresh for every call. `path` is used for error
/// reporting and logging only.
pub fn translate_file<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    dialect: &Dialect,
    indent: usize,
    path: &Path,
) -> Result<FileSummary> {
    let mut translator = LineTranslator::new(dialect);
    let mut summary = FileSummary::default();

    for raw in input.split(b'\n') {
        let raw = raw.map_err(|source| GenerateError::MissingInputFile {
            path: path.to_path_buf(),
            source,
        })?;
        summary.lines_read += 1;

        // Comments may hold non-UTF-8 text; they are discarded anyway
        let line = String::from_utf8_lossy(&raw);
        let line = line.strip_suffix('\r').unwrap_or(line.as_ref());

        let Some(decl) = translator.translate_line(line) else {
            continue;
        };
        match decl.kind {
            Some(DeclKind::Int) => summary.int_decls += 1,
            Some(DeclKind::Double) => summary.double_decls += 1,
            None => {}
        }
        let rendered = decl.render(indent);
        tracing::trace!(file = %path.display(), line = summary.lines_read, "{rendered}");
        writeln!(output, "{rendered}")?;
        summary.lines_emitted += 1;
    }

    if translator.continuation_pending() {
        tracing::warn!(
            file = %path.display(),
            "file ends inside a continued declaration; it is left unterminated"
        );
        summary.unterminated = true;
    }

    Ok(summary)
}

/// Open `path` and translate it into `output`
pub fn translate_path<W: Write>(
    path: &Path,
    output: &mut W,
    dialect: &Dialect,
    indent: usize,
) -> Result<FileSummary> {
    let file = File::open(path).map_err(|source| GenerateError::MissingInputFile {
        path: path.to_path_buf(),
        source,
    })?;
    translate_file(BufReader::new(file), output, dialect, indent, path)
}

/// Render the complete header for `config`
///
/// Relative input paths are resolved against `root`.
pub fn render_header(config: &Config, root: &Path) -> Result<GeneratedHeader> {
    let dialect = Dialect::new(&config.real_kind);
    let layout = HeaderLayout::new(&config.namespace, &config.include_guard);

    let mut contents = Vec::new();
    let mut files = Vec::with_capacity(config.inputs.len());

    layout.write_preamble(&mut contents)?;
    for input in &config.inputs {
        let path = resolve(root, input);
        let summary = translate_path(&path, &mut contents, &dialect, config.indent)?;
        tracing::debug!(
            file = %input.display(),
            lines = summary.lines_read,
            emitted = summary.lines_emitted,
            ints = summary.int_decls,
            doubles = summary.double_decls,
            "translated"
        );
        files.push((input.clone(), summary));
    }
    layout.write_postamble(&mut contents)?;

    Ok(GeneratedHeader { contents, files })
}

/// Write `contents` to `path`, creating missing parent directories
pub fn write_header(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

fn resolve<'a>(root: &Path, path: &'a Path) -> Cow<'a, Path> {
    if path.is_absolute() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(root.join(path))
    }
}
