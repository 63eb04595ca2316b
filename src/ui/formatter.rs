//! Output sink and formatting for everything git-bump prints.
//!
//! Nothing in here writes to the process streams directly: all text goes through
//! an [Output], so quiet mode and tests swap the streams instead of patching
//! global state.

use std::io::{self, Write};

use console::style;

use crate::analyzer::VersionSet;
use crate::boundary::BoundaryWarning;

/// Two independent text streams: normal progress output and warnings.
pub struct Output {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Output {
    pub fn new(out: impl Write + 'static, err: impl Write + 'static) -> Self {
        Output {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// Write to the process stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Discard everything
    pub fn quiet() -> Self {
        Self::new(io::sink(), io::sink())
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn err(&mut self) -> &mut dyn Write {
        &mut *self.err
    }
}

/// List all versions lowest first, marking the highest as current.
///
/// ```text
/// Tags:
/// - v1.0.0
/// - v1.1.0 (current version)
/// ```
pub fn display_versions(output: &mut Output, versions: &VersionSet) -> io::Result<()> {
    let out = output.out();
    let last = versions.count().saturating_sub(1);

    writeln!(out, "Tags:")?;
    for (i, version) in versions.iter().enumerate() {
        if i == last {
            writeln!(
                out,
                "- {} {}",
                style(version.original()).green().bold(),
                style("(current version)").dim()
            )?;
        } else {
            writeln!(out, "- {}", version.original())?;
        }
    }
    writeln!(out)
}

/// Milestone: the tag exists locally
pub fn display_tag_created(output: &mut Output, tag: &str) -> io::Result<()> {
    writeln!(output.out(), "Bump version to {:?}.", tag)
}

/// Milestone: the remote accepted the tag
pub fn display_pushed(output: &mut Output, remote: &str) -> io::Result<()> {
    writeln!(output.out(), "Pushed to {}.", remote)
}

/// Show a non-fatal warning on the error stream
pub fn display_boundary_warning(output: &mut Output, warning: &BoundaryWarning) -> io::Result<()> {
    writeln!(
        output.err(),
        "{} {}",
        style("⚠ WARNING:").yellow().for_stderr(),
        warning
    )
}

/// Format a fatal error the way the binary reports it
pub fn format_error(message: &str) -> String {
    format!("[ERROR] {}", message)
}
