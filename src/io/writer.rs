//! Writing solutions in the report format consumed downstream.

use crate::model::Category;
use crate::sink::SolutionSink;
use crate::state::Roster;
use std::fmt::Write as _;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Renders one solution block:
///
/// ```text
/// 0.3
/// POR: Courtois
/// DEF: Carvajal;Militao;Alaba;Mendy
/// MIG: Pedri;Gavi;Modric;Kroos
/// DAV: Lewandowski;Vinicius
/// Punts: 1045
/// Preu: 298
///
/// ```
pub fn format_solution(roster: &Roster, elapsed: Duration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:.1}", elapsed.as_secs_f64());
    for category in Category::ALL {
        let _ = writeln!(
            out,
            "{}: {}",
            category.code().to_uppercase(),
            roster.names(category).join(";")
        );
    }
    let _ = writeln!(out, "Punts: {}", roster.score);
    let _ = writeln!(out, "Preu: {}", roster.price);
    out.push('\n');
    out
}

/// How a [`FileSink`] treats successive solutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// The file holds only the latest solution.
    #[default]
    Overwrite,
    /// Each solution is appended, keeping the improvement history.
    Append,
}

/// A [`SolutionSink`] writing every reported roster to a file.
///
/// Write failures do not interrupt the search: they are logged, the first
/// one is kept and returned by [`finish`](Self::finish).
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    mode: WriteMode,
    written: usize,
    error: Option<io::Error>,
}

impl FileSink {
    /// Creates the sink, truncating any existing file at `path`.
    pub fn create(path: impl AsRef<Path>, mode: WriteMode) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        File::create(&path)?;
        Ok(Self {
            path,
            mode,
            written: 0,
            error: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of solutions written successfully.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns the first write error, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn write(&self, text: &str) -> io::Result<()> {
        match self.mode {
            WriteMode::Overwrite => fs::write(&self.path, text),
            WriteMode::Append => OpenOptions::new()
                .append(true)
                .create(true)
                .open(&self.path)?
                .write_all(text.as_bytes()),
        }
    }
}

impl SolutionSink for FileSink {
    fn report(&mut self, roster: &Roster, elapsed: Duration) {
        match self.write(&format_solution(roster, elapsed)) {
            Ok(()) => self.written += 1,
            Err(err) => {
                warn!(event = "write_failed", path = %self.path.display(), error = %err);
                self.error.get_or_insert(err);
            }
        }
    }
}
