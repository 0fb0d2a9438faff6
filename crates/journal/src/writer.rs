use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::record::TurnRecord;

/// Append-only JSON-lines journal.
pub struct Journal {
    path: PathBuf,
    out: BufWriter<File>,
}

impl Journal {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self {
            path,
            out: BufWriter::new(file),
        })
    }

    /// Write one record and flush, so a crash loses at most the current turn.
    pub fn write(&mut self, record: &TurnRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)
            .with_context(|| format!("encode turn {}", record.turn))?;
        self.out.write_all(b"\n")?;
        self.out
            .flush()
            .with_context(|| format!("flush journal {}", self.path.display()))?;
        Ok(())
    }
}
