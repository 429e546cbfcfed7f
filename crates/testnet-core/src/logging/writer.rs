//! Append-only JSONL file per portal instance.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::JsonLogEntry;

/// Appends entries to `<logs_dir>/<date>_<instance>.jsonl`.
pub struct InstanceLogWriter {
    instance: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl InstanceLogWriter {
    pub fn new(logs_dir: impl AsRef<Path>, instance: impl Into<String>) -> std::io::Result<Self> {
        let instance = instance.into();
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = logs_dir.join(format!("{}_{}.jsonl", date, instance));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            instance,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a single line and flush.
    pub fn write(&self, entry: &JsonLogEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.writer.lock().flush()
    }
}

impl Drop for InstanceLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Read every entry from every `.jsonl` file in `logs_dir`, oldest first.
///
/// Lines that fail to parse are skipped.
pub fn read_entries(logs_dir: impl AsRef<Path>) -> std::io::Result<Vec<JsonLogEntry>> {
    let logs_dir = logs_dir.as_ref();
    if !logs_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(logs_dir)? {
        let path = dir_entry?.path();
        if path.extension().is_some_and(|ext| ext == "jsonl") {
            let reader = BufReader::new(File::open(&path)?);
            for line in reader.lines() {
                let line = line?;
                if let Ok(entry) = JsonLogEntry::from_json_line(&line) {
                    entries.push(entry);
                }
            }
        }
    }

    entries.sort_by(|a, b| a.ts.cmp(&b.ts));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writer_appends_lines() {
        let temp = TempDir::new().unwrap();
        let writer = InstanceLogWriter::new(temp.path(), "main").unwrap();

        writer
            .write(&JsonLogEntry::new("info", "main", "test", "first"))
            .unwrap();
        writer
            .write(&JsonLogEntry::new("warn", "main", "test", "second"))
            .unwrap();

        let file_name = writer.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.ends_with("_main.jsonl"));

        let entries = read_entries(temp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "first");
        assert_eq!(entries[1].level, "warn");
    }

    #[test]
    fn test_missing_dir_reads_empty() {
        let temp = TempDir::new().unwrap();
        assert!(read_entries(temp.path().join("nope")).unwrap().is_empty());
    }
}
