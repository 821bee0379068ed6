//! File writer implementation

use crate::core::{LogEntry, LogWriter, Result, WriteOptions};
use serde_json::json;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Serialization format for file output, inferred from the target extension.
///
/// Unrecognized extensions fall back to [`FileFormat::Text`], a tab-delimited
/// record identical in shape to TSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Tsv,
    Xml,
    Json,
    Text,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => FileFormat::Csv,
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => FileFormat::Tsv,
            Some(ext) if ext.eq_ignore_ascii_case("xml") => FileFormat::Xml,
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Text,
        }
    }
}

/// Appends one formatted record per entry to a log file.
///
/// Each `write_log` call opens the file in append mode, writes one record,
/// and closes it again; no handle is held between calls. Appends from
/// multiple processes rely on OS-level append atomicity for single-record
/// safety only.
pub struct FileWriter {
    path: PathBuf,
    format: FileFormat,
}

impl FileWriter {
    /// Open the target log file, creating missing parent directories and the
    /// file itself (zero-byte) if absent. The serialization format is
    /// inferred from the path's extension.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new().create(true).append(true).open(&path)?;

        let format = FileFormat::from_path(&path);
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    fn format_entry(&self, entry: &LogEntry, options: &WriteOptions) -> Result<String> {
        let timestamp = options.timestamp_for(entry);
        let name = options.name_for(entry);

        Ok(match self.format {
            FileFormat::Csv => format!(
                "{},{},{}\n",
                csv_field(timestamp),
                csv_field(name),
                csv_field(&entry.message)
            ),
            FileFormat::Tsv | FileFormat::Text => {
                format!("{}\t{}\t{}\n", timestamp, name, entry.message)
            }
            FileFormat::Xml => format!(
                "<log><timestamp>{}</timestamp><priority>{}</priority><name>{}</name><message>{}</message></log>\n",
                xml_escape(timestamp),
                entry.priority.value(),
                xml_escape(name),
                xml_escape(&entry.message)
            ),
            FileFormat::Json => {
                let object = json!({
                    "timestamp": timestamp,
                    "priority": entry.priority.value(),
                    "name": name,
                    "message": entry.message,
                });
                let mut line = serde_json::to_string(&object)?;
                line.push('\n');
                line
            }
        })
    }
}

impl LogWriter for FileWriter {
    fn write_log(&mut self, entry: &LogEntry, options: &WriteOptions) -> Result<()> {
        let record = self.format_entry(entry, options)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Quote a CSV field when it contains the delimiter or a quote; embedded
/// quotes are doubled.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn xml_escape(field: &str) -> String {
    field
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Priority;
    use tempfile::tempdir;

    fn entry(message: &str) -> LogEntry {
        LogEntry::new("2026-08-23 10:30:45", Priority::Notice, message)
    }

    #[test]
    fn test_format_inference() {
        assert_eq!(FileFormat::from_path(Path::new("a.csv")), FileFormat::Csv);
        assert_eq!(FileFormat::from_path(Path::new("a.TSV")), FileFormat::Tsv);
        assert_eq!(FileFormat::from_path(Path::new("a.xml")), FileFormat::Xml);
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.log")), FileFormat::Text);
        assert_eq!(FileFormat::from_path(Path::new("noext")), FileFormat::Text);
    }

    #[test]
    fn test_open_creates_empty_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("app.log");
        assert!(!path.exists());

        FileWriter::open(&path)?;

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }

    #[test]
    fn test_csv_record_shape() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.csv");
        let mut writer = FileWriter::open(&path)?;

        writer.write_log(&entry("This is a CSV test."), &WriteOptions::default())?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "2026-08-23 10:30:45,NOTICE,This is a CSV test.\n"
        );
        Ok(())
    }

    #[test]
    fn test_csv_quoting() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.csv");
        let mut writer = FileWriter::open(&path)?;

        writer.write_log(
            &entry("hello, \"world\""),
            &WriteOptions::default(),
        )?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "2026-08-23 10:30:45,NOTICE,\"hello, \"\"world\"\"\"\n"
        );
        Ok(())
    }

    #[test]
    fn test_tsv_record_shape() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.tsv");
        let mut writer = FileWriter::open(&path)?;

        writer.write_log(&entry("This is a TSV test."), &WriteOptions::default())?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "2026-08-23 10:30:45\tNOTICE\tThis is a TSV test.\n"
        );
        Ok(())
    }

    #[test]
    fn test_xml_record_shape() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.xml");
        let mut writer = FileWriter::open(&path)?;

        writer.write_log(&entry("1 < 2 & 3 > 2"), &WriteOptions::default())?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "<log><timestamp>2026-08-23 10:30:45</timestamp>\
             <priority>5</priority><name>NOTICE</name>\
             <message>1 &lt; 2 &amp; 3 &gt; 2</message></log>\n"
        );
        Ok(())
    }

    #[test]
    fn test_json_record_shape() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.json");
        let mut writer = FileWriter::open(&path)?;

        writer.write_log(&entry("This is a JSON test."), &WriteOptions::default())?;

        let content = fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);

        let parsed: serde_json::Value = serde_json::from_str(lines[0])?;
        assert_eq!(parsed["timestamp"], "2026-08-23 10:30:45");
        assert_eq!(parsed["priority"], 5);
        assert_eq!(parsed["name"], "NOTICE");
        assert_eq!(parsed["message"], "This is a JSON test.");
        Ok(())
    }

    #[test]
    fn test_repeated_writes_append() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.log");
        let mut writer = FileWriter::open(&path)?;

        for i in 0..3 {
            writer.write_log(&entry(&format!("entry {i}")), &WriteOptions::default())?;
        }

        let content = fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("entry 0"));
        assert!(lines[2].ends_with("entry 2"));
        Ok(())
    }

    #[test]
    fn test_options_override_fields() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("test.tsv");
        let mut writer = FileWriter::open(&path)?;

        let options = WriteOptions::new()
            .with_timestamp("1999-12-31 23:59:59")
            .with_name("AUDIT");
        writer.write_log(&entry("override"), &options)?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "1999-12-31 23:59:59\tAUDIT\toverride\n");
        Ok(())
    }
}
