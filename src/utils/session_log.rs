//! Console output with an optional file copy.
//!
//! Every line written through a [`SessionLog`] goes to stdout and, when the
//! log was opened with a path, to that file as well. A file log starts with
//! a header carrying the session start time and ends with a footer written
//! when the log is dropped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;

pub struct SessionLog {
    file: Option<BufWriter<File>>,
    lines: usize,
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`
#[cfg(unix)]
fn timestamp() -> String {
    let mut buf = [0u8; 32];
    // SAFETY: `tm` is filled by localtime_r before strftime reads it, and
    // strftime writes at most `buf.len()` bytes including the terminator
    let written = unsafe {
        let now = libc::time(std::ptr::null_mut());
        let mut tm: libc::tm = std::mem::zeroed();
        if libc::localtime_r(&now, &mut tm).is_null() {
            0
        } else {
            libc::strftime(
                buf.as_mut_ptr().cast(),
                buf.len(),
                b"%F %T\0".as_ptr().cast(),
                &tm,
            )
        }
    };
    if written == 0 {
        return format!("unix time {}", unix_seconds());
    }
    String::from_utf8_lossy(&buf[..written]).into_owned()
}

#[cfg(not(unix))]
fn timestamp() -> String {
    format!("unix time {}", unix_seconds())
}

impl SessionLog {
    /// Log to stdout only.
    pub fn stdout() -> Self {
        Self {
            file: None,
            lines: 0,
        }
    }

    /// Log to stdout and to a freshly created file at `path`.
    ///
    /// # Errors
    /// [`crate::LabError::Io`] if the file cannot be created or written.
    pub fn to_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = BufWriter::new(File::create(path)?);
        writeln!(file, "# session started at {}", timestamp())?;
        Ok(Self {
            file: Some(file),
            lines: 0,
        })
    }

    /// `to_file` when a path is given, `stdout` otherwise
    pub fn open(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::to_file(p),
            None => Ok(Self::stdout()),
        }
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Write one line.
    ///
    /// A failed file write drops the file copy and reports once on stderr;
    /// stdout output continues.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        println!("{}", text);
        self.lines += 1;
        if let Some(file) = &mut self.file {
            if let Err(e) = writeln!(file, "{}", text) {
                eprintln!("session log: {}; continuing on stdout only", e);
                self.file = None;
            }
        }
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    /// Lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flush the file copy.
    pub fn flush(&mut self) -> io::Result<()> {
        match &mut self.file {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for SessionLog {
    fn drop(&mut self) {
        if let Some(file) = &mut self.file {
            let _ = writeln!(
                file,
                "# session ended at {} after {} lines",
                timestamp(),
                self.lines
            );
            let _ = file.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_log_counts_lines() {
        let mut log = SessionLog::stdout();
        log.line("a");
        log.blank();
        assert_eq!(log.lines_written(), 2);
        assert!(!log.has_file());
    }

    #[test]
    fn test_file_log_has_header_body_and_footer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        {
            let mut log = SessionLog::to_file(&path).unwrap();
            log.line("matrix[2,2]");
            log.line(format!("{} {}", 1, 2));
        }
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("# session started at "));
        assert_eq!(lines[1], "matrix[2,2]");
        assert_eq!(lines[2], "1 2");
        assert!(lines[3].ends_with("after 2 lines"));
    }

    #[cfg(unix)]
    #[test]
    fn test_timestamp_is_date_and_time() {
        let ts = timestamp();
        let bytes = ts.as_bytes();
        assert_eq!(ts.len(), 19, "{}", ts);
        assert_eq!(
            (bytes[4], bytes[7], bytes[10], bytes[13], bytes[16]),
            (b'-', b'-', b' ', b':', b':')
        );
        assert!(ts
            .bytes()
            .enumerate()
            .all(|(i, b)| [4, 7, 10, 13, 16].contains(&i) || b.is_ascii_digit()));
    }

    #[test]
    fn test_open_without_path() {
        assert!(!SessionLog::open(None).unwrap().has_file());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("session.log");
        assert!(matches!(
            SessionLog::to_file(path),
            Err(crate::error::LabError::Io(_))
        ));
    }
}
