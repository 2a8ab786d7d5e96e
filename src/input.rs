// THEORY:
// The `input` module is the thin acquisition layer in front of the analyzer. It turns
// a file or stream into the ordered list of rows the core expects. Blank lines are
// dropped here, never in the core, so the analyzer only ever sees real grid rows.

use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path value that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not find {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads every non-blank line from `reader`, in order.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        debug!("read line: {}", line);
        lines.push(line);
    }
    Ok(lines)
}

/// Reads the grid rows from `path`, or from stdin when `path` is `-`.
pub fn load_rows(path: &Path) -> Result<Vec<String>, InputError> {
    if path.as_os_str() == STDIN_PATH {
        return read_lines(io::stdin().lock()).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        });
    }

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    read_lines(BufReader::new(file)).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn skips_blank_lines() {
        let text = "**--\n\n   \n-*--\n\t\n";
        let lines = read_lines(Cursor::new(text)).unwrap();
        assert_eq!(lines, vec!["**--", "-*--"]);
    }

    #[test]
    fn keeps_surrounding_whitespace_of_real_rows() {
        let lines = read_lines(Cursor::new(" * \n")).unwrap();
        assert_eq!(lines, vec![" * "]);
    }

    #[test]
    fn handles_crlf() {
        let lines = read_lines(Cursor::new("**\r\n-*\r\n")).unwrap();
        assert_eq!(lines, vec!["**", "-*"]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "**----").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "-*----").unwrap();
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows, vec!["**----", "-*----"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groups.txt");
        let err = load_rows(&path).unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
        assert!(err.to_string().starts_with("could not find"));
    }
}
