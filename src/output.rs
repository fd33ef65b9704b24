//! Output management module
//!
//! Handles result-file naming and serialization. Results are joined with
//! `\n` and written in one shot; the joined form carries no trailing
//! newline, so an empty result produces a zero-length file.

use crate::error::BatchError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writer for per-file results inside a fixed output directory.
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Destination path for an input file's results.
    pub fn destination(&self, input: &Path) -> PathBuf {
        self.output_dir.join(result_file_name(input))
    }

    /// Serialize and overwrite the result file, returning its path.
    pub fn write(&self, input: &Path, values: &[f64]) -> Result<PathBuf, BatchError> {
        let dest = self.destination(input);
        let content = render(values);

        fs::write(&dest, content).map_err(|source| BatchError::WriteError {
            path: dest.clone(),
            source,
        })?;

        Ok(dest)
    }
}

/// Generate the result file name from an input file name.
///
/// The full input name is kept, extension included: `numbers.txt` maps to
/// `numbers.txt_result.txt`.
pub fn result_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    format!("{}_result.txt", name)
}

/// Join values with newlines using their shortest decimal form
/// (`5.0` renders as `5`, `3.9` as `3.9`). No trailing newline.
pub fn render(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ensure the output directory exists, creating missing parents.
pub fn ensure_output_dir(path: &Path) -> Result<(), BatchError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| BatchError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_result_file_name() {
        let input = Path::new("/path/to/numbers.txt");
        assert_eq!(result_file_name(input), "numbers.txt_result.txt");
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&[-7.0, 3.9, 5.0, 42.0]), "-7\n3.9\n5\n42");
        assert_eq!(render(&[5.0]), "5");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_write_results() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ResultWriter::new(temp_dir.path().to_path_buf());

        let dest = writer.write(Path::new("numbers.txt"), &[-7.0, 5.0]).unwrap();
        assert_eq!(dest, temp_dir.path().join("numbers.txt_result.txt"));

        let content = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(content, "-7\n5");
    }

    #[test]
    fn test_write_empty_results_creates_zero_length_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ResultWriter::new(temp_dir.path().to_path_buf());

        let dest = writer.write(Path::new("empty.txt"), &[]).unwrap();

        let metadata = std::fs::metadata(&dest).unwrap();
        assert_eq!(metadata.len(), 0);
    }

    #[test]
    fn test_write_overwrites_previous_run() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ResultWriter::new(temp_dir.path().to_path_buf());

        writer.write(Path::new("a.txt"), &[1.0, 2.0, 3.0]).unwrap();
        let dest = writer.write(Path::new("a.txt"), &[9.0]).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(content, "9");
    }

    #[test]
    fn test_ensure_output_dir_nested() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("results");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call on an existing directory is a no-op.
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let writer = ResultWriter::new(missing);

        let err = writer.write(Path::new("a.txt"), &[1.0]).unwrap_err();
        assert!(matches!(err, BatchError::WriteError { .. }));
    }
}
