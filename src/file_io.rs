use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const EXPORT_DIR: &str = "exports";

/// Make a filename-safe stem from a quiz topic: alphanumerics kept,
/// whitespace collapsed to underscores, everything else dropped.
pub fn sanitize_file_stem(topic: &str) -> String {
    let stem: String = topic
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();

    if stem.is_empty() {
        "untitled".to_string()
    } else {
        stem
    }
}

pub fn export_path(file_name: &str) -> PathBuf {
    Path::new(EXPORT_DIR).join(file_name)
}

pub fn save_export(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_alphanumerics() {
        assert_eq!(sanitize_file_stem("Photosynthesis"), "Photosynthesis");
        assert_eq!(sanitize_file_stem("rust-101"), "rust-101");
    }

    #[test]
    fn test_sanitize_replaces_spaces() {
        assert_eq!(sanitize_file_stem("French Revolution"), "French_Revolution");
    }

    #[test]
    fn test_sanitize_drops_punctuation() {
        assert_eq!(sanitize_file_stem("What? Why: how!"), "What_Why_how");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_file_stem(""), "untitled");
        assert_eq!(sanitize_file_stem("???"), "untitled");
    }

    #[test]
    fn test_export_path_lands_in_export_dir() {
        let path = export_path("topic_quiz.csv");
        assert_eq!(path, Path::new("exports").join("topic_quiz.csv"));
    }

    #[test]
    fn test_save_export_creates_directory_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("quiz.csv");

        save_export(&path, b"Question,Answer\r\n").unwrap();

        let written = fs::read(&path).unwrap();
        assert_eq!(written, b"Question,Answer\r\n");
    }

    #[test]
    fn test_save_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        save_export(&path, b"first").unwrap();
        save_export(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
    }
}
