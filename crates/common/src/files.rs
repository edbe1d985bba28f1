//! File output helpers for generated code.

use camino::Utf8Path;
use std::fs;
use std::io;

/// Writes `content` to `path` unless the file already holds exactly that
/// content, so downstream build systems never see a touched-but-identical
/// output. Returns whether the file was written.
pub fn write_if_changed(path: &Utf8Path, content: &str) -> io::Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == content => {
            tracing::debug!(target: "files", "unchanged: {}", path);
            return Ok(false);
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!(target: "files", "wrote: {}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_path(name: &str) -> Utf8PathBuf {
        let dir = std::env::temp_dir().join(format!("keytab-files-{}", std::process::id()));
        Utf8PathBuf::from_path_buf(dir.join(name)).unwrap()
    }

    #[test]
    fn writes_new_file_and_skips_identical_rewrite() {
        let path = temp_path("out.inc");
        let _ = fs::remove_file(&path);

        assert!(write_if_changed(&path, "content\n").unwrap());
        assert!(!write_if_changed(&path, "content\n").unwrap());
        assert!(write_if_changed(&path, "changed\n").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "changed\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let path = temp_path("nested/dir/out.inc");
        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());

        assert!(write_if_changed(&path, "x").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }
}
