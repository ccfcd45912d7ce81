use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

/// Serializes `value` to a temporary file next to `path` and renames it into
/// place, so readers only ever see the previous file or the complete new one.
pub fn write_json_atomically<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)?;

    let mut temp_file = NamedTempFile::new_in(directory)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_directories() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("src").join("generated").join("cards.json");

        write_json_atomically(&path, &json!({"token": []})).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({"token": []}));
    }

    #[test]
    fn test_replaces_previous_file_without_leftovers() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cards.json");
        fs::write(&path, "stale content from a crashed run").unwrap();

        write_json_atomically(&path, &json!({"foil": [1, 2, 3]})).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["foil"], json!([1, 2, 3]));
        let files_in_dir = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(files_in_dir, 1);
    }
}
