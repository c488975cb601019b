use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::PersistError;

/// Write `value` to `path` as JSON indented with four spaces, replacing any
/// existing file of the same name.
pub fn save_to_file(value: &Value, path: &Path) -> Result<(), PersistError> {
    // serde_json's default pretty printer indents with two spaces.
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;

    let io_err = |source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(&buf).map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn written_file_round_trips_and_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let value = json!({"product": {"name": "Tim Tam"}, "status": 1});

        save_to_file(&value, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), value);
        assert!(text.contains("\n    \"product\": {"));
        assert!(text.contains("\n        \"name\": \"Tim Tam\""));
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale contents from an earlier run").unwrap();

        save_to_file(&json!([1, 2, 3]), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn unwritable_path_reports_the_os_cause() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-subdir").join("out.json");

        let err = save_to_file(&json!({}), &path).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
    }
}
