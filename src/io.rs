//! Reading and writing JSON documents (clips, frames, schemas).

use crate::util::{Error, Result};
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Read a JSON document from a file.
pub fn read_document(path: impl AsRef<Path>) -> Result<JsonValue> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;

    let document = serde_json::from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), "read document");
    Ok(document)
}

/// Write a JSON document to a file, pretty-printed or compact.
pub fn write_document(path: impl AsRef<Path>, document: &JsonValue, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(path = %path.display(), pretty, "wrote document");
    Ok(())
}

/// Render a document as text.
pub fn to_string(document: &JsonValue, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_read() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("doc.json");
        let doc = json!({ "isoSpeed": 800, "tStop": [2000, 2800] });

        write_document(&path, &doc, true).expect("write");
        assert_eq!(read_document(&path).expect("read"), doc);

        write_document(&path, &doc, false).expect("write compact");
        assert_eq!(read_document(&path).expect("read compact"), doc);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read_document(dir.path().join("missing.json")).expect_err("missing");
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_to_string() {
        let doc = json!({ "a": 1 });
        assert_eq!(to_string(&doc, false).expect("compact"), r#"{"a":1}"#);
        assert!(to_string(&doc, true).expect("pretty").contains('\n'));
    }
}
