// src/codec/file.rs

use anyhow::{anyhow, Context, Result};
use std::{fs, io::Write, path::Path};
use tracing::debug;

use super::{decode, encode, Format};
use crate::document::CostDocument;

/// Read and decode a document; the format comes from the file extension.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<CostDocument> {
    let path = path.as_ref();
    let format = format_for(path)?;
    let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    let doc = decode(&text, format).with_context(|| format!("decoding {:?}", path))?;
    debug!(path = %path.display(), ?format, "read document");
    Ok(doc)
}

/// Encode and write a document, replacing `path` atomically.
///
/// The text goes to a hidden `.<name>.XXXX.tmp` sibling first and is then
/// renamed over the target, so readers never see a half-written document.
/// The sibling is removed if any step fails.
pub fn write_document<P: AsRef<Path>>(path: P, doc: &CostDocument) -> Result<()> {
    let path = path.as_ref();
    let format = format_for(path)?;
    let text = encode(doc, format).with_context(|| format!("encoding {:?}", path))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("no file name in {:?}", path))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{}.", file_name))
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("creating temp file in {:?}", dir))?;
    tmp.write_all(text.as_bytes())
        .with_context(|| format!("writing {:?}", tmp.path()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("syncing {:?}", tmp.path()))?;

    // on failure the temp file is dropped and deleted with the PersistError
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("renaming temp file -> {:?}", path))?;
    debug!(path = %path.display(), ?format, bytes = text.len(), "wrote document");
    Ok(())
}

fn format_for(path: &Path) -> Result<Format> {
    Format::from_path(path)
        .ok_or_else(|| anyhow!("unsupported document extension: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_json_str, DecodeError, DecodeErrorKind};
    use tempfile::tempdir;

    const SAMPLE: &str = include_str!("../../assets/sample_cost_document.json");

    #[test]
    fn write_then_read_both_formats() -> Result<()> {
        let tmp = tempdir()?;
        let doc = from_json_str(SAMPLE)?;

        for name in ["cost.json", "cost.yaml", "cost.yml"] {
            let path = tmp.path().join(name);
            write_document(&path, &doc)?;
            assert_eq!(read_document(&path)?, doc);
        }
        assert_eq!(
            dir_entries(tmp.path())?,
            ["cost.json", "cost.yaml", "cost.yml"]
        );
        Ok(())
    }

    #[test]
    fn failed_write_leaves_no_temp_file() -> Result<()> {
        let tmp = tempdir()?;
        // a directory in the way makes the final rename fail
        fs::create_dir(tmp.path().join("cost.json"))?;
        fs::write(tmp.path().join("cost.json").join("keep"), "x")?;
        let doc = from_json_str(SAMPLE)?;

        assert!(write_document(tmp.path().join("cost.json"), &doc).is_err());
        assert_eq!(dir_entries(tmp.path())?, ["cost.json"]);
        Ok(())
    }

    #[test]
    fn nested_target_leaves_only_the_document() -> Result<()> {
        let tmp = tempdir()?;
        let doc = from_json_str(SAMPLE)?;
        let path = tmp.path().join("nested").join("cost.yaml");
        fs::create_dir(tmp.path().join("nested"))?;

        write_document(&path, &doc)?;
        assert_eq!(dir_entries(&tmp.path().join("nested"))?, ["cost.yaml"]);
        Ok(())
    }

    fn dir_entries(dir: &Path) -> Result<Vec<String>> {
        let mut names = fs::read_dir(dir)?
            .map(|e| Ok(e?.file_name().to_string_lossy().into_owned()))
            .collect::<Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    #[test]
    fn overwrite_replaces_contents() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("cost.json");
        let mut doc = from_json_str(SAMPLE)?;

        write_document(&path, &doc)?;
        doc.basic_info.title = "Revised".into();
        write_document(&path, &doc)?;

        assert_eq!(read_document(&path)?.basic_info.title, "Revised");
        Ok(())
    }

    #[test]
    fn unknown_extension_is_rejected() -> Result<()> {
        let tmp = tempdir()?;
        let doc = from_json_str(SAMPLE)?;
        assert!(write_document(tmp.path().join("cost.toml"), &doc).is_err());
        assert!(read_document(tmp.path().join("cost.txt")).is_err());
        Ok(())
    }

    #[test]
    fn decode_error_survives_context() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("broken.json");
        fs::write(&path, SAMPLE.replacen("\"month\": 1,", "\"month\": 13,", 1))?;

        let err = read_document(&path).unwrap_err();
        let decode = err
            .downcast_ref::<DecodeError>()
            .expect("decode error in chain");
        assert_eq!(decode.kind, DecodeErrorKind::InvalidValue);
        assert!(decode.path.ends_with(".month"));
        Ok(())
    }
}
