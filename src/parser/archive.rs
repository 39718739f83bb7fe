use crate::error::BcfError;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

/// In-memory view over the entries of a zip container.
pub struct ArchiveReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    entries: Vec<String>,
}

impl ArchiveReader {
    /// Opens a zip container held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`BcfError::ArchiveCorrupt`] if the central directory cannot be read.
    pub fn new(bytes: Vec<u8>) -> Result<Self, BcfError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let entry = archive.by_index_raw(index)?;
            entries.push(entry.name().to_string());
        }

        Ok(Self { archive, entries })
    }

    /// Entry paths in central directory order, directory markers included.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Reads an entry's raw bytes, or `None` if the archive has no such path.
    ///
    /// # Errors
    ///
    /// Returns [`BcfError::EntryRead`] when the entry exists but cannot be
    /// decoded: an unsupported compression method, a damaged local header or
    /// a checksum mismatch.
    pub fn read_bytes(&mut self, path: &str) -> Result<Option<Vec<u8>>, BcfError> {
        let mut file = match self.archive.by_name(path) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(source) => {
                return Err(BcfError::EntryRead {
                    path: path.to_string(),
                    source: std::io::Error::other(source),
                })
            }
        };

        let mut buffer = Vec::with_capacity(usize::try_from(file.size()).unwrap_or_default());
        file.read_to_end(&mut buffer)
            .map_err(|source| BcfError::EntryRead {
                path: path.to_string(),
                source,
            })?;

        Ok(Some(buffer))
    }

    /// Reads an entry as text. Invalid UTF-8 is replaced and a leading BOM dropped.
    ///
    /// # Errors
    ///
    /// Same as [`ArchiveReader::read_bytes`].
    pub fn read_text(&mut self, path: &str) -> Result<Option<String>, BcfError> {
        Ok(self.read_bytes(path)?.map(|bytes| decode_text(&bytes)))
    }
}

fn decode_text(bytes: &[u8]) -> String {
    const BOM: char = '\u{FEFF}';
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix(BOM).unwrap_or(&text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            if name.ends_with('/') {
                writer
                    .add_directory(*name, SimpleFileOptions::default())
                    .expect("add directory");
            } else {
                writer
                    .start_file(*name, SimpleFileOptions::default())
                    .expect("start file");
                writer.write_all(data.as_bytes()).expect("write entry");
            }
        }
        writer.finish().expect("finish archive").into_inner()
    }

    #[test]
    fn lists_entries_in_archive_order() {
        let bytes = build(&[
            ("bcf.version", "<Version/>"),
            ("b/", ""),
            ("b/markup.bcf", "<Markup/>"),
            ("a/snapshot.png", "png"),
        ]);
        let reader = ArchiveReader::new(bytes).expect("open archive");

        assert_eq!(
            reader.entries(),
            &["bcf.version", "b/", "b/markup.bcf", "a/snapshot.png"]
        );
    }

    #[test]
    fn missing_entries_are_none() {
        let mut reader = ArchiveReader::new(build(&[("x.txt", "x")])).expect("open archive");

        assert!(reader.read_text("project.bcfp").expect("lookup").is_none());
        assert!(reader.read_bytes("a/b.png").expect("lookup").is_none());
    }

    #[test]
    fn reads_text_and_bytes() {
        let mut reader = ArchiveReader::new(build(&[
            ("bcf.version", "\u{FEFF}<Version VersionId=\"2.1\"/>"),
            ("t/s.png", "\u{89}PNG"),
        ]))
        .expect("open archive");

        assert_eq!(
            reader.read_text("bcf.version").expect("read").as_deref(),
            Some("<Version VersionId=\"2.1\"/>")
        );
        assert_eq!(
            reader.read_bytes("t/s.png").expect("read"),
            Some("\u{89}PNG".as_bytes().to_vec())
        );
    }

    // Rewrites the compression method in both headers of the named entry.
    fn set_compression_method(bytes: &mut [u8], name: &str, method: u16) {
        let name = name.as_bytes();
        let positions: Vec<usize> = bytes
            .windows(name.len())
            .enumerate()
            .filter(|(_, window)| *window == name)
            .map(|(pos, _)| pos)
            .collect();

        for pos in positions {
            if pos >= 30 && bytes[pos - 30..pos - 26] == *b"PK\x03\x04" {
                bytes[pos - 22..pos - 20].copy_from_slice(&method.to_le_bytes());
            }
            if pos >= 46 && bytes[pos - 46..pos - 42] == *b"PK\x01\x02" {
                bytes[pos - 36..pos - 34].copy_from_slice(&method.to_le_bytes());
            }
        }
    }

    #[test]
    fn undecodable_entry_is_an_entry_read_error() {
        let mut bytes = build(&[("bcf.version", "<Version/>"), ("t/markup.bcf", "<Markup/>")]);
        set_compression_method(&mut bytes, "t/markup.bcf", 77);

        let mut reader = ArchiveReader::new(bytes).expect("open archive");
        let result = reader.read_text("t/markup.bcf");

        match result {
            Err(BcfError::EntryRead { path, .. }) => assert_eq!(path, "t/markup.bcf"),
            other => panic!("expected EntryRead, got {other:?}"),
        }
        assert_eq!(
            reader.read_text("bcf.version").expect("read").as_deref(),
            Some("<Version/>")
        );
    }

    #[test]
    fn rejects_non_zip_bytes() {
        let result = ArchiveReader::new(b"definitely not a zip file".to_vec());
        assert!(matches!(result, Err(BcfError::ArchiveCorrupt { .. })));
    }
}
