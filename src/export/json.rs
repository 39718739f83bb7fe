use crate::error::ExportError;
use crate::model::BcfArchive;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn export_json<P: AsRef<Path>>(archive: &BcfArchive, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_json(archive, BufWriter::new(file))
}

/// Writes the whole archive model as pretty JSON. Images are listed by
/// path, MIME type and size; their bytes are not embedded. Comments,
/// viewpoints and header files are arrays even when there is only one.
pub fn write_json<W: Write>(archive: &BcfArchive, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, archive).map_err(|e| {
        if e.is_io() {
            ExportError::WriteError {
                message: e.to_string(),
            }
        } else {
            ExportError::from(e)
        }
    })?;

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, Image, Topic, TopicFailure, TopicRecord, Version};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn single_comment_stays_an_array_and_images_carry_size() {
        let archive = BcfArchive {
            version: Version::default(),
            project: None,
            extensions: None,
            topics: vec![TopicRecord {
                topic_id: "t1".to_string(),
                header: vec![],
                topic: Topic {
                    title: "Leak".to_string(),
                    comments: vec![Comment {
                        author: "anna".to_string(),
                        body: "Only one".to_string(),
                        ..Comment::default()
                    }],
                    ..Topic::default()
                },
                images: vec![Image::new("t1/snap.png".to_string(), vec![1, 2, 3])],
            }],
            failures: vec![TopicFailure {
                topic_id: "t2".to_string(),
                message: "no Topic element found".to_string(),
            }],
        };

        let mut out = Vec::new();
        write_json(&archive, &mut out).expect("write json");
        let json: Value = serde_json::from_slice(&out).expect("valid json");

        assert_eq!(json["version"]["version_id"], "3.0");

        let topic = &json["topics"][0];
        assert_eq!(topic["topic_id"], "t1");
        let comments = topic["topic"]["comments"].as_array().expect("comments array");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0]["body"], "Only one");
        assert!(topic["topic"]["viewpoints"].as_array().expect("viewpoints array").is_empty());
        assert!(topic["header"].is_array());

        let image = topic["images"][0].as_object().expect("image object");
        assert_eq!(image["path"], "t1/snap.png");
        assert_eq!(image["mime"], "image/png");
        assert_eq!(image["size"], 3);
        assert!(!image.contains_key("bytes"));

        let failures = json["failures"].as_array().expect("failures array");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0]["topic_id"], "t2");
    }
}
