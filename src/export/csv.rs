use crate::error::ExportError;
use crate::model::BcfArchive;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 10] = [
    "Topic ID",
    "Title",
    "Status",
    "Priority",
    "Type",
    "Creation Date",
    "Creation Author",
    "Assigned To",
    "Comments",
    "Images",
];

pub fn export_csv<P: AsRef<Path>>(archive: &BcfArchive, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_csv(archive, file)
}

/// Writes one row per topic. Blank comments are not counted.
pub fn write_csv<W: Write>(archive: &BcfArchive, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(HEADER)?;

    for record in &archive.topics {
        let topic = &record.topic;
        let comments = topic.visible_comments().count().to_string();
        let images = record.images.len().to_string();
        writer.write_record([
            record.topic_id.as_str(),
            topic.title.as_str(),
            topic.topic_status.as_deref().unwrap_or_default(),
            topic.priority.as_deref().unwrap_or_default(),
            topic.topic_type.as_deref().unwrap_or_default(),
            topic.creation_date.as_str(),
            topic.creation_author.as_str(),
            topic.assigned_to.as_deref().unwrap_or_default(),
            comments.as_str(),
            images.as_str(),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, Image, Topic, TopicRecord, Version};

    #[test]
    fn writes_one_row_per_topic() {
        let archive = BcfArchive {
            version: Version::default(),
            project: None,
            extensions: None,
            topics: vec![TopicRecord {
                topic_id: "t1".to_string(),
                header: vec![],
                topic: Topic {
                    title: "Leak, beam 12".to_string(),
                    topic_status: Some("Open".to_string()),
                    comments: vec![
                        Comment {
                            body: "Check it".to_string(),
                            ..Comment::default()
                        },
                        Comment::default(),
                    ],
                    ..Topic::default()
                },
                images: vec![Image::new("t1/a.png".to_string(), vec![0])],
            }],
            failures: vec![],
        };

        let mut out = Vec::new();
        write_csv(&archive, &mut out).expect("write csv");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Topic ID,Title,Status"));
        assert_eq!(lines[1], "t1,\"Leak, beam 12\",Open,,,,,,1,1");
    }
}
