//! Plain-text summary of a parsed archive, printed by the binary.

use crate::model::{BcfArchive, TopicRecord};
use std::fmt;

const UNKNOWN: &str = "Unknown";

/// Text summary of an archive: header lines, one block per topic, then any
/// skipped topics.
pub struct Summary<'a>(pub &'a BcfArchive);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let archive = self.0;

        writeln!(f, "BCF version: {}", archive.version.version_id)?;
        if let Some(project) = &archive.project {
            writeln!(f, "Project: {}", project.name.as_deref().unwrap_or("Unnamed"))?;
        }
        writeln!(
            f,
            "Topics: {} ({} comments, {} images)",
            archive.topics.len(),
            archive.total_comments(),
            archive.total_images()
        )?;

        for (index, record) in archive.topics.iter().enumerate() {
            writeln!(f)?;
            render_topic(f, index + 1, record)?;
        }

        if !archive.failures.is_empty() {
            writeln!(f, "\nSkipped topics:")?;
            for failure in &archive.failures {
                writeln!(f, "  {}: {}", failure.topic_id, failure.message)?;
            }
        }

        Ok(())
    }
}

#[must_use]
pub fn render_summary(archive: &BcfArchive) -> String {
    Summary(archive).to_string()
}

fn render_topic(f: &mut fmt::Formatter<'_>, number: usize, record: &TopicRecord) -> fmt::Result {
    let topic = &record.topic;
    let title = if topic.title.is_empty() {
        "Untitled"
    } else {
        topic.title.as_str()
    };

    writeln!(f, "[{number}] {title}")?;
    writeln!(f, "    ID:              {}", record.topic_id)?;

    let mut rows = vec![
        ("Status", topic.topic_status.as_deref().unwrap_or(UNKNOWN)),
        ("Priority", topic.priority.as_deref().unwrap_or(UNKNOWN)),
        ("Creation Date", non_empty_or_unknown(&topic.creation_date)),
        ("Creation Author", non_empty_or_unknown(&topic.creation_author)),
    ];
    if let Some(date) = &topic.modified_date {
        rows.push(("Modified Date", date.as_str()));
    }
    if let Some(author) = &topic.modified_author {
        rows.push(("Modified Author", author.as_str()));
    }
    if let Some(assignee) = &topic.assigned_to {
        rows.push(("Assigned To", assignee.as_str()));
    }
    for (label, value) in rows {
        let label = format!("{label}:");
        writeln!(f, "    {label:<17}{value}")?;
    }

    if let Some(labels) = topic.labels.as_ref().filter(|l| !l.is_empty()) {
        writeln!(f, "    Labels:          {}", labels.join(", "))?;
    }

    let comments: Vec<_> = topic.visible_comments().collect();
    if !comments.is_empty() {
        writeln!(f, "    Comments:")?;
        for comment in comments {
            writeln!(
                f,
                "      {} ({}): {}",
                comment.author,
                comment.date,
                comment.body.trim()
            )?;
        }
    }

    if !record.images.is_empty() {
        writeln!(f, "    Images:")?;
        for image in &record.images {
            writeln!(
                f,
                "      {} [{}, {} bytes]",
                image.file_name(),
                image.mime,
                image.len()
            )?;
        }
    }

    Ok(())
}

fn non_empty_or_unknown(value: &str) -> &str {
    if value.is_empty() {
        UNKNOWN
    } else {
        value
    }
}
