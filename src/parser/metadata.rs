//! Decoders for the archive-level documents: `bcf.version`, `project.bcfp`
//! and `extensions.xml`.
//!
//! These documents are informational, so every lookup falls back to an empty
//! value instead of failing, malformed XML included.

use crate::model::{Extensions, ProjectInfo, Version};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::warn;

pub fn decode_version(xml: &str) -> Version {
    let Some(doc) = parse_lenient(xml, "bcf.version") else {
        return Version {
            version_id: String::new(),
        };
    };

    let version_id = doc
        .descendants()
        .find(|n| n.has_tag_name("Version"))
        .and_then(|n| n.attribute("VersionId"))
        .unwrap_or_default()
        .to_string();

    Version { version_id }
}

pub fn decode_project(xml: &str) -> ProjectInfo {
    let Some(doc) = parse_lenient(xml, "project.bcfp") else {
        return ProjectInfo::default();
    };

    let project = doc
        .descendants()
        .filter(|n| n.has_tag_name("ProjectInfo"))
        .find_map(|info| info.descendants().skip(1).find(|n| n.has_tag_name("Project")));

    let Some(project) = project else {
        return ProjectInfo::default();
    };

    ProjectInfo {
        project_id: project.attribute("ProjectId").unwrap_or_default().to_string(),
        name: project
            .descendants()
            .find(|n| n.has_tag_name("Name"))
            .map(text_of)
            .filter(|name| !name.is_empty()),
    }
}

pub fn decode_extensions(xml: &str) -> Extensions {
    let Some(doc) = parse_lenient(xml, "extensions.xml") else {
        return Extensions::default();
    };

    let collect = |tag: &str| -> Vec<String> {
        doc.descendants()
            .filter(|n| n.has_tag_name(tag))
            .map(text_of)
            .collect()
    };

    Extensions {
        topic_types: collect("TopicType"),
        topic_statuses: collect("TopicStatus"),
        priorities: collect("Priority"),
        topic_labels: collect("TopicLabel"),
        stages: collect("Stage"),
        user_id_types: collect("UserIdType"),
    }
}

/// Parses XML, accepting a `<!DOCTYPE>` declaration.
pub(crate) fn parse_xml(xml: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(xml, options)
}

fn parse_lenient<'a>(xml: &'a str, document: &str) -> Option<Document<'a>> {
    match parse_xml(xml) {
        Ok(doc) => Some(doc),
        Err(err) => {
            warn!(document, error = %err, "ignoring malformed metadata document");
            None
        }
    }
}

/// Concatenated text of a node and its descendants, like DOM `textContent`.
pub(crate) fn text_of(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}
