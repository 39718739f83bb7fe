use crate::error::MarkupError;
use crate::model::{Comment, HeaderFile, Markup, Topic, ViewPoint};
use crate::parser::metadata::{parse_xml, text_of};
use roxmltree::Node;

/// Decodes one topic's `markup.bcf` document.
///
/// The `Markup`, `Header` and `Topic` elements are required; every other
/// field falls back to an empty string or `None`. Comments and viewpoints
/// are always returned as sequences, whether the document holds one or many.
///
/// # Errors
///
/// Returns [`MarkupError::Xml`] for malformed XML and
/// [`MarkupError::MissingElement`] when a required element is absent.
///
/// # Example
///
/// ```
/// use bcf_inspector::parser::decode_markup;
///
/// let markup = decode_markup(
///     r#"<Markup><Header/><Topic Guid="t1"><Title>Leak</Title></Topic></Markup>"#,
/// )?;
/// assert_eq!(markup.topic.title, "Leak");
/// assert!(markup.topic.comments.is_empty());
/// # Ok::<(), bcf_inspector::error::MarkupError>(())
/// ```
pub fn decode_markup(xml: &str) -> Result<Markup, MarkupError> {
    let doc = parse_xml(xml)?;

    let markup = doc.root_element();
    if !markup.has_tag_name("Markup") {
        return Err(MarkupError::MissingElement("Markup"));
    }

    let header = markup
        .descendants()
        .find(|n| n.has_tag_name("Header"))
        .ok_or(MarkupError::MissingElement("Header"))?;

    let topic = markup
        .descendants()
        .find(|n| n.has_tag_name("Topic"))
        .ok_or(MarkupError::MissingElement("Topic"))?;

    Ok(Markup {
        header: decode_header(header),
        topic: decode_topic(topic),
    })
}

fn decode_header(header: Node<'_, '_>) -> Vec<HeaderFile> {
    header
        .descendants()
        .filter(|n| n.has_tag_name("File"))
        .map(|file| HeaderFile {
            ifc_project: file.attribute("IfcProject").unwrap_or_default().to_string(),
            filename: child_text(file, "Filename").unwrap_or_default(),
            date: child_text(file, "Date").unwrap_or_default(),
        })
        .collect()
}

fn decode_topic(topic: Node<'_, '_>) -> Topic {
    Topic {
        guid: topic.attribute("Guid").unwrap_or_default().to_string(),
        topic_type: optional_attribute(topic, "TopicType"),
        topic_status: optional_attribute(topic, "TopicStatus"),
        title: child_text(topic, "Title").unwrap_or_default(),
        priority: optional_child_text(topic, "Priority"),
        labels: child(topic, "Labels").map(|labels| {
            children(labels, "Label").map(text_of).collect()
        }),
        creation_date: child_text(topic, "CreationDate").unwrap_or_default(),
        creation_author: child_text(topic, "CreationAuthor").unwrap_or_default(),
        modified_date: optional_child_text(topic, "ModifiedDate"),
        modified_author: optional_child_text(topic, "ModifiedAuthor"),
        assigned_to: optional_child_text(topic, "AssignedTo"),
        comments: child(topic, "Comments")
            .map(|comments| children(comments, "Comment").map(decode_comment).collect())
            .unwrap_or_default(),
        viewpoints: child(topic, "Viewpoints")
            .map(|viewpoints| {
                children(viewpoints, "ViewPoint")
                    .map(decode_viewpoint)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn decode_comment(comment: Node<'_, '_>) -> Comment {
    Comment {
        guid: comment.attribute("Guid").unwrap_or_default().to_string(),
        date: child_text(comment, "Date").unwrap_or_default(),
        author: child_text(comment, "Author").unwrap_or_default(),
        body: child_text(comment, "Comment").unwrap_or_default(),
        modified_date: optional_child_text(comment, "ModifiedDate"),
        modified_author: optional_child_text(comment, "ModifiedAuthor"),
    }
}

fn decode_viewpoint(viewpoint: Node<'_, '_>) -> ViewPoint {
    ViewPoint {
        guid: viewpoint.attribute("Guid").unwrap_or_default().to_string(),
        viewpoint: optional_child_text(viewpoint, "Viewpoint"),
        snapshot: optional_child_text(viewpoint, "Snapshot"),
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.has_tag_name(tag))
}

fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child(node, tag).map(text_of)
}

// Empty text is treated the same as a missing element.
fn optional_child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child_text(node, tag).filter(|text| !text.is_empty())
}

fn optional_attribute(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
