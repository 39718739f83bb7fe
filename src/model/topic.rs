use super::Image;
use serde::Serialize;

/// One topic folder of the archive: its markup plus attached images.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRecord {
    /// Name of the containing folder, normally the topic GUID.
    pub topic_id: String,
    pub header: Vec<HeaderFile>,
    pub topic: Topic,
    pub images: Vec<Image>,
}

/// Decoded contents of a `markup.bcf` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Markup {
    pub header: Vec<HeaderFile>,
    pub topic: Topic,
}

/// A model file the topic refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderFile {
    pub ifc_project: String,
    pub filename: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub guid: String,
    pub topic_type: Option<String>,
    pub topic_status: Option<String>,
    pub title: String,
    pub priority: Option<String>,
    /// `None` when the document has no `Labels` container at all.
    pub labels: Option<Vec<String>>,
    pub creation_date: String,
    pub creation_author: String,
    pub modified_date: Option<String>,
    pub modified_author: Option<String>,
    pub assigned_to: Option<String>,
    pub comments: Vec<Comment>,
    pub viewpoints: Vec<ViewPoint>,
}

impl Topic {
    /// Comments worth displaying: those with a non-blank body.
    pub fn visible_comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(|c| c.has_body())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub guid: String,
    pub date: String,
    pub author: String,
    pub body: String,
    pub modified_date: Option<String>,
    pub modified_author: Option<String>,
}

impl Comment {
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewPoint {
    pub guid: String,
    /// File name of the viewpoint XML (`.bcfv`).
    pub viewpoint: Option<String>,
    /// File name of the snapshot image.
    pub snapshot: Option<String>,
}
