use super::TopicRecord;
use serde::Serialize;

/// Version reported when an archive has no `bcf.version` entry.
pub const DEFAULT_VERSION_ID: &str = "3.0";

/// Everything read from one BCF archive.
#[derive(Debug, Clone, Serialize)]
pub struct BcfArchive {
    pub version: Version,
    pub project: Option<ProjectInfo>,
    pub extensions: Option<Extensions>,
    /// Topics in folder discovery order.
    pub topics: Vec<TopicRecord>,
    /// Topics skipped under [`FailurePolicy::SkipAndReport`](crate::parser::FailurePolicy).
    pub failures: Vec<TopicFailure>,
}

impl BcfArchive {
    #[must_use]
    pub fn total_comments(&self) -> usize {
        self.topics.iter().map(|t| t.topic.comments.len()).sum()
    }

    #[must_use]
    pub fn total_images(&self) -> usize {
        self.topics.iter().map(|t| t.images.len()).sum()
    }

    #[must_use]
    pub fn topic(&self, topic_id: &str) -> Option<&TopicRecord> {
        self.topics.iter().find(|t| t.topic_id == topic_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    pub version_id: String,
}

impl Default for Version {
    fn default() -> Self {
        Self {
            version_id: DEFAULT_VERSION_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub project_id: String,
    pub name: Option<String>,
}

/// Allowed values declared in `extensions.xml`, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extensions {
    pub topic_types: Vec<String>,
    pub topic_statuses: Vec<String>,
    pub priorities: Vec<String>,
    pub topic_labels: Vec<String>,
    pub stages: Vec<String>,
    pub user_id_types: Vec<String>,
}

/// A topic folder whose markup could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicFailure {
    pub topic_id: String,
    pub message: String,
}
