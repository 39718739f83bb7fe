pub mod archive;
pub mod image;
pub mod topic;

pub use archive::{BcfArchive, Extensions, ProjectInfo, TopicFailure, Version, DEFAULT_VERSION_ID};
pub use image::{Image, ImageMime};
pub use topic::{Comment, HeaderFile, Markup, Topic, TopicRecord, ViewPoint};
