use crate::error::BcfError;
use crate::model::{Image, TopicFailure, TopicRecord};
use crate::parser::archive::ArchiveReader;
use crate::parser::markup::decode_markup;
use crate::parser::options::{FailurePolicy, ParseOptions};
use tracing::{debug, debug_span, warn};

/// File name that marks a folder as a topic.
pub const MARKUP_FILE: &str = "markup.bcf";

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".bmp", ".tiff", ".tif"];

/// Topics found in an archive, plus the folders skipped under
/// [`FailurePolicy::SkipAndReport`].
#[derive(Debug, Default)]
pub struct Discovered {
    pub topics: Vec<TopicRecord>,
    pub failures: Vec<TopicFailure>,
}

/// Walks every top-level folder and decodes the ones holding a `markup.bcf`.
pub fn discover_topics(
    reader: &mut ArchiveReader,
    options: &ParseOptions,
) -> Result<Discovered, BcfError> {
    let entries = reader.entries().to_vec();
    let mut discovered = Discovered::default();

    for folder in topic_folders(&entries) {
        if options.is_cancelled() {
            return Err(BcfError::Cancelled);
        }

        let _span = debug_span!("topic", topic_id = folder).entered();

        if options.require_guid_folders && !is_valid_guid(folder) {
            debug!("skipping folder with a non-GUID name");
            continue;
        }

        let Some(markup_xml) = reader.read_text(&markup_path(folder))? else {
            debug!("no {MARKUP_FILE} found, folder is not a topic");
            continue;
        };

        let markup = match decode_markup(&markup_xml) {
            Ok(markup) => markup,
            Err(source) => {
                let err = BcfError::MarkupParse {
                    topic_id: folder.to_string(),
                    source,
                };
                match options.failure_policy {
                    FailurePolicy::AllOrNothing => return Err(err),
                    FailurePolicy::SkipAndReport => {
                        warn!(error = %err, "skipping topic");
                        discovered.failures.push(TopicFailure {
                            topic_id: folder.to_string(),
                            message: err.to_string(),
                        });
                        continue;
                    }
                }
            }
        };

        let images = collect_images(reader, &entries, folder);
        debug!(images = images.len(), title = %markup.topic.title, "decoded topic");

        discovered.topics.push(TopicRecord {
            topic_id: folder.to_string(),
            header: markup.header,
            topic: markup.topic,
            images,
        });
    }

    Ok(discovered)
}

/// Distinct top-level folder names, in first-seen order.
///
/// Only paths with exactly two `/`-separated components count, so
/// `folder/` and `folder/file` both name `folder` while deeper paths do not.
#[must_use]
pub fn topic_folders(entries: &[String]) -> Vec<&str> {
    let mut folders: Vec<&str> = Vec::new();

    for path in entries {
        let mut parts = path.split('/');
        let (Some(first), Some(_), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        if !first.is_empty() && !folders.contains(&first) {
            folders.push(first);
        }
    }

    folders
}

#[must_use]
pub fn markup_path(folder: &str) -> String {
    format!("{folder}/{MARKUP_FILE}")
}

/// Paths of the image files anywhere under `folder`, in entry order.
#[must_use]
pub fn image_paths<'a>(entries: &'a [String], folder: &str) -> Vec<&'a str> {
    let prefix = format!("{folder}/");
    entries
        .iter()
        .map(String::as_str)
        .filter(|path| path.starts_with(&prefix) && !path.ends_with('/'))
        .filter(|path| is_image_path(path))
        .collect()
}

#[must_use]
pub fn is_image_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Checks the canonical 8-4-4-4-12 hex form with an RFC 4122 version
/// (1-5) and variant (8, 9, a, b) nibble.
#[must_use]
pub fn is_valid_guid(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    if groups.len() != 5 {
        return false;
    }

    let lengths_ok = groups
        .iter()
        .zip([8, 4, 4, 4, 12])
        .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit()));
    if !lengths_ok {
        return false;
    }

    let version_ok = matches!(groups[2].as_bytes()[0], b'1'..=b'5');
    let variant_ok = matches!(groups[3].as_bytes()[0].to_ascii_lowercase(), b'8' | b'9' | b'a' | b'b');
    version_ok && variant_ok
}

// Unreadable images are dropped; attachments are supplementary.
fn collect_images(reader: &mut ArchiveReader, entries: &[String], folder: &str) -> Vec<Image> {
    let mut images = Vec::new();

    for path in image_paths(entries, folder) {
        match reader.read_bytes(path) {
            Ok(Some(bytes)) => {
                debug!(path, size = bytes.len(), "read image");
                images.push(Image::new(path.to_string(), bytes));
            }
            Ok(None) => warn!(path, "image listed but not found in archive"),
            Err(err) => warn!(path, error = %err, "failed to read image"),
        }
    }

    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn folders_come_from_two_component_paths() {
        let entries = paths(&[
            "bcf.version",
            "b-topic/",
            "b-topic/markup.bcf",
            "a-topic/snapshot.png",
            "nested/deep/file.png",
            "/rooted",
            "a-topic/markup.bcf",
        ]);

        assert_eq!(topic_folders(&entries), vec!["b-topic", "a-topic"]);
    }

    #[test]
    fn deep_paths_alone_do_not_name_a_folder() {
        let entries = paths(&["only/deep/markup.bcf"]);
        assert!(topic_folders(&entries).is_empty());
    }

    #[test]
    fn images_are_matched_by_extension_case_insensitively() {
        let entries = paths(&[
            "t/markup.bcf",
            "t/viewpoint.bcfv",
            "t/snapshot.PNG",
            "t/photo.jpeg",
            "t/scan.TIF",
            "t/images/",
            "t/images/detail.gif",
            "t2/other.png",
            "tx/not-mine.png",
        ]);

        assert_eq!(
            image_paths(&entries, "t"),
            vec!["t/snapshot.PNG", "t/photo.jpeg", "t/scan.TIF", "t/images/detail.gif"]
        );
    }

    #[test]
    fn guid_validation() {
        assert!(is_valid_guid("3b1c8f2e-7d4a-4c1e-9f0a-2b6d5e8c1a47"));
        assert!(is_valid_guid("3B1C8F2E-7D4A-4C1E-AF0A-2B6D5E8C1A47"));
        assert!(!is_valid_guid("3b1c8f2e-7d4a-6c1e-9f0a-2b6d5e8c1a47"));
        assert!(!is_valid_guid("3b1c8f2e-7d4a-4c1e-cf0a-2b6d5e8c1a47"));
        assert!(!is_valid_guid("3b1c8f2e7d4a4c1e9f0a2b6d5e8c1a47"));
        assert!(!is_valid_guid("not-a-guid"));
        assert!(!is_valid_guid(""));
    }
}
