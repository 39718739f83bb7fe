use crate::error::BcfError;
use crate::model::{BcfArchive, Version};
use crate::parser::archive::ArchiveReader;
use crate::parser::discovery::discover_topics;
use crate::parser::metadata::{decode_extensions, decode_project, decode_version};
use crate::parser::options::ParseOptions;
use std::path::Path;
use tracing::{debug, info, info_span};

const VERSION_FILE: &str = "bcf.version";
const PROJECT_FILE: &str = "project.bcfp";
const EXTENSIONS_FILE: &str = "extensions.xml";

/// Parses a BCF archive from disk with default options.
///
/// Reads:
/// - `bcf.version` (a default version is substituted when absent)
/// - `project.bcfp` and `extensions.xml` when present
/// - every `<folder>/markup.bcf` topic with the images next to it
///
/// # Arguments
///
/// * `path` - Path to the `.bcf` / `.bcfzip` file
///
/// # Errors
///
/// Returns [`BcfError::FileRead`] if the file cannot be read.
/// Returns [`BcfError::ArchiveCorrupt`] if the file is not a zip container.
/// Returns [`BcfError::MarkupParse`] if any topic's markup is invalid.
///
/// # Example
///
/// ```no_run
/// use bcf_inspector::parser::parse_bcf_file;
///
/// let archive = parse_bcf_file("review.bcf")?;
/// for record in &archive.topics {
///     println!("{}: {} images", record.topic.title, record.images.len());
/// }
/// # Ok::<(), bcf_inspector::error::BcfError>(())
/// ```
pub fn parse_bcf_file<P: AsRef<Path>>(path: P) -> Result<BcfArchive, BcfError> {
    parse_bcf_file_with(path, &ParseOptions::default())
}

/// Parses a BCF archive from disk with explicit [`ParseOptions`].
pub fn parse_bcf_file_with<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<BcfArchive, BcfError> {
    let bytes = std::fs::read(&path).map_err(|source| BcfError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    parse_bcf_bytes_with(bytes, options)
}

/// Parses a BCF archive held in memory with default options.
pub fn parse_bcf_bytes(bytes: Vec<u8>) -> Result<BcfArchive, BcfError> {
    parse_bcf_bytes_with(bytes, &ParseOptions::default())
}

/// Parses a BCF archive held in memory.
///
/// With [`FailurePolicy::AllOrNothing`](crate::parser::FailurePolicy) the
/// first invalid topic fails the whole call; with `SkipAndReport` it is
/// listed in [`BcfArchive::failures`] instead.
pub fn parse_bcf_bytes_with(
    bytes: Vec<u8>,
    options: &ParseOptions,
) -> Result<BcfArchive, BcfError> {
    let _span = info_span!("parse_bcf", size = bytes.len()).entered();

    let mut reader = ArchiveReader::new(bytes)?;
    debug!(entries = reader.entries().len(), "opened archive");

    let version = match reader.read_text(VERSION_FILE)? {
        Some(xml) => decode_version(&xml),
        None => {
            debug!("no {VERSION_FILE}, using default version");
            Version::default()
        }
    };

    let project = reader
        .read_text(PROJECT_FILE)?
        .map(|xml| decode_project(&xml));

    let extensions = reader
        .read_text(EXTENSIONS_FILE)?
        .map(|xml| decode_extensions(&xml));

    let discovered = discover_topics(&mut reader, options)?;

    info!(
        version = %version.version_id,
        topics = discovered.topics.len(),
        failures = discovered.failures.len(),
        "parsed archive"
    );

    Ok(BcfArchive {
        version,
        project,
        extensions,
        topics: discovered.topics,
        failures: discovered.failures,
    })
}
