pub mod archive;
pub mod bcf;
pub mod discovery;
pub mod markup;
pub mod metadata;
pub mod options;

pub use crate::error::{BcfError, MarkupError};
pub use archive::ArchiveReader;
pub use bcf::{parse_bcf_bytes, parse_bcf_bytes_with, parse_bcf_file, parse_bcf_file_with};
pub use discovery::is_valid_guid;
pub use markup::decode_markup;
pub use metadata::{decode_extensions, decode_project, decode_version};
pub use options::{CancelFlag, FailurePolicy, ParseOptions};
