use serde::{Serialize, Serializer};

/// MIME type of a topic attachment, inferred from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageMime {
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/gif")]
    Gif,
    #[serde(rename = "image/bmp")]
    Bmp,
}

impl ImageMime {
    /// Infers the MIME type from a path's extension, case-insensitively.
    ///
    /// Anything that is not jpg/jpeg/gif/bmp is reported as PNG, TIFF included.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let extension = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "gif" => Self::Gif,
            "bmp" => Self::Bmp,
            _ => Self::Png,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
        }
    }
}

impl std::fmt::Display for ImageMime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image attachment copied out of a topic folder.
///
/// The value owns its bytes; dropping it releases the buffer. Use
/// [`Image::into_bytes`] to keep the data beyond the handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub path: String,
    pub mime: ImageMime,
    #[serde(rename = "size", serialize_with = "serialize_len")]
    bytes: Vec<u8>,
}

impl Image {
    #[must_use]
    pub fn new(path: String, bytes: Vec<u8>) -> Self {
        let mime = ImageMime::from_path(&path);
        Self { path, mime, bytes }
    }

    /// File name without the topic folder prefix.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn serialize_len<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_inference_ignores_case() {
        assert_eq!(ImageMime::from_path("topic/IMG.PNG"), ImageMime::Png);
        assert_eq!(ImageMime::from_path("topic/img.png"), ImageMime::Png);
        assert_eq!(ImageMime::from_path("topic/shot.JPEG"), ImageMime::Jpeg);
        assert_eq!(ImageMime::from_path("topic/shot.jpg"), ImageMime::Jpeg);
        assert_eq!(ImageMime::from_path("topic/anim.Gif"), ImageMime::Gif);
        assert_eq!(ImageMime::from_path("topic/raw.bmp"), ImageMime::Bmp);
    }

    #[test]
    fn unknown_extensions_default_to_png() {
        assert_eq!(ImageMime::from_path("topic/scan.tiff"), ImageMime::Png);
        assert_eq!(ImageMime::from_path("topic/scan.tif"), ImageMime::Png);
        assert_eq!(ImageMime::from_path("no_extension"), ImageMime::Png);
    }

    #[test]
    fn image_exposes_file_name_and_bytes() {
        let image = Image::new("a1b2/snapshot.jpg".to_string(), vec![0xFF, 0xD8]);
        assert_eq!(image.file_name(), "snapshot.jpg");
        assert_eq!(image.mime.to_string(), "image/jpeg");
        assert_eq!(image.len(), 2);
        assert_eq!(image.into_bytes(), vec![0xFF, 0xD8]);
    }

    #[test]
    fn serializes_size_instead_of_bytes() {
        let image = Image::new("t/a.gif".to_string(), vec![1, 2, 3]);
        let json = serde_json::to_value(&image).expect("serialize image");
        assert_eq!(json["mime"], "image/gif");
        assert_eq!(json["size"], 3);
    }
}
