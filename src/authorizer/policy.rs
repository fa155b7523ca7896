//! Upload validation policy: type allow-list and size ceilings

/// Size ceiling for `video/*` uploads (1 GiB)
pub const MAX_VIDEO_UPLOAD_BYTES: i64 = 1_073_741_824;

/// Size ceiling for all other allowed uploads (5 MiB)
pub const MAX_STANDARD_UPLOAD_BYTES: i64 = 5_242_880;

const IMAGE_TYPE_PREFIX: &str = "image/";
const VIDEO_TYPE_PREFIX: &str = "video/";
const PDF_TYPE: &str = "application/pdf";

/// Whether the declared MIME type is accepted for upload
///
/// `image/*` and `video/*` match by prefix, so subtypes like `image/svg+xml`
/// pass; `application/pdf` must match exactly.
#[must_use]
pub fn is_allowed_file_type(file_type: &str) -> bool {
    file_type.starts_with(IMAGE_TYPE_PREFIX)
        || file_type.starts_with(VIDEO_TYPE_PREFIX)
        || file_type == PDF_TYPE
}

/// Size tier of an upload, determining which ceiling applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// `video/*` uploads, large ceiling
    Video,
    /// Everything else, small ceiling
    Standard,
}

impl SizeClass {
    /// Classifies a declared MIME type
    #[must_use]
    pub fn for_file_type(file_type: &str) -> Self {
        if file_type.starts_with(VIDEO_TYPE_PREFIX) {
            Self::Video
        } else {
            Self::Standard
        }
    }

    /// Maximum accepted size in bytes for this class
    #[must_use]
    pub const fn max_bytes(self) -> i64 {
        match self {
            Self::Video => MAX_VIDEO_UPLOAD_BYTES,
            Self::Standard => MAX_STANDARD_UPLOAD_BYTES,
        }
    }
}
