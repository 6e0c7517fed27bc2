use std::fmt;

use super::layout::DEFS_SUFFIX;
use super::{AppError, OutputFormat};

/// Characters that cannot appear in a publication directory name.
const RESERVED_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest file name most filesystems accept, in bytes.
const NAME_MAX: usize = 255;

/// Longest `dir_name` in bytes. The definitions file name, the longest
/// derived name, must still fit in [`NAME_MAX`].
pub const MAX_DIR_NAME_LEN: usize =
    NAME_MAX - DEFS_SUFFIX.len() - 1 - OutputFormat::longest_extension_len();

/// A publication title together with its directory-safe form.
///
/// Guarantees for `dir_name`:
/// - Non-empty, not `.` or `..`
/// - No path separators, reserved characters, or control characters
/// - No leading or trailing whitespace, no trailing dots
/// - At most [`MAX_DIR_NAME_LEN`] bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicationTitle {
    raw: String,
    dir_name: String,
}

impl PublicationTitle {
    /// Validate `title` and derive its directory name.
    pub fn new(title: &str) -> Result<Self, AppError> {
        let invalid = |reason| AppError::InvalidTitle { title: title.to_string(), reason };

        let dir_name =
            normalize_dir_name(title).ok_or_else(|| invalid("no usable characters"))?;
        if dir_name.len() > MAX_DIR_NAME_LEN {
            return Err(invalid("too long for a directory name"));
        }
        Ok(Self { raw: title.trim().to_string(), dir_name })
    }

    /// The title as given, trimmed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The title with control characters replaced by spaces, for one-line output.
    pub fn single_line(&self) -> String {
        self.raw.chars().map(|c| if c.is_control() { ' ' } else { c }).collect()
    }

    /// The path segment used for the publication directory and file stems.
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }
}

impl fmt::Display for PublicationTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn normalize_dir_name(title: &str) -> Option<String> {
    let replaced: String = title
        .trim()
        .chars()
        .map(|c| if c.is_control() || RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let name = replaced.trim_end_matches(|c: char| c == '.' || c.is_whitespace());

    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
