//! Classification key extraction.
//!
//! The routing key for a file is the first *character* of its content, decoded
//! as UTF-8 so multi-byte text classifies correctly. The content itself passes
//! through unchanged; the key is metadata about it.

use thiserror::Error;

/// Why a byte sequence could not yield a classification key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("content is empty; no character to classify")]
    Empty,
    #[error("leading bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Decode the first character of `content` as the classification key.
///
/// A single UTF-8 character spans at most four bytes, so only the head of the
/// slice is inspected.
pub fn classify(content: &[u8]) -> Result<char, ClassifyError> {
    if content.is_empty() {
        return Err(ClassifyError::Empty);
    }

    let head = &content[..content.len().min(4)];
    let valid = match std::str::from_utf8(head) {
        Ok(s) => s,
        Err(e) if e.valid_up_to() > 0 => {
            // The first character lies inside the valid prefix.
            std::str::from_utf8(&head[..e.valid_up_to()])
                .map_err(|_| ClassifyError::InvalidUtf8)?
        }
        Err(_) => return Err(ClassifyError::InvalidUtf8),
    };

    valid.chars().next().ok_or(ClassifyError::Empty)
}
