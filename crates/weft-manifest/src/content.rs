//! Content encoding
//!
//! Decides, per entry, what bytes actually land on disk. Binary content is
//! passed through byte-for-byte; text is written as UTF-8 with no
//! line-ending translation. An empty entry is a valid zero-length file.

use std::borrow::Cow;

use crate::types::FileContent;

/// Produce the byte sequence to write for an entry.
///
/// `is_binary` marks how the upstream layer produced the content. A byte
/// buffer always passes through unchanged; textual content flagged binary
/// is reinterpreted as its raw bytes without any transcoding.
pub fn encode(content: &FileContent, is_binary: bool) -> Cow<'_, [u8]> {
    if is_binary {
        match content {
            FileContent::Bytes(bytes) => Cow::Borrowed(bytes.as_slice()),
            // Raw bytes that survived JSON transport as a string; keep them
            // byte-for-byte, no charset transcoding
            FileContent::Text(text) => Cow::Borrowed(text.as_bytes()),
        }
    } else {
        match content {
            // UTF-8 out, line endings untouched
            FileContent::Text(text) => Cow::Borrowed(text.as_bytes()),
            FileContent::Bytes(bytes) => Cow::Borrowed(bytes.as_slice()),
        }
    }
}
