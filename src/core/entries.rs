//! Glossary entry reading

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::core::errors::{DeeplError, Result};

/// Default upper bound on glossary entry input (10 MiB)
pub const DEFAULT_MAX_ENTRIES_BYTES: u64 = 10 * 1024 * 1024;

/// Collapse every `\r\n` into `\n`
pub fn normalize_line_endings(entries: &str) -> String {
    entries.replace("\r\n", "\n")
}

/// Drain `reader` into a string of normalized TSV entries.
///
/// Input larger than `limit` bytes is rejected without being fully buffered.
/// Non-UTF-8 input surfaces as an [`std::io::Error`] of kind `InvalidData`.
pub async fn read_entries<R>(reader: R, limit: u64) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    // One byte past the limit is enough to tell "exactly at limit" from "over".
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .await?;

    if bytes.len() as u64 > limit {
        return Err(DeeplError::EntriesTooLarge { limit });
    }

    let raw = String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let entries = normalize_line_endings(&raw);
    debug!(
        bytes = entries.len(),
        lines = entries.lines().count(),
        "Read glossary entries"
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_crlf() {
        assert_eq!(
            normalize_line_endings("hello\tHallo\r\nworld\tWelt\r\n"),
            "hello\tHallo\nworld\tWelt\n"
        );
    }

    #[test]
    fn test_normalize_keeps_lone_cr_and_lf() {
        assert_eq!(normalize_line_endings("a\rb\nc"), "a\rb\nc");
    }

    #[tokio::test]
    async fn test_read_entries_normalizes() {
        let input: &[u8] = b"hello\tHallo\r\nworld\tWelt\r\n";
        let entries = read_entries(input, DEFAULT_MAX_ENTRIES_BYTES).await.unwrap();
        assert_eq!(entries, "hello\tHallo\nworld\tWelt\n");
    }

    #[tokio::test]
    async fn test_read_entries_at_limit() {
        let input: &[u8] = b"a\tb\n";
        let entries = read_entries(input, 4).await.unwrap();
        assert_eq!(entries, "a\tb\n");
    }

    #[tokio::test]
    async fn test_read_entries_over_limit() {
        let input: &[u8] = b"a\tb\nc\td\n";
        let result = read_entries(input, 4).await;
        assert!(matches!(result, Err(DeeplError::EntriesTooLarge { limit: 4 })));
    }

    #[tokio::test]
    async fn test_read_entries_over_limit_mid_character() {
        // The cut at limit + 1 lands inside the first 'é'.
        let input: &[u8] = "aéé".as_bytes();
        let result = read_entries(input, 1).await;
        assert!(matches!(result, Err(DeeplError::EntriesTooLarge { limit: 1 })));
    }

    #[tokio::test]
    async fn test_read_entries_invalid_utf8() {
        let input: &[u8] = &[0x66, 0xff, 0x09, 0x67];
        let result = read_entries(input, DEFAULT_MAX_ENTRIES_BYTES).await;
        assert!(matches!(result, Err(DeeplError::IoError(_))));
    }
}
