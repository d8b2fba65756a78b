//! HTTP `Range` header handling.
//!
//! Only single ranges of the form `bytes=<start>-<end>` (end optional) are
//! honoured. Anything else, including suffix ranges and multi-range lists,
//! is ignored and the full asset is served.

use signbridge_common::{Error, Result};

/// An inclusive byte range into an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

#[allow(clippy::len_without_is_empty)]
impl ByteRange {
    /// Number of bytes covered, `end - start + 1`.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` value for an asset of `size` bytes.
    pub fn content_range(&self, size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, size)
    }
}

/// What a request asks for once validated against the asset size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No usable range: serve everything with 200.
    Full,
    /// Serve a slice with 206.
    Partial(ByteRange),
}

/// Parse a `Range: bytes=START-END` header value.
///
/// Returns `(start, Option<end>)` where `end` is `None` for open-ended ranges
/// like `bytes=500-`. Returns `None` for anything that is not a single,
/// well-formed, forward range.
pub fn parse_range_header(value: &str) -> Option<(u64, Option<u64>)> {
    let ranges = value.trim().strip_prefix("bytes=")?;
    if ranges.contains(',') {
        return None;
    }

    let (start_str, end_str) = ranges.split_once('-')?;
    let start_str = start_str.trim();
    let end_str = end_str.trim();

    if !is_digits(start_str) {
        return None;
    }
    // Digit strings too long for u64 saturate so they still compare past the end.
    let start: u64 = start_str.parse().unwrap_or(u64::MAX);

    let end = if end_str.is_empty() {
        None
    } else if is_digits(end_str) {
        Some(end_str.parse().unwrap_or(u64::MAX))
    } else {
        return None;
    };

    if matches!(end, Some(end) if end < start) {
        return None;
    }

    Some((start, end))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate an optional `Range` header against an asset of `size` bytes.
///
/// Malformed headers fall back to [`RangeOutcome::Full`]. A start at or past
/// the end of the asset fails with [`Error::RangeNotSatisfiable`]. An end past
/// the last byte is clamped.
pub fn resolve_range(header: Option<&str>, size: u64) -> Result<RangeOutcome> {
    let Some((start, end)) = header.and_then(parse_range_header) else {
        return Ok(RangeOutcome::Full);
    };

    if start >= size {
        return Err(Error::RangeNotSatisfiable { size });
    }

    let last = size - 1;
    let end = end.unwrap_or(last).min(last);

    Ok(RangeOutcome::Partial(ByteRange { start, end }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_header_full_range() {
        assert_eq!(parse_range_header("bytes=0-499"), Some((0, Some(499))));
    }

    #[test]
    fn test_parse_range_header_open_end() {
        assert_eq!(parse_range_header("bytes=500-"), Some((500, None)));
    }

    #[test]
    fn test_parse_range_header_whitespace() {
        assert_eq!(parse_range_header("  bytes= 10 - 20 "), Some((10, Some(20))));
    }

    #[test]
    fn test_parse_range_header_rejects_suffix() {
        assert_eq!(parse_range_header("bytes=-200"), None);
    }

    #[test]
    fn test_parse_range_header_rejects_multi_range() {
        assert_eq!(parse_range_header("bytes=0-10,20-30"), None);
    }

    #[test]
    fn test_parse_range_header_invalid_format() {
        assert_eq!(parse_range_header("bytes=-"), None);
        assert_eq!(parse_range_header("bytes=abc-def"), None);
        assert_eq!(parse_range_header("bytes=+5-10"), None);
        assert_eq!(parse_range_header("items=0-10"), None);
        assert_eq!(parse_range_header("bytes=10"), None);
        assert_eq!(parse_range_header(""), None);
    }

    #[test]
    fn test_parse_range_header_saturates_overflow() {
        assert_eq!(
            parse_range_header("bytes=99999999999999999999999-"),
            Some((u64::MAX, None))
        );
        assert_eq!(
            parse_range_header("bytes=990-99999999999999999999999"),
            Some((990, Some(u64::MAX)))
        );
    }

    #[test]
    fn test_resolve_range_overflowing_numbers() {
        assert!(matches!(
            resolve_range(Some("bytes=99999999999999999999999-"), 1000),
            Err(Error::RangeNotSatisfiable { size: 1000 })
        ));
        assert_eq!(
            resolve_range(Some("bytes=990-99999999999999999999999"), 1000).unwrap(),
            RangeOutcome::Partial(ByteRange { start: 990, end: 999 })
        );
    }

    #[test]
    fn test_parse_range_header_backwards() {
        assert_eq!(parse_range_header("bytes=300-200"), None);
    }

    #[test]
    fn test_resolve_without_header() {
        assert_eq!(resolve_range(None, 1000).unwrap(), RangeOutcome::Full);
    }

    #[test]
    fn test_resolve_malformed_is_full() {
        assert_eq!(
            resolve_range(Some("bytes=oops"), 1000).unwrap(),
            RangeOutcome::Full
        );
        assert_eq!(
            resolve_range(Some("bytes=0-10,20-30"), 1000).unwrap(),
            RangeOutcome::Full
        );
    }

    #[test]
    fn test_resolve_exact_range() {
        let outcome = resolve_range(Some("bytes=200-299"), 1000).unwrap();
        let RangeOutcome::Partial(range) = outcome else {
            panic!("expected partial, got {outcome:?}");
        };
        assert_eq!(range, ByteRange { start: 200, end: 299 });
        assert_eq!(range.len(), 100);
        assert_eq!(range.content_range(1000), "bytes 200-299/1000");
    }

    #[test]
    fn test_resolve_open_end() {
        assert_eq!(
            resolve_range(Some("bytes=900-"), 1000).unwrap(),
            RangeOutcome::Partial(ByteRange { start: 900, end: 999 })
        );
    }

    #[test]
    fn test_resolve_clamps_end() {
        assert_eq!(
            resolve_range(Some("bytes=0-2000"), 1000).unwrap(),
            RangeOutcome::Partial(ByteRange { start: 0, end: 999 })
        );
    }

    #[test]
    fn test_resolve_last_byte() {
        let outcome = resolve_range(Some("bytes=999-999"), 1000).unwrap();
        assert_eq!(
            outcome,
            RangeOutcome::Partial(ByteRange { start: 999, end: 999 })
        );
    }

    #[test]
    fn test_resolve_start_past_end() {
        for header in ["bytes=1000-", "bytes=1500-", "bytes=1000-1200"] {
            let err = resolve_range(Some(header), 1000).unwrap_err();
            assert!(
                matches!(err, Error::RangeNotSatisfiable { size: 1000 }),
                "{header}"
            );
        }
    }

    #[test]
    fn test_resolve_empty_asset() {
        assert_eq!(resolve_range(None, 0).unwrap(), RangeOutcome::Full);
        assert!(matches!(
            resolve_range(Some("bytes=0-"), 0),
            Err(Error::RangeNotSatisfiable { size: 0 })
        ));
    }

    #[test]
    fn test_resolve_every_valid_pair_small_asset() {
        let size = 16u64;
        for start in 0..size {
            for end in start..size + 4 {
                let header = format!("bytes={start}-{end}");
                let RangeOutcome::Partial(range) = resolve_range(Some(&header), size).unwrap()
                else {
                    panic!("expected partial for {header}");
                };
                assert_eq!(range.start, start);
                assert_eq!(range.end, end.min(size - 1));
                assert!(range.len() >= 1 && range.end < size);
            }
        }
    }
}
