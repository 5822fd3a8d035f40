use std::ops::Range;

/// Offset of the single cache state byte.
pub const CACHE_STATE_OFFSET: usize = 66;

/// Offset of the first content byte.
pub const CONTENT_OFFSET: usize = 70;

/// Smallest file that still carries a cache state byte, the content offset and
/// the trailing byte that content never includes.
pub const MIN_LEN: usize = CONTENT_OFFSET + 1;

/// Returns the cache state byte, or `None` if `raw` is too short to be a TCM file.
#[inline(always)]
pub fn cache_state(raw: &[u8]) -> Option<u8> {
    if raw.len() < MIN_LEN {
        return None;
    }
    raw.get(CACHE_STATE_OFFSET).copied()
}

/// Returns the range of `raw` holding content: from [CONTENT_OFFSET] up to,
/// but not including, the last byte.
#[inline(always)]
pub fn content_range(len: usize) -> Option<Range<usize>> {
    if len < MIN_LEN {
        return None;
    }
    Some(CONTENT_OFFSET..len - 1)
}
