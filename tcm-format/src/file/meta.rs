use std::ops::Range;

use crate::layout;

/// Everything a successful load produces. Built in one step so that a
/// [TcmFile][crate::TcmFile] is either fully loaded or not loaded at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TcmData {
    /// The file exactly as read from disk.
    pub(crate) raw: Vec<u8>,

    /// Range of `raw` holding content.
    pub(crate) content: Range<usize>,

    pub(crate) cache_state: u8,

    /// One char per content byte, the byte value taken as the code point.
    pub(crate) chars: Vec<char>,
}

impl TcmData {
    /// Splits `raw` into its derived fields, handing the buffer back if it is
    /// too short to hold them.
    pub(crate) fn parse(raw: Vec<u8>) -> Result<TcmData, Vec<u8>> {
        let (content, cache_state) =
            match (layout::content_range(raw.len()), layout::cache_state(&raw)) {
                (Some(content), Some(cache_state)) => (content, cache_state),
                _ => return Err(raw),
            };

        let chars = raw[content.clone()].iter().copied().map(char::from).collect();

        Ok(TcmData {
            raw,
            content,
            cache_state,
            chars,
        })
    }

    #[inline(always)]
    pub(crate) fn content(&self) -> &[u8] {
        &self.raw[self.content.clone()]
    }
}
