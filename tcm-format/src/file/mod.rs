use std::fmt;

use crate::error::NotLoaded;

pub(crate) mod meta;
#[cfg(feature = "reader")]
pub mod reader;
#[cfg(feature = "writer")]
pub mod writer;

use self::meta::TcmData;

/// Encoding label used when none is given.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// An in-memory TCM cache file.
///
/// A `TcmFile` starts out empty. Every derived value (`raw`, `content`,
/// `cache_state`, `chars`) returns [NotLoaded] until a load succeeds, after
/// which all of them are available at once.
pub struct TcmFile {
    pub(crate) encoding: String,
    pub(crate) data: Option<TcmData>,
}

impl TcmFile {
    pub fn new() -> TcmFile {
        TcmFile::with_encoding(DEFAULT_ENCODING)
    }

    /// The encoding is only recorded; [TcmFile::chars] maps bytes straight to
    /// code points regardless of it.
    pub fn with_encoding<S: Into<String>>(encoding: S) -> TcmFile {
        TcmFile {
            encoding: encoding.into(),
            data: None,
        }
    }

    #[inline(always)]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    #[inline(always)]
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    #[inline(always)]
    fn data(&self) -> Result<&TcmData, NotLoaded> {
        self.data.as_ref().ok_or(NotLoaded)
    }

    /// The complete file as it was read.
    #[inline(always)]
    pub fn raw(&self) -> Result<&[u8], NotLoaded> {
        self.data().map(|d| &*d.raw)
    }

    /// Bytes from offset 70 up to, but not including, the last byte.
    #[inline(always)]
    pub fn content(&self) -> Result<&[u8], NotLoaded> {
        self.data().map(TcmData::content)
    }

    /// The byte at offset 66.
    #[inline(always)]
    pub fn cache_state(&self) -> Result<u8, NotLoaded> {
        self.data().map(|d| d.cache_state)
    }

    #[inline(always)]
    pub fn chars(&self) -> Result<&[char], NotLoaded> {
        self.data().map(|d| &*d.chars)
    }

    pub fn text(&self) -> Result<String, NotLoaded> {
        self.chars().map(|chars| chars.iter().collect())
    }

    /// Shows the content bytes, e.g. `[65, 66, 67]`. `Display` and `Debug`
    /// render the same.
    pub fn display(&self) -> Result<ContentDisplay<'_>, NotLoaded> {
        self.content().map(ContentDisplay)
    }

    pub(crate) fn replace(&mut self, data: TcmData) {
        self.data = Some(data);
    }
}

impl Default for TcmFile {
    fn default() -> Self {
        TcmFile::new()
    }
}

impl fmt::Debug for TcmFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TcmFile");
        s.field("encoding", &self.encoding)
            .field("loaded", &self.is_loaded());
        if let Ok(content) = self.display() {
            s.field("content", &content);
        }
        s.finish_non_exhaustive()
    }
}

/// Helper returned by [TcmFile::display].
#[derive(Clone, Copy)]
pub struct ContentDisplay<'a>(&'a [u8]);

impl fmt::Display for ContentDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Debug for ContentDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
