pub mod copy;
pub mod info;
pub mod text;

pub use copy::run as copy;
pub use info::run as info;
pub use text::run as text;

use std::path::Path;

use tcm_format::{NotLoaded, TcmFile};

use crate::error::{Error, Result};

pub(crate) fn open(path: &Path) -> Result<TcmFile> {
    TcmFile::open(path).map_err(|source| Error::OpenFile {
        path: path.to_path_buf(),
        source,
    })
}

#[inline(always)]
pub(crate) fn loaded<T>(path: &Path, value: std::result::Result<T, NotLoaded>) -> Result<T> {
    value.map_err(|source| Error::NotLoaded {
        path: path.to_path_buf(),
        source,
    })
}
