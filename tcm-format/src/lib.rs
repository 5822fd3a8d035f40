//! Reading and writing of TCM cache files.
//!
//! A TCM file is an opaque binary blob with two fields of interest: a cache
//! state byte at offset 66, and content running from offset 70 to just before
//! the last byte. See [layout] for the exact offsets.
//!
//! ```no_run
//! let mut file = tcm_format::TcmFile::new();
//! if tcm_format::load("./cache.tcm", &mut file) {
//!     println!("cache state: {}", file.cache_state()?);
//!     println!("{}", file.display()?);
//! }
//! # Ok::<(), tcm_format::NotLoaded>(())
//! ```

mod error;
mod file;
pub mod layout;

pub use error::NotLoaded;
#[cfg(feature = "reader")]
pub use file::reader::{load, OpenError};
#[cfg(feature = "writer")]
pub use file::writer::{write, SaveError};
pub use file::{ContentDisplay, TcmFile, DEFAULT_ENCODING};
