/// Returned when a derived value is read from a [TcmFile][crate::TcmFile]
/// that has not loaded a cache file yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "The value you are getting is not available as this TcmFile does not contain a loaded \
     cache file. To load a cache file, call `tcm_format::load(\"./your_file_name.tcm\", &mut file)`."
)]
pub struct NotLoaded;
