use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open TCM file `{}`", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: tcm_format::OpenError,
    },

    #[error("Cannot write TCM file `{}`", .path.display())]
    SaveFile {
        path: PathBuf,
        #[source]
        source: tcm_format::SaveError,
    },

    #[error("Cannot read from TCM file `{}`", .path.display())]
    NotLoaded {
        path: PathBuf,
        #[source]
        source: tcm_format::NotLoaded,
    },

    #[error("Cannot serialize file info")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}
