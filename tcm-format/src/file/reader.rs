use std::path::{Path, PathBuf};

use super::{meta::TcmData, TcmFile};
use crate::layout::MIN_LEN;

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Failed to read TCM file. Path: '{}'", .1.display())]
    ReadFailed(#[source] std::io::Error, PathBuf),

    #[error("Malformed TCM file: {len} bytes long, at least {} required.", MIN_LEN)]
    MalformedFile { len: usize },
}

impl OpenError {
    /// The I/O error behind a failed read, if that is what went wrong.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            OpenError::ReadFailed(e, _) => Some(e),
            OpenError::MalformedFile { .. } => None,
        }
    }
}

impl TcmFile {
    /// Reads the file at `path` into a new `TcmFile` with the default encoding.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TcmFile, OpenError> {
        let mut file = TcmFile::new();
        file.load_from(path)?;
        Ok(file)
    }

    /// Builds a loaded `TcmFile` from bytes already in memory.
    pub fn from_bytes(raw: Vec<u8>) -> Result<TcmFile, OpenError> {
        let mut file = TcmFile::new();
        file.load_bytes(raw)?;
        Ok(file)
    }

    /// Reads the whole file at `path`, replacing any previously loaded state.
    ///
    /// On error `self` is left exactly as it was.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<(), OpenError> {
        let path = path.as_ref();
        let raw =
            std::fs::read(path).map_err(|e| OpenError::ReadFailed(e, path.to_path_buf()))?;
        let len = raw.len();
        self.load_bytes(raw)?;

        tracing::debug!(path = %path.display(), bytes = len, "loaded TCM file");
        Ok(())
    }

    pub fn load_bytes(&mut self, raw: Vec<u8>) -> Result<(), OpenError> {
        let data =
            TcmData::parse(raw).map_err(|raw| OpenError::MalformedFile { len: raw.len() })?;
        self.replace(data);
        Ok(())
    }
}

/// Loads the file at `path` into `file`, returning whether it succeeded.
///
/// The cause of a failure is logged and otherwise discarded; `file` is not
/// touched. Use [TcmFile::load_from] to get the error itself.
pub fn load<P: AsRef<Path>>(path: P, file: &mut TcmFile) -> bool {
    match file.load_from(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, source = ?e.io_error(), "could not load TCM file");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotLoaded;

    fn scratch(name: &str, bytes: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        (dir, path)
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = TcmFile::new();
        assert!(!load(dir.path().join("missing.tcm"), &mut file));
        assert!(!file.is_loaded());
        assert_eq!(file.raw(), Err(NotLoaded));
    }

    #[test]
    fn open_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.tcm");
        match TcmFile::open(&path) {
            Err(OpenError::ReadFailed(e, p)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert_eq!(p, path);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn io_error_keeps_the_cause() {
        let dir = tempfile::tempdir().unwrap();
        let missing = TcmFile::open(dir.path().join("missing.tcm")).unwrap_err();
        let kind = missing.io_error().map(std::io::Error::kind);
        assert_eq!(kind, Some(std::io::ErrorKind::NotFound));

        let short = TcmFile::from_bytes(vec![0u8; 50]).unwrap_err();
        assert!(short.io_error().is_none());
    }

    #[test]
    fn load_short_files() {
        for len in &[0usize, 50, 70] {
            let (_dir, path) = scratch("short.tcm", &vec![7u8; *len]);
            let mut file = TcmFile::new();
            assert!(!load(&path, &mut file));
            assert!(!file.is_loaded());

            match TcmFile::open(&path) {
                Err(OpenError::MalformedFile { len: got }) => assert_eq!(got, *len),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn load_scenario() {
        let mut raw = vec![0u8; 75];
        raw[66] = 0x03;
        raw[70..74].copy_from_slice(&[0x41, 0x42, 0x43, 0x44]);
        raw[74] = 0xff;
        let (_dir, path) = scratch("scenario.tcm", &raw);

        let mut file = TcmFile::new();
        assert!(load(&path, &mut file));
        assert_eq!(file.cache_state(), Ok(3));
        assert_eq!(file.content().unwrap(), &[0x41, 0x42, 0x43, 0x44]);
        assert_eq!(file.chars().unwrap(), &['A', 'B', 'C', 'D']);
        assert_eq!(file.raw().unwrap(), &*raw);
    }

    #[test]
    fn failed_reload_keeps_previous_state() {
        let mut raw = vec![0u8; 80];
        raw[66] = 0x01;
        let mut file = TcmFile::from_bytes(raw.clone()).unwrap();

        let (dir, short) = scratch("short.tcm", &[0u8; 10]);
        assert!(!load(&short, &mut file));
        assert!(!load(dir.path().join("missing.tcm"), &mut file));

        assert!(file.is_loaded());
        assert_eq!(file.raw().unwrap(), &*raw);
        assert_eq!(file.cache_state(), Ok(1));
    }

    #[test]
    fn reload_replaces_everything() {
        let mut first = vec![0u8; 72];
        first[66] = 1;
        first[70] = b'x';
        let mut second = vec![0u8; 74];
        second[66] = 2;
        second[70..73].copy_from_slice(b"abc");

        let mut file = TcmFile::from_bytes(first).unwrap();
        file.load_bytes(second.clone()).unwrap();

        assert_eq!(file.raw().unwrap(), &*second);
        assert_eq!(file.cache_state(), Ok(2));
        assert_eq!(file.text().unwrap(), "abc");
    }
}
