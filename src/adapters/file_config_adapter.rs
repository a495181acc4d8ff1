//! INI file configuration adapter.
//!
//! Owns the file-system side: opening a path, reading any byte stream, and
//! writing a store back out. File handles are scoped to each call.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::error::IniError;
use crate::domain::store::ConfigStore;
use crate::ports::config_port::ConfigPort;

/// Parse any byte stream into a store.
///
/// A stream that fails midway produces an empty store, never an error.
pub fn open_stream<R: Read>(reader: R) -> ConfigStore {
    ConfigStore::from_reader(BufReader::new(reader))
}

/// A [`ConfigStore`] bound to the file it was loaded from.
#[derive(Debug, Clone)]
pub struct FileConfigAdapter {
    path: PathBuf,
    store: ConfigStore,
}

impl FileConfigAdapter {
    /// An empty store that will be saved to `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            store: ConfigStore::new(),
        }
    }

    /// Load `path`, or `None` if it does not exist or cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!(path = %path.display(), "config file not found");
            return None;
        }
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                debug!(path = %path.display(), %err, "config file could not be opened");
                return None;
            }
        };
        Some(Self {
            path: path.to_path_buf(),
            store: open_stream(file),
        })
    }

    /// Load `path`, failing instead of degrading to an empty store.
    ///
    /// Use this before writing a file back, so unreadable content is never
    /// replaced.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IniError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            store: ConfigStore::try_from_reader(BufReader::new(file))?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    pub fn into_store(self) -> ConfigStore {
        self.store
    }

    /// Write the store back to the file it came from.
    pub fn save(&self) -> Result<(), IniError> {
        self.save_as(&self.path)
    }

    /// Write the store to `path`, replacing any existing file.
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<(), IniError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| IniError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.store.write_to(BufWriter::new(file))
    }
}

impl ConfigPort for FileConfigAdapter {
    fn lookup(&self, key: &str, section: Option<&str>) -> Option<&str> {
        self.store.lookup(key, section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    struct BrokenStream;

    impl Read for BrokenStream {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream reset"))
        }
    }

    #[test]
    fn open_reads_config() {
        let file = create_temp_config("top=1\n[report]\ntemplate_path=/path/to/template.typ\n");
        let adapter = FileConfigAdapter::open(file.path()).unwrap();
        assert_eq!(adapter.get_string("top", "", None), "1");
        assert_eq!(
            adapter.get_string("template_path", "", Some("report")),
            "/path/to/template.typ"
        );
        assert_eq!(adapter.path(), file.path());
    }

    #[test]
    fn open_returns_none_for_missing_file() {
        assert!(FileConfigAdapter::open("/nonexistent/path/config.ini").is_none());
    }

    #[test]
    fn open_returns_none_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileConfigAdapter::open(dir.path()).is_none());
    }

    #[test]
    fn open_with_invalid_text_yields_empty_store() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a=1\nb=\xff\n").unwrap();
        let adapter = FileConfigAdapter::open(file.path()).unwrap();
        assert!(adapter.store().is_empty());
    }

    #[test]
    fn load_reads_config() {
        let file = create_temp_config("[db]\nhost=localhost\n");
        let adapter = FileConfigAdapter::load(file.path()).unwrap();
        assert_eq!(adapter.get_string("host", "", Some("db")), "localhost");
    }

    #[test]
    fn load_reports_invalid_text() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a=1\nb=\xff\n").unwrap();
        let err = FileConfigAdapter::load(file.path()).unwrap_err();
        assert!(matches!(err, IniError::Read { line: 2, .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = FileConfigAdapter::load("/nonexistent/path/config.ini").unwrap_err();
        assert!(matches!(err, IniError::Open { .. }));
    }

    #[test]
    fn open_stream_parses_bytes() {
        let store = open_stream(&b"[s]\nk=v\n"[..]);
        assert_eq!(store.get_string("k", "", Some("s")), "v");
    }

    #[test]
    fn open_stream_failure_yields_empty_store() {
        let store = open_stream(BrokenStream);
        assert!(store.is_empty());
    }

    #[test]
    fn save_round_trips_through_disk() {
        let file = create_temp_config("");
        let mut adapter = FileConfigAdapter::open(file.path()).unwrap();
        adapter.store_mut().set_string("name", "demo", None);
        adapter.store_mut().set_value("port", 8080, Some("net"));
        adapter.save().unwrap();

        let reloaded = FileConfigAdapter::open(file.path()).unwrap();
        assert_eq!(reloaded.store(), adapter.store());
        assert_eq!(reloaded.get_u16("port", 0, Some("net")), 8080);
    }

    #[test]
    fn save_as_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.ini");
        let mut adapter = FileConfigAdapter::new(&path);
        adapter.store_mut().set_string("k", "v", None);
        adapter.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "k=v\n");
    }

    #[test]
    fn save_as_reports_unwritable_path() {
        let adapter = FileConfigAdapter::new("/nonexistent/dir/out.ini");
        let err = adapter.save().unwrap_err();
        assert!(matches!(err, IniError::Open { .. }));
    }

    #[test]
    fn into_store_releases_ownership() {
        let file = create_temp_config("k=v\n");
        let store = FileConfigAdapter::open(file.path()).unwrap().into_store();
        assert_eq!(store.get_string("k", "", None), "v");
    }
}
