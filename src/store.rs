// File store: whole-file JSON blobs, one fixed path per resource kind.
// Last write wins; there is no indexing and no partial update.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the cache directory.
pub const DATA_DIR_ENV: &str = "MOVIEDB_DATA_DIR";

/// The five cacheable payload kinds, each with its own fixed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    PopularMovies,
    NowPlayingMovies,
    Movie,
    PopularPersons,
    Person,
}

impl ResourceKind {
    /// File name for this kind inside the cache directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ResourceKind::PopularMovies => "popular-movies.json",
            ResourceKind::NowPlayingMovies => "now-playing-movies.json",
            ResourceKind::Movie => "movie.json",
            ResourceKind::PopularPersons => "popular-persons.json",
            ResourceKind::Person => "person.json",
        }
    }
}

/// Storage interface for cached payloads, agnostic of the backing medium.
pub trait CacheStore {
    /// Overwrite the file for `kind` with `payload`.
    fn save(&self, kind: ResourceKind, payload: &Value) -> Result<()>;

    /// Read back the most recently saved payload for `kind`.
    fn load(&self, kind: ResourceKind) -> Result<Value>;
}

/// Cache store backed by one JSON file per resource kind.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    /// Resolve the cache directory from `MOVIEDB_DATA_DIR`, or fall back to
    /// the platform data directory (or the working directory as a last
    /// resort).
    pub fn from_env() -> Self {
        let dir = match std::env::var(DATA_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => {
                let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
                base.join("moviedb-cli").join("files")
            }
        };
        FileStore::new(dir)
    }

    pub fn path(&self, kind: ResourceKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl CacheStore for FileStore {
    fn save(&self, kind: ResourceKind, payload: &Value) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let text = serde_json::to_string_pretty(payload)
            .map_err(|err| Error::FileSystem(err.to_string()))?;
        let path = self.path(kind);
        fs::write(&path, text)
            .map_err(|err| Error::FileSystem(format!("cannot write {}: {err}", path.display())))
    }

    fn load(&self, kind: ResourceKind) -> Result<Value> {
        let path = self.path(kind);
        let text = fs::read_to_string(&path)
            .map_err(|err| Error::FileSystem(format!("cannot read {}: {err}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|err| Error::FileSystem(format!("cannot parse {}: {err}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL_KINDS: [ResourceKind; 5] = [
        ResourceKind::PopularMovies,
        ResourceKind::NowPlayingMovies,
        ResourceKind::Movie,
        ResourceKind::PopularPersons,
        ResourceKind::Person,
    ];

    #[test]
    fn save_creates_the_directory_and_load_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("files");
        let store = FileStore::new(nested.clone());

        let payload = json!({ "page": 1, "results": [{ "id": 7, "title": "x" }] });
        store.save(ResourceKind::PopularMovies, &payload).unwrap();

        assert!(nested.join("popular-movies.json").is_file());
        assert_eq!(store.load(ResourceKind::PopularMovies).unwrap(), payload);
    }

    #[test]
    fn each_kind_has_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        let mut names: Vec<&str> = ALL_KINDS.iter().map(|k| k.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_KINDS.len());

        store.save(ResourceKind::PopularMovies, &json!({"page": 1})).unwrap();
        store.save(ResourceKind::NowPlayingMovies, &json!({"page": 2})).unwrap();
        assert_eq!(store.load(ResourceKind::PopularMovies).unwrap()["page"], 1);
        assert_eq!(store.load(ResourceKind::NowPlayingMovies).unwrap()["page"], 2);
    }

    #[test]
    fn loading_a_missing_file_is_a_file_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        match store.load(ResourceKind::Person) {
            Err(Error::FileSystem(message)) => assert!(message.contains("person.json")),
            other => panic!("expected a file store error, got {other:?}"),
        }
    }

    #[test]
    fn saving_overwrites_the_previous_payload() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.save(ResourceKind::Person, &json!({"name": "old"})).unwrap();
        store.save(ResourceKind::Person, &json!({"name": "new"})).unwrap();
        assert_eq!(store.load(ResourceKind::Person).unwrap()["name"], "new");
    }
}
