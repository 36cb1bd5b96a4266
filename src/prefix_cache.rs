use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
    sync::Arc,
};

use dashmap::DashMap;
use log::debug;

use crate::{phoneinfo::errors::PrefixFileError, prefix_map::PrefixMap};

/// Lazily loaded prefix files, keyed by path. A file that does not exist is
/// remembered as `None` so it is not probed again.
pub struct PrefixCache {
    cache: DashMap<PathBuf, Option<Arc<PrefixMap>>>,
}

impl PrefixCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_map(&self, path: &Path) -> Result<Option<Arc<PrefixMap>>, PrefixFileError> {
        if let Some(map) = self.cache.get(path) {
            return Ok(map.value().clone());
        }
        let entry = self
            .cache
            .entry(path.to_path_buf())
            .or_try_insert_with(|| load_prefix_file(path))?;
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for PrefixCache {
    fn default() -> Self {
        Self::new()
    }
}

fn load_prefix_file(path: &Path) -> Result<Option<Arc<PrefixMap>>, PrefixFileError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No prefix data at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let map = PrefixMap::parse(BufReader::new(file))?;
    debug!("Loaded {} prefixes from {}", map.len(), path.display());
    Ok(Some(Arc::new(map)))
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::Arc};

    use super::PrefixCache;

    #[test]
    fn test_missing_file_is_cached_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PrefixCache::default();
        let path = dir.path().join("missing.txt");
        assert!(cache.get_map(&path).unwrap().is_none());
        assert_eq!(cache.len(), 1);
        // still None after the file appears, the miss is remembered
        fs::write(&path, "1|x\n").unwrap();
        assert!(cache.get_map(&path).unwrap().is_none());
    }

    #[test]
    fn test_repeated_loads_share_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("44.txt");
        fs::write(&path, "4420|London\n").unwrap();

        let cache = PrefixCache::with_capacity(4);
        let first = cache.get_map(&path).unwrap().unwrap();
        let second = cache.get_map(&path).unwrap().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.lookup("442087654321"), Some("London"));
    }

    #[test]
    fn test_parse_errors_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.txt");
        fs::write(&path, "abc|broken\n").unwrap();

        let cache = PrefixCache::new();
        assert!(cache.get_map(&path).is_err());
        assert!(cache.is_empty());

        fs::write(&path, "1650|California\n").unwrap();
        let map = cache.get_map(&path).unwrap().unwrap();
        assert_eq!(map.lookup("16502530000"), Some("California"));
    }
}
