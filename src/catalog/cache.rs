use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::debug;

use crate::catalog::loader::load_links;
use crate::domain::LinkItem;
use crate::error::Result;

/// Loads each distinct links file at most once and hands out shared,
/// read-only copies afterwards. Failed loads are not remembered.
#[derive(Default)]
pub struct LinkCache {
    entries: Mutex<HashMap<PathBuf, Arc<Vec<LinkItem>>>>,
}

impl LinkCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, path: &Path) -> Result<Arc<Vec<LinkItem>>> {
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(links) = entries.get(path) {
            debug!(path = %path.display(), "Links cache hit");
            return Ok(Arc::clone(links));
        }
        let links = Arc::new(load_links(path)?);
        entries.insert(path.to_path_buf(), Arc::clone(&links));
        Ok(links)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static GLOBAL_CACHE: OnceLock<LinkCache> = OnceLock::new();

/// Process-wide cached load keyed by path.
pub fn load_cached(path: &Path) -> Result<Arc<Vec<LinkItem>>> {
    GLOBAL_CACHE.get_or_init(LinkCache::new).load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn second_load_reuses_first_result() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.yml");
        fs::write(&path, "- {name: First}\n").unwrap();

        let cache = LinkCache::new();
        let first = cache.load(&path).unwrap();

        // File changes are not observed once cached
        fs::write(&path, "- {name: Second}\n- {name: Third}\n").unwrap();
        let second = cache.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second[0].name, "First");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.yml");

        let cache = LinkCache::new();
        assert!(cache.load(&path).is_err());
        assert!(cache.is_empty());

        fs::write(&path, "- {name: Late}\n").unwrap();
        assert_eq!(cache.load(&path).unwrap()[0].name, "Late");
    }

    #[test]
    fn poisoned_lock_still_reports_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.yml");
        fs::write(&path, "- {name: Kept}\n").unwrap();

        let cache = Arc::new(LinkCache::new());
        cache.load(&path).unwrap();

        let poisoner = Arc::clone(&cache);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("poison the cache lock");
        })
        .join();

        assert!(cache.entries.is_poisoned());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.load(&path).unwrap()[0].name, "Kept");
    }

    #[test]
    fn distinct_paths_are_cached_separately() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.yml");
        let b = dir.path().join("b.yml");
        fs::write(&a, "- {name: A}\n").unwrap();
        fs::write(&b, "- {name: B}\n").unwrap();

        assert_eq!(load_cached(&a).unwrap()[0].name, "A");
        assert_eq!(load_cached(&b).unwrap()[0].name, "B");
    }
}
