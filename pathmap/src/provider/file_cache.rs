use std::path::{Path, PathBuf};

use bytes::Bytes;
use log::debug;

use crate::error::PathmapError;
use crate::provider::PersistentCacheController;

/// Stores the cached data as a set of files in the specified folder. File names are derived
/// from the request urls.
///
/// Request query parameters are part of the identity of a rendered image, so they are kept in
/// the derived file name (with characters unsafe for file systems replaced).
///
/// Currently, there is no eviction mechanism.
pub struct FileCacheController {
    folder_path: PathBuf,
}

impl PersistentCacheController<str, Bytes> for FileCacheController {
    fn get(&self, key: &str) -> Option<Bytes> {
        let file_path = self.get_file_path(key);
        if let Ok(bytes) = std::fs::read(file_path) {
            Some(bytes.into())
        } else {
            None
        }
    }

    fn insert(&self, key: &str, data: &Bytes) -> Result<(), PathmapError> {
        let file_path = self.get_file_path(key);
        debug!("Saving entry {key} to the cache file {file_path:?}");
        std::fs::write(&file_path, data)?;

        Ok(())
    }
}

impl FileCacheController {
    /// Creates a new instance. The cache will be located in the given directory. If the
    /// directory doesn't exist, it will be created on startup.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PathmapError> {
        std::fs::create_dir_all(path.as_ref()).map_err(|err| {
            PathmapError::Generic(format!(
                "failed to initialize file cache folder {:?}: {err}",
                path.as_ref()
            ))
        })?;

        Ok(Self {
            folder_path: path.as_ref().into(),
        })
    }

    fn get_file_path(&self, url: &str) -> PathBuf {
        let stripped = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);

        let file_name: String = stripped
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        self.folder_path.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(name: &str) -> FileCacheController {
        let path = std::env::temp_dir()
            .join("pathmap_cache_tests")
            .join(format!("{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&path);

        FileCacheController::new(&path).expect("failed to create cache folder")
    }

    #[test]
    fn round_trips_entries() {
        let cache = temp_cache("round_trip");
        let url = "https://maps.example.com/api/staticmap?key=K&center=37.7749,-122.4194&zoom=15";

        assert!(cache.get(url).is_none());

        cache
            .insert(url, &Bytes::from_static(b"image"))
            .expect("failed to insert");
        assert_eq!(cache.get(url), Some(Bytes::from_static(b"image")));
    }

    #[test]
    fn urls_with_different_parameters_do_not_collide() {
        let cache = temp_cache("parameters");
        let zoom_15 = "https://maps.example.com/api/staticmap?zoom=15";
        let zoom_16 = "https://maps.example.com/api/staticmap?zoom=16";

        cache
            .insert(zoom_15, &Bytes::from_static(b"fifteen"))
            .expect("failed to insert");
        cache
            .insert(zoom_16, &Bytes::from_static(b"sixteen"))
            .expect("failed to insert");

        assert_eq!(cache.get(zoom_15), Some(Bytes::from_static(b"fifteen")));
        assert_eq!(cache.get(zoom_16), Some(Bytes::from_static(b"sixteen")));
    }
}
