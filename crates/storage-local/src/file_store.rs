use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;

use pamoja_core::errors::{Result, StorageError};
use pamoja_core::store::LocalStoreTrait;

/// Key-value store persisted as one JSON object on disk.
///
/// The whole document is held in memory and rewritten on every mutation.
/// Writes go through a temp file followed by a rename so a crash mid-write
/// never leaves a truncated document behind.
pub struct FileStore {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    ///
    /// A missing file starts empty. An unreadable or malformed file also
    /// starts empty, after a warning; the container reseeds the slices it
    /// cannot recover.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::from)?;
        }

        let items = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(items) => items,
                Err(e) => {
                    warn!(
                        "Store file '{}' is not a valid document ({}); starting empty",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::from(e).into()),
        };

        Ok(FileStore {
            path,
            items: Mutex::new(items),
        })
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let document = serde_json::to_string_pretty(items).map_err(StorageError::from)?;
        let tmp = temp_sibling(&self.path);
        let mut file = fs::File::create(&tmp).map_err(StorageError::from)?;
        file.write_all(document.as_bytes())
            .map_err(StorageError::from)?;
        file.sync_all().map_err(StorageError::from)?;
        fs::rename(&tmp, &self.path).map_err(StorageError::from)?;
        Ok(())
    }
}

impl LocalStoreTrait for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.lock().unwrap().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap();
        items.insert(key.to_string(), value.to_string());
        self.flush(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap();
        if items.remove(key).is_some() {
            self.flush(&items)?;
        }
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "store.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
