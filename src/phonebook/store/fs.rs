use super::ContactStore;
use crate::error::Result;
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStore for FileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let contacts: Vec<Contact> = serde_json::from_str(&content)?;
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(contacts)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::store::memory::fixtures;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("phonebook.json"))
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let contacts = fixtures::contacts(3);
        store.save(&contacts).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(contacts, loaded);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.save(&fixtures::contacts(5)).unwrap();
        store.save(&fixtures::contacts(2)).unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/dir/phonebook.json"));

        store.save(&fixtures::contacts(1)).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn malformed_file_propagates_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phonebook.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(PhonebookError::Serialization(_))
        ));
    }

    #[test]
    fn invalid_phone_in_file_fails_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phonebook.json");
        fs::write(
            &path,
            r#"[{
                "last_name": "Smith",
                "first_name": "Anna",
                "middle_name": "J",
                "organization": "Globex",
                "work_phone": "123",
                "personal_phone": "79997654321"
            }]"#,
        )
        .unwrap();

        let store = FileStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn file_is_human_readable_json() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&fixtures::contacts(1)).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"last_name\""));
        assert!(raw.lines().count() > 1, "expected indented output");
    }
}
