use super::*;

use crate::storage::KeyValueStorage;
use super::search::filter_contacts;
use tracing::{debug, info, warn};

/// Key of the storage slot holding the serialized contact list.
pub const STORAGE_KEY: &str = "contacts";

/// What the initial load found in the storage slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Empty,
    Malformed(String),
}

/// Owns the contact collection and mirrors it into one key-value slot.
pub struct ContactStore {
    contacts: Vec<Contact>,
    storage: Box<dyn KeyValueStorage>,
    ids: IdSource,
    outcome: LoadOutcome,
}

impl ContactStore {
    /// Read the collection from `storage`.
    ///
    /// An absent or unparsable slot starts an empty collection; which of the
    /// two happened is logged and kept in [`ContactStore::load_outcome`].
    /// Errors from the storage backend itself are returned.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Result<Self, AppError> {
        let (contacts, outcome) = match storage.get_item(STORAGE_KEY)? {
            None => {
                info!(medium = storage.get_medium(), "No contacts found.");
                (Vec::new(), LoadOutcome::Empty)
            }
            Some(blob) => match serde_json::from_str::<Vec<Contact>>(&blob) {
                Ok(contacts) => {
                    debug!(count = contacts.len(), "contacts loaded");
                    let count = contacts.len();
                    (contacts, LoadOutcome::Loaded(count))
                }
                Err(err) => {
                    warn!(error = %err, "stored contacts are malformed, starting empty");
                    (Vec::new(), LoadOutcome::Malformed(err.to_string()))
                }
            },
        };

        let mut ids = IdSource::new();
        ids.observe(&contacts);

        Ok(Self {
            contacts,
            storage,
            ids,
            outcome,
        })
    }

    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn find(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn add(&mut self, draft: ContactDraft) -> Result<Contact, AppError> {
        let contact = Contact::new(self.ids.next_id()?, draft);
        self.contacts.push(contact.clone());
        self.save()?;

        info!(id = contact.id, "contact added");
        Ok(contact)
    }

    /// Overwrite name, email and phone of the contact with the same id.
    pub fn update(&mut self, contact: &Contact) -> Result<(), AppError> {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => {
                existing.apply(contact);
                self.save()?;
                info!(id = contact.id, "contact updated");
                Ok(())
            }
            None => {
                warn!(id = contact.id, "Contact not found.");
                Err(AppError::NotFound("Contact".to_string()))
            }
        }
    }

    /// Remove every contact carrying `id`.
    ///
    /// Nothing is written when the collection ends up empty, so the slot
    /// keeps its previous contents until the next mutation.
    pub fn delete(&mut self, id: ContactId) -> Result<(), AppError> {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        let removed = before - self.contacts.len();

        if !self.contacts.is_empty() {
            self.save()?;
        } else if removed > 0 {
            debug!(id, "collection emptied, storage left untouched");
        }

        info!(id, removed, "contact delete");
        Ok(())
    }

    pub fn search(&self, term: &str) -> Vec<&Contact> {
        filter_contacts(&self.contacts, term)
    }

    pub fn storage(&self) -> &dyn KeyValueStorage {
        self.storage.as_ref()
    }

    pub fn into_storage(self) -> Box<dyn KeyValueStorage> {
        self.storage
    }

    fn save(&mut self) -> Result<(), AppError> {
        let blob = serde_json::to_string(&self.contacts)?;
        self.storage.set_item(STORAGE_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemStorage};

    fn empty_store() -> Result<ContactStore, AppError> {
        ContactStore::load(Box::new(MemStorage::new()))
    }

    fn reload(store: ContactStore) -> Result<ContactStore, AppError> {
        ContactStore::load(store.into_storage())
    }

    #[test]
    fn starts_empty_without_stored_data() -> Result<(), AppError> {
        let store = empty_store()?;

        assert!(store.is_empty());
        assert_eq!(store.load_outcome(), &LoadOutcome::Empty);
        Ok(())
    }

    #[test]
    fn malformed_data_is_reported_and_replaced_by_empty() -> Result<(), AppError> {
        let mut storage = MemStorage::new();
        storage.set_item(STORAGE_KEY, "{definitely not a list")?;

        let store = ContactStore::load(Box::new(storage))?;

        assert!(store.is_empty());
        assert!(matches!(store.load_outcome(), LoadOutcome::Malformed(_)));
        Ok(())
    }

    #[test]
    fn add_assigns_unique_ids_and_appends() -> Result<(), AppError> {
        let mut store = empty_store()?;

        let ann = store.add(ContactDraft::new("Ann", "a@x.com", "111"))?;
        let bo = store.add(ContactDraft::new("Bo", "b@x.com", "222"))?;

        assert_ne!(ann.id, bo.id);
        assert_eq!(store.list(), &[ann.clone(), bo]);
        assert_eq!(store.list().iter().filter(|c| c.id == ann.id).count(), 1);
        Ok(())
    }

    #[test]
    fn add_persists_immediately() -> Result<(), AppError> {
        let mut store = empty_store()?;
        let ann = store.add(ContactDraft::new("Ann", "a@x.com", "111"))?;

        let store = reload(store)?;

        assert_eq!(store.list(), &[ann]);
        assert_eq!(store.load_outcome(), &LoadOutcome::Loaded(1));
        Ok(())
    }

    #[test]
    fn update_overwrites_fields_but_not_id() -> Result<(), AppError> {
        let mut store = empty_store()?;
        let ann = store.add(ContactDraft::new("Ann", "a@x.com", "111"))?;

        let mut edited = ann.clone();
        edited.name = "Annie".to_string();
        edited.email = "annie@x.com".to_string();
        edited.phone = "999".to_string();
        store.update(&edited)?;

        let store = reload(store)?;
        assert_eq!(store.list(), &[edited]);
        assert_eq!(store.list()[0].id, ann.id);
        Ok(())
    }

    #[test]
    fn update_unknown_id_changes_nothing() -> Result<(), AppError> {
        let mut store = empty_store()?;
        store.add(ContactDraft::new("Ann", "a@x.com", "111"))?;
        let before = store.storage().get_item(STORAGE_KEY)?;
        let snapshot = store.list().to_vec();

        let ghost = Contact::new(-1, ContactDraft::new("Ghost", "g@x.com", "000"));
        let result = store.update(&ghost);

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.list(), snapshot.as_slice());
        assert_eq!(store.storage().get_item(STORAGE_KEY)?, before);
        Ok(())
    }

    #[test]
    fn delete_removes_only_that_contact() -> Result<(), AppError> {
        let mut store = empty_store()?;
        let ann = store.add(ContactDraft::new("Ann", "a@x.com", "111"))?;
        let bo = store.add(ContactDraft::new("Bo", "b@x.com", "222"))?;

        store.delete(ann.id)?;

        let store = reload(store)?;
        assert_eq!(store.list(), &[bo]);
        Ok(())
    }

    #[test]
    fn delete_unknown_id_is_noop() -> Result<(), AppError> {
        let mut store = empty_store()?;
        let ann = store.add(ContactDraft::new("Ann", "a@x.com", "111"))?;

        store.delete(ann.id + 1000)?;

        assert_eq!(store.list(), &[ann]);
        Ok(())
    }

    #[test]
    fn delete_removes_duplicated_ids() -> Result<(), AppError> {
        let mut storage = MemStorage::new();
        storage.set_item(
            STORAGE_KEY,
            r#"[{"id":5,"name":"A","email":"","phone":""},
                {"id":5,"name":"B","email":"","phone":""},
                {"id":6,"name":"C","email":"","phone":""}]"#,
        )?;
        let mut store = ContactStore::load(Box::new(storage))?;

        store.delete(5)?;

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "C");
        Ok(())
    }

    #[test]
    fn deleting_last_contact_leaves_storage_stale() -> Result<(), AppError> {
        let mut store = empty_store()?;
        let bo = store.add(ContactDraft::new("Bo", "b@x.com", "222"))?;

        store.delete(bo.id)?;
        assert!(store.is_empty());

        let store = reload(store)?;
        assert_eq!(store.list(), &[bo]);
        Ok(())
    }

    #[test]
    fn new_ids_follow_loaded_ones() -> Result<(), AppError> {
        let mut storage = MemStorage::new();
        let far_future = i64::MAX / 2;
        storage.set_item(
            STORAGE_KEY,
            &format!(r#"[{{"id":{far_future},"name":"A","email":"","phone":""}}]"#),
        )?;
        let mut store = ContactStore::load(Box::new(storage))?;

        let added = store.add(ContactDraft::new("B", "", ""))?;

        assert_eq!(added.id, far_future + 1);
        Ok(())
    }

    #[test]
    fn add_after_max_id_fails_without_changes() -> Result<(), AppError> {
        let mut storage = MemStorage::new();
        storage.set_item(
            STORAGE_KEY,
            &format!(r#"[{{"id":{},"name":"A","email":"","phone":""}}]"#, i64::MAX),
        )?;
        let mut store = ContactStore::load(Box::new(storage))?;
        let before = store.storage().get_item(STORAGE_KEY)?;

        let result = store.add(ContactDraft::new("B", "", ""));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.storage().get_item(STORAGE_KEY)?, before);
        Ok(())
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() -> Result<(), AppError> {
        let mut store = empty_store()?;
        let ann = store.add(ContactDraft::new("Ann", "a@x.com", "111"))?;
        let bo = store.add(ContactDraft::new("Bo", "b@x.com", "222"))?;

        assert_eq!(store.search("ANN"), vec![&ann]);
        assert_eq!(store.search("222"), vec![&bo]);
        assert_eq!(store.search("x.com"), vec![&ann, &bo]);
        assert_eq!(store.search(""), vec![&ann, &bo]);
        assert!(store.search("nobody").is_empty());
        Ok(())
    }

    #[test]
    fn round_trips_through_file_storage() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("local_storage.json");

        let mut store = ContactStore::load(Box::new(FileStorage::new(&path)))?;
        store.add(ContactDraft::new("Ann", "a@x.com", "111"))?;
        store.add(ContactDraft::new("Bo", "b@x.com", "222"))?;
        let expected = store.list().to_vec();
        drop(store);

        let reopened = ContactStore::load(Box::new(FileStorage::new(&path)))?;
        assert_eq!(reopened.list(), expected.as_slice());
        Ok(())
    }
}
