use super::*;
pub use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ContactId = i64;

/// A single address-book entry. Field order is the persisted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The user-editable part of a contact, as held by the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl Contact {
    pub fn new(id: ContactId, draft: ContactDraft) -> Self {
        Contact {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
        }
    }

    /// Overwrite every field except `id`.
    pub fn apply(&mut self, other: &Contact) {
        self.name.clone_from(&other.name);
        self.email.clone_from(&other.email);
        self.phone.clone_from(&other.phone);
    }

    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {}",
            self.id, self.name, self.phone, self.email
        )
    }
}

/// Hands out contact ids from the wall clock in milliseconds.
///
/// Ids never go backwards or repeat: if the clock has not moved past the
/// last id issued (or seen on load), the next id is `last + 1`.
#[derive(Debug, Default, Clone)]
pub struct IdSource {
    last: Option<ContactId>,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids are greater than every id in `contacts`.
    pub fn observe(&mut self, contacts: &[Contact]) {
        if let Some(max) = contacts.iter().map(|c| c.id).max() {
            self.last = Some(self.last.map_or(max, |last| last.max(max)));
        }
    }

    pub fn next_id(&mut self) -> Result<ContactId, AppError> {
        self.next_id_at(Utc::now())
    }

    /// Fails once the last id is `ContactId::MAX`; nothing is issued then.
    pub fn next_id_at(&mut self, now: DateTime<Utc>) -> Result<ContactId, AppError> {
        let stamp = now.timestamp_millis();
        let id = match self.last {
            Some(last) if stamp <= last => last
                .checked_add(1)
                .ok_or_else(|| AppError::Validation("no contact ids left".to_string()))?,
            _ => stamp,
        };
        self.last = Some(id);
        Ok(id)
    }
}
