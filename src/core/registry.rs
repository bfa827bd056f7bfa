use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::core::{
    contact::{Contact, ContactDraft, ContactId},
    id::{IdGenerator, UuidIds},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no contact with id `{0}`")]
    NotFound(ContactId),
}

/// Ordered, in-memory collection of contacts.
///
/// Insertion order is kept and ids are unique as long as the generator
/// honors the [`IdGenerator`] contract. `update` and `delete` silently ignore
/// unknown ids; use `try_update`/`try_delete` for an explicit not-found.
pub struct ContactRegistry {
    contacts: Vec<Contact>,
    ids: Box<dyn IdGenerator + Send>,
}

impl fmt::Debug for ContactRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactRegistry")
            .field("contacts", &self.contacts)
            .finish()
    }
}

impl Default for ContactRegistry {
    fn default() -> Self {
        Self::new(Box::new(UuidIds))
    }
}

impl ContactRegistry {
    pub fn new(ids: Box<dyn IdGenerator + Send>) -> Self {
        Self {
            contacts: Vec::new(),
            ids,
        }
    }

    /// Append a new contact and return a copy of it.
    pub fn insert(&mut self, draft: ContactDraft) -> Contact {
        let contact = Contact {
            id: self.ids.next_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
        };
        info!(id = %contact.id, len = self.contacts.len() + 1, "contact inserted");
        self.contacts.push(contact.clone());
        contact
    }

    /// Replace the fields of `id` in place. Returns whether a contact matched.
    pub fn update(&mut self, id: &ContactId, draft: ContactDraft) -> bool {
        match self.try_update(id, draft) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "update ignored");
                false
            }
        }
    }

    pub fn try_update(
        &mut self,
        id: &ContactId,
        draft: ContactDraft,
    ) -> Result<&Contact, RegistryError> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        contact.apply(draft);
        info!(id = %contact.id, "contact updated");
        Ok(&*contact)
    }

    /// Remove `id`. Returns whether a contact matched.
    pub fn delete(&mut self, id: &ContactId) -> bool {
        match self.try_delete(id) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "delete ignored");
                false
            }
        }
    }

    pub fn try_delete(&mut self, id: &ContactId) -> Result<Contact, RegistryError> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        let removed = self.contacts.remove(index);
        info!(id = %removed.id, len = self.contacts.len(), "contact deleted");
        Ok(removed)
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| &c.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContactRegistry {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
