use tracing::debug;

use crate::core::{
    contact::{Contact, ContactDraft, ContactId},
    id::IdGenerator,
    registry::ContactRegistry,
};

/// A state change requested by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Insert(ContactDraft),
    Update(ContactId, ContactDraft),
    Delete(ContactId),
    Select(Option<ContactId>),
}

/// What a dispatched [`Action`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inserted(Contact),
    Updated(ContactId),
    Deleted(ContactId),
    Selected(Option<ContactId>),
    /// Update or delete targeted an id that is not in the registry.
    Ignored,
}

/// Single owner of the registry and the current selection.
///
/// Screens get `&mut ContactStore` and change it only through [`dispatch`](Self::dispatch).
#[derive(Debug, Default)]
pub struct ContactStore {
    registry: ContactRegistry,
    selection: Option<ContactId>,
    revision: u64,
}

impl ContactStore {
    pub fn new(ids: Box<dyn IdGenerator + Send>) -> Self {
        Self {
            registry: ContactRegistry::new(ids),
            selection: None,
            revision: 0,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::Insert(draft) => Outcome::Inserted(self.registry.insert(draft)),
            Action::Update(id, draft) => {
                if self.registry.update(&id, draft) {
                    Outcome::Updated(id)
                } else {
                    Outcome::Ignored
                }
            }
            Action::Delete(id) => {
                if self.registry.delete(&id) {
                    if self.selection.as_ref() == Some(&id) {
                        self.selection = None;
                    }
                    Outcome::Deleted(id)
                } else {
                    Outcome::Ignored
                }
            }
            Action::Select(id) => {
                debug!(selection = ?id, "selection changed");
                self.selection = id.clone();
                Outcome::Selected(id)
            }
        };
        if outcome != Outcome::Ignored {
            self.revision += 1;
        }
        outcome
    }

    pub fn registry(&self) -> &ContactRegistry {
        &self.registry
    }

    pub fn contacts(&self) -> &[Contact] {
        self.registry.as_slice()
    }

    pub fn selection(&self) -> Option<&ContactId> {
        self.selection.as_ref()
    }

    /// The selected contact, if the selection still points at a live record.
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selection.as_ref().and_then(|id| self.registry.get(id))
    }

    /// Starting values for the edit form. Empty strings without a live selection.
    pub fn edit_defaults(&self) -> ContactDraft {
        self.selected_contact()
            .map(Contact::draft)
            .unwrap_or_default()
    }

    /// Incremented on every dispatch that changed something.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::SequentialIds;

    fn store() -> ContactStore {
        ContactStore::new(Box::new(SequentialIds::default()))
    }

    fn insert(store: &mut ContactStore, name: &str) -> Contact {
        match store.dispatch(Action::Insert(ContactDraft::new(name, "", ""))) {
            Outcome::Inserted(contact) => contact,
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn deleting_the_selected_contact_clears_selection() {
        let mut store = store();
        let ana = insert(&mut store, "Ana");
        store.dispatch(Action::Select(Some(ana.id.clone())));
        assert_eq!(store.dispatch(Action::Delete(ana.id.clone())), Outcome::Deleted(ana.id));
        assert_eq!(store.selection(), None);
    }

    #[test]
    fn ignored_actions_do_not_bump_revision() {
        let mut store = store();
        insert(&mut store, "Ana");
        let before = store.revision();
        let ghost = ContactId::new("ghost");
        assert_eq!(store.dispatch(Action::Delete(ghost.clone())), Outcome::Ignored);
        assert_eq!(
            store.dispatch(Action::Update(ghost, ContactDraft::default())),
            Outcome::Ignored
        );
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn edit_defaults_fall_back_to_empty_fields() {
        let mut store = store();
        assert_eq!(store.edit_defaults(), ContactDraft::default());

        store.dispatch(Action::Select(Some(ContactId::new("stale"))));
        assert_eq!(store.edit_defaults(), ContactDraft::default());

        let ana = insert(&mut store, "Ana");
        store.dispatch(Action::Select(Some(ana.id)));
        assert_eq!(store.edit_defaults().name, "Ana");
    }
}
