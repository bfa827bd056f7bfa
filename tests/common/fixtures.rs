use contactbook::core::{
    Contact, ContactDraft, ContactRegistry, ContactStore, SequentialIds, Session,
};

/// Registry with deterministic ids `1, 2, 3, …`.
pub fn create_test_registry() -> ContactRegistry {
    ContactRegistry::new(Box::new(SequentialIds::default()))
}

pub fn create_test_store() -> ContactStore {
    ContactStore::new(Box::new(SequentialIds::default()))
}

/// Session with sequential ids, already past the login screen.
pub fn create_logged_in_session(clear_selection_on_leave: bool) -> Session {
    let mut session = Session::new(create_test_store(), clear_selection_on_leave);
    session
        .login(&Default::default())
        .expect("login is always available on the first screen");
    session
}

pub fn ana() -> ContactDraft {
    ContactDraft::new("Ana", "ana@x.com", "111")
}

pub fn bea() -> ContactDraft {
    ContactDraft::new("Bea", "bea@x.com", "333")
}

/// Full snapshot of the registry contents for before/after comparisons.
pub fn snapshot(registry: &ContactRegistry) -> Vec<Contact> {
    registry.as_slice().to_vec()
}
