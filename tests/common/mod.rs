#[allow(dead_code)]
mod fixtures;
#[allow(unused_imports)]
pub use fixtures::*;

// Re-export commonly used types from contactbook for tests
#[allow(unused_imports)]
pub use contactbook::core::{
    Action, Contact, ContactDraft, ContactId, ContactRegistry, ContactStore, Credentials,
    NavigationError, Navigator, Outcome, RegistryError, Route, Session, Trigger,
    UserRegistration,
};
