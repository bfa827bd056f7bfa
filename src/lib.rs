pub mod config;
pub mod core;
pub mod logging;

pub use config::{Settings, ThemeChoice};
pub use core::{
    Action, Contact, ContactDraft, ContactId, ContactRegistry, ContactStore, Credentials,
    IdGenerator, IdStrategy, NavigationError, Navigator, Outcome, RegistryError, Route, Session,
    Trigger, UserRegistration,
};

#[cfg(feature = "gui")]
pub mod gui;
