//! The screen flow without any rendering.
//!
//! Every public method corresponds to one button on one screen. A method
//! called from a screen that does not offer that button returns
//! [`NavigationError`] and changes nothing.

use std::fmt;

use tracing::{debug, info};

use crate::{
    config::Settings,
    core::{
        contact::{ContactDraft, ContactId},
        navigation::{NavigationError, Navigator, Route, Trigger},
        store::{Action, ContactStore},
    },
};

/// Login form contents. Never checked against anything.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up form contents. Discarded on save; there are no accounts.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl fmt::Debug for UserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub struct Session {
    store: ContactStore,
    navigator: Navigator,
    clear_selection_on_leave: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ContactStore::default(), true)
    }
}

impl Session {
    pub fn new(store: ContactStore, clear_selection_on_leave: bool) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
            clear_selection_on_leave,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            ContactStore::new(settings.id_strategy.generator()),
            settings.clear_selection_on_leave,
        )
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current(&self) -> Route {
        self.navigator.current()
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<Route, NavigationError> {
        debug!(email = %credentials.email, "login submitted");
        self.step(Trigger::Submit, None)
    }

    pub fn open_registration(&mut self) -> Result<Route, NavigationError> {
        self.step(Trigger::RegisterLink, None)
    }

    pub fn save_user(&mut self, registration: &UserRegistration) -> Result<Route, NavigationError> {
        debug!(name = %registration.name, "registration discarded");
        self.step(Trigger::SaveUser, None)
    }

    pub fn select_contact(&mut self, id: ContactId) -> Result<Route, NavigationError> {
        self.step(Trigger::SelectContact, Some(Action::Select(Some(id))))
    }

    pub fn open_create(&mut self) -> Result<Route, NavigationError> {
        self.step(Trigger::AddContact, None)
    }

    pub fn save_contact(&mut self, draft: ContactDraft) -> Result<Route, NavigationError> {
        self.step(Trigger::SaveContact, Some(Action::Insert(draft)))
    }

    /// Overwrite the selected contact. Without a selection the registry is untouched.
    pub fn alter_contact(&mut self, draft: ContactDraft) -> Result<Route, NavigationError> {
        let action = self
            .store
            .selection()
            .cloned()
            .map(|id| Action::Update(id, draft));
        self.step(Trigger::AlterContact, action)
    }

    pub fn delete_contact(&mut self) -> Result<Route, NavigationError> {
        let action = self.store.selection().cloned().map(Action::Delete);
        self.step(Trigger::DeleteContact, action)
    }

    /// Pop one screen. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        let from = self.navigator.current();
        let moved = self.navigator.go_back();
        if moved {
            self.after_leaving(from);
        }
        moved
    }

    fn step(&mut self, trigger: Trigger, action: Option<Action>) -> Result<Route, NavigationError> {
        let from = self.navigator.current();
        if from.transition(trigger).is_none() {
            return Err(NavigationError::InvalidTrigger { from, trigger });
        }
        if let Some(action) = action {
            let outcome = self.store.dispatch(action);
            debug!(?outcome, "dispatched");
        }
        let to = self.navigator.fire(trigger)?;
        self.after_leaving(from);
        Ok(to)
    }

    fn after_leaving(&mut self, from: Route) {
        if from == Route::EditContact
            && self.navigator.current() != Route::EditContact
            && self.clear_selection_on_leave
            && self.store.selection().is_some()
        {
            info!("clearing selection after leaving edit screen");
            self.store.dispatch(Action::Select(None));
        }
    }
}
