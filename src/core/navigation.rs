use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    RegisterUser,
    ContactList,
    CreateContact,
    EditContact,
}

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::RegisterUser => "User Registration",
            Route::ContactList => "Contact List",
            Route::CreateContact => "Create Contact",
            Route::EditContact => "Edit Contact",
        }
    }

    /// Where `trigger` leads from this screen, if it is offered here.
    pub fn transition(self, trigger: Trigger) -> Option<Transition> {
        use Route::*;
        use Trigger::*;
        match (self, trigger) {
            (Login, Submit) => Some(Transition::Navigate(ContactList)),
            (Login, RegisterLink) => Some(Transition::Navigate(RegisterUser)),
            (RegisterUser, SaveUser) => Some(Transition::GoBack),
            (ContactList, SelectContact) => Some(Transition::Navigate(EditContact)),
            (ContactList, AddContact) => Some(Transition::Navigate(CreateContact)),
            (CreateContact, SaveContact) => Some(Transition::Navigate(ContactList)),
            (EditContact, AlterContact) => Some(Transition::Navigate(ContactList)),
            (EditContact, DeleteContact) => Some(Transition::Navigate(ContactList)),
            _ => None,
        }
    }
}

/// A user action that moves between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Submit,
    RegisterLink,
    SaveUser,
    SelectContact,
    AddContact,
    SaveContact,
    AlterContact,
    DeleteContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Navigate(Route),
    GoBack,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("{trigger:?} is not available on {from:?}")]
    InvalidTrigger { from: Route, trigger: Trigger },
}

/// Stack of screens. The bottom is always [`Route::Login`].
///
/// `navigate` to a route already on the stack pops back to it instead of
/// pushing a duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Login],
        }
    }

    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::Login)
    }

    pub fn history(&self) -> &[Route] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Apply `trigger` to the current screen and return the new current screen.
    pub fn fire(&mut self, trigger: Trigger) -> Result<Route, NavigationError> {
        let from = self.current();
        let transition = from.transition(trigger).ok_or_else(|| {
            let err = NavigationError::InvalidTrigger { from, trigger };
            warn!(%err, "navigation rejected");
            err
        })?;
        match transition {
            Transition::Navigate(route) => self.navigate(route),
            Transition::GoBack => {
                self.go_back();
            }
        }
        Ok(self.current())
    }

    pub fn navigate(&mut self, route: Route) {
        let from = self.current();
        match self.stack.iter().position(|r| *r == route) {
            Some(index) => self.stack.truncate(index + 1),
            None => self.stack.push(route),
        }
        info!(from = from.title(), to = route.title(), depth = self.stack.len(), "navigate");
    }

    /// Pop the current screen. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let from = self.stack.pop();
        info!(from = ?from, to = self.current().title(), "go back");
        true
    }
}
