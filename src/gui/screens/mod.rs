pub mod contact_list;
pub mod create_contact;
pub mod edit_contact;
pub mod login;
pub mod register_user;

use iced::{Element, Task};
use tracing::warn;

use crate::{
    core::{NavigationError, Route},
    gui::{AppState, Message, widgets::layout},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized + 'static {
    type Message: std::fmt::Debug + Clone + Send + 'static;
    type ParentMessage: std::fmt::Debug + Clone + Send + 'static;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// Sent up by a screen once the session has moved to `Route`.
#[derive(Debug, Clone, Copy)]
pub struct Navigated(pub Route);

/// Report a session transition to the parent, or log why it did not happen.
pub(crate) fn navigated<S>(result: Result<Route, NavigationError>) -> Task<ScreenMessage<S>>
where
    S: Screen<ParentMessage = Navigated>,
{
    match result {
        Ok(route) => Task::done(ScreenMessage::ParentMessage(Navigated(route))),
        Err(err) => {
            warn!(%err, "screen action ignored");
            Task::none()
        }
    }
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Login(login::LoginScreen),
    RegisterUser(register_user::RegisterUserScreen),
    ContactList(contact_list::ContactListScreen),
    CreateContact(create_contact::CreateContactScreen),
    EditContact(edit_contact::EditContactScreen),
}

impl ScreenData {
    /// A fresh screen for `route`, reading whatever it shows from `state`.
    pub fn for_route(route: Route, state: &AppState) -> Self {
        match route {
            Route::Login => ScreenData::Login(login::LoginScreen::default()),
            Route::RegisterUser => {
                ScreenData::RegisterUser(register_user::RegisterUserScreen::default())
            }
            Route::ContactList => {
                ScreenData::ContactList(contact_list::ContactListScreen::new(state))
            }
            Route::CreateContact => {
                ScreenData::CreateContact(create_contact::CreateContactScreen::default())
            }
            Route::EditContact => {
                ScreenData::EditContact(edit_contact::EditContactScreen::new(state))
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ScreenData::Login(_) => Route::Login,
            ScreenData::RegisterUser(_) => Route::RegisterUser,
            ScreenData::ContactList(_) => Route::ContactList,
            ScreenData::CreateContact(_) => Route::CreateContact,
            ScreenData::EditContact(_) => Route::EditContact,
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let route = self.route();
        let body = match self {
            ScreenData::Login(screen) => screen.view().map(Message::Login),
            ScreenData::RegisterUser(screen) => screen.view().map(Message::RegisterUser),
            ScreenData::ContactList(screen) => screen.view().map(Message::ContactList),
            ScreenData::CreateContact(screen) => screen.view().map(Message::CreateContact),
            ScreenData::EditContact(screen) => screen.view().map(Message::EditContact),
        };
        let back = (route != Route::Login).then_some(Message::Back);
        layout(route.title(), back, body).map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(route)) => {
                *x = ScreenData::for_route(route, state);
                Task::none()
            }
            (x, Message::Back) => {
                if state.session.back() {
                    *x = ScreenData::for_route(state.session.current(), state);
                }
                Task::none()
            }
            (ScreenData::Login(page), Message::Login(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Login)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(Navigated(route)) => change_screen(route),
            },
            (ScreenData::RegisterUser(page), Message::RegisterUser(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::RegisterUser)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(Navigated(route)) => change_screen(route),
            },
            (ScreenData::ContactList(page), Message::ContactList(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ContactList)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(Navigated(route)) => change_screen(route),
            },
            (ScreenData::CreateContact(page), Message::CreateContact(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::CreateContact)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(Navigated(route)) => change_screen(route),
            },
            (ScreenData::EditContact(page), Message::EditContact(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::EditContact)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(Navigated(route)) => change_screen(route),
            },
            // Stale message from a screen that has already been replaced.
            _ => Task::none(),
        }
    }
}

fn change_screen(route: Route) -> Task<ScreenMessage<ScreenData>> {
    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(route)))
}
