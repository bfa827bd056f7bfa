use iced::{Element, Task, Theme};
use tracing::info;

use crate::config::{Settings, ThemeChoice};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage},
};

pub struct ContactsApp {
    screen: ScreenData,
    state: AppState,
}

impl ContactsApp {
    pub fn new(state: AppState) -> Self {
        let screen = ScreenData::for_route(state.session.current(), &state);
        Self { screen, state }
    }

    pub fn title(&self) -> String {
        format!("Contacts - {}", self.screen.route().title())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen.update(message, &mut self.state).map(flatten)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(flatten)
    }

    pub fn theme(&self) -> Theme {
        match self.state.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

fn flatten(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

/// Open the window and block until it is closed.
pub fn run(settings: Settings) -> iced::Result {
    info!(?settings, "starting contacts window");
    iced::application(
        move || ContactsApp::new(AppState::from_settings(&settings)),
        ContactsApp::update,
        ContactsApp::view,
    )
    .title(ContactsApp::title)
    .theme(ContactsApp::theme)
    .window_size((420.0, 720.0))
    .run()
}
