use crate::{
    config::{Settings, ThemeChoice},
    core::Session,
};

/// Everything the screens share. Handed to each screen's `update` by `&mut`.
#[derive(Debug, Default)]
pub struct AppState {
    pub session: Session,
    pub theme: ThemeChoice,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            session: Session::from_settings(settings),
            theme: settings.theme,
        }
    }
}
