use iced::{
    Element, Length, Task,
    widget::{button, column, text_input},
};

use crate::{
    core::Credentials,
    gui::{
        AppState,
        screens::{Navigated, Screen, ScreenMessage, navigated},
    },
};

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Register,
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = Navigated;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        column![
            text_input("Email", &self.email)
                .on_input(|v| ScreenMessage::ScreenMessage(LoginMessage::EmailChanged(v)))
                .padding(10),
            text_input("Password", &self.password)
                .on_input(|v| ScreenMessage::ScreenMessage(LoginMessage::PasswordChanged(v)))
                .on_submit(ScreenMessage::ScreenMessage(LoginMessage::Submit))
                .secure(true)
                .padding(10),
            button("Login")
                .on_press(ScreenMessage::ScreenMessage(LoginMessage::Submit))
                .width(Length::Fill)
                .padding(12),
            button("Sign up")
                .on_press(ScreenMessage::ScreenMessage(LoginMessage::Register))
                .style(button::secondary)
                .width(Length::Fill)
                .padding(12),
        ]
        .spacing(12)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::EmailChanged(v) => {
                self.email = v;
                Task::none()
            }
            LoginMessage::PasswordChanged(v) => {
                self.password = v;
                Task::none()
            }
            LoginMessage::Submit => {
                let credentials = Credentials {
                    email: self.email.clone(),
                    password: self.password.clone(),
                };
                navigated(state.session.login(&credentials))
            }
            LoginMessage::Register => navigated(state.session.open_registration()),
        }
    }
}
