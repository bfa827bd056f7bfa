use iced::{
    Element, Length, Task,
    widget::{button, column, text_input},
};

use crate::{
    core::UserRegistration,
    gui::{
        AppState,
        screens::{Navigated, Screen, ScreenMessage, navigated},
    },
};

/// Sign-up form. Nothing is stored; saving just returns to login.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserScreen {
    form: UserRegistration,
}

#[derive(Debug, Clone)]
pub enum RegisterUserMessage {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    PasswordChanged(String),
    Save,
}

impl Screen for RegisterUserScreen {
    type Message = RegisterUserMessage;
    type ParentMessage = Navigated;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        use RegisterUserMessage::*;
        column![
            text_input("Name", &self.form.name)
                .on_input(|v| ScreenMessage::ScreenMessage(NameChanged(v)))
                .padding(10),
            text_input("Email", &self.form.email)
                .on_input(|v| ScreenMessage::ScreenMessage(EmailChanged(v)))
                .padding(10),
            text_input("Phone", &self.form.phone)
                .on_input(|v| ScreenMessage::ScreenMessage(PhoneChanged(v)))
                .padding(10),
            text_input("Password", &self.form.password)
                .on_input(|v| ScreenMessage::ScreenMessage(PasswordChanged(v)))
                .secure(true)
                .padding(10),
            button("Save")
                .on_press(ScreenMessage::ScreenMessage(Save))
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
            RegisterUserMessage::NameChanged(v) => self.form.name = v,
            RegisterUserMessage::EmailChanged(v) => self.form.email = v,
            RegisterUserMessage::PhoneChanged(v) => self.form.phone = v,
            RegisterUserMessage::PasswordChanged(v) => self.form.password = v,
            RegisterUserMessage::Save => return navigated(state.session.save_user(&self.form)),
        }
        Task::none()
    }
}
