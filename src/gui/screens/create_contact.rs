use iced::{
    Element, Length, Task,
    widget::{button, column},
};

use crate::{
    core::ContactDraft,
    gui::{
        AppState,
        screens::{Navigated, Screen, ScreenMessage, navigated},
        widgets::{Field, contact_fields},
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateContactScreen {
    draft: ContactDraft,
}

#[derive(Debug, Clone)]
pub enum CreateContactMessage {
    FieldChanged(Field, String),
    Save,
}

impl Screen for CreateContactScreen {
    type Message = CreateContactMessage;
    type ParentMessage = Navigated;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        column![
            contact_fields(&self.draft, |field, v| {
                ScreenMessage::ScreenMessage(CreateContactMessage::FieldChanged(field, v))
            }),
            button("Save")
                .on_press(ScreenMessage::ScreenMessage(CreateContactMessage::Save))
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
            CreateContactMessage::FieldChanged(field, v) => {
                field.set(&mut self.draft, v);
                Task::none()
            }
            CreateContactMessage::Save => {
                let draft = std::mem::take(&mut self.draft);
                navigated(state.session.save_contact(draft))
            }
        }
    }
}
