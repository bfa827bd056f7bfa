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
pub struct EditContactScreen {
    draft: ContactDraft,
}

#[derive(Debug, Clone)]
pub enum EditContactMessage {
    FieldChanged(Field, String),
    Alter,
    Delete,
}

impl Screen for EditContactScreen {
    type Message = EditContactMessage;
    type ParentMessage = Navigated;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        column![
            contact_fields(&self.draft, |field, v| {
                ScreenMessage::ScreenMessage(EditContactMessage::FieldChanged(field, v))
            }),
            button("Update")
                .on_press(ScreenMessage::ScreenMessage(EditContactMessage::Alter))
                .width(Length::Fill)
                .padding(12),
            button("Delete")
                .on_press(ScreenMessage::ScreenMessage(EditContactMessage::Delete))
                .style(button::danger)
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
            EditContactMessage::FieldChanged(field, v) => {
                field.set(&mut self.draft, v);
                Task::none()
            }
            EditContactMessage::Alter => {
                navigated(state.session.alter_contact(self.draft.clone()))
            }
            EditContactMessage::Delete => navigated(state.session.delete_contact()),
        }
    }
}

impl EditContactScreen {
    /// Prefilled from the current selection, or empty without one.
    pub fn new(state: &AppState) -> Self {
        Self {
            draft: state.session.store().edit_defaults(),
        }
    }
}
