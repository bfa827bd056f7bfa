use iced::{
    Element, Font, Length, Task,
    font::Weight,
    widget::{Column, button, column, container, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{Contact, ContactId},
    gui::{
        AppState,
        screens::{Navigated, Screen, ScreenMessage, navigated},
    },
};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

#[derive(Debug, Clone, Default)]
pub struct ContactListScreen {
    contacts: Vec<Contact>,
}

#[derive(Debug, Clone)]
pub enum ContactListMessage {
    Select(ContactId),
    Add,
}

impl Screen for ContactListScreen {
    type Message = ContactListMessage;
    type ParentMessage = Navigated;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let list: Element<'_, ScreenMessage<Self>> = if self.contacts.is_empty() {
            container(text("No contacts yet."))
                .padding(15)
                .into()
        } else {
            scrollable(
                Column::with_children(self.contacts.iter().map(|contact| {
                    button(column![text(&contact.name).font(BOLD), text(&contact.phone)])
                        .on_press(ScreenMessage::ScreenMessage(ContactListMessage::Select(
                            contact.id.clone(),
                        )))
                        .style(button::secondary)
                        .width(Length::Fill)
                        .padding(15)
                        .into()
                }))
                .spacing(10),
            )
            .into()
        };

        column![
            container(list)
                .style(bordered_box)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(10),
            button("+ Add Contact")
                .on_press(ScreenMessage::ScreenMessage(ContactListMessage::Add))
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
            ContactListMessage::Select(id) => navigated(state.session.select_contact(id)),
            ContactListMessage::Add => navigated(state.session.open_create()),
        }
    }
}

impl ContactListScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            contacts: state.session.store().contacts().to_vec(),
        }
    }
}
