use iced::{
    Alignment::Center,
    Element, Length,
    widget::{Column, button, column, container, row, text, text_input},
};

use crate::core::ContactDraft;

/// One of the three editable contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub fn set(self, draft: &mut ContactDraft, value: String) {
        match self {
            Field::Name => draft.name = value,
            Field::Email => draft.email = value,
            Field::Phone => draft.phone = value,
        }
    }
}

/// Name, email and phone inputs bound to `draft`.
pub fn contact_fields<'a, Message, F>(draft: &'a ContactDraft, on_change: F) -> Column<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(Field, String) -> Message + Clone + 'a,
{
    let on_name = on_change.clone();
    let on_email = on_change.clone();
    let on_phone = on_change;
    column![
        text_input("Name", &draft.name)
            .on_input(move |v| on_name(Field::Name, v))
            .padding(10),
        text_input("Email", &draft.email)
            .on_input(move |v| on_email(Field::Email, v))
            .padding(10),
        text_input("Phone", &draft.phone)
            .on_input(move |v| on_phone(Field::Phone, v))
            .padding(10),
    ]
    .spacing(12)
}

/// Title bar with an optional back button above the screen body.
pub fn layout<'a, Message>(
    title: &'a str,
    back: Option<Message>,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let header = match back {
        Some(back) => row![
            button("Back").on_press(back).style(button::text),
            text(title).size(24),
        ],
        None => row![text(title).size(24)],
    }
    .spacing(20)
    .align_y(Center);

    container(
        column![header, body.into()]
            .spacing(20)
            .padding(24)
            .max_width(480),
    )
    .center_x(Length::Fill)
    .height(Length::Fill)
    .into()
}
