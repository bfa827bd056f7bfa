use crate::{
    core::Route,
    gui::screens::{
        ScreenMessage, contact_list::ContactListScreen, create_contact::CreateContactScreen,
        edit_contact::EditContactScreen, login::LoginScreen, register_user::RegisterUserScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Login(ScreenMessage<LoginScreen>),
    RegisterUser(ScreenMessage<RegisterUserScreen>),
    ContactList(ScreenMessage<ContactListScreen>),
    CreateContact(ScreenMessage<CreateContactScreen>),
    EditContact(ScreenMessage<EditContactScreen>),
    ChangeScreen(Route),
    Back,
}
