pub mod contact;
pub mod id;
pub mod navigation;
pub mod registry;
pub mod session;
pub mod store;

pub use contact::{Contact, ContactDraft, ContactId};
pub use id::{IdGenerator, IdStrategy, SequentialIds, TimestampIds, UuidIds};
pub use navigation::{NavigationError, Navigator, Route, Transition, Trigger};
pub use registry::{ContactRegistry, RegistryError};
pub use session::{Credentials, Session, UserRegistration};
pub use store::{Action, ContactStore, Outcome};
