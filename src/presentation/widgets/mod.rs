mod contact_form;
mod cursor_follower;
mod header_bar;
mod hotspot;
mod input;
mod page;
mod scroll_progress;
mod scroll_top_button;
mod status_bar;

pub use contact_form::{ContactFormState, ContactFormView, FORM_HEIGHT, FormAction, FormLayout};
pub use cursor_follower::CursorFollower;
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use hotspot::{Hotspot, HotspotAction, HotspotMap};
pub use input::TextInput;
pub use page::{MAX_CONTENT_WIDTH, PageDocument, PageLink, wrap_text};
pub use scroll_progress::ScrollProgress;
pub use scroll_top_button::ScrollTopButton;
pub use status_bar::{StatusBar, StatusLevel};
