pub mod counter;
pub mod forms;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod submit;
pub mod toast;

pub use page::{MenuState, PageAction, PageState};
