// Layout
pub mod card;
pub mod modal;
pub mod tab_bar;

// Inline
pub mod badge;
pub mod button;

// Forms
pub mod form;
pub mod form_select;
pub mod input;
pub mod textarea;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use modal::*;
pub use tab_bar::*;
pub use textarea::*;
