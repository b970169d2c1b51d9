pub mod booking;
pub mod fields;
pub mod hero;
pub mod navbar;
pub mod sections;
pub mod toast;
