//! Central message system: every user-facing string lives behind the
//! `Message` enum and is rendered through the display macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
