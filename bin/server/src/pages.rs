//! Page components for the application.
//!
//! Each page is a Leptos component for one tab, along with the server
//! functions that tab calls.

pub mod chat;
pub mod settings;

pub use chat::ChatPage;
pub use settings::SettingsPage;
