//! Accessors for server functions.
//!
//! [`AppState`] is provided as Leptos context for every route and server
//! function call; these helpers pull out the piece a handler needs.

use crate::settings::SettingsStore;
use crate::state::AppState;
use leptos::prelude::*;
use parley_conversation::Conversation;
use std::sync::Arc;

/// Gets the conversation from the request context.
pub fn get_conversation() -> Arc<Conversation> {
    expect_context::<AppState>().conversation
}

/// Gets the settings store from the request context.
pub fn get_settings_store() -> Arc<SettingsStore> {
    expect_context::<AppState>().settings
}
