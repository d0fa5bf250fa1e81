//! Settings page component and related server functions.

use crate::app::ThemeContext;
use crate::types::Theme;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Server function to read the saved theme.
#[server]
pub async fn get_theme() -> Result<Theme, ServerFnError> {
    use crate::server_helpers::get_settings_store;

    Ok(get_settings_store().load().await.theme)
}

/// Server function to turn dark mode on or off and persist the choice.
#[server]
pub async fn set_dark_mode(enabled: bool) -> Result<Theme, ServerFnError> {
    use crate::server_helpers::get_settings_store;

    let store = get_settings_store();
    let settings = store
        .set_theme(Theme::from_dark_mode(enabled))
        .await
        .map_err(|report| {
            tracing::error!(
                error = %report,
                path = %store.path().display(),
                "Failed to save theme"
            );
            ServerFnError::new("Failed to save settings")
        })?;

    Ok(settings.theme)
}

/// User settings page.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let ThemeContext(theme) = expect_context::<ThemeContext>();
    let (save_message, set_save_message) = signal(Option::<String>::None);

    let on_toggle = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        theme.set(Theme::from_dark_mode(enabled));
        set_save_message.set(None);
        spawn_local(async move {
            match set_dark_mode(enabled).await {
                Ok(saved) => theme.set(saved),
                Err(e) => set_save_message.set(Some(format!("Error: {}", e))),
            }
        });
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <section class="settings-section">
                <h2>"Appearance"</h2>
                <div class="setting-row">
                    <span>"Theme:"</span>
                    <label class="switch">
                        <input
                            type="checkbox"
                            id="dark-mode"
                            prop:checked=move || theme.get().is_dark()
                            on:change=on_toggle
                        />
                        <span class="slider"></span>
                    </label>
                    <label for="dark-mode">"Dark Mode"</label>
                </div>
                {move || save_message.get().map(|msg| view! { <span class="save-message">{msg}</span> })}
            </section>
        </div>
    }
}
