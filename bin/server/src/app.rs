//! Main Leptos application component and routing.

use crate::pages::settings::get_theme;
use crate::pages::{ChatPage, SettingsPage};
use crate::types::Theme;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

/// The active theme, shared by every page through context.
#[derive(Clone, Copy)]
pub struct ThemeContext(pub RwSignal<Theme>);

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(ThemeContext(theme));

    let saved_theme = Resource::new(|| (), |_| get_theme());
    Effect::new(move || {
        if let Some(Ok(saved)) = saved_theme.get() {
            theme.set(saved);
        }
    });

    view! {
        <Title text="Parley Chat"/>
        <Router>
            <div class="app" class:dark=move || theme.get().is_dark()>
                <Tabs/>
                <main class="container">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=ChatPage/>
                        <Route path=path!("/settings") view=SettingsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Tab bar switching between chat and settings.
#[component]
fn Tabs() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="tabs">
            <a href="/" class="tab" class:active=move || pathname.get() == "/">"Chat"</a>
            <a href="/settings" class="tab" class:active=move || pathname.get() == "/settings">
                "Settings"
            </a>
        </nav>
    }
}
