//! Settings Editor Component
//!
//! Popup form for the reference timestamp, text color and font URL.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::config::{DEFAULT_TEXT_COLOR, SAVED_MESSAGE, SAVED_MESSAGE_MS};
use crate::storage::{self, SettingsUpdate};

#[component]
pub fn SettingsEditor() -> impl IntoView {
    let (birthdate, set_birthdate) = signal(String::new());
    let (text_color, set_text_color) = signal(DEFAULT_TEXT_COLOR.to_lowercase());
    let (font_url, set_font_url) = signal(String::new());
    let (status, set_status) = signal(String::new());

    // Prefill from storage on open
    Effect::new(move |_| {
        spawn_local(async move {
            match storage::load_settings().await {
                Ok(settings) => {
                    if let Some(value) = settings.birthdate() {
                        set_birthdate.set(value.to_string());
                    }
                    if let Some(value) = settings.text_color() {
                        set_text_color.set(value.to_string());
                    }
                    if let Some(value) = settings.font_url() {
                        set_font_url.set(value.to_string());
                    }
                }
                Err(e) => warn!(error = %e, "Failed to load settings"),
            }
        });
    });

    let save = move |_| {
        let birthdate = birthdate.get();
        let text_color = text_color.get();
        let font_url = font_url.get();
        spawn_local(async move {
            let update = SettingsUpdate {
                birthdate: &birthdate,
                text_color: &text_color,
                font_url: font_url.trim(),
            };
            match storage::save_settings(&update).await {
                Ok(()) => {
                    info!("Settings saved");
                    set_status.set(SAVED_MESSAGE.to_string());
                    Timeout::new(SAVED_MESSAGE_MS, move || set_status.set(String::new())).forget();
                }
                Err(e) => warn!(error = %e, "Failed to save settings"),
            }
        });
    };

    view! {
        <div class="settings-editor">
            <h1>"Age Tracker"</h1>

            <label for="birthdate-input">"Birth date and time"</label>
            <input
                id="birthdate-input"
                type="datetime-local"
                prop:value=move || birthdate.get()
                on:input=move |ev| set_birthdate.set(event_target_value(&ev))
            />

            <label for="color-input">"Text color"</label>
            <input
                id="color-input"
                type="color"
                prop:value=move || text_color.get()
                on:input=move |ev| set_text_color.set(event_target_value(&ev))
            />

            <label for="font-url-input">"Font URL"</label>
            <input
                id="font-url-input"
                type="url"
                placeholder="https://fonts.googleapis.com/css?family=Roboto+Mono"
                prop:value=move || font_url.get()
                on:input=move |ev| set_font_url.set(event_target_value(&ev))
            />

            <button id="saveButton" on:click=save>"Save"</button>
            <div id="status">{move || status.get()}</div>
        </div>
    }
}
