use dioxus::prelude::*;

use crate::components::{notify, LocalStoreHandle, SessionStoreHandle};
use crate::settings::{self, SavedSettings, UserSettings};
use crate::store::{load_selected_song, Favorites};
use crate::utils::escape_html;

fn render_saved(settings: &UserSettings) -> String {
    format!(
        "<div>Saved Name: <strong>{}</strong></div>\
         <div>Saved Email: <strong>{}</strong></div>\
         <div>Genre: <strong>{}</strong></div>",
        escape_html(&settings.name),
        escape_html(&settings.email),
        escape_html(&settings.genre),
    )
}

#[component]
pub fn SettingsView() -> Element {
    let local = use_context::<LocalStoreHandle>().0;
    let session = use_context::<SessionStoreHandle>().0;

    // One-shot read of the persisted record and the session-scoped selection.
    let (saved, selected) = use_hook({
        let local = local.clone();
        let session = session.clone();
        move || {
            let favorites = Favorites::load(local.as_ref());
            tracing::debug!("favorite song ids: {:?}", favorites.ids());
            (
                settings::load_saved(local.as_ref()),
                load_selected_song(session.as_ref()),
            )
        }
    });

    let loaded = match &saved {
        SavedSettings::Valid(settings) => Some(settings.clone()),
        _ => None,
    };

    let mut name = use_signal({
        let loaded = loaded.clone();
        move || loaded.as_ref().map(|s| s.name.clone()).unwrap_or_default()
    });
    let mut email = use_signal({
        let loaded = loaded.clone();
        move || loaded.as_ref().map(|s| s.email.clone()).unwrap_or_default()
    });
    let mut genre = use_signal({
        let loaded = loaded.clone();
        move || loaded.as_ref().map(|s| s.genre.clone()).unwrap_or_default()
    });
    let mut status = use_signal(String::new);
    let mut summary = use_signal({
        let saved = saved.clone();
        let selected = selected.clone();
        move || {
            let mut html = match &saved {
                SavedSettings::Valid(settings) => render_saved(settings),
                SavedSettings::Invalid => "No valid saved settings.".to_string(),
                SavedSettings::Missing => "No saved settings yet.".to_string(),
            };
            if let Some(song) = &selected {
                html.push_str(&format!(
                    "<div>Recently selected song: <strong>{}</strong> by {}</div>",
                    escape_html(&song.title),
                    escape_html(&song.artist)
                ));
            }
            html
        }
    });

    let on_save = {
        let local = local.clone();
        move |_| match settings::submit(local.as_ref(), &name(), &email(), &genre()) {
            Ok(saved) => {
                summary.set(render_saved(&saved));
                status.set("Saved!".to_string());
                notify("Settings saved.");
                #[cfg(target_arch = "wasm32")]
                {
                    use gloo_timers::future::TimeoutFuture;
                    spawn(async move {
                        TimeoutFuture::new(2000).await;
                        status.set(String::new());
                    });
                }
            }
            Err(err) => notify(&err.to_string()),
        }
    };

    let on_clear = {
        let local = local.clone();
        move |_| {
            settings::clear(local.as_ref());
            name.set(String::new());
            email.set(String::new());
            genre.set(String::new());
            status.set(String::new());
            summary.set("Cleared saved settings.".to_string());
        }
    };

    rsx! {
        section { class: "settings-page",
            div { class: "settings-form",
                label { class: "form-field", "Name"
                    input { value: "{name}", oninput: move |e| name.set(e.value()) }
                }
                label { class: "form-field", "Email"
                    input { value: "{email}", oninput: move |e| email.set(e.value()) }
                }
                label { class: "form-field", "Favorite genre"
                    input { value: "{genre}", oninput: move |e| genre.set(e.value()) }
                }
                div { class: "form-actions",
                    button { class: "primary", onclick: on_save, "Save" }
                    button { class: "secondary", onclick: on_clear, "Clear" }
                    if !status().is_empty() {
                        span { class: "save-status", "{status}" }
                    }
                }
            }

            // The summary interpolates user-supplied strings directly into
            // markup, so every field goes through escape_html first.
            div { class: "saved-summary", dangerous_inner_html: "{summary}" }
        }
    }
}
