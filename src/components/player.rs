use dioxus::prelude::*;

use crate::components::{notify, LocalStoreHandle};
use crate::player::{seed_tracks, PlayerState};
use crate::store::{Favorites, SEARCH_QUERY_KEY};

#[component]
pub fn PlayerView() -> Element {
    let local = use_context::<LocalStoreHandle>().0;
    let mut player = use_signal(|| PlayerState::new(seed_tracks()));
    let mut is_playing = use_signal(|| false);
    let mut search_query = use_signal(String::new);
    let mut favorites = use_signal({
        let local = local.clone();
        move || Favorites::load(local.as_ref())
    });

    let state = player();
    let (title, artist) = match state.current() {
        Some(track) => (track.title.clone(), track.artist.clone()),
        None => ("No song selected".to_string(), String::new()),
    };

    rsx! {
        section { class: "player-page",
            div { class: "now-playing",
                h2 {
                    class: if is_playing() { "song-title playing" } else { "song-title" },
                    "{title}"
                }
                p { class: "song-artist", "{artist}" }
            }

            div { class: "transport",
                button {
                    class: "secondary",
                    onclick: move |_| player.with_mut(|p| p.prev()),
                    "Prev"
                }
                button { class: "primary", onclick: move |_| is_playing.set(true), "Play" }
                button { class: "primary", onclick: move |_| is_playing.set(false), "Pause" }
                button {
                    class: "secondary",
                    onclick: move |_| player.with_mut(|p| p.next()),
                    "Next"
                }
                button {
                    class: "secondary",
                    onclick: move |_| player.with_mut(|p| p.shuffle(&mut rand::thread_rng())),
                    "Shuffle"
                }
            }

            // The query is written to the persistent store for the library
            // page; nothing on this page reads it back.
            input {
                class: "search-input",
                placeholder: "Search songs",
                value: "{search_query}",
                oninput: {
                    let local = local.clone();
                    move |e| {
                        let value = e.value();
                        local.set(SEARCH_QUERY_KEY, &value);
                        search_query.set(value);
                    }
                },
            }

            ul { class: "song-list",
                for track in state.tracks.clone() {
                    li { key: "{track.id}", class: "song-item",
                        div { class: "meta",
                            strong { "{track.title}" }
                            span { " — {track.artist}" }
                        }
                        div { class: "song-actions",
                            button {
                                class: if favorites().contains(track.id) { "favorite active" } else { "favorite" },
                                onclick: {
                                    let local = local.clone();
                                    let id = track.id;
                                    move |_| {
                                        let updated = Favorites::toggle(local.as_ref(), id);
                                        let ids = serde_json::to_string(updated.ids()).unwrap_or_default();
                                        notify(&format!("Favorites saved: {ids}"));
                                        favorites.set(updated);
                                    }
                                },
                                "Fav"
                            }
                            button {
                                class: "secondary",
                                onclick: {
                                    let id = track.id;
                                    move |_| player.with_mut(|p| p.select_by_id(id))
                                },
                                "Play"
                            }
                        }
                    }
                }
            }
        }
    }
}
