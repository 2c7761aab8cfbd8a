use dioxus::prelude::*;

use crate::api::fetch_more_songs;
use crate::components::{notify, SessionStoreHandle};
use crate::library::Library;
use crate::store::save_selected_song;
use crate::utils::format_duration;

#[component]
pub fn LibraryView() -> Element {
    let session = use_context::<SessionStoreHandle>().0;
    let mut library = use_signal(|| {
        let library = Library::seeded();
        let summary = library.tag_summary();
        tracing::info!(
            "tag summary: {} songs, {} calm",
            summary.total_songs,
            summary.calm_count
        );
        library
    });
    let mut filter_query = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let current = library();
    let visible = current.filter(&filter_query());
    // Stats always cover the full library, not the filtered view.
    let stats = current.stats();

    let on_load_more = move |_| {
        // One request at a time; a second press while in flight is ignored.
        if loading() {
            return;
        }
        loading.set(true);
        spawn(async move {
            let result = fetch_more_songs().await;
            match library.with_mut(|lib| lib.apply_fetch_result(result)) {
                Ok(added) => {
                    // The merged list is shown in full; a stale filter would
                    // keep the new rows hidden.
                    filter_query.set(String::new());
                    let summary = library.peek().tag_summary();
                    tracing::info!(
                        "merged {added} remote songs; tag summary: {} songs, {} calm",
                        summary.total_songs,
                        summary.calm_count
                    );
                }
                Err(err) => notify(&format!("Failed to load API: {err}")),
            }
            // Restores the trigger label on success and failure alike.
            loading.set(false);
        });
    };

    rsx! {
        section { class: "library-page",
            div { class: "library-controls",
                input {
                    class: "search-input",
                    placeholder: "Filter by title",
                    value: "{filter_query}",
                    oninput: move |e| filter_query.set(e.value()),
                }
                button {
                    class: "secondary",
                    disabled: loading(),
                    onclick: on_load_more,
                    if loading() {
                        "Loading..."
                    } else {
                        "Load more from API"
                    }
                }
            }

            p { class: "stats",
                "Total songs: {stats.count}. Avg length: {stats.average_length_secs} sec."
            }

            ul { class: "song-list",
                for track in visible {
                    li { class: "song-item",
                        div { class: "meta",
                            strong { "{track.title}" }
                            span { " — {track.artist}" }
                        }
                        div { class: "song-actions",
                            span { class: "song-length", "{format_duration(track.length)}" }
                            button {
                                class: "secondary",
                                onclick: {
                                    let session = session.clone();
                                    let id = track.id;
                                    move |_| {
                                        let snapshot = library();
                                        if let Some(selected) = snapshot.find(id) {
                                            save_selected_song(session.as_ref(), selected);
                                            notify(&format!("Selected: {}", selected.title));
                                        }
                                    }
                                },
                                "Select"
                            }
                        }
                    }
                }
            }
        }
    }
}
