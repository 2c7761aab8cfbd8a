use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{view_label, AppView, LibraryView, PlayerView, SettingsView};
use crate::store::{local_store, session_store, KeyValueStore};

/// Persistent store handle, provided via context so views never reach into a
/// global storage singleton directly.
#[derive(Clone)]
pub struct LocalStoreHandle(pub Rc<dyn KeyValueStore>);

/// Session-scoped store handle.
#[derive(Clone)]
pub struct SessionStoreHandle(pub Rc<dyn KeyValueStore>);

#[component]
pub fn AppShell() -> Element {
    let current_view = use_signal(|| AppView::Player);
    use_context_provider(|| LocalStoreHandle(local_store()));
    use_context_provider(|| SessionStoreHandle(session_store()));

    let view = current_view();
    let nav_targets = [AppView::Player, AppView::Library, AppView::Settings];

    rsx! {
        div { class: "app-container",
            header { class: "top-nav",
                span { class: "app-title", "minitunes" }
                nav { class: "nav-links",
                    for target in nav_targets {
                        button {
                            class: if view == target { "nav-link active" } else { "nav-link" },
                            onclick: {
                                let mut current_view = current_view.clone();
                                move |_| current_view.set(target)
                            },
                            "{view_label(&target)}"
                        }
                    }
                }
            }

            main { class: "page-shell",
                {
                    match view {
                        AppView::Player => rsx! {
                            PlayerView {}
                        },
                        AppView::Library => rsx! {
                            LibraryView {}
                        },
                        AppView::Settings => rsx! {
                            SettingsView {}
                        },
                    }
                }
            }
        }
    }
}
