use dioxus::prelude::*;

mod api;
mod components;
mod library;
mod player;
mod settings;
mod store;
mod utils;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#3f51b5" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
