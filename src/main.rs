use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod playback;
mod utils;

use components::PlayerWidget;
use config::SHIPPED_CONFIG;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let title = SHIPPED_CONFIG.title.as_str();

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "theme-color", content: "#1f2430" }
        document::Stylesheet { href: PLAYER_CSS }

        main { class: "app-root", PlayerWidget {} }
    }
}
