use dioxus::prelude::*;

mod components;
mod player;
mod site;
mod utils;

use components::AppView;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const APP_CSS: Asset = asset!("/assets/main.css");
const FEED_XML: Asset = asset!("/assets/feed.xml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link {
            rel: "alternate",
            r#type: "application/rss+xml",
            title: site::PODCAST.title,
            href: FEED_XML,
        }

        document::Meta { name: "theme-color", content: "#846aff" }
        document::Meta {
            name: "description",
            content: site::PODCAST.description,
        }
        document::Title { "{site::PODCAST.title} \u{2014} {site::PODCAST.tagline}" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
