use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::language::Language, router::Route};

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Language::default()));

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Latest journal articles with translated titles and summaries"
        }
        Router::<Route> {}
    }
}
