use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{ArticlePage, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/?:page")]
    Home { page: u64 },

    #[route("/articles/:id")]
    ArticlePage { id: i32 },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
