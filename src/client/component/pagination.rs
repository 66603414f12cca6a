use dioxus::prelude::*;

use crate::{client::router::Route, model::article::PaginationDto};

/// Previous/next links for the home listing.
///
/// Pages are 1-indexed and each page is its own route, so the browser history and
/// shared links reflect the page being viewed.
#[component]
pub fn Pagination(data: PaginationDto) -> Element {
    let total_pages = data.total_pages();
    let page = data.current_page;

    let (first, last) = data.showing_range();

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            span {
                class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                "Showing {first} to {last} of {data.total}"
            }
            div {
                class: "join",
                if page > 1 {
                    Link {
                        class: "join-item btn btn-xs sm:btn-sm",
                        to: Route::Home { page: page - 1 },
                        "«"
                    }
                } else {
                    button { class: "join-item btn btn-xs sm:btn-sm", disabled: true, "«" }
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    "Page {page} of {total_pages.max(1)}"
                }
                if page < total_pages {
                    Link {
                        class: "join-item btn btn-xs sm:btn-sm",
                        to: Route::Home { page: page + 1 },
                        "»"
                    }
                } else {
                    button { class: "join-item btn btn-xs sm:btn-sm", disabled: true, "»" }
                }
            }
        }
    )
}
