use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBookOpen, FaLanguage},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::language::Language, router::Route};

#[component]
pub fn Header() -> Element {
    let mut language = use_context::<Signal<Language>>();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home { page: 1 },
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaBookOpen
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            button {
                class: "btn btn-outline flex gap-2 items-center",
                onclick: move |_| {
                    let next = language().toggled();
                    language.set(next);
                },
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaLanguage
                }
                p {
                    {language().toggle_label()}
                }
            }
        }
    })
}
