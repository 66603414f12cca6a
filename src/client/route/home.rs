use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page, Pagination,
        },
        constant::SITE_NAME,
        model::{error::ApiError, language::Language},
        router::Route,
    },
    model::{
        article::{ArticleDto, PaginatedArticlesDto},
        pagination::{PageRequest, HOME_PER_PAGE},
    },
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::get_articles;

#[component]
pub fn Home(page: u64) -> Element {
    let request = PageRequest::new(page, HOME_PER_PAGE, HOME_PER_PAGE);
    let mut articles = use_signal(|| None::<PaginatedArticlesDto>);
    let mut error = use_signal(|| None::<ApiError>);

    // Re-fetches whenever the page in the route changes
    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|request| async move {
        get_articles(request.page, request.per_page).await
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(page) => {
                    articles.set(Some(page.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch articles: {}", err);
                    articles.set(None);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        if let Some(page) = articles() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-6",
                        "Latest Articles"
                    }
                    if page.data.is_empty() {
                        p { class: "opacity-70", "No articles yet." }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        for article in page.data.iter() {
                            ArticleCard { key: "{article.id}", article: article.clone() }
                        }
                    }
                    Pagination { data: page.pagination.clone() }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
fn ArticleCard(article: ArticleDto) -> Element {
    let language = use_context::<Signal<Language>>();
    let chinese = language().is_chinese();

    let title = article.display_title(chinese).to_string();
    let summary = article.display_summary(chinese).map(str::to_string);
    let published = article
        .published_date
        .map(|date| date.format("%Y-%m-%d").to_string());

    rsx! {
        Link {
            to: Route::ArticlePage { id: article.id },
            class: "card bg-base-200 hover:bg-base-300",
            if let Some(image_url) = article.image_url.clone() {
                figure {
                    img { src: "{image_url}", alt: "{title}" }
                }
            }
            div {
                class: "card-body",
                h2 { class: "card-title", "{title}" }
                div {
                    class: "flex gap-2 text-sm opacity-70",
                    if let Some(journal_name) = article.journal_name.clone() {
                        span { "{journal_name}" }
                    }
                    if let Some(published) = published {
                        span { "{published}" }
                    }
                }
                if let Some(summary) = summary {
                    p { class: "line-clamp-3", "{summary}" }
                }
            }
        }
    }
}
