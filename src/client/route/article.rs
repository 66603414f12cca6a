use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::{error::ApiError, language::Language},
    },
    model::{article::ArticleDetailDto, comment::CommentDto},
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::{get_article, get_article_comments};

#[component]
pub fn ArticlePage(id: i32) -> Element {
    let mut detail = use_signal(|| None::<(ArticleDetailDto, Vec<CommentDto>)>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|id| async move {
        let article = get_article(id).await?;
        let comments = get_article_comments(id).await?;
        Ok::<_, ApiError>((article, comments))
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    detail.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch article {}: {}", id, err);
                    detail.set(None);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        if let Some((article, comments)) = detail() {
            ArticleView { article, comments }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
fn ArticleView(article: ArticleDetailDto, comments: Vec<CommentDto>) -> Element {
    let language = use_context::<Signal<Language>>();
    let chinese = language().is_chinese();

    let tags = article.tags.clone();
    let article = article.article;
    let title = article.display_title(chinese).to_string();
    let summary = article.display_summary(chinese).map(str::to_string);
    let authors = article.author_names().join(", ");
    let published = article
        .published_date
        .map(|date| date.format("%Y-%m-%d").to_string());
    let action = format!("/articles/{}/comments", article.id);

    rsx! {
        Title { "{title} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-4xl flex flex-col gap-4",
                h1 { class: "text-xl sm:text-3xl", "{title}" }
                if !authors.is_empty() {
                    p { class: "opacity-80", "{authors}" }
                }
                div {
                    class: "flex flex-wrap gap-2 text-sm opacity-70",
                    if let Some(journal_name) = article.journal_name.clone() {
                        span { "{journal_name}" }
                    }
                    if let Some(volume) = article.volume.clone() {
                        span { "Vol. {volume}" }
                    }
                    if let Some(pages) = article.pages.clone() {
                        span { "pp. {pages}" }
                    }
                    if let Some(published) = published {
                        span { "{published}" }
                    }
                }
                if !tags.is_empty() {
                    div {
                        class: "flex flex-wrap gap-2",
                        for tag in tags {
                            span { key: "{tag}", class: "badge badge-outline", "{tag}" }
                        }
                    }
                }
                if let Some(image_url) = article.image_url.clone() {
                    img { class: "rounded-box", src: "{image_url}", alt: "{title}" }
                }
                if let Some(summary) = summary {
                    p { "{summary}" }
                }
                div {
                    class: "flex gap-4",
                    if let Some(doi) = article.doi.clone() {
                        a { class: "link", href: "https://doi.org/{doi}", "DOI: {doi}" }
                    }
                    if let Some(link) = article.link.clone() {
                        a { class: "link", href: "{link}", "Read original" }
                    }
                }

                div {
                    class: "divider",
                    "Comments ({comments.len()})"
                }

                // Plain form post; the server redirects back here after storing it
                form {
                    class: "flex flex-col gap-2",
                    method: "post",
                    action: "{action}",
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        name: "content",
                        required: true,
                        placeholder: "Leave a comment"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary self-end",
                        "Post Comment"
                    }
                }

                if comments.is_empty() {
                    p { class: "opacity-70", "No comments yet." }
                }
                for comment in comments {
                    div {
                        key: "{comment.id}",
                        class: "card bg-base-200",
                        div {
                            class: "card-body py-3",
                            div {
                                class: "flex justify-between text-sm opacity-70",
                                span { {comment.username.clone().unwrap_or_else(|| "anonymous".to_string())} }
                                span { {comment.created_at.format("%Y-%m-%d %H:%M").to_string()} }
                            }
                            p { "{comment.content}" }
                        }
                    }
                }
            }
        }
    }
}
