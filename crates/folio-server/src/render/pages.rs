// Page bodies

use folio_core::{Article, Field};
use maud::{html, Markup, DOCTYPE};

use super::fields::form_row;
use super::layout::{page, STYLE};
use crate::views::PageContext;

pub const EMPTY_BLOG_MESSAGE: &str = "This blog looks empty!";

const CONTROL_CLASS: &str = "form-control";

/// Index page: every article, newest first
pub fn index_page(ctx: &PageContext, articles: &[Article]) -> Markup {
    let is_admin = ctx.identity.is_admin();

    page(
        ctx,
        None,
        html! {
            @if articles.is_empty() {
                p.empty { (EMPTY_BLOG_MESSAGE) }
            }
            @for article in articles {
                article.post {
                    h2 { (article.title) }
                    p.meta {
                        time datetime=(article.created_at.to_rfc3339()) {
                            (article.created_at.format("%B %-d, %Y").to_string())
                        }
                        @if is_admin {
                            " | "
                            a href=(format!("/articles/{}/edit", article.id)) { "Edit" }
                            " | "
                            a href=(format!("/articles/{}/delete", article.id)) { "Delete" }
                        }
                    }
                    @for paragraph in paragraphs(&article.body) {
                        p {
                            @for (i, line) in paragraph.lines().enumerate() {
                                @if i > 0 { br; }
                                (line)
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Split a body into paragraphs on blank lines
fn paragraphs(body: &str) -> Vec<String> {
    body.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Admin form page (blog settings, new and edited articles)
pub fn form_page(ctx: &PageContext, heading: &str, fields: &[Field]) -> Markup {
    page(
        ctx,
        Some(heading),
        html! {
            h2 { (heading) }
            form method="post" {
                @for field in fields {
                    (form_row(field, CONTROL_CLASS))
                }
                button type="submit" { "Save" }
                " "
                a href="/" { "Cancel" }
            }
        },
    )
}

/// Delete confirmation; the POST performs the deletion
pub fn confirm_delete_page(ctx: &PageContext, article: &Article) -> Markup {
    page(
        ctx,
        Some("Delete article"),
        html! {
            h2 { "Delete article" }
            p { "Are you sure you want to delete \"" (article.title) "\"?" }
            form method="post" {
                button type="submit" { "Yes, delete it" }
                " "
                a href="/" { "Cancel" }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    error_page("Page not found", "The page you asked for does not exist.")
}

pub fn server_error_page() -> Markup {
    error_page("Server error", "Something went wrong. Please try again later.")
}

// Error pages render without the blog context, which may be what failed
fn error_page(title: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                h1 { (title) }
                p { (message) }
                p { a href="/" { "Back to the index" } }
            }
        }
    }
}
