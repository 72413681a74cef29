// Base layout: blog header, menu, content

use folio_core::Identity;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::views::PageContext;

pub(crate) const STYLE: &str = r#"
body { font-family: Georgia, serif; max-width: 46rem; margin: 0 auto; padding: 1rem; color: #222; }
header { border-bottom: 1px solid #ddd; margin-bottom: 1.5rem; }
header h1 a { color: inherit; text-decoration: none; }
.tagline { color: #666; font-style: italic; margin-top: -0.5rem; }
.menu { list-style: none; padding: 0; display: flex; gap: 1rem; }
.post { margin-bottom: 2.5rem; }
.meta { color: #888; font-size: 0.9rem; }
.field { margin-bottom: 1rem; }
.form-control { width: 100%; padding: 0.4rem; font: inherit; }
.errorlist { color: #b00; margin: 0.3rem 0; padding-left: 1.2rem; }
.has-error .form-control { border-color: #b00; }
"#;

/// Wrap `content` in the site layout
pub fn page(ctx: &PageContext, title: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title {
                    @if let Some(title) = title { (title) " | " }
                    (ctx.blog.title)
                }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { a href="/" { (ctx.blog.title) } }
                    @if let Some(tagline) = &ctx.blog.tagline {
                        p.tagline { (tagline) }
                    }
                    (menu(&ctx.identity))
                }
                main { (content) }
            }
        }
    }
}

fn menu(identity: &Identity) -> Markup {
    html! {
        nav {
            ul.menu {
                li { a href="/" { "Index" } }
                @if identity.is_admin() {
                    li { a href="/blog/settings" { "Settings" } }
                    li { a href="/articles/new" { "Add article" } }
                }
                @if let Some(user) = identity.user() {
                    li { "Signed in as " (user.email) }
                    li { a href="/logout" { "Logout" } }
                } @else {
                    li { a href="/login" { "Login" } }
                }
            }
        }
    }
}
