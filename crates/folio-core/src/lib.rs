// Folio domain
//
// DB- and HTTP-agnostic types shared by the storage layer and the site:
// - Blog and Article entities
// - Identity facts supplied by the identity provider
// - Form validation for the admin pages
//
// Key design decisions:
// - Exactly one Blog exists per deployment; storage owns that guarantee
// - Forms deserialize every field as optional and validate afterwards, so a
//   missing field becomes an inline error instead of a rejected request

pub mod article;
pub mod blog;
pub mod forms;
pub mod identity;

pub use article::Article;
pub use blog::{Blog, DEFAULT_BLOG_TITLE};
pub use forms::{
    ArticleDraft, ArticleForm, BlogForm, BlogSettings, Field, FormErrors, ModelForm, Widget,
};
pub use identity::{CurrentUser, Identity};
