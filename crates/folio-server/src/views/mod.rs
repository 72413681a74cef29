// Page handlers
//
// Every admin handler takes AdminUser as its first extractor, so a non-admin
// caller is redirected before the page context is built or any form is read.

mod articles;
mod blog;
mod common;
mod index;

pub use articles::{
    confirm_delete, create_article, delete_article, edit_article, new_article, update_article,
};
pub use blog::{edit_blog, update_blog};
pub use common::{found, PageContext};
pub use index::index;
