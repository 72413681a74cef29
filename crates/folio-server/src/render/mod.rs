// HTML rendering
// Decision: Maud compile-time templates; every interpolation is escaped
//
// Pages take the enriched PageContext so the layout can always show the blog
// header and the menu for the current identity.

mod fields;
mod layout;
mod pages;

pub use fields::form_row;
pub use layout::page;
pub use pages::{
    confirm_delete_page, form_page, index_page, not_found_page, server_error_page,
    EMPTY_BLOG_MESSAGE,
};
