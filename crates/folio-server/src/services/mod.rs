// Services layer for business logic
// Services receive validated input and call storage directly

pub mod article;
pub mod blog;

pub use article::ArticleService;
pub use blog::BlogService;
