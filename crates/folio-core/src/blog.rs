// Blog domain type
//
// The blog is a singleton: the site reads it on every page and admins edit it
// through the settings page. It is never deleted.

use serde::{Deserialize, Serialize};

/// Title given to the blog when it is created on first access
pub const DEFAULT_BLOG_TITLE: &str = "My Blog";

/// Site-wide blog settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

impl Default for Blog {
    fn default() -> Self {
        Self {
            title: DEFAULT_BLOG_TITLE.to_string(),
            tagline: None,
        }
    }
}
