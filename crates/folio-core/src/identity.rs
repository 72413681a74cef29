// Identity facts for the current request
//
// Produced by the identity provider adapter in the site crate. An anonymous
// identity is never an admin.

use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Provider-side user ID
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Who is making the request and whether they administer the blog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    user: Option<CurrentUser>,
    is_admin: bool,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: CurrentUser, is_admin: bool) -> Self {
        Self {
            user: Some(user),
            is_admin,
        }
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
