// Article domain type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// Set once when the article is created
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
