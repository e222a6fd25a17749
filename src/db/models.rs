use serde::{Deserialize, Serialize};

/// A stored user document. Persisted as `{_id, name, bio}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    #[sqlx(rename = "_id")]
    pub id: String,
    pub name: String,
    pub bio: String,
}
