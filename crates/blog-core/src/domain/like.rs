use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reaction kind. Only `like` is reachable from the routes today; the
/// dislike variant is carried in the model for the reaction counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeKind {
    Like,
    Dislike,
}

impl LikeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LikeKind::Like => "like",
            LikeKind::Dislike => "dislike",
        }
    }
}

impl std::str::FromStr for LikeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(LikeKind::Like),
            "dislike" => Ok(LikeKind::Dislike),
            other => Err(format!("unknown like kind: {other}")),
        }
    }
}

/// Like entity. At most one per (article, user) pair; the store enforces
/// this with a unique compound index, so a concurrent duplicate insert
/// fails at the constraint rather than merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub kind: LikeKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Like {
    pub fn new(article_id: Uuid, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            article_id,
            user_id,
            kind: LikeKind::Like,
            created_at: now,
            updated_at: now,
        }
    }
}
