use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment moderation state. Only `active` comments are listed publicly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Active,
    Hidden,
    Deleted,
}

impl CommentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Active => "active",
            CommentStatus::Hidden => "hidden",
            CommentStatus::Deleted => "deleted",
        }
    }
}

impl std::str::FromStr for CommentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CommentStatus::Active),
            "hidden" => Ok(CommentStatus::Hidden),
            "deleted" => Ok(CommentStatus::Deleted),
            other => Err(format!("unknown comment status: {other}")),
        }
    }
}

/// Comment entity. `parent_comment_id` links threaded replies; it must
/// reference a comment on the same article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub article_id: Uuid,
    pub author_id: Uuid,
    pub parent_comment_id: Option<Uuid>,
    pub status: CommentStatus,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        article_id: Uuid,
        author_id: Uuid,
        content: String,
        parent_comment_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            content: content.trim().to_string(),
            article_id,
            author_id,
            parent_comment_id,
            status: CommentStatus::Active,
            is_edited: false,
            edited_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content and mark the comment edited.
    pub fn edit(&mut self, content: String) {
        self.content = content.trim().to_string();
        self.is_edited = true;
        self.edited_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_marks_comment_edited() {
        let mut c = Comment::new(Uuid::new_v4(), Uuid::new_v4(), "first".into(), None);
        assert!(!c.is_edited);
        assert!(c.edited_at.is_none());

        c.edit("  second  ".into());
        assert_eq!(c.content, "second");
        assert!(c.is_edited);
        assert!(c.edited_at.is_some());
    }
}
