use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slug::{reading_time, slugify};

/// Closed set of article categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleCategory {
    Frontend,
    Backend,
    Mobile,
    DevOps,
    Database,
    #[serde(rename = "AI/ML")]
    AiMl,
    Web3,
    Tutorial,
    News,
    Opinion,
    General,
}

impl ArticleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleCategory::Frontend => "Frontend",
            ArticleCategory::Backend => "Backend",
            ArticleCategory::Mobile => "Mobile",
            ArticleCategory::DevOps => "DevOps",
            ArticleCategory::Database => "Database",
            ArticleCategory::AiMl => "AI/ML",
            ArticleCategory::Web3 => "Web3",
            ArticleCategory::Tutorial => "Tutorial",
            ArticleCategory::News => "News",
            ArticleCategory::Opinion => "Opinion",
            ArticleCategory::General => "General",
        }
    }
}

impl std::str::FromStr for ArticleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frontend" => Ok(ArticleCategory::Frontend),
            "Backend" => Ok(ArticleCategory::Backend),
            "Mobile" => Ok(ArticleCategory::Mobile),
            "DevOps" => Ok(ArticleCategory::DevOps),
            "Database" => Ok(ArticleCategory::Database),
            "AI/ML" => Ok(ArticleCategory::AiMl),
            "Web3" => Ok(ArticleCategory::Web3),
            "Tutorial" => Ok(ArticleCategory::Tutorial),
            "News" => Ok(ArticleCategory::News),
            "Opinion" => Ok(ArticleCategory::Opinion),
            "General" => Ok(ArticleCategory::General),
            other => Err(format!("unknown article category: {other}")),
        }
    }
}

/// Article lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Archived => "archived",
        }
    }
}

impl std::str::FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            "archived" => Ok(ArticleStatus::Archived),
            other => Err(format!("unknown article status: {other}")),
        }
    }
}

/// Article entity.
///
/// `slug` and `reading_time` are derived fields: the slug is generated once
/// from the title and never regenerated after it is set, the reading time is
/// recomputed whenever the content changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: ArticleCategory,
    pub author_id: Uuid,
    pub status: ArticleStatus,
    pub tags: Vec<String>,
    pub reading_time: u32,
    pub slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new published article with derived slug and reading time.
    pub fn new(
        author_id: Uuid,
        title: String,
        content: String,
        description: Option<String>,
        category: ArticleCategory,
        image: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        let title = title.trim().to_string();
        let slug = {
            let s = slugify(&title);
            (!s.is_empty()).then_some(s)
        };
        let reading_time = reading_time(&content);
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            description: description.map(|d| d.trim().to_string()),
            image,
            category,
            author_id,
            status: ArticleStatus::Published,
            tags: tags.into_iter().map(|t| t.trim().to_lowercase()).collect(),
            reading_time,
            slug,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the title; derives the slug if none was ever set.
    pub fn set_title(&mut self, title: String) {
        self.title = title.trim().to_string();
        if self.slug.is_none() {
            let s = slugify(&self.title);
            self.slug = (!s.is_empty()).then_some(s);
        }
    }

    /// Replace the content and recompute the reading time.
    pub fn set_content(&mut self, content: String) {
        self.reading_time = reading_time(&content);
        self.content = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, content: &str) -> Article {
        Article::new(
            Uuid::new_v4(),
            title.to_string(),
            content.to_string(),
            None,
            ArticleCategory::General,
            None,
            vec![],
        )
    }

    #[test]
    fn new_article_derives_slug_and_reading_time() {
        let body = vec!["word"; 400].join(" ");
        let a = article("Hello World!!", &body);
        assert_eq!(a.slug.as_deref(), Some("hello-world"));
        assert_eq!(a.reading_time, 2);
        assert_eq!(a.status, ArticleStatus::Published);
    }

    #[test]
    fn slug_is_set_once() {
        let mut a = article("First Title", "body");
        let original = a.slug.clone();
        a.set_title("Second Title".to_string());
        assert_eq!(a.slug, original);
    }

    #[test]
    fn slug_derived_on_retitle_when_unset() {
        let mut a = article("!!!", "body");
        assert!(a.slug.is_none());
        a.set_title("Real Title".to_string());
        assert_eq!(a.slug.as_deref(), Some("real-title"));
    }

    #[test]
    fn content_change_recomputes_reading_time() {
        let mut a = article("T", "short body");
        assert_eq!(a.reading_time, 1);
        a.set_content(vec!["w"; 600].join(" "));
        assert_eq!(a.reading_time, 3);
    }

    #[test]
    fn tags_are_lowercased() {
        let a = Article::new(
            Uuid::new_v4(),
            "T".into(),
            "c".into(),
            None,
            ArticleCategory::Backend,
            None,
            vec![" Rust ".into(), "ACTIX".into()],
        );
        assert_eq!(a.tags, vec!["rust", "actix"]);
    }

    #[test]
    fn category_wire_names() {
        assert_eq!(
            "AI/ML".parse::<ArticleCategory>().unwrap(),
            ArticleCategory::AiMl
        );
        assert_eq!(ArticleCategory::AiMl.as_str(), "AI/ML");
        assert!("Cooking".parse::<ArticleCategory>().is_err());
    }
}
