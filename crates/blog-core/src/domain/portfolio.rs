use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of portfolio categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioCategory {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "Desktop App")]
    DesktopApp,
    #[serde(rename = "API Development")]
    ApiDevelopment,
    #[serde(rename = "Database Design")]
    DatabaseDesign,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    Blockchain,
    #[serde(rename = "Game Development")]
    GameDevelopment,
    Other,
}

impl PortfolioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioCategory::WebDevelopment => "Web Development",
            PortfolioCategory::MobileApp => "Mobile App",
            PortfolioCategory::DesktopApp => "Desktop App",
            PortfolioCategory::ApiDevelopment => "API Development",
            PortfolioCategory::DatabaseDesign => "Database Design",
            PortfolioCategory::UiUxDesign => "UI/UX Design",
            PortfolioCategory::MachineLearning => "Machine Learning",
            PortfolioCategory::Blockchain => "Blockchain",
            PortfolioCategory::GameDevelopment => "Game Development",
            PortfolioCategory::Other => "Other",
        }
    }
}

impl std::str::FromStr for PortfolioCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Web Development" => Ok(PortfolioCategory::WebDevelopment),
            "Mobile App" => Ok(PortfolioCategory::MobileApp),
            "Desktop App" => Ok(PortfolioCategory::DesktopApp),
            "API Development" => Ok(PortfolioCategory::ApiDevelopment),
            "Database Design" => Ok(PortfolioCategory::DatabaseDesign),
            "UI/UX Design" => Ok(PortfolioCategory::UiUxDesign),
            "Machine Learning" => Ok(PortfolioCategory::MachineLearning),
            "Blockchain" => Ok(PortfolioCategory::Blockchain),
            "Game Development" => Ok(PortfolioCategory::GameDevelopment),
            "Other" => Ok(PortfolioCategory::Other),
            other => Err(format!("unknown portfolio category: {other}")),
        }
    }
}

/// Portfolio project state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortfolioStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
}

impl PortfolioStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioStatus::Planning => "planning",
            PortfolioStatus::InProgress => "in-progress",
            PortfolioStatus::Completed => "completed",
            PortfolioStatus::OnHold => "on-hold",
        }
    }
}

impl std::str::FromStr for PortfolioStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(PortfolioStatus::Planning),
            "in-progress" => Ok(PortfolioStatus::InProgress),
            "completed" => Ok(PortfolioStatus::Completed),
            "on-hold" => Ok(PortfolioStatus::OnHold),
            other => Err(format!("unknown portfolio status: {other}")),
        }
    }
}

/// External links attached to a portfolio item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLinks {
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub live: String,
    #[serde(default)]
    pub documentation: String,
}

/// Portfolio item entity. Same ownership rule as Article, but nothing
/// references portfolio items, so deletion has no cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: PortfolioCategory,
    pub author_id: Uuid,
    pub status: PortfolioStatus,
    pub technologies: Vec<String>,
    pub links: PortfolioLinks,
    pub duration: String,
    pub role: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioItem {
    pub fn new(
        author_id: Uuid,
        title: String,
        content: String,
        category: PortfolioCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            content,
            image: None,
            category,
            author_id,
            status: PortfolioStatus::Completed,
            technologies: Vec::new(),
            links: PortfolioLinks::default(),
            duration: String::new(),
            role: "Full Stack Developer".to_string(),
            features: Vec::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
