//! Portfolio item entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::PortfolioItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    pub author_id: Uuid,
    pub status: String,
    pub technologies: Json,
    pub links: Json,
    pub duration: String,
    pub role: String,
    pub features: Json,
    pub tags: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    Author,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for PortfolioItem {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            image: model.image,
            category: model.category.parse()?,
            author_id: model.author_id,
            status: model.status.parse()?,
            technologies: serde_json::from_value(model.technologies).map_err(|e| e.to_string())?,
            links: serde_json::from_value(model.links).map_err(|e| e.to_string())?,
            duration: model.duration,
            role: model.role,
            features: serde_json::from_value(model.features).map_err(|e| e.to_string())?,
            tags: serde_json::from_value(model.tags).map_err(|e| e.to_string())?,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

impl From<PortfolioItem> for ActiveModel {
    fn from(item: PortfolioItem) -> Self {
        Self {
            id: Set(item.id),
            title: Set(item.title),
            content: Set(item.content),
            image: Set(item.image),
            category: Set(item.category.as_str().to_string()),
            author_id: Set(item.author_id),
            status: Set(item.status.as_str().to_string()),
            technologies: Set(serde_json::json!(item.technologies)),
            links: Set(serde_json::json!(item.links)),
            duration: Set(item.duration),
            role: Set(item.role),
            features: Set(serde_json::json!(item.features)),
            tags: Set(serde_json::json!(item.tags)),
            created_at: Set(item.created_at.into()),
            updated_at: Set(item.updated_at.into()),
        }
    }
}
