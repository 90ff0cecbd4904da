//! Article entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::Article;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: String,
    pub author_id: Uuid,
    pub status: String,
    pub tags: Json,
    pub reading_time: i32,
    #[sea_orm(unique)]
    pub slug: Option<String>,
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

impl TryFrom<Model> for Article {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            description: model.description,
            image: model.image,
            category: model.category.parse()?,
            author_id: model.author_id,
            status: model.status.parse()?,
            tags: serde_json::from_value(model.tags).map_err(|e| e.to_string())?,
            reading_time: model.reading_time.max(0) as u32,
            slug: model.slug,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

impl From<Article> for ActiveModel {
    fn from(article: Article) -> Self {
        Self {
            id: Set(article.id),
            title: Set(article.title),
            content: Set(article.content),
            description: Set(article.description),
            image: Set(article.image),
            category: Set(article.category.as_str().to_string()),
            author_id: Set(article.author_id),
            status: Set(article.status.as_str().to_string()),
            tags: Set(serde_json::json!(article.tags)),
            reading_time: Set(article.reading_time as i32),
            slug: Set(article.slug),
            created_at: Set(article.created_at.into()),
            updated_at: Set(article.updated_at.into()),
        }
    }
}
