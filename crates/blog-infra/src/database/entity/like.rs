//! Like entity for SeaORM. The unique (article_id, user_id) index is
//! declared in the migration; a duplicate insert surfaces as a unique
//! constraint violation.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::Like;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::article::Entity",
        from = "Column::ArticleId",
        to = "super::article::Column::Id"
    )]
    Article,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Like {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            article_id: model.article_id,
            user_id: model.user_id,
            kind: model.kind.parse()?,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

impl From<Like> for ActiveModel {
    fn from(like: Like) -> Self {
        Self {
            id: Set(like.id),
            article_id: Set(like.article_id),
            user_id: Set(like.user_id),
            kind: Set(like.kind.as_str().to_string()),
            created_at: Set(like.created_at.into()),
            updated_at: Set(like.updated_at.into()),
        }
    }
}
