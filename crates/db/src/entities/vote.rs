//! Vote entity, a single user's choice of one vote variant.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "votes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// User who voted
    #[sea_orm(indexed)]
    pub user_id: Uuid,

    /// Chosen variant; (user_id, variant_id) is unique
    #[sea_orm(indexed)]
    pub variant_id: Uuid,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::vote_variant::Entity",
        from = "Column::VariantId",
        to = "super::vote_variant::Column::Id",
        on_delete = "Cascade"
    )]
    VoteVariant,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::vote_variant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VoteVariant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
