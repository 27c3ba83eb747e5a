use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A submitted mountain pass. Owns its user, coords and level rows.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pereval")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub beauty_title: String,
    pub title: String,
    pub other_titles: String,
    pub connect: String,
    pub add_time: DateTimeUtc,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub coords_id: i32,
    #[sea_orm(belongs_to, from = "coords_id", to = "id")]
    pub coords: HasOne<super::coords::Entity>,

    pub level_id: i32,
    #[sea_orm(belongs_to, from = "level_id", to = "id")]
    pub level: HasOne<super::level::Entity>,

    #[sea_orm(has_many)]
    pub images: HasMany<super::image::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
