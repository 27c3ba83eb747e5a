use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Encoded image payload (typically base64).
    #[sea_orm(column_type = "Text")]
    pub data: String,
    pub title: String,

    /// NULL until the image is linked to a pass.
    pub pereval_id: Option<i32>,
    #[sea_orm(belongs_to, from = "pereval_id", to = "id")]
    pub pereval: HasOne<super::pereval::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
