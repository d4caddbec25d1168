use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Status every ticket starts with.
pub const DEFAULT_STATUS: &str = "open";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "support_query")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub issue: String,
    pub order_id: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, issue: &str, order_id: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        issue: Set(issue.to_string()),
        order_id: Set(order_id.to_string()),
        status: Set(DEFAULT_STATUS.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find(db: &impl ConnectionTrait, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Overwrite `status`; `Ok(None)` when no row has this id.
pub async fn set_status(db: &impl ConnectionTrait, id: i32, status: &str) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.status = Set(status.to_string());
    Ok(Some(am.update(db).await?))
}
