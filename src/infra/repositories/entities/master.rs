//! SeaORM entity for the `masters` table.

use sea_orm::entity::prelude::*;

use crate::domain::Master;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "masters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub sex: String,
    pub phone: String,
    pub experience: i32,
    pub specialty: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Master {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            sex: model.sex,
            phone: model.phone,
            experience: model.experience,
            specialty: model.specialty,
            created_at: model.created_at,
        }
    }
}
