//! SeaORM entity for the `appointments` table.
//!
//! Status is stored as a plain string column; conversion to the domain
//! enum happens in the `From<Model>` impl.

use sea_orm::entity::prelude::*;

use crate::domain::{Appointment, AppointmentStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date_time: DateTimeUtc,
    pub status: String,
    pub user_id: Uuid,
    pub master_id: Uuid,
    pub service_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Appointment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date_time: model.date_time,
            status: AppointmentStatus::from(model.status.as_str()),
            user_id: model.user_id,
            master_id: model.master_id,
            service_id: model.service_id,
            created_at: model.created_at,
        }
    }
}
