//! Migration: Add lookup indexes to the appointments table.
//!
//! The composite unique index on (master_id, date_time) enforces the
//! double-booking invariant at the database level.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("uniq_appointments_master_id_date_time")
                    .table(Appointments::Table)
                    .col(Appointments::MasterId)
                    .col(Appointments::DateTime)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_user_id")
                    .table(Appointments::Table)
                    .col(Appointments::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_service_id")
                    .table(Appointments::Table)
                    .col(Appointments::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_appointments_service_id")
                    .table(Appointments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_appointments_user_id")
                    .table(Appointments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uniq_appointments_master_id_date_time")
                    .table(Appointments::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Appointments {
    Table,
    UserId,
    MasterId,
    ServiceId,
    DateTime,
}
