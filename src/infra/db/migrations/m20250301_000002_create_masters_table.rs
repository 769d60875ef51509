//! Migration: Create the masters table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Masters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Masters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Masters::Name).string().not_null())
                    .col(ColumnDef::new(Masters::Sex).string().not_null())
                    .col(
                        ColumnDef::new(Masters::Phone)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Masters::Experience).integer().not_null())
                    .col(ColumnDef::new(Masters::Specialty).string().not_null())
                    .col(
                        ColumnDef::new(Masters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Masters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Masters {
    Table,
    Id,
    Name,
    Sex,
    Phone,
    Experience,
    Specialty,
    CreatedAt,
}
