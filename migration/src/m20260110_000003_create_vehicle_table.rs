use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Brand))
                    .col(string(Vehicle::Model))
                    .col(integer(Vehicle::Year))
                    .col(string_uniq(Vehicle::Plate))
                    .col(integer(Vehicle::Capacity))
                    .col(integer(Vehicle::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_category_id")
                            .from(Vehicle::Table, Vehicle::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Brand,
    Model,
    Year,
    Plate,
    Capacity,
    CategoryId,
}
