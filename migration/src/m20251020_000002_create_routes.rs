// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 路线、街道与站点表迁移
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Create routes table (Depends on Drivers)
        manager
            .create_table(
                Table::create()
                    .table(Routes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Routes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Routes::DriverId).integer().not_null())
                    .col(ColumnDef::new(Routes::DriveDate).date().not_null())
                    .col(ColumnDef::new(Routes::DriveTime).time().not_null())
                    .col(
                        ColumnDef::new(Routes::Status)
                            .string_len(50)
                            .not_null()
                            .default("scheduled"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_routes_driver")
                            .from(Routes::Table, Routes::DriverId)
                            .to(Drivers::Table, Drivers::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_routes_driver")
                    .table(Routes::Table)
                    .col(Routes::DriverId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_routes_status")
                    .table(Routes::Table)
                    .col(Routes::Status)
                    .to_owned(),
            )
            .await?;

        // 2. Create streets table (Depends on Routes)
        manager
            .create_table(
                Table::create()
                    .table(Streets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Streets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Streets::RouteId).integer().not_null())
                    .col(
                        ColumnDef::new(Streets::StreetName)
                            .string_len(100)
                            .not_null()
                            .check(Expr::col(Streets::StreetName).ne("")),
                    )
                    .col(
                        ColumnDef::new(Streets::StreetLocation)
                            .string_len(200)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_streets_route")
                            .from(Streets::Table, Streets::RouteId)
                            .to(Routes::Table, Routes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_streets_route")
                    .table(Streets::Table)
                    .col(Streets::RouteId)
                    .to_owned(),
            )
            .await?;

        // 3. Create stops table (Depends on Streets and Residents)
        manager
            .create_table(
                Table::create()
                    .table(Stops::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stops::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stops::ResidentId).integer().not_null())
                    .col(ColumnDef::new(Stops::StreetId).integer().not_null())
                    .col(ColumnDef::new(Stops::StopTime).time().not_null())
                    .col(
                        ColumnDef::new(Stops::StopStatus)
                            .string_len(50)
                            .not_null()
                            .default("requested"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stops_resident")
                            .from(Stops::Table, Stops::ResidentId)
                            .to(Residents::Table, Residents::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stops_street")
                            .from(Stops::Table, Stops::StreetId)
                            .to(Streets::Table, Streets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup path for the one-open-stop-per-street rule
        manager
            .create_index(
                Index::create()
                    .name("idx_stops_resident_street")
                    .table(Stops::Table)
                    .col(Stops::ResidentId)
                    .col(Stops::StreetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stops::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Streets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Routes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Drivers {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Residents {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Routes {
    Table,
    Id,
    DriverId,
    DriveDate,
    DriveTime,
    Status,
}

#[derive(DeriveIden)]
enum Streets {
    Table,
    Id,
    RouteId,
    StreetName,
    StreetLocation,
}

#[derive(DeriveIden)]
enum Stops {
    Table,
    Id,
    ResidentId,
    StreetId,
    StopTime,
    StopStatus,
}
