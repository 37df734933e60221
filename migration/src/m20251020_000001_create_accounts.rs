// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 账户表迁移
///
/// 创建 users 基表以及 drivers / residents 两张子类型表，
/// 子类型表以 users.id 作为主键和外键。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Base table shared by every account variant
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::UserName)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string_len(256).not_null())
                    .col(ColumnDef::new(Users::UserType).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        // 2. Driver payload
        manager
            .create_table(
                Table::create()
                    .table(Drivers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drivers::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Drivers::RouteLabel).string_len(100).null())
                    .col(ColumnDef::new(Drivers::CurrentLat).double().null())
                    .col(ColumnDef::new(Drivers::CurrentLng).double().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_drivers_user")
                            .from(Drivers::Table, Drivers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Resident payload
        manager
            .create_table(
                Table::create()
                    .table(Residents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Residents::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Residents::ResidentName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Residents::ResidentAddress)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Residents::ResidentPhone)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_residents_user")
                            .from(Residents::Table, Residents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Residents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Drivers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    UserName,
    Password,
    UserType,
}

#[derive(DeriveIden)]
enum Drivers {
    Table,
    UserId,
    RouteLabel,
    CurrentLat,
    CurrentLng,
}

#[derive(DeriveIden)]
enum Residents {
    Table,
    UserId,
    ResidentName,
    ResidentAddress,
    ResidentPhone,
}
