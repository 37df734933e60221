// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "routes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub driver_id: i32,
    pub drive_date: Date,
    pub drive_time: Time,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::UserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Driver,
    #[sea_orm(has_many = "super::street::Entity")]
    Streets,
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl Related<super::street::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Streets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
