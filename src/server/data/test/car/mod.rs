use crate::server::data::car::CarRepository;
use crate::server::model::car::{
    CarSort, CarSortField, CreateCarParams, SortDirection, UpdateCarParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_color;
mod find_by_name;
mod find_by_power;
mod list_paginated;
mod update;
