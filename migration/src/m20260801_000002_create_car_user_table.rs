use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarUser::Table)
                    .if_not_exists()
                    .col(pk_auto(CarUser::Id))
                    .col(string(CarUser::Name))
                    .col(string_uniq(CarUser::Username))
                    .col(string(CarUser::Password))
                    .col(string(CarUser::Authorities))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarUser {
    Table,
    Id,
    Name,
    Username,
    Password,
    Authorities,
}
