use sea_orm::entity::prelude::*;

/// Application login account. `password` holds a bcrypt digest, never
/// plaintext; `authorities` is a comma-separated list of role labels
/// (e.g. `ROLE_ADMIN,ROLE_USER`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub authorities: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
