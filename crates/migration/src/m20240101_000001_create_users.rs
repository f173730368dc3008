//! Create `users` table.
//!
//! 64-bit identity generated by the database; `name` is nullable.
use sea_orm_migration::{prelude::*, schema::*, sea_orm::DbBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_column(manager.get_database_backend()))
                    .col(string_len_null(Users::Name, 255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

/// SQLite only auto-assigns ids on an `INTEGER PRIMARY KEY`, which is already 64-bit there.
fn id_column(backend: DbBackend) -> ColumnDef {
    let mut col = ColumnDef::new(Users::Id);
    match backend {
        DbBackend::Sqlite => col.integer(),
        _ => col.big_integer(),
    };
    col.not_null().auto_increment().primary_key().to_owned()
}

#[derive(DeriveIden)]
enum Users { Table, Id, Name }
