pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_user_table;
mod m20260810_000002_create_entry_table;
mod m20260810_000003_create_entry_comment_table;
mod m20260810_000004_create_entry_vote_table;
mod m20260810_000005_create_entry_comment_vote_table;
mod m20260810_000006_create_entry_favorite_table;
mod m20260810_000007_create_entry_comment_favorite_table;
mod m20260810_000008_create_email_confirmation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_user_table::Migration),
            Box::new(m20260810_000002_create_entry_table::Migration),
            Box::new(m20260810_000003_create_entry_comment_table::Migration),
            Box::new(m20260810_000004_create_entry_vote_table::Migration),
            Box::new(m20260810_000005_create_entry_comment_vote_table::Migration),
            Box::new(m20260810_000006_create_entry_favorite_table::Migration),
            Box::new(m20260810_000007_create_entry_comment_favorite_table::Migration),
            Box::new(m20260810_000008_create_email_confirmation_table::Migration),
        ]
    }
}
