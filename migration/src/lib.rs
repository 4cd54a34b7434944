pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_user_table;
mod m20250801_000002_create_club_table;
mod m20250801_000003_create_tag_table;
mod m20250801_000004_create_club_tag_table;
mod m20250801_000005_create_user_favorite_club_table;
mod m20250801_000006_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_user_table::Migration),
            Box::new(m20250801_000002_create_club_table::Migration),
            Box::new(m20250801_000003_create_tag_table::Migration),
            Box::new(m20250801_000004_create_club_tag_table::Migration),
            Box::new(m20250801_000005_create_user_favorite_club_table::Migration),
            Box::new(m20250801_000006_create_comment_table::Migration),
        ]
    }
}
