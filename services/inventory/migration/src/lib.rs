use sea_orm_migration::prelude::*;

mod m20260830_000001_create_users;
mod m20260830_000002_create_group_memberships;
mod m20260830_000003_create_items;
mod m20260830_000004_create_employees;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_create_users::Migration),
            Box::new(m20260830_000002_create_group_memberships::Migration),
            Box::new(m20260830_000003_create_items::Migration),
            Box::new(m20260830_000004_create_employees::Migration),
        ]
    }
}
