pub use sea_orm_migration::prelude::*;

mod m20250301_000000_bootstrap;
mod m20250301_000001_create_cars;
mod m20250301_000002_create_prices;
mod m20250301_000003_seed_prices;

/// Schema for the `cars` (vehicles-api) and `prices` (pricing-service)
/// tables. Each service runs it at startup when `RUN_MIGRATIONS` is set.
///
/// Both services run this whole list, so either one creates both tables
/// and seeds `prices`. It stays a single list because sea-orm-migration
/// refuses to run when `seaql_migrations` records a migration it does not
/// know, which per-service lists against a shared database would trigger.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000000_bootstrap::Migration),
            Box::new(m20250301_000001_create_cars::Migration),
            Box::new(m20250301_000002_create_prices::Migration),
            Box::new(m20250301_000003_seed_prices::Migration),
        ]
    }
}
