use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One USD price between 10k and 100k per vehicle id 1..=19
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO prices (currency, price, vehicle_id)
                SELECT 'USD', ROUND((10000 + random() * 90000)::numeric, 2)::double precision, v
                FROM generate_series(1, 19) AS v
                ON CONFLICT (vehicle_id) DO NOTHING
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM prices WHERE vehicle_id BETWEEN 1 AND 19")
            .await?;

        Ok(())
    }
}
