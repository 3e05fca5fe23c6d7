use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};

use crate::{
    entity,
    error::{PriceError, PriceResult},
    models::{Price, PriceInput},
    repository::PriceRepository,
};

pub struct PgPriceRepository {
    db: DatabaseConnection,
}

impl PgPriceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn vehicle_owner(&self, vehicle_id: i64) -> PriceResult<Option<i64>> {
        let owner = entity::Entity::find()
            .filter(entity::Column::VehicleId.eq(vehicle_id))
            .one(&self.db)
            .await?
            .map(|m| m.id);
        Ok(owner)
    }
}

/// The unique index on `vehicle_id` still guards concurrent writers.
fn map_write_error(err: DbErr, vehicle_id: i64) -> PriceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => PriceError::DuplicateVehicle(vehicle_id),
        _ => PriceError::Database(err),
    }
}

#[async_trait]
impl PriceRepository for PgPriceRepository {
    async fn list(&self) -> PriceResult<Vec<Price>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Price::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> PriceResult<Option<Price>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Price::from))
    }

    async fn find_by_vehicle_id(&self, vehicle_id: i64) -> PriceResult<Option<Price>> {
        let model = entity::Entity::find()
            .filter(entity::Column::VehicleId.eq(vehicle_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Price::from))
    }

    async fn insert(&self, input: PriceInput) -> PriceResult<Price> {
        let vehicle_id = input.vehicle_id;
        if self.vehicle_owner(vehicle_id).await?.is_some() {
            return Err(PriceError::DuplicateVehicle(vehicle_id));
        }

        let model = entity::ActiveModel::from_input(None, input)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, vehicle_id))?;

        tracing::info!(price_id = model.id, "Created price");
        Ok(model.into())
    }

    async fn replace(&self, id: i64, input: PriceInput) -> PriceResult<Option<Price>> {
        if entity::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(None);
        }

        let vehicle_id = input.vehicle_id;
        if matches!(self.vehicle_owner(vehicle_id).await?, Some(owner) if owner != id) {
            return Err(PriceError::DuplicateVehicle(vehicle_id));
        }

        let model = match entity::ActiveModel::from_input(Some(id), input)
            .update(&self.db)
            .await
        {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(map_write_error(e, vehicle_id)),
        };

        tracing::info!(price_id = id, "Replaced price");
        Ok(Some(model.into()))
    }

    async fn delete(&self, id: i64) -> PriceResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(price_id = id, "Deleted price");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn row(id: i64, vehicle_id: i64) -> entity::Model {
        entity::Model {
            id,
            currency: "USD".to_string(),
            price: 20_000.0,
            vehicle_id,
        }
    }

    fn input(vehicle_id: i64) -> PriceInput {
        PriceInput {
            currency: "USD".to_string(),
            price: 20_000.0,
            vehicle_id,
        }
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, 1), row(2, 2)]])
            .into_connection();

        let prices = PgPriceRepository::new(db).list().await.unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[1].vehicle_id, 2);
    }

    #[tokio::test]
    async fn test_insert_checks_vehicle_then_inserts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .append_query_results([vec![row(20, 7)]])
            .into_connection();

        let price = PgPriceRepository::new(db).insert(input(7)).await.unwrap();
        assert_eq!(price.id, 20);
    }

    #[tokio::test]
    async fn test_insert_duplicate_vehicle() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(3, 7)]])
            .into_connection();

        let result = PgPriceRepository::new(db).insert(input(7)).await;
        assert!(matches!(result, Err(PriceError::DuplicateVehicle(7))));
    }

    #[tokio::test]
    async fn test_replace_unknown_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let result = PgPriceRepository::new(db).replace(9, input(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_replace_of_concurrently_deleted_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(4, 1)]])
            .append_query_results([vec![row(4, 1)]])
            .append_query_errors([DbErr::RecordNotUpdated])
            .into_connection();

        let result = PgPriceRepository::new(db).replace(4, input(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PgPriceRepository::new(db);
        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_query_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("boom".to_string())])
            .into_connection();

        let result = PgPriceRepository::new(db).find_by_id(1).await;
        assert!(matches!(result, Err(PriceError::Database(_))));
    }
}
