use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CarResult;
use crate::models::{Car, CarInput, Location};

/// Repository trait for Car persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// All cars ordered by id
    async fn list(&self) -> CarResult<Vec<Car>>;

    async fn find_by_id(&self, id: i64) -> CarResult<Option<Car>>;

    /// Insert with a store-assigned id and timestamps
    async fn insert(&self, input: CarInput) -> CarResult<Car>;

    /// Replace every field of an existing car, keeping `id` and
    /// `created_at`; `None` when `id` is unknown
    async fn replace(&self, id: i64, input: CarInput) -> CarResult<Option<Car>>;

    /// `false` when nothing was deleted
    async fn delete(&self, id: i64) -> CarResult<bool>;
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Car>,
    last_id: i64,
}

/// In-memory implementation of CarRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCarRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn build_car(id: i64, input: CarInput, created_at: chrono::DateTime<Utc>) -> Car {
    Car {
        id,
        created_at,
        modified_at: Utc::now(),
        condition: input.condition,
        make: input.make,
        model: input.model,
        body: input.body,
        engine: input.engine,
        fuel_type: input.fuel_type,
        external_color: input.external_color,
        model_year: input.model_year,
        production_year: input.production_year,
        mileage: input.mileage,
        number_of_doors: input.number_of_doors,
        location: input.location.map(|l| Location::new(l.lat, l.lon)),
        price: None,
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn list(&self) -> CarResult<Vec<Car>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> CarResult<Option<Car>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, input: CarInput) -> CarResult<Car> {
        let mut table = self.table.write().await;

        table.last_id += 1;
        let car = build_car(table.last_id, input, Utc::now());
        table.rows.insert(car.id, car.clone());

        tracing::info!(car_id = car.id, condition = %car.condition, "Created car");
        Ok(car)
    }

    async fn replace(&self, id: i64, input: CarInput) -> CarResult<Option<Car>> {
        let mut table = self.table.write().await;

        let Some(created_at) = table.rows.get(&id).map(|c| c.created_at) else {
            return Ok(None);
        };

        let car = build_car(id, input, created_at);
        table.rows.insert(id, car.clone());

        tracing::info!(car_id = id, "Replaced car");
        Ok(Some(car))
    }

    async fn delete(&self, id: i64) -> CarResult<bool> {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).is_some();
        if removed {
            tracing::info!(car_id = id, "Deleted car");
        }
        Ok(removed)
    }
}
