use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{PriceError, PriceResult};
use crate::models::{Price, PriceInput};

/// Repository trait for Price persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceRepository: Send + Sync {
    /// All prices ordered by id
    async fn list(&self) -> PriceResult<Vec<Price>>;

    async fn find_by_id(&self, id: i64) -> PriceResult<Option<Price>>;

    async fn find_by_vehicle_id(&self, vehicle_id: i64) -> PriceResult<Option<Price>>;

    /// Insert with a store-assigned id; fails with `DuplicateVehicle`
    async fn insert(&self, input: PriceInput) -> PriceResult<Price>;

    /// Replace every field of an existing row; `None` when `id` is unknown
    async fn replace(&self, id: i64, input: PriceInput) -> PriceResult<Option<Price>>;

    /// `false` when nothing was deleted
    async fn delete(&self, id: i64) -> PriceResult<bool>;
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Price>,
    last_id: i64,
}

impl Table {
    fn vehicle_taken(&self, vehicle_id: i64, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|p| p.vehicle_id == vehicle_id && Some(p.id) != except)
    }
}

/// In-memory implementation of PriceRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPriceRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryPriceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PriceRepository for InMemoryPriceRepository {
    async fn list(&self) -> PriceResult<Vec<Price>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> PriceResult<Option<Price>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_vehicle_id(&self, vehicle_id: i64) -> PriceResult<Option<Price>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|p| p.vehicle_id == vehicle_id)
            .cloned())
    }

    async fn insert(&self, input: PriceInput) -> PriceResult<Price> {
        let mut table = self.table.write().await;

        if table.vehicle_taken(input.vehicle_id, None) {
            return Err(PriceError::DuplicateVehicle(input.vehicle_id));
        }

        table.last_id += 1;
        let price = Price {
            id: table.last_id,
            currency: input.currency,
            price: input.price,
            vehicle_id: input.vehicle_id,
        };
        table.rows.insert(price.id, price.clone());

        tracing::info!(price_id = price.id, "Created price");
        Ok(price)
    }

    async fn replace(&self, id: i64, input: PriceInput) -> PriceResult<Option<Price>> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if table.vehicle_taken(input.vehicle_id, Some(id)) {
            return Err(PriceError::DuplicateVehicle(input.vehicle_id));
        }

        let price = Price {
            id,
            currency: input.currency,
            price: input.price,
            vehicle_id: input.vehicle_id,
        };
        table.rows.insert(id, price.clone());

        tracing::info!(price_id = id, "Replaced price");
        Ok(Some(price))
    }

    async fn delete(&self, id: i64) -> PriceResult<bool> {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).is_some();
        if removed {
            tracing::info!(price_id = id, "Deleted price");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(vehicle_id: i64) -> PriceInput {
        PriceInput {
            currency: "USD".to_string(),
            price: 15000.0,
            vehicle_id,
        }
    }

    #[tokio::test]
    async fn test_ids_increase_and_are_not_reused() {
        let repo = InMemoryPriceRepository::new();
        let first = repo.insert(input(1)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.insert(input(2)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_duplicate_vehicle_rejected_on_insert() {
        let repo = InMemoryPriceRepository::new();
        repo.insert(input(5)).await.unwrap();

        let result = repo.insert(input(5)).await;
        assert!(matches!(result, Err(PriceError::DuplicateVehicle(5))));
    }

    #[tokio::test]
    async fn test_replace_may_keep_own_vehicle() {
        let repo = InMemoryPriceRepository::new();
        let price = repo.insert(input(5)).await.unwrap();

        let mut changed = input(5);
        changed.price = 99.0;
        let replaced = repo.replace(price.id, changed).await.unwrap().unwrap();
        assert_eq!(replaced.price, 99.0);
    }

    #[tokio::test]
    async fn test_replace_unknown_is_none() {
        let repo = InMemoryPriceRepository::new();
        assert!(repo.replace(42, input(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryPriceRepository::new();
        for vehicle_id in [3, 1, 2] {
            repo.insert(input(vehicle_id)).await.unwrap();
        }
        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
