use std::sync::Arc;

use crate::error::{PriceError, PriceResult};
use crate::models::{Price, PriceInput};
use crate::repository::PriceRepository;

/// Service layer for Price business logic
#[derive(Clone)]
pub struct PriceService<R: PriceRepository> {
    repository: Arc<R>,
}

impl<R: PriceRepository> PriceService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list(&self) -> PriceResult<Vec<Price>> {
        self.repository.list().await
    }

    pub async fn find_by_id(&self, id: i64) -> PriceResult<Price> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PriceError::NotFound(id))
    }

    /// Lookup used by the vehicles service.
    pub async fn find_by_vehicle_id(&self, vehicle_id: i64) -> PriceResult<Price> {
        self.repository
            .find_by_vehicle_id(vehicle_id)
            .await?
            .ok_or(PriceError::VehicleNotFound(vehicle_id))
    }

    /// Creates when `id` is `None`, otherwise replaces the existing row.
    pub async fn save(&self, id: Option<i64>, input: PriceInput) -> PriceResult<Price> {
        match id {
            None => self.repository.insert(input).await,
            Some(id) => self
                .repository
                .replace(id, input)
                .await?
                .ok_or(PriceError::NotFound(id)),
        }
    }

    pub async fn delete(&self, id: i64) -> PriceResult<()> {
        if !self.repository.delete(id).await? {
            return Err(PriceError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockPriceRepository;
    use mockall::predicate::eq;

    fn input() -> PriceInput {
        PriceInput {
            currency: "EUR".to_string(),
            price: 1.5,
            vehicle_id: 4,
        }
    }

    #[tokio::test]
    async fn test_save_without_id_inserts() {
        let mut repo = MockPriceRepository::new();
        repo.expect_insert().times(1).returning(|input| {
            Ok(Price {
                id: 11,
                currency: input.currency,
                price: input.price,
                vehicle_id: input.vehicle_id,
            })
        });
        repo.expect_replace().never();

        let price = PriceService::new(repo).save(None, input()).await.unwrap();
        assert_eq!(price.id, 11);
    }

    #[tokio::test]
    async fn test_save_unknown_id_is_not_found() {
        let mut repo = MockPriceRepository::new();
        repo.expect_replace()
            .with(eq(8), eq(input()))
            .returning(|_, _| Ok(None));

        let err = PriceService::new(repo).save(Some(8), input()).await.unwrap_err();
        assert!(matches!(err, PriceError::NotFound(8)));
    }

    #[tokio::test]
    async fn test_missing_vehicle_price() {
        let mut repo = MockPriceRepository::new();
        repo.expect_find_by_vehicle_id()
            .with(eq(77))
            .returning(|_| Ok(None));

        let err = PriceService::new(repo).find_by_vehicle_id(77).await.unwrap_err();
        assert!(matches!(err, PriceError::VehicleNotFound(77)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockPriceRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let err = PriceService::new(repo).delete(3).await.unwrap_err();
        assert!(matches!(err, PriceError::NotFound(3)));
    }
}
