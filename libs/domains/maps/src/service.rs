use std::sync::Arc;

use crate::error::{MapsError, MapsResult};
use crate::models::Address;
use crate::repository::AddressRepository;

#[derive(Clone)]
pub struct MapsService<R: AddressRepository> {
    repository: Arc<R>,
}

impl<R: AddressRepository> MapsService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Address for a coordinate; the coordinate is assumed to be in range.
    pub async fn get_address(&self, lat: f64, lon: f64) -> MapsResult<Address> {
        self.repository
            .lookup(lat, lon)
            .await?
            .ok_or(MapsError::NotFound { lat, lon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAddressRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_address_passes_coordinates_through() {
        let mut repo = MockAddressRepository::new();
        repo.expect_lookup()
            .with(eq(10.0), eq(20.0))
            .times(1)
            .returning(|_, _| Ok(Some(Address::new("1 Main St", "Town", "CA", "90001"))));

        let service = MapsService::new(repo);
        let address = service.get_address(10.0, 20.0).await.unwrap();
        assert_eq!(address.city, "Town");
    }

    #[tokio::test]
    async fn test_missing_address_is_not_found() {
        let mut repo = MockAddressRepository::new();
        repo.expect_lookup().returning(|_, _| Ok(None));

        let service = MapsService::new(repo);
        let err = service.get_address(1.0, 2.0).await.unwrap_err();
        assert!(matches!(err, MapsError::NotFound { .. }));
    }
}
