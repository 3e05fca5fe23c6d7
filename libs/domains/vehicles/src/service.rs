use std::sync::Arc;

use crate::clients::{AddressLookup, PriceLookup};
use crate::error::{CarError, CarResult};
use crate::models::{Address, Car, CarInput};
use crate::repository::CarRepository;

/// Service layer for Car business logic.
///
/// Single-car reads are enriched with a price and an address when the
/// corresponding lookup is configured. A failed lookup leaves the field
/// empty and is logged; it never fails the read.
#[derive(Clone)]
pub struct CarService<R: CarRepository> {
    repository: Arc<R>,
    prices: Option<Arc<dyn PriceLookup>>,
    addresses: Option<Arc<dyn AddressLookup>>,
}

impl<R: CarRepository> CarService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            prices: None,
            addresses: None,
        }
    }

    pub fn with_price_lookup(mut self, prices: Arc<dyn PriceLookup>) -> Self {
        self.prices = Some(prices);
        self
    }

    pub fn with_address_lookup(mut self, addresses: Arc<dyn AddressLookup>) -> Self {
        self.addresses = Some(addresses);
        self
    }

    pub async fn list(&self) -> CarResult<Vec<Car>> {
        self.repository.list().await
    }

    pub async fn find_by_id(&self, id: i64) -> CarResult<Car> {
        let mut car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CarError::NotFound(id))?;

        let coordinates = car.location.as_ref().map(|l| (l.lat, l.lon));
        let (price, address) = tokio::join!(self.lookup_price(id), self.lookup_address(coordinates));

        car.price = price;
        if let Some(location) = car.location.as_mut() {
            location.address = address;
        }

        Ok(car)
    }

    /// Creates when `id` is `None`, otherwise fully replaces the car.
    pub async fn save(&self, id: Option<i64>, input: CarInput) -> CarResult<Car> {
        match id {
            None => self.repository.insert(input).await,
            Some(id) => self
                .repository
                .replace(id, input)
                .await?
                .ok_or(CarError::NotFound(id)),
        }
    }

    pub async fn delete(&self, id: i64) -> CarResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CarError::NotFound(id));
        }
        Ok(())
    }

    async fn lookup_price(&self, vehicle_id: i64) -> Option<String> {
        let prices = self.prices.as_ref()?;
        match prices.price_for(vehicle_id).await {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!(car_id = vehicle_id, error = %e, "Price lookup failed");
                None
            }
        }
    }

    async fn lookup_address(&self, coordinates: Option<(f64, f64)>) -> Option<Address> {
        let (lat, lon) = coordinates?;
        let addresses = self.addresses.as_ref()?;
        match addresses.address_for(lat, lon).await {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!(lat, lon, error = %e, "Address lookup failed");
                None
            }
        }
    }
}
