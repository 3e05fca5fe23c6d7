use async_trait::async_trait;

use crate::error::MapsResult;
use crate::models::Address;

/// Source of addresses for a coordinate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// `None` when the source has nothing for this coordinate.
    async fn lookup(&self, lat: f64, lon: f64) -> MapsResult<Option<Address>>;
}

/// Fixed in-memory address book.
///
/// A coordinate is hashed onto one entry, so repeated lookups of the same
/// point always return the same address.
#[derive(Debug, Clone)]
pub struct CatalogueAddressRepository {
    entries: Vec<Address>,
}

impl CatalogueAddressRepository {
    pub fn new() -> Self {
        Self::with_entries(default_catalogue())
    }

    pub fn with_entries(entries: Vec<Address>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot(&self, lat: f64, lon: f64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let hash = coordinate_hash(lat, lon);
        Some((hash % self.entries.len() as u64) as usize)
    }
}

impl Default for CatalogueAddressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressRepository for CatalogueAddressRepository {
    async fn lookup(&self, lat: f64, lon: f64) -> MapsResult<Option<Address>> {
        let address = self.slot(lat, lon).map(|i| self.entries[i].clone());
        tracing::debug!(lat, lon, found = address.is_some(), "Catalogue lookup");
        Ok(address)
    }
}

/// FNV-1a over the bit patterns of both coordinates; `-0.0` folds onto `0.0`.
fn coordinate_hash(lat: f64, lon: f64) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let normalize = |v: f64| if v == 0.0 { 0.0f64 } else { v };

    [normalize(lat), normalize(lon)]
        .iter()
        .flat_map(|v| v.to_bits().to_le_bytes())
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}

fn default_catalogue() -> Vec<Address> {
    vec![
        Address::new("777 Brockton Avenue", "Abington", "MA", "02351"),
        Address::new("30 Memorial Drive", "Avon", "MA", "02322"),
        Address::new("250 Hartford Avenue", "Bellingham", "MA", "02019"),
        Address::new("700 Oak Street", "Brockton", "MA", "02301"),
        Address::new("66-4 Parkhurst Road", "Chelmsford", "MA", "01824"),
        Address::new("591 Memorial Drive", "Chicopee", "MA", "01020"),
        Address::new("55 Brooksby Village Way", "Danvers", "MA", "01923"),
        Address::new("137 Teaticket Highway", "East Falmouth", "MA", "02536"),
        Address::new("42 Fairhaven Commons Way", "Fairhaven", "MA", "02719"),
        Address::new("374 William S Canning Boulevard", "Fall River", "MA", "02721"),
        Address::new("121 Worcester Road", "Framingham", "MA", "01701"),
        Address::new("677 Timpany Boulevard", "Gardner", "MA", "01440"),
        Address::new("337 Russell Street", "Hadley", "MA", "01035"),
        Address::new("295 Plymouth Street", "Halifax", "MA", "02338"),
        Address::new("1775 Washington Street", "Hanover", "MA", "02339"),
        Address::new("280 Washington Street", "Hudson", "MA", "01749"),
        Address::new("20 Soojian Drive", "Leicester", "MA", "01524"),
        Address::new("11 Jungle Road", "Leominster", "MA", "01453"),
        Address::new("301 Massachusetts Avenue", "Lunenburg", "MA", "01462"),
        Address::new("780 Lynnway", "Lynn", "MA", "01905"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_same_coordinate_same_address() {
        let repo = CatalogueAddressRepository::new();
        let first = repo.lookup(40.730610, -73.935242).await.unwrap();
        let second = repo.lookup(40.730610, -73.935242).await.unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_signed_zero_is_one_point() {
        let repo = CatalogueAddressRepository::new();
        assert_eq!(
            repo.lookup(0.0, 0.0).await.unwrap(),
            repo.lookup(-0.0, -0.0).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_catalogue_spreads_over_entries() {
        let repo = CatalogueAddressRepository::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..200 {
            let lat = -80.0 + f64::from(i) * 0.8;
            let addr = repo.lookup(lat, 12.5).await.unwrap().unwrap();
            seen.insert(addr.zip);
        }
        assert!(seen.len() > 1);
    }

    #[tokio::test]
    async fn test_empty_catalogue_finds_nothing() {
        let repo = CatalogueAddressRepository::with_entries(vec![]);
        assert!(repo.is_empty());
        assert!(repo.lookup(1.0, 2.0).await.unwrap().is_none());
    }
}
