//! Remote lookups used to enrich a car: its price from the pricing service
//! and the street address of its location from the maps service.

use std::time::Duration;

use async_trait::async_trait;
use discovery::ServiceEndpoint;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{LookupError, LookupResult};
use crate::models::Address;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Registry application name of the pricing service.
pub const PRICING_APP: &str = "pricing-service";
/// Registry application name of the maps service.
pub const MAPS_APP: &str = "maps-service";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceLookup: Send + Sync {
    /// Display price such as `"USD 12345.67"`; `None` when the vehicle has
    /// no price.
    async fn price_for(&self, vehicle_id: i64) -> LookupResult<Option<String>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn address_for(&self, lat: f64, lon: f64) -> LookupResult<Option<Address>>;
}

fn http_client() -> LookupResult<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?)
}

#[derive(Deserialize)]
struct PriceBody {
    currency: String,
    price: f64,
}

/// `GET {pricing}/services/price?vehicleId=`
#[derive(Clone, Debug)]
pub struct HttpPriceClient {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl HttpPriceClient {
    pub fn new(endpoint: ServiceEndpoint) -> LookupResult<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint,
        })
    }
}

#[async_trait]
impl PriceLookup for HttpPriceClient {
    async fn price_for(&self, vehicle_id: i64) -> LookupResult<Option<String>> {
        let base = self.endpoint.base_url().await?;
        let response = self
            .client
            .get(format!("{base}/services/price"))
            .query(&[("vehicleId", vehicle_id)])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body: PriceBody = response.json().await?;
                Ok(Some(format!("{} {:.2}", body.currency, body.price)))
            }
            status => Err(LookupError::UnexpectedStatus {
                service: PRICING_APP,
                status: status.as_u16(),
            }),
        }
    }
}

/// `GET {maps}/maps?lat=&lon=`
#[derive(Clone, Debug)]
pub struct HttpMapsClient {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl HttpMapsClient {
    pub fn new(endpoint: ServiceEndpoint) -> LookupResult<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint,
        })
    }
}

#[async_trait]
impl AddressLookup for HttpMapsClient {
    async fn address_for(&self, lat: f64, lon: f64) -> LookupResult<Option<Address>> {
        let base = self.endpoint.base_url().await?;
        let response = self
            .client
            .get(format!("{base}/maps"))
            .query(&[("lat", lat), ("lon", lon)])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(LookupError::UnexpectedStatus {
                service: MAPS_APP,
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn fixed(server: &MockServer) -> ServiceEndpoint {
        ServiceEndpoint::Fixed(server.base_url())
    }

    #[tokio::test]
    async fn test_price_is_formatted() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/services/price")
                    .query_param("vehicleId", "3");
                then.status(200).json_body(json!({
                    "id": 3, "currency": "USD", "price": 17043.5, "vehicle_id": 3
                }));
            })
            .await;

        let client = HttpPriceClient::new(fixed(&server)).unwrap();
        let price = client.price_for(3).await.unwrap();

        mock.assert_async().await;
        assert_eq!(price.as_deref(), Some("USD 17043.50"));
    }

    #[tokio::test]
    async fn test_unknown_vehicle_has_no_price() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/services/price");
                then.status(404).json_body(json!({"code": 1004}));
            })
            .await;

        let client = HttpPriceClient::new(fixed(&server)).unwrap();
        assert!(client.price_for(50).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pricing_server_error_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/services/price");
                then.status(503);
            })
            .await;

        let client = HttpPriceClient::new(fixed(&server)).unwrap();
        let err = client.price_for(1).await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::UnexpectedStatus { service: PRICING_APP, status: 503 }
        ));
    }

    #[tokio::test]
    async fn test_address_lookup_sends_coordinates() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/maps")
                    .query_param("lat", "40.5")
                    .query_param("lon", "-73.25");
                then.status(200).json_body(json!({
                    "address": "777 Brockton Avenue",
                    "city": "Abington",
                    "state": "MA",
                    "zip": "02351"
                }));
            })
            .await;

        let client = HttpMapsClient::new(fixed(&server)).unwrap();
        let address = client.address_for(40.5, -73.25).await.unwrap().unwrap();

        mock.assert_async().await;
        assert_eq!(address.city, "Abington");
    }

    #[tokio::test]
    async fn test_unreachable_maps_service_is_http_error() {
        let client =
            HttpMapsClient::new(ServiceEndpoint::Fixed("http://127.0.0.1:1".to_string())).unwrap();
        let err = client.address_for(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, LookupError::Http(_)));
    }
}
