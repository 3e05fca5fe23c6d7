//! Maps domain: mock street addresses for coordinates.
//!
//! ```rust,no_run
//! use domain_maps::{CatalogueAddressRepository, MapsService, handlers};
//!
//! let service = MapsService::new(CatalogueAddressRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{MapsError, MapsResult};
pub use models::{Address, Coordinates};
pub use repository::{AddressRepository, CatalogueAddressRepository};
pub use service::MapsService;
