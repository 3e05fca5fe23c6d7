//! Vehicles domain
//!
//! CRUD over cars with HAL-style links. Reading a single car also resolves
//! its price (pricing service) and the street address of its location
//! (maps service).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /cars routes, CarAssembler links
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌──────────────────────────────┐
//! │ CarService  │ ───► │ PriceLookup / AddressLookup  │
//! └──────┬──────┘      └──────────────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← PgCarRepository, InMemoryCarRepository
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_vehicles::{CarService, InMemoryCarRepository, handlers};
//!
//! let service = CarService::new(InMemoryCarRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod assembler;
pub mod clients;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use assembler::CarAssembler;
pub use clients::{AddressLookup, HttpMapsClient, HttpPriceClient, PriceLookup};
pub use error::{CarError, CarResult, LookupError, LookupResult};
pub use models::{Address, Car, CarInput, Condition, Location, LocationInput};
pub use postgres::PgCarRepository;
pub use repository::{CarRepository, InMemoryCarRepository};
pub use service::CarService;
