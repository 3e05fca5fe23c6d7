//! Pricing domain
//!
//! CRUD over vehicle prices at `/prices`, plus the per-vehicle lookup
//! `GET /services/price?vehicleId=` consumed by the vehicles API.
//!
//! ```text
//! handlers ──► PriceService ──► PriceRepository ──┬─► PgPriceRepository (SeaORM)
//!                                                 └─► InMemoryPriceRepository
//! ```
//!
//! ```rust,no_run
//! use domain_pricing::{InMemoryPriceRepository, PriceService, handlers};
//!
//! let service = PriceService::new(InMemoryPriceRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod assembler;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use assembler::PriceAssembler;
pub use error::{PriceError, PriceResult};
pub use models::{Price, PriceInput, VehiclePriceQuery};
pub use postgres::PgPriceRepository;
pub use repository::{InMemoryPriceRepository, PriceRepository};
pub use service::PriceService;
