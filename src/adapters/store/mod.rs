//! Write backend abstraction
//!
//! [`PlaceStore`] and [`WriteSession`] are implemented by the PostgreSQL and
//! REST backends; [`create_place_store`] picks one from configuration.

pub mod factory;
pub mod traits;

pub use factory::create_place_store;
pub use traits::{PlaceStore, Rollback, WriteSession};
