//! Supabase REST write backend
//!
//! Writes through the PostgREST API of a Supabase project. There is no
//! transaction across rows; see [`adapter`] for what that means on failure.

pub mod adapter;
pub mod client;

pub use adapter::{RestSession, RestStore};
pub use client::{RestClient, TableProbe};
