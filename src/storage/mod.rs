//! Storage layer - client records behind PostgREST.
//!
//! This module provides the ClientStore abstraction over the clients table,
//! the Supabase implementation, and an in-memory mock for tests.

pub mod supabase;
pub mod traits;

pub use supabase::SupabaseStore;
pub use traits::{ClientFilter, ClientStore, MockClientStore};
