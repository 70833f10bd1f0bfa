//! Database repositories
//!
//! Provides the data access layer for the profile store.

pub mod dev;

pub use dev::{
    is_unique_violation, CredentialRow, DevChanges, DevRepository, NewDev, ProfileRow, SummaryRow,
};
