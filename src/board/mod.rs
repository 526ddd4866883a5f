//! Task board ordering and column-preference management.
//!
//! The board keeps every `(owner, status)` column densely indexed as tasks
//! are created, reordered within a column or moved across columns, and keeps
//! each user's left-to-right column order as a permutation of the three
//! fixed statuses. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
