//! Taskboard: a personal three-column task board.
//!
//! Each owner keeps tasks in three fixed columns (TODO, IN_PROGRESS and
//! DONE). Within a column the live tasks hold dense positions `0..n`, which
//! this crate maintains as tasks are created, reordered, moved between
//! columns, or soft-deleted. Every owner also stores a preferred
//! left-to-right column order.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and image hosting
//! - **Adapters**: In-memory, `PostgreSQL` and local-directory
//!   implementations of the ports
//! - **Services**: Orchestration of index maintenance and column ordering
//!
//! # Modules
//!
//! - [`board`]: Tasks, column order, board views and drag routing
//! - [`config`]: TOML configuration and adapter construction

pub mod board;
pub mod config;
