//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config loading.
//!
//! ## Config loading
//! ```rust,ignore
//! use gantry_kernel::config::load_config;
//! use gantry_kernel::domain::config::GantryConfig;
//!
//! let cfg: GantryConfig = load_config(Some("gantry.toml")).unwrap();
//! ```

pub mod config;
pub mod prelude;

pub use gantry_domain as domain;
