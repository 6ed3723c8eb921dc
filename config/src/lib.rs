//! # Config Crate
//!
//! Centralized configuration for the shape mesh pipeline.
//! Every tessellation limit, fixed resolution, and default name lives here
//! so the generators never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_ARC_LENGTH, MAX_SIDE_COUNT, MIN_SIDE_COUNT};
//! use config::MeshConfig;
//!
//! let cfg = MeshConfig::default();
//! assert_eq!(cfg.arc_length, DEFAULT_ARC_LENGTH);
//! assert!(MIN_SIDE_COUNT < MAX_SIDE_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit**: Configuration is a plain value passed to the factory, never a global
//! - **Permissive by Default**: Extent validation is opt-in

pub mod constants;
pub mod mesh_config;

pub use mesh_config::{ConfigError, MeshConfig};
