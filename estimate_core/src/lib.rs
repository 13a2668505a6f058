//! # estimate_core - Construction Quantity Estimation Engine
//!
//! `estimate_core` turns field dimensions into purchasable quantities: unit
//! conversion, solid volumes, material derivation (cement, sand, aggregate,
//! water, mortar and concrete bags, bricks, blocks, grout, thinset) and cost.
//! All inputs and outputs are JSON-serializable so any front end can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions; settings are passed in, never global
//! - **Units in the types**: Quantities carry their unit, conversions are checked
//! - **Whole purchases**: Bag, brick and block counts round up exactly once
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::calculators::slab::{calculate, ConcreteSlabInput};
//! use estimate_core::config::EstimateSettings;
//!
//! let json = r#"{
//!     "label": "Patio",
//!     "length": 10, "width": 10, "height": 0.5,
//!     "density": 150, "bag_size": 80,
//!     "wastage_percent": 5, "cost_per_bag": 5
//! }"#;
//! let input: ConcreteSlabInput = serde_json::from_str(json).unwrap();
//! let result = calculate(&input, &EstimateSettings::default()).unwrap();
//! assert_eq!(result.bags.required, 99);
//! ```
//!
//! ## Modules
//!
//! - [`conversion`] - Unit tags, conversion to and from canonical units
//! - [`geometry`] - Shape parameters and volume formulas
//! - [`derivation`] - Material quantities and bag counts from volumes
//! - [`materials`] - Mix grades, yields, densities and tile presets
//! - [`cost`] - Line items and totals
//! - [`calculators`] - One orchestrator per estimate type
//! - [`config`] - Estimate settings
//! - [`settings_io`] - Settings files with atomic saves
//! - [`input`] - Reading numbers typed by a user
//! - [`units`] - Metric and imperial unit systems
//! - [`errors`] - Structured error types

pub mod calculators;
pub mod config;
pub mod conversion;
pub mod cost;
pub mod derivation;
pub mod errors;
pub mod geometry;
pub mod input;
pub mod materials;
pub mod settings_io;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculators::{CalculationItem, CalculationOutput};
pub use config::{EstimateSettings, ParsePolicy};
pub use conversion::{convert, from_canonical, to_canonical, Family, Quantity, Unit};
pub use cost::CostBreakdown;
pub use errors::{CalcError, CalcResult};
pub use settings_io::{load_settings, save_settings};
pub use units::UnitSystem;
