//! # Error Types
//!
//! Structured error types for estimate_core. Errors carry enough context for a
//! front end to point at the offending field or constant without parsing the
//! message text.
//!
//! Degenerate geometry (an inner dimension larger than the outer one) is *not*
//! an error: hollow shapes clamp their volume to zero instead.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::errors::{CalcError, CalcResult};
//!
//! fn bags_for(mass_kg: f64, bag_kg: f64) -> CalcResult<f64> {
//!     if bag_kg <= 0.0 {
//!         return Err(CalcError::invalid_constant(
//!             "bag_kg",
//!             bag_kg,
//!             "Bag mass must be positive",
//!         ));
//!     }
//!     Ok(mass_kg / bag_kg)
//! }
//!
//! assert!(bags_for(100.0, 0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimate_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for conversion, derivation and calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A unit tag is not a member of the family's supported set
    #[error("Unrecognized {family} unit: '{unit}'")]
    UnrecognizedUnit { unit: String, family: String },

    /// A divisor constant (density, bag size, yield, face area) is zero or negative
    #[error("Invalid material constant '{name}': {value} - {reason}")]
    InvalidMaterialConstant {
        name: String,
        value: f64,
        reason: String,
    },

    /// Arithmetic or conversion attempted across unit families
    #[error("Unit family mismatch: expected {expected}, found {found}")]
    UnitFamilyMismatch { expected: String, found: String },

    /// An input value is invalid (out of range, wrong shape, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Text input could not be read as a number (strict parse policy only)
    #[error("Could not parse '{input}' as a number for '{field}'")]
    ParseError { field: String, input: String },

    /// Mix grade, masonry unit or other table entry not found
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an UnrecognizedUnit error
    pub fn unrecognized_unit(unit: impl Into<String>, family: impl Into<String>) -> Self {
        CalcError::UnrecognizedUnit {
            unit: unit.into(),
            family: family.into(),
        }
    }

    /// Create an InvalidMaterialConstant error
    pub fn invalid_constant(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidMaterialConstant {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create a UnitFamilyMismatch error
    pub fn family_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        CalcError::UnitFamilyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(field: impl Into<String>, input: impl Into<String>) -> Self {
        CalcError::ParseError {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnrecognizedUnit { .. } => "UNRECOGNIZED_UNIT",
            CalcError::InvalidMaterialConstant { .. } => "INVALID_MATERIAL_CONSTANT",
            CalcError::UnitFamilyMismatch { .. } => "UNIT_FAMILY_MISMATCH",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject a zero, negative or non-finite divisor constant.
///
/// Returns the value unchanged so it can be used inline.
pub fn require_positive(name: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_constant(
            name,
            value,
            "Constant must be a positive, finite number",
        ))
    }
}
