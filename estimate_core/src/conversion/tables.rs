//! Conversion factor tables.
//!
//! Every factor maps one unit onto the canonical base of its family:
//! meters, square meters, cubic meters, kilograms and kg/m³.
//!
//! The published constants (cubic foot, gallons, pound, board foot) are kept
//! at the precision construction references quote them with, so results match
//! hand calculations digit for digit.

// ============================================================================
// Length (canonical: meter)
// ============================================================================

/// Meters per millimeter
pub const M_PER_MM: f64 = 0.001;
/// Meters per centimeter
pub const M_PER_CM: f64 = 0.01;
/// Meters per inch
pub const M_PER_IN: f64 = 0.0254;
/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;
/// Feet per yard
pub const FT_PER_YD: f64 = 3.0;
/// Meters per yard
pub const M_PER_YD: f64 = M_PER_FT * FT_PER_YD;
/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;
/// Feet per meter, as quoted on metric/imperial toggles
pub const FT_PER_M: f64 = 3.28084;

// ============================================================================
// Volume (canonical: cubic meter)
// ============================================================================

/// Cubic meters per cubic foot
pub const M3_PER_FT3: f64 = 0.0283168;
/// Cubic feet per cubic meter
pub const FT3_PER_M3: f64 = 35.3147;
/// Liters per cubic foot
pub const L_PER_FT3: f64 = 28.3168;
/// Cubic meters per liter
pub const M3_PER_L: f64 = 0.001;
/// Cubic inches per cubic foot
pub const IN3_PER_FT3: f64 = 1728.0;
/// Cubic feet per cubic yard
pub const FT3_PER_YD3: f64 = 27.0;
/// Board feet per cubic meter
pub const BOARD_FT_PER_M3: f64 = 423.776;
/// Cubic inches in one board foot (12 in x 12 in x 1 in)
pub const IN3_PER_BOARD_FT: f64 = 144.0;
/// Cubic feet per US gallon
pub const FT3_PER_US_GAL: f64 = 0.133681;
/// Liters per US gallon
pub const L_PER_US_GAL: f64 = 3.78541;
/// Cubic feet per UK (imperial) gallon
pub const FT3_PER_UK_GAL: f64 = 0.160544;
/// US gallons per cubic foot
pub const US_GAL_PER_FT3: f64 = 7.48052;
/// UK gallons per cubic foot
pub const UK_GAL_PER_FT3: f64 = 6.22884;

// ============================================================================
// Mass (canonical: kilogram)
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Kilograms per gram
pub const KG_PER_G: f64 = 0.001;
/// Kilograms per metric tonne
pub const KG_PER_TONNE: f64 = 1000.0;
/// Pounds per US short ton
pub const LB_PER_SHORT_TON: f64 = 2000.0;

// ============================================================================
// Area (derived from length squared; display constant only)
// ============================================================================

/// Square feet per square meter
pub const FT2_PER_M2: f64 = 10.7639;
/// Square inches per square foot
pub const IN2_PER_FT2: f64 = 144.0;

// ============================================================================
// Density (canonical: kg/m³)
// ============================================================================

/// kg/m³ per lb/ft³
pub const KG_M3_PER_LB_FT3: f64 = KG_PER_LB / M3_PER_FT3;
/// kg/m³ per g/cm³
pub const KG_M3_PER_G_CM3: f64 = 1000.0;
