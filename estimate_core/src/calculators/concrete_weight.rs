//! Weight of a volume of concrete by type, or by a custom density.

use serde::{Deserialize, Serialize};

use super::non_negative;
use crate::config::EstimateSettings;
use crate::conversion::{mass_from_volume, MassUnit, Quantity, VolumeUnit};
use crate::errors::CalcResult;
use crate::materials::ConcreteType;

/// ## JSON Example
///
/// ```json
/// { "label": "Driveway", "volume": 4.5, "volume_unit": "yd3", "concrete_type": "reinforced" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteWeightInput {
    #[serde(default)]
    pub label: String,
    pub volume: f64,
    pub volume_unit: VolumeUnit,
    #[serde(default)]
    pub concrete_type: ConcreteType,
    /// kg/m³ or lb/ft³; replaces the type's density
    #[serde(default)]
    pub custom_density: Option<f64>,
}

impl ConcreteWeightInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("volume", self.volume)?;
        if let Some(density) = self.custom_density {
            non_negative("custom_density", density)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteWeightResult {
    pub concrete_type: ConcreteType,
    pub density: Quantity,
    pub volume_m3: f64,
    pub volume_yd3: f64,
    pub kilograms: f64,
    pub metric_tonnes: f64,
    pub pounds: f64,
    pub short_tons: f64,
}

pub fn calculate(input: &ConcreteWeightInput, settings: &EstimateSettings) -> CalcResult<ConcreteWeightResult> {
    input.validate()?;
    let system = settings.unit_system;

    let density = match input.custom_density {
        Some(value) => Quantity::new(value, system.density()),
        None => input.concrete_type.density(system),
    };
    let volume = Quantity::new(input.volume, input.volume_unit);
    let mass = mass_from_volume(&volume, &density)?;
    tracing::debug!(label = %input.label, volume = %volume, density = %density, kg = mass.value, "concrete weight");

    let in_unit = |unit: MassUnit| mass.convert_to(unit).map(|q| q.value);
    Ok(ConcreteWeightResult {
        concrete_type: input.concrete_type,
        density,
        volume_m3: volume.canonical_value(),
        volume_yd3: volume.convert_to(VolumeUnit::CubicYard)?.value,
        kilograms: mass.value,
        metric_tonnes: in_unit(MassUnit::Tonne)?,
        pounds: in_unit(MassUnit::Pound)?,
        short_tons: in_unit(MassUnit::ShortTon)?,
    })
}
