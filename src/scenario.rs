//! Catalog selection helpers bridging configuration records to plan requests.

use thiserror::Error;

use wellpath_config::{ProfileConfig, UnitsConfig, WellConfig};
use wellpath_profiles::{HProfile, JProfile, SProfile, WellProfile};
use wellpath_units::UnitSystem;

use crate::planner::PlanRequest;

/// Errors surfaced while selecting or converting catalog records.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("well '{0}' not found in catalog")]
    NotFound(String),
    #[error("well catalog is empty")]
    EmptyCatalog,
    #[error("profile type of well '{0}' is not supported")]
    UnsupportedProfile(String),
}

/// Find a well by case-insensitive name.
pub fn find_well<'a>(
    wells: &'a [WellConfig],
    name: &str,
) -> Result<&'a WellConfig, ScenarioError> {
    if wells.is_empty() {
        return Err(ScenarioError::EmptyCatalog);
    }
    let upper = name.to_uppercase();
    wells
        .iter()
        .find(|well| well.name.to_uppercase() == upper)
        .ok_or_else(|| ScenarioError::NotFound(name.to_string()))
}

impl TryFrom<&WellConfig> for PlanRequest {
    type Error = ScenarioError;

    fn try_from(config: &WellConfig) -> Result<Self, Self::Error> {
        let units = match config.units {
            UnitsConfig::Field => UnitSystem::Field,
            UnitsConfig::Metric => UnitSystem::Metric,
        };
        let profile = match config.profile {
            ProfileConfig::J {
                tvd,
                kop,
                build_rate,
                displacement,
            } => WellProfile::J(JProfile {
                tvd,
                kop,
                build_rate,
                displacement,
            }),
            ProfileConfig::S {
                tvd,
                kop,
                build_rate,
                drop_rate,
                displacement,
            } => WellProfile::S(SProfile {
                tvd,
                kop,
                build_rate,
                drop_rate,
                displacement,
            }),
            ProfileConfig::H {
                tvd,
                kop,
                build_rate,
                landing_rate,
                displacement,
            } => WellProfile::H(HProfile {
                tvd,
                kop,
                build_rate,
                landing_rate,
                displacement,
            }),
            ProfileConfig::Unsupported => {
                return Err(ScenarioError::UnsupportedProfile(config.name.clone()));
            }
        };

        Ok(PlanRequest {
            well: config.name.clone(),
            units,
            profile,
        })
    }
}
