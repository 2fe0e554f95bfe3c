//! Magnet catalog
//!
//! Closed set of permanent-magnet materials the rails can be built from,
//! each with a nominal per-magnet force range and display metadata.
//! Only `force_range.default` enters the force model

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::configuration::error::ConfigError;

/// Nominal force (N) used when a magnet type name cannot be resolved
pub const DEFAULT_NOMINAL_FORCE: f64 = 2.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MagnetType {
    #[default]
    Neodymium,
    Ferrite,
    Alnico,
    SamariumCobalt,
}

/// Nominal force range of a magnet in Newtons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetProperties {
    pub name: &'static str,
    pub description: &'static str,
    pub force_range: ForceRange,
    pub color: &'static str, // hex, used by renderers
}

const NEODYMIUM: MagnetProperties = MagnetProperties {
    name: "Neodymium (NdFeB)",
    description: "Strongest commercially available magnet",
    force_range: ForceRange { min: 1.5, max: 10.0, default: 2.5 },
    color: "#E5E7EB",
};

const FERRITE: MagnetProperties = MagnetProperties {
    name: "Ferrite (ceramic)",
    description: "Cheap but weaker",
    force_range: ForceRange { min: 0.3, max: 2.0, default: 0.8 },
    color: "#52525B",
};

const ALNICO: MagnetProperties = MagnetProperties {
    name: "AlNiCo",
    description: "High temperature tolerance, medium force",
    force_range: ForceRange { min: 0.5, max: 3.5, default: 1.2 },
    color: "#B45309",
};

const SAMARIUM_COBALT: MagnetProperties = MagnetProperties {
    name: "Samarium-Cobalt (SmCo)",
    description: "Very strong and heat resistant",
    force_range: ForceRange { min: 1.2, max: 8.0, default: 2.0 },
    color: "#7C3AED",
};

impl MagnetType {
    pub const ALL: [MagnetType; 4] = [
        MagnetType::Neodymium,
        MagnetType::Ferrite,
        MagnetType::Alnico,
        MagnetType::SamariumCobalt,
    ];

    /// Catalog entry for this magnet type
    pub fn properties(self) -> &'static MagnetProperties {
        match self {
            MagnetType::Neodymium => &NEODYMIUM,
            MagnetType::Ferrite => &FERRITE,
            MagnetType::Alnico => &ALNICO,
            MagnetType::SamariumCobalt => &SAMARIUM_COBALT,
        }
    }

    /// Nominal per-magnet force (N) fed to the force model
    pub fn nominal_force(self) -> f64 {
        self.properties().force_range.default
    }

    /// Ratio of this type's nominal force to the neodymium reference
    pub fn strength_ratio(self) -> f64 {
        self.nominal_force() / MagnetType::Neodymium.nominal_force()
    }

    /// Config/wire name (`"samarium-cobalt"` etc)
    pub fn as_str(self) -> &'static str {
        match self {
            MagnetType::Neodymium => "neodymium",
            MagnetType::Ferrite => "ferrite",
            MagnetType::Alnico => "alnico",
            MagnetType::SamariumCobalt => "samarium-cobalt",
        }
    }
}

impl fmt::Display for MagnetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MagnetType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        MagnetType::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| ConfigError::UnknownMagnetType(s.to_string()))
    }
}

/// Magnet type for a name, never failing
/// Unknown names resolve to the type whose nominal force is
/// [`DEFAULT_NOMINAL_FORCE`] (neodymium)
pub fn magnet_type_or_default(name: &str) -> MagnetType {
    name.parse::<MagnetType>().unwrap_or_else(|_| {
        warn!("unknown magnet type {:?}, using {} ({} N)", name, MagnetType::default(), DEFAULT_NOMINAL_FORCE);
        MagnetType::default()
    })
}

/// Nominal force for a magnet type given by name
pub fn nominal_force_or_default(name: &str) -> f64 {
    magnet_type_or_default(name).nominal_force()
}
