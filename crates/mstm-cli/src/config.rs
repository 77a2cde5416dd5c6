//! TOML deserialisation of model descriptions.

use serde::Deserialize;

use mstm_model::{OpticalConstants, OpticalDefaults};

/// Top-level model description.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Policy for optical fields a sphere leaves out. Default: "unset".
    #[serde(default)]
    pub defaults: OpticalDefaults,
    #[serde(default)]
    pub sphere: Vec<SphereConfig>,
    #[serde(default)]
    pub group: Vec<GroupConfig>,
}

/// A single sphere entry. Optical fields left out fall back to the
/// `defaults` policy.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    pub centre: [f64; 3],
    pub radius: f64,
    #[serde(default)]
    pub n: Option<f64>,
    #[serde(default)]
    pub k: Option<f64>,
    #[serde(default)]
    pub real_chiral: Option<f64>,
    #[serde(default)]
    pub imag_chiral: Option<f64>,
    #[serde(default)]
    pub tmatrix_file: Option<String>,
}

impl SphereConfig {
    /// The optical fields given explicitly for this sphere.
    pub fn optics(&self) -> OpticalConstants {
        OpticalConstants {
            n: self.n,
            k: self.k,
            real_chiral: self.real_chiral,
            imag_chiral: self.imag_chiral,
        }
    }
}

/// A group entry referring to spheres by index. The optical fields are
/// group overrides, broadcast to the members when the group is built.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Indices into the `[[sphere]]` table, in group order.
    #[serde(default)]
    pub members: Vec<usize>,
    #[serde(default)]
    pub n: Option<f64>,
    #[serde(default)]
    pub k: Option<f64>,
    #[serde(default)]
    pub real_chiral: Option<f64>,
    #[serde(default)]
    pub imag_chiral: Option<f64>,
    #[serde(default)]
    pub tmatrix_file: Option<String>,
}

impl GroupConfig {
    /// The group's optical overrides.
    pub fn optics(&self) -> OpticalConstants {
        OpticalConstants {
            n: self.n,
            k: self.k,
            real_chiral: self.real_chiral,
            imag_chiral: self.imag_chiral,
        }
    }
}

/// Parse a model description from TOML text.
pub fn parse_config(content: &str) -> anyhow::Result<ModelConfig> {
    let config: ModelConfig = toml::from_str(content)?;
    Ok(config)
}

/// Load and parse a TOML model description file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<ModelConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}
