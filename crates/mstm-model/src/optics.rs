//! Optical constants of a sphere or a sphere group.
//!
//! Every optical field is optional. An unset field is a distinct state from
//! any numeric value: on a sphere it means "use this sphere's own default",
//! and in a bulk update it means "leave this field alone".

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// The four optical fields: refractive index, extinction coefficient, and
/// the two parts of the chirality factor beta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalConstants {
    /// Real part of the refractive index.
    #[serde(default)]
    pub n: Option<f64>,
    /// Extinction coefficient (imaginary part of the refractive index).
    #[serde(default)]
    pub k: Option<f64>,
    /// Real part of the chirality factor beta.
    #[serde(default)]
    pub real_chiral: Option<f64>,
    /// Imaginary part of the chirality factor beta.
    #[serde(default)]
    pub imag_chiral: Option<f64>,
}

impl OpticalConstants {
    /// All four fields set.
    pub fn new(n: f64, k: f64, real_chiral: f64, imag_chiral: f64) -> Self {
        Self {
            n: Some(n),
            k: Some(k),
            real_chiral: Some(real_chiral),
            imag_chiral: Some(imag_chiral),
        }
    }

    /// True when none of the four fields is set.
    pub fn is_unset(&self) -> bool {
        self.n.is_none()
            && self.k.is_none()
            && self.real_chiral.is_none()
            && self.imag_chiral.is_none()
    }

    /// Field-wise overlay: each field set on `self` wins, otherwise the
    /// value from `base` is kept (including `None`).
    pub fn overlay(&self, base: &OpticalConstants) -> OpticalConstants {
        OpticalConstants {
            n: self.n.or(base.n),
            k: self.k.or(base.k),
            real_chiral: self.real_chiral.or(base.real_chiral),
            imag_chiral: self.imag_chiral.or(base.imag_chiral),
        }
    }

    /// Complex refractive index $\tilde{n} = n + ik$, if both parts are set.
    pub fn refractive_index(&self) -> Option<Complex64> {
        Some(Complex64::new(self.n?, self.k?))
    }

    /// Complex chirality factor $\beta$, if both parts are set.
    pub fn chiral_factor(&self) -> Option<Complex64> {
        Some(Complex64::new(self.real_chiral?, self.imag_chiral?))
    }
}

/// Policy for optical fields not given when a sphere is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpticalDefaults {
    /// Omitted fields stay unset.
    #[default]
    Unset,
    /// Omitted fields take free-space values: `n = 1`, `k = 0`, no chirality.
    Vacuum,
}

impl OpticalDefaults {
    /// The optical constants this policy fills in.
    pub fn constants(&self) -> OpticalConstants {
        match self {
            OpticalDefaults::Unset => OpticalConstants::default(),
            OpticalDefaults::Vacuum => OpticalConstants::new(1.0, 0.0, 0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert!(OpticalConstants::default().is_unset());
        assert!(!OpticalConstants { k: Some(0.0), ..Default::default() }.is_unset());
    }

    #[test]
    fn test_overlay_keeps_unset_fields_from_base() {
        let base = OpticalConstants::new(1.5, 0.1, 0.0, 0.0);
        let patch = OpticalConstants { k: Some(2.5), ..Default::default() };
        let merged = patch.overlay(&base);
        assert_eq!(merged, OpticalConstants::new(1.5, 2.5, 0.0, 0.0));
    }

    #[test]
    fn test_complex_views_need_both_parts() {
        let partial = OpticalConstants { n: Some(1.33), ..Default::default() };
        assert!(partial.refractive_index().is_none());

        let full = OpticalConstants::new(1.33, 0.01, 0.2, -0.1);
        assert_eq!(full.refractive_index(), Some(Complex64::new(1.33, 0.01)));
        assert_eq!(full.chiral_factor(), Some(Complex64::new(0.2, -0.1)));
    }

    #[test]
    fn test_vacuum_policy() {
        let c = OpticalDefaults::Vacuum.constants();
        assert_eq!(c.n, Some(1.0));
        assert_eq!(c.k, Some(0.0));
        assert_eq!(c.real_chiral, Some(0.0));
        assert_eq!(c.imag_chiral, Some(0.0));
        assert!(OpticalDefaults::Unset.constants().is_unset());
        assert_eq!(OpticalDefaults::default(), OpticalDefaults::Unset);
    }
}
