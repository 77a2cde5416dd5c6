//! Opt-in physical plausibility checks.
//!
//! Construction accepts any values; these functions are for callers that
//! want to flag spheres an MSTM run would reject or misinterpret.

use thiserror::Error;

use crate::group::SphereGroup;
use crate::sphere::{SharedSphere, Sphere};

/// A reason a sphere is not physically plausible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Geometry is not finite: centre ({x}, {y}, {z}), radius {r}")]
    NonFiniteGeometry { x: f64, y: f64, z: f64, r: f64 },

    #[error("Radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("Refractive index must be positive, got {0}")]
    NonPositiveIndex(f64),

    #[error("Extinction coefficient must be non-negative, got {0}")]
    NegativeExtinction(f64),

    #[error("T-matrix file name is empty")]
    EmptyTmatrixFile,
}

/// Check a single sphere, returning the first problem found.
pub fn validate_sphere(sphere: &Sphere) -> Result<(), ValidationError> {
    let Sphere { x, y, z, r, .. } = *sphere;
    if ![x, y, z, r].iter().all(|v| v.is_finite()) {
        return Err(ValidationError::NonFiniteGeometry { x, y, z, r });
    }
    if r <= 0.0 {
        return Err(ValidationError::NonPositiveRadius(r));
    }
    if let Some(n) = sphere.n {
        if n <= 0.0 {
            return Err(ValidationError::NonPositiveIndex(n));
        }
    }
    if let Some(k) = sphere.k {
        if k < 0.0 {
            return Err(ValidationError::NegativeExtinction(k));
        }
    }
    if matches!(sphere.tmatrix_file.as_deref(), Some(f) if f.trim().is_empty()) {
        return Err(ValidationError::EmptyTmatrixFile);
    }
    Ok(())
}

/// Check a list of shared spheres. Returns `(index, error)` pairs in list
/// order; empty when every sphere is plausible.
pub fn validate_spheres(spheres: &[SharedSphere]) -> Vec<(usize, ValidationError)> {
    spheres
        .iter()
        .enumerate()
        .filter_map(|(i, s)| validate_sphere(&s.borrow()).err().map(|e| (i, e)))
        .collect()
}

/// Check every member of a group, indexed by member position.
pub fn validate_group(group: &SphereGroup) -> Vec<(usize, ValidationError)> {
    validate_spheres(group.spheres())
}
