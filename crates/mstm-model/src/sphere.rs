//! A single sphere of the MSTM model.
//!
//! The geometric fields are required; the optical fields are optional and
//! start out unset unless a default policy says otherwise. `x`, `y`, `z` and
//! `r` must be expressed in the same length unit. Nothing is validated at
//! construction; see [`validate`](crate::validate) for opt-in checks.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::optics::{OpticalConstants, OpticalDefaults};

/// Shared handle to a sphere. Groups hold these, so a sphere may belong to
/// several groups and edits through any handle are seen by all of them.
///
/// Not thread-safe: callers sharing spheres across threads must provide
/// their own synchronisation.
pub type SharedSphere = Rc<RefCell<Sphere>>;

/// Physical and optical description of one sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// x coordinate of the centre.
    pub x: f64,
    /// y coordinate of the centre.
    pub y: f64,
    /// z coordinate of the centre.
    pub z: f64,
    /// Radius.
    pub r: f64,
    /// Real part of the refractive index.
    #[serde(default)]
    pub n: Option<f64>,
    /// Extinction coefficient.
    #[serde(default)]
    pub k: Option<f64>,
    /// Real part of the chirality factor beta.
    #[serde(default)]
    pub real_chiral: Option<f64>,
    /// Imaginary part of the chirality factor beta.
    #[serde(default)]
    pub imag_chiral: Option<f64>,
    /// Name of a file holding a precomputed T-matrix for this sphere.
    /// Never opened by this crate.
    #[serde(default)]
    pub tmatrix_file: Option<String>,
}

impl Sphere {
    /// Create a sphere with every optical field unset.
    pub fn new(x: f64, y: f64, z: f64, r: f64) -> Self {
        Self {
            x,
            y,
            z,
            r,
            n: None,
            k: None,
            real_chiral: None,
            imag_chiral: None,
            tmatrix_file: None,
        }
    }

    /// Create a sphere with the given optical constants and T-matrix file.
    /// Unset fields in `optics` stay unset on the sphere.
    pub fn with_optics(
        x: f64,
        y: f64,
        z: f64,
        r: f64,
        optics: OpticalConstants,
        tmatrix_file: Option<String>,
    ) -> Self {
        let mut sphere = Self::new(x, y, z, r);
        sphere.set_optical_constants(&optics);
        sphere.tmatrix_file = tmatrix_file;
        sphere
    }

    /// Create a sphere whose optical fields come from a default policy.
    pub fn with_defaults(x: f64, y: f64, z: f64, r: f64, policy: OpticalDefaults) -> Self {
        Self::with_optics(x, y, z, r, policy.constants(), None)
    }

    /// Wrap this sphere in a [`SharedSphere`] handle.
    pub fn into_shared(self) -> SharedSphere {
        Rc::new(RefCell::new(self))
    }

    /// Centre as `[x, y, z]`.
    pub fn centre(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    fn centre_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance from the centre of this sphere to `(x1, y1, z1)`.
    pub fn distance_from(&self, x1: f64, y1: f64, z1: f64) -> f64 {
        (self.centre_vector() - Vector3::new(x1, y1, z1)).norm()
    }

    /// Distance between the centres of two spheres.
    pub fn distance_to(&self, other: &Sphere) -> f64 {
        self.distance_from(other.x, other.y, other.z)
    }

    /// Geometric (projected disk) cross-section $\pi r^2$.
    pub fn geometric_cross_section(&self) -> f64 {
        PI * self.r * self.r
    }

    /// The four optical fields of this sphere.
    pub fn optical_constants(&self) -> OpticalConstants {
        OpticalConstants {
            n: self.n,
            k: self.k,
            real_chiral: self.real_chiral,
            imag_chiral: self.imag_chiral,
        }
    }

    /// Overwrite each optical field that is set in `optics`; unset fields
    /// leave the sphere's value untouched.
    pub fn set_optical_constants(&mut self, optics: &OpticalConstants) {
        let merged = optics.overlay(&self.optical_constants());
        self.n = merged.n;
        self.k = merged.k;
        self.real_chiral = merged.real_chiral;
        self.imag_chiral = merged.imag_chiral;
    }
}
