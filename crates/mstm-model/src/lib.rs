//! # MSTM Model
//!
//! Data model for the inputs of a multi-sphere T-matrix (MSTM) scattering
//! run: a population of spheres and named groups of spheres that share
//! optical properties.
//!
//! ## Modules
//!
//! - [`sphere`] — A single sphere: centre, radius, optional optics.
//! - [`group`] — Ordered groups of shared spheres with a one-time
//!   broadcast of group-level optical constants.
//! - [`optics`] — Optional optical constants and the default policy for
//!   omitted values.
//! - [`validate`] — Opt-in plausibility checks.
//!
//! Spheres are shared between groups through [`SharedSphere`]
//! (`Rc<RefCell<Sphere>>`); nothing here is thread-safe.

pub mod group;
pub mod optics;
pub mod sphere;
pub mod validate;

pub use group::SphereGroup;
pub use optics::{OpticalConstants, OpticalDefaults};
pub use sphere::{SharedSphere, Sphere};
pub use validate::{validate_group, validate_sphere, validate_spheres, ValidationError};
