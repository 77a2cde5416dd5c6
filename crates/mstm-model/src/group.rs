//! Named groups of spheres sharing optical properties.
//!
//! A group holds [`SharedSphere`] handles in insertion order. Its optical
//! overrides are broadcast to the members once, when the group is built;
//! spheres appended afterwards keep their own values until
//! [`SphereGroup::apply_optical_constants`] or
//! [`SphereGroup::reapply_group_constants`] is called again.

use log::debug;

use crate::optics::OpticalConstants;
use crate::sphere::SharedSphere;

/// An ordered collection of spheres with optional group-level optics.
#[derive(Debug, Clone, Default)]
pub struct SphereGroup {
    /// Member spheres, in insertion order.
    pub sphere_list: Vec<SharedSphere>,
    /// Short display name.
    pub short_name: Option<String>,
    /// Group override for the refractive index.
    pub group_n: Option<f64>,
    /// Group override for the extinction coefficient.
    pub group_k: Option<f64>,
    /// Group override for the real part of the chirality factor.
    pub group_real_chiral: Option<f64>,
    /// Group override for the imaginary part of the chirality factor.
    pub group_imag_chiral: Option<f64>,
    /// T-matrix file shared by the group.
    pub tmatrix_file: Option<String>,
}

impl SphereGroup {
    /// Build a group from `sphere_list` and store `group_optics` on it.
    ///
    /// If any field of `group_optics` is set, it is applied to every sphere
    /// in `sphere_list` before returning.
    pub fn new(sphere_list: Vec<SharedSphere>, group_optics: OpticalConstants) -> Self {
        let group = Self {
            sphere_list,
            short_name: None,
            group_n: group_optics.n,
            group_k: group_optics.k,
            group_real_chiral: group_optics.real_chiral,
            group_imag_chiral: group_optics.imag_chiral,
            tmatrix_file: None,
        };
        if !group_optics.is_unset() {
            group.apply_optical_constants(&group_optics);
        }
        group
    }

    /// Set the short name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.short_name = Some(name.into());
        self
    }

    /// Set the group T-matrix file.
    pub fn with_tmatrix_file(mut self, file: impl Into<String>) -> Self {
        self.tmatrix_file = Some(file.into());
        self
    }

    /// The stored group overrides.
    pub fn group_optics(&self) -> OpticalConstants {
        OpticalConstants {
            n: self.group_n,
            k: self.group_k,
            real_chiral: self.group_real_chiral,
            imag_chiral: self.group_imag_chiral,
        }
    }

    /// Append a sphere. The group's stored overrides are not applied to it.
    pub fn add_sphere(&mut self, sphere: SharedSphere) {
        self.sphere_list.push(sphere);
    }

    /// Overwrite, on every current member, each optical field that is set in
    /// `optics`. Unset fields are left untouched on every sphere.
    ///
    /// # Panics
    /// If a member sphere is already borrowed elsewhere.
    pub fn apply_optical_constants(&self, optics: &OpticalConstants) {
        if optics.is_unset() || self.sphere_list.is_empty() {
            return;
        }
        debug!("Applying {:?} to {} sphere(s)", optics, self.sphere_list.len());
        for sphere in &self.sphere_list {
            sphere.borrow_mut().set_optical_constants(optics);
        }
    }

    /// Broadcast the stored group overrides to every current member.
    pub fn reapply_group_constants(&self) {
        self.apply_optical_constants(&self.group_optics());
    }

    /// Ordered view of the members.
    pub fn spheres(&self) -> &[SharedSphere] {
        &self.sphere_list
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.sphere_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sphere_list.is_empty()
    }

    /// Sum of the members' geometric cross-sections.
    pub fn total_geometric_cross_section(&self) -> f64 {
        self.sphere_list
            .iter()
            .map(|s| s.borrow().geometric_cross_section())
            .sum()
    }
}
