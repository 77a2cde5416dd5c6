//! Builds a sphere model from a parsed description and reports on it.

use std::rc::Rc;

use anyhow::{Context, Result};
use log::{debug, info};

use mstm_model::{
    validate_spheres, OpticalConstants, SharedSphere, Sphere, SphereGroup, ValidationError,
};

use crate::config::{GroupConfig, ModelConfig, SphereConfig};

/// A built model: every sphere, plus the groups that refer to them.
pub struct Model {
    pub spheres: Vec<SharedSphere>,
    pub groups: Vec<SphereGroup>,
}

/// Build spheres first, then groups in file order. Each group broadcasts its
/// overrides as it is built, so later groups win on shared spheres.
pub fn build_model(config: &ModelConfig) -> Result<Model> {
    let defaults = config.defaults.constants();
    let spheres: Vec<SharedSphere> = config
        .sphere
        .iter()
        .map(|s| build_sphere(s, &defaults).into_shared())
        .collect();
    info!("Built {} sphere(s) (defaults: {:?})", spheres.len(), config.defaults);

    let groups = config
        .group
        .iter()
        .enumerate()
        .map(|(gi, g)| build_group(gi, g, &spheres))
        .collect::<Result<Vec<_>>>()?;
    info!("Built {} group(s)", groups.len());

    Ok(Model { spheres, groups })
}

fn build_sphere(config: &SphereConfig, defaults: &OpticalConstants) -> Sphere {
    let [x, y, z] = config.centre;
    Sphere::with_optics(
        x,
        y,
        z,
        config.radius,
        config.optics().overlay(defaults),
        config.tmatrix_file.clone(),
    )
}

fn build_group(index: usize, config: &GroupConfig, spheres: &[SharedSphere]) -> Result<SphereGroup> {
    let label = config
        .name
        .clone()
        .unwrap_or_else(|| format!("#{}", index));

    let members = config
        .members
        .iter()
        .map(|&m| {
            spheres.get(m).map(Rc::clone).with_context(|| {
                format!(
                    "Group '{}': member index {} out of range ({} sphere(s) defined)",
                    label,
                    m,
                    spheres.len()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let optics = config.optics();
    debug!("Group '{}': {} member(s), overrides {:?}", label, members.len(), optics);

    let mut group = SphereGroup::new(members, optics);
    if let Some(name) = &config.name {
        group = group.with_name(name.clone());
    }
    if let Some(file) = &config.tmatrix_file {
        group = group.with_tmatrix_file(file.clone());
    }
    Ok(group)
}

/// Indices of spheres that belong to no group.
pub fn ungrouped(model: &Model) -> Vec<usize> {
    model
        .spheres
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            !model
                .groups
                .iter()
                .any(|g| g.spheres().iter().any(|m| Rc::ptr_eq(m, s)))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Run the plausibility checks on every sphere, in index order.
pub fn validate_model(model: &Model) -> Vec<(usize, ValidationError)> {
    validate_spheres(&model.spheres)
}

/// Print a per-group summary to stdout.
pub fn print_summary(model: &Model) {
    println!("Spheres: {}", model.spheres.len());
    println!("Groups:  {}", model.groups.len());
    for (gi, group) in model.groups.iter().enumerate() {
        let name = group.short_name.as_deref().unwrap_or("(unnamed)");
        println!();
        println!("  [{}] {}", gi, name);
        println!("    members:            {}", group.len());
        println!("    overrides:          {}", format_optics(&group.group_optics()));
        if let Some(file) = &group.tmatrix_file {
            println!("    T-matrix file:      {}", file);
        }
        println!(
            "    geom. cross-section: {:.4e}",
            group.total_geometric_cross_section()
        );
    }
    let loose = ungrouped(model);
    println!();
    println!("Ungrouped spheres: {}", loose.len());
}

fn format_optics(optics: &OpticalConstants) -> String {
    if optics.is_unset() {
        return "none".into();
    }
    let field = |name: &str, v: Option<f64>| v.map(|v| format!("{}={}", name, v));
    [
        field("n", optics.n),
        field("k", optics.k),
        field("real_chiral", optics.real_chiral),
        field("imag_chiral", optics.imag_chiral),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}
