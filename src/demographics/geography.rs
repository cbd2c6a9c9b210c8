//! Region and department table.

use crate::algorithm::random::RandomSource;
use crate::models::Residence;

/// Region with its departments
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub departments: &'static [&'static str],
}

/// Regions recipients are drawn from.
///
/// Only Île-de-France is active; other regions can be appended here.
pub const REGIONS: &[Region] = &[Region {
    name: "Île-de-France",
    departments: &[
        "Paris",
        "Seine-et-Marne",
        "Yvelines",
        "Essonne",
        "Hauts-de-Seine",
        "Seine-Saint-Denis",
        "Val-de-Marne",
        "Val-d'Oise",
    ],
}];

/// Draw a region uniformly, then a department uniformly within it.
///
/// Always consumes two draws, even when a list has a single entry.
pub fn sample_residence<R: RandomSource + ?Sized>(rng: &mut R) -> Residence {
    let region = &REGIONS[rng.index(REGIONS.len())];
    let department = region.departments[rng.index(region.departments.len())];
    Residence {
        region: region.name.to_string(),
        department: department.to_string(),
    }
}
