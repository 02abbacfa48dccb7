//! Derived physical properties: center of mass, moment-of-inertia tensor,
//! radius of gyration.
//!
//! Whole-structure results are cached on the structure (`com`,
//! `r_gyr_sq`) and also returned; subset variants only return. Cached
//! values are valid until the next geometry mutation, which does not
//! refresh them.

use nalgebra::Matrix3;

use crate::model::error::StructureError;
use crate::model::structure::MolecularStructure;

impl MolecularStructure {
    /// Mass-weighted mean position over all atoms; cached on `self.com`.
    pub fn calc_com(&mut self) -> Result<[f64; 3], StructureError> {
        self.check_masses()?;
        let com = weighted_mean(
            self.positions.iter().copied(),
            self.masses.iter().copied(),
        );
        self.com = com;
        Ok(com)
    }

    /// Mass-weighted mean position over a subset of atom indices.
    ///
    /// Returned, not cached. Out-of-range indices panic, as any direct
    /// slice access would.
    pub fn com_of(&self, atoms: &[usize]) -> Result<[f64; 3], StructureError> {
        self.check_masses()?;
        if atoms.is_empty() {
            return Err(StructureError::Empty);
        }
        Ok(weighted_mean(
            atoms.iter().map(|&i| self.positions[i]),
            atoms.iter().map(|&i| self.masses[i]),
        ))
    }

    /// Moment-of-inertia tensor of the whole structure about its center
    /// of mass. Recomputes and caches the center of mass as a side effect.
    pub fn inertia_tensor(&mut self) -> Result<Matrix3<f64>, StructureError> {
        let com = self.calc_com()?;
        Ok(inertia_about(
            self.positions.iter().copied(),
            self.masses.iter().copied(),
            com,
        ))
    }

    /// Moment-of-inertia tensor of a subset of atoms about the subset's
    /// own center of mass. Useful for per-segment directors, e.g. each
    /// tail of a two-tailed lipid.
    pub fn inertia_tensor_of(&self, atoms: &[usize]) -> Result<Matrix3<f64>, StructureError> {
        let com = self.com_of(atoms)?;
        Ok(inertia_about(
            atoms.iter().map(|&i| self.positions[i]),
            atoms.iter().map(|&i| self.masses[i]),
            com,
        ))
    }

    /// Squared radius of gyration: mean squared displacement of all atom
    /// positions from their unweighted centroid. Cached on
    /// `self.r_gyr_sq`.
    pub fn calc_r_gyr_sq(&mut self) -> Result<f64, StructureError> {
        if self.positions.is_empty() {
            return Err(StructureError::Empty);
        }
        let n = self.positions.len() as f64;

        let mut centroid = [0.0f64; 3];
        for pos in &self.positions {
            for k in 0..3 {
                centroid[k] += pos[k];
            }
        }
        for c in &mut centroid {
            *c /= n;
        }

        let mut sum_sq = 0.0;
        for pos in &self.positions {
            for k in 0..3 {
                let d = pos[k] - centroid[k];
                sum_sq += d * d;
            }
        }
        self.r_gyr_sq = sum_sq / n;
        Ok(self.r_gyr_sq)
    }

    fn check_masses(&self) -> Result<(), StructureError> {
        if self.masses.len() != self.positions.len() {
            return Err(StructureError::length_mismatch(
                "masses",
                self.positions.len(),
                self.masses.len(),
            ));
        }
        if self.positions.is_empty() {
            return Err(StructureError::Empty);
        }
        Ok(())
    }
}

fn weighted_mean(
    positions: impl Iterator<Item = [f64; 3]>,
    masses: impl Iterator<Item = f64>,
) -> [f64; 3] {
    let mut acc = [0.0f64; 3];
    let mut total_mass = 0.0;
    for (pos, mass) in positions.zip(masses) {
        for k in 0..3 {
            acc[k] += pos[k] * mass;
        }
        total_mass += mass;
    }
    for a in &mut acc {
        *a /= total_mass;
    }
    acc
}

fn inertia_about(
    positions: impl Iterator<Item = [f64; 3]>,
    masses: impl Iterator<Item = f64>,
    com: [f64; 3],
) -> Matrix3<f64> {
    let mut tensor = Matrix3::zeros();
    for (pos, mass) in positions.zip(masses) {
        let r = [pos[0] - com[0], pos[1] - com[1], pos[2] - com[2]];
        tensor[(0, 0)] += mass * (r[1] * r[1] + r[2] * r[2]);
        tensor[(1, 1)] += mass * (r[0] * r[0] + r[2] * r[2]);
        tensor[(2, 2)] += mass * (r[0] * r[0] + r[1] * r[1]);
        tensor[(0, 1)] -= mass * r[0] * r[1];
        tensor[(0, 2)] -= mass * r[0] * r[2];
        tensor[(1, 2)] -= mass * r[1] * r[2];
    }
    tensor[(1, 0)] = tensor[(0, 1)];
    tensor[(2, 0)] = tensor[(0, 2)];
    tensor[(2, 1)] = tensor[(1, 2)];
    tensor
}
