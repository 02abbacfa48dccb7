use std::collections::{HashMap, HashSet};

use super::error::StructureError;
use super::forcefield::ForceField;
use super::topology::{Angle, Bond, Dihedral, Improper};
use super::types::AtomType;

/// A molecular building block: atoms, optional bonded topology and
/// force-field tables.
///
/// Per-atom attributes are parallel, index-aligned vectors; every mutation
/// keeps them the same length. `velocities` may be empty when no input
/// supplied them. Topology tuples reference atoms 1-indexed.
///
/// The cached `com` and `r_gyr_sq` scalars are valid only immediately
/// after the corresponding calculation; geometry mutations do not refresh
/// them.
///
/// `Clone` gives an independently-mutable deep copy, which per-frame
/// analysis relies on: clone the prototype, swap in frame coordinates,
/// transform the copy.
#[derive(Debug, Clone, Default)]
pub struct MolecularStructure {
    pub name: Option<String>,
    pub mol_id: u32,

    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
    pub types: Vec<AtomType>,
    pub masses: Vec<f64>,
    pub charges: Vec<f64>,

    pub resids: Vec<u32>,
    pub resnames: Vec<String>,

    pub bonds: Vec<Bond>,
    pub angles: Vec<Angle>,
    pub dihedrals: Vec<Dihedral>,
    pub impropers: Vec<Improper>,

    pub forcefield: ForceField,

    pub com: [f64; 3],
    pub r_gyr_sq: f64,
}

impl MolecularStructure {
    /// Empty structure; populate it with loaders or [`push_atom`](Self::push_atom).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn angle_count(&self) -> usize {
        self.angles.len()
    }

    #[inline]
    pub fn dihedral_count(&self) -> usize {
        self.dihedrals.len()
    }

    #[inline]
    pub fn improper_count(&self) -> usize {
        self.impropers.len()
    }

    #[inline]
    pub fn has_velocities(&self) -> bool {
        !self.velocities.is_empty()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Appends one atom with all of its per-atom attributes.
    ///
    /// All attributes are required so the parallel arrays stay aligned.
    pub fn push_atom(&mut self, position: [f64; 3], atom_type: AtomType, mass: f64, charge: f64) {
        self.positions.push(position);
        self.types.push(atom_type);
        self.masses.push(mass);
        self.charges.push(charge);
    }

    /// Replaces the coordinate array wholesale.
    ///
    /// Used by per-frame analysis to drop a trajectory frame's coordinates
    /// into a cloned prototype. The caller is responsible for handing in
    /// one coordinate per atom.
    pub fn set_positions(&mut self, positions: Vec<[f64; 3]>) {
        self.positions = positions;
    }

    /// Removes the atoms at the given zero-based indices and renumbers the
    /// remaining topology references.
    ///
    /// Deleted atoms must not appear in any bond/angle/dihedral/improper
    /// tuple; deleting a bonded atom has no image in the new numbering and
    /// surfaces as [`StructureError::DanglingReference`], leaving the
    /// topology partially rewritten. Residue arrays are not touched.
    pub fn delete_by_index(&mut self, ids: &[usize]) -> Result<(), StructureError> {
        let deleted: HashSet<usize> = ids.iter().copied().collect();

        // Renumbering map over 1-indexed atom numbers; deleted atoms have
        // no entry.
        let mut atom_map: HashMap<usize, usize> = HashMap::new();
        let mut next = 1usize;
        for old in 1..=self.positions.len() {
            if !deleted.contains(&(old - 1)) {
                atom_map.insert(old, next);
                next += 1;
            }
        }
        let remap = |atom: usize| {
            atom_map
                .get(&atom)
                .copied()
                .ok_or(StructureError::DanglingReference { atom })
        };

        for bond in &mut self.bonds {
            bond.i = remap(bond.i)?;
            bond.j = remap(bond.j)?;
        }
        for angle in &mut self.angles {
            angle.i = remap(angle.i)?;
            angle.j = remap(angle.j)?;
            angle.k = remap(angle.k)?;
        }
        for dihedral in &mut self.dihedrals {
            dihedral.i = remap(dihedral.i)?;
            dihedral.j = remap(dihedral.j)?;
            dihedral.k = remap(dihedral.k)?;
            dihedral.l = remap(dihedral.l)?;
        }
        for improper in &mut self.impropers {
            improper.i = remap(improper.i)?;
            improper.j = remap(improper.j)?;
            improper.k = remap(improper.k)?;
            improper.l = remap(improper.l)?;
        }

        retain_indexed(&mut self.positions, &deleted);
        retain_indexed(&mut self.types, &deleted);
        retain_indexed(&mut self.masses, &deleted);
        retain_indexed(&mut self.charges, &deleted);
        if self.has_velocities() {
            retain_indexed(&mut self.velocities, &deleted);
        }
        Ok(())
    }

    /// Drops every atom belonging to the given residue id.
    ///
    /// Filters the residue, type, position and velocity arrays only;
    /// topology and mass/charge arrays are not touched, so this is suitable
    /// for un-bonded residues (solvent, ions) read from a GRO snapshot.
    pub fn delete_residue(&mut self, resid: u32) {
        debug_assert_eq!(self.resids.len(), self.positions.len());
        debug_assert_eq!(self.resids.len(), self.resnames.len());

        let keep: Vec<bool> = self.resids.iter().map(|&r| r != resid).collect();
        filter_by_mask(&mut self.resnames, &keep);
        filter_by_mask(&mut self.types, &keep);
        filter_by_mask(&mut self.positions, &keep);
        filter_by_mask(&mut self.velocities, &keep);
        filter_by_mask(&mut self.resids, &keep);
    }
}

fn retain_indexed<T>(values: &mut Vec<T>, deleted: &HashSet<usize>) {
    let mut idx = 0;
    values.retain(|_| {
        let keep = !deleted.contains(&idx);
        idx += 1;
        keep
    });
}

fn filter_by_mask<T>(values: &mut Vec<T>, keep: &[bool]) {
    let mut idx = 0;
    values.retain(|_| {
        let kept = keep.get(idx).copied().unwrap_or(true);
        idx += 1;
        kept
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_unbonded_atoms() -> MolecularStructure {
        let mut block = MolecularStructure::new();
        for i in 0..5 {
            block.push_atom(
                [i as f64, 10.0 * i as f64, 0.0],
                AtomType::Index(i as u32),
                1.0,
                0.0,
            );
        }
        block
    }

    #[test]
    fn push_atom_keeps_arrays_aligned() {
        let block = five_unbonded_atoms();
        assert_eq!(block.atom_count(), 5);
        assert_eq!(block.types.len(), 5);
        assert_eq!(block.masses.len(), 5);
        assert_eq!(block.charges.len(), 5);
    }

    #[test]
    fn delete_by_index_keeps_survivors_in_order() {
        let mut block = five_unbonded_atoms();
        block.delete_by_index(&[1, 3]).unwrap();

        assert_eq!(block.atom_count(), 3);
        assert_eq!(block.positions[0], [0.0, 0.0, 0.0]);
        assert_eq!(block.positions[1], [2.0, 20.0, 0.0]);
        assert_eq!(block.positions[2], [4.0, 40.0, 0.0]);
        assert_eq!(block.types, vec![
            AtomType::Index(0),
            AtomType::Index(2),
            AtomType::Index(4),
        ]);
    }

    #[test]
    fn delete_by_index_renumbers_surviving_topology() {
        let mut block = five_unbonded_atoms();
        // Bond between atoms 3 and 5 (1-indexed); atom 2 is deleted.
        block.bonds.push(Bond::new(1, 3, 5));
        block.delete_by_index(&[1]).unwrap();

        assert_eq!(block.bonds[0].i, 2);
        assert_eq!(block.bonds[0].j, 4);
    }

    #[test]
    fn delete_by_index_errors_on_bonded_atom() {
        let mut block = five_unbonded_atoms();
        block.bonds.push(Bond::new(1, 1, 2));
        let err = block.delete_by_index(&[0]).unwrap_err();
        assert!(matches!(err, StructureError::DanglingReference { atom: 1 }));
    }

    #[test]
    fn delete_by_index_filters_velocities_when_present() {
        let mut block = five_unbonded_atoms();
        block.velocities = vec![[0.1, 0.0, 0.0]; 5];
        block.delete_by_index(&[0, 4]).unwrap();
        assert_eq!(block.velocities.len(), 3);
    }

    #[test]
    fn delete_residue_filters_residue_arrays_only() {
        let mut block = five_unbonded_atoms();
        block.resids = vec![1, 1, 2, 2, 3];
        block.resnames = vec!["SOL".into(), "SOL".into(), "NA".into(), "NA".into(), "CL".into()];
        block.delete_residue(2);

        assert_eq!(block.atom_count(), 3);
        assert_eq!(block.resids, vec![1, 1, 3]);
        assert_eq!(block.resnames, vec!["SOL", "SOL", "CL"]);
        // Masses and charges are deliberately untouched.
        assert_eq!(block.masses.len(), 5);
        assert_eq!(block.charges.len(), 5);
    }

    #[test]
    fn clone_is_independent() {
        let original = five_unbonded_atoms();
        let mut copy = original.clone();
        copy.positions[0] = [9.0, 9.0, 9.0];
        assert_eq!(original.positions[0], [0.0, 0.0, 0.0]);
    }
}
