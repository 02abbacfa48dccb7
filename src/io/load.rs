//! Path-taking loader methods on [`MolecularStructure`].
//!
//! Each loader reads one resource and overwrites the attribute(s) it
//! targets; nothing is merged. Counts are derived from array lengths, so
//! no bookkeeping follows an overwrite.

use std::path::Path;

use super::{Error, PrototypeOptions, column, coord, gro, open, params, xml};
use crate::model::bounds::SimBox;
use crate::model::structure::MolecularStructure;

impl MolecularStructure {
    /// Builds a structure from an XML prototype file.
    pub fn from_prototype(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_prototype_with(path, &PrototypeOptions::default())
    }

    pub fn from_prototype_with(
        path: impl AsRef<Path>,
        options: &PrototypeOptions,
    ) -> Result<Self, Error> {
        let mut block = Self::new();
        block.load_prototype_with(path, options)?;
        Ok(block)
    }

    /// Overwrites masses from a single-column table.
    pub fn load_masses(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.masses = column::read_reals(open(path)?)?;
        Ok(())
    }

    /// Overwrites charges from a single-column table.
    pub fn load_charges(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.charges = column::read_reals(open(path)?)?;
        Ok(())
    }

    pub fn load_bonds(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.bonds = column::read_bonds(open(path)?)?;
        Ok(())
    }

    pub fn load_angles(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.angles = column::read_angles(open(path)?)?;
        Ok(())
    }

    pub fn load_dihedrals(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.dihedrals = column::read_dihedrals(open(path)?)?;
        Ok(())
    }

    pub fn load_impropers(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.impropers = column::read_impropers(open(path)?)?;
        Ok(())
    }

    /// Overwrites types and positions from a `type x y z` table.
    pub fn load_coords(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let (types, positions) = coord::read_coords(open(path)?)?;
        self.types = types;
        self.positions = positions;
        Ok(())
    }

    /// Overwrites types and positions from a classic XYZ file.
    pub fn load_xyz(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let (types, positions) = coord::read_xyz(open(path)?)?;
        self.types = types;
        self.positions = positions;
        Ok(())
    }

    /// Overwrites residue, type, position and velocity arrays from a GRO
    /// snapshot and returns the box it declares.
    pub fn load_gro(&mut self, path: impl AsRef<Path>) -> Result<SimBox, Error> {
        let snapshot = gro::read(open(path)?)?;
        self.resids = snapshot.resids;
        self.resnames = snapshot.resnames;
        self.types = snapshot.types;
        self.positions = snapshot.positions;
        self.velocities = snapshot.velocities;
        Ok(snapshot.bounds)
    }

    pub fn load_pair_coeffs(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.forcefield.pair = params::read_pair_coeffs(open(path)?)?;
        Ok(())
    }

    pub fn load_bond_coeffs(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.forcefield.bond = params::read_bond_coeffs(open(path)?)?;
        Ok(())
    }

    pub fn load_angle_coeffs(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.forcefield.angle = params::read_angle_coeffs(open(path)?)?;
        Ok(())
    }

    pub fn load_dihedral_coeffs(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.forcefield.dihedral = params::read_dihedral_coeffs(open(path)?)?;
        Ok(())
    }

    /// Loads an XML prototype, overwriting every attribute it carries.
    pub fn load_prototype(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.load_prototype_with(path, &PrototypeOptions::default())
    }

    /// Loads an XML prototype, honoring the skip flags.
    ///
    /// Charges are always applied; positions, types and masses only when
    /// not skipped. Optional topology sections are applied only when
    /// present in the document, so an absent `bond` element leaves a fresh
    /// structure with zero bonds rather than failing.
    pub fn load_prototype_with(
        &mut self,
        path: impl AsRef<Path>,
        options: &PrototypeOptions,
    ) -> Result<(), Error> {
        let proto = xml::read(open(path)?, options)?;

        self.charges = proto.charges;
        if !options.skip_masses {
            self.masses = proto.masses;
        }
        if !options.skip_coords {
            self.positions = proto.positions;
        }
        if !options.skip_types {
            self.types = proto.types;
        }
        if let Some(bonds) = proto.bonds {
            self.bonds = bonds;
        }
        if let Some(angles) = proto.angles {
            self.angles = angles;
        }
        if let Some(dihedrals) = proto.dihedrals {
            self.dihedrals = dihedrals;
        }
        if let Some(impropers) = proto.impropers {
            self.impropers = impropers;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("molblock-load-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loaders_overwrite_not_merge() {
        let path = write_temp("masses.txt", "1.0\n2.0\n");
        let mut block = MolecularStructure::new();
        block.masses = vec![9.0, 9.0, 9.0];
        block.load_masses(&path).unwrap();
        assert_eq!(block.masses, vec![1.0, 2.0]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn prototype_without_bonds_yields_zero_bonds() {
        let path = write_temp(
            "proto.xml",
            r#"<configuration>
<position num="1">
0 0 0
</position>
<mass num="1">
1.0
</mass>
<charge num="1">
0.0
</charge>
<type num="1">
A
</type>
</configuration>"#,
        );
        let block = MolecularStructure::from_prototype(&path).unwrap();
        assert_eq!(block.atom_count(), 1);
        assert_eq!(block.bond_count(), 0);
        assert_eq!(block.masses, vec![1.0]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn prototype_skip_flags_leave_attributes_alone() {
        let path = write_temp(
            "proto-skip.xml",
            r#"<configuration>
<position num="1">
5 5 5
</position>
<mass num="1">
1.0
</mass>
<charge num="1">
0.5
</charge>
<type num="1">
A
</type>
</configuration>"#,
        );
        let mut block = MolecularStructure::new();
        block.positions = vec![[1.0, 2.0, 3.0]];
        let options = PrototypeOptions {
            skip_coords: true,
            ..PrototypeOptions::default()
        };
        block.load_prototype_with(&path, &options).unwrap();
        assert_eq!(block.positions, vec![[1.0, 2.0, 3.0]]);
        assert_eq!(block.charges, vec![0.5]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn atom_arrays_align_after_coordinate_load() {
        let path = write_temp("coords.txt", "1 0.0 0.0 0.0\n2 1.0 0.0 0.0\n");
        let mut block = MolecularStructure::new();
        block.load_coords(&path).unwrap();
        assert_eq!(block.types.len(), block.positions.len());
        std::fs::remove_file(path).ok();
    }
}
