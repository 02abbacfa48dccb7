use nalgebra::{Matrix3, Vector3};

use crate::model::error::StructureError;
use crate::model::structure::MolecularStructure;

impl MolecularStructure {
    /// Adds a constant offset to every atom position.
    pub fn translate(&mut self, offset: [f64; 3]) {
        for pos in &mut self.positions {
            pos[0] += offset[0];
            pos[1] += offset[1];
            pos[2] += offset[2];
        }
    }

    /// Translates so the center of mass sits at the origin.
    pub fn shift_com_to_origin(&mut self) -> Result<(), StructureError> {
        let com = self.calc_com()?;
        self.translate([-com[0], -com[1], -com[2]]);
        self.calc_com()?;
        Ok(())
    }

    /// Translates so the given atom sits at the origin.
    pub fn shift_atom_to_origin(&mut self, atom: usize) {
        let pos = self.positions[atom];
        self.translate([-pos[0], -pos[1], -pos[2]]);
    }

    /// Rotates the whole coordinate set by elemental right-hand rotations
    /// applied in sequence: x axis, then y, then z, each only when its
    /// angle (radians) is non-zero.
    ///
    /// The sequential composition is load-bearing: the result differs from
    /// a single combined rotation, and the declared angle order matters.
    /// Callers needing order-independence must decompose into single-axis
    /// calls themselves.
    ///
    /// With `fixed_atom` the structure pivots about that atom's original
    /// position instead of the origin.
    pub fn rotate(&mut self, angles: [f64; 3], fixed_atom: Option<usize>) {
        let pivot = fixed_atom.map(|atom| self.positions[atom]);
        if let Some(p) = pivot {
            self.translate([-p[0], -p[1], -p[2]]);
        }

        if angles[0] != 0.0 {
            self.apply_rotation(&rotation_x(angles[0]));
        }
        if angles[1] != 0.0 {
            self.apply_rotation(&rotation_y(angles[1]));
        }
        if angles[2] != 0.0 {
            self.apply_rotation(&rotation_z(angles[2]));
        }

        if let Some(p) = pivot {
            self.translate(p);
        }
    }

    fn apply_rotation(&mut self, matrix: &Matrix3<f64>) {
        for pos in &mut self.positions {
            let rotated = matrix * Vector3::new(pos[0], pos[1], pos[2]);
            *pos = [rotated.x, rotated.y, rotated.z];
        }
    }
}

fn rotation_x(theta: f64) -> Matrix3<f64> {
    let (sin, cos) = theta.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, cos, -sin, //
        0.0, sin, cos,
    )
}

fn rotation_y(theta: f64) -> Matrix3<f64> {
    let (sin, cos) = theta.sin_cos();
    Matrix3::new(
        cos, 0.0, sin, //
        0.0, 1.0, 0.0, //
        -sin, 0.0, cos,
    )
}

fn rotation_z(theta: f64) -> Matrix3<f64> {
    let (sin, cos) = theta.sin_cos();
    Matrix3::new(
        cos, -sin, 0.0, //
        sin, cos, 0.0, //
        0.0, 0.0, 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::AtomType;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(&b).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    fn block_with(positions: &[[f64; 3]]) -> MolecularStructure {
        let mut block = MolecularStructure::new();
        for &pos in positions {
            block.push_atom(pos, AtomType::Index(1), 1.0, 0.0);
        }
        block
    }

    #[test]
    fn translate_round_trips_exactly() {
        let mut block = block_with(&[[0.1, -0.2, 0.3], [1.5, 2.5, -3.5]]);
        let original = block.positions.clone();
        block.translate([1.0, -2.0, 3.0]);
        block.translate([-1.0, 2.0, -3.0]);
        assert!(close(block.positions[0], original[0]));
        assert!(close(block.positions[1], original[1]));
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let mut block = block_with(&[[1.0, 0.0, 0.0]]);
        block.rotate([0.0, 0.0, FRAC_PI_2], None);
        assert!(close(block.positions[0], [0.0, 1.0, 0.0]));
    }

    #[test]
    fn rotate_sequence_is_x_then_y_then_z() {
        // (0,1,0) -> x-rot -> (0,0,1) -> y-rot -> (1,0,0) -> z-rot -> (0,1,0)
        let mut block = block_with(&[[0.0, 1.0, 0.0]]);
        block.rotate([FRAC_PI_2, FRAC_PI_2, FRAC_PI_2], None);
        assert!(close(block.positions[0], [0.0, 1.0, 0.0]));

        // The same angles applied z-first end elsewhere, so composition
        // order is observable.
        let mut other = block_with(&[[0.0, 1.0, 0.0]]);
        other.rotate([0.0, 0.0, FRAC_PI_2], None);
        other.rotate([0.0, FRAC_PI_2, 0.0], None);
        other.rotate([FRAC_PI_2, 0.0, 0.0], None);
        assert!(!close(other.positions[0], [0.0, 1.0, 0.0]));
    }

    #[test]
    fn rotate_pivots_about_fixed_atom() {
        let mut block = block_with(&[[1.0, 1.0, 0.0], [2.0, 1.0, 0.0]]);
        block.rotate([0.0, 0.0, FRAC_PI_2], Some(0));
        assert!(close(block.positions[0], [1.0, 1.0, 0.0]));
        assert!(close(block.positions[1], [1.0, 2.0, 0.0]));
    }

    #[test]
    fn fixed_atom_zero_is_honored() {
        let mut block = block_with(&[[3.0, 0.0, 0.0], [4.0, 0.0, 0.0]]);
        block.rotate([0.0, 0.0, FRAC_PI_2], Some(0));
        assert!(close(block.positions[0], [3.0, 0.0, 0.0]));
    }

    #[test]
    fn shift_atom_to_origin_moves_everything() {
        let mut block = block_with(&[[1.0, 2.0, 3.0], [2.0, 2.0, 3.0]]);
        block.shift_atom_to_origin(1);
        assert!(close(block.positions[1], [0.0, 0.0, 0.0]));
        assert!(close(block.positions[0], [-1.0, 0.0, 0.0]));
    }

    #[test]
    fn shift_com_to_origin_zeroes_the_cached_com() {
        let mut block = block_with(&[[1.0, 0.0, 0.0], [3.0, 0.0, 0.0]]);
        block.shift_com_to_origin().unwrap();
        assert!(close(block.com, [0.0, 0.0, 0.0]));
        assert!(close(block.positions[0], [-1.0, 0.0, 0.0]));
    }
}
