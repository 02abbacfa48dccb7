use crate::model::bounds::SimBox;
use crate::model::error::StructureError;
use crate::model::structure::MolecularStructure;

impl MolecularStructure {
    /// Appends a reflected copy of all atoms across the body's maximum
    /// extent along the z axis, `separation` apart, and grows the box's
    /// z bounds to fit both halves.
    ///
    /// Intended to prepare facing-monolayer systems for shearing. Only the
    /// z axis is supported; other axes return
    /// [`StructureError::UnsupportedMirrorAxis`]. The copy duplicates
    /// positions and type tags only; bonded topology, masses, charges
    /// and velocities are *not* duplicated, a known limitation.
    pub fn mirror(
        &mut self,
        bounds: &mut SimBox,
        axis: usize,
        separation: f64,
    ) -> Result<(), StructureError> {
        if axis != 2 {
            return Err(StructureError::UnsupportedMirrorAxis(axis));
        }
        if self.positions.is_empty() {
            return Err(StructureError::Empty);
        }

        let z_max = self
            .positions
            .iter()
            .map(|p| p[2])
            .fold(f64::NEG_INFINITY, f64::max);
        let z_min = self
            .positions
            .iter()
            .map(|p| p[2])
            .fold(f64::INFINITY, f64::min);

        bounds.set_axis(2, z_min - 1.0, z_max + (z_max - z_min) + separation + 1.0);

        let mirrored_types = self.types.clone();
        self.types.extend(mirrored_types);

        let reflected: Vec<[f64; 3]> = self
            .positions
            .iter()
            .map(|p| {
                [
                    bounds.mins[0] + (bounds.maxs[0] - p[0]).abs(),
                    bounds.mins[1] + (bounds.maxs[1] - p[1]).abs(),
                    z_max + separation + (z_max - p[2]).abs(),
                ]
            })
            .collect();
        self.positions.extend(reflected);

        Ok(())
    }
}
