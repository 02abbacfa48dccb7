use log::warn;

use crate::model::bounds::SimBox;
use crate::model::error::StructureError;
use crate::model::structure::MolecularStructure;

impl MolecularStructure {
    /// Reconstructs a body split across periodic boundaries.
    ///
    /// Atom 0 is the fixed anchor; every other atom is shifted by whole
    /// box lengths so its offset from the anchor becomes a minimum image
    /// (rounding ties away from zero). This is a minimum-image correction
    /// relative to one atom, not a general unwrap: it assumes the body's
    /// true extent is under half the box length in every enabled
    /// dimension, and quietly produces wrong geometry when that does not
    /// hold. A shift of more than one box length is logged at warn level
    /// as a strong hint the assumption was violated; behavior is
    /// unchanged.
    pub fn unwrap(&mut self, bounds: &SimBox, dims: [bool; 3]) {
        if self.positions.is_empty() {
            return;
        }
        let anchor = self.positions[0];
        for pos in self.positions.iter_mut().skip(1) {
            for k in 0..3 {
                if !dims[k] {
                    continue;
                }
                let length = bounds.length(k);
                let dr = pos[k] - anchor[k];
                let images = (dr / length).round();
                if images.abs() > 1.0 {
                    warn!(
                        "unwrap shifted an atom by {} box lengths along axis {k}; \
                         body likely spans more than half the box",
                        images.abs()
                    );
                }
                pos[k] -= length * images;
            }
        }
    }

    /// Wraps every atom independently into `[min, max)` per dimension.
    ///
    /// Breaks molecular connectivity across periodic images; meant for
    /// independent point particles, or to be followed by [`unwrap`](Self::unwrap)
    /// for bonded bodies.
    pub fn wrap(&mut self, bounds: &SimBox) {
        for pos in &mut self.positions {
            for k in 0..3 {
                let length = bounds.length(k);
                if pos[k] < bounds.mins[k] {
                    let shifts = ((bounds.mins[k] - pos[k]) / length).floor() + 1.0;
                    pos[k] += length * shifts;
                } else if pos[k] > bounds.maxs[k] {
                    let shifts = ((pos[k] - bounds.maxs[k]) / length).floor() + 1.0;
                    pos[k] -= length * shifts;
                }
            }
        }
    }

    /// Wraps the structure rigidly: shifts all atoms uniformly by whole
    /// box lengths until the recomputed center of mass lies inside the
    /// box, leaving internal geometry intact.
    pub fn wrap_com(&mut self, bounds: &SimBox) -> Result<(), StructureError> {
        self.calc_com()?;
        for k in 0..3 {
            while self.com[k] < bounds.mins[k] {
                let length = bounds.length(k);
                for pos in &mut self.positions {
                    pos[k] += length;
                }
                self.calc_com()?;
            }
            while self.com[k] > bounds.maxs[k] {
                let length = bounds.length(k);
                for pos in &mut self.positions {
                    pos[k] -= length;
                }
                self.calc_com()?;
            }
        }
        Ok(())
    }
}
