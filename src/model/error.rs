use thiserror::Error;

/// Errors raised by structure mutations and property calculations.
///
/// Consistency violations (mismatched parallel arrays, empty structures)
/// fail fast; the lookup failure [`DanglingReference`](StructureError::DanglingReference)
/// signals that a documented precondition of
/// [`delete_by_index`](crate::MolecularStructure::delete_by_index) was broken.
#[derive(Debug, Error)]
pub enum StructureError {
    /// Parallel per-atom arrays disagree in length.
    #[error("atom arrays out of step: {what} has {actual} entries, positions have {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The operation needs at least one atom.
    #[error("structure contains no atoms")]
    Empty,

    /// A topology tuple still references an atom that was deleted.
    ///
    /// Deleting bonded atoms is unsupported; the renumbering map has no
    /// image for the deleted atom and the rewrite stops here.
    #[error("topology references deleted atom {atom}")]
    DanglingReference { atom: usize },

    /// `mirror` only reflects across the z axis.
    #[error("mirror supports only the z axis (axis index 2), got axis {0}")]
    UnsupportedMirrorAxis(usize),
}

impl StructureError {
    pub fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            actual,
        }
    }
}
