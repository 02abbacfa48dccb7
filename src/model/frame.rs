use super::bounds::SimBox;
use super::types::AtomType;

/// One pre-parsed trajectory frame.
///
/// Trajectory and snapshot readers live outside this crate; they hand the
/// core a frame's coordinate array, type tags, step identifier and cell.
/// Per-frame analysis clones a prototype structure and feeds it the frame's
/// coordinates via [`set_positions`](crate::MolecularStructure::set_positions).
#[derive(Debug, Clone)]
pub struct Frame {
    pub step: u64,
    pub positions: Vec<[f64; 3]>,
    pub types: Vec<AtomType>,
    pub bounds: SimBox,
}
