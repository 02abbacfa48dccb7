//! In-place geometry transforms on [`MolecularStructure`].
//!
//! - [`transform`] – translation and sequential axis rotations.
//! - [`periodic`] – wrap/unwrap across periodic boundaries.
//! - [`mirror`] – reflected duplication for slab-on-slab setups.
//!
//! Transforms never fail on valid input, but the periodic operations carry
//! documented unchecked preconditions and produce quietly wrong geometry
//! when those are violated; see the individual method docs.
//!
//! [`MolecularStructure`]: crate::MolecularStructure

mod mirror;
mod periodic;
mod transform;
