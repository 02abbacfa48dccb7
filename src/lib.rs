//! A pure Rust library for modeling molecular building blocks: an atom set
//! with optional bonded topology and force-field parameters, loaded from
//! several on-disk formats, transformed in place, and reduced to derived
//! physical properties.
//!
//! # Features
//!
//! - **Data model** — Parallel per-atom arrays (positions, velocities,
//!   types, masses, charges), residue annotations, 1-indexed
//!   bond/angle/dihedral/improper topology, and typed force-field
//!   coefficient tables
//! - **Loaders** — Column tables, `type x y z` coordinate files, classic
//!   XYZ, GROMACS GRO snapshots, and XML prototype documents; each loader
//!   overwrites the attribute it targets
//! - **Geometry** — Translation, sequential axis rotation, periodic
//!   wrap/unwrap/rigid-wrap, and mirrored duplication
//! - **Properties** — Center of mass, moment-of-inertia tensor, radius of
//!   gyration, and nematic order analysis over ensembles of directors
//!
//! # Quick Start
//!
//! Build a rigid dumbbell, inspect it, and find its long axis:
//!
//! ```
//! use molblock::{AtomType, MolecularStructure, order};
//!
//! let mut block = MolecularStructure::named("dumbbell");
//! block.push_atom([1.0, 0.0, 0.0], AtomType::Index(1), 1.0, 0.0);
//! block.push_atom([-1.0, 0.0, 0.0], AtomType::Index(1), 1.0, 0.0);
//!
//! let com = block.calc_com()?;
//! assert_eq!(com, [0.0, 0.0, 0.0]);
//!
//! // I = diag(0, 2, 2) for two unit masses at (±1, 0, 0).
//! let inertia = block.inertia_tensor()?;
//! assert_eq!(inertia[(1, 1)], 2.0);
//!
//! // The director is the axis of smallest moment: ±x.
//! let axis = order::director(&inertia);
//! assert!(axis[0].abs() > 0.99);
//! # Ok::<(), molblock::StructureError>(())
//! ```
//!
//! Per-frame trajectory analysis clones a prototype structure, swaps in
//! the frame's coordinates, reconstructs the body across periodic
//! boundaries, and reduces:
//!
//! ```
//! use molblock::{AtomType, Frame, MolecularStructure, SimBox, order};
//!
//! let mut prototype = MolecularStructure::new();
//! prototype.push_atom([0.0, 0.0, 0.0], AtomType::Index(1), 1.0, 0.0);
//! prototype.push_atom([0.0, 0.0, 1.2], AtomType::Index(1), 1.0, 0.0);
//!
//! // Handed over by an external trajectory reader, wrapped by the
//! // simulation engine:
//! let frame = Frame {
//!     step: 12000,
//!     positions: vec![[0.5, 0.5, 9.8], [0.5, 0.5, 0.6]],
//!     types: vec![AtomType::Index(1), AtomType::Index(1)],
//!     bounds: SimBox::from_lengths([10.0, 10.0, 10.0]),
//! };
//!
//! let mut chain = prototype.clone();
//! chain.set_positions(frame.positions.clone());
//! chain.unwrap(&frame.bounds, [true, true, true]);
//!
//! let axis = order::director(&chain.inertia_tensor()?);
//! assert!(axis[2].abs() > 0.99);
//! # Ok::<(), molblock::StructureError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Format readers and the `load_*` methods that apply them
//! - [`order`] — Directors, the orientational order tensor, and S2
//!
//! # Data Types
//!
//! - [`MolecularStructure`] — The central container and its operations
//! - [`AtomType`] — Symbolic-or-integer atom type tag
//! - [`Bond`], [`Angle`], [`Dihedral`], [`Improper`] — Topology tuples
//! - [`ForceField`] with [`PairCoeffs`], [`BondCoeffs`], [`AngleCoeffs`],
//!   [`DihedralCoeffs`] — Coefficient tables keyed by type id
//! - [`SimBox`] — Orthorhombic simulation cell
//! - [`Frame`] — The contract external trajectory readers fulfil
//! - [`StructureError`], [`io::Error`] — Failure taxonomy

mod geometry;
mod model;
mod properties;

pub mod io;
pub mod order;

pub use model::bounds::SimBox;
pub use model::error::StructureError;
pub use model::forcefield::{AngleCoeffs, BondCoeffs, DihedralCoeffs, ForceField, PairCoeffs};
pub use model::frame::Frame;
pub use model::structure::MolecularStructure;
pub use model::topology::{Angle, Bond, Dihedral, Improper};
pub use model::types::AtomType;

pub use io::{Prototype, PrototypeOptions};
