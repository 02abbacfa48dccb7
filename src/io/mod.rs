//! File I/O for molecular building blocks.
//!
//! Every reader is a free function over `BufRead`, so parsers are testable
//! from in-memory buffers; the path-taking `load_*` methods on
//! [`MolecularStructure`](crate::MolecularStructure) open the file and
//! overwrite the targeted attribute. Loaders never merge with prior state.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod column;
pub mod coord;
pub mod error;
pub mod gro;
pub mod params;
pub mod xml;

mod load;
mod util;

pub use error::Error;
pub use xml::{Prototype, PrototypeOptions};

/// Input formats, named in parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Headerless `type x y z` coordinate table.
    Coord,
    /// Classic XYZ with count and comment header lines.
    Xyz,
    /// GROMACS GRO snapshot.
    Gro,
    /// XML prototype document.
    Prototype,
    /// Generic column table (masses, charges, topology, coefficients).
    Table,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Coord => write!(f, "coordinate table"),
            Format::Xyz => write!(f, "XYZ"),
            Format::Gro => write!(f, "GRO"),
            Format::Prototype => write!(f, "XML prototype"),
            Format::Table => write!(f, "column table"),
        }
    }
}

pub(crate) fn open(path: impl AsRef<Path>) -> Result<BufReader<File>, Error> {
    Ok(BufReader::new(File::open(path)?))
}
