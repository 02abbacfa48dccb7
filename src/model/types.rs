use std::fmt;

/// Atom type tag.
///
/// Coordinate tables and LAMMPS-style inputs tag atoms with small integer
/// type ids, while XYZ/GRO-style inputs carry symbolic names. Both forms
/// flow through the same per-atom `types` array, so the tag is an enum
/// rather than a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AtomType {
    Index(u32),
    Label(String),
}

impl AtomType {
    /// Parses a whitespace-delimited token into a type tag.
    ///
    /// Integer tokens become [`AtomType::Index`]; everything else is kept
    /// verbatim as a [`AtomType::Label`]. Never fails.
    pub fn parse(token: &str) -> Self {
        match token.parse::<u32>() {
            Ok(id) => AtomType::Index(id),
            Err(_) => AtomType::Label(token.to_string()),
        }
    }

    /// Numeric id, if this tag is an integer type.
    pub fn index(&self) -> Option<u32> {
        match self {
            AtomType::Index(id) => Some(*id),
            AtomType::Label(_) => None,
        }
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomType::Index(id) => write!(f, "{id}"),
            AtomType::Label(name) => write!(f, "{name}"),
        }
    }
}

impl From<u32> for AtomType {
    fn from(id: u32) -> Self {
        AtomType::Index(id)
    }
}

impl From<&str> for AtomType {
    fn from(token: &str) -> Self {
        AtomType::parse(token)
    }
}
