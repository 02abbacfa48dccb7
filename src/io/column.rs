//! Column-oriented numeric tables: mass/charge values and topology tuples.
//!
//! Topology rows carry the interaction type id first, then 1-indexed atom
//! references. Trailing extra fields are ignored; missing fields are parse
//! errors.

use std::io::BufRead;

use super::util::{data_lines, parse_field, split_row};
use super::{Format, error::Error};
use crate::model::topology::{Angle, Bond, Dihedral, Improper};

/// Reads a single-column table of reals (mass and charge files).
pub fn read_reals<R: BufRead>(reader: R) -> Result<Vec<f64>, Error> {
    data_lines(reader)?
        .iter()
        .map(|(line, row)| {
            let fields = split_row(Format::Table, *line, row, 1, "value")?;
            parse_field(Format::Table, *line, fields[0], "real value")
        })
        .collect()
}

pub fn read_bonds<R: BufRead>(reader: R) -> Result<Vec<Bond>, Error> {
    data_lines(reader)?
        .iter()
        .map(|(line, row)| {
            let f = split_row(Format::Table, *line, row, 3, "bond")?;
            Ok(Bond::new(
                parse_field(Format::Table, *line, f[0], "bond type id")?,
                parse_field(Format::Table, *line, f[1], "atom id")?,
                parse_field(Format::Table, *line, f[2], "atom id")?,
            ))
        })
        .collect()
}

pub fn read_angles<R: BufRead>(reader: R) -> Result<Vec<Angle>, Error> {
    data_lines(reader)?
        .iter()
        .map(|(line, row)| {
            let f = split_row(Format::Table, *line, row, 4, "angle")?;
            Ok(Angle::new(
                parse_field(Format::Table, *line, f[0], "angle type id")?,
                parse_field(Format::Table, *line, f[1], "atom id")?,
                parse_field(Format::Table, *line, f[2], "atom id")?,
                parse_field(Format::Table, *line, f[3], "atom id")?,
            ))
        })
        .collect()
}

pub fn read_dihedrals<R: BufRead>(reader: R) -> Result<Vec<Dihedral>, Error> {
    data_lines(reader)?
        .iter()
        .map(|(line, row)| {
            let f = split_row(Format::Table, *line, row, 5, "dihedral")?;
            Ok(Dihedral::new(
                parse_field(Format::Table, *line, f[0], "dihedral type id")?,
                parse_field(Format::Table, *line, f[1], "atom id")?,
                parse_field(Format::Table, *line, f[2], "atom id")?,
                parse_field(Format::Table, *line, f[3], "atom id")?,
                parse_field(Format::Table, *line, f[4], "atom id")?,
            ))
        })
        .collect()
}

pub fn read_impropers<R: BufRead>(reader: R) -> Result<Vec<Improper>, Error> {
    data_lines(reader)?
        .iter()
        .map(|(line, row)| {
            let f = split_row(Format::Table, *line, row, 5, "improper")?;
            Ok(Improper::new(
                parse_field(Format::Table, *line, f[0], "improper type id")?,
                parse_field(Format::Table, *line, f[1], "atom id")?,
                parse_field(Format::Table, *line, f[2], "atom id")?,
                parse_field(Format::Table, *line, f[3], "atom id")?,
                parse_field(Format::Table, *line, f[4], "atom id")?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reals_skip_header_comments() {
        let input = b"# mass\n15.999\n1.008\n1.008\n" as &[u8];
        let masses = read_reals(input).unwrap();
        assert_eq!(masses, vec![15.999, 1.008, 1.008]);
    }

    #[test]
    fn reals_reject_garbage() {
        let input = b"15.999\noops\n" as &[u8];
        assert!(read_reals(input).is_err());
    }

    #[test]
    fn bonds_parse_type_and_atom_ids() {
        let input = b"# type i j\n1 1 2\n2 2 3\n" as &[u8];
        let bonds = read_bonds(input).unwrap();
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds[0], Bond::new(1, 1, 2));
        assert_eq!(bonds[1], Bond::new(2, 2, 3));
    }

    #[test]
    fn bonds_reject_short_rows() {
        let input = b"1 2\n" as &[u8];
        assert!(read_bonds(input).is_err());
    }

    #[test]
    fn dihedrals_ignore_trailing_fields() {
        let input = b"3 1 2 3 4 extra\n" as &[u8];
        let dihedrals = read_dihedrals(input).unwrap();
        assert_eq!(dihedrals[0], Dihedral::new(3, 1, 2, 3, 4));
    }

    #[test]
    fn angles_and_impropers_parse() {
        let angles = read_angles(b"1 1 2 3\n" as &[u8]).unwrap();
        assert_eq!(angles[0], Angle::new(1, 1, 2, 3));
        let impropers = read_impropers(b"2 1 2 3 4\n" as &[u8]).unwrap();
        assert_eq!(impropers[0], Improper::new(2, 1, 2, 3, 4));
    }
}
