//! Force-field parameter tables: `type_id p1 p2 [p3 p4]` rows.
//!
//! Duplicate type ids overwrite silently; the last row wins.

use std::collections::HashMap;
use std::io::BufRead;

use super::util::{data_lines, parse_field, split_row};
use super::{Format, error::Error};
use crate::model::forcefield::{AngleCoeffs, BondCoeffs, DihedralCoeffs, PairCoeffs};

pub fn read_pair_coeffs<R: BufRead>(reader: R) -> Result<HashMap<u32, PairCoeffs>, Error> {
    let mut table = HashMap::new();
    for (line, row) in data_lines(reader)? {
        let f = split_row(Format::Table, line, &row, 3, "pair coefficient")?;
        let type_id = parse_field(Format::Table, line, f[0], "pair type id")?;
        table.insert(
            type_id,
            PairCoeffs {
                epsilon: parse_field(Format::Table, line, f[1], "epsilon")?,
                sigma: parse_field(Format::Table, line, f[2], "sigma")?,
            },
        );
    }
    Ok(table)
}

pub fn read_bond_coeffs<R: BufRead>(reader: R) -> Result<HashMap<u32, BondCoeffs>, Error> {
    let mut table = HashMap::new();
    for (line, row) in data_lines(reader)? {
        let f = split_row(Format::Table, line, &row, 3, "bond coefficient")?;
        let type_id = parse_field(Format::Table, line, f[0], "bond type id")?;
        table.insert(
            type_id,
            BondCoeffs {
                k: parse_field(Format::Table, line, f[1], "force constant")?,
                r0: parse_field(Format::Table, line, f[2], "equilibrium length")?,
            },
        );
    }
    Ok(table)
}

pub fn read_angle_coeffs<R: BufRead>(reader: R) -> Result<HashMap<u32, AngleCoeffs>, Error> {
    let mut table = HashMap::new();
    for (line, row) in data_lines(reader)? {
        let f = split_row(Format::Table, line, &row, 3, "angle coefficient")?;
        let type_id = parse_field(Format::Table, line, f[0], "angle type id")?;
        table.insert(
            type_id,
            AngleCoeffs {
                k: parse_field(Format::Table, line, f[1], "force constant")?,
                theta0: parse_field(Format::Table, line, f[2], "equilibrium angle")?,
            },
        );
    }
    Ok(table)
}

pub fn read_dihedral_coeffs<R: BufRead>(reader: R) -> Result<HashMap<u32, DihedralCoeffs>, Error> {
    let mut table = HashMap::new();
    for (line, row) in data_lines(reader)? {
        let f = split_row(Format::Table, line, &row, 5, "dihedral coefficient")?;
        let type_id = parse_field(Format::Table, line, f[0], "dihedral type id")?;
        table.insert(
            type_id,
            DihedralCoeffs {
                k1: parse_field(Format::Table, line, f[1], "k1")?,
                k2: parse_field(Format::Table, line, f[2], "k2")?,
                k3: parse_field(Format::Table, line, f[3], "k3")?,
                k4: parse_field(Format::Table, line, f[4], "k4")?,
            },
        );
    }
    Ok(table)
}
