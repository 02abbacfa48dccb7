//! GROMACS GRO snapshot reader.
//!
//! Fixed-column records: residue id and name, atom name, positions and
//! optional velocities, then a trailing box line. The atom name column
//! doubles as the type tag. Only the first three box fields (orthorhombic
//! edge lengths) are consumed.

use std::io::BufRead;

use super::util::parse_field;
use super::{Format, error::Error};
use crate::model::bounds::SimBox;
use crate::model::types::AtomType;

/// Everything a GRO file yields about a structure.
#[derive(Debug, Clone)]
pub struct GroSnapshot {
    pub resids: Vec<u32>,
    pub resnames: Vec<String>,
    pub types: Vec<AtomType>,
    pub positions: Vec<[f64; 3]>,
    /// Empty when the file carries no velocity columns.
    pub velocities: Vec<[f64; 3]>,
    pub bounds: SimBox,
}

pub fn read<R: BufRead>(reader: R) -> Result<GroSnapshot, Error> {
    let lines: Vec<String> = reader
        .lines()
        .collect::<Result<_, _>>()
        .map_err(|e| Error::Io { source: e })?;

    if lines.len() < 3 {
        return Err(Error::parse(
            Format::Gro,
            lines.len(),
            "file needs a title, a count line and a box line",
        ));
    }

    let declared: usize = parse_field(Format::Gro, 2, lines[1].trim(), "atom count")?;
    if lines.len() < declared + 3 {
        return Err(Error::parse(
            Format::Gro,
            lines.len(),
            format!("file ended before {declared} atom records and a box line"),
        ));
    }

    let mut snapshot = GroSnapshot {
        resids: Vec::with_capacity(declared),
        resnames: Vec::with_capacity(declared),
        types: Vec::with_capacity(declared),
        positions: Vec::with_capacity(declared),
        velocities: Vec::new(),
        bounds: SimBox::from_lengths([0.0; 3]),
    };

    // Velocity columns are all-or-nothing, keyed off the first record.
    let has_velocities = declared > 0 && lines[2].len() >= 68;

    for idx in 0..declared {
        let line = idx + 3;
        let row = &lines[idx + 2];

        snapshot.resids.push(parse_field(
            Format::Gro,
            line,
            column(row, 0, 5, line, "residue id")?.trim(),
            "residue id",
        )?);
        snapshot
            .resnames
            .push(column(row, 5, 10, line, "residue name")?.trim().to_string());
        snapshot.types.push(AtomType::parse(
            column(row, 10, 15, line, "atom name")?.trim(),
        ));

        let x = parse_field(
            Format::Gro,
            line,
            column(row, 20, 28, line, "x coordinate")?.trim(),
            "x coordinate",
        )?;
        let y = parse_field(
            Format::Gro,
            line,
            column(row, 28, 36, line, "y coordinate")?.trim(),
            "y coordinate",
        )?;
        let z = parse_field(
            Format::Gro,
            line,
            column(row, 36, 44, line, "z coordinate")?.trim(),
            "z coordinate",
        )?;
        snapshot.positions.push([x, y, z]);

        if has_velocities {
            let vx = parse_field(
                Format::Gro,
                line,
                column(row, 44, 52, line, "x velocity")?.trim(),
                "x velocity",
            )?;
            let vy = parse_field(
                Format::Gro,
                line,
                column(row, 52, 60, line, "y velocity")?.trim(),
                "y velocity",
            )?;
            let vz = parse_field(
                Format::Gro,
                line,
                column(row, 60, 68, line, "z velocity")?.trim(),
                "z velocity",
            )?;
            snapshot.velocities.push([vx, vy, vz]);
        }
    }

    let box_line_no = declared + 3;
    let box_fields: Vec<&str> = lines[declared + 2].split_whitespace().collect();
    if box_fields.len() < 3 {
        return Err(Error::parse(
            Format::Gro,
            box_line_no,
            "box line needs three edge lengths",
        ));
    }
    let lengths = [
        parse_field(Format::Gro, box_line_no, box_fields[0], "box length")?,
        parse_field(Format::Gro, box_line_no, box_fields[1], "box length")?,
        parse_field(Format::Gro, box_line_no, box_fields[2], "box length")?,
    ];
    snapshot.bounds = SimBox::from_lengths(lengths);

    Ok(snapshot)
}

fn column<'a>(
    row: &'a str,
    start: usize,
    end: usize,
    line: usize,
    what: &str,
) -> Result<&'a str, Error> {
    row.get(start..end.min(row.len()))
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| Error::parse(Format::Gro, line, format!("record too short for {what}")))
}
