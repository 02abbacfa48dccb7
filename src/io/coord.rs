//! Coordinate readers: bare `type x y z` tables and classic XYZ files.

use std::io::BufRead;

use super::util::{data_lines, parse_field, split_row};
use super::{Format, error::Error};
use crate::model::types::AtomType;

/// Reads a headerless coordinate table, one `type x y z` row per atom.
pub fn read_coords<R: BufRead>(reader: R) -> Result<(Vec<AtomType>, Vec<[f64; 3]>), Error> {
    let mut types = Vec::new();
    let mut positions = Vec::new();
    for (line, row) in data_lines(reader)? {
        let f = split_row(Format::Coord, line, &row, 4, "coordinate")?;
        types.push(AtomType::parse(f[0]));
        positions.push([
            parse_field(Format::Coord, line, f[1], "x coordinate")?,
            parse_field(Format::Coord, line, f[2], "y coordinate")?,
            parse_field(Format::Coord, line, f[3], "z coordinate")?,
        ]);
    }
    Ok((types, positions))
}

/// Reads a classic XYZ file: atom count, comment line, then `type x y z`
/// rows. Exactly the declared number of rows is consumed.
pub fn read_xyz<R: BufRead>(reader: R) -> Result<(Vec<AtomType>, Vec<[f64; 3]>), Error> {
    let mut lines = reader.lines();
    let mut line = 0usize;

    let count_line = next_line(&mut lines, &mut line, "atom count line")?;
    let declared: usize = parse_field(Format::Xyz, line, count_line.trim(), "atom count")?;

    // Comment line, kept only for its position in the format.
    next_line(&mut lines, &mut line, "comment line")?;

    let mut types = Vec::with_capacity(declared);
    let mut positions = Vec::with_capacity(declared);
    while positions.len() < declared {
        let row = next_line(&mut lines, &mut line, "atom record")?;
        if row.trim().is_empty() {
            continue;
        }
        let f = split_row(Format::Xyz, line, &row, 4, "atom")?;
        types.push(AtomType::parse(f[0]));
        positions.push([
            parse_field(Format::Xyz, line, f[1], "x coordinate")?,
            parse_field(Format::Xyz, line, f[2], "y coordinate")?,
            parse_field(Format::Xyz, line, f[3], "z coordinate")?,
        ]);
    }
    Ok((types, positions))
}

fn next_line<B: BufRead>(
    lines: &mut std::io::Lines<B>,
    line: &mut usize,
    what: &str,
) -> Result<String, Error> {
    *line += 1;
    match lines.next() {
        Some(Ok(row)) => Ok(row),
        Some(Err(e)) => Err(Error::Io { source: e }),
        None => Err(Error::parse(
            Format::Xyz,
            *line,
            format!("file ended before {what}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_parse_types_and_positions() {
        let input = b"1 0.0 0.0 0.0\n2 1.5 -0.5 2.0\n" as &[u8];
        let (types, positions) = read_coords(input).unwrap();
        assert_eq!(types, vec![AtomType::Index(1), AtomType::Index(2)]);
        assert_eq!(positions[1], [1.5, -0.5, 2.0]);
    }

    #[test]
    fn coords_arrays_stay_aligned() {
        let input = b"C 0.0 0.0 0.0\nH 1.0 0.0 0.0\nH -1.0 0.0 0.0\n" as &[u8];
        let (types, positions) = read_coords(input).unwrap();
        assert_eq!(types.len(), positions.len());
    }

    #[test]
    fn xyz_reads_declared_count() {
        let input = b"2\nwater fragment\nO 0.0 0.0 0.0\nH 0.96 0.0 0.0\n" as &[u8];
        let (types, positions) = read_xyz(input).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(types[0], AtomType::Label("O".to_string()));
    }

    #[test]
    fn xyz_errors_on_truncated_file() {
        let input = b"3\ncomment\nO 0.0 0.0 0.0\n" as &[u8];
        assert!(read_xyz(input).is_err());
    }

    #[test]
    fn xyz_errors_on_bad_count() {
        let input = b"many\ncomment\n" as &[u8];
        assert!(read_xyz(input).is_err());
    }
}
