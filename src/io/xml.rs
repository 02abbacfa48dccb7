//! XML prototype reader.
//!
//! A prototype document carries a `configuration` element (either the
//! document root or a direct child of it) with named sections: `position`,
//! `mass`, `charge` and `type` are mandatory, `bond`/`angle`/`dihedral`/
//! `improper` optional. Each section's text block starts with a
//! header/count line that is skipped; the remaining lines are
//! whitespace-separated rows.
//!
//! Absent optional sections are modeled as `None` ("no topology of this
//! kind"), not as errors. Row-count consistency across the mandatory
//! sections is enforced before anything is returned.

use std::io::BufRead;

use super::{Format, error::Error};
use crate::model::topology::{Angle, Bond, Dihedral, Improper};
use crate::model::types::AtomType;

/// Parsed prototype content, before it is applied to a structure.
#[derive(Debug, Clone)]
pub struct Prototype {
    pub positions: Vec<[f64; 3]>,
    pub masses: Vec<f64>,
    pub charges: Vec<f64>,
    pub types: Vec<AtomType>,
    pub bonds: Option<Vec<Bond>>,
    pub angles: Option<Vec<Angle>>,
    pub dihedrals: Option<Vec<Dihedral>>,
    pub impropers: Option<Vec<Improper>>,
}

/// Gates which prototype attributes a load applies to the structure.
///
/// Skipping coordinates also relaxes the position/mass/charge row-count
/// check, so one prototype's topology and charges can be shared across
/// copies whose coordinates come from elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrototypeOptions {
    pub skip_coords: bool,
    pub skip_types: bool,
    pub skip_masses: bool,
}

pub fn read<R: BufRead>(mut reader: R, options: &PrototypeOptions) -> Result<Prototype, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let doc = roxmltree::Document::parse(&text).map_err(|e| {
        Error::parse(Format::Prototype, e.pos().row as usize, e.to_string())
    })?;

    let root = doc.root_element();
    let config = if root.has_tag_name("configuration") {
        root
    } else {
        root.children()
            .find(|n| n.has_tag_name("configuration"))
            .ok_or(Error::MissingSection {
                format: Format::Prototype,
                section: "configuration",
            })?
    };

    let positions = parse_rows(mandatory(&config, "position")?, "position", |row, fields| {
        Ok([
            field(row, fields, 0, "x coordinate")?,
            field(row, fields, 1, "y coordinate")?,
            field(row, fields, 2, "z coordinate")?,
        ])
    })?;
    let masses = parse_rows(mandatory(&config, "mass")?, "mass", |row, fields| {
        field(row, fields, 0, "mass")
    })?;
    let charges = parse_rows(mandatory(&config, "charge")?, "charge", |row, fields| {
        field(row, fields, 0, "charge")
    })?;
    let types = parse_rows(mandatory(&config, "type")?, "type", |_, fields| {
        Ok(AtomType::parse(fields[0]))
    })?;

    if !options.skip_coords && positions.len() != masses.len() {
        return Err(Error::inconsistent(
            Format::Prototype,
            format!(
                "position rows ({}) and mass rows ({}) disagree",
                positions.len(),
                masses.len()
            ),
        ));
    }
    if masses.len() != charges.len() || charges.len() != types.len() {
        return Err(Error::inconsistent(
            Format::Prototype,
            format!(
                "mass ({}), charge ({}) and type ({}) rows disagree",
                masses.len(),
                charges.len(),
                types.len()
            ),
        ));
    }

    let bonds = section(&config, "bond")
        .map(|text| {
            parse_rows(text, "bond", |row, fields| {
                Ok(Bond::new(
                    field(row, fields, 0, "bond type id")?,
                    field(row, fields, 1, "atom id")?,
                    field(row, fields, 2, "atom id")?,
                ))
            })
        })
        .transpose()?;
    let angles = section(&config, "angle")
        .map(|text| {
            parse_rows(text, "angle", |row, fields| {
                Ok(Angle::new(
                    field(row, fields, 0, "angle type id")?,
                    field(row, fields, 1, "atom id")?,
                    field(row, fields, 2, "atom id")?,
                    field(row, fields, 3, "atom id")?,
                ))
            })
        })
        .transpose()?;
    let dihedrals = section(&config, "dihedral")
        .map(|text| {
            parse_rows(text, "dihedral", |row, fields| {
                Ok(Dihedral::new(
                    field(row, fields, 0, "dihedral type id")?,
                    field(row, fields, 1, "atom id")?,
                    field(row, fields, 2, "atom id")?,
                    field(row, fields, 3, "atom id")?,
                    field(row, fields, 4, "atom id")?,
                ))
            })
        })
        .transpose()?;
    let impropers = section(&config, "improper")
        .map(|text| {
            parse_rows(text, "improper", |row, fields| {
                Ok(Improper::new(
                    field(row, fields, 0, "improper type id")?,
                    field(row, fields, 1, "atom id")?,
                    field(row, fields, 2, "atom id")?,
                    field(row, fields, 3, "atom id")?,
                    field(row, fields, 4, "atom id")?,
                ))
            })
        })
        .transpose()?;

    Ok(Prototype {
        positions,
        masses,
        charges,
        types,
        bonds,
        angles,
        dihedrals,
        impropers,
    })
}

fn section<'a>(config: &roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
    config
        .children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
}

fn mandatory<'a>(
    config: &roxmltree::Node<'a, '_>,
    name: &'static str,
) -> Result<&'a str, Error> {
    section(config, name).ok_or(Error::MissingSection {
        format: Format::Prototype,
        section: name,
    })
}

/// Applies `parse` to every data row of a section's text block.
///
/// The first line is the header/count line and is always skipped; blank
/// lines in the remainder are ignored.
fn parse_rows<T>(
    text: &str,
    section: &'static str,
    parse: impl Fn(usize, &[&str]) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let row = idx + 1;
        if fields.is_empty() {
            continue;
        }
        values.push(parse(row, &fields).map_err(|e| match e {
            Error::Parse { line, details, .. } => Error::parse(
                Format::Prototype,
                line,
                format!("in '{section}' section: {details}"),
            ),
            other => other,
        })?);
    }
    Ok(values)
}

fn field<T: std::str::FromStr>(
    row: usize,
    fields: &[&str],
    idx: usize,
    what: &str,
) -> Result<T, Error> {
    let token = fields.get(idx).ok_or_else(|| {
        Error::parse(Format::Prototype, row, format!("missing {what}"))
    })?;
    token
        .parse()
        .map_err(|_| Error::parse(Format::Prototype, row, format!("invalid {what} '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = r#"
<hoomd_xml version="1.5">
<configuration time_step="0">
<position num="3">
0.0 0.0 0.0
0.96 0.0 0.0
-0.24 0.93 0.0
</position>
<mass num="3">
15.999
1.008
1.008
</mass>
<charge num="3">
-0.8476
0.4238
0.4238
</charge>
<type num="3">
OW
HW
HW
</type>
<bond num="2">
1 1 2
1 1 3
</bond>
<angle num="1">
1 2 1 3
</angle>
</configuration>
</hoomd_xml>
"#;

    fn options() -> PrototypeOptions {
        PrototypeOptions::default()
    }

    #[test]
    fn full_prototype_parses() {
        let proto = read(WATER.as_bytes(), &options()).unwrap();
        assert_eq!(proto.positions.len(), 3);
        assert_eq!(proto.masses, vec![15.999, 1.008, 1.008]);
        assert_eq!(proto.charges[0], -0.8476);
        assert_eq!(proto.types[0], AtomType::Label("OW".to_string()));
        assert_eq!(proto.bonds.as_ref().unwrap().len(), 2);
        assert_eq!(proto.angles.as_ref().unwrap()[0], Angle::new(1, 2, 1, 3));
        assert!(proto.dihedrals.is_none());
        assert!(proto.impropers.is_none());
    }

    #[test]
    fn configuration_may_be_the_document_root() {
        let input = r#"<configuration>
<position num="1">
0 0 0
</position>
<mass num="1">
1.0
</mass>
<charge num="1">
0.0
</charge>
<type num="1">
A
</type>
</configuration>"#;
        let proto = read(input.as_bytes(), &options()).unwrap();
        assert_eq!(proto.positions.len(), 1);
    }

    #[test]
    fn missing_bond_section_is_not_an_error() {
        let proto = read(WATER.as_bytes(), &options()).unwrap();
        assert!(proto.dihedrals.is_none());
    }

    #[test]
    fn missing_mass_section_is_an_error() {
        let input = WATER.replace("mass", "mass_gone");
        let err = read(input.as_bytes(), &options()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingSection { section: "mass", .. }
        ));
    }

    #[test]
    fn mismatched_counts_are_an_error() {
        let input = WATER.replace("15.999\n1.008\n1.008", "15.999\n1.008");
        assert!(matches!(
            read(input.as_bytes(), &options()),
            Err(Error::Inconsistent { .. })
        ));
    }

    #[test]
    fn skip_coords_relaxes_the_position_count_check() {
        // Position block with one row; mass/charge/type with three.
        let input = WATER.replace(
            "0.0 0.0 0.0\n0.96 0.0 0.0\n-0.24 0.93 0.0",
            "0.0 0.0 0.0",
        );
        assert!(read(input.as_bytes(), &options()).is_err());

        let relaxed = PrototypeOptions {
            skip_coords: true,
            ..PrototypeOptions::default()
        };
        let proto = read(input.as_bytes(), &relaxed).unwrap();
        assert_eq!(proto.masses.len(), 3);
    }

    #[test]
    fn header_line_of_each_block_is_skipped() {
        // The first text line after the opening tag is the row "0.0 0.0 0.0"
        // only because the leading newline counts as the skipped header.
        let input = r#"<configuration>
<position num="1">ignored header
0.5 0.5 0.5
</position>
<mass num="1">count: 1
2.0
</mass>
<charge num="1">q
0.0
</charge>
<type num="1">t
X
</type>
</configuration>"#;
        let proto = read(input.as_bytes(), &options()).unwrap();
        assert_eq!(proto.positions, vec![[0.5, 0.5, 0.5]]);
        assert_eq!(proto.masses, vec![2.0]);
    }
}
