use std::io::BufRead;
use std::str::FromStr;

use super::{Format, error::Error};

/// Collects the data lines of a column-oriented text resource.
///
/// Blank lines and `#` comment lines are skipped; surviving lines keep
/// their 1-based line number for error reporting.
pub(crate) fn data_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Io { source: e })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((idx + 1, line));
    }
    Ok(lines)
}

/// Parses one whitespace-delimited field, naming it in the error.
pub(crate) fn parse_field<T: FromStr>(
    format: Format,
    line: usize,
    token: &str,
    what: &str,
) -> Result<T, Error> {
    token
        .parse()
        .map_err(|_| Error::parse(format, line, format!("invalid {what} '{token}'")))
}

/// Splits a data row and checks that it carries at least `min_fields`.
pub(crate) fn split_row<'a>(
    format: Format,
    line: usize,
    row: &'a str,
    min_fields: usize,
    what: &str,
) -> Result<Vec<&'a str>, Error> {
    let fields: Vec<&str> = row.split_whitespace().collect();
    if fields.len() < min_fields {
        return Err(Error::parse(
            format,
            line,
            format!("{what} row needs at least {min_fields} fields, found {}", fields.len()),
        ));
    }
    Ok(fields)
}
