//! Delimited-text card source.
//!
//! One card per line, comma separated:
//!
//! ```text
//! name,year,invd,tmwk,sklp,preh,gmit,surv,race,ffa,msrv,lvct,prif[,title]
//! ```
//!
//! Fields are trimmed. Blank lines are skipped. The title column may be
//! omitted; everything after the thirteenth comma belongs to the title.

use super::catalog::Catalog;
use super::definition::CardRow;
use crate::core::{CardDataError, DraftError};

const REQUIRED_FIELDS: usize = 13;
const MAX_FIELDS: usize = 14;

/// Parse one line into a raw row.
pub fn parse_row(line: &str) -> Result<CardRow, CardDataError> {
    let fields: Vec<&str> = line.splitn(MAX_FIELDS, ',').map(str::trim).collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(CardDataError::FieldCount { found: fields.len() });
    }

    let number = |index: usize, field: &'static str| -> Result<f64, CardDataError> {
        fields[index]
            .parse::<f64>()
            .map_err(|_| CardDataError::InvalidNumber {
                field,
                value: fields[index].to_string(),
            })
    };

    Ok(CardRow {
        name: fields[0].to_string(),
        year: fields[1].to_string(),
        invd: number(2, "invd")?,
        tmwk: number(3, "tmwk")?,
        sklp: number(4, "sklp")?,
        preh: number(5, "preh")?,
        gmit: number(6, "gmit")?,
        surv: number(7, "surv")?,
        race: number(8, "race")?,
        ffa: number(9, "ffa")?,
        msrv: fields[10].to_string(),
        lvct: fields[11].to_string(),
        prif: number(12, "prif")?,
        title: fields.get(13).map(|t| t.to_string()).unwrap_or_default(),
    })
}

/// Parse every non-blank line of `text`.
///
/// Row indices in errors count non-blank lines from zero, matching the
/// position the card would have had in the catalog.
pub fn parse_rows(text: &str) -> Result<Vec<CardRow>, DraftError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(row, line)| parse_row(line).map_err(|source| DraftError::InvalidCardData { row, source }))
        .collect()
}

/// Parse `text` and build a catalog from it.
///
/// ```
/// use souper_draft::cards::loader;
///
/// let text = "Cesnica,2017,8,7,6,9,8,7,6,5,E1,EU,12,\n\
///             Onkei,2014,5,5,5,5,5,5,5,5,BR,NA,8,Veteran\n";
/// let catalog = loader::parse_catalog(text).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.cards()[0].rating(), 70);
/// assert_eq!(catalog.cards()[1].title(), "Veteran");
/// ```
pub fn parse_catalog(text: &str) -> Result<Catalog, DraftError> {
    Catalog::build(parse_rows(text)?)
}
