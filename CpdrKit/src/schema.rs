//! Fixed output schema and row projection

use crate::record::Row;

/// Columns of the published-cases CSV, in output order.
pub const CPDR_COLUMNS: [&str; 12] = [
    "Item",
    "respondent_nation",
    "complainant_nation",
    "case_status",
    "year_claim_initiated",
    "year_claim_resolved",
    "means_of_resolution",
    "respondent_type",
    "complainant_type",
    "respondent_nation_economy",
    "complainant_nation_economy",
    "provenience_nation",
];

/// An ordered list of output columns.
///
/// Projection through a schema always yields exactly one value per column:
/// fields missing from a [`Row`] become empty strings and fields the schema
/// does not name are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Schema with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// The published-cases schema.
    pub fn cpdr() -> Self {
        Self::new(CPDR_COLUMNS)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Values of `row` in column order.
    pub fn project<'a>(&self, row: &'a Row) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|column| row.get(column).map_or("", String::as_str))
            .collect()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::cpdr()
    }
}
