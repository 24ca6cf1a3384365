//! Logical fields and the column names accepted for each of them.
//!
//! Lead exports have been produced by several spreadsheet templates over
//! time, so the same logical field shows up under different headers. Each
//! [`LogicalField`] carries an ordered [`AliasList`]; earlier names win when
//! a row happens to contain more than one of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

const ADSET_ALIASES: &[&str] = &["adset_name", "adset", "Adset", "conjunto", "AdsetName"];
const PLANEJAMENTO_ALIASES: &[&str] = &[
    "Venda_planejamento",
    "Venda_efetuada",
    "venda_efetuada",
    "venda",
    "Venda",
    "sale",
    "Sale",
];
const SEGUROS_ALIASES: &[&str] = &["venda_seguros"];
const CREDITO_ALIASES: &[&str] = &["venda_credito"];

/// Ordered column names that all mean the same logical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasList(&'static [&'static str]);

impl AliasList {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.0
    }

    /// First alias present as a column of `record`.
    pub fn matching_column(&self, record: &Record) -> Option<&'static str> {
        self.0.iter().copied().find(|name| record.contains(name))
    }

    /// First alias present in `columns`.
    pub fn first_in<'a, I>(&self, columns: I) -> Option<&'static str>
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        self.0
            .iter()
            .copied()
            .find(|name| columns.clone().into_iter().any(|column| column == *name))
    }
}

/// Resolves a logical field against a record.
///
/// Returns the value of the first alias that exists as a column, even when
/// that cell is empty. Returns `""` when no alias is present.
pub fn resolve<'r>(record: &'r Record, aliases: AliasList) -> &'r str {
    aliases
        .names()
        .iter()
        .find_map(|name| record.get(name))
        .unwrap_or("")
}

/// Product category a sale is booked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleCategory {
    /// Financial planning, the generic sale column.
    Planejamento,
    /// Insurance.
    Seguros,
    /// Credit.
    Credito,
}

impl SaleCategory {
    pub const ALL: [SaleCategory; 3] = [Self::Planejamento, Self::Seguros, Self::Credito];

    pub fn aliases(self) -> AliasList {
        match self {
            Self::Planejamento => AliasList::new(PLANEJAMENTO_ALIASES),
            Self::Seguros => AliasList::new(SEGUROS_ALIASES),
            Self::Credito => AliasList::new(CREDITO_ALIASES),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Planejamento => "Planejamento",
            Self::Seguros => "Seguros",
            Self::Credito => "Credito",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Planejamento => 0,
            Self::Seguros => 1,
            Self::Credito => 2,
        }
    }
}

impl fmt::Display for SaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every field the aggregation reads from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    AdsetName,
    Sale(SaleCategory),
}

impl LogicalField {
    pub const ALL: [LogicalField; 4] = [
        Self::AdsetName,
        Self::Sale(SaleCategory::Planejamento),
        Self::Sale(SaleCategory::Seguros),
        Self::Sale(SaleCategory::Credito),
    ];

    pub fn aliases(self) -> AliasList {
        match self {
            Self::AdsetName => AliasList::new(ADSET_ALIASES),
            Self::Sale(category) => category.aliases(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AdsetName => "adset name",
            Self::Sale(SaleCategory::Planejamento) => "planejamento sale",
            Self::Sale(SaleCategory::Seguros) => "seguros sale",
            Self::Sale(SaleCategory::Credito) => "credito sale",
        }
    }

    /// Resolves this field against `record`. See [`resolve`].
    pub fn resolve(self, record: &Record) -> &str {
        resolve(record, self.aliases())
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
