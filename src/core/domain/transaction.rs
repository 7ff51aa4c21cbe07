//! Transaction type.
//!
//! Income and expense entries of the finance ledger. Both variants share
//! every field, so the variant is a `Kind` tag instead of separate types.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::constants::DATE_FORMAT;
use crate::core::types::Category;
use crate::error::{Result, ValidationError};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Kind::Income),
            "expense" => Ok(Kind::Expense),
            other => Err(ValidationError::Kind(other.to_string())),
        }
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    kind: Kind,
    amount: f64,
    category: Category,
    #[serde(default)]
    description: String,
    date: String,
}

impl Transaction {
    /// Create a transaction stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Amount` unless `amount` is finite and positive.
    pub fn new(
        kind: Kind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        Self::at(kind, amount, category, description, Local::now().naive_local())
    }

    /// Create a transaction with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Amount` unless `amount` is finite and positive.
    pub fn at(
        kind: Kind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::Amount(amount.to_string()).into());
        }

        Ok(Self {
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date: date.format(DATE_FORMAT).to_string(),
        })
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Timestamp as stored.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Parsed timestamp, `None` if the stored text is not in the expected layout.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Selection criteria for listing transactions.
///
/// Unset criteria match everything. An empty category and zero days are
/// treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub kind: Option<Kind>,
    pub category: Option<String>,
    pub days: Option<u32>,
}

impl Filter {
    /// Whether `tx` passes every criterion, relative to `now`.
    pub fn matches(&self, tx: &Transaction, now: NaiveDateTime) -> bool {
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if tx.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }

        if let Some(days) = self.days.filter(|d| *d > 0) {
            let cutoff = now - Duration::days(i64::from(days));
            match tx.parsed_date() {
                Some(date) if date >= cutoff => {}
                _ => return false,
            }
        }

        true
    }
}
