use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money entering the ledger (salary, interest, refunds, etc.)
    Income,
    /// Money leaving the ledger (rent, groceries, bills, etc.)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Parse a caller-supplied kind string. Matching is case-insensitive
    /// and ignores surrounding whitespace.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded financial movement.
/// Transactions are immutable - the ledger is append-only, so corrections
/// are made by recording a compensating entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the movement occurred. `YYYY-MM-DD` by convention, but stored
    /// exactly as supplied
    pub date: String,
    /// Human-readable description (may be empty)
    pub description: String,
    /// Amount (always positive for records stored in a ledger)
    pub amount: f64,
    /// Category of the movement
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
            kind,
        }
    }
}
