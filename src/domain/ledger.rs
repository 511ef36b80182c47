use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Transaction, TransactionKind};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(f64),

    #[error("Invalid transaction kind: {0:?}")]
    InvalidKind(String),
}

/// Running totals over all recorded transactions, one bucket per kind.
/// Both buckets are present even when a kind has no occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
}

impl Summary {
    /// Total for a single kind.
    pub fn total(&self, kind: TransactionKind) -> f64 {
        match kind {
            TransactionKind::Income => self.income,
            TransactionKind::Expense => self.expense,
        }
    }

    /// Income minus expense.
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// The ordered collection of all recorded transactions.
/// Created empty; grows only by appending validated records. Stored records
/// are never mutated or removed, so every stored transaction has a positive
/// amount and a recognized kind.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transaction.
    ///
    /// `date` and `description` are stored as supplied, with no format
    /// validation. `amount` must be strictly positive, and `kind` must name
    /// a recognized transaction kind (case-insensitive, surrounding
    /// whitespace ignored). The amount is checked first, so an entry that is
    /// invalid on both counts reports `InvalidAmount`. Nothing is appended
    /// when validation fails.
    pub fn add_transaction(
        &mut self,
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        kind: &str,
    ) -> Result<(), LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let kind = TransactionKind::from_str(kind)
            .ok_or_else(|| LedgerError::InvalidKind(kind.to_string()))?;

        self.transactions
            .push(Transaction::new(date, description, amount, kind));
        Ok(())
    }

    /// Compute the total income and expense over all recorded transactions.
    /// Returns zeroed totals for an empty ledger.
    pub fn calculate_summary(&self) -> Summary {
        self.transactions
            .iter()
            .fold(Summary::default(), |mut summary, tx| {
                match tx.kind {
                    TransactionKind::Income => summary.income += tx.amount,
                    TransactionKind::Expense => summary.expense += tx.amount,
                }
                summary
            })
    }

    /// All recorded transactions, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
