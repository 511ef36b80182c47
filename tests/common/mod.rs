// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use daybook::Ledger;

/// Test fixture: a ledger holding a typical start-of-month of activity,
/// with deliberately messy kind spellings.
pub fn sample_ledger() -> Result<Ledger> {
    let mut ledger = Ledger::new();
    ledger.add_transaction("2024-01-01", "Salary", 1000.0, "income")?;
    ledger.add_transaction("2024-01-02", "Rent", 300.0, "EXPENSE")?;
    ledger.add_transaction("2024-01-03", "Bonus", 200.0, " Income ")?;
    Ok(ledger)
}
