mod ledger;
mod transaction;

pub use ledger::*;
pub use transaction::*;
