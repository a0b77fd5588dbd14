pub mod dry_run;

use crate::types::{decision::QuoteSent, quote::Quote};

/// Execution collaborator. Called once per side per decision cycle.
pub trait Quoter {
    fn update_quote(&mut self, quote: Quote) -> QuoteSent;
}
