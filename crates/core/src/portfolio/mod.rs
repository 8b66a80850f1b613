//! Portfolio module - valuation functions and view models.

mod valuation;
mod valuation_model;


pub use valuation::{holdings_value, portfolio_value, profit_loss, summarize};
pub use valuation_model::PortfolioSummary;
