//! Search query handlers.

mod search_portfolio;

pub use search_portfolio::{SearchPortfolioHandler, SearchPortfolioQuery};
