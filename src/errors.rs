// errors.rs

use thiserror::Error;

/// Everything here is recoverable at the menu loop; the caller reports it
/// and keeps prompting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("Quantity must be positive.")]
    InvalidQuantity,

    #[error("Not enough cash to buy {quantity} shares of {symbol}")]
    InsufficientFunds { symbol: String, quantity: u64 },

    #[error("Not enough shares to sell {quantity} shares of {symbol}")]
    InsufficientShares { symbol: String, quantity: u64 },

    #[error("Stock symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("Invalid input: {0}")]
    MalformedInput(String),
}
