// portfolio.rs

use std::collections::HashMap;

use log::debug;

use crate::errors::TradeError;
use crate::market::Market;
use crate::models::{Position, TradeReceipt, Valuation};

/// A single investor account: cash plus shares held per symbol.
///
/// Invariants: cash never goes negative, and every entry in `holdings`
/// is strictly positive. A position sold down to zero is removed.
pub struct Portfolio {
    cash: f64,
    holdings: HashMap<String, u64>, // stock symbol -> shares held
}

impl Portfolio {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            holdings: HashMap::new(),
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Shares currently held for a symbol; zero when never bought or
    /// fully sold.
    pub fn quantity(&self, symbol: &str) -> u64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Buy shares at the given unit price. Rejects non-positive quantities
    /// and orders costing more than the available cash; a rejected order
    /// leaves the account untouched.
    pub fn buy(
        &mut self,
        symbol: &str,
        quantity: i64,
        unit_price: f64,
    ) -> Result<TradeReceipt, TradeError> {
        if quantity <= 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let quantity = quantity as u64;
        let cost = quantity as f64 * unit_price;
        if self.cash < cost {
            return Err(TradeError::InsufficientFunds {
                symbol: symbol.to_string(),
                quantity,
            });
        }

        *self.holdings.entry(symbol.to_string()).or_insert(0) += quantity;
        self.cash -= cost;
        debug!(
            "bought {} {} at {:.2}, cash now {:.2}",
            quantity, symbol, unit_price, self.cash
        );
        Ok(TradeReceipt {
            symbol: symbol.to_string(),
            quantity,
            unit_price,
        })
    }

    /// Sell shares at the given unit price. Rejects non-positive quantities
    /// and sells exceeding the held amount (a never-held symbol counts as
    /// zero held); a rejected order leaves the account untouched.
    pub fn sell(
        &mut self,
        symbol: &str,
        quantity: i64,
        unit_price: f64,
    ) -> Result<TradeReceipt, TradeError> {
        if quantity <= 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let quantity = quantity as u64;
        if self.quantity(symbol) < quantity {
            return Err(TradeError::InsufficientShares {
                symbol: symbol.to_string(),
                quantity,
            });
        }

        if let Some(held) = self.holdings.get_mut(symbol) {
            *held -= quantity;
            if *held == 0 {
                self.holdings.remove(symbol);
            }
        }
        self.cash += quantity as f64 * unit_price;
        debug!(
            "sold {} {} at {:.2}, cash now {:.2}",
            quantity, symbol, unit_price, self.cash
        );
        Ok(TradeReceipt {
            symbol: symbol.to_string(),
            quantity,
            unit_price,
        })
    }

    /// Value the account against current market prices. Holdings only ever
    /// originate from a buy against a listed symbol and the market never
    /// delists, so a lookup miss here means the two have diverged.
    ///
    /// # Panics
    ///
    /// Panics if a held symbol is not listed on the market.
    pub fn valuate(&self, market: &Market) -> Valuation {
        let mut positions = Vec::with_capacity(self.holdings.len());
        let mut total_value = self.cash;
        for (symbol, &quantity) in &self.holdings {
            let instrument = market.get_instrument(symbol).unwrap_or_else(|| {
                panic!("held symbol {} is not listed on the market", symbol)
            });
            let position_value = quantity as f64 * instrument.price;
            total_value += position_value;
            positions.push(Position {
                symbol: symbol.clone(),
                quantity,
                unit_price: instrument.price,
                position_value,
            });
        }
        Valuation {
            cash: self.cash,
            positions,
            total_value,
        }
    }
}
