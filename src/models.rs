// models.rs

use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Instrument {
    pub symbol: String,
    pub price: f64,
}

/// Confirmation of an executed buy or sell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TradeReceipt {
    pub symbol: String,
    pub quantity: u64,
    pub unit_price: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Position {
    pub symbol: String,
    pub quantity: u64,
    pub unit_price: f64,
    pub position_value: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Valuation {
    pub cash: f64,
    pub positions: Vec<Position>,
    pub total_value: f64,
}
