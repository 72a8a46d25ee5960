// market.rs

use std::collections::HashMap;

use log::{debug, info};
use rand::Rng;

use crate::models::Instrument;

/// The set of tradable listings and their current prices. Symbols are
/// unique; listings are never removed.
pub struct Market {
    stocks: HashMap<String, Instrument>,
}

impl Market {
    pub fn new() -> Self {
        Self {
            stocks: HashMap::new(),
        }
    }

    /// Market preloaded with the default listings for an interactive session.
    pub fn seeded() -> Self {
        let mut market = Self::new();
        for (symbol, price) in [
            ("AAPL", 150.0),
            ("GOOGL", 2800.0),
            ("AMZN", 3400.0),
            ("MSFT", 290.0),
        ] {
            market.add_stock(symbol, price);
        }
        market
    }

    /// Absence is a normal outcome the caller branches on, not an error.
    pub fn get_instrument(&self, symbol: &str) -> Option<&Instrument> {
        self.stocks.get(symbol)
    }

    /// List a new stock, or overwrite the price of an existing listing.
    /// Any numeric price is accepted.
    pub fn add_stock(&mut self, symbol: &str, price: f64) {
        info!("listing {} at {:.2}", symbol, price);
        self.stocks.insert(
            symbol.to_string(),
            Instrument {
                symbol: symbol.to_string(),
                price,
            },
        );
    }

    /// One random walk step over every listing: each price moves by an
    /// independent delta in (-5.0, 5.0). There is no floor, so a price can
    /// end up negative after enough bad steps.
    pub fn update_prices<R: Rng>(&mut self, rng: &mut R) {
        for stock in self.stocks.values_mut() {
            let change = rng.gen_range(-5.0..5.0);
            stock.price += change;
            debug!("{} moved {:+.2} to {:.2}", stock.symbol, change, stock.price);
        }
    }

    /// Read-only pass over the current listings, order unspecified.
    pub fn instruments(&self) -> impl Iterator<Item = &Instrument> {
        self.stocks.values()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lookup_hits_and_misses() {
        let market = Market::seeded();
        assert_eq!(market.get_instrument("AAPL").map(|s| s.price), Some(150.0));
        assert!(market.get_instrument("TSLA").is_none());
    }

    #[test]
    fn add_stock_overwrites_existing_listing() {
        let mut market = Market::new();
        market.add_stock("IBM", 120.0);
        market.add_stock("IBM", 95.5);
        assert_eq!(market.get_instrument("IBM").map(|s| s.price), Some(95.5));
        assert_eq!(market.len(), 1);
    }

    #[test]
    fn add_stock_accepts_any_numeric_price() {
        let mut market = Market::new();
        market.add_stock("JUNK", -3.0);
        assert_eq!(market.get_instrument("JUNK").map(|s| s.price), Some(-3.0));
    }

    #[test]
    fn update_prices_moves_every_listing_within_bounds() {
        let mut market = Market::seeded();
        let before: Vec<(String, f64)> = market
            .instruments()
            .map(|s| (s.symbol.clone(), s.price))
            .collect();

        let mut rng = StdRng::seed_from_u64(42);
        market.update_prices(&mut rng);

        assert_eq!(market.len(), before.len());
        for (symbol, old_price) in before {
            let new_price = market
                .get_instrument(&symbol)
                .map(|s| s.price)
                .unwrap();
            let change = new_price - old_price;
            assert!(change > -5.0 && change < 5.0, "{} moved by {}", symbol, change);
        }
    }

    #[test]
    fn update_prices_is_deterministic_under_a_seed() {
        let mut a = Market::seeded();
        let mut b = Market::seeded();
        a.update_prices(&mut StdRng::seed_from_u64(7));
        b.update_prices(&mut StdRng::seed_from_u64(7));
        for stock in a.instruments() {
            assert_eq!(
                Some(stock.price),
                b.get_instrument(&stock.symbol).map(|s| s.price)
            );
        }
    }
}
