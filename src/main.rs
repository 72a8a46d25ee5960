// main.rs

mod commands;
mod errors;
mod market;
mod models;
mod portfolio;

use std::io::{self, BufRead, Write};

use colored::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::{normalize_symbol, parse_price, parse_quantity, Command};
use crate::errors::TradeError;
use crate::market::Market;
use crate::portfolio::Portfolio;

const INITIAL_CASH: f64 = 10_000.0;

fn main() {
    env_logger::init();

    let mut market = Market::seeded();
    let mut portfolio = Portfolio::new(INITIAL_CASH);
    let mut rng = StdRng::from_entropy();
    info!(
        "session started with {} listings and {:.2} cash",
        market.len(),
        portfolio.cash()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let line = match read_line(&mut input) {
            Some(line) => line,
            None => break, // stdin closed
        };

        let outcome = match Command::parse(&line) {
            Ok(Command::ShowMarket) => {
                display_market(&market);
                Ok(())
            }
            Ok(Command::Buy) => run_buy(&mut input, &market, &mut portfolio),
            Ok(Command::Sell) => run_sell(&mut input, &market, &mut portfolio),
            Ok(Command::ShowPortfolio) => {
                display_portfolio(&market, &portfolio);
                Ok(())
            }
            Ok(Command::UpdatePrices) => {
                market.update_prices(&mut rng);
                println!("Market prices updated.");
                Ok(())
            }
            Ok(Command::AddStock) => run_add_stock(&mut input, &mut market),
            Ok(Command::Exit) => {
                println!("Exiting...");
                break;
            }
            Err(err) => Err(err),
        };

        if let Err(err) = outcome {
            println!("{}", err.to_string().red());
        }
    }
}

fn print_menu() {
    println!();
    println!("1. Display Market Data");
    println!("2. Buy Stock");
    println!("3. Sell Stock");
    println!("4. Display Portfolio");
    println!("5. Update Market Prices");
    println!("6. Add New Stock");
    println!("7. Exit");
    print!("Choose an option: ");
    let _ = io::stdout().flush();
}

/// Read one line from stdin; None once the stream is closed.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> String {
    print!("{}", message);
    let _ = io::stdout().flush();
    read_line(input).unwrap_or_default().trim().to_string()
}

fn run_buy(
    input: &mut impl BufRead,
    market: &Market,
    portfolio: &mut Portfolio,
) -> Result<(), TradeError> {
    let symbol = normalize_symbol(&prompt(input, "Enter stock symbol to buy: "));
    let quantity = parse_quantity(&prompt(input, "Enter quantity to buy: "))?;

    // Price always comes from the current market, never from the user.
    let instrument = market
        .get_instrument(&symbol)
        .ok_or_else(|| TradeError::SymbolNotFound(symbol.clone()))?;
    let receipt = portfolio.buy(&symbol, quantity, instrument.price)?;

    debug!(
        "trade receipt: {}",
        serde_json::to_string(&receipt).unwrap_or_default()
    );
    println!(
        "{}",
        format!("Bought {} shares of {}", receipt.quantity, receipt.symbol)
            .bright_cyan()
            .bold()
    );
    Ok(())
}

fn run_sell(
    input: &mut impl BufRead,
    market: &Market,
    portfolio: &mut Portfolio,
) -> Result<(), TradeError> {
    let symbol = normalize_symbol(&prompt(input, "Enter stock symbol to sell: "));
    let quantity = parse_quantity(&prompt(input, "Enter quantity to sell: "))?;

    let instrument = market
        .get_instrument(&symbol)
        .ok_or_else(|| TradeError::SymbolNotFound(symbol.clone()))?;
    let receipt = portfolio.sell(&symbol, quantity, instrument.price)?;

    debug!(
        "trade receipt: {}",
        serde_json::to_string(&receipt).unwrap_or_default()
    );
    println!(
        "{}",
        format!("Sold {} shares of {}", receipt.quantity, receipt.symbol)
            .bright_magenta()
            .bold()
    );
    Ok(())
}

fn run_add_stock(input: &mut impl BufRead, market: &mut Market) -> Result<(), TradeError> {
    let symbol = normalize_symbol(&prompt(input, "Enter new stock symbol: "));
    let price = parse_price(&prompt(input, "Enter initial price: "))?;
    market.add_stock(&symbol, price);
    println!("Added new stock: {} at ${}", symbol, price);
    Ok(())
}

fn display_market(market: &Market) {
    println!("Current Market Data:");
    for instrument in market.instruments() {
        println!("{}: ${:.2}", instrument.symbol, instrument.price);
    }
}

fn display_portfolio(market: &Market, portfolio: &Portfolio) {
    let valuation = portfolio.valuate(market);
    println!("Current Portfolio:");
    for position in &valuation.positions {
        println!(
            "{}: {} shares @ ${:.2} each = ${:.2}",
            position.symbol, position.quantity, position.unit_price, position.position_value
        );
    }
    println!("Cash: ${:.2}", valuation.cash);
    println!("Total Portfolio Value: ${:.2}", valuation.total_value);
}
