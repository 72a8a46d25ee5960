// commands.rs

use crate::errors::TradeError;

/// One parsed menu action. Parsing is kept separate from the prompt loop
/// so the dispatch table can be tested without a live input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowMarket,
    Buy,
    Sell,
    ShowPortfolio,
    UpdatePrices,
    AddStock,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Command, TradeError> {
        let trimmed = input.trim();
        let choice: u32 = trimmed
            .parse()
            .map_err(|_| TradeError::MalformedInput(trimmed.to_string()))?;
        match choice {
            1 => Ok(Command::ShowMarket),
            2 => Ok(Command::Buy),
            3 => Ok(Command::Sell),
            4 => Ok(Command::ShowPortfolio),
            5 => Ok(Command::UpdatePrices),
            6 => Ok(Command::AddStock),
            7 => Ok(Command::Exit),
            _ => Err(TradeError::MalformedInput(trimmed.to_string())),
        }
    }
}

pub fn parse_quantity(input: &str) -> Result<i64, TradeError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| TradeError::MalformedInput(trimmed.to_string()))
}

pub fn parse_price(input: &str) -> Result<f64, TradeError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| TradeError::MalformedInput(trimmed.to_string()))
}

/// Symbols are case-normalized to uppercase before any market lookup.
pub fn normalize_symbol(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_digits_map_to_commands() {
        assert_eq!(Command::parse("1"), Ok(Command::ShowMarket));
        assert_eq!(Command::parse("2"), Ok(Command::Buy));
        assert_eq!(Command::parse("3"), Ok(Command::Sell));
        assert_eq!(Command::parse("4"), Ok(Command::ShowPortfolio));
        assert_eq!(Command::parse("5"), Ok(Command::UpdatePrices));
        assert_eq!(Command::parse("6"), Ok(Command::AddStock));
        assert_eq!(Command::parse(" 7 "), Ok(Command::Exit));
    }

    #[test]
    fn junk_and_out_of_range_choices_are_malformed() {
        assert_eq!(
            Command::parse("buy"),
            Err(TradeError::MalformedInput("buy".to_string()))
        );
        assert_eq!(
            Command::parse(""),
            Err(TradeError::MalformedInput(String::new()))
        );
        assert_eq!(
            Command::parse("0"),
            Err(TradeError::MalformedInput("0".to_string()))
        );
        assert_eq!(
            Command::parse("8"),
            Err(TradeError::MalformedInput("8".to_string()))
        );
    }

    #[test]
    fn quantities_parse_as_signed_integers() {
        assert_eq!(parse_quantity("10"), Ok(10));
        // Negative quantities parse here; the portfolio rejects them.
        assert_eq!(parse_quantity("-3"), Ok(-3));
        assert_eq!(
            parse_quantity("ten"),
            Err(TradeError::MalformedInput("ten".to_string()))
        );
    }

    #[test]
    fn prices_parse_as_floats() {
        assert_eq!(parse_price("290.5"), Ok(290.5));
        assert_eq!(
            parse_price("$290"),
            Err(TradeError::MalformedInput("$290".to_string()))
        );
    }

    #[test]
    fn symbols_are_uppercased() {
        assert_eq!(normalize_symbol(" aapl "), "AAPL");
        assert_eq!(normalize_symbol("MsFt"), "MSFT");
    }
}
