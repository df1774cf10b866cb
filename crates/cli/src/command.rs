//! Parsing of a single input line into a command.

use thiserror::Error;

use auctionhouse_core::{Amount, DomainError};

pub const HELP: &str = "\
Commands:
  add <name> <starting_price>         add a product to the auction
  bid <product> <bidder> <amount>     place a bid on a product
  close                               show the auction results
  results                             show the results as JSON
  help                                show this help
  exit | quit                         leave the auction
Use double quotes for names with spaces: add \"Blue Vase\" 10";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        name: String,
        starting_price: Amount,
    },
    Bid {
        product: String,
        bidder: String,
        amount: Amount,
    },
    Close,
    Results,
    Help,
    Exit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error(transparent)]
    InvalidAmount(#[from] DomainError),
}

impl Command {
    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let tokens = tokenize(line)?;
        let Some((head, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "add" => {
                let [name, price] = args else {
                    return Err(CommandError::Usage("add <name> <starting_price>"));
                };
                Command::Add {
                    name: non_empty(name, "product name")?,
                    starting_price: price.parse()?,
                }
            }
            "bid" => {
                let [product, bidder, amount] = args else {
                    return Err(CommandError::Usage("bid <product> <bidder> <amount>"));
                };
                Command::Bid {
                    product: non_empty(product, "product name")?,
                    bidder: non_empty(bidder, "bidder name")?,
                    amount: amount.parse()?,
                }
            }
            "close" => Command::Close,
            "results" => Command::Results,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, CommandError> {
    if value.is_empty() {
        return Err(CommandError::EmptyField(field));
    }
    Ok(value.to_string())
}

/// Split on whitespace; double quotes group words and may produce an empty token.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(Command::parse("   "), Ok(None));
        assert_eq!(Command::parse(""), Ok(None));
    }

    #[test]
    fn parses_add() {
        assert_eq!(
            Command::parse("add Vase 10"),
            Ok(Some(Command::Add {
                name: "Vase".to_string(),
                starting_price: Amount::new(10.0),
            }))
        );
    }

    #[test]
    fn parses_quoted_names() {
        assert_eq!(
            Command::parse(r#"bid "Blue Vase" "Mary Ann" 12.5"#),
            Ok(Some(Command::Bid {
                product: "Blue Vase".to_string(),
                bidder: "Mary Ann".to_string(),
                amount: Amount::new(12.5),
            }))
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::parse("CLOSE"), Ok(Some(Command::Close)));
        assert_eq!(Command::parse("Quit"), Ok(Some(Command::Exit)));
    }

    #[test]
    fn wrong_arity_reports_usage() {
        assert_eq!(
            Command::parse("add Vase"),
            Err(CommandError::Usage("add <name> <starting_price>"))
        );
        assert_eq!(
            Command::parse("bid Vase Alice"),
            Err(CommandError::Usage("bid <product> <bidder> <amount>"))
        );
    }

    #[test]
    fn empty_quoted_names_are_refused() {
        assert_eq!(
            Command::parse(r#"add "" 10"#),
            Err(CommandError::EmptyField("product name"))
        );
        assert_eq!(
            Command::parse(r#"bid Vase "" 10"#),
            Err(CommandError::EmptyField("bidder name"))
        );
    }

    #[test]
    fn non_numeric_amount_is_refused() {
        let err = Command::parse("bid Vase Alice lots").unwrap_err();
        assert!(matches!(err, CommandError::InvalidAmount(_)));
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn unterminated_quote_is_refused() {
        assert_eq!(
            Command::parse(r#"add "Blue Vase 10"#),
            Err(CommandError::UnterminatedQuote)
        );
    }

    #[test]
    fn unknown_command_is_refused() {
        assert_eq!(
            Command::parse("sell Vase"),
            Err(CommandError::Unknown("sell".to_string()))
        );
    }
}
