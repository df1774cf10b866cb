//! Read-eval-print loop over any line source.

use std::io::{self, BufRead, Write};

use auctionhouse_auction::{Auction, BidOutcome};

use crate::command::{Command, HELP};

/// Drive `auction` from `input` until `exit` or end of input.
///
/// Bad commands are reported on `output` and the loop carries on; only I/O
/// failures end it early.
pub fn run<R: BufRead, W: Write>(
    auction: &mut Auction,
    input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()> {
    writeln!(output, "Welcome to the Auction System (type 'help' for commands)")?;

    let mut lines = input.lines();
    loop {
        if !prompt.is_empty() {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(input = %line, error = %e, "command rejected");
                writeln!(output, "Error: {e}")?;
                continue;
            }
        };

        if command == Command::Exit {
            break;
        }
        execute(auction, command, &mut output)?;
    }

    writeln!(output, "Goodbye.")?;
    output.flush()
}

fn execute<W: Write>(auction: &mut Auction, command: Command, output: &mut W) -> io::Result<()> {
    match command {
        Command::Add {
            name,
            starting_price,
        } => {
            auction.add_product(&name, starting_price);
            writeln!(
                output,
                "Added product '{name}' with starting price ${starting_price}."
            )
        }
        Command::Bid {
            product,
            bidder,
            amount,
        } => match auction.place_bid(&product, &bidder, amount) {
            BidOutcome::Accepted => writeln!(output, "Bid placed by {bidder} for ${amount}."),
            BidOutcome::Rejected(reason) => writeln!(output, "{reason}"),
        },
        Command::Close => {
            if auction.catalog().is_empty() {
                writeln!(output, "No products.")
            } else {
                writeln!(output, "{}", auction.close_and_report())
            }
        }
        Command::Results => {
            let json = serde_json::to_string_pretty(&auction.results()).map_err(io::Error::other)?;
            writeln!(output, "{json}")
        }
        Command::Help => writeln!(output, "{HELP}"),
        Command::Exit => Ok(()),
    }
}
