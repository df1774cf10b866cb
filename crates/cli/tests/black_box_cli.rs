use auctionhouse_auction::Auction;

fn run_script(script: &str) -> (Auction, Vec<String>) {
    let mut auction = Auction::new();
    let mut out = Vec::new();
    auctionhouse_cli::run(&mut auction, script.as_bytes(), &mut out, "")
        .expect("in-memory session should not fail");
    let text = String::from_utf8(out).expect("output is utf-8");
    (auction, text.lines().map(str::to_string).collect())
}

#[test]
fn full_auction_session() {
    let script = "\
add Vase 10
add \"Oak Table\" 120.50
bid Vase Alice 15
bid Vase Bob 12
bid Vase Bob 15
bid Lamp Carol 5
bid \"Oak Table\" Dana 121
close
exit
";
    let (_, lines) = run_script(script);

    assert_eq!(
        lines,
        vec![
            "Welcome to the Auction System (type 'help' for commands)",
            "Added product 'Vase' with starting price $10.0.",
            "Added product 'Oak Table' with starting price $120.5.",
            "Bid placed by Alice for $15.0.",
            "Bid too low. Please place a higher bid.",
            "Bid too low. Please place a higher bid.",
            "Product not found.",
            "Bid placed by Dana for $121.0.",
            "Vase: Sold to Alice for $15.0",
            "Oak Table: Sold to Dana for $121.0",
            "Goodbye.",
        ]
    );
}

#[test]
fn end_of_input_ends_session() {
    let (auction, lines) = run_script("add Vase 10\nclose\n");
    assert_eq!(auction.catalog().len(), 1);
    assert_eq!(lines.last().map(String::as_str), Some("Goodbye."));
    assert!(lines.contains(&"Vase: No bids. Unsold.".to_string()));
}

#[test]
fn invalid_amounts_never_reach_the_auction() {
    let (auction, lines) = run_script("add Vase ten\nadd Vase inf\n");
    assert!(auction.catalog().is_empty());
    assert!(lines.iter().any(|l| l.contains("'ten' is not a number")));
    assert!(lines.iter().any(|l| l.contains("'inf' is not a finite amount")));
}

#[test]
fn results_command_prints_json() {
    let (_, lines) = run_script("add Vase 10\nbid Vase Alice 11\nresults\n");
    let json_text = lines[3..lines.len() - 1].join("\n");
    let json: serde_json::Value = serde_json::from_str(&json_text).expect("valid json");

    assert_eq!(
        json,
        serde_json::json!([
            { "name": "Vase", "status": "sold", "bidder": "Alice", "amount": 11.0 }
        ])
    );
}
