//! Card search example.
//!
//! This example searches for cards, prints the first two pages of results,
//! and looks up the rulings for the first match.
//!
//! Run with: cargo run --example search_cards -- "t:goblin c:r"

use std::time::Duration;

use scryfall_rs::api::SearchOptions;
use scryfall_rs::models::{SortOrder, UniqueMode};
use scryfall_rs::{ClientConfig, RequestContext};

#[tokio::main]
async fn main() -> scryfall_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "t:goblin c:r".to_string());

    let client = ClientConfig::default()
        .with_user_agent(concat!("scryfall-rs-demo/", env!("CARGO_PKG_VERSION")))
        .build()?
        .with_context(RequestContext::new().with_timeout(Duration::from_secs(60)));

    println!("Searching for {:?}...", query);

    let options = SearchOptions::new()
        .unique(UniqueMode::Cards)
        .order(SortOrder::Name);
    let first = client.cards().search(&query, &options).await?;

    println!(
        "\nFound {} card(s), showing page 1:",
        first.total_cards.unwrap_or(first.data.len() as u64)
    );
    for card in &first.data {
        println!(
            "  - {} [{}] {}",
            card.name,
            card.set.to_uppercase(),
            card.mana_cost.as_deref().unwrap_or("")
        );
    }
    for warning in &first.warnings {
        println!("  warning: {}", warning);
    }

    // Pages are only fetched on request
    if let Some(second) = client.cards().next_page(&first).await? {
        println!("\nPage 2:");
        for card in &second.data {
            println!("  - {}", card.name);
        }
    }

    if let Some(card) = first.data.first() {
        let rulings = client.rulings().for_card(&card.id).await?;
        println!("\n{} has {} ruling(s)", card.name, rulings.len());
        for ruling in rulings.iter().take(3) {
            println!("  {} ({:?}): {}", ruling.published_at, ruling.source, ruling.comment);
        }
    }

    println!("\nDone!");
    Ok(())
}
