//! Dex Session
//!
//! Drives a store against the live catalog from the command line.
//!
//! Arguments are processed in order:
//! - a name searches for that entity
//! - `+` levels up the current entity (`+3` levels up three times)
//! - `clear` clears the cache
//!
//! Run with: cargo run --example dex -- pikachu + + pikachu bulbasaur
//!
//! Configuration comes from `DEXSTORE_*` environment variables; set
//! `RUST_LOG=dexstore=debug` to watch cache hits and misses.

use dexstore::builder::http_store;
use dexstore::config::StoreConfig;
use dexstore::core::SessionState;

fn print_state(state: &SessionState) {
    match state.current() {
        Some(entity) => {
            println!("  {} Level: {}", entity.name, state.level);
            if let Some(sprite) = &entity.sprites.front_default {
                println!("  sprite: {sprite}");
            }
            for line in state.displayed_stats() {
                println!("    {}: {}", line.name, line.value);
            }
        }
        None => println!("  (nothing selected)"),
    }
    println!("  cached: {}", state.cache.names().collect::<Vec<_>>().join(", "));
}

fn level_ups(arg: &str) -> Option<usize> {
    let count = arg.strip_prefix('+')?;
    if count.is_empty() {
        Some(1)
    } else {
        count.parse().ok()
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = StoreConfig::from_env();
    println!("=== Dex Session ({}) ===\n", config.catalog_url);

    let store = http_store(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("Usage: dex <name | + | +N | clear>...");
        return;
    }

    for arg in args {
        if arg == "clear" {
            println!("> clear cache");
            store.clear_cache();
        } else if let Some(count) = level_ups(&arg) {
            println!("> level up x{count}");
            for _ in 0..count {
                store.level_up();
            }
        } else {
            println!("> search {arg}");
            match store.search(&arg).await {
                Ok(outcome) => println!("  {outcome:?}"),
                Err(error) => println!("  {error}"),
            }
        }
        print_state(&store.state());
        println!();
    }
}
