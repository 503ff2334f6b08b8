//! Counter
//!
//! This example derives creators, action types and a reducer for a small
//! counter, then folds a handful of actions through the reducer the way a
//! store would.
//!
//! Key concepts:
//! - Payload-free and payload-taking handlers
//! - Actions from other namespaces are ignored
//! - Undecodable payloads leave the state unchanged
//!
//! Run with: RUST_LOG=debug cargo run --example counter

use instant_reducer::{combine_handlers, Action, HandlerMap};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct Counter {
    count: i64,
    title: String,
}

#[derive(Serialize, Deserialize)]
struct Delta {
    delta: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counter Example ===\n");

    let handlers = HandlerMap::builder()
        .on_payload("increment", |state: Counter, payload: Delta| Counter {
            count: state.count + payload.delta,
            ..state
        })
        .on("reset", |state: Counter| Counter { count: 0, ..state })
        .on_payload("title", |state: Counter, title: String| Counter { title, ..state })
        .build()?;

    let counter = combine_handlers(
        "Counter",
        || Counter {
            count: 0,
            title: "Counter".to_string(),
        },
        handlers,
    );

    for (key, tag) in counter.action_types.iter() {
        println!("{key:>10} -> {tag}");
    }
    println!();

    let actions = vec![
        counter.actions.create_with("increment", Delta { delta: 2 })?,
        counter.actions.create_with("increment", Delta { delta: 5 })?,
        counter.actions.create_with("title", "Clicks")?,
        Action::with_payload("OtherCounter/increment", json!({ "delta": 100 })),
        Action::with_payload("Counter/increment", json!("not a delta")),
        counter.actions.create("reset")?,
    ];

    let mut state = None;
    for action in &actions {
        let next = counter.reducer.reduce(state, action);
        println!("{:<40} => {next:?}", serde_json::to_string(action)?);
        state = Some(next);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
