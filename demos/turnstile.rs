//! Coin-Operated Turnstile
//!
//! This example demonstrates guarded transitions and the unhandled-event
//! hook.
//!
//! Key concepts:
//! - Guards gating transitions on event payloads
//! - The unhandled-event hook as an observability point
//! - Payload downcasting on the embedder's side
//!
//! Run with: cargo run --example turnstile

use std::any::Any;
use transit::{id_enum, Event, MachineBuilder, Transition};

id_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

id_enum! {
    enum Action {
        Coin,
        Push,
    }
}

struct Visitor {
    action: Action,
    cents: u32,
}

impl Event for Visitor {
    type Kind = Action;

    fn kind(&self) -> Action {
        self.action
    }

    fn payload(&self) -> &dyn Any {
        &self.cents
    }
}

fn main() {
    println!("=== Coin-Operated Turnstile ===\n");

    let mut turnstile = MachineBuilder::new()
        .initial(Turnstile::Locked)
        // A coin unlocks the turnstile, but only a full fare counts.
        .transition(Transition::guarded(
            Turnstile::Locked,
            Action::Coin,
            Turnstile::Unlocked,
            |v: &Visitor| v.cents >= 25,
        ))
        .transition(Transition::new(
            Turnstile::Unlocked,
            Action::Push,
            Turnstile::Locked,
        ))
        .on_unhandled(|v: &Visitor| {
            println!("  (ignored: {:?} makes no sense right now)", v.kind());
            false
        })
        .build()
        .unwrap();

    let attempts = [
        ("push while locked", Action::Push, 0),
        ("underpay", Action::Coin, 10),
        ("pay full fare", Action::Coin, 25),
        ("walk through", Action::Push, 0),
    ];

    for (label, action, cents) in attempts {
        let accepted = turnstile.emit(&Visitor { action, cents });
        println!(
            "{label}: {} (now {})",
            if accepted { "accepted" } else { "rejected" },
            turnstile.current_state().name()
        );
    }

    println!("\n=== Example Complete ===");
}
