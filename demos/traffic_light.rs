//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Simple state and event enumeration
//! - Unconditional (guard-free) transitions
//!
//! Run with: cargo run --example traffic_light

use std::any::Any;
use transit::{id_enum, Event, MachineBuilder, Transition};

id_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

id_enum! {
    enum Signal {
        Timer,
    }
}

struct Tick;

impl Event for Tick {
    type Kind = Signal;

    fn kind(&self) -> Signal {
        Signal::Timer
    }

    fn payload(&self) -> &dyn Any {
        &()
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    // Cyclic table: every state handles the timer signal.
    let mut machine = MachineBuilder::new()
        .initial(TrafficLight::Red)
        .transitions(vec![
            Transition::new(TrafficLight::Red, Signal::Timer, TrafficLight::Green),
            Transition::new(TrafficLight::Green, Signal::Timer, TrafficLight::Yellow),
            Transition::new(TrafficLight::Yellow, Signal::Timer, TrafficLight::Red),
        ])
        .build()
        .unwrap();

    println!("Initial state: {}\n", machine.current_state().name());

    for _ in 0..6 {
        let from = machine.current_state().name();
        machine.emit(&Tick);
        println!("  {} -> {}", from, machine.current_state().name());
    }

    println!("\nAudit trail:");
    for record in machine.log().records() {
        println!(
            "  {:?}: {} -> {}",
            record.event,
            record.from.name(),
            record.to.name()
        );
    }

    println!("\n=== Example Complete ===");
}
