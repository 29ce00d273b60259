//! Traffic light automaton: RED -> GREEN -> YELLOW -> RED.

use crate::builder::TransitionTableBuilder;
use crate::controller::Controller;
use crate::core::TransitionTable;
use crate::machine::StateMachine;
use crate::state_enum;

state_enum! {
    /// Lamp currently lit.
    pub enum LightState {
        Red => "RED",
        Green => "GREEN",
        Yellow => "YELLOW",
    }
}

pub fn table() -> TransitionTable<LightState> {
    TransitionTableBuilder::new()
        .transition(
            LightState::Red,
            LightState::Green,
            "Switching from red light to green light.",
        )
        .transition(
            LightState::Green,
            LightState::Yellow,
            "Switching from green to yellow light.",
        )
        .transition(
            LightState::Yellow,
            LightState::Red,
            "Switching from yellow light to red light.",
        )
        .build()
        .expect("Traffic light cycle should always build")
}

/// A traffic light controller starting RED, with no bus attached.
pub fn controller() -> Controller<LightState> {
    let machine =
        StateMachine::new(LightState::Red, table()).expect("Traffic light table covers RED");
    Controller::new(machine)
}
