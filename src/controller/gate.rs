//! Parking gate automaton.
//!
//! The gate cycles CLOSED -> OPENING -> OPEN -> CLOSING -> CLOSED, one step
//! per request.

use crate::builder::TransitionTableBuilder;
use crate::controller::Controller;
use crate::core::{TransitionRecord, TransitionTable};
use crate::machine::{MachineError, StateMachine};
use crate::state_enum;

state_enum! {
    /// Position of a parking gate.
    pub enum GateState {
        Closed => "CLOSED",
        Opening => "OPENING",
        Open => "OPEN",
        Closing => "CLOSING",
    }
}

/// The gate cycle.
pub fn table() -> TransitionTable<GateState> {
    TransitionTableBuilder::new()
        .transition(
            GateState::Closed,
            GateState::Opening,
            "Gate is closed. Initiating opening process.",
        )
        .transition(
            GateState::Opening,
            GateState::Open,
            "Gate is opening... now fully open.",
        )
        .transition(
            GateState::Open,
            GateState::Closing,
            "Gate is open. Allowing vehicle entry or exit.",
        )
        .transition(
            GateState::Closing,
            GateState::Closed,
            "Gate is closing... now fully closed.",
        )
        .build()
        .expect("Gate cycle should always build")
}

/// A gate controller starting CLOSED, with no bus attached.
pub fn controller() -> Controller<GateState> {
    let machine =
        StateMachine::new(GateState::Closed, table()).expect("Gate table covers CLOSED");
    Controller::new(machine)
}

/// A gate controller starting CLOSED that keeps only the most recent
/// `limit` transitions in its history.
pub fn controller_with_history(limit: usize) -> Controller<GateState> {
    let machine = StateMachine::new(GateState::Closed, table())
        .expect("Gate table covers CLOSED")
        .with_history_limit(limit);
    Controller::new(machine)
}

/// Let one vehicle through.
///
/// Drives the gate to OPEN (skipped if it already is), runs `while_open`,
/// then drives it back to CLOSED. From CLOSED this is four requests.
pub fn pass_vehicle<F>(
    gate: &Controller<GateState>,
    while_open: F,
) -> Result<Vec<TransitionRecord<GateState>>, MachineError>
where
    F: FnOnce(),
{
    let mut records = Vec::new();
    if gate.current_state() != GateState::Open {
        records.extend(gate.request_until(&GateState::Open)?);
    }
    while_open();
    records.extend(gate.request_until(&GateState::Closed)?);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn gate_names_are_upper_case() {
        assert_eq!(GateState::Closed.name(), "CLOSED");
        assert_eq!(GateState::Opening.name(), "OPENING");
        assert_eq!(GateState::Open.name(), "OPEN");
        assert_eq!(GateState::Closing.name(), "CLOSING");
    }

    #[test]
    fn four_requests_close_the_cycle() {
        let gate = controller();

        let states: Vec<GateState> = (0..4).map(|_| gate.request().unwrap().to).collect();

        assert_eq!(
            states,
            vec![
                GateState::Opening,
                GateState::Open,
                GateState::Closing,
                GateState::Closed
            ]
        );
    }

    #[test]
    fn pass_vehicle_runs_full_cycle() {
        let gate = controller();
        let mut seen = None;

        let records = pass_vehicle(&gate, || seen = Some(gate.current_state())).unwrap();

        assert_eq!(seen, Some(GateState::Open));
        assert_eq!(records.len(), 4);
        assert_eq!(gate.current_state(), GateState::Closed);
        assert_eq!(records[0].to_string(), "CLOSED->OPENING");
        assert_eq!(records[3].to_string(), "CLOSING->CLOSED");
    }

    #[test]
    fn pass_vehicle_uses_already_open_gate() {
        let gate = controller();
        gate.request().unwrap();
        gate.request().unwrap();

        let records = pass_vehicle(&gate, || {}).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(gate.current_state(), GateState::Closed);
    }

    #[test]
    fn bounded_gate_keeps_last_cycle() {
        let gate = controller_with_history(4);

        for _ in 0..3 {
            pass_vehicle(&gate, || {}).unwrap();
        }

        let history = gate.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history.limit(), Some(4));
        assert_eq!(history.transitions()[0].step, 9);
        assert_eq!(gate.steps(), 12);
    }

    #[test]
    fn history_tracks_previous_state() {
        let gate = controller();
        gate.request().unwrap();
        gate.request().unwrap();

        assert_eq!(gate.history().previous_state(), Some(&GateState::Opening));
    }
}
