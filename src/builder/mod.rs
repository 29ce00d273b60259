//! Builder API for ergonomic transition table construction.
//!
//! This module provides a fluent builder and a macro for creating state
//! types and transition tables with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TransitionTableBuilder;

use crate::core::{State, TransitionTable};

/// Create a strictly cyclic table visiting `states` in order and wrapping
/// back to the first one. Descriptions are left empty.
///
/// # Example
///
/// ```
/// use signalbox::builder::cycle;
/// use signalbox::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// let table = cycle(vec![Light::Red, Light::Green, Light::Yellow]).unwrap();
/// assert_eq!(table.transition_from(&Light::Yellow).unwrap().to, Light::Red);
/// ```
pub fn cycle<S: State>(states: Vec<S>) -> Result<TransitionTable<S>, BuildError> {
    let Some(first) = states.first().cloned() else {
        return Err(BuildError::EmptyTable);
    };

    let successors = states.iter().skip(1).cloned().chain(std::iter::once(first));
    states
        .iter()
        .cloned()
        .zip(successors)
        .fold(TransitionTableBuilder::new(), |builder, (from, to)| {
            builder.transition(from, to, "")
        })
        .build()
}
