use super::events::Event;
use super::types::Command;

/// Trait for dispatching shell commands.
///
/// Interfaces (CLI, UI) dispatch through this trait and react to the returned
/// events instead of re-reading state.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit batching.
/// - **Error handling**: Implementations define their own error type.
/// - **Events**: On success, dispatch returns a `Vec<Event>` describing what
///   changed, in the order it changed.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
