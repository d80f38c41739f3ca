pub mod errors;
pub mod events;
pub mod shell;
pub mod store;
pub mod types;

pub use errors::DispatchError;
pub use events::Event;
pub use shell::Shell;
pub use store::Store;
pub use types::Command;
