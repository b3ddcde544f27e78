//! Application layer - Use cases and orchestration

pub mod buffer;
pub mod dispatcher;
pub mod notifier;
pub mod store;

pub use buffer::{Buffer, ExportOutcome};
pub use dispatcher::{CommandDispatcher, Flow};
pub use notifier::Notifier;
pub use store::FileStore;
