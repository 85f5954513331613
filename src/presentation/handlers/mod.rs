mod event;
mod health;

pub use event::{COMPLETION_MESSAGE, StorageEvent, event_handler};
pub use health::health_handler;
