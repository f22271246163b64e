pub mod events;

pub use events::StreamEvent;
