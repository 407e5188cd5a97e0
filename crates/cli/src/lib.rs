//! Console adapter.
//!
//! Everything interactive lives here: the menu loop, the prompts, and the
//! mapping from domain errors to user-facing messages. The adapter is
//! generic over its reader/writer pair so tests can script whole sessions
//! against in-memory buffers.

pub mod console;
pub mod seed;

pub use console::Console;
pub use seed::seed_demo_data;
