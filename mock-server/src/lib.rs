//! Stateful in-memory `/todos` API used by end-to-end client tests.
//!
//! The fake runs on a background thread behind a `RunningServer` handle that
//! shuts the server down when dropped.

pub mod fake;
pub mod server;

pub use fake::{app, app_with, run, start_fake, Task};
pub use server::{spawn, RunningServer};
