//! Interactive application: controller, key bindings and the terminal loop.

mod controller;
mod keys;
mod runner;

pub use controller::{Action, AppController, AppStatus};
pub use keys::KeyMap;
pub use runner::{event_loop, run, RunOptions};
