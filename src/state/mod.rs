//! Application state module

mod forms;
mod reset_timer;

pub use forms::*;
pub use reset_timer::*;
