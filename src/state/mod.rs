//! Application state module

mod app_state;
mod catalog;
mod choices;
mod controller;
mod forms;
mod hints;

pub use app_state::*;
pub use catalog::*;
pub use choices::*;
pub use controller::*;
pub use forms::*;
pub use hints::*;
