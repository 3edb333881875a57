pub mod dispatcher;
pub mod input;

pub use dispatcher::{Dispatcher, Flow, run};
pub use input::{Frontend, InputEvent, KeyAction};
