pub mod command;
pub mod draw;
pub mod fill;

pub use command::Command;
pub use draw::Draw;
pub use fill::Fill;
