pub mod canvas;
pub mod pixel;
pub mod snapshot;
