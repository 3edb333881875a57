use std::rc::Rc;

use crate::models::canvas::{Canvas, Coordinate};
use crate::models::pixel::Pixel;
use crate::paint::strategy::PaintStrategy;

use super::draw::Draw;
use super::fill::Fill;

#[derive(Clone)]
pub enum Command {
    Draw(Draw),
    Fill(Fill),
}

impl Command {

    pub fn draw(center: Coordinate, radius: i32, color: Pixel, strategy: Rc<dyn PaintStrategy>) -> Self {
        Command::Draw(Draw::new(center, radius, color, strategy))
    }

    pub fn fill(color: Pixel) -> Self {
        Command::Fill(Fill::new(color))
    }

    pub fn execute(&mut self, canvas: &mut Canvas) -> bool {
        match self {
            Command::Draw(draw) => draw.execute(canvas),
            Command::Fill(fill) => fill.execute(canvas),
        }
    }

    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        match self {
            Command::Draw(draw) => draw.undo(canvas),
            Command::Fill(fill) => fill.undo(canvas),
        }
    }

    pub fn position(&self) -> Option<Coordinate> {
        match self {
            Command::Draw(draw) => Some(draw.center()),
            Command::Fill(_) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Draw(_) => "draw",
            Command::Fill(_) => "fill",
        }
    }
}

impl std::fmt::Debug for Command {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Draw(draw) => f.debug_struct("Draw")
                .field("center", &draw.center())
                .field("radius", &draw.radius())
                .field("color", &draw.color())
                .finish(),
            Command::Fill(fill) => f.debug_struct("Fill")
                .field("color", &fill.color())
                .finish(),
        }
    }
}
