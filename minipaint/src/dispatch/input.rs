use std::rc::Rc;

use minipaint_core::models::canvas::{Canvas, Coordinate};
use minipaint_core::models::pixel::Pixel;
use minipaint_core::paint::strategy::{PaintStrategy, SquareBrush};

pub const MIN_BRUSH_RADIUS: i32 = 1;
pub const MAX_BRUSH_RADIUS: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerReleased,
    Key(KeyAction),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Undo,
    Redo,
    Fill,
    Quit,
    SelectColor(Pixel),
    Eraser,
    SetRadius(i32),
    GrowRadius,
    ShrinkRadius,
}

pub trait Frontend {

    fn is_open(&self) -> bool;

    fn pointer_position(&self) -> Option<Coordinate>;

    fn is_pointer_down(&self) -> bool;

    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn present(&mut self, canvas: &Canvas);
}

pub struct Brush {
    pub color: Pixel,
    pub radius: i32,
    pub strategy: Rc<dyn PaintStrategy>,
}

impl Brush {

    pub fn new() -> Self {
        Brush {
            color: Pixel::black(),
            radius: MIN_BRUSH_RADIUS,
            strategy: Rc::new(SquareBrush::new()),
        }
    }

    pub fn grow(&mut self) {
        if self.radius < MAX_BRUSH_RADIUS {
            self.radius += 1;
        }
    }

    pub fn shrink(&mut self) {
        if self.radius > MIN_BRUSH_RADIUS {
            self.radius -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_stays_in_range() {
        let mut brush = Brush::new();

        brush.shrink();
        assert_eq!(brush.radius, MIN_BRUSH_RADIUS);

        for _ in 0..10 {
            brush.grow();
        }
        assert_eq!(brush.radius, MAX_BRUSH_RADIUS);
    }
}
