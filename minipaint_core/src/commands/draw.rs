use std::rc::Rc;

use crate::models::canvas::{Canvas, Coordinate};
use crate::models::pixel::Pixel;
use crate::models::snapshot::Snapshot;
use crate::paint::strategy::PaintStrategy;

#[derive(Clone)]
pub struct Draw {
    center: Coordinate,
    radius: i32,
    color: Pixel,
    strategy: Rc<dyn PaintStrategy>,
    snapshot: Snapshot,
    prior_color: Option<Pixel>,
}

impl Draw {

    pub fn new(center: Coordinate, radius: i32, color: Pixel, strategy: Rc<dyn PaintStrategy>) -> Self {
        Draw {
            center,
            radius,
            color,
            strategy,
            snapshot: Snapshot::new(),
            prior_color: None,
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn color(&self) -> Pixel {
        self.color
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    // only the center is checked, not the whole neighborhood
    pub fn execute(&mut self, canvas: &mut Canvas) -> bool {
        self.prior_color = canvas.get(self.center);
        self.snapshot = self.strategy.paint(canvas, self.color, self.radius, self.center);
        canvas.get(self.center) == Some(self.color)
    }

    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        self.snapshot.restore(canvas);
        canvas.get(self.center) == self.prior_color
    }
}
