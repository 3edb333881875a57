use crate::models::canvas::{Canvas, Coordinate};
use crate::models::pixel::Pixel;
use crate::models::snapshot::Snapshot;

pub trait PaintStrategy {

    fn paint(&self, canvas: &mut Canvas, color: Pixel, radius: i32, center: Coordinate) -> Snapshot;
}

impl<F> PaintStrategy for F where F: Fn(&mut Canvas, Pixel, i32, Coordinate) -> Snapshot {

    fn paint(&self, canvas: &mut Canvas, color: Pixel, radius: i32, center: Coordinate) -> Snapshot {
        self(canvas, color, radius, center)
    }
}

pub struct SquareBrush {
}

impl SquareBrush {

    pub fn new() -> Self {
        SquareBrush {}
    }
}

impl PaintStrategy for SquareBrush {

    fn paint(&self, canvas: &mut Canvas, color: Pixel, radius: i32, center: Coordinate) -> Snapshot {
        let mut snapshot = Snapshot::new();

        // the square is intersected with the canvas first, wire values can be anything
        let (x0, x1) = clip(center.x, radius, canvas.width());
        let (y0, y1) = clip(center.y, radius, canvas.height());

        for x in x0..x1 {
            for y in y0..y1 {
                let coordinate = Coordinate::new(x, y);
                if let Some(prior) = canvas.get(coordinate) {
                    snapshot.record(coordinate, prior);
                    canvas.set(coordinate, color);
                }
            }
        }

        snapshot
    }
}

fn clip(center: i32, radius: i32, size: usize) -> (i32, i32) {
    let start = (center as i64 - radius as i64).max(0);
    let end = (center as i64 + radius as i64).min(size as i64);

    if start >= end {
        (0, 0)
    } else {
        (start as i32, end as i32)
    }
}
