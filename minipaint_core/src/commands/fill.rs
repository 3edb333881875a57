use log::*;

use crate::models::canvas::Canvas;
use crate::models::pixel::Pixel;
use crate::models::snapshot::Snapshot;

// the snapshot holds every pixel, undo also restores pixels no draw recorded
#[derive(Clone, Debug)]
pub struct Fill {
    color: Pixel,
    snapshot: Snapshot,
}

impl Fill {

    pub fn new(color: Pixel) -> Self {
        Fill {
            color,
            snapshot: Snapshot::new(),
        }
    }

    pub fn color(&self) -> Pixel {
        self.color
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn execute(&mut self, canvas: &mut Canvas) -> bool {
        info!("executing fill operation - this may take a moment...");

        self.snapshot = Snapshot::capture(canvas);
        canvas.fill(self.color);

        let color = self.color;
        canvas.pixels().iter().all(|pixel| *pixel == color)
    }

    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        info!("undoing fill operation - this may take a moment...");

        self.snapshot.restore(canvas)
    }
}
