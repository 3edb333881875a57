use super::canvas::{Canvas, Coordinate};
use super::pixel::Pixel;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<(Coordinate, Pixel)>,
}

impl Snapshot {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(canvas: &Canvas) -> Self {
        Snapshot {
            entries: canvas.coordinates().zip(canvas.pixels().iter().cloned()).collect(),
        }
    }

    pub fn record(&mut self, coordinate: Coordinate, prior: Pixel) {
        self.entries.push((coordinate, prior));
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<Pixel> {
        self.entries.iter()
            .find(|(recorded, _)| *recorded == coordinate)
            .map(|(_, pixel)| *pixel)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=&(Coordinate, Pixel)> {
        self.entries.iter()
    }

    pub fn restore(&self, canvas: &mut Canvas) -> bool {
        let mut restored = true;

        for (coordinate, prior) in self.entries.iter() {
            canvas.set(*coordinate, *prior);
            if canvas.get(*coordinate) != Some(*prior) {
                restored = false;
            }
        }

        restored
    }
}
