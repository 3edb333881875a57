use super::pixel::Pixel;

// signed, brush neighborhoods reach past zero before they are clipped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {

    pub fn new(x: i32, y: i32) -> Self {
        Coordinate {
            x,
            y,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>, // starting at top left pixel of the canvas, pos = y * width + x
}

impl Canvas {

    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Pixel::white())
    }

    pub fn filled(width: usize, height: usize, background: Pixel) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && (coordinate.x as usize) < self.width
            && (coordinate.y as usize) < self.height
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<Pixel> {
        self.offset(coordinate).map(|offset| self.pixels[offset])
    }

    pub fn set(&mut self, coordinate: Coordinate, pixel: Pixel) -> bool {
        match self.offset(coordinate) {
            Some(offset) => {
                self.pixels[offset] = pixel;
                true
            },
            None => false,
        }
    }

    pub fn fill(&mut self, color: Pixel) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }

    pub fn coordinates(&self) -> impl Iterator<Item=Coordinate> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn to_frame_buffer(&self) -> Vec<u32> {
        self.pixels.iter().map(|pixel| pixel.to_0rgb_u32()).collect()
    }

    fn offset(&self, coordinate: Coordinate) -> Option<usize> {
        if self.contains(coordinate) {
            Some(coordinate.y as usize * self.width + coordinate.x as usize)
        } else {
            None
        }
    }
}
