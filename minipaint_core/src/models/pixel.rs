#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {

    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub fn red() -> Self {
        Self::from_rgb(255, 0, 0)
    }

    pub fn green() -> Self {
        Self::from_rgb(0, 255, 0)
    }

    pub fn blue() -> Self {
        Self::from_rgb(0, 0, 255)
    }

    pub fn yellow() -> Self {
        Self::from_rgb(255, 255, 0)
    }

    pub fn magenta() -> Self {
        Self::from_rgb(255, 0, 255)
    }

    pub fn cyan() -> Self {
        Self::from_rgb(0, 255, 255)
    }

    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, 255)
    }

    pub fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
            alpha,
        }
    }

    // 0xRRGGBBAA, as colors travel over the wire
    pub fn to_rgba_u32(&self) -> u32 {
        (self.red as u32) << 24
            | (self.green as u32) << 16
            | (self.blue as u32) << 8
            | self.alpha as u32
    }

    pub fn from_rgba_u32(value: u32) -> Self {
        Self::from_rgba(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    // 0x00RRGGBB for frame buffers, alpha is dropped
    pub fn to_0rgb_u32(&self) -> u32 {
        (self.red as u32) << 16
            | (self.green as u32) << 8
            | self.blue as u32
    }
}
