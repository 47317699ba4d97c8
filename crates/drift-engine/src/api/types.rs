use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 8-bit RGB color triple.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Night sky behind the snowfall.
    pub const BACKGROUND: Rgb = Rgb::new(10, 10, 40);
    /// Settled snow.
    pub const SNOW: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to 0.0-1.0, as consumed by canvas/GPU backends.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Packed little-endian RGBA8 with full opacity.
    pub fn to_rgba_u32(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, 0xFF])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_constants() {
        assert_eq!(Rgb::BACKGROUND, Rgb::new(10, 10, 40));
        assert_eq!(Rgb::SNOW, Rgb::new(255, 255, 255));
    }

    #[test]
    fn rgba_packing_is_byte_ordered() {
        let bytes = Rgb::new(1, 2, 3).to_rgba_u32().to_le_bytes();
        assert_eq!(bytes, [1, 2, 3, 255]);
    }

    #[test]
    fn unit_channels() {
        assert_eq!(Rgb::SNOW.to_unit(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::default().to_unit(), [0.0, 0.0, 0.0]);
    }
}
