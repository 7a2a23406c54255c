//! Image assets for animate-state.
//!
//! Assets are generated in-process; there is no file loading. The only
//! bundled asset is the propeller drawn by the rotation demo.

use std::f32::consts::TAU;

use animate_core::hash::{new_map, FastHashMap};

pub const PROPELLER: &str = "propeller";

const PROPELLER_SIZE: u32 = 256;
const PROPELLER_BLADES: u32 = 3;

/// Straight-alpha RGBA bitmap, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl ImageBitmap {
    /// A fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let index = (y * self.width + x) as usize;
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = rgba;
        }
    }
}

/// Named image store.
pub struct AssetManager {
    images: FastHashMap<String, ImageBitmap>,
}

impl AssetManager {
    /// An empty manager.
    pub fn empty() -> Self {
        Self { images: new_map() }
    }

    /// A manager holding the bundled assets.
    pub fn new() -> Self {
        let mut assets = Self::empty();
        assets.insert(PROPELLER, propeller(PROPELLER_SIZE));
        assets
    }

    pub fn insert(&mut self, name: impl Into<String>, image: ImageBitmap) {
        let name = name.into();
        log::debug!("asset {} registered ({}x{})", name, image.width, image.height);
        self.images.insert(name, image);
    }

    pub fn get(&self, name: &str) -> Option<&ImageBitmap> {
        self.images.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Default for AssetManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Three tapered blades around a hub. The first blade points straight up so
/// a rotation is easy to see.
pub fn propeller(size: u32) -> ImageBitmap {
    let mut image = ImageBitmap::new(size, size);
    let center = size as f32 / 2.0;
    let radius = center - 1.0;
    let hub = radius * 0.18;
    let blade_color = [70, 90, 140, 255];
    let hub_color = [40, 40, 40, 255];
    let cap_color = [200, 200, 210, 255];

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > radius {
                continue;
            }
            if distance <= hub * 0.4 {
                image.put(x, y, cap_color);
                continue;
            }
            if distance <= hub {
                image.put(x, y, hub_color);
                continue;
            }
            // Angle measured clockwise from straight up, in turns.
            let angle = dx.atan2(-dy).rem_euclid(TAU) / TAU;
            let sector = (angle * PROPELLER_BLADES as f32).fract();
            let from_blade_axis = sector.min(1.0 - sector);
            let along = (distance - hub) / (radius - hub);
            let half_width = 0.09 * (1.0 - along * 0.6);
            if from_blade_axis <= half_width {
                image.put(x, y, blade_color);
            }
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_propeller_is_registered() {
        let assets = AssetManager::new();
        let image = assets.get(PROPELLER).expect("propeller asset");
        assert_eq!(image.width, PROPELLER_SIZE);
        assert_eq!(image.pixels.len(), (PROPELLER_SIZE * PROPELLER_SIZE) as usize);
        assert!(assets.get("missing").is_none());
    }

    #[test]
    fn propeller_has_opaque_hub_and_transparent_corners() {
        let image = propeller(64);
        assert_eq!(image.pixel(32, 32).map(|p| p[3]), Some(255));
        assert_eq!(image.pixel(0, 0).map(|p| p[3]), Some(0));
        assert_eq!(image.pixel(64, 0), None);
    }

    #[test]
    fn first_blade_points_up() {
        let image = propeller(64);
        let above = image.pixel(32, 6).map(|p| p[3]);
        let below = image.pixel(32, 58).map(|p| p[3]);
        assert_eq!(above, Some(255));
        assert_eq!(below, Some(0));
    }
}
