use std::collections::HashSet;
use std::sync::Mutex;

use animate_assets::{AssetManager, ImageBitmap};
use animate_render_common::{DrawPrimitive, Scene};
use animate_ui_graphics::{Color, Rect};
use once_cell::sync::Lazy;

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
const PLACEHOLDER: Color = Color::LIGHT_GRAY;
const BUTTON_CORNER_RADIUS: f32 = 4.0;

static WARNED_MISSING_ASSETS: Lazy<Mutex<HashSet<String>>> =
    Lazy::new(|| Mutex::new(HashSet::new()));

/// Rasterizes `scene` (logical pixels) into `frame`, an RGBA8 buffer of
/// `width * height` physical pixels.
pub fn draw_scene(
    frame: &mut [u8],
    width: u32,
    height: u32,
    scene: &Scene,
    assets: &AssetManager,
    scale_factor: f32,
) {
    let mut canvas = Canvas {
        frame,
        width,
        height,
    };
    canvas.clear(BACKGROUND);

    for primitive in scene.primitives() {
        match primitive {
            DrawPrimitive::Rect { rect, color } => {
                canvas.fill_rect(scale_rect(*rect, scale_factor), *color);
            }
            DrawPrimitive::Image {
                rect,
                asset,
                rotation_degrees,
            } => {
                let rect = scale_rect(*rect, scale_factor);
                match assets.get(asset) {
                    Some(image) => canvas.draw_image(rect, image, *rotation_degrees),
                    None => {
                        warn_missing_asset(asset);
                        canvas.fill_rect(rect, PLACEHOLDER);
                    }
                }
            }
            DrawPrimitive::Button { rect, color, .. } => {
                canvas.fill_rounded_rect(
                    scale_rect(*rect, scale_factor),
                    BUTTON_CORNER_RADIUS * scale_factor,
                    *color,
                );
            }
        }
    }
}

fn warn_missing_asset(name: &str) {
    let mut warned = match WARNED_MISSING_ASSETS.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if warned.insert(name.to_string()) {
        log::warn!("image asset '{}' not found; drawing placeholder", name);
    }
}

fn scale_rect(rect: Rect, scale: f32) -> Rect {
    Rect::new(
        rect.x * scale,
        rect.y * scale,
        rect.width * scale,
        rect.height * scale,
    )
}

struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl Canvas<'_> {
    fn clear(&mut self, rgba: [u8; 4]) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Pixel-center coverage range of `rect`, clipped to the frame.
    fn span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let left = rect.x.round().max(0.0);
        let top = rect.y.round().max(0.0);
        let right = rect.right().round().min(self.width as f32);
        let bottom = rect.bottom().round().min(self.height as f32);
        if right <= left || bottom <= top {
            return None;
        }
        Some((left as u32, top as u32, right as u32, bottom as u32))
    }

    fn blend(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let index = ((y * self.width + x) * 4) as usize;
        let Some(dst) = self.frame.get_mut(index..index + 4) else {
            return;
        };
        match rgba[3] {
            0 => {}
            255 => dst.copy_from_slice(&rgba),
            alpha => {
                let a = alpha as u32;
                for channel in 0..3 {
                    let src = rgba[channel] as u32;
                    let old = dst[channel] as u32;
                    dst[channel] = ((src * a + old * (255 - a) + 127) / 255) as u8;
                }
                dst[3] = 255;
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((left, top, right, bottom)) = self.span(rect) else {
            return;
        };
        let rgba = color.to_rgba_u8();
        for y in top..bottom {
            for x in left..right {
                self.blend(x, y, rgba);
            }
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let Some((left, top, right, bottom)) = self.span(rect) else {
            return;
        };
        let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        let rgba = color.to_rgba_u8();
        for y in top..bottom {
            for x in left..right {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                // Distance past the inner rectangle shrunk by the radius.
                let dx = (rect.x + radius - px).max(px - (rect.right() - radius)).max(0.0);
                let dy = (rect.y + radius - py).max(py - (rect.bottom() - radius)).max(0.0);
                if dx * dx + dy * dy <= radius * radius {
                    self.blend(x, y, rgba);
                }
            }
        }
    }

    /// Nearest-neighbour draw of `image` stretched into `rect` and rotated
    /// clockwise about the rect's center.
    fn draw_image(&mut self, rect: Rect, image: &ImageBitmap, rotation_degrees: f32) {
        if image.width == 0 || image.height == 0 || rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let center = rect.center();
        let (sin, cos) = rotation_degrees.to_radians().sin_cos();
        let half_w = rect.width / 2.0;
        let half_h = rect.height / 2.0;
        let extent_x = half_w * cos.abs() + half_h * sin.abs();
        let extent_y = half_w * sin.abs() + half_h * cos.abs();
        let bounds = Rect::new(
            center.x - extent_x,
            center.y - extent_y,
            extent_x * 2.0,
            extent_y * 2.0,
        );
        let Some((left, top, right, bottom)) = self.span(bounds) else {
            return;
        };

        for y in top..bottom {
            for x in left..right {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                // Inverse rotation back into the unrotated rect.
                let local_x = dx * cos + dy * sin + half_w;
                let local_y = -dx * sin + dy * cos + half_h;
                if local_x < 0.0 || local_y < 0.0 || local_x >= rect.width || local_y >= rect.height
                {
                    continue;
                }
                let u = (local_x / rect.width * image.width as f32) as u32;
                let v = (local_y / rect.height * image.height as f32) as u32;
                if let Some(rgba) = image.pixel(u.min(image.width - 1), v.min(image.height - 1)) {
                    self.blend(x, y, rgba);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let index = ((y * width + x) * 4) as usize;
        [frame[index], frame[index + 1], frame[index + 2], frame[index + 3]]
    }

    fn marker_image() -> ImageBitmap {
        // Red top half, blue bottom half.
        let mut image = ImageBitmap::new(4, 4);
        for (index, pixel) in image.pixels.iter_mut().enumerate() {
            *pixel = if index < 8 {
                [255, 0, 0, 255]
            } else {
                [0, 0, 255, 255]
            };
        }
        image
    }

    #[test]
    fn clears_to_white_and_fills_clipped_rects() {
        let mut frame = vec![0u8; 10 * 10 * 4];
        let mut scene = Scene::new();
        scene.push_rect(Rect::new(5.0, 5.0, 20.0, 20.0), Color::BLACK);
        draw_scene(&mut frame, 10, 10, &scene, &AssetManager::empty(), 1.0);
        assert_eq!(pixel(&frame, 10, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&frame, 10, 9, 9), [0, 0, 0, 255]);
        assert_eq!(pixel(&frame, 10, 4, 9), [255, 255, 255, 255]);
    }

    #[test]
    fn scale_factor_maps_logical_to_physical() {
        let mut frame = vec![0u8; 10 * 10 * 4];
        let mut scene = Scene::new();
        scene.push_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::BLACK);
        draw_scene(&mut frame, 10, 10, &scene, &AssetManager::empty(), 2.0);
        assert_eq!(pixel(&frame, 10, 3, 3), [0, 0, 0, 255]);
        assert_eq!(pixel(&frame, 10, 4, 4), [255, 255, 255, 255]);
    }

    #[test]
    fn image_rotation_turns_about_center() {
        let mut assets = AssetManager::empty();
        assets.insert("marker", marker_image());

        let mut upright = vec![0u8; 8 * 8 * 4];
        let mut scene = Scene::new();
        scene.push_image(Rect::new(0.0, 0.0, 8.0, 8.0), "marker", 0.0);
        draw_scene(&mut upright, 8, 8, &scene, &assets, 1.0);
        assert_eq!(pixel(&upright, 8, 4, 1), [255, 0, 0, 255]);
        assert_eq!(pixel(&upright, 8, 4, 6), [0, 0, 255, 255]);

        let mut flipped = vec![0u8; 8 * 8 * 4];
        let mut scene = Scene::new();
        scene.push_image(Rect::new(0.0, 0.0, 8.0, 8.0), "marker", 180.0);
        draw_scene(&mut flipped, 8, 8, &scene, &assets, 1.0);
        assert_eq!(pixel(&flipped, 8, 4, 1), [0, 0, 255, 255]);
        assert_eq!(pixel(&flipped, 8, 4, 6), [255, 0, 0, 255]);

        let mut quarter = vec![0u8; 8 * 8 * 4];
        let mut scene = Scene::new();
        scene.push_image(Rect::new(0.0, 0.0, 8.0, 8.0), "marker", 90.0);
        draw_scene(&mut quarter, 8, 8, &scene, &assets, 1.0);
        // Clockwise: the red top half ends up on the right.
        assert_eq!(pixel(&quarter, 8, 6, 4), [255, 0, 0, 255]);
        assert_eq!(pixel(&quarter, 8, 1, 4), [0, 0, 255, 255]);
    }

    #[test]
    fn missing_asset_draws_placeholder() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut scene = Scene::new();
        scene.push_image(Rect::new(0.0, 0.0, 4.0, 4.0), "nowhere", 45.0);
        draw_scene(&mut frame, 4, 4, &scene, &AssetManager::empty(), 1.0);
        assert_eq!(pixel(&frame, 4, 2, 2), PLACEHOLDER.to_rgba_u8());
    }

    #[test]
    fn buttons_have_rounded_corners() {
        let mut frame = vec![0u8; 40 * 20 * 4];
        let mut scene = Scene::new();
        let action: animate_render_common::ClickAction = Rc::new(RefCell::new(|| {}));
        scene.push_button(Rect::new(0.0, 0.0, 40.0, 20.0), "Go", Color::BLACK, action);
        draw_scene(&mut frame, 40, 20, &scene, &AssetManager::empty(), 1.0);
        assert_eq!(pixel(&frame, 40, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&frame, 40, 20, 10), [0, 0, 0, 255]);
        assert_eq!(pixel(&frame, 40, 4, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn translucent_colors_blend_over_background() {
        let mut frame = vec![0u8; 2 * 2 * 4];
        let mut scene = Scene::new();
        scene.push_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::BLACK.with_alpha(0.5));
        draw_scene(&mut frame, 2, 2, &scene, &AssetManager::empty(), 1.0);
        let [r, g, b, a] = pixel(&frame, 2, 0, 0);
        assert!(r > 120 && r < 135, "r = {r}");
        assert_eq!((r, g, b, a), (r, r, r, 255));
    }
}
