//! Pixels renderer backend: scenes rasterized into an RGBA8 frame buffer.

mod draw;

use std::convert::Infallible;

use animate_render_common::{RenderScene, Renderer, Scene};
use animate_ui_graphics::Size;

pub use draw::draw_scene;

/// Holds the scene the shell rebuilds each frame; [`draw_scene`] rasterizes it.
#[derive(Default)]
pub struct PixelsRenderer {
    scene: Scene,
}

impl PixelsRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for PixelsRenderer {
    type Scene = Scene;
    type Error = Infallible;

    fn scene(&self) -> &Self::Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Self::Scene {
        &mut self.scene
    }

    fn rebuild_scene(
        &mut self,
        viewport: Size,
        build: &mut dyn FnMut(&mut Self::Scene, Size),
    ) -> Result<(), Self::Error> {
        self.scene.clear();
        build(&mut self.scene, viewport);
        Ok(())
    }
}
