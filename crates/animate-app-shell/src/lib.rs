use std::fmt::Debug;

use animate_demos::{DemoKind, DemoView};
use animate_render_common::{
    DrawPrimitive, HitTestTarget, PointerEventKind, RenderScene, Renderer, Scene,
};
use animate_runtime_std::StdRuntime;
use animate_ui_graphics::{Dp, Size};

/// Owns the runtime and the active demo, pumps frames and routes pointer
/// input into the scene's hit regions.
pub struct AppShell<R>
where
    R: Renderer<Scene = Scene>,
{
    runtime: StdRuntime,
    demo_kind: DemoKind,
    demo: Box<dyn DemoView>,
    renderer: R,
    cursor: (f32, f32),
    pressed: Option<usize>,
    viewport: (f32, f32),
    buffer_size: (u32, u32),
    frames: u64,
}

impl<R> AppShell<R>
where
    R: Renderer<Scene = Scene>,
    R::Error: Debug,
{
    pub fn new(renderer: R, demo_kind: DemoKind) -> Self {
        let runtime = StdRuntime::new();
        let viewport = (800.0, 600.0);
        let demo = demo_kind.create(runtime.runtime_handle(), Dp(viewport.0));
        log::debug!("showing {}", demo.name());
        let mut shell = Self {
            runtime,
            demo_kind,
            demo,
            renderer,
            cursor: (0.0, 0.0),
            pressed: None,
            viewport,
            buffer_size: (800, 600),
            frames: 0,
        };
        shell.rebuild_scene();
        shell
    }

    pub fn demo_kind(&self) -> DemoKind {
        self.demo_kind
    }

    pub fn demo(&self) -> &dyn DemoView {
        self.demo.as_ref()
    }

    /// Logical size the demo lays itself out in. Its width is the screen
    /// width the motion demos aim for.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.demo.set_screen_width(Dp(width));
        self.rebuild_scene();
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer_size = (width, height);
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        self.buffer_size
    }

    pub fn scene(&self) -> &Scene {
        self.renderer.scene()
    }

    pub fn renderer(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Wakes the host event loop whenever the runtime asks for a frame.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        self.runtime.set_frame_waker(waker);
    }

    /// True while a frame was requested or an animation waits for one.
    pub fn should_render(&self) -> bool {
        self.runtime.take_frame_request() || self.runtime.has_pending_frames()
    }

    /// Runs one frame at the current wall-clock time.
    pub fn update(&mut self) {
        let frame_time = self.runtime.frame_time_nanos();
        self.update_at(frame_time);
    }

    /// Runs one frame at `frame_time_nanos`: drains frame callbacks, then
    /// redraws the demo.
    pub fn update_at(&mut self, frame_time_nanos: u64) {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
        self.frames += 1;
        self.rebuild_scene();
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
        if let Some(hit) = self.renderer.scene().hit_test(x, y) {
            hit.dispatch(PointerEventKind::Move, x, y);
        }
    }

    pub fn pointer_pressed(&mut self) {
        let (x, y) = self.cursor;
        self.pressed = self.renderer.scene().hit_test(x, y).map(|hit| {
            hit.dispatch(PointerEventKind::Down, x, y);
            hit.id()
        });
    }

    /// Clicks only when released over the region that took the press.
    pub fn pointer_released(&mut self) {
        let (x, y) = self.cursor;
        let Some(pressed) = self.pressed.take() else {
            return;
        };
        match self.renderer.scene().hit_test(x, y) {
            Some(hit) if hit.id() == pressed => hit.dispatch(PointerEventKind::Up, x, y),
            Some(hit) => hit.dispatch(PointerEventKind::Cancel, x, y),
            None => {}
        }
    }

    pub fn log_debug_info(&self) {
        log::info!("=== {} ({}) ===", self.demo.name(), self.demo_kind);
        log::info!("{}", self.demo.debug_summary());
        log::info!(
            "viewport {:.0}x{:.0}, buffer {}x{}, {} frames, animating: {}",
            self.viewport.0,
            self.viewport.1,
            self.buffer_size.0,
            self.buffer_size.1,
            self.frames,
            self.demo.is_animating()
        );
        for primitive in self.renderer.scene().primitives() {
            match primitive {
                DrawPrimitive::Rect { rect, color } => {
                    log::info!("  rect {:?} {:?}", rect, color)
                }
                DrawPrimitive::Image {
                    rect,
                    asset,
                    rotation_degrees,
                } => log::info!("  image '{}' {:?} rotated {:.1}deg", asset, rect, rotation_degrees),
                DrawPrimitive::Button { rect, label, .. } => {
                    log::info!("  button '{}' {:?}", label, rect)
                }
            }
        }
    }

    fn rebuild_scene(&mut self) {
        let viewport = Size::new(self.viewport.0, self.viewport.1);
        let demo = &self.demo;
        if let Err(err) = self
            .renderer
            .rebuild_scene(viewport, &mut |scene, size| demo.draw(scene, size))
        {
            log::error!("renderer rebuild failed: {err:?}");
        }
    }
}
