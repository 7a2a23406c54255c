#![deny(missing_docs)]

//! Opens a window and runs one of the animation demos in it.

#[cfg(not(feature = "desktop"))]
compile_error!("animate-app must be built with the `desktop` feature enabled.");

#[cfg(not(feature = "renderer-pixels"))]
compile_error!("animate-app currently requires the `renderer-pixels` feature.");

mod error;

pub use animate_demos::DemoKind;
pub use error::AppError;

use animate_app_shell::AppShell;
use animate_assets::AssetManager;
use animate_platform_desktop_winit::DesktopWinitPlatform;
use animate_render_pixels::{draw_scene, PixelsRenderer};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

/// Builder used to configure and launch the demo window.
#[derive(Debug, Clone, Default)]
pub struct AnimateAppBuilder {
    options: AnimateAppOptions,
}

impl AnimateAppBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = title.into();
        self
    }

    /// Sets the initial logical size of the window.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.options.initial_size = (width, height);
        self
    }

    /// Selects the demo to show.
    pub fn demo(mut self, demo: DemoKind) -> Self {
        self.options.demo = demo;
        self
    }

    /// The options collected so far.
    pub fn options(&self) -> &AnimateAppOptions {
        &self.options
    }

    /// Opens the window and runs the event loop. Returns only when the
    /// window or its surface cannot be created.
    pub fn run(self) -> Result<(), AppError> {
        run_pixels_app(self.options)
    }
}

/// Options used to configure the demo window.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimateAppOptions {
    title: String,
    initial_size: (u32, u32),
    demo: DemoKind,
}

impl Default for AnimateAppOptions {
    fn default() -> Self {
        Self {
            title: "Animate State".to_string(),
            initial_size: (800, 600),
            demo: DemoKind::Transition,
        }
    }
}

impl AnimateAppOptions {
    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = (width, height);
        self
    }

    /// Selects the demo to show.
    pub fn with_demo(mut self, demo: DemoKind) -> Self {
        self.demo = demo;
        self
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Initial window size in logical pixels.
    pub fn initial_size(&self) -> (u32, u32) {
        self.initial_size
    }

    /// Demo shown in the window.
    pub fn demo(&self) -> DemoKind {
        self.demo
    }
}

/// Launches the demo window with the given options.
pub fn animate_app_with_options(options: AnimateAppOptions) -> Result<(), AppError> {
    run_pixels_app(options)
}

fn run_pixels_app(options: AnimateAppOptions) -> Result<(), AppError> {
    let event_loop = EventLoopBuilder::<()>::with_user_event().build();
    let frame_proxy = event_loop.create_proxy();

    let (initial_width, initial_height) = options.initial_size;
    let window = WindowBuilder::new()
        .with_title(options.title.clone())
        .with_inner_size(LogicalSize::new(
            initial_width as f64,
            initial_height as f64,
        ))
        .build(&event_loop)
        .map_err(AppError::Window)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels =
        Pixels::new(size.width, size.height, surface_texture).map_err(AppError::Surface)?;

    let assets = AssetManager::new();
    let mut platform = DesktopWinitPlatform::new(window.scale_factor());
    let mut app = AppShell::new(PixelsRenderer::new(), options.demo);
    log::info!(
        "running {} demo in a {}x{} window",
        options.demo,
        size.width,
        size.height
    );

    app.set_frame_waker({
        let proxy = frame_proxy.clone();
        move || {
            let _ = proxy.send_event(());
        }
    });

    resize_app(&mut app, &platform, size);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = resize_pixels(&mut pixels, new_size) {
                        log::error!("{err}");
                        *control_flow = ControlFlow::ExitWithCode(1);
                        return;
                    }
                    resize_app(&mut app, &platform, new_size);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor,
                    new_inner_size,
                } => {
                    platform.set_scale_factor(scale_factor);
                    if let Err(err) = resize_pixels(&mut pixels, *new_inner_size) {
                        log::error!("{err}");
                        *control_flow = ControlFlow::ExitWithCode(1);
                        return;
                    }
                    resize_app(&mut app, &platform, *new_inner_size);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let logical = platform.pointer_position(position);
                    app.set_cursor(logical.x, logical.y);
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => app.pointer_pressed(),
                    ElementState::Released => app.pointer_released(),
                },
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed
                        && input.virtual_keycode == Some(VirtualKeyCode::D)
                    {
                        app.log_debug_info();
                    }
                }
                _ => {}
            },
            ref boundary if is_frame_boundary(boundary) => {
                if app.should_render() {
                    window.request_redraw();
                    *control_flow = ControlFlow::Poll;
                }
            }
            Event::RedrawRequested(_) => {
                app.update();

                let (buffer_width, buffer_height) = app.buffer_size();
                let scale = platform.scale_factor() as f32;
                draw_scene(
                    pixels.frame_mut(),
                    buffer_width,
                    buffer_height,
                    app.scene(),
                    &assets,
                    scale,
                );
                if let Err(err) = pixels.render() {
                    log::error!("pixels render failed: {err}");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            _ => {}
        }
    });
}

fn resize_pixels(pixels: &mut Pixels, size: PhysicalSize<u32>) -> Result<(), String> {
    if size.width == 0 || size.height == 0 {
        return Ok(());
    }
    pixels
        .resize_surface(size.width, size.height)
        .map_err(|err| format!("failed to resize surface: {err}"))?;
    pixels
        .resize_buffer(size.width, size.height)
        .map_err(|err| format!("failed to resize buffer: {err}"))
}

fn resize_app(
    app: &mut AppShell<PixelsRenderer>,
    platform: &DesktopWinitPlatform,
    size: PhysicalSize<u32>,
) {
    if size.width == 0 || size.height == 0 {
        return;
    }
    app.set_buffer_size(size.width, size.height);
    let logical = platform.logical_size(size);
    app.set_viewport(logical.width, logical.height);
}

/// Events after which the loop decides whether to keep polling. Every event
/// resets the flow to `Wait`, so the last one of an iteration must be here.
fn is_frame_boundary(event: &Event<'_, ()>) -> bool {
    matches!(
        event,
        Event::MainEventsCleared | Event::RedrawEventsCleared | Event::UserEvent(())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_preview() {
        let options = AnimateAppOptions::default();
        assert_eq!(options.title(), "Animate State");
        assert_eq!(options.initial_size(), (800, 600));
        assert_eq!(options.demo(), DemoKind::Transition);
    }

    #[test]
    fn builder_overrides_options() {
        let builder = AnimateAppBuilder::new()
            .title("Spin")
            .size(640, 480)
            .demo(DemoKind::Rotation);
        let expected = AnimateAppOptions::default()
            .with_title("Spin")
            .with_size(640, 480)
            .with_demo(DemoKind::Rotation);
        assert_eq!(builder.options(), &expected);
    }

    #[test]
    fn redraw_events_cleared_keeps_polling_decision() {
        assert!(is_frame_boundary(&Event::<()>::MainEventsCleared));
        assert!(is_frame_boundary(&Event::<()>::RedrawEventsCleared));
        assert!(is_frame_boundary(&Event::UserEvent(())));
        assert!(!is_frame_boundary(&Event::<()>::Resumed));
        assert!(!is_frame_boundary(&Event::<()>::LoopDestroyed));
    }
}
