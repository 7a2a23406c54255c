use std::convert::Infallible;

use animate_app_shell::AppShell;
use animate_demos::DemoKind;
use animate_render_common::{DrawPrimitive, RenderScene, Renderer, Scene};
use animate_ui_graphics::{Color, Size};

const MS: u64 = 1_000_000;

#[derive(Default)]
struct DummyRenderer {
    scene: Scene,
    rebuilds: usize,
}

impl Renderer for DummyRenderer {
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
        self.rebuilds += 1;
        self.scene.clear();
        build(&mut self.scene, viewport);
        Ok(())
    }
}

fn button_center(shell: &AppShell<DummyRenderer>) -> (f32, f32) {
    shell
        .scene()
        .primitives()
        .iter()
        .find_map(|primitive| match primitive {
            DrawPrimitive::Button { rect, .. } => Some((rect.center().x, rect.center().y)),
            _ => None,
        })
        .expect("demo draws a button")
}

fn click(shell: &mut AppShell<DummyRenderer>) {
    let (x, y) = button_center(shell);
    shell.set_cursor(x, y);
    shell.pointer_pressed();
    shell.pointer_released();
}

fn box_color(shell: &AppShell<DummyRenderer>) -> Color {
    match shell.scene().primitives()[0] {
        DrawPrimitive::Rect { color, .. } => color,
        ref other => panic!("expected the box first, got {:?}", other),
    }
}

#[test]
fn idle_demo_settles() {
    let mut shell = AppShell::new(DummyRenderer::default(), DemoKind::Rotation);
    shell.set_viewport(800.0, 600.0);
    for _ in 0..8 {
        if shell.should_render() {
            shell.update();
        } else {
            break;
        }
    }
    assert!(!shell.should_render());
    assert!(shell.renderer().rebuilds >= 2);
}

#[test]
fn click_toggles_and_animation_settles() {
    let mut shell = AppShell::new(DummyRenderer::default(), DemoKind::ColorToggle);
    shell.set_viewport(800.0, 600.0);
    while shell.should_render() {
        shell.update_at(0);
    }
    assert_eq!(box_color(&shell), Color::YELLOW);

    click(&mut shell);
    assert!(shell.should_render());
    let mut time = 0;
    shell.update_at(time);
    while shell.should_render() {
        time += 16 * MS;
        shell.update_at(time);
        assert!(time < 10_000 * MS, "animation never settled");
    }
    assert_eq!(box_color(&shell), Color::MAGENTA);
    assert!(time >= 4_500 * MS);
}

#[test]
fn release_outside_the_pressed_region_does_not_click() {
    let mut shell = AppShell::new(DummyRenderer::default(), DemoKind::Motion);
    shell.set_viewport(800.0, 600.0);
    while shell.should_render() {
        shell.update_at(0);
    }
    let (x, y) = button_center(&shell);
    shell.set_cursor(x, y);
    shell.pointer_pressed();
    shell.set_cursor(5.0, 590.0);
    shell.pointer_released();
    assert!(!shell.should_render());
    assert!(!shell.demo().is_animating());

    // Pressing empty space then releasing on the button does nothing either.
    shell.set_cursor(5.0, 590.0);
    shell.pointer_pressed();
    shell.set_cursor(x, y);
    shell.pointer_released();
    assert!(!shell.demo().is_animating());
}

#[test]
fn transition_demo_reaches_the_window_edge() {
    let mut shell = AppShell::new(DummyRenderer::default(), DemoKind::default());
    shell.set_viewport(500.0, 400.0);
    while shell.should_render() {
        shell.update_at(0);
    }
    click(&mut shell);
    let mut time = 0;
    shell.update_at(time);
    while shell.should_render() {
        time += 16 * MS;
        shell.update_at(time);
    }
    match shell.scene().primitives()[0] {
        DrawPrimitive::Rect { rect, color } => {
            assert_eq!(rect.x, 430.0);
            assert_eq!(color, Color::MAGENTA);
        }
        ref other => panic!("expected the box first, got {:?}", other),
    }
    assert!(shell.scene().hit_test(5.0, 395.0).is_none());
}
