//! Common rendering contracts shared between renderer backends.
//!
//! Scenes are built in logical pixels; backends scale them to the surface.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use animate_ui_graphics::{Color, Rect, Size};

pub type ClickAction = Rc<RefCell<dyn FnMut()>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        color: Color,
    },
    /// Named asset drawn into `rect`, rotated clockwise about its center.
    Image {
        rect: Rect,
        asset: String,
        rotation_degrees: f32,
    },
    Button {
        rect: Rect,
        label: String,
        color: Color,
    },
}

impl DrawPrimitive {
    pub fn rect(&self) -> Rect {
        match self {
            DrawPrimitive::Rect { rect, .. }
            | DrawPrimitive::Image { rect, .. }
            | DrawPrimitive::Button { rect, .. } => *rect,
        }
    }
}

/// Clickable area recorded while building a scene.
#[derive(Clone)]
pub struct HitRegion {
    pub id: usize,
    pub rect: Rect,
    on_click: ClickAction,
}

impl HitRegion {
    pub fn click(&self) {
        let mut action = self.on_click.borrow_mut();
        (&mut *action)();
    }
}

impl fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .finish()
    }
}

/// Trait implemented by hit-test targets stored inside a [`RenderScene`].
pub trait HitTestTarget {
    fn id(&self) -> usize;
    fn dispatch(&self, kind: PointerEventKind, x: f32, y: f32);
}

impl HitTestTarget for HitRegion {
    fn id(&self) -> usize {
        self.id
    }

    fn dispatch(&self, kind: PointerEventKind, x: f32, y: f32) {
        if kind == PointerEventKind::Up && self.rect.contains(x, y) {
            self.click();
        }
    }
}

/// Trait describing the minimal surface area required by the application
/// shell to process pointer events and refresh the frame.
pub trait RenderScene {
    type HitTarget: HitTestTarget;

    fn clear(&mut self);
    fn hit_test(&self, x: f32, y: f32) -> Option<Self::HitTarget>;
}

/// Ordered draw list plus hit regions.
#[derive(Default, Debug)]
pub struct Scene {
    primitives: Vec<DrawPrimitive>,
    hits: Vec<HitRegion>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        self.primitives.push(DrawPrimitive::Rect { rect, color });
    }

    pub fn push_image(&mut self, rect: Rect, asset: impl Into<String>, rotation_degrees: f32) {
        self.primitives.push(DrawPrimitive::Image {
            rect,
            asset: asset.into(),
            rotation_degrees,
        });
    }

    /// Draws a button and registers its click area.
    pub fn push_button(
        &mut self,
        rect: Rect,
        label: impl Into<String>,
        color: Color,
        on_click: ClickAction,
    ) {
        self.primitives.push(DrawPrimitive::Button {
            rect,
            label: label.into(),
            color,
        });
        self.push_hit(rect, on_click);
    }

    pub fn push_hit(&mut self, rect: Rect, on_click: ClickAction) {
        let id = self.hits.len();
        self.hits.push(HitRegion { id, rect, on_click });
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn hit_regions(&self) -> &[HitRegion] {
        &self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Label of every button in draw order.
    pub fn button_labels(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|primitive| match primitive {
                DrawPrimitive::Button { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderScene for Scene {
    type HitTarget = HitRegion;

    fn clear(&mut self) {
        self.primitives.clear();
        self.hits.clear();
    }

    /// Top-most (last pushed) region containing the point.
    fn hit_test(&self, x: f32, y: f32) -> Option<HitRegion> {
        self.hits
            .iter()
            .rev()
            .find(|hit| hit.rect.contains(x, y))
            .cloned()
    }
}

/// Abstraction implemented by concrete renderer backends.
pub trait Renderer {
    type Scene: RenderScene;
    type Error;

    fn scene(&self) -> &Self::Scene;
    fn scene_mut(&mut self) -> &mut Self::Scene;

    /// Replaces the scene with what `build` draws into a cleared one.
    fn rebuild_scene(
        &mut self,
        viewport: Size,
        build: &mut dyn FnMut(&mut Self::Scene, Size),
    ) -> Result<(), Self::Error>;
}
