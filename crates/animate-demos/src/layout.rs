use animate_ui_graphics::{Dp, Rect, Size};

pub const BUTTON_HEIGHT: Dp = Dp(40.0);
const BUTTON_MIN_WIDTH: Dp = Dp(64.0);
const BUTTON_CHAR_WIDTH: Dp = Dp(8.0);
const BUTTON_HORIZONTAL_PADDING: Dp = Dp(16.0);

/// Top-to-bottom placement of children in a viewport-wide column.
///
/// Each child occupies its size plus padding on every side.
pub struct Column {
    width: f32,
    cursor_y: f32,
}

impl Column {
    pub fn new(viewport: Size) -> Self {
        Self {
            width: viewport.width,
            cursor_y: 0.0,
        }
    }

    /// Places a child centered horizontally.
    pub fn centered(&mut self, size: Size, padding: Dp) -> Rect {
        let x = (self.width - size.width) / 2.0;
        self.place(x, size, padding)
    }

    /// Places a start-aligned child drawn shifted by `(x, y)`. The shift does
    /// not move later children.
    pub fn offset(&mut self, x: Dp, y: Dp, size: Size) -> Rect {
        let rect = Rect::new(x.0, self.cursor_y + y.0, size.width, size.height);
        self.cursor_y += size.height;
        rect
    }

    pub fn spacer(&mut self, height: Dp) {
        self.cursor_y += height.0;
    }

    pub fn height(&self) -> f32 {
        self.cursor_y
    }

    fn place(&mut self, x: f32, size: Size, padding: Dp) -> Rect {
        let rect = Rect::new(x, self.cursor_y + padding.0, size.width, size.height);
        self.cursor_y += size.height + padding.0 * 2.0;
        rect
    }
}

/// Button size that fits `label` on one line.
pub fn button_size(label: &str) -> Size {
    let text = BUTTON_CHAR_WIDTH * label.chars().count() as f32;
    let width = (text + BUTTON_HORIZONTAL_PADDING * 2.0).max(BUTTON_MIN_WIDTH);
    Size::new(width.0, BUTTON_HEIGHT.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_children_stack_with_padding() {
        let mut column = Column::new(Size::new(800.0, 600.0));
        let first = column.centered(Size::new(300.0, 300.0), Dp(10.0));
        assert_eq!(first, Rect::new(250.0, 10.0, 300.0, 300.0));
        column.spacer(Dp(50.0));
        let second = column.centered(Size::new(100.0, 40.0), Dp(20.0));
        assert_eq!(second, Rect::new(350.0, 390.0, 100.0, 40.0));
        assert_eq!(column.height(), 450.0);
    }

    #[test]
    fn offset_children_keep_their_slot() {
        let mut column = Column::new(Size::new(400.0, 600.0));
        let moved = column.offset(Dp(120.0), Dp(20.0), Size::new(70.0, 70.0));
        assert_eq!(moved, Rect::new(120.0, 20.0, 70.0, 70.0));
        column.spacer(Dp(50.0));
        assert_eq!(column.height(), 120.0);
    }

    #[test]
    fn buttons_grow_with_their_label() {
        assert_eq!(button_size("Go").width, BUTTON_MIN_WIDTH.0);
        assert_eq!(button_size("Rotate Propeller").width, 16.0 * 8.0 + 32.0);
    }
}
