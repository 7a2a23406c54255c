use animate_ui_graphics::Color;

/// Two-valued state of the color demo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorToggle {
    #[default]
    Yellow,
    Magenta,
}

impl ColorToggle {
    pub fn toggled(self) -> Self {
        match self {
            ColorToggle::Yellow => ColorToggle::Magenta,
            ColorToggle::Magenta => ColorToggle::Yellow,
        }
    }

    pub fn color(self) -> Color {
        match self {
            ColorToggle::Yellow => Color::YELLOW,
            ColorToggle::Magenta => Color::MAGENTA,
        }
    }
}

/// Where the moving box rests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxPosition {
    #[default]
    Start,
    End,
}

impl BoxPosition {
    pub fn toggled(self) -> Self {
        match self {
            BoxPosition::Start => BoxPosition::End,
            BoxPosition::End => BoxPosition::Start,
        }
    }
}
