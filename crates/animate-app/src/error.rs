use std::fmt;

/// Failure while setting up the window.
#[derive(Debug)]
pub enum AppError {
    /// The window could not be created.
    Window(winit::error::OsError),
    /// The pixel surface could not be created.
    Surface(pixels::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Window(err) => write!(f, "failed to create window: {err}"),
            AppError::Surface(err) => write!(f, "failed to create pixel surface: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Window(err) => Some(err),
            AppError::Surface(err) => Some(err),
        }
    }
}
