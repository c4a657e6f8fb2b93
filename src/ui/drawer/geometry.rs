//! Visual transforms derived from drawer progress.

/// Background opacity at full progress.
pub const OPEN_BACKGROUND_OPACITY: f32 = 0.5;
/// Background scale at full progress.
pub const OPEN_BACKGROUND_SCALE: f32 = 0.95;

/// Drawer width fixed at mount time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerGeometry {
    width: f32,
}

/// Everything a frame needs, recomputed from progress every time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerFrame {
    pub progress: f32,
    /// Horizontal drawer offset: `-width` when closed, `0` when open.
    pub offset: f32,
    /// Background content opacity.
    pub opacity: f32,
    /// Background content scale.
    pub scale: f32,
    /// Whether the full-screen dismiss surface is present.
    pub dismiss_surface: bool,
}

impl DrawerGeometry {
    /// `ratio` of the viewport width. Not re-derived on resize.
    pub fn from_viewport(viewport_width: u16, ratio: f32) -> Self {
        Self {
            width: (f32::from(viewport_width) * ratio.clamp(0.0, 1.0)).round(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn frame(&self, progress: f32) -> DrawerFrame {
        let progress = progress.clamp(0.0, 1.0);
        DrawerFrame {
            progress,
            offset: lerp(-self.width, 0.0, progress),
            opacity: lerp(1.0, OPEN_BACKGROUND_OPACITY, progress),
            scale: lerp(1.0, OPEN_BACKGROUND_SCALE, progress),
            dismiss_surface: progress > 0.0,
        }
    }
}

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
