//! Before/after comparison slider arithmetic
//!
//! The output screen overlays the original photo on top of the generated
//! image and reveals a slider-controlled fraction of it. The overlay is
//! `position` percent of the container wide; the photo inside must be
//! stretched back to the container width so the two images stay aligned.

/// Default slider position (both halves equally revealed).
pub const DEFAULT_SLIDER_POSITION: u8 = 50;

/// Slider position for the before/after overlay, held in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonSlider {
    position: u8,
}

impl ComparisonSlider {
    /// Build from an arbitrary integer, clamping into `[0, 100]`.
    pub fn new(position: i32) -> Self {
        Self {
            position: position.clamp(0, 100) as u8,
        }
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    /// Width of the original-photo overlay, as a percentage of the
    /// container.
    pub fn overlay_width_percent(&self) -> u8 {
        self.position
    }

    /// Width of the photo inside the overlay, as a percentage of the
    /// overlay. `100 / position * 100`, except that a collapsed overlay
    /// (position 0) needs no stretch at all.
    pub fn original_width_percent(&self) -> f64 {
        if self.position == 0 {
            100.0
        } else {
            10_000.0 / f64::from(self.position)
        }
    }
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self {
            position: DEFAULT_SLIDER_POSITION,
        }
    }
}
