//! Phone geometry.
//!
//! Everything here is pure integer pixel arithmetic derived from a
//! [`DeviceProfile`] and a [`Scale`]. The screen layer is inset by
//! `bezel_width - bleed` so it slides one pixel under the bezel overlay and no
//! transparent seam shows between the two when they are painted separately.

use crate::constant::{
    COPYRIGHT_OFFSET, DEFAULT_SCALE, MAX_SCALE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, NOTCH_GAP,
    NOTCH_HEIGHT, NOTCH_WIDTH, STATUS_BAR_HEIGHT, WINDOW_PADDING_X, WINDOW_PADDING_Y,
};
use crate::device::DeviceProfile;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    #[error("Scale must be within (0, 1.2], got {0}")]
    InvalidScale(f64),
}

/// A uniform zoom factor applied to every device dimension.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f64);

impl Scale {
    pub fn new(value: f64) -> Result<Self, LayoutError> {
        if value.is_finite() && value > 0.0 && value <= MAX_SCALE {
            Ok(Self(value))
        } else {
            Err(LayoutError::InvalidScale(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Scale a length and round to the nearest whole pixel.
    fn apply(self, length: u32) -> i32 {
        (f64::from(length) * self.0).round() as i32
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// An axis-aligned rectangle in frame-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// `true` if `self` lies inside `outer` without touching its edges.
    pub fn strictly_inside(&self, outer: &PixelRect) -> bool {
        self.x > outer.x
            && self.y > outer.y
            && self.right() < outer.right()
            && self.bottom() < outer.bottom()
    }
}

/// Derived sizes for every phone layer at a given scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryBundle {
    pub outer_width: i32,
    pub outer_height: i32,
    /// Scaled outer corner radius.
    pub outer_radius: i32,
    pub bezel_width: i32,
    /// Inset of the screen from the outer edge (`bezel_width - bleed`).
    pub margin: i32,
    pub inner_rect: PixelRect,
    pub inner_radius: i32,
    pub notch_rect: PixelRect,
    /// Scaled status bar height, used to place the web content below it.
    pub status_bar_height: i32,
}

impl GeometryBundle {
    pub fn outer_rect(&self) -> PixelRect {
        PixelRect::new(0, 0, self.outer_width, self.outer_height)
    }

    /// `false` when the bezel swallows the whole frame at this scale.
    pub fn has_screen(&self) -> bool {
        !self.inner_rect.is_empty()
    }

    /// The status strip along the top of the screen.
    pub fn status_bar_rect(&self) -> PixelRect {
        let height = self.status_bar_height.min(self.inner_rect.height).max(0);
        PixelRect::new(
            self.inner_rect.x,
            self.inner_rect.y,
            self.inner_rect.width,
            height,
        )
    }

    /// Screen area left for web content below the status strip.
    pub fn content_rect(&self) -> PixelRect {
        let bar = self.status_bar_rect();
        PixelRect::new(
            self.inner_rect.x,
            bar.bottom(),
            self.inner_rect.width,
            (self.inner_rect.height - bar.height).max(0),
        )
    }

    /// Center point of the copyright line near the bottom rim.
    pub fn copyright_anchor(&self) -> (i32, i32) {
        (
            self.outer_width / 2,
            self.outer_height - COPYRIGHT_OFFSET as i32 / 2,
        )
    }
}

/// Compute the full geometry for `profile` at `scale`.
pub fn compute(
    profile: &DeviceProfile,
    scale: Scale,
    bezel_base_width: u32,
    bleed: u32,
) -> GeometryBundle {
    let outer_width = scale.apply(profile.width);
    let outer_height = scale.apply(profile.height);
    let bezel_width = scale.apply(bezel_base_width);
    let radius_raw = scale.apply(profile.radius);

    // Below ~3% scale the bezel rounds to zero; keep the screen inside the frame.
    let margin = (bezel_width - bleed as i32).max(0);
    let inner_rect = PixelRect::new(
        margin,
        margin,
        (outer_width - 2 * margin).max(0),
        (outer_height - 2 * margin).max(0),
    );
    let inner_radius = (radius_raw - margin).max(0);

    let notch_width = scale.apply(NOTCH_WIDTH);
    let notch_height = scale.apply(NOTCH_HEIGHT);
    let notch_rect = PixelRect::new(
        (outer_width - notch_width) / 2,
        bezel_width + scale.apply(NOTCH_GAP),
        notch_width,
        notch_height,
    );

    GeometryBundle {
        outer_width,
        outer_height,
        outer_radius: radius_raw,
        bezel_width,
        margin,
        inner_rect,
        inner_radius,
        notch_rect,
        status_bar_height: scale.apply(STATUS_BAR_HEIGHT),
    }
}

/// Window size that hosts the phone plus the surrounding chrome.
pub fn window_size(geometry: &GeometryBundle) -> (u32, u32) {
    let width = geometry.outer_width.max(0) as u32 + WINDOW_PADDING_X;
    let height = geometry.outer_height.max(0) as u32 + WINDOW_PADDING_Y;
    (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{BEZEL_BASE_WIDTH, BLEED};
    use crate::device::builtin_devices;

    fn profile(width: u32, height: u32, radius: u32) -> DeviceProfile {
        DeviceProfile::new("Test", width, height, radius).unwrap()
    }

    fn scale(value: f64) -> Scale {
        Scale::new(value).unwrap()
    }

    #[test]
    fn test_reference_geometry() {
        let geometry = compute(&profile(390, 844, 50), scale(0.7), 16, 1);

        assert_eq!(geometry.outer_width, 273);
        assert_eq!(geometry.outer_height, 591);
        assert_eq!(geometry.bezel_width, 11);
        assert_eq!(geometry.margin, 10);
        assert_eq!(geometry.inner_rect, PixelRect::new(10, 10, 253, 571));
        assert_eq!(geometry.inner_radius, 25);
    }

    #[test]
    fn test_compute_is_pure() {
        let device = profile(430, 932, 55);
        let first = compute(&device, scale(0.9), BEZEL_BASE_WIDTH, BLEED);
        let second = compute(&device, scale(0.9), BEZEL_BASE_WIDTH, BLEED);
        assert_eq!(first, second);
    }

    #[test]
    fn test_inner_rect_strictly_inside() {
        for device in builtin_devices() {
            for value in [0.5, 0.6, 0.7, 0.75, 0.8, 0.9, 1.0, 1.2] {
                let geometry = compute(&device, scale(value), BEZEL_BASE_WIDTH, BLEED);
                assert!(geometry.margin > 0);
                assert!(
                    geometry
                        .inner_rect
                        .strictly_inside(&geometry.outer_rect()),
                    "{} at {}: {:?}",
                    device.name,
                    value,
                    geometry
                );
                let inset = geometry.bezel_width - BLEED as i32;
                assert_eq!(geometry.inner_rect.x, inset);
                assert_eq!(geometry.outer_width - geometry.inner_rect.right(), inset);
                assert_eq!(geometry.outer_height - geometry.inner_rect.bottom(), inset);
            }
        }
    }

    #[test]
    fn test_inner_radius_never_negative() {
        // Radius smaller than the bezel inset
        let geometry = compute(&profile(300, 600, 4), scale(1.0), 16, 1);
        assert_eq!(geometry.margin, 15);
        assert_eq!(geometry.inner_radius, 0);
    }

    #[test]
    fn test_degenerate_geometry_has_no_screen() {
        let geometry = compute(&profile(10, 600, 5), scale(1.0), 16, 1);
        assert_eq!(geometry.inner_rect.width, 0);
        assert!(geometry.inner_rect.height > 0);
        assert!(!geometry.has_screen());
        assert_eq!(geometry.content_rect().width, 0);

        // Bezel rounds to zero; margin must not go negative
        let tiny = compute(&profile(390, 844, 50), scale(0.01), 16, 1);
        assert_eq!(tiny.bezel_width, 0);
        assert_eq!(tiny.margin, 0);
        assert_eq!(tiny.inner_rect, PixelRect::new(0, 0, 4, 8));
    }

    #[test]
    fn test_notch_centered_below_bezel() {
        let geometry = compute(&profile(390, 844, 50), scale(0.7), 16, 1);
        assert_eq!(geometry.notch_rect.width, 84);
        assert_eq!(geometry.notch_rect.height, 20);
        assert_eq!(geometry.notch_rect.x, (273 - 84) / 2);
        assert_eq!(geometry.notch_rect.y, 11 + 7);

        let full = compute(&profile(400, 800, 50), scale(1.0), 16, 1);
        assert_eq!(full.notch_rect, PixelRect::new(140, 26, 120, 28));
    }

    #[test]
    fn test_status_and_content_split_screen() {
        let geometry = compute(&profile(390, 844, 50), scale(1.0), 16, 1);
        let bar = geometry.status_bar_rect();
        let content = geometry.content_rect();
        assert_eq!(bar.height, 44);
        assert_eq!(content.y, bar.bottom());
        assert_eq!(bar.height + content.height, geometry.inner_rect.height);
    }

    #[test]
    fn test_window_size_minimums() {
        let small = compute(&profile(390, 844, 50), scale(0.5), 16, 1);
        assert_eq!(window_size(&small), (600, 572));

        let large = compute(&profile(430, 932, 55), scale(1.2), 16, 1);
        assert_eq!(window_size(&large), (616, 1268));
    }

    #[test]
    fn test_scale_bounds() {
        assert!(Scale::new(1.2).is_ok());
        assert_eq!(Scale::new(0.0), Err(LayoutError::InvalidScale(0.0)));
        assert_eq!(Scale::new(1.5), Err(LayoutError::InvalidScale(1.5)));
        assert!(Scale::new(f64::NAN).is_err());
    }
}
