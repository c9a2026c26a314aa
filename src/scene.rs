//! The phone as an ordered stack of layers.
//!
//! [`build`] turns a [`GeometryBundle`] into the exact list of layers to paint,
//! bottom to top. The painter walks the list in order every frame, so z-order
//! is a property of this list and nothing else.

use crate::constant::STATUS_BAR_PADDING;
use crate::layout::{GeometryBundle, PixelRect, Scale};
use crate::theme::FrameTheme;
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Frame,
    Screen,
    Notch,
    BezelOverlay,
    Copyright,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropShadow {
    pub blur: u8,
    pub offset_y: i8,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Solid phone body and its drop shadow.
    Frame {
        rect: PixelRect,
        radius: i32,
        body: Color32,
        edge: Color32,
        edge_width: i32,
        shadow: DropShadow,
    },
    /// Black screen with the status strip and web content inside.
    Screen {
        rect: PixelRect,
        radius: i32,
        status_bar: PixelRect,
        status_padding: i32,
        content: PixelRect,
        text_color: Color32,
    },
    /// Pill-shaped island near the top edge.
    Notch { rect: PixelRect },
    /// Rim and chamfer lines over the seam between frame and screen. The
    /// screen corners outside `inner_radius` are filled with `mask`, so
    /// whatever the web view draws ends at the rounded screen edge.
    BezelOverlay {
        outer: PixelRect,
        outer_radius: i32,
        inner: PixelRect,
        inner_radius: i32,
        mask: Color32,
        highlight: Color32,
    },
    Copyright { center: (i32, i32), color: Color32 },
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Frame { .. } => LayerKind::Frame,
            Layer::Screen { .. } => LayerKind::Screen,
            Layer::Notch { .. } => LayerKind::Notch,
            Layer::BezelOverlay { .. } => LayerKind::BezelOverlay,
            Layer::Copyright { .. } => LayerKind::Copyright,
        }
    }
}

/// Layers bottom to top. The screen is omitted when the geometry has no
/// usable screen area.
pub fn build(geometry: &GeometryBundle, theme: FrameTheme, scale: Scale) -> Vec<Layer> {
    let s = scale.get();
    let mut layers = Vec::with_capacity(5);

    layers.push(Layer::Frame {
        rect: geometry.outer_rect(),
        radius: geometry.outer_radius,
        body: theme.base().to_color32(),
        edge: theme.border().to_color32(),
        edge_width: (geometry.bezel_width / 3).max(1),
        shadow: DropShadow {
            blur: (40.0 * s).round().clamp(0.0, 255.0) as u8,
            offset_y: (15.0 * s).round().clamp(0.0, 127.0) as i8,
            color: Color32::from_black_alpha(100),
        },
    });

    if geometry.has_screen() {
        layers.push(Layer::Screen {
            rect: geometry.inner_rect,
            radius: geometry.inner_radius,
            status_bar: geometry.status_bar_rect(),
            status_padding: (f64::from(STATUS_BAR_PADDING) * s).round() as i32,
            content: geometry.content_rect(),
            text_color: theme.status_text_color(),
        });
    }

    layers.push(Layer::Notch {
        rect: geometry.notch_rect,
    });

    layers.push(Layer::BezelOverlay {
        outer: geometry.outer_rect(),
        outer_radius: geometry.outer_radius,
        inner: geometry.inner_rect,
        inner_radius: geometry.inner_radius,
        mask: theme.base().to_color32(),
        highlight: theme.highlight_color(),
    });

    layers.push(Layer::Copyright {
        center: geometry.copyright_anchor(),
        color: Color32::from_white_alpha(15),
    });

    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{BEZEL_BASE_WIDTH, BLEED};
    use crate::device::DeviceProfile;
    use crate::layout::compute;

    fn kinds(layers: &[Layer]) -> Vec<LayerKind> {
        layers.iter().map(Layer::kind).collect()
    }

    #[test]
    fn test_layer_order() {
        let scale = Scale::new(0.6).unwrap();
        let device = DeviceProfile::new("Test", 390, 844, 50).unwrap();
        let geometry = compute(&device, scale, BEZEL_BASE_WIDTH, BLEED);

        let layers = build(&geometry, FrameTheme::Gold, scale);
        assert_eq!(
            kinds(&layers),
            vec![
                LayerKind::Frame,
                LayerKind::Screen,
                LayerKind::Notch,
                LayerKind::BezelOverlay,
                LayerKind::Copyright,
            ]
        );

        let Layer::Frame { shadow, body, .. } = &layers[0] else {
            panic!("first layer must be the frame");
        };
        assert_eq!(shadow.blur, 24);
        assert_eq!(shadow.offset_y, 9);
        assert_eq!(*body, FrameTheme::Gold.base().to_color32());
    }

    #[test]
    fn test_screen_layer_follows_geometry() {
        let scale = Scale::new(1.0).unwrap();
        let device = DeviceProfile::new("Test", 390, 844, 50).unwrap();
        let geometry = compute(&device, scale, BEZEL_BASE_WIDTH, BLEED);

        let layers = build(&geometry, FrameTheme::Pearl, scale);
        let Layer::Screen {
            rect,
            radius,
            text_color,
            status_padding,
            ..
        } = &layers[1]
        else {
            panic!("second layer must be the screen");
        };
        assert_eq!(*rect, geometry.inner_rect);
        assert_eq!(*radius, geometry.inner_radius);
        assert_eq!(*status_padding, 25);
        assert_eq!(*text_color, FrameTheme::Pearl.status_text_color());
    }

    #[test]
    fn test_bezel_overlay_masks_screen_corners() {
        let scale = Scale::new(0.7).unwrap();
        let device = DeviceProfile::new("Test", 390, 844, 50).unwrap();
        let geometry = compute(&device, scale, BEZEL_BASE_WIDTH, BLEED);

        let layers = build(&geometry, FrameTheme::Silver, scale);
        let Some(Layer::BezelOverlay {
            inner,
            inner_radius,
            mask,
            ..
        }) = layers.iter().find(|l| l.kind() == LayerKind::BezelOverlay)
        else {
            panic!("bezel overlay missing");
        };
        assert_eq!(*inner, PixelRect::new(10, 10, 253, 571));
        assert_eq!(*inner_radius, 25);
        assert_eq!(*mask, FrameTheme::Silver.base().to_color32());

        // Painted above the screen, so the mask covers the content corners
        let screen_pos = kinds(&layers).iter().position(|k| *k == LayerKind::Screen);
        let overlay_pos = kinds(&layers).iter().position(|k| *k == LayerKind::BezelOverlay);
        assert!(screen_pos < overlay_pos);
    }

    #[test]
    fn test_degenerate_geometry_skips_screen() {
        let scale = Scale::new(1.0).unwrap();
        let device = DeviceProfile::new("Sliver", 10, 600, 5).unwrap();
        let geometry = compute(&device, scale, BEZEL_BASE_WIDTH, BLEED);

        let layers = build(&geometry, FrameTheme::Obsidian, scale);
        assert!(!kinds(&layers).contains(&LayerKind::Screen));
        assert_eq!(layers.len(), 4);
    }
}
