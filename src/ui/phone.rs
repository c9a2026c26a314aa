use crate::constant::COPYRIGHT_TEXT;
use crate::layout::PixelRect;
use crate::scene::Layer;
use crate::webview::WebView;
use egui::{
    Align2, Color32, CornerRadius, FontId, Mesh, Painter, Pos2, Rect, Response, Sense, Shape,
    Stroke, StrokeKind, Ui, vec2,
};
use std::f32::consts::{FRAC_PI_2, PI};

/// Arc steps per rounded screen corner.
const CORNER_SEGMENTS: usize = 12;

pub struct PhoneView;

impl PhoneView {
    /// Paint `layers` bottom to top in a frame of `size`. The page is moved
    /// off screen while `page_visible` is false, since a native browser window
    /// would cover any dialog drawn over the phone.
    pub fn show(
        ui: &mut Ui,
        layers: &[Layer],
        size: egui::Vec2,
        web_view: &mut dyn WebView,
        page_visible: bool,
        clock: &str,
    ) -> Response {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        if response.dragged() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }

        let painter = ui.painter();
        let origin = rect.min;
        for layer in layers {
            paint_layer(painter, origin, layer, web_view, clock);
        }
        if !page_visible || !layers.iter().any(|l| matches!(l, Layer::Screen { .. })) {
            web_view.set_bounds(Rect::ZERO);
        }

        response
    }
}

fn to_rect(origin: Pos2, r: &PixelRect) -> Rect {
    Rect::from_min_size(
        origin + vec2(r.x as f32, r.y as f32),
        vec2(r.width.max(0) as f32, r.height.max(0) as f32),
    )
}

fn corner(radius: i32) -> CornerRadius {
    CornerRadius::same(radius.clamp(0, u8::MAX as i32) as u8)
}

fn paint_layer(
    painter: &Painter,
    origin: Pos2,
    layer: &Layer,
    web_view: &mut dyn WebView,
    clock: &str,
) {
    match layer {
        Layer::Frame {
            rect,
            radius,
            body,
            edge,
            edge_width,
            shadow,
        } => {
            let outer = to_rect(origin, rect);
            let cast = egui::epaint::Shadow {
                offset: [0, shadow.offset_y],
                blur: shadow.blur,
                spread: 0,
                color: shadow.color,
            };
            painter.add(cast.as_shape(outer, corner(*radius)));
            painter.rect_filled(outer, corner(*radius), *edge);
            painter.rect_filled(
                outer.shrink(*edge_width as f32),
                corner(radius - edge_width),
                *body,
            );
        }
        Layer::Screen {
            rect,
            radius,
            status_bar,
            status_padding,
            content,
            text_color,
        } => {
            let screen = to_rect(origin, rect);
            painter.rect_filled(screen, corner(*radius), Color32::BLACK);

            let bar = to_rect(origin, status_bar);
            let bar = bar.shrink2(vec2(*status_padding as f32, 0.0));
            let font_size = (bar.height() * 0.3).max(7.0);
            painter.text(
                bar.left_center(),
                Align2::LEFT_CENTER,
                clock,
                FontId::proportional(font_size),
                *text_color,
            );
            paint_status_icons(painter, bar, font_size, *text_color);

            let content = to_rect(origin, content);
            web_view.set_bounds(content);
            web_view.paint(
                &painter.with_clip_rect(content.intersect(screen)),
                content,
                Color32::from_gray(160),
            );
        }
        Layer::Notch { rect } => {
            let notch = to_rect(origin, rect);
            painter.rect_filled(notch, corner(rect.height / 2), Color32::BLACK);
        }
        Layer::BezelOverlay {
            outer,
            outer_radius,
            inner,
            inner_radius,
            mask,
            highlight,
        } => {
            let outer_rect = to_rect(origin, outer);
            let inner_rect = to_rect(origin, inner);
            painter.add(Shape::mesh(screen_corner_mask(
                inner_rect,
                *inner_radius as f32,
                *mask,
            )));

            // Highlight ridge halfway through the bezel
            let ridge = inner.x as f32 / 2.0;
            painter.rect_stroke(
                outer_rect.shrink(ridge),
                corner(outer_radius - ridge as i32),
                Stroke::new(1.0, highlight.gamma_multiply(0.35)),
                StrokeKind::Middle,
            );
            painter.rect_stroke(
                outer_rect,
                corner(*outer_radius),
                Stroke::new(1.0, Color32::from_black_alpha(100)),
                StrokeKind::Inside,
            );
            if inner.width > 0 && inner.height > 0 {
                painter.rect_stroke(
                    inner_rect.expand(1.0),
                    corner(inner_radius + 1),
                    Stroke::new(1.0, Color32::from_black_alpha(120)),
                    StrokeKind::Middle,
                );
                painter.rect_stroke(
                    inner_rect,
                    corner(*inner_radius),
                    Stroke::new(1.0, Color32::from_white_alpha(40)),
                    StrokeKind::Middle,
                );
            }
        }
        Layer::Copyright { center, color } => {
            painter.text(
                origin + vec2(center.0 as f32, center.1 as f32),
                Align2::CENTER_CENTER,
                COPYRIGHT_TEXT,
                FontId::proportional(8.0),
                *color,
            );
        }
    }
}

/// Fill the four screen corners outside the rounded edge of `rect`.
fn screen_corner_mask(rect: Rect, radius: f32, color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if radius <= 0.0 {
        return mesh;
    }

    // (square corner, arc centre, start angle); y grows downward
    let corners = [
        (rect.left_top(), rect.left_top() + vec2(radius, radius), PI),
        (rect.right_top(), rect.right_top() + vec2(-radius, radius), 1.5 * PI),
        (rect.right_bottom(), rect.right_bottom() - vec2(radius, radius), 0.0),
        (rect.left_bottom(), rect.left_bottom() + vec2(radius, -radius), FRAC_PI_2),
    ];
    for (tip, centre, start) in corners {
        let tip_idx = mesh.vertices.len() as u32;
        mesh.colored_vertex(tip, color);
        for step in 0..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * step as f32 / CORNER_SEGMENTS as f32;
            mesh.colored_vertex(centre + radius * vec2(angle.cos(), angle.sin()), color);
        }
        for step in 0..CORNER_SEGMENTS as u32 {
            mesh.add_triangle(tip_idx, tip_idx + 1 + step, tip_idx + 2 + step);
        }
    }
    mesh
}

/// Signal bars and a battery glyph on the right of the status bar.
fn paint_status_icons(painter: &Painter, bar: Rect, size: f32, color: Color32) {
    let battery = Rect::from_min_size(
        Pos2::new(bar.right() - size * 1.8, bar.center().y - size * 0.4),
        vec2(size * 1.6, size * 0.8),
    );
    painter.rect_stroke(battery, 2.0, Stroke::new(1.0, color), StrokeKind::Inside);
    painter.rect_filled(battery.shrink(2.0), 1.0, color);

    let step = size * 0.3;
    let base_x = battery.left() - size * 0.6 - 4.0 * step;
    for i in 0..4 {
        let height = size * 0.25 * (i + 1) as f32;
        let bar_rect = Rect::from_min_max(
            Pos2::new(base_x + i as f32 * step, battery.bottom() - height),
            Pos2::new(base_x + i as f32 * step + step * 0.7, battery.bottom()),
        );
        painter.rect_filled(bar_rect, 0.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{BEZEL_BASE_WIDTH, BLEED};
    use crate::device::DeviceProfile;
    use crate::layout::{Scale, compute};
    use crate::scene;
    use crate::theme::FrameTheme;
    use crate::webview::UrlPlaceholder;

    #[test]
    fn test_corner_mask_stays_in_screen_corners() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), vec2(253.0, 571.0));
        let mesh = screen_corner_mask(rect, 25.0, Color32::RED);

        assert_eq!(mesh.vertices.len(), 4 * (CORNER_SEGMENTS + 2));
        assert_eq!(mesh.indices.len(), 4 * CORNER_SEGMENTS * 3);
        let bounds = mesh.calc_bounds();
        assert!((bounds.min - rect.min).length() < 1e-3);
        assert!((bounds.max - rect.max).length() < 1e-3);

        // Nothing reaches past the corner squares into the visible screen
        let centre_band = rect.shrink2(vec2(25.5, 0.0));
        let middle_band = rect.shrink2(vec2(0.0, 25.5));
        for v in &mesh.vertices {
            assert!(!centre_band.contains(v.pos) && !middle_band.contains(v.pos));
        }
    }

    #[test]
    fn test_corner_mask_empty_without_radius() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 200.0));
        assert!(screen_corner_mask(rect, 0.0, Color32::RED).is_empty());
    }

    #[test]
    fn test_web_view_follows_content_rect() {
        let scale = Scale::new(0.7).unwrap();
        let device = DeviceProfile::new("Test", 390, 844, 50).unwrap();
        let geometry = compute(&device, scale, BEZEL_BASE_WIDTH, BLEED);
        let layers = scene::build(&geometry, FrameTheme::Obsidian, scale);
        let size = vec2(geometry.outer_width as f32, geometry.outer_height as f32);

        let ctx = egui::Context::default();
        let mut view = UrlPlaceholder::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    PhoneView::show(ui, &layers, size, &mut view, true, "09:41");
                });
        });

        let content = geometry.content_rect();
        let bounds = view.bounds().expect("screen layer sets the bounds");
        assert_eq!(bounds.width(), content.width as f32);
        assert_eq!(bounds.height(), content.height as f32);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    PhoneView::show(ui, &layers, size, &mut view, false, "09:41");
                });
        });
        assert_eq!(view.bounds(), Some(Rect::ZERO));
    }
}
