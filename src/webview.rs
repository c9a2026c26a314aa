//! The embedded browser seam.
//!
//! The simulator only ever hands a browser a URL, a zoom factor and the
//! screen area to occupy. What the browser does with them is its own
//! business, so it sits behind [`WebView`]. With the `native-webview` feature
//! a real system browser is hosted as a child window, see [`native`].

use egui::{Align2, Color32, FontId, Painter, Rect};

#[cfg(feature = "native-webview")]
pub mod native;

pub trait WebView {
    fn load_url(&mut self, url: &str);

    fn set_zoom_factor(&mut self, zoom: f32);

    /// Place the page over `rect`, in window points. An empty rect hides it.
    fn set_bounds(&mut self, rect: Rect);

    /// Draw the page into `rect`, which is already clipped to the screen mask.
    fn paint(&self, painter: &Painter, rect: Rect, text_color: Color32);
}

/// Prefix `http://` onto anything that does not already name an http(s) scheme.
pub fn normalize_url(input: &str) -> String {
    let url = input.trim();
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Stand-in surface that shows which page would be loaded and at what zoom.
#[derive(Debug, Default)]
pub struct UrlPlaceholder {
    url: Option<String>,
    zoom: f32,
    bounds: Option<Rect>,
}

impl UrlPlaceholder {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }
}

impl WebView for UrlPlaceholder {
    fn load_url(&mut self, url: &str) {
        tracing::info!("Loading {}", url);
        self.url = Some(url.to_string());
    }

    fn set_zoom_factor(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    fn set_bounds(&mut self, rect: Rect) {
        self.bounds = Some(rect);
    }

    fn paint(&self, painter: &Painter, rect: Rect, text_color: Color32) {
        let Some(url) = &self.url else {
            return;
        };
        let size = (13.0 * self.zoom).max(8.0);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            url,
            FontId::proportional(size),
            text_color,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, size * 1.6),
            Align2::CENTER_CENTER,
            format!("{:.0}%", self.zoom * 100.0),
            FontId::proportional(size * 0.8),
            text_color.gamma_multiply(0.6),
        );
    }
}
