//! A system browser hosted as a child of the simulator window.
//!
//! Built on `wry`, which drives WebView2, WKWebView or WebKitGTK depending on
//! the platform. On Linux the child window needs X11 and a running GTK main
//! context, which is pumped from [`WebView::set_bounds`] once per frame.

use super::WebView;
use egui::{Align2, Color32, FontId, Painter, Rect};
use raw_window_handle::HasWindowHandle;
use thiserror::Error;
use tracing::{info, warn};
use wry::dpi::{LogicalPosition, LogicalSize};

#[derive(Error, Debug)]
pub enum NativeWebViewError {
    #[error("Failed to initialise GTK: {0}")]
    Gtk(String),
    #[error("Web view error: {0}")]
    Wry(#[from] wry::Error),
}

pub struct NativeWebView {
    view: wry::WebView,
    bounds: Rect,
}

impl NativeWebView {
    /// Attach a hidden browser to `window`. It shows once it gets bounds.
    pub fn new(window: &impl HasWindowHandle) -> Result<Self, NativeWebViewError> {
        #[cfg(target_os = "linux")]
        gtk::init().map_err(|e| NativeWebViewError::Gtk(e.to_string()))?;

        let view = wry::WebViewBuilder::new()
            .with_visible(false)
            .with_bounds(to_wry_rect(Rect::ZERO))
            .build_as_child(window)?;
        info!("Native web view attached");
        Ok(Self {
            view,
            bounds: Rect::ZERO,
        })
    }
}

fn to_wry_rect(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: LogicalPosition::new(f64::from(rect.min.x), f64::from(rect.min.y)).into(),
        size: LogicalSize::new(f64::from(rect.width()), f64::from(rect.height())).into(),
    }
}

fn log_failure(what: &str, result: wry::Result<()>) {
    if let Err(e) = result {
        warn!("Web view {} failed: {}", what, e);
    }
}

impl WebView for NativeWebView {
    fn load_url(&mut self, url: &str) {
        info!("Loading {}", url);
        log_failure("load", self.view.load_url(url));
    }

    fn set_zoom_factor(&mut self, zoom: f32) {
        log_failure("zoom", self.view.zoom(f64::from(zoom)));
    }

    fn set_bounds(&mut self, rect: Rect) {
        #[cfg(target_os = "linux")]
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
        }

        if rect == self.bounds {
            return;
        }
        let visible = rect.width() > 0.0 && rect.height() > 0.0;
        if visible {
            log_failure("resize", self.view.set_bounds(to_wry_rect(rect)));
        }
        log_failure("visibility", self.view.set_visible(visible));
        self.bounds = rect;
    }

    fn paint(&self, painter: &Painter, rect: Rect, text_color: Color32) {
        // The browser window covers this area; only a loading hint shows through
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Loading…",
            FontId::proportional(12.0),
            text_color.gamma_multiply(0.5),
        );
    }
}
