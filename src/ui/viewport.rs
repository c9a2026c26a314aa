use crate::constant::{DEFAULT_WINDOW_TITLE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

pub fn build_viewport() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(DEFAULT_WINDOW_TITLE)
            .with_inner_size([MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32])
            .with_decorations(false)
            .with_transparent(true)
            .with_window_level(egui::WindowLevel::AlwaysOnTop)
            .with_resizable(false),
        centered: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_starts_centered_and_frameless() {
        let options = build_viewport();
        assert!(options.centered);
        assert_eq!(options.viewport.decorations, Some(false));
        assert_eq!(options.viewport.transparent, Some(true));
    }
}
