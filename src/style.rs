use egui::{Color32, Context, Stroke, Style, Visuals};

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    // Compact spacing so the whole control row fits in one line
    style.spacing.item_spacing = egui::vec2(6.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    ctx.set_style(style);

    let mut visuals = Visuals::dark();
    // Everything outside the panel and the phone stays see-through
    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_shadow = egui::epaint::Shadow::NONE;

    visuals.override_text_color = Some(Color32::WHITE);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.0, Color32::TRANSPARENT);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_white_alpha(40);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_white_alpha(50));
    visuals.widgets.hovered.weak_bg_fill = Color32::from_white_alpha(60);
    visuals.widgets.active.weak_bg_fill = Color32::from_white_alpha(80);

    visuals.selection.bg_fill = Color32::from_rgb(66, 99, 145);
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);

    ctx.set_visuals(visuals);
}
