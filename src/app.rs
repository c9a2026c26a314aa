use crate::config::{Config, ConfigError};
use crate::constant::{
    BEZEL_BASE_WIDTH, BLEED, CONTROL_PANEL_HEIGHT, COPYRIGHT_TEXT, PHONE_AREA_TOP_GAP,
};
use crate::device::DeviceProfile;
use crate::layout::{self, GeometryBundle, Scale};
use crate::preset::ScalePreset;
use crate::scene::{self, Layer};
use crate::style::configure_style;
use crate::theme::FrameTheme;
use crate::ui::control_panel::{ControlAction, ControlPanel, ControlPanelState};
use crate::ui::device_dialog::{DeviceDialogs, DialogAction};
use crate::ui::phone::PhoneView;
use crate::webview::{UrlPlaceholder, WebView, normalize_url};
use std::time::Duration;
use tracing::{error, info};

pub struct MobileSimApp {
    config: Config,
    devices: Vec<DeviceProfile>,
    device_index: usize,
    scale: Scale,
    theme: FrameTheme,
    url_input: String,
    immersion: bool,
    geometry: GeometryBundle,
    layers: Vec<Layer>,
    web_view: Box<dyn WebView>,
    dialogs: DeviceDialogs,
    pending_resize: bool,
}

impl MobileSimApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_url: Option<String>) -> Self {
        configure_style(&cc.egui_ctx);
        Self::with_config(Config::load(), create_web_view(cc), initial_url)
    }

    /// Build the app around an explicit settings store and browser.
    pub fn with_config(
        config: Config,
        web_view: Box<dyn WebView>,
        initial_url: Option<String>,
    ) -> Self {
        let devices = config.list_all();
        let device_index = config.device_index();
        let scale = config.scale();
        let theme = config.theme();
        let url_input = initial_url.unwrap_or_else(|| config.settings.last_url.clone());
        let geometry = layout::compute(&devices[device_index], scale, BEZEL_BASE_WIDTH, BLEED);

        let mut app = Self {
            config,
            devices,
            device_index,
            scale,
            theme,
            url_input,
            immersion: false,
            geometry,
            layers: Vec::new(),
            web_view,
            dialogs: DeviceDialogs::default(),
            pending_resize: true,
        };
        app.relayout();
        app.connect();
        app
    }

    pub fn geometry(&self) -> &GeometryBundle {
        &self.geometry
    }

    pub fn device_index(&self) -> usize {
        self.device_index
    }

    pub fn is_immersion(&self) -> bool {
        self.immersion
    }

    /// Recompute geometry and layers after any device, scale or theme change.
    fn relayout(&mut self) {
        let device = &self.devices[self.device_index];
        self.geometry = layout::compute(device, self.scale, BEZEL_BASE_WIDTH, BLEED);
        self.layers = scene::build(&self.geometry, self.theme, self.scale);
        self.web_view.set_zoom_factor(self.scale.get() as f32);
        self.pending_resize = true;
    }

    fn reload_devices(&mut self) {
        self.devices = self.config.list_all();
        self.device_index = self.device_index.min(self.devices.len() - 1);
    }

    fn connect(&mut self) {
        let url = normalize_url(&self.url_input);
        self.url_input = url.clone();
        self.web_view.load_url(&url);
        persist(self.config.set_url(&url));
    }

    pub fn toggle_immersion(&mut self) {
        self.immersion = !self.immersion;
        info!("Immersion {}", if self.immersion { "on" } else { "off" });
        self.pending_resize = true;
    }

    fn select_device(&mut self, index: usize) {
        if index >= self.devices.len() {
            return;
        }
        self.device_index = index;
        persist(self.config.set_device_index(index));
        self.relayout();
    }

    pub fn handle_control(&mut self, action: ControlAction) {
        match action {
            ControlAction::SelectDevice(index) => self.select_device(index),
            ControlAction::Connect => self.connect(),
            ControlAction::SelectTheme(theme) => {
                self.theme = theme;
                persist(self.config.set_theme(theme));
                self.relayout();
            }
            ControlAction::SelectScale(preset) => {
                self.scale = preset.scale();
                persist(self.config.set_scale(self.scale));
                self.relayout();
            }
            ControlAction::AddDevice => self.dialogs.open_add(),
            ControlAction::ManageDevices => self.dialogs.open_manage(),
            ControlAction::ToggleImmersion => self.toggle_immersion(),
        }
    }

    pub fn handle_dialog(&mut self, action: DialogAction) {
        match action {
            DialogAction::Add(profile) => {
                let result = self.config.add_custom_device(
                    &profile.name,
                    profile.width,
                    profile.height,
                    profile.radius,
                );
                persist(result);
                self.reload_devices();
                self.select_device(self.devices.len() - 1);
            }
            DialogAction::Update(index, profile) => {
                let result = self.config.update_custom_device(
                    index,
                    &profile.name,
                    profile.width,
                    profile.height,
                    profile.radius,
                );
                persist(result.map(|_| ()));
                self.reload_devices();
                self.relayout();
            }
            DialogAction::Delete(index) => {
                persist(self.config.delete_custom_device(index).map(|_| ()));
                self.devices = self.config.list_all();
                self.device_index = self.config.device_index();
                self.relayout();
            }
        }
    }

    fn scale_label(&self) -> String {
        match ScalePreset::from_scale(self.scale.get()) {
            Some(preset) => preset.to_string(),
            None => format!("{:.0}%", self.scale.get() * 100.0),
        }
    }

    fn window_size(&self) -> egui::Vec2 {
        let (width, height) = layout::window_size(&self.geometry);
        egui::vec2(width as f32, height as f32)
    }
}

#[cfg(feature = "native-webview")]
fn create_web_view(cc: &eframe::CreationContext<'_>) -> Box<dyn WebView> {
    match crate::webview::native::NativeWebView::new(cc) {
        Ok(view) => Box::new(view),
        Err(e) => {
            tracing::warn!("Falling back to the URL placeholder: {}", e);
            Box::new(UrlPlaceholder::default())
        }
    }
}

#[cfg(not(feature = "native-webview"))]
fn create_web_view(_cc: &eframe::CreationContext<'_>) -> Box<dyn WebView> {
    Box::new(UrlPlaceholder::default())
}

/// Log a failed write; the in-memory state stays as the user left it.
fn persist(result: Result<(), ConfigError>) {
    if let Err(e) = result {
        error!("Failed to save config: {}", e);
    }
}

impl eframe::App for MobileSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.toggle_immersion();
        }

        if self.pending_resize {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(self.window_size()));
            self.pending_resize = false;
        }

        if !self.immersion {
            let scale_label = self.scale_label();
            let action = egui::TopBottomPanel::top("control_panel")
                .exact_height(CONTROL_PANEL_HEIGHT)
                .frame(ControlPanel::frame())
                .show(ctx, |ui| {
                    ControlPanel::show(
                        ui,
                        ControlPanelState {
                            devices: &self.devices,
                            device_index: self.device_index,
                            url: &mut self.url_input,
                            theme: self.theme,
                            scale_label,
                        },
                    )
                })
                .inner;
            if let Some(action) = action {
                self.handle_control(action);
            }

            egui::TopBottomPanel::top("copyright_label")
                .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(15, 2)))
                .show_separator_line(false)
                .show(ctx, |ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(COPYRIGHT_TEXT)
                                .size(10.0)
                                .color(egui::Color32::from_white_alpha(180)),
                        );
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.add_space(PHONE_AREA_TOP_GAP);
                ui.vertical_centered(|ui| {
                    let size = egui::vec2(
                        self.geometry.outer_width as f32,
                        self.geometry.outer_height as f32,
                    );
                    let clock = chrono::Local::now().format("%H:%M").to_string();
                    let page_visible = !self.dialogs.is_open();
                    PhoneView::show(
                        ui,
                        &self.layers,
                        size,
                        self.web_view.as_mut(),
                        page_visible,
                        &clock,
                    );
                });
            });

        if let Some(action) = self.dialogs.show(ctx, self.config.custom_devices()) {
            self.handle_dialog(action);
        }

        // Status bar clock
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}
