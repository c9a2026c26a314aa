use crate::device::DeviceProfile;
use crate::preset::ScalePreset;
use crate::theme::FrameTheme;
use egui::{Align, Color32, Layout, Ui};

pub enum ControlAction {
    SelectDevice(usize),
    Connect,
    SelectTheme(FrameTheme),
    SelectScale(ScalePreset),
    AddDevice,
    ManageDevices,
    ToggleImmersion,
}

pub struct ControlPanel;

pub struct ControlPanelState<'a> {
    pub devices: &'a [DeviceProfile],
    pub device_index: usize,
    pub url: &'a mut String,
    pub theme: FrameTheme,
    pub scale_label: String,
}

impl ControlPanel {
    pub fn frame() -> egui::Frame {
        egui::Frame::new()
            .fill(Color32::from_rgba_unmultiplied(45, 55, 72, 240))
            .stroke(egui::Stroke::new(1.0, Color32::from_white_alpha(40)))
            .inner_margin(egui::Margin::symmetric(15, 0))
    }

    pub fn show(ui: &mut Ui, state: ControlPanelState<'_>) -> Option<ControlAction> {
        let ControlPanelState {
            devices,
            device_index,
            url,
            theme,
            scale_label,
        } = state;

        let mut action = None;
        let panel_rect = ui.available_rect_before_wrap();

        // Dragging logic - registered BEFORE widgets so they can steal input
        let interact = ui.interact(
            panel_rect,
            ui.id().with("control_panel_drag"),
            egui::Sense::click_and_drag(),
        );
        if interact.dragged() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }

        ui.horizontal_centered(|ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.label("Device:");
                let selected = devices
                    .get(device_index)
                    .map(DeviceProfile::label)
                    .unwrap_or_default();
                egui::ComboBox::from_id_salt("device_combo")
                    .selected_text(selected)
                    .width(170.0)
                    .show_ui(ui, |ui| {
                        for (i, device) in devices.iter().enumerate() {
                            if ui.selectable_label(i == device_index, device.label()).clicked() {
                                action = Some(ControlAction::SelectDevice(i));
                            }
                        }
                    });

                ui.label("URL:");
                let url_response = ui.add(egui::TextEdit::singleline(url).desired_width(200.0));
                if url_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = Some(ControlAction::Connect);
                }

                ui.label("Frame:");
                egui::ComboBox::from_id_salt("frame_combo")
                    .selected_text(theme.label())
                    .show_ui(ui, |ui| {
                        for candidate in FrameTheme::ALL {
                            if ui
                                .selectable_label(candidate == theme, candidate.label())
                                .clicked()
                            {
                                action = Some(ControlAction::SelectTheme(candidate));
                            }
                        }
                    });

                ui.label("Scale:");
                egui::ComboBox::from_id_salt("scale_combo")
                    .selected_text(scale_label.as_str())
                    .width(60.0)
                    .show_ui(ui, |ui| {
                        for preset in ScalePreset::ALL {
                            let text = preset.to_string();
                            if ui.selectable_label(text == scale_label, text).clicked() {
                                action = Some(ControlAction::SelectScale(preset));
                            }
                        }
                    });

                if ui.button("+").on_hover_text("Add custom device").clicked() {
                    action = Some(ControlAction::AddDevice);
                }
                if ui.button("⚙").on_hover_text("Manage custom devices").clicked() {
                    action = Some(ControlAction::ManageDevices);
                }
                if ui.button("Connect").clicked() {
                    action = Some(ControlAction::Connect);
                }
            });

            // Window Controls
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                if ui.button("Close").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if ui
                    .button("Immersion")
                    .on_hover_text("Hide controls (Esc)")
                    .clicked()
                {
                    action = Some(ControlAction::ToggleImmersion);
                }
            });
        });

        action
    }
}
