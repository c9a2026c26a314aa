use crate::device::{DeviceForm, DeviceProfile};
use egui::{Context, Id, Ui};

pub enum DialogAction {
    Add(DeviceProfile),
    /// Index into the custom device list.
    Update(usize, DeviceProfile),
    /// Index into the custom device list.
    Delete(usize),
}

/// Add, manage, edit and confirm dialogs for custom devices.
///
/// Every dialog is an [`egui::Modal`], so the one on top is the only thing
/// that takes input until it closes.
#[derive(Default)]
pub struct DeviceDialogs {
    add: Option<DeviceForm>,
    manage_open: bool,
    edit: Option<(usize, DeviceForm)>,
    confirm_delete: Option<usize>,
    warning: Option<String>,
}

impl DeviceDialogs {
    pub fn open_add(&mut self) {
        self.add = Some(DeviceForm::default());
    }

    pub fn open_manage(&mut self) {
        self.manage_open = true;
    }

    pub fn is_open(&self) -> bool {
        self.add.is_some()
            || self.manage_open
            || self.edit.is_some()
            || self.confirm_delete.is_some()
            || self.warning.is_some()
    }

    fn open_edit(&mut self, index: usize, device: &DeviceProfile) {
        self.edit = Some((index, DeviceForm::from_profile(device)));
        self.confirm_delete = None;
    }

    fn open_confirm_delete(&mut self, index: usize) {
        self.confirm_delete = Some(index);
        self.edit = None;
    }

    /// Resolve the delete prompt. A confirmed delete shifts later custom
    /// indices, so any pending edit is dropped with it.
    fn answer_delete(&mut self, confirmed: bool) -> Option<DialogAction> {
        let index = self.confirm_delete.take()?;
        if !confirmed {
            return None;
        }
        self.edit = None;
        Some(DialogAction::Delete(index))
    }

    pub fn show(
        &mut self,
        ctx: &Context,
        custom_devices: &[DeviceProfile],
    ) -> Option<DialogAction> {
        let mut action = None;

        if let Some(form) = &mut self.add {
            match form_modal(ctx, "Add Custom Device", "Add", form) {
                FormOutcome::Submitted => match form.parse() {
                    Ok(profile) => {
                        action = Some(DialogAction::Add(profile));
                        self.add = None;
                    }
                    Err(e) => self.warning = Some(e.to_string()),
                },
                FormOutcome::Cancelled => self.add = None,
                FormOutcome::Open => {}
            }
        }

        if self.manage_open {
            let mut edit_clicked = None;
            let mut delete_clicked = None;
            let mut close_clicked = false;
            let response = egui::Modal::new(Id::new("manage_devices")).show(ctx, |ui| {
                ui.set_width(350.0);
                ui.heading("Manage Custom Devices");
                ui.separator();
                egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                    if custom_devices.is_empty() {
                        ui.label("No custom devices yet");
                    }
                    for (i, device) in custom_devices.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(device.label());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Delete").clicked() {
                                        delete_clicked = Some(i);
                                    }
                                    if ui.button("Edit").clicked() {
                                        edit_clicked = Some(i);
                                    }
                                },
                            );
                        });
                    }
                });
                ui.separator();
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
            if close_clicked || response.should_close() {
                self.manage_open = false;
            }
            if let Some(i) = edit_clicked
                && let Some(device) = custom_devices.get(i)
            {
                self.open_edit(i, device);
            }
            if let Some(i) = delete_clicked {
                self.open_confirm_delete(i);
            }
        }

        if let Some((index, form)) = &mut self.edit {
            let name = custom_devices.get(*index).map_or("", |d| d.name.as_str());
            let title = format!("Edit - {name}");
            match form_modal(ctx, &title, "Save", form) {
                FormOutcome::Submitted => match form.parse() {
                    Ok(profile) => {
                        action = Some(DialogAction::Update(*index, profile));
                        self.edit = None;
                    }
                    Err(e) => self.warning = Some(e.to_string()),
                },
                FormOutcome::Cancelled => self.edit = None,
                FormOutcome::Open => {}
            }
        }

        if self.confirm_delete.is_some() {
            let mut answer = None;
            let response = message_modal(ctx, "confirm_delete", "Confirm", |ui| {
                ui.label("Delete this device?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(false);
                    }
                });
            });
            if response.should_close() {
                answer = answer.or(Some(false));
            }
            if let Some(confirmed) = answer
                && let Some(delete) = self.answer_delete(confirmed)
            {
                action = Some(delete);
            }
        }

        if let Some(message) = &self.warning {
            let mut dismissed = false;
            let response = message_modal(ctx, "invalid_input", "Invalid input", |ui| {
                ui.label(message.as_str());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
            if dismissed || response.should_close() {
                self.warning = None;
            }
        }

        action
    }
}

fn message_modal(
    ctx: &Context,
    id: &str,
    title: &str,
    add_contents: impl FnOnce(&mut Ui),
) -> egui::ModalResponse<()> {
    egui::Modal::new(Id::new(id)).show(ctx, |ui| {
        ui.set_width(260.0);
        ui.heading(title);
        add_contents(ui);
    })
}

enum FormOutcome {
    Open,
    Submitted,
    Cancelled,
}

fn form_modal(
    ctx: &Context,
    title: &str,
    submit_label: &str,
    form: &mut DeviceForm,
) -> FormOutcome {
    let mut outcome = FormOutcome::Open;
    let response = egui::Modal::new(Id::new("device_form").with(title)).show(ctx, |ui| {
        ui.set_width(300.0);
        ui.heading(title);
        egui::Grid::new("device_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();

                ui.label("Width (px):");
                ui.text_edit_singleline(&mut form.width);
                ui.end_row();

                ui.label("Height (px):");
                ui.text_edit_singleline(&mut form.height);
                ui.end_row();

                ui.label("Radius (px):");
                ui.text_edit_singleline(&mut form.radius);
                ui.end_row();
            });

        ui.horizontal(|ui| {
            if ui.button(submit_label).clicked() {
                outcome = FormOutcome::Submitted;
            }
            if ui.button("Cancel").clicked() {
                outcome = FormOutcome::Cancelled;
            }
        });
    });
    if matches!(outcome, FormOutcome::Open) && response.should_close() {
        FormOutcome::Cancelled
    } else {
        outcome
    }
}
