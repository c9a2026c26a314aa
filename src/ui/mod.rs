pub mod control_panel;
pub mod device_dialog;
pub mod phone;
pub mod viewport;
