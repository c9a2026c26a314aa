//! Device profiles: the built-in phone geometries plus user-defined ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("{field} must be a whole number")]
    InvalidNumber { field: &'static str },

    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },

    #[error("Device name must not be empty")]
    EmptyName,
}

/// A named phone geometry in unscaled CSS pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub radius: u32,
}

impl DeviceProfile {
    /// Build a profile, rejecting empty names and zero dimensions.
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        radius: u32,
    ) -> Result<Self, DeviceError> {
        let profile = Self {
            name: name.into(),
            width,
            height,
            radius,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), DeviceError> {
        if self.name.trim().is_empty() {
            return Err(DeviceError::EmptyName);
        }
        for (field, value) in [
            ("Width", self.width),
            ("Height", self.height),
            ("Radius", self.radius),
        ] {
            if value == 0 {
                return Err(DeviceError::NonPositive { field });
            }
        }
        Ok(())
    }

    /// Label shown in the device selector, e.g. `iPhone Mini (375x812)`.
    pub fn label(&self) -> String {
        format!("{} ({}x{})", self.name, self.width, self.height)
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

struct Builtin {
    name: &'static str,
    width: u32,
    height: u32,
    radius: u32,
}

const BUILTIN_DEVICES: [Builtin; 5] = [
    Builtin { name: "iPhone 17", width: 393, height: 852, radius: 55 },
    Builtin { name: "iPhone 16", width: 393, height: 852, radius: 55 },
    Builtin { name: "iPhone 13/14/15", width: 390, height: 844, radius: 50 },
    Builtin { name: "iPhone Pro Max", width: 430, height: 932, radius: 55 },
    Builtin { name: "iPhone Mini", width: 375, height: 812, radius: 45 },
];

/// Number of built-in profiles; custom profiles start at this combined index.
pub const BUILTIN_COUNT: usize = BUILTIN_DEVICES.len();

/// The built-in profiles in their fixed order.
pub fn builtin_devices() -> Vec<DeviceProfile> {
    BUILTIN_DEVICES
        .iter()
        .map(|b| DeviceProfile {
            name: b.name.to_string(),
            width: b.width,
            height: b.height,
            radius: b.radius,
        })
        .collect()
}

/// Raw text from the add/edit device dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceForm {
    pub name: String,
    pub width: String,
    pub height: String,
    pub radius: String,
}

impl Default for DeviceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            width: String::new(),
            height: String::new(),
            radius: "50".to_string(),
        }
    }
}

impl DeviceForm {
    pub fn from_profile(profile: &DeviceProfile) -> Self {
        Self {
            name: profile.name.clone(),
            width: profile.width.to_string(),
            height: profile.height.to_string(),
            radius: profile.radius.to_string(),
        }
    }

    /// Parse the form into a profile. Nothing is mutated on failure.
    pub fn parse(&self) -> Result<DeviceProfile, DeviceError> {
        let width = parse_dimension("Width", &self.width)?;
        let height = parse_dimension("Height", &self.height)?;
        let radius = parse_dimension("Radius", &self.radius)?;
        DeviceProfile::new(self.name.trim(), width, height, radius)
    }
}

fn parse_dimension(field: &'static str, text: &str) -> Result<u32, DeviceError> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| DeviceError::InvalidNumber { field })?;
    if value <= 0 {
        return Err(DeviceError::NonPositive { field });
    }
    u32::try_from(value).map_err(|_| DeviceError::InvalidNumber { field })
}
