//! Editable property surface of the rotator.
//!
//! Mirrors what an engine inspector shows for the component: each field
//! has a header and a tooltip, and edits go through `Rotator::set`, which
//! enforces the finite invariant.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::Rotator;
use crate::types::Space;

/// Fields of `Rotator` reachable from the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotatorProperty {
    Speed,
    Axis,
    Space,
}

/// A value read from or written to a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum PropertyValue {
    Scalar(f32),
    Vector(Vec3),
    Space(Space),
}

/// Static metadata shown next to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub header: &'static str,
    pub tooltip: &'static str,
}

/// Why a property edit was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// The value's kind does not match the property.
    KindMismatch {
        property: RotatorProperty,
        value: PropertyValue,
    },
    /// The value contains NaN or infinity.
    NotFinite { property: RotatorProperty },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::KindMismatch { property, value } => write!(
                f,
                "property `{}` cannot hold {:?}",
                property.descriptor().name,
                value
            ),
            PropertyError::NotFinite { property } => write!(
                f,
                "property `{}` must be finite",
                property.descriptor().name
            ),
        }
    }
}

impl std::error::Error for PropertyError {}

impl RotatorProperty {
    pub const ALL: [RotatorProperty; 3] = [
        RotatorProperty::Speed,
        RotatorProperty::Axis,
        RotatorProperty::Space,
    ];

    pub fn descriptor(self) -> PropertyDescriptor {
        match self {
            RotatorProperty::Speed => PropertyDescriptor {
                name: "speed",
                header: "Rotation Speed",
                tooltip: "The speed at which the object rotates.",
            },
            RotatorProperty::Axis => PropertyDescriptor {
                name: "axis",
                header: "Rotation Axis",
                tooltip: "The axis around which the object rotates.",
            },
            RotatorProperty::Space => PropertyDescriptor {
                name: "space",
                header: "Rotation Space",
                tooltip: "Whether the axis is relative to the object or the world.",
            },
        }
    }

    /// Look a property up by its inspector name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.descriptor().name == name)
    }
}

impl Rotator {
    pub fn get(&self, property: RotatorProperty) -> PropertyValue {
        match property {
            RotatorProperty::Speed => PropertyValue::Scalar(self.speed),
            RotatorProperty::Axis => PropertyValue::Vector(self.axis),
            RotatorProperty::Space => PropertyValue::Space(self.space),
        }
    }

    /// Write a property. On error the rotator is left untouched.
    pub fn set(
        &mut self,
        property: RotatorProperty,
        value: PropertyValue,
    ) -> Result<(), PropertyError> {
        match (property, value) {
            (RotatorProperty::Speed, PropertyValue::Scalar(speed)) => {
                if !speed.is_finite() {
                    return Err(PropertyError::NotFinite { property });
                }
                self.speed = speed;
            }
            (RotatorProperty::Axis, PropertyValue::Vector(axis)) => {
                if !axis.is_finite() {
                    return Err(PropertyError::NotFinite { property });
                }
                self.axis = axis;
            }
            (RotatorProperty::Space, PropertyValue::Space(space)) => {
                self.space = space;
            }
            _ => return Err(PropertyError::KindMismatch { property, value }),
        }
        Ok(())
    }
}
