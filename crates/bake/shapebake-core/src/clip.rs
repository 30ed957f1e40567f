//! Animation clip model: property-path bindings with float curves.
//!
//! A clip is an ordered set of curve bindings. Only bindings whose property
//! path begins with [`BLEND_SHAPE_PREFIX`] drive blend-shape weights; the
//! remainder of the path (verbatim, no further decoding) is the shape-key
//! name. Everything else (transform, material, ...) is ignored by the bake.

use serde::{Deserialize, Serialize};

/// Property-path prefix marking a blend-shape weight binding.
pub const BLEND_SHAPE_PREFIX: &str = "blendShape.";

/// Shape-key name encoded in a property path, or None for non-blend-shape
/// bindings. The single place the prefix convention lives.
pub fn shape_key_name(property_path: &str) -> Option<&str> {
    property_path.strip_prefix(BLEND_SHAPE_PREFIX)
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Curve {
    pub keys: Vec<Keyframe>,
}

impl Curve {
    /// First keyframe in stored order, independent of its time coordinate.
    /// The bake reads exactly one static target value per channel.
    pub fn first_key(&self) -> Option<&Keyframe> {
        self.keys.first()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurveBinding {
    #[serde(rename = "propertyPath")]
    pub property_path: String,
    pub curve: Curve,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub bindings: Vec<CurveBinding>,
}
