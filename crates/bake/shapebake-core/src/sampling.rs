//! Clip sampling: extract (shape-key name, first-key value) pairs from a
//! clip's blend-shape bindings and resolve them against a target mesh.
//!
//! Model:
//! - Only bindings with the `blendShape.` prefix are relevant; the rest of
//!   the path is the shape-key name verbatim.
//! - The sampled value is the first keyframe in stored order, regardless of
//!   that key's time coordinate (single static target value per channel).
//! - Names are resolved against the *target* mesh's catalog, since clips
//!   reference channels by name only. Unresolved names stay in the output
//!   with `channel: None`; consumers must skip their geometry.
//!
//! Absent clips and malformed/empty clips never error: they produce an empty
//! result (zero contribution).

use crate::catalog::ShapeKeyCatalog;
use crate::clip::{shape_key_name, AnimationClip};

/// One blend-shape binding sampled from a clip, resolved against a mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledShapeKey {
    pub name: String,
    /// Value of the curve's first stored keyframe.
    pub value: f32,
    /// Channel ordinal on the target mesh, or None when the mesh has no
    /// channel of that name.
    pub channel: Option<usize>,
}

pub fn sample_clip(
    clip: Option<&AnimationClip>,
    catalog: &ShapeKeyCatalog,
) -> Vec<SampledShapeKey> {
    let Some(clip) = clip else {
        return Vec::new();
    };

    let mut sampled = Vec::new();
    for binding in &clip.bindings {
        let Some(name) = shape_key_name(&binding.property_path) else {
            continue;
        };
        let Some(key) = binding.curve.first_key() else {
            log::debug!(
                "clip '{}': binding '{}' has no keys, skipping",
                clip.name,
                binding.property_path
            );
            continue;
        };
        sampled.push(SampledShapeKey {
            name: name.to_string(),
            value: key.value,
            channel: catalog.index_of(name),
        });
    }
    sampled
}
