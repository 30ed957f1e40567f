//! Parse editor-exported clip JSON into the core AnimationClip model.
//!
//! The JSON schema mirrors what the editor tooling emits: a clip name plus a
//! list of `{ path, keys: [{ time, value }] }` bindings. Key values must be
//! finite; key *order* is preserved as stored (the sampler reads the first
//! stored key, not the earliest time).

use serde::Deserialize;

use crate::clip::{AnimationClip, Curve, CurveBinding, Keyframe};
use crate::error::BakeError;

pub fn parse_clip_json(s: &str) -> Result<AnimationClip, BakeError> {
    let raw: StoredClip =
        serde_json::from_str(s).map_err(|e| BakeError::ClipParse(e.to_string()))?;

    let mut bindings = Vec::with_capacity(raw.bindings.len());
    for b in raw.bindings {
        let mut keys = Vec::with_capacity(b.keys.len());
        for k in b.keys {
            if !(k.value.is_finite() && k.time.is_finite()) {
                return Err(BakeError::ClipParse(format!(
                    "non-finite keyframe on binding '{}'",
                    b.path
                )));
            }
            keys.push(Keyframe {
                time: k.time as f32,
                value: k.value as f32,
            });
        }
        bindings.push(CurveBinding {
            property_path: b.path,
            curve: Curve { keys },
        });
    }

    Ok(AnimationClip {
        name: raw.name,
        bindings,
    })
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredClip {
    pub name: String,
    #[serde(default)]
    pub bindings: Vec<StoredBinding>,
}

#[derive(Debug, Deserialize)]
struct StoredBinding {
    pub path: String,
    #[serde(default)]
    pub keys: Vec<StoredKey>,
}

#[derive(Debug, Deserialize)]
struct StoredKey {
    #[serde(default)]
    pub time: f64,
    pub value: f64,
}
