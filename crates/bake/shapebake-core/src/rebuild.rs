//! Mesh rebuild: single pass over the source channels, substituting
//! accumulated deltas for targeted channels and copying untargeted channels
//! verbatim. Channel count, names, order and frame weights are preserved
//! exactly; only targeted channels' geometry differs.

use crate::accumulate::accumulate;
use crate::catalog::ShapeKeyCatalog;
use crate::clip::AnimationClip;
use crate::error::BakeError;
use crate::mesh::{BlendShapeChannel, Mesh};
use crate::sampling::{sample_clip, SampledShapeKey};

/// Caller-supplied parallel pair: target channel names and the clip (if any)
/// whose sampled values replace each one. Index-aligned; lengths must match.
#[derive(Clone, Debug, Default)]
pub struct TargetMapping {
    pub names: Vec<String>,
    pub clips: Vec<Option<AnimationClip>>,
}

impl TargetMapping {
    pub fn validate(&self) -> Result<(), BakeError> {
        if self.names.len() != self.clips.len() {
            return Err(BakeError::MappingLengthMismatch {
                names: self.names.len(),
                clips: self.clips.len(),
            });
        }
        Ok(())
    }

    /// Position of a channel name in the mapping, if targeted.
    fn position_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Seam to the host's replaced-object bookkeeping. Called exactly once per
/// successful rebuild with the original and replacement mesh; the core does
/// not depend on its result.
pub trait ReplacedMeshRegistry {
    fn register_replaced(&mut self, original: &Mesh, replacement: &Mesh);
}

/// No-op registry for callers without replacement bookkeeping.
#[derive(Default)]
pub struct NullRegistry;

impl ReplacedMeshRegistry for NullRegistry {
    fn register_replaced(&mut self, _original: &Mesh, _replacement: &Mesh) {}
}

/// Outcome summary of one rebuild.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BakeReport {
    /// Channel names whose deltas were replaced, in channel order.
    pub replaced: Vec<String>,
    /// Mapping entries naming no channel on the source mesh, in mapping order.
    pub unmatched_targets: Vec<String>,
}

impl BakeReport {
    /// True when no channel was touched ("nothing to do").
    pub fn is_noop(&self) -> bool {
        self.replaced.is_empty()
    }
}

/// Produce a new mesh with targeted channels' deltas replaced by values
/// accumulated from the mapped clips.
///
/// `live_weights` holds the renderer's current weight per channel ordinal
/// and must have one entry per source channel. Inputs are read-only; the
/// only mutation is construction of the returned mesh.
pub fn rebuild(
    source: &Mesh,
    live_weights: &[f32],
    mapping: &TargetMapping,
    registry: &mut dyn ReplacedMeshRegistry,
) -> Result<(Mesh, BakeReport), BakeError> {
    mapping.validate()?;
    source.validate_basic()?;
    if live_weights.len() != source.channels.len() {
        return Err(BakeError::LiveWeightCountMismatch {
            expected: source.channels.len(),
            got: live_weights.len(),
        });
    }

    let catalog = ShapeKeyCatalog::for_mesh(source);

    // Sample each mapped clip once, index-aligned with the mapping.
    let sampled_per_target: Vec<Vec<SampledShapeKey>> = mapping
        .clips
        .iter()
        .map(|clip| sample_clip(clip.as_ref(), &catalog))
        .collect();

    let mut report = BakeReport::default();
    for name in &mapping.names {
        if catalog.index_of(name).is_none() {
            log::warn!(
                "target shape key '{name}' not present on mesh '{}', skipping",
                source.name
            );
            report.unmatched_targets.push(name.clone());
        }
    }

    let mut channels = Vec::with_capacity(source.channels.len());
    for ch in &source.channels {
        let deltas = match mapping.position_of(&ch.name) {
            Some(pos) => {
                report.replaced.push(ch.name.clone());
                accumulate(source, live_weights, &sampled_per_target[pos])
            }
            None => ch.deltas.clone(),
        };
        channels.push(BlendShapeChannel {
            name: ch.name.clone(),
            frame_weight: ch.frame_weight,
            deltas,
        });
    }

    let rebuilt = Mesh {
        name: source.name.clone(),
        vertex_count: source.vertex_count,
        channels,
    };

    if report.is_noop() {
        log::info!("mesh '{}': no target channels matched, nothing to do", source.name);
    }

    registry.register_replaced(source, &rebuilt);
    Ok((rebuilt, report))
}
