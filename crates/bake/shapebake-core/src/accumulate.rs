//! Accumulation of sampled contributions into one aggregate delta field.
//!
//! For each resolved sampled key the scale factor is
//! `(sampled_value - live_weight) / 100`, i.e. the difference between where
//! the animation wants the channel and where the renderer currently holds
//! it, normalized to the 0..100 weight convention. Contributions are
//! strictly additive across sampled keys; blend-shape weights compose
//! linearly in the renderer and the bake mirrors that. No averaging, no
//! clamping, no last-write-wins.
//!
//! An empty sampled set yields the all-zero field: an unset target channel
//! bakes to the fully neutral shape, never "unchanged-from-source".

use crate::mesh::{ChannelDeltas, Mesh};
use crate::sampling::SampledShapeKey;

/// Combine zero or more sampled contributions into one delta field sized to
/// `mesh.vertex_count`. `live_weights` is indexed by channel ordinal;
/// values are conventionally in [0,100] but are not clamped here.
pub fn accumulate(
    mesh: &Mesh,
    live_weights: &[f32],
    sampled: &[SampledShapeKey],
) -> ChannelDeltas {
    let v = mesh.vertex_count;
    let mut out = ChannelDeltas::zeroed(v);

    for key in sampled {
        // Unresolved names carry no geometry to read.
        let Some(ci) = key.channel else {
            continue;
        };
        let src = &mesh.channels[ci].deltas;
        let live = live_weights[ci];
        let scale = (key.value - live) / 100.0;

        for k in 0..v {
            out.positions[k][0] += src.positions[k][0] * scale;
            out.positions[k][1] += src.positions[k][1] * scale;
            out.positions[k][2] += src.positions[k][2] * scale;

            out.normals[k][0] += src.normals[k][0] * scale;
            out.normals[k][1] += src.normals[k][1] * scale;
            out.normals[k][2] += src.normals[k][2] * scale;

            out.tangents[k][0] += src.tangents[k][0] * scale;
            out.tangents[k][1] += src.tangents[k][1] * scale;
            out.tangents[k][2] += src.tangents[k][2] * scale;
        }
    }

    out
}
