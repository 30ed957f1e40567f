//! Canonical mesh blend-shape data model.
//!
//! Only blend-shape channel data is modelled here; topology (triangles, UVs,
//! bone weights) is carried opaquely by the host and is not touched by the
//! bake. Every channel stores a single frame of per-vertex deltas, all three
//! arrays sized to the mesh vertex count.

use serde::{Deserialize, Serialize};

use crate::error::BakeError;

/// Component-wise 3-vector for per-vertex deltas.
pub type Vec3 = [f32; 3];

/// One frame of per-vertex deltas for a blend-shape channel.
/// All three arrays have length `vertex_count` of the owning mesh.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelDeltas {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec3>,
}

impl ChannelDeltas {
    /// Neutral delta field: zero vectors for every vertex.
    pub fn zeroed(vertex_count: usize) -> Self {
        Self {
            positions: vec![[0.0; 3]; vertex_count],
            normals: vec![[0.0; 3]; vertex_count],
            tangents: vec![[0.0; 3]; vertex_count],
        }
    }

    /// True when all three arrays have the given length.
    pub fn has_len(&self, vertex_count: usize) -> bool {
        self.positions.len() == vertex_count
            && self.normals.len() == vertex_count
            && self.tangents.len() == vertex_count
    }
}

/// A named blend-shape channel with its single stored keyframe.
/// `frame_weight` is the weight at which the frame takes full effect
/// (conventionally 100 for single-frame shapes).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BlendShapeChannel {
    pub name: String,
    #[serde(rename = "frameWeight")]
    pub frame_weight: f32,
    pub deltas: ChannelDeltas,
}

/// A mesh reduced to what the bake needs: an ordered sequence of blend-shape
/// channels sharing one vertex count.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Mesh {
    pub name: String,
    #[serde(rename = "vertexCount")]
    pub vertex_count: usize,
    pub channels: Vec<BlendShapeChannel>,
}

impl Mesh {
    /// Channel names in channel-index order.
    pub fn channel_names(&self) -> Vec<String> {
        self.channels.iter().map(|c| c.name.clone()).collect()
    }

    /// Validate basic invariants (delta array lengths, unique names, finite
    /// frame weights).
    pub fn validate_basic(&self) -> Result<(), BakeError> {
        for (i, ch) in self.channels.iter().enumerate() {
            if !ch.deltas.has_len(self.vertex_count) {
                return Err(BakeError::VertexCountMismatch {
                    channel: ch.name.clone(),
                    expected: self.vertex_count,
                    got: ch.deltas.positions.len(),
                });
            }
            if !ch.frame_weight.is_finite() {
                return Err(BakeError::NonFiniteWeight(ch.name.clone()));
            }
            if self.channels[..i].iter().any(|c| c.name == ch.name) {
                return Err(BakeError::DuplicateChannel(ch.name.clone()));
            }
        }
        Ok(())
    }
}
