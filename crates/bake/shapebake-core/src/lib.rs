//! shapebake-core: blend-shape recombination and baking (host-agnostic)
//!
//! Replaces the stored per-vertex deltas of designated blend-shape channels
//! with values baked from animation clips' first keyframes, producing a new
//! mesh whose channel layout matches the source exactly. Typical use: keep
//! lipsync shape keys from fighting with face-reshaping keys by baking the
//! reshape into the lipsync channels at build time.
//!
//! The host editor/build pipeline stays outside: all inputs (mesh, live
//! weight vector, target mapping) are explicit parameters, and replacement
//! bookkeeping happens through the [`ReplacedMeshRegistry`] callback seam.

pub mod accumulate;
pub mod catalog;
pub mod clip;
pub mod error;
pub mod mesh;
pub mod rebuild;
pub mod sampling;
pub mod stored_clip;

// Re-exports for consumers (adapters)
pub use accumulate::accumulate;
pub use catalog::ShapeKeyCatalog;
pub use clip::{shape_key_name, AnimationClip, Curve, CurveBinding, Keyframe, BLEND_SHAPE_PREFIX};
pub use error::BakeError;
pub use mesh::{BlendShapeChannel, ChannelDeltas, Mesh, Vec3};
pub use rebuild::{rebuild, BakeReport, NullRegistry, ReplacedMeshRegistry, TargetMapping};
pub use sampling::{sample_clip, SampledShapeKey};
pub use stored_clip::parse_clip_json;
