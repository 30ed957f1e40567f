//! Error taxonomy for the bake.
//!
//! Caller contract violations (mismatched parallel arrays, wrong live-weight
//! vector length, malformed meshes) fail fast with no partial output. Absent
//! clips and unresolvable channel names are not errors; they degrade to zero
//! contribution or a skip recorded in the BakeReport.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BakeError {
    #[error("target mapping arrays differ in length: {names} names vs {clips} clips")]
    MappingLengthMismatch { names: usize, clips: usize },

    #[error("live weight vector has {got} entries, mesh has {expected} channels")]
    LiveWeightCountMismatch { expected: usize, got: usize },

    #[error("channel '{channel}' delta arrays have {got} vertices, mesh has {expected}")]
    VertexCountMismatch {
        channel: String,
        expected: usize,
        got: usize,
    },

    #[error("duplicate blend-shape channel name '{0}'")]
    DuplicateChannel(String),

    #[error("non-finite frame weight on channel '{0}'")]
    NonFiniteWeight(String),

    #[error("clip json parse error: {0}")]
    ClipParse(String),
}
