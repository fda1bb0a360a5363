mod stack;
mod wireframe;

pub use stack::{Stack, SVM_STACK_INVALID, SVM_STACK_SIZE};
pub use wireframe::{WireframeEvaluator, WireframeNode};

use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr};

/// One packed shader instruction payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Uint4 {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub w: u32,
}

/// Unpacks four byte-sized fields from one instruction word.
pub fn decode_node_uchar4(v: u32) -> (u32, u32, u32, u32) {
    (v & 0xFF, (v >> 8) & 0xFF, (v >> 16) & 0xFF, (v >> 24) & 0xFF)
}

/// Packs four byte-sized fields into one instruction word.
pub fn encode_node_uchar4(x: u32, y: u32, z: u32, w: u32) -> u32 {
    debug_assert!(x <= 0xFF && y <= 0xFF && z <= 0xFF && w <= 0xFF);

    x | (y << 8) | (z << 16) | (w << 24)
}

/// Screen axis a node result is perturbed along for bump mapping.
///
/// The discriminants match the instruction encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Display, FromRepr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u32)]
pub enum BumpOffset {
    None = 0,
    Dx = 1,
    Dy = 2,
}
