// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state structs the viewer components mutate. Only [`TransformModel`]
//! affects rendering; [`PointerTrackState`] is scratch bookkeeping.

pub mod pointer;
pub mod transform;

pub use pointer::{PointerKind, PointerTrackState};
pub use transform::TransformModel;
