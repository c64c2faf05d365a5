//! Image handles.
//!
//! The engine never decodes pixels. An image is an opaque [`ImageId`] plus the
//! intrinsic size the host reported for it; renderers map ids to their own
//! textures.

mod registry;

pub use registry::{ImageAsset, ImageId, ImageRegisterError, ImageRegistry};
