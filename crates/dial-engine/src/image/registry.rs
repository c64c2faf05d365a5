use std::fmt;

use crate::coords::Vec2;

/// Error returned by [`ImageRegistry::register`].
#[derive(Debug, Clone)]
pub struct ImageRegisterError(pub String);

impl fmt::Display for ImageRegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image register error: {}", self.0)
    }
}

impl std::error::Error for ImageRegisterError {}

/// Opaque handle to an image registered in an [`ImageRegistry`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(pub(crate) usize);

/// An image handle together with its intrinsic size in logical pixels.
///
/// Immutable once handed out. Widgets decide placement and rotation; the
/// pixels themselves belong to whoever renders the draw list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageAsset {
    pub id: ImageId,
    pub width: f32,
    pub height: f32,
}

impl ImageAsset {
    #[inline]
    pub fn intrinsic_size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

struct Entry {
    name: String,
    size: Vec2,
}

/// Owns the names and intrinsic sizes of the images known to the application.
pub struct ImageRegistry {
    entries: Vec<Entry>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Stores an image of the given intrinsic size under `name`.
    ///
    /// Zero, negative and non-finite sizes are rejected: every consumer
    /// divides by the intrinsic size when fitting an image into a surface.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        width: f32,
        height: f32,
    ) -> Result<ImageAsset, ImageRegisterError> {
        let name = name.into();
        let size = Vec2::new(width, height);
        if !size.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ImageRegisterError(format!(
                "'{name}' has unusable intrinsic size {width}x{height}"
            )));
        }

        let id = ImageId(self.entries.len());
        log::debug!("registered image '{name}' ({width}x{height}) as {id:?}");
        self.entries.push(Entry { name, size });
        Ok(ImageAsset { id, width, height })
    }

    /// Returns the asset registered under `id`, if `id` is valid.
    pub fn get(&self, id: ImageId) -> Option<ImageAsset> {
        self.entries
            .get(id.0)
            .map(|e| ImageAsset { id, width: e.size.x, height: e.size.y })
    }

    /// Returns the name `id` was registered under.
    pub fn name(&self, id: ImageId) -> Option<&str> {
        self.entries.get(id.0).map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
