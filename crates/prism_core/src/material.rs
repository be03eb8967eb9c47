//! Materials and the shared material registry.
//!
//! Materials are immutable shading descriptions shared across many objects.
//! Geometry never owns a material; it holds a [`MaterialId`] handle into a
//! [`MaterialRegistry`].

use std::collections::HashMap;
use std::sync::Arc;

use prism_math::Vec3;

use crate::texture::Texture;

/// Handle to a material in a [`MaterialRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

impl MaterialId {
    /// The registry's built-in default material.
    pub const DEFAULT: MaterialId = MaterialId(0);

    /// Raw index of this handle.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An immutable description of shading behavior.
///
/// The base color doubles as the deterministic fallback when an object has
/// neither vertex colors nor a usable texture coordinate / texture pairing,
/// so a single malformed object cannot abort a frame.
#[derive(Clone, Debug)]
pub struct Material {
    /// Material name (registry key)
    pub name: String,

    /// Base color, also the shading fallback (linear RGB, 0-1)
    pub base_color: Vec3,

    /// Texture sampled at interpolated UVs when the object carries
    /// texture coordinates and no vertex colors
    pub texture: Option<Arc<Texture>>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_color: Vec3::new(0.5, 0.5, 0.5), // Grey default
            texture: None,
        }
    }
}

impl Material {
    /// Create a new untextured material.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the base color.
    pub fn with_base_color(mut self, base_color: Vec3) -> Self {
        self.base_color = base_color;
        self
    }

    /// Set the texture.
    pub fn with_texture(mut self, texture: Arc<Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Check if this material has a texture.
    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }
}

/// Process-wide table of named, shared materials.
///
/// Slot 0 always holds a default material so lookups with a stale or
/// foreign handle degrade to the default instead of panicking.
pub struct MaterialRegistry {
    materials: Vec<Arc<Material>>,
    by_name: HashMap<String, MaterialId>,
}

impl MaterialRegistry {
    /// Create a registry seeded with the default material.
    pub fn new() -> Self {
        let mut registry = Self {
            materials: Vec::new(),
            by_name: HashMap::new(),
        };
        registry.insert(Material::new("default"));
        registry
    }

    /// Add a material and return its handle.
    ///
    /// Inserting a material with an existing name re-points the name at the
    /// new entry; previously handed-out handles keep the old definition.
    pub fn insert(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len());
        if !material.name.is_empty() {
            self.by_name.insert(material.name.clone(), id);
        }
        self.materials.push(Arc::new(material));
        id
    }

    /// Resolve a handle, falling back to the default material when the
    /// handle does not match any entry.
    pub fn get(&self, id: MaterialId) -> &Arc<Material> {
        self.materials.get(id.0).unwrap_or_else(|| {
            log::warn!("unknown material id {}, using default", id.0);
            &self.materials[0]
        })
    }

    /// Look up a material handle by name.
    pub fn lookup(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    /// Number of registered materials (including the default).
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// A registry is never empty; it always holds the default material.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_seeds_default() {
        let registry = MaterialRegistry::new();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("default"), Some(MaterialId::DEFAULT));
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = MaterialRegistry::new();
        let id = registry.insert(Material::new("brick").with_base_color(Vec3::new(0.7, 0.3, 0.2)));

        assert_eq!(registry.lookup("brick"), Some(id));
        assert_eq!(registry.get(id).name, "brick");
        assert!((registry.get(id).base_color.x - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_unknown_handle_falls_back_to_default() {
        let registry = MaterialRegistry::new();
        let bogus = MaterialId(42);
        assert_eq!(registry.get(bogus).name, "default");
    }

    #[test]
    fn test_materials_are_shared() {
        let mut registry = MaterialRegistry::new();
        let id = registry.insert(Material::new("plastic"));

        let a = registry.get(id).clone();
        let b = registry.get(id).clone();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
