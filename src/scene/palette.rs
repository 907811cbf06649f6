use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::math::Rgb;

/// Surface appearance of a mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub opacity: f32,
    pub transparent: bool,
    /// Shade with face normals instead of interpolated vertex normals
    pub flat_shading: bool,
}

impl Material {
    pub const fn solid(color: Rgb) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
            flat_shading: false,
        }
    }

    pub const fn translucent(color: Rgb, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            transparent: true,
            flat_shading: false,
        }
    }

    /// Material built on the spot for an object whose material key is unknown
    pub const fn ad_hoc(color: Rgb) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
            flat_shading: true,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent && self.opacity < 1.0
    }
}

/// Key used for the ground plane
pub const GROUND_MATERIAL: &str = "ground";

const STANDARD_ENTRIES: &[(&str, Material)] = &[
    ("foundation", Material::solid(Rgb::from_hex(0x8b4513))),
    ("wall", Material::solid(Rgb::from_hex(0xf5f5dc))),
    ("roof_traditional", Material::solid(Rgb::from_hex(0xdc143c))),
    ("roof_detail", Material::solid(Rgb::from_hex(0xb22222))),
    ("roof_rajasthani", Material::solid(Rgb::from_hex(0xcd853f))),
    ("roof_modern", Material::solid(Rgb::from_hex(0x708090))),
    ("dome", Material::solid(Rgb::from_hex(0xdaa520))),
    ("window", Material::translucent(Rgb::from_hex(0x87ceeb), 0.7)),
    ("door", Material::solid(Rgb::from_hex(0x8b4513))),
    ("door_frame", Material::solid(Rgb::from_hex(0x654321))),
    ("balcony", Material::solid(Rgb::from_hex(0xd2b48c))),
    ("railing", Material::solid(Rgb::from_hex(0x8b4513))),
    ("courtyard", Material::solid(Rgb::from_hex(0xf4a460))),
    ("pillar", Material::solid(Rgb::from_hex(0xd2b48c))),
    ("tree", Material::solid(Rgb::from_hex(0x228b22))),
    (GROUND_MATERIAL, Material::solid(Rgb::from_hex(0x90ee90))),
];

static STANDARD: LazyLock<Arc<MaterialPalette>> =
    LazyLock::new(|| Arc::new(MaterialPalette::from_entries(STANDARD_ENTRIES.iter().cloned())));

/// Immutable name → material table
#[derive(Debug, Clone, Default)]
pub struct MaterialPalette {
    materials: HashMap<String, Material>,
}

impl MaterialPalette {
    /// The built-in palette shared by every viewer in the process
    pub fn standard() -> Arc<MaterialPalette> {
        Arc::clone(&STANDARD)
    }

    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Material)>,
    {
        Self {
            materials: entries.into_iter().map(|(k, m)| (k.into(), m)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Resolve an object's material; always yields something.
    ///
    /// Known keys map to the palette entry. Anything else becomes a flat
    /// material in the object's own colour, or white when it has none.
    pub fn resolve(&self, name: Option<&str>, color: Option<Rgb>) -> Material {
        if let Some(material) = name.and_then(|n| self.get(n)) {
            return material.clone();
        }
        if let Some(name) = name {
            log::debug!("Unknown material {:?}, using object colour", name);
        }
        Material::ad_hoc(color.unwrap_or(Rgb::WHITE))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
