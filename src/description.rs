//! Scene descriptions as produced by the house generator.
//!
//! Decoding never rejects a well-formed JSON document: fields with the wrong
//! shape are treated as absent and the scene builder applies its defaults.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ViewerError};
use crate::math::Rgb;

/// Camera placement. Both vectors are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    #[serde(deserialize_with = "lenient::vec3")]
    pub position: Option<[f32; 3]>,
    #[serde(deserialize_with = "lenient::vec3")]
    pub target: Option<[f32; 3]>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SunDescription {
    #[serde(deserialize_with = "lenient::vec3")]
    pub position: Option<[f32; 3]>,
    #[serde(deserialize_with = "lenient::number")]
    pub intensity: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AmbientDescription {
    #[serde(deserialize_with = "lenient::number")]
    pub intensity: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightingDescription {
    #[serde(deserialize_with = "lenient::object")]
    pub sun: Option<SunDescription>,
    #[serde(deserialize_with = "lenient::object")]
    pub ambient: Option<AmbientDescription>,
}

/// Informational block attached by the generator
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneMetadata {
    #[serde(deserialize_with = "lenient::string")]
    pub style: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub house_type: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub floors: Option<f32>,
    #[serde(deserialize_with = "lenient::string")]
    pub dimensions: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_objects: Option<f32>,
}

impl SceneMetadata {
    /// Short human-readable label, e.g. "rajasthani villa"
    pub fn label(&self) -> Option<String> {
        match (self.style.as_deref(), self.house_type.as_deref()) {
            (Some(style), Some(kind)) => Some(format!("{style} {kind}")),
            (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
            (None, None) => None,
        }
    }
}

/// One renderable entry of a scene description
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneObject {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub material: Option<String>,
    #[serde(deserialize_with = "lenient::color")]
    pub color: Option<Rgb>,
    #[serde(deserialize_with = "lenient::vec3")]
    pub position: Option<[f32; 3]>,
    #[serde(deserialize_with = "lenient::vec3")]
    pub scale: Option<[f32; 3]>,
    /// Explicit animation tag: "none", "sway" or "glow"
    #[serde(deserialize_with = "lenient::string")]
    pub animation: Option<String>,
}

impl SceneObject {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Camera, lighting and objects to render
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    #[serde(deserialize_with = "lenient::object")]
    pub camera: Option<CameraDescription>,
    #[serde(deserialize_with = "lenient::object")]
    pub lighting: Option<LightingDescription>,
    #[serde(deserialize_with = "lenient::objects")]
    pub objects: Vec<SceneObject>,
    #[serde(deserialize_with = "lenient::object")]
    pub metadata: Option<SceneMetadata>,
}

impl SceneDescription {
    /// Decode a JSON value. Never fails; a non-object value yields an empty scene.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            log::debug!("Scene description is not an object, using empty scene");
            return Self::default();
        }

        match serde_json::from_value(value) {
            Ok(description) => description,
            Err(e) => {
                log::debug!("Scene description could not be decoded, using empty scene: {}", e);
                Self::default()
            }
        }
    }

    /// Parse JSON text holding either a bare description or a generator response
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_document(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_document(value)
    }

    /// Load a description from a file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading scene description: {:?}", path);

        let file = std::fs::File::open(path)?;
        let description = Self::from_reader(std::io::BufReader::new(file))?;

        log::info!("Loaded {} objects from {:?}", description.objects.len(), path);
        Ok(description)
    }

    /// Accept a bare description or the generator's response envelope,
    /// where the scene sits under `data.model_data` (or `model_data`).
    fn from_document(value: Value) -> Result<Self> {
        if !is_envelope(&value) {
            return Ok(Self::from_value(value));
        }

        let model = value
            .pointer("/data/model_data")
            .or_else(|| value.get("model_data"))
            .filter(|model| !model.is_null())
            .cloned();

        match model {
            Some(model) => Ok(Self::from_value(model)),
            None => Err(ViewerError::MissingModelData),
        }
    }
}

fn is_envelope(value: &Value) -> bool {
    value.get("objects").is_none()
        && (value.get("success").is_some()
            || value.get("data").is_some()
            || value.get("model_data").is_some())
}

/// Deserializers that map anything of the wrong shape to "absent".
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::SceneObject;
    use crate::math::Rgb;

    pub fn vec3<'de, D>(deserializer: D) -> Result<Option<[f32; 3]>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(as_vec3(&value))
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_f64().map(|n| n as f32).filter(|n| n.is_finite()))
    }

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(str::to_owned))
    }

    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default())
    }

    pub fn color<'de, D>(deserializer: D) -> Result<Option<Rgb>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match &value {
            Value::String(text) => Rgb::parse(text),
            Value::Number(n) => n
                .as_u64()
                .filter(|hex| *hex <= 0xff_ffff)
                .map(|hex| Rgb::from_hex(hex as u32)),
            _ => None,
        })
    }

    pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(None);
        }
        Ok(serde_json::from_value(value).ok())
    }

    /// Every entry becomes an object; malformed entries become defaults
    pub fn objects<'de, D>(deserializer: D) -> Result<Vec<SceneObject>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Value::Array(items) = value else {
            log::debug!("`objects` is not an array, rendering no objects");
            return Ok(Vec::new());
        };

        Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    log::debug!("Object #{} is not an object, using defaults", index);
                    return SceneObject::default();
                }
                serde_json::from_value(item).unwrap_or_else(|e| {
                    log::debug!("Object #{} is malformed ({}), using defaults", index, e);
                    SceneObject::default()
                })
            })
            .collect())
    }

    fn as_vec3(value: &Value) -> Option<[f32; 3]> {
        let items = value.as_array()?;
        if items.len() < 3 {
            return None;
        }
        let mut out = [0.0f32; 3];
        for (slot, item) in out.iter_mut().zip(items) {
            let n = item.as_f64()? as f32;
            if !n.is_finite() {
                return None;
            }
            *slot = n;
        }
        Some(out)
    }
}
