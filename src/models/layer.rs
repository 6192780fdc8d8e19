use crate::error::AppError;
use crate::models::TextureId;
use palette_remap::Adjustments;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Name given to the layer that always exists
pub const DEFAULT_LAYER_NAME: &str = "Default";

/// Palette assigned to new layers and used when a named one is missing
pub const DEFAULT_PALETTE: &str = "terra";

/// Layer identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LayerId(u64);

impl LayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named group of textures sharing one recolor setting
///
/// Every texture is recolored with the sliders and palette of the layer
/// it belongs to. Membership is explicit; textures not assigned to any
/// layer fall back to the first (default) layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,

    /// Textures explicitly assigned to this layer
    #[serde(default)]
    pub textures: BTreeSet<TextureId>,

    /// Contrast slider, -100 to 100
    #[serde(default)]
    pub contrast: i32,

    /// Saturation slider, -100 to 100
    #[serde(default)]
    pub saturation: i32,

    /// Hue slider, -100 to 100
    #[serde(default)]
    pub hue: i32,

    /// Name of the target palette
    #[serde(default = "default_palette")]
    pub palette: String,
}

fn default_palette() -> String {
    DEFAULT_PALETTE.to_string()
}

impl Layer {
    pub fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            textures: BTreeSet::new(),
            contrast: 0,
            saturation: 0,
            hue: 0,
            palette: default_palette(),
        }
    }

    /// Set all three sliders at once, clamping each to `[-100, 100]`.
    pub fn set_sliders(&mut self, contrast: i32, saturation: i32, hue: i32) {
        self.contrast = contrast.clamp(-100, 100);
        self.saturation = saturation.clamp(-100, 100);
        self.hue = hue.clamp(-100, 100);
    }

    /// The layer's sliders as adjustment settings.
    ///
    /// The builder clamps again, so values straight from an imported JSON
    /// file cannot leave the valid range.
    pub fn adjustments(&self) -> Adjustments {
        Adjustments::new()
            .contrast(self.contrast)
            .saturation(self.saturation)
            .hue(self.hue)
    }
}

/// The set of layers plus which one is active
///
/// At least one layer always exists. The first layer doubles as the
/// default: textures with no explicit assignment belong to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerManager {
    layers: Vec<Layer>,
    active: LayerId,
    next_id: u64,
}

impl LayerManager {
    pub fn new() -> Self {
        let default_layer = Layer::new(LayerId::new(1), DEFAULT_LAYER_NAME);
        let active = default_layer.id;
        Self {
            layers: vec![default_layer],
            active,
            next_id: 2,
        }
    }

    /// All layers in creation order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.layers.iter_mut()
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    pub fn active_id(&self) -> LayerId {
        self.active
    }

    /// The active layer.
    ///
    /// `repair()` guarantees `active` points at an existing layer, so the
    /// fallback to the first layer only covers hand-edited state.
    pub fn active_layer(&self) -> &Layer {
        self.layer(self.active).unwrap_or(&self.layers[0])
    }

    pub fn set_active(&mut self, id: LayerId) -> Result<(), AppError> {
        if self.layer(id).is_none() {
            return Err(AppError::UnknownLayer(id));
        }
        self.active = id;
        Ok(())
    }

    /// Create a new empty layer and return its id.
    pub fn create_layer(&mut self, name: impl Into<String>) -> LayerId {
        let id = LayerId::new(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer::new(id, name));
        id
    }

    pub fn rename_layer(&mut self, id: LayerId, name: impl Into<String>) -> Result<(), AppError> {
        match self.layer_mut(id) {
            Some(layer) => {
                layer.name = name.into();
                Ok(())
            }
            None => Err(AppError::UnknownLayer(id)),
        }
    }

    /// Delete a layer, returning it so callers can invalidate caches.
    ///
    /// The last remaining layer cannot be deleted. Textures assigned to
    /// the deleted layer lose their explicit assignment and revert to the
    /// default layer. If the deleted layer was active, the first layer
    /// becomes active.
    pub fn delete_layer(&mut self, id: LayerId) -> Result<Layer, AppError> {
        if self.layers.len() == 1 {
            return Err(AppError::LastLayer);
        }
        let idx = self
            .layers
            .iter()
            .position(|l| l.id == id)
            .ok_or(AppError::UnknownLayer(id))?;

        let removed = self.layers.remove(idx);
        if self.active == id {
            self.active = self.layers[0].id;
        }
        Ok(removed)
    }

    /// Assign textures to a layer, removing them from every other layer.
    pub fn assign_textures(
        &mut self,
        id: LayerId,
        textures: &[TextureId],
    ) -> Result<(), AppError> {
        if self.layer(id).is_none() {
            return Err(AppError::UnknownLayer(id));
        }
        for layer in &mut self.layers {
            if layer.id == id {
                layer.textures.extend(textures.iter().cloned());
            } else {
                for texture in textures {
                    layer.textures.remove(texture);
                }
            }
        }
        Ok(())
    }

    /// Drop explicit assignments, reverting textures to the default layer.
    pub fn remove_textures(&mut self, textures: &[TextureId]) {
        for layer in &mut self.layers {
            for texture in textures {
                layer.textures.remove(texture);
            }
        }
    }

    /// The layer a texture belongs to.
    ///
    /// Falls back to the first layer when no layer claims the texture.
    pub fn layer_for_texture(&self, texture: &TextureId) -> &Layer {
        self.layers
            .iter()
            .find(|l| l.textures.contains(texture))
            .unwrap_or(&self.layers[0])
    }

    /// Discard all layers and start over with a single default layer.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fix up state after deserializing untrusted JSON.
    ///
    /// Guarantees the invariants the rest of the code relies on: at least
    /// one layer, an active id that exists, a next_id above every layer
    /// id, and sliders inside the valid range.
    pub fn repair(&mut self) {
        if self.layers.is_empty() {
            *self = Self::new();
            return;
        }
        if self.layer(self.active).is_none() {
            self.active = self.layers[0].id;
        }
        let max_id = self.layers.iter().map(|l| l.id.value()).max().unwrap_or(0);
        if self.next_id <= max_id {
            self.next_id = max_id + 1;
        }
        for layer in &mut self.layers {
            let (c, s, h) = (layer.contrast, layer.saturation, layer.hue);
            layer.set_sliders(c, s, h);
        }
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}
