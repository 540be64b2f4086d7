//! The drawing container: document layers, the working layer and the
//! shared drawing defaults used by the interactive tools.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layer::Layer;
use crate::shape::BaseShape;
use crate::style::Style;

/// A drawing document.
///
/// Shapes being drawn are staged on the `working` layer and move to the
/// current document layer when their construction sequence completes.
/// `current_style` is cloned (by `Arc`) into every shape the tools
/// create; `point_template` is the marker shape renderers draw at
/// control points, cloned into every point the tools create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
    layers: Vec<Layer>,
    current_layer: usize,
    working: Layer,
    pub current_style: Arc<Style>,
    pub point_template: Option<Arc<BaseShape>>,
}

impl Container {
    /// Creates a container with one document layer and an empty working
    /// layer.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            layers: vec![Layer::new("Layer1")],
            current_layer: 0,
            working: Layer::new("Working"),
            current_style: Arc::new(Style::default()),
            point_template: None,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.layers.iter_mut()
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Selects the layer new shapes are committed to. An out-of-range
    /// index is ignored with a warning.
    pub fn set_current_layer(&mut self, index: usize) {
        if index < self.layers.len() {
            self.current_layer = index;
        } else {
            warn!(
                "Layer index {} out of range ({} layers), keeping {}",
                index,
                self.layers.len(),
                self.current_layer
            );
        }
    }

    pub fn current_layer(&self) -> &Layer {
        &self.layers[self.current_layer]
    }

    pub fn current_layer_mut(&mut self) -> &mut Layer {
        &mut self.layers[self.current_layer]
    }

    pub fn working_layer(&self) -> &Layer {
        &self.working
    }

    pub fn working_layer_mut(&mut self) -> &mut Layer {
        &mut self.working
    }

    /// Invalidates every layer: each document layer in order, then the
    /// working layer.
    pub fn invalidate(&mut self) {
        for layer in &mut self.layers {
            layer.invalidate();
        }
        self.working.invalidate();
    }
}
