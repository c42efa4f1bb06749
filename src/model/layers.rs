use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declared shape of one named weight layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    /// `[input, output]`
    pub shape: [usize; 2],
}

impl LayerSpec {
    pub fn new(name: impl Into<String>, input: usize, output: usize) -> Self {
        Self {
            name: name.into(),
            shape: [input, output],
        }
    }

    /// Layout of the linear model over `attribute_num` attributes,
    /// together with the number of parameters an optimizer must search.
    pub fn linear_default(attribute_num: usize) -> (Vec<LayerSpec>, usize) {
        (
            vec![
                LayerSpec::new("w1", attribute_num, 1),
                LayerSpec::new("w2", 1, 1),
            ],
            attribute_num + 1,
        )
    }

    pub fn parameter_count(&self) -> usize {
        self.shape[0] * self.shape[1]
    }
}

/// Named layer shapes recorded at construction.
///
/// Descriptive only: scoring, prediction and fitness evaluation never
/// consult it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightLayoutRegistry {
    layers: Vec<LayerSpec>,
    shapes: HashMap<String, [usize; 2]>,
}

impl WeightLayoutRegistry {
    pub fn new(layers: &[LayerSpec]) -> Self {
        let shapes = layers
            .iter()
            .map(|layer| (format!("{}_shape", layer.name), layer.shape))
            .collect();

        Self {
            layers: layers.to_vec(),
            shapes,
        }
    }

    /// Shape registered for `name` (without the `_shape` suffix).
    pub fn shape(&self, name: &str) -> Option<[usize; 2]> {
        self.shapes.get(&format!("{}_shape", name)).copied()
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn total_parameters(&self) -> usize {
        self.layers.iter().map(LayerSpec::parameter_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_default_layout() {
        let (layers, params) = LayerSpec::linear_default(6);
        assert_eq!(params, 7);
        assert_eq!(layers[0], LayerSpec::new("w1", 6, 1));
        assert_eq!(layers[1], LayerSpec::new("w2", 1, 1));

        let registry = WeightLayoutRegistry::new(&layers);
        assert_eq!(registry.total_parameters(), params);
    }

    #[test]
    fn test_registry_records_shapes_verbatim() {
        let registry = WeightLayoutRegistry::new(&[
            LayerSpec::new("w1", 31, 20),
            LayerSpec::new("w2", 20, 10),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.shape("w1"), Some([31, 20]));
        assert_eq!(registry.shape("w2"), Some([20, 10]));
        assert_eq!(registry.shape("w3"), None);
        assert_eq!(registry.layers()[1].name, "w2");
    }

    #[test]
    fn test_layer_spec_deserializes_from_toml() {
        let layer: LayerSpec = toml::from_str("name = \"w1\"\nshape = [4, 1]").unwrap();
        assert_eq!(layer, LayerSpec::new("w1", 4, 1));
    }
}
