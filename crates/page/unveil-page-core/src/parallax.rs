//! Parallax layers: scroll offset in, translateY writes out.
//!
//! Not one-shot and not visibility-gated; every scroll tick re-emits the
//! transform for each registered layer.

use serde::{Deserialize, Serialize};
use unveil_api_core::{ElementPath, Mutation};

use crate::outputs::PageOutputs;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParallaxLayer {
    pub path: ElementPath,
    /// Scroll-to-translate multiplier; 0.5 moves at half scroll speed.
    pub factor: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ParallaxField {
    layers: Vec<ParallaxLayer>,
}

impl ParallaxField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer; re-registering a path replaces its factor.
    pub fn register(&mut self, path: ElementPath, factor: f32) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.path == path) {
            layer.factor = factor;
        } else {
            self.layers.push(ParallaxLayer { path, factor });
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn on_scroll(&self, scroll_y: f32, out: &mut PageOutputs) {
        for layer in &self.layers {
            out.push_write(
                layer.path.clone(),
                Mutation::SetTranslateY(scroll_y * layer.factor),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_emits_scaled_transforms() {
        let mut field = ParallaxField::new();
        field.register(ElementPath::parse("hero/backdrop").unwrap(), 0.5);
        field.register(ElementPath::parse("hero/blob").unwrap(), 0.2);

        let mut out = PageOutputs::default();
        field.on_scroll(200.0, &mut out);
        let values: Vec<_> = out.writes.iter().map(|w| w.mutation.clone()).collect();
        assert_eq!(
            values,
            vec![Mutation::SetTranslateY(100.0), Mutation::SetTranslateY(40.0)]
        );
    }

    #[test]
    fn re_registering_replaces_factor() {
        let mut field = ParallaxField::new();
        let path = ElementPath::parse("hero/backdrop").unwrap();
        field.register(path.clone(), 0.5);
        field.register(path, 0.8);
        assert_eq!(field.len(), 1);

        let mut out = PageOutputs::default();
        field.on_scroll(100.0, &mut out);
        assert_eq!(
            out.writes.iter().next().unwrap().mutation,
            Mutation::SetTranslateY(80.0)
        );
    }
}
