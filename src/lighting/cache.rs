//! Shared cache of built light masks
//!
//! Masks are expensive to build and never change once built, so each
//! distinct `PointLight` is rasterized once and handed out as an `Rc`.

use std::collections::HashMap;
use std::rc::Rc;

use crate::rasterizer::Framebuffer;

use super::mask::{circle_light_mask, PointLight};

#[derive(Debug, Default)]
pub struct MaskCache {
    masks: HashMap<PointLight, Rc<Framebuffer>>,
}

impl MaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask for `light`, building it on first use
    pub fn get_or_build(&mut self, light: PointLight) -> Rc<Framebuffer> {
        self.masks
            .entry(light)
            .or_insert_with(|| {
                tracing::debug!(radius = light.radius, steps = light.steps, alpha = light.alpha, "built light mask");
                Rc::new(circle_light_mask(&light))
            })
            .clone()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_light_shares_surface() {
        let mut cache = MaskCache::new();
        let a = cache.get_or_build(PointLight::new(10, 100, 100));
        let b = cache.get_or_build(PointLight::new(10, 100, 100));
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let c = cache.get_or_build(PointLight::new(32, 100, 90));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }
}
