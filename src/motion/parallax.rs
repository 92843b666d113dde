//! Pointer-driven parallax math.

use crate::config::{PARALLAX_BASE_DEPTH, PARALLAX_DEPTH_STEP, PARALLAX_STRENGTH};
use crate::motion::reveal::Rect;

/// Pointer position relative to the container center, roughly in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Returns `None` for a collapsed container, which has no meaningful center.
    pub fn within(pointer_x: f64, pointer_y: f64, container: &Rect) -> Option<Self> {
        if container.width <= 0.0 || container.height <= 0.0 {
            return None;
        }
        Some(Self {
            x: (pointer_x - container.left) / container.width - 0.5,
            y: (pointer_y - container.top) / container.height - 0.5,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Translation {
    pub dx: f64,
    pub dy: f64,
}

impl Translation {
    pub fn to_css(self) -> String {
        format!("translate3d({}px, {}px, 0)", self.dx, self.dy)
    }
}

pub fn depth(index: usize) -> f64 {
    index as f64 * PARALLAX_DEPTH_STEP + PARALLAX_BASE_DEPTH
}

pub fn translation(index: usize, offset: PointerOffset) -> Translation {
    let depth = depth(index);
    Translation {
        dx: offset.x * depth * PARALLAX_STRENGTH,
        dy: offset.y * depth * PARALLAX_STRENGTH,
    }
}

/// Ordered set of parallax layers. Depth follows registration order.
#[derive(Debug)]
pub struct ParallaxField<L> {
    layers: Vec<L>,
}

impl<L> Default for ParallaxField<L> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<L> ParallaxField<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_layer(&mut self, layer: L) -> usize {
        self.layers.push(layer);
        self.layers.len() - 1
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Pairs every layer with the translation for `offset`.
    pub fn translations(&self, offset: PointerOffset) -> impl Iterator<Item = (&L, Translation)> + '_ {
        self.layers
            .iter()
            .enumerate()
            .map(move |(i, layer)| (layer, translation(i, offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HERO: Rect = Rect {
        left: 0.0,
        top: 80.0,
        width: 1200.0,
        height: 800.0,
    };

    #[test]
    fn center_pointer_moves_nothing() {
        let mut field = ParallaxField::new();
        for name in ["blob-a", "blob-b", "preview"] {
            field.register_layer(name);
        }
        let offset = PointerOffset::within(600.0, 480.0, &HERO).unwrap();
        assert_eq!(offset, PointerOffset { x: 0.0, y: 0.0 });
        for (_, t) in field.translations(offset) {
            assert_eq!(t, Translation { dx: 0.0, dy: 0.0 });
        }
    }

    #[test]
    fn corner_pointer_moves_first_layer_by_depth() {
        let offset = PointerOffset::within(0.0, 80.0, &HERO).unwrap();
        assert_eq!(offset, PointerOffset { x: -0.5, y: -0.5 });
        let t = translation(0, offset);
        assert!((t.dx + 2.5).abs() < 1e-9);
        assert!((t.dy + 2.5).abs() < 1e-9);
    }

    #[test]
    fn collapsed_container_has_no_offset() {
        let empty = Rect::new(10.0, 10.0, 0.0, 300.0);
        assert_eq!(PointerOffset::within(10.0, 20.0, &empty), None);
    }

    #[test]
    fn layers_get_registration_order_indices() {
        let mut field = ParallaxField::new();
        assert_eq!(field.register_layer('a'), 0);
        assert_eq!(field.register_layer('b'), 1);
        assert_eq!(field.len(), 2);
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn css_transform() {
        let t = Translation { dx: 1.5, dy: -2.0 };
        assert_eq!(t.to_css(), "translate3d(1.5px, -2px, 0)");
    }

    proptest! {
        #[test]
        fn depth_strictly_increases(i in 0usize..64) {
            prop_assert!(depth(i + 1) > depth(i));
        }

        #[test]
        fn translation_scales_with_depth(
            i in 0usize..16,
            x in -0.5f64..0.5,
            y in -0.5f64..0.5,
        ) {
            prop_assume!(x.abs() > 1e-6 && y.abs() > 1e-6);
            let offset = PointerOffset { x, y };
            let near = translation(i, offset);
            let far = translation(i + 1, offset);
            prop_assert!(far.dx.abs() > near.dx.abs());
            prop_assert!(far.dy.abs() > near.dy.abs());
            prop_assert_eq!(far.dx.signum(), x.signum());
        }
    }
}
