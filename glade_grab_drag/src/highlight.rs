// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus-highlight pair: a solid grab-state highlight and its dashed
//! drag-state derivative.

use alloc::vec::Vec;
use kurbo::{BezPath, Shape};

/// Which highlight of a [`HighlightPair`] is active.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HighlightKind {
    /// The solid highlight shown while grabbable.
    Solid,
    /// The dashed highlight shown while draggable.
    Dashed,
}

/// The two shape-synchronized focus highlights of a grab-drag element.
///
/// The solid highlight mirrors the element's own highlight shape; the
/// dashed highlight is a derivative of it, recomputed from the same source
/// shape whenever it changes. The embedder forwards highlight shape changes
/// by calling [`HighlightPair::set_shape`] from its shape-changed listener;
/// the pair never goes stale on its own.
#[derive(Clone, Debug, Default)]
pub struct HighlightPair {
    solid: BezPath,
    dashed: BezPath,
    dash_pattern: Vec<f64>,
}

/// Flattening tolerance for the dashed derivative.
const DASH_TOLERANCE: f64 = 0.1;

impl HighlightPair {
    /// Creates an empty pair with the given dash pattern (on/off lengths).
    ///
    /// An empty pattern makes the "dashed" highlight a plain copy of the
    /// solid one.
    #[must_use]
    pub fn new(dash_pattern: Vec<f64>) -> Self {
        debug_assert!(
            dash_pattern.iter().all(|len| *len > 0.0),
            "dash pattern lengths must be positive"
        );
        Self {
            solid: BezPath::new(),
            dashed: BezPath::new(),
            dash_pattern,
        }
    }

    /// Replaces the source shape and recomputes the dashed derivative.
    pub fn set_shape(&mut self, shape: &BezPath) {
        self.solid = shape.clone();
        self.dashed = if self.dash_pattern.is_empty() {
            shape.clone()
        } else {
            kurbo::dash(
                shape.path_elements(DASH_TOLERANCE),
                0.0,
                &self.dash_pattern,
            )
            .collect()
        };
    }

    /// Returns the solid grab-state highlight.
    #[must_use]
    pub fn solid(&self) -> &BezPath {
        &self.solid
    }

    /// Returns the dashed drag-state highlight.
    #[must_use]
    pub fn dashed(&self) -> &BezPath {
        &self.dashed
    }

    /// Returns the highlight for the given kind.
    #[must_use]
    pub fn get(&self, kind: HighlightKind) -> &BezPath {
        match kind {
            HighlightKind::Solid => &self.solid,
            HighlightKind::Dashed => &self.dashed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Rect;

    fn rect_path() -> BezPath {
        Rect::new(0.0, 0.0, 40.0, 20.0).to_path(DASH_TOLERANCE)
    }

    #[test]
    fn empty_pair_has_empty_paths() {
        let pair = HighlightPair::new(vec![7.0, 7.0]);
        assert!(pair.solid().elements().is_empty());
        assert!(pair.dashed().elements().is_empty());
    }

    #[test]
    fn set_shape_updates_both_highlights() {
        let mut pair = HighlightPair::new(vec![7.0, 7.0]);
        pair.set_shape(&rect_path());

        assert_eq!(pair.solid().elements(), rect_path().elements());
        // Dashing a 120-unit perimeter with 7-on/7-off produces more
        // subpaths than the source rectangle.
        assert!(pair.dashed().elements().len() > pair.solid().elements().len());
    }

    #[test]
    fn empty_dash_pattern_copies_the_source() {
        let mut pair = HighlightPair::new(Vec::new());
        pair.set_shape(&rect_path());
        assert_eq!(pair.dashed().elements(), pair.solid().elements());
    }

    #[test]
    fn shape_changes_recompute_the_derivative() {
        let mut pair = HighlightPair::new(vec![7.0, 7.0]);
        pair.set_shape(&rect_path());
        let first = pair.dashed().elements().len();

        let bigger = Rect::new(0.0, 0.0, 400.0, 200.0).to_path(DASH_TOLERANCE);
        pair.set_shape(&bigger);
        assert!(pair.dashed().elements().len() > first);
        assert_eq!(pair.get(HighlightKind::Solid).elements(), bigger.elements());
    }
}
