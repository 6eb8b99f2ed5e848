use std::collections::HashSet;

use crate::Rect;

/// Decides when elements fade in as they enter the viewport.
///
/// An element is revealed once the visible share of its height reaches
/// `threshold`. The bottom of the viewport is pulled up by `bottom_margin`
/// so elements start fading in slightly after they appear. Reveals are one
/// shot: scrolling back up never hides an element again.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    threshold: f64,
    bottom_margin: f64,
    revealed: HashSet<K>,
}

impl<K: Eq + std::hash::Hash + Clone> RevealTracker<K> {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
            revealed: HashSet::new(),
        }
    }

    /// Feed the current layout and return the elements that became visible
    /// with this observation.
    ///
    /// `bounds` are relative to the top of the viewport.
    pub fn observe<'a>(
        &mut self,
        viewport_height: f64,
        elements: impl IntoIterator<Item = (&'a K, Rect)>,
    ) -> Vec<K>
    where
        K: 'a,
    {
        let root_bottom = viewport_height - self.bottom_margin;
        let mut revealed = Vec::new();
        for (key, bounds) in elements {
            if self.revealed.contains(key)
                || intersection_ratio(bounds, root_bottom) < self.threshold
            {
                continue;
            }
            self.revealed.insert(key.clone());
            revealed.push(key.clone());
        }
        revealed
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }
}

fn intersection_ratio(bounds: Rect, root_bottom: f64) -> f64 {
    if bounds.height <= 0.0 {
        return if bounds.top >= 0.0 && bounds.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible = bounds.bottom().min(root_bottom) - bounds.top.max(0.0);
    (visible / bounds.height).clamp(0.0, 1.0)
}
