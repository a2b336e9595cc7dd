//! Card navigator.
//!
//! Next/back controls scroll the cards container by one card extent. The
//! sign depends only on the page flow, which is fixed when the navigator
//! is built. Commands are fire-and-forget: nothing is read back and the
//! platform clamps scrolling past either end.

use crate::viewport::PageFlow;

/// Scroll axis of the cards container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A smooth relative scroll of the cards container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    pub axis: Axis,
    pub delta: f64,
}

impl ScrollCommand {
    /// Script performing this scroll on the element with the given id.
    pub fn to_script(&self, element_id: &str) -> String {
        let (left, top) = match self.axis {
            Axis::Horizontal => (self.delta, 0.0),
            Axis::Vertical => (0.0, self.delta),
        };
        format!(
            "document.getElementById({element_id:?})?.scrollBy({{ top: {top}, left: {left}, behavior: \"smooth\" }});"
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardNavigator {
    flow: PageFlow,
}

impl CardNavigator {
    pub fn new(flow: PageFlow) -> Self {
        Self { flow }
    }

    pub fn axis(&self) -> Axis {
        match self.flow {
            PageFlow::Row => Axis::Horizontal,
            PageFlow::Column => Axis::Vertical,
        }
    }

    /// Scroll forward by one card.
    pub fn advance(&self, extent: f64) -> ScrollCommand {
        let delta = match self.flow {
            PageFlow::Row => extent,
            PageFlow::Column => -extent,
        };
        ScrollCommand {
            axis: self.axis(),
            delta,
        }
    }

    /// Scroll backward by one card.
    pub fn retreat(&self, extent: f64) -> ScrollCommand {
        let delta = match self.flow {
            PageFlow::Row => -extent,
            PageFlow::Column => extent,
        };
        ScrollCommand {
            axis: self.axis(),
            delta,
        }
    }

    /// Scroll from the last card back to `card`.
    ///
    /// Submission lives on the last card, so the distance is
    /// `extent * (cards - 1 - card)`, negated for row flow.
    pub fn reveal(&self, extent: f64, card: usize, cards: usize) -> ScrollCommand {
        let steps = cards.saturating_sub(1).saturating_sub(card) as f64;
        let length = extent * steps;
        let delta = match self.flow {
            PageFlow::Row => -length,
            PageFlow::Column => length,
        };
        ScrollCommand {
            axis: self.axis(),
            delta,
        }
    }
}
