use egui::{Pos2, Rect};

/// Which side of the hovered item the dragged item will be inserted on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Before,
    After,
}

impl Placement {
    /// Classifies a drop from the vertical offset between the dragged item's top and the hovered
    /// item's top. An offset of exactly half the hovered height counts as [`Placement::Before`].
    pub fn classify(rel_y: f32, hovered_height: f32) -> Self {
        if rel_y > hovered_height / 2.0 {
            Placement::After
        } else {
            Placement::Before
        }
    }
}

/// What lies under the drag probe while hovering over the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverTarget {
    /// The placeholder standing in for the dragged item.
    Placeholder,
    /// Inside the list but not over any item, e.g. padding or item spacing.
    DeadSpace,
    /// The item at `index`, laid out at `rect`.
    Item { index: usize, rect: Rect },
}

/// Finds the element under `probe`. The placeholder wins over items it overlaps.
pub fn hit_test(probe: Pos2, items: &[(usize, Rect)], placeholder: Option<Rect>) -> HoverTarget {
    if placeholder.is_some_and(|rect| rect.contains(probe)) {
        return HoverTarget::Placeholder;
    }

    items
        .iter()
        .find(|(_, rect)| rect.contains(probe))
        .map(|&(index, rect)| HoverTarget::Item { index, rect })
        .unwrap_or(HoverTarget::DeadSpace)
}

/// Turns the hovered index and placement into the final index of the moved item.
///
/// Removing the source first shifts every later index down by one, so a hover below the source is
/// decremented before the placement is applied.
pub fn resolve_destination(source: usize, hover: usize, placement: Placement) -> usize {
    let mut to = hover;
    if source < to {
        to -= 1;
    }
    if placement == Placement::After {
        to += 1;
    }
    to
}

/// Result of ending a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved { from: usize, to: usize },
    Cancelled,
}

/// State of a single drag gesture. A session always starts and ends in [`DragSession::Idle`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        source: usize,
        /// Height of the source item when the drag began, reused for the placeholder.
        placeholder_height: f32,
        /// Last item hovered, if any item was hovered yet.
        hover: Option<usize>,
        placement: Placement,
    },
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    pub fn source(&self) -> Option<usize> {
        match *self {
            DragSession::Dragging { source, .. } => Some(source),
            DragSession::Idle => None,
        }
    }

    pub fn placeholder_height(&self) -> Option<f32> {
        match *self {
            DragSession::Dragging {
                placeholder_height, ..
            } => Some(placeholder_height),
            DragSession::Idle => None,
        }
    }

    /// Starts a new gesture, discarding whatever session was active.
    pub fn begin(&mut self, source: usize, placeholder_height: f32) {
        *self = DragSession::Dragging {
            source,
            placeholder_height,
            hover: None,
            placement: Placement::Before,
        };
    }

    /// Updates the hover target. `dragged_top` is the current top edge of the dragged item.
    /// Returns `true` if the prospective drop position changed.
    pub fn hover(&mut self, target: HoverTarget, dragged_top: f32) -> bool {
        let DragSession::Dragging {
            source,
            hover,
            placement,
            ..
        } = self
        else {
            return false;
        };

        let (index, rect) = match target {
            HoverTarget::Item { index, rect } if index != *source => (index, rect),
            // the source is hidden, so hovering it behaves like hovering the placeholder
            HoverTarget::Item { .. } | HoverTarget::Placeholder | HoverTarget::DeadSpace => {
                return false;
            }
        };

        let new_placement = Placement::classify(dragged_top - rect.top(), rect.height());
        let changed = *hover != Some(index) || *placement != new_placement;
        *hover = Some(index);
        *placement = new_placement;
        changed
    }

    /// Where the placeholder is drawn: next to the hovered item, or in the source's own slot
    /// before anything was hovered.
    pub fn placeholder_slot(&self) -> Option<(usize, Placement)> {
        match *self {
            DragSession::Dragging {
                hover: Some(hover),
                placement,
                ..
            } => Some((hover, placement)),
            DragSession::Dragging { source, .. } => Some((source, Placement::Before)),
            DragSession::Idle => None,
        }
    }

    /// The final index the source would move to if the gesture ended now.
    pub fn destination(&self) -> Option<usize> {
        match *self {
            DragSession::Dragging {
                source,
                hover,
                placement,
                ..
            } => Some(hover.map_or(source, |hover| {
                resolve_destination(source, hover, placement)
            })),
            DragSession::Idle => None,
        }
    }

    /// Ends the gesture and reports the move it resolved to.
    pub fn finish(&mut self) -> DropOutcome {
        let outcome = match *self {
            DragSession::Dragging {
                source,
                hover: Some(hover),
                placement,
                ..
            } => DropOutcome::Moved {
                from: source,
                to: resolve_destination(source, hover, placement),
            },
            DragSession::Dragging { hover: None, .. } | DragSession::Idle => DropOutcome::Cancelled,
        };
        *self = DragSession::Idle;
        outcome
    }

    /// Abandons the gesture. Returns `true` if a gesture was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = DragSession::Idle;
        was_dragging
    }
}
