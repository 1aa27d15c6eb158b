use egui::{Color32, CursorIcon, Frame, Margin, Rect, Rounding, Stroke, Visuals};
use epaint::Shape;

/// Overrides for the container wrapping the list. Unset fields fall back to the current visuals.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapProps {
    pub inner_margin: Margin,
    pub fill: Option<Color32>,
    pub stroke: Option<Stroke>,
    pub rounding: Option<Rounding>,
    /// Vertical gap between items.
    pub item_spacing: Option<f32>,
    pub placeholder_fill: Option<Color32>,
}

impl Default for WrapProps {
    fn default() -> Self {
        Self {
            inner_margin: Margin::same(4.0),
            fill: None,
            stroke: None,
            rounding: None,
            item_spacing: None,
            placeholder_fill: None,
        }
    }
}

impl WrapProps {
    /// Background of the container. A hovered drop target is drawn with the active widget style.
    pub(crate) fn background(&self, visuals: &Visuals, rect: Rect, is_drop_target: bool) -> Shape {
        let style = if is_drop_target {
            visuals.widgets.active
        } else {
            visuals.widgets.inactive
        };
        let rounding = self.rounding.unwrap_or(style.rounding);

        Shape::Vec(vec![
            Shape::rect_filled(rect, rounding, self.fill.unwrap_or(style.bg_fill)),
            Shape::rect_stroke(rect, rounding, self.stroke.unwrap_or(style.bg_stroke)),
        ])
    }

    pub(crate) fn placeholder_fill(&self, visuals: &Visuals) -> Color32 {
        self.placeholder_fill
            .unwrap_or(visuals.widgets.noninteractive.bg_fill)
    }
}

/// Overrides applied to every item of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProps {
    pub inner_margin: Margin,
    pub fill: Option<Color32>,
    pub stroke: Option<Stroke>,
    pub rounding: Option<Rounding>,
    pub hover_cursor: CursorIcon,
}

impl Default for ItemProps {
    fn default() -> Self {
        Self {
            inner_margin: Margin::symmetric(4.0, 2.0),
            fill: None,
            stroke: None,
            rounding: None,
            hover_cursor: CursorIcon::Grab,
        }
    }
}

impl ItemProps {
    pub(crate) fn frame(&self, visuals: &Visuals) -> Frame {
        Frame::none()
            .inner_margin(self.inner_margin)
            .fill(self.fill.unwrap_or(Color32::TRANSPARENT))
            .stroke(self.stroke.unwrap_or(Stroke::NONE))
            .rounding(
                self.rounding
                    .unwrap_or(visuals.widgets.noninteractive.rounding),
            )
    }
}
