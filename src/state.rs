use egui::{
    self, pos2, vec2, CursorIcon, Id, Key, Order, Rect, Sense, Ui, Vec2,
};
use epaint::Shape;
use std::fmt::Display;
use std::hash::Hash;

use crate::session::{hit_test, DragSession, DropOutcome, HoverTarget, Placement};
use crate::utils::move_item;
use crate::{ItemProps, SortError, WrapProps};

type RenderItem<T> = Box<dyn FnMut(&mut Ui, &T, usize)>;
type OnChange<T> = Box<dyn FnMut(&[T])>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragIndices {
    pub source: usize,
    /// Final index the source moves to.
    pub target: usize,
}

/// Progress of the drag gesture after a frame or an event.
/// `CurrentDrag` carries the move that would happen if the gesture ended now, `Completed` the move
/// that was applied to the list (and reported to `on_change`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortableResponse {
    NoDrag,
    CurrentDrag(DragIndices),
    Completed(DragIndices),
    /// The gesture ended without a drop, the list is unchanged.
    Cancelled,
    /// The gesture resolved to indices that don't fit the list, the list is unchanged.
    Rejected(SortError),
}

/// Input driving the drag session, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The item at `index` started being dragged. `height` is its laid out height.
    Start { index: usize, height: f32 },
    /// The drag moved over the list. `dragged_top` is the top edge of the dragged item.
    Over { target: HoverTarget, dragged_top: f32 },
    /// The item was released over the list.
    End,
    /// The gesture was abandoned, e.g. with escape or by releasing outside the list.
    Cancel,
}

/// [SortableList] owns a copy of the items and lets the user reorder them by dragging.
///
/// Every item is draggable as a whole. While dragging, the item follows the pointer and a
/// placeholder of the same height marks where it will be dropped. Once released over the list the
/// items are reordered and `on_change` is called with the new order.
///
/// # Example
/// ```rust,no_run
/// use eframe::egui::{CentralPanel, Context};
/// use eframe::{App, Frame};
/// use egui_sortable::SortableList;
///
/// struct SortApp {
///     list: SortableList<String>,
/// }
///
/// impl App for SortApp {
///     fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
///         CentralPanel::default().show(ctx, |ui| {
///             self.list.show(ui);
///         });
///     }
/// }
///
/// fn main() -> eframe::Result<()> {
///     let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
///     let list = SortableList::new("letters", &items)
///         .on_change(|items| println!("new order: {items:?}"));
///     eframe::run_native(
///         "Sortable Example",
///         eframe::NativeOptions::default(),
///         Box::new(|_| Box::new(SortApp { list })),
///     )
/// }
/// ```
pub struct SortableList<T> {
    id: Id,
    items: Vec<T>,
    render_item: RenderItem<T>,
    on_change: Option<OnChange<T>>,
    item_props: ItemProps,
    wrap_props: WrapProps,
    session: DragSession,
    /// Pointer position relative to the origin of the dragged item when dragging began
    drag_delta: Vec2,
}

impl<T: Clone + Display + 'static> SortableList<T> {
    /// Creates a list rendering every item as a label of its `Display` output.
    pub fn new(id_source: impl Hash, data: &[T]) -> Self {
        Self::with_renderer(id_source, data, |ui: &mut Ui, item: &T, _index: usize| {
            ui.label(item.to_string());
        })
    }
}

impl<T: Clone + 'static> SortableList<T> {
    pub fn with_renderer(
        id_source: impl Hash,
        data: &[T],
        render_item: impl FnMut(&mut Ui, &T, usize) + 'static,
    ) -> Self {
        Self {
            id: Id::new(id_source),
            items: data.to_vec(),
            render_item: Box::new(render_item),
            on_change: None,
            item_props: ItemProps::default(),
            wrap_props: WrapProps::default(),
            session: DragSession::Idle,
            drag_delta: Vec2::ZERO,
        }
    }

    pub fn render_item(mut self, render_item: impl FnMut(&mut Ui, &T, usize) + 'static) -> Self {
        self.render_item = Box::new(render_item);
        self
    }

    /// Called with the new order after every completed drop.
    pub fn on_change(mut self, on_change: impl FnMut(&[T]) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn item_props(mut self, item_props: ItemProps) -> Self {
        self.item_props = item_props;
        self
    }

    pub fn wrap_props(mut self, wrap_props: WrapProps) -> Self {
        self.wrap_props = wrap_props;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Moves the item at `from` to the final index `to` and reports the new order to `on_change`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), SortError> {
        move_item(&mut self.items, from, to)?;
        if let Some(on_change) = &mut self.on_change {
            on_change(&self.items);
        }
        Ok(())
    }

    /// Advances the drag session. [SortableList::show] feeds egui input through here.
    pub fn handle_event(&mut self, event: DragEvent) -> SortableResponse {
        match event {
            DragEvent::Start { index, height } => {
                if index >= self.items.len() {
                    let err = SortError::InvalidIndex {
                        index,
                        len: self.items.len(),
                    };
                    tracing::warn!(%err, "ignoring drag start");
                    return SortableResponse::Rejected(err);
                }
                self.session.begin(index, height);
                tracing::debug!(index, height, "drag started");
                self.current_drag()
            }
            DragEvent::Over {
                target,
                dragged_top,
            } => {
                if self.session.hover(target, dragged_top) {
                    tracing::trace!(session = ?self.session, "drop position changed");
                }
                self.current_drag()
            }
            DragEvent::End => {
                if !self.session.is_dragging() {
                    return SortableResponse::NoDrag;
                }
                match self.session.finish() {
                    DropOutcome::Moved { from, to } => match self.reorder(from, to) {
                        Ok(()) => {
                            tracing::debug!(from, to, "item dropped");
                            SortableResponse::Completed(DragIndices {
                                source: from,
                                target: to,
                            })
                        }
                        Err(err) => {
                            tracing::warn!(%err, from, to, "rejected drop");
                            SortableResponse::Rejected(err)
                        }
                    },
                    DropOutcome::Cancelled => {
                        tracing::debug!("drag ended without a hovered item");
                        SortableResponse::Cancelled
                    }
                }
            }
            DragEvent::Cancel => {
                if self.session.cancel() {
                    tracing::debug!("drag cancelled");
                    SortableResponse::Cancelled
                } else {
                    SortableResponse::NoDrag
                }
            }
        }
    }

    fn current_drag(&self) -> SortableResponse {
        match (self.session.source(), self.session.destination()) {
            (Some(source), Some(target)) => {
                SortableResponse::CurrentDrag(DragIndices { source, target })
            }
            _ => SortableResponse::NoDrag,
        }
    }

    /// Draws the list for this frame and processes the drag input.
    pub fn show(&mut self, ui: &mut Ui) -> SortableResponse {
        let (pointer, released, escape) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.any_released(),
                i.key_pressed(Key::Escape),
            )
        });

        let margin = self.wrap_props.inner_margin;
        let outer_rect_bounds = ui.available_rect_before_wrap();
        let inner_rect = Rect::from_min_max(
            outer_rect_bounds.min + margin.left_top(),
            outer_rect_bounds.max - margin.right_bottom(),
        );
        let where_to_put_background = ui.painter().add(Shape::Noop);

        let mut content_ui = ui.child_ui(inner_rect, *ui.layout());
        if let Some(spacing) = self.wrap_props.item_spacing {
            content_ui.spacing_mut().item_spacing.y = spacing;
        }

        let source = self.session.source();
        let placeholder_slot = self.session.placeholder_slot();
        let placeholder_height = self.session.placeholder_height().unwrap_or_default();
        let placeholder_fill = self.wrap_props.placeholder_fill(ui.visuals());
        let item_frame = self.item_props.frame(ui.visuals());

        let mut item_rects = Vec::with_capacity(self.items.len());
        let mut placeholder_rect = None;
        let mut drag_start = None;

        for (index, item) in self.items.iter().enumerate() {
            if placeholder_slot == Some((index, Placement::Before)) {
                placeholder_rect = Some(draw_placeholder(
                    &mut content_ui,
                    placeholder_height,
                    placeholder_fill,
                ));
            }

            if source != Some(index) {
                let render_item = &mut self.render_item;
                let rect = content_ui
                    .push_id(index, |ui| {
                        item_frame
                            .show(ui, |ui| {
                                ui.set_min_width(ui.available_width());
                                render_item(ui, item, index);
                            })
                            .response
                            .rect
                    })
                    .inner;

                let response = content_ui.interact(rect, self.id.with(index), Sense::drag());
                if response.hovered() && source.is_none() {
                    ui.ctx().set_cursor_icon(self.item_props.hover_cursor);
                }
                if response.drag_started() {
                    let pointer_pos = response.interact_pointer_pos().unwrap_or(rect.min);
                    drag_start = Some((index, rect.height(), rect.min - pointer_pos));
                }
                item_rects.push((index, rect));
            }

            if placeholder_slot == Some((index, Placement::After)) {
                placeholder_rect = Some(draw_placeholder(
                    &mut content_ui,
                    placeholder_height,
                    placeholder_fill,
                ));
            }
        }

        // draw the dragged item on top of everything, following the pointer
        let dragged_item = source.and_then(|source| Some((source, self.items.get(source)?)));
        if let (Some((source, item)), Some(pointer_pos)) =
            (dragged_item, ui.ctx().pointer_interact_pos())
        {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
            let width = inner_rect.width();
            let render_item = &mut self.render_item;
            egui::Area::new(self.id.with("dragged_item"))
                .order(Order::Tooltip)
                .interactable(false)
                .fixed_pos(pointer_pos + self.drag_delta)
                .show(ui.ctx(), |ui| {
                    ui.set_width(width);
                    item_frame.show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        render_item(ui, item, source);
                    });
                });
        }

        let outer_rect = Rect::from_min_max(
            outer_rect_bounds.min,
            content_ui.min_rect().max + margin.right_bottom(),
        );
        let (list_rect, _) = ui.allocate_at_least(outer_rect.size(), Sense::hover());
        let pointer_over_list = pointer.is_some_and(|pos| list_rect.contains(pos));

        ui.painter().set(
            where_to_put_background,
            self.wrap_props.background(
                ui.visuals(),
                list_rect,
                source.is_some() && pointer_over_list,
            ),
        );

        let mut response = self.current_drag();

        if let Some((index, height, delta)) = drag_start {
            self.drag_delta = delta;
            response = self.handle_event(DragEvent::Start { index, height });
        }

        if !self.session.is_dragging() {
            return response;
        }

        if escape {
            return self.handle_event(DragEvent::Cancel);
        }

        // the rects of this frame still hold the source at its old slot
        let hovering = pointer_over_list && drag_start.is_none();
        if let Some(pointer_pos) = pointer.filter(|_| hovering) {
            let dragged_top = pointer_pos.y + self.drag_delta.y;
            let target = hit_test(
                pos2(pointer_pos.x, dragged_top),
                &item_rects,
                placeholder_rect,
            );
            response = self.handle_event(DragEvent::Over {
                target,
                dragged_top,
            });
        }

        if released {
            let event = if pointer_over_list {
                DragEvent::End
            } else {
                DragEvent::Cancel
            };
            response = self.handle_event(event);
            ui.ctx().request_repaint();
        }

        response
    }
}

/// Reserves a blank row standing in for the dragged item.
fn draw_placeholder(ui: &mut Ui, height: f32, fill: egui::Color32) -> Rect {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
    let rounding = ui.visuals().widgets.noninteractive.rounding;
    ui.painter().rect_filled(rect, rounding, fill);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{vec2, Pos2};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const ROW: f32 = 20.0;

    fn row(index: usize) -> Rect {
        Rect::from_min_size(pos2(0.0, index as f32 * ROW), vec2(100.0, ROW))
    }

    fn over(index: usize, offset: f32) -> DragEvent {
        DragEvent::Over {
            target: HoverTarget::Item {
                index,
                rect: row(index),
            },
            dragged_top: index as f32 * ROW + offset,
        }
    }

    fn letters() -> (SortableList<char>, Rc<RefCell<Vec<Vec<char>>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        let list = SortableList::new("letters", &['A', 'B', 'C', 'D'])
            .on_change(move |items: &[char]| log.borrow_mut().push(items.to_vec()));
        (list, changes)
    }

    #[test]
    fn drop_after_later_item() {
        let (mut list, changes) = letters();
        list.handle_event(DragEvent::Start {
            index: 0,
            height: ROW,
        });
        assert_eq!(
            list.handle_event(over(2, 15.0)),
            SortableResponse::CurrentDrag(DragIndices {
                source: 0,
                target: 2
            })
        );
        assert_eq!(
            list.handle_event(DragEvent::End),
            SortableResponse::Completed(DragIndices {
                source: 0,
                target: 2
            })
        );
        assert_eq!(list.items(), &['B', 'C', 'A', 'D']);
        assert_eq!(*changes.borrow(), vec![vec!['B', 'C', 'A', 'D']]);
        assert_eq!(*list.session(), DragSession::Idle);
    }

    #[test]
    fn drop_before_earlier_item() {
        let (mut list, changes) = letters();
        list.handle_event(DragEvent::Start {
            index: 3,
            height: ROW,
        });
        list.handle_event(over(1, 2.0));
        list.handle_event(DragEvent::End);
        assert_eq!(list.items(), &['A', 'D', 'B', 'C']);
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn dropping_over_itself_changes_nothing() {
        let (mut list, changes) = letters();
        list.handle_event(DragEvent::Start {
            index: 1,
            height: ROW,
        });
        list.handle_event(over(1, 15.0));
        list.handle_event(DragEvent::Over {
            target: HoverTarget::Placeholder,
            dragged_top: ROW,
        });
        assert_eq!(list.handle_event(DragEvent::End), SortableResponse::Cancelled);
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn dropping_into_own_slot_keeps_order() {
        let (mut list, changes) = letters();
        list.handle_event(DragEvent::Start {
            index: 1,
            height: ROW,
        });
        list.handle_event(over(2, 0.0));
        list.handle_event(DragEvent::End);
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);
        assert_eq!(*changes.borrow(), vec![vec!['A', 'B', 'C', 'D']]);
    }

    #[test]
    fn hovering_never_notifies() {
        let (mut list, changes) = letters();
        list.handle_event(DragEvent::Start {
            index: 0,
            height: ROW,
        });
        for index in 1..4 {
            list.handle_event(over(index, 1.0));
            list.handle_event(over(index, 19.0));
        }
        assert!(changes.borrow().is_empty());
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);
    }

    #[test]
    fn cancel_restores_idle_state() {
        let (mut list, changes) = letters();
        list.handle_event(DragEvent::Start {
            index: 2,
            height: ROW,
        });
        list.handle_event(over(0, 0.0));
        assert_eq!(list.handle_event(DragEvent::Cancel), SortableResponse::Cancelled);
        assert_eq!(*list.session(), DragSession::Idle);
        assert_eq!(list.handle_event(DragEvent::End), SortableResponse::NoDrag);
        assert_eq!(list.handle_event(DragEvent::Cancel), SortableResponse::NoDrag);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let (mut list, changes) = letters();
        assert_eq!(
            list.handle_event(DragEvent::Start {
                index: 7,
                height: ROW,
            }),
            SortableResponse::Rejected(SortError::InvalidIndex { index: 7, len: 4 })
        );
        assert!(!list.session().is_dragging());

        assert_eq!(
            list.reorder(0, 4),
            Err(SortError::InvalidIndex { index: 4, len: 4 })
        );
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);

        // a hover target past the end resolves to a destination the list can't hold
        list.handle_event(DragEvent::Start {
            index: 0,
            height: ROW,
        });
        list.handle_event(over(4, 15.0));
        assert_eq!(
            list.handle_event(DragEvent::End),
            SortableResponse::Rejected(SortError::InvalidIndex { index: 4, len: 4 })
        );
        assert_eq!(list.items(), &['A', 'B', 'C', 'D']);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn reorder_without_callback() {
        let mut list = SortableList::new("numbers", &[1, 2, 3]);
        list.reorder(2, 0).unwrap();
        assert_eq!(list.into_items(), vec![3, 1, 2]);
    }

    #[test]
    fn shows_every_item_without_dragging() {
        let rendered = Rc::new(Cell::new(0));
        let counter = rendered.clone();
        let mut list = SortableList::with_renderer(
            "render",
            &["one", "two", "three", "four"],
            move |ui: &mut Ui, item: &&str, _index: usize| {
                counter.set(counter.get() + 1);
                ui.label(*item);
            },
        );

        let ctx = egui::Context::default();
        let mut response = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = Some(list.show(ui));
            });
        });

        assert_eq!(response, Some(SortableResponse::NoDrag));
        assert_eq!(rendered.get(), 4);
        assert_eq!(list.items(), &["one", "two", "three", "four"]);
    }

    /// Drives a list of letters through `show` one headless frame at a time.
    struct Screen {
        ctx: egui::Context,
        list: SortableList<char>,
        rects: Rc<RefCell<Vec<Rect>>>,
        changes: Rc<RefCell<Vec<Vec<char>>>>,
    }

    impl Screen {
        fn new(wrap_props: WrapProps) -> Self {
            let rects = Rc::new(RefCell::new(vec![Rect::NOTHING; 4]));
            let changes = Rc::new(RefCell::new(Vec::new()));
            let (record, log) = (rects.clone(), changes.clone());
            let list = SortableList::with_renderer(
                "screen",
                &['A', 'B', 'C', 'D'],
                move |ui: &mut Ui, item: &char, index: usize| {
                    ui.label(item.to_string());
                    record.borrow_mut()[index] = ui.min_rect();
                },
            )
            .on_change(move |items: &[char]| log.borrow_mut().push(items.to_vec()))
            .wrap_props(wrap_props);

            let mut screen = Self {
                ctx: egui::Context::default(),
                list,
                rects,
                changes,
            };
            screen.frame(Vec::new());
            screen
        }

        fn frame(&mut self, events: Vec<egui::Event>) -> SortableResponse {
            let input = egui::RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0))),
                events,
                ..Default::default()
            };
            let list = &mut self.list;
            let mut response = SortableResponse::NoDrag;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    response = list.show(ui);
                });
            });
            response
        }

        /// Content rect of each item as laid out while idle.
        fn rects(&self) -> Vec<Rect> {
            self.rects.borrow().clone()
        }

        fn move_to(&mut self, pos: Pos2) -> SortableResponse {
            self.frame(vec![egui::Event::PointerMoved(pos)])
        }

        fn button(&mut self, pos: Pos2, pressed: bool) -> SortableResponse {
            self.frame(vec![egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::default(),
            }])
        }

        fn escape(&mut self) -> SortableResponse {
            self.frame(vec![egui::Event::Key {
                key: Key::Escape,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }])
        }

        /// Presses just below the top edge of `index` and moves the pointer a bit.
        fn pick_up(&mut self, index: usize) -> Pos2 {
            let rect = self.rects()[index];
            let start = pos2(rect.center().x, rect.top() + 1.0);
            self.move_to(start);
            self.button(start, true);
            let moved = start + vec2(0.0, 2.0);
            self.move_to(moved);
            assert!(self.list.session().is_dragging());
            moved
        }

        /// Moves the pointer to `pos` for a couple of frames so the layout settles, then releases.
        fn drop_at(&mut self, pos: Pos2) -> SortableResponse {
            self.move_to(pos);
            self.move_to(pos);
            self.button(pos, false)
        }
    }

    #[test]
    fn dragging_below_later_item_reorders_once() {
        let mut screen = Screen::new(WrapProps::default());
        let rects = screen.rects();

        screen.pick_up(0);
        let response = screen.drop_at(pos2(rects[2].center().x, rects[2].center().y + 6.0));

        assert_eq!(
            response,
            SortableResponse::Completed(DragIndices {
                source: 0,
                target: 2
            })
        );
        assert_eq!(screen.list.items(), &['B', 'C', 'A', 'D']);
        assert_eq!(*screen.changes.borrow(), vec![vec!['B', 'C', 'A', 'D']]);
        assert_eq!(*screen.list.session(), DragSession::Idle);
    }

    #[test]
    fn dragging_above_earlier_item_reorders_once() {
        let mut screen = Screen::new(WrapProps::default());
        let rects = screen.rects();

        screen.pick_up(3);
        let response = screen.drop_at(pos2(rects[1].center().x, rects[1].top() + 4.0));

        assert_eq!(
            response,
            SortableResponse::Completed(DragIndices {
                source: 3,
                target: 1
            })
        );
        assert_eq!(screen.list.items(), &['A', 'D', 'B', 'C']);
        assert_eq!(screen.changes.borrow().len(), 1);
    }

    #[test]
    fn releasing_outside_the_list_cancels() {
        let mut screen = Screen::new(WrapProps::default());
        let rects = screen.rects();

        screen.pick_up(0);
        screen.move_to(pos2(rects[2].center().x, rects[2].center().y + 6.0));
        let response = screen.drop_at(pos2(rects[0].center().x, 390.0));

        assert_eq!(response, SortableResponse::Cancelled);
        assert_eq!(screen.list.items(), &['A', 'B', 'C', 'D']);
        assert!(screen.changes.borrow().is_empty());
        assert_eq!(*screen.list.session(), DragSession::Idle);
    }

    #[test]
    fn escape_cancels_and_draws_source_inline_again() {
        let mut screen = Screen::new(WrapProps::default());
        let rects = screen.rects();

        screen.pick_up(1);
        let hover = pos2(rects[3].center().x, rects[3].center().y + 6.0);
        screen.move_to(hover);
        screen.move_to(hover);

        assert_eq!(screen.escape(), SortableResponse::Cancelled);
        assert_eq!(*screen.list.session(), DragSession::Idle);
        assert_eq!(screen.button(hover, false), SortableResponse::NoDrag);
        screen.move_to(hover);

        assert_eq!(screen.list.items(), &['A', 'B', 'C', 'D']);
        assert!(screen.changes.borrow().is_empty());
        assert_eq!(screen.rects()[1], rects[1]);
    }

    #[test]
    fn releasing_in_place_without_spacing_is_cancelled() {
        let mut screen = Screen::new(WrapProps {
            item_spacing: Some(0.0),
            ..Default::default()
        });

        let pos = screen.pick_up(1);
        assert_eq!(
            screen.list.session().placeholder_slot(),
            Some((1, Placement::Before))
        );
        assert_eq!(screen.button(pos, false), SortableResponse::Cancelled);
        assert_eq!(screen.list.items(), &['A', 'B', 'C', 'D']);
        assert!(screen.changes.borrow().is_empty());
    }
}
