use color_hex::color_from_hex;
use eframe::egui::{self, CentralPanel, Color32, RichText, Rounding, Stroke};
use egui_sortable::{ItemProps, SortableList, SortableResponse, WrapProps};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
struct Task {
    name: &'static str,
    color: Color32,
}

fn rgb(bytes: [u8; 3]) -> Color32 {
    let [r, g, b] = bytes;
    Color32::from_rgb(r, g, b)
}

struct DemoApp {
    list: SortableList<Task>,
    order: Rc<RefCell<Vec<&'static str>>>,
    status: String,
}

impl Default for DemoApp {
    fn default() -> Self {
        let tasks = [
            ("Write parser", rgb(color_from_hex!("#c0392b"))),
            ("Review pull request", rgb(color_from_hex!("#2980b9"))),
            ("Update changelog", rgb(color_from_hex!("#27ae60"))),
            ("Release 0.1.0", rgb(color_from_hex!("#8e44ad"))),
            ("Answer issues", rgb(color_from_hex!("#d35400"))),
        ]
        .map(|(name, color)| Task { name, color });

        let order = Rc::new(RefCell::new(tasks.iter().map(|t| t.name).collect()));
        let on_change_order = order.clone();

        let list = SortableList::with_renderer("tasks", &tasks, |ui, task: &Task, index| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}.", index + 1)).weak());
                ui.label(RichText::new(task.name).color(task.color));
            });
        })
        .on_change(move |tasks| {
            let names: Vec<_> = tasks.iter().map(|t| t.name).collect();
            tracing::info!(order = ?names, "tasks reordered");
            *on_change_order.borrow_mut() = names;
        })
        .item_props(ItemProps {
            stroke: Some(Stroke::new(1.0, rgb(color_from_hex!("#555555")))),
            rounding: Some(Rounding::same(3.0)),
            ..Default::default()
        })
        .wrap_props(WrapProps {
            item_spacing: Some(6.0),
            placeholder_fill: Some(rgb(color_from_hex!("#3a3a3a"))),
            ..Default::default()
        });

        Self {
            list,
            order,
            status: String::from("Drag a task to reorder it"),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Tasks");
            ui.add_space(8.0);

            match self.list.show(ui) {
                SortableResponse::NoDrag => {}
                SortableResponse::CurrentDrag(drag) => {
                    self.status = format!("Moving #{} to #{}", drag.source + 1, drag.target + 1);
                }
                SortableResponse::Completed(drag) => {
                    self.status = format!("Moved #{} to #{}", drag.source + 1, drag.target + 1);
                }
                SortableResponse::Cancelled => {
                    self.status = String::from("Drag cancelled");
                }
                SortableResponse::Rejected(err) => {
                    self.status = err.to_string();
                }
            }

            ui.add_space(8.0);
            ui.label(&self.status);
            ui.label(format!("Order: {}", self.order.borrow().join(", ")));
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    eframe::run_native(
        "Sortable Example",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Box::<DemoApp>::default()),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    tracing_wasm::set_as_global_default();

    wasm_bindgen_futures::spawn_local(async {
        let start_result = eframe::WebRunner::new()
            .start(
                "the_canvas_id",
                eframe::WebOptions::default(),
                Box::new(|_cc| Box::<DemoApp>::default()),
            )
            .await;
        if let Err(err) = start_result {
            tracing::error!(?err, "failed to start eframe");
        }
    });
}
