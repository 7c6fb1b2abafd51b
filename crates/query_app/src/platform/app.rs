use anyhow::anyhow;
use eframe::egui;
use query_core::{update, AppState, Msg};
use query_engine::QuerySettings;
use url::Url;

use super::effects::EffectRunner;
use super::ui;

pub fn run_app(base_url: Url) -> anyhow::Result<()> {
    let backend = base_url.to_string();
    let runner = EffectRunner::new(QuerySettings::new(base_url))?;

    eframe::run_native(
        ui::constants::APP_ID,
        ui::layout::native_options(),
        Box::new(move |_cc| Ok(Box::new(QueryMenuApp::new(runner, backend)))),
    )
    .map_err(|err| anyhow!("query menu window failed: {err}"))
}

struct QueryMenuApp {
    state: AppState,
    runner: EffectRunner,
    backend: String,
}

impl QueryMenuApp {
    fn new(runner: EffectRunner, backend: String) -> Self {
        Self {
            state: AppState::new(),
            runner,
            backend,
        }
    }

    /// Applies `msg`, starts its effects and reports whether a repaint is due.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        was_dirty
    }

    fn dispatch_all(&mut self, msgs: Vec<Msg>) -> bool {
        msgs.into_iter()
            .fold(false, |dirty, msg| self.dispatch(msg) || dirty)
    }
}

impl eframe::App for QueryMenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let finished = self.runner.poll();
        let mut dirty = self.dispatch_all(finished);

        let view = self.state.view();
        let ui_msgs = egui::CentralPanel::default()
            .show(ctx, |ui| ui::render::render(ui, &view, &self.backend))
            .inner;
        dirty |= self.dispatch_all(ui_msgs);

        if dirty {
            ctx.request_repaint();
        } else if self.state.is_loading() {
            ctx.request_repaint_after(ui::constants::POLL_INTERVAL);
        }
    }
}
