use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use console_core::{update, FormState, Msg};
use console_engine::{ApiSettings, EngineHandle, EventNotifier, ReqwestLoginClient};
use engine_logging::{engine_debug, engine_info};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let settings = ApiSettings::from_env().context("resolving API settings")?;
    logging::initialize(LogDestination::from(settings.deployment));

    let client = ReqwestLoginClient::new(&settings).context("building login client")?;
    engine_info!(
        "Starting {} deployment={:?} endpoint={}",
        ui::constants::APP_TITLE,
        settings.deployment,
        client.endpoint()
    );
    let client = Arc::new(client);

    eframe::run_native(
        ui::constants::APP_TITLE,
        ui::layout::native_options(),
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            let notify: EventNotifier = Arc::new(move || repaint_ctx.request_repaint());
            let engine = EngineHandle::new(client, notify)?;
            Ok(Box::new(ConsoleLoginApp::new(EffectRunner::new(engine))))
        }),
    )
    .map_err(|err| anyhow::anyhow!("UI event loop failed: {err}"))
}

struct ConsoleLoginApp {
    state: FormState,
    runner: EffectRunner,
    inbox: VecDeque<Msg>,
}

impl ConsoleLoginApp {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: FormState::new(),
            runner,
            inbox: VecDeque::new(),
        }
    }

    /// Feeds every queued message through `update`, including follow-ups
    /// produced synchronously by effects.
    fn process_pending_messages(&mut self, ctx: &egui::Context) {
        while let Some(msg) = self.inbox.pop_front() {
            engine_debug!("dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            let follow_ups = self.runner.enqueue(ctx, Instant::now(), effects);
            self.inbox.extend(follow_ups);
        }
        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ConsoleLoginApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.inbox.extend(self.runner.poll_engine());
        self.inbox.extend(self.runner.poll_timers(now));
        self.process_pending_messages(ctx);

        let view = self.state.view();
        self.inbox.extend(ui::layout::show(ctx, &view));
        self.process_pending_messages(ctx);

        if let Some(wait) = self.runner.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
