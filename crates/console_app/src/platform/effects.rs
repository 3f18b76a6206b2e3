use std::time::{Duration, Instant};

use console_core::{CloudConfig, Debouncer, Effect, Msg, Revision};
use console_engine::{EngineEvent, EngineHandle, RoleLoginRequest};
use engine_logging::{engine_info, engine_warn};

use super::clipboard::ClipboardWriter;

/// Executes core effects and turns their outcomes back into messages.
///
/// Owns both UI timers; they are polled from the frame loop rather than run
/// on background threads.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: ClipboardWriter,
    submit_timer: Debouncer<Revision>,
    copy_reset_timer: Debouncer<()>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            clipboard: ClipboardWriter::new(),
            submit_timer: Debouncer::new(),
            copy_reset_timer: Debouncer::new(),
        }
    }

    /// Runs `effects`; returns messages that complete synchronously.
    pub fn enqueue(&mut self, ctx: &egui::Context, now: Instant, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::ScheduleSubmit { revision, delay } => {
                    self.submit_timer.schedule(now, delay, revision);
                }
                Effect::Submit {
                    submission_id,
                    config,
                } => {
                    self.engine.submit(submission_id, to_request(&config));
                }
                Effect::CopyToClipboard { url } => {
                    let ok = self.clipboard.copy(ctx, &url);
                    if !ok {
                        engine_warn!("Copy failed for url_len={}", url.len());
                    }
                    follow_ups.push(Msg::CopyFinished { ok });
                }
                Effect::ScheduleCopyReset { delay } => {
                    self.copy_reset_timer.schedule(now, delay, ());
                }
                Effect::OpenInBrowser { url } => open_in_browser(ctx, &url),
            }
        }
        follow_ups
    }

    /// Messages for timers whose deadline has passed.
    pub fn poll_timers(&mut self, now: Instant) -> Vec<Msg> {
        let mut msgs = Vec::new();
        if let Some(revision) = self.submit_timer.poll(now) {
            msgs.push(Msg::DebounceElapsed { revision });
        }
        if self.copy_reset_timer.poll(now).is_some() {
            msgs.push(Msg::CopyResetElapsed);
        }
        msgs
    }

    /// Drains finished engine work.
    pub fn poll_engine(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    /// Time until the nearest pending timer, used to schedule the next repaint.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        [
            self.submit_timer.remaining(now),
            self.copy_reset_timer.remaining(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

fn open_in_browser(ctx: &egui::Context, url: &str) {
    engine_info!("Opening console url_len={}", url.len());
    if let Err(err) = open::that(url) {
        engine_warn!("System browser unavailable, using egui fallback: {}", err);
        ctx.open_url(egui::OpenUrl::new_tab(url));
    }
}

fn to_request(config: &CloudConfig) -> RoleLoginRequest {
    RoleLoginRequest {
        provider: config.provider.as_str().to_string(),
        secret_id: config.secret_id.clone(),
        secret_key: config.secret_key.clone(),
        token: config.token.clone(),
        role_arn: config.role_arn.clone(),
        destination: config.destination.clone(),
        login_url: config.login_url.clone(),
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LoginCompleted {
            submission_id,
            result,
        } => match result {
            Ok(url) => Msg::SubmissionSucceeded { submission_id, url },
            Err(err) => Msg::SubmissionFailed {
                submission_id,
                message: err.server_message().map(ToOwned::to_owned),
            },
        },
    }
}
