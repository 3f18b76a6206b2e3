use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_error, engine_info, engine_warn, mask_secret};

use crate::client::LoginClient;
use crate::{EngineEvent, RoleLoginRequest, SubmissionId};

/// Called after every event is queued, e.g. to wake the UI thread.
pub type EventNotifier = Arc<dyn Fn() + Send + Sync>;

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        request: RoleLoginRequest,
    },
}

/// Runs login requests on a background tokio runtime.
///
/// Requests are not de-duplicated; overlapping submissions complete in
/// whatever order the server answers.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn LoginClient>, notify: EventNotifier) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("console-engine")
            .build()?;

        thread::Builder::new()
            .name("console-engine-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    let notify = notify.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, &event_tx).await;
                        notify();
                    });
                }
                engine_info!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, submission_id: SubmissionId, request: RoleLoginRequest) {
        engine_info!(
            "Submit submission_id={} provider={} secret_id={}",
            submission_id,
            request.provider,
            mask_secret(&request.secret_id)
        );
        if self
            .cmd_tx
            .send(EngineCommand::Submit {
                submission_id,
                request,
            })
            .is_err()
        {
            engine_error!("Engine is not running; submission {} dropped", submission_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn LoginClient,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            request,
        } => {
            let result = client.role_login(&request).await;
            match &result {
                Ok(_) => engine_info!("Submission {} produced a login url", submission_id),
                Err(err) => engine_warn!("Submission {} failed: {}", submission_id, err),
            }
            let _ = event_tx.send(EngineEvent::LoginCompleted {
                submission_id,
                result,
            });
        }
    }
}
