use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use console_engine::{
    EngineEvent, EngineHandle, EventNotifier, LoginClient, LoginError, RoleLoginRequest,
};

#[derive(Default)]
struct FakeClient {
    seen: Mutex<Vec<RoleLoginRequest>>,
}

#[async_trait::async_trait]
impl LoginClient for FakeClient {
    async fn role_login(&self, request: &RoleLoginRequest) -> Result<String, LoginError> {
        self.seen.lock().unwrap().push(request.clone());
        if request.secret_key == "bad" {
            Err(LoginError::Status {
                status: 400,
                message: Some("invalid secret".into()),
            })
        } else {
            Ok(format!("https://signin.example/{}", request.secret_id))
        }
    }
}

fn request(secret_id: &str, secret_key: &str) -> RoleLoginRequest {
    RoleLoginRequest {
        provider: "aws".into(),
        secret_id: secret_id.into(),
        secret_key: secret_key.into(),
        token: String::new(),
        role_arn: "arn:aws:iam::123:role/ops".into(),
        destination: "https://console.aws.amazon.com".into(),
        login_url: "https://signin.aws.amazon.com".into(),
    }
}

fn wait_for_events(engine: &EngineHandle, count: usize) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    while events.len() < count && Instant::now() < deadline {
        match engine.try_recv() {
            Some(event) => events.push(event),
            None => std::thread::sleep(Duration::from_millis(10)),
        }
    }
    events
}

#[test]
fn submissions_report_completion_and_notify() {
    let client = Arc::new(FakeClient::default());
    let notified = Arc::new(AtomicUsize::new(0));
    let counter = notified.clone();
    let notify: EventNotifier = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let engine = EngineHandle::new(client.clone(), notify).expect("engine");

    engine.submit(1, request("AKID1", "good"));
    engine.submit(2, request("AKID2", "bad"));

    let mut events = wait_for_events(&engine, 2);
    events.sort_by_key(|event| match event {
        EngineEvent::LoginCompleted { submission_id, .. } => *submission_id,
    });

    assert_eq!(
        events,
        vec![
            EngineEvent::LoginCompleted {
                submission_id: 1,
                result: Ok("https://signin.example/AKID1".into()),
            },
            EngineEvent::LoginCompleted {
                submission_id: 2,
                result: Err(LoginError::Status {
                    status: 400,
                    message: Some("invalid secret".into()),
                }),
            },
        ]
    );
    assert_eq!(client.seen.lock().unwrap().len(), 2);

    // The notifier runs right after each event is queued.
    let deadline = Instant::now() + Duration::from_secs(5);
    while notified.load(Ordering::SeqCst) < 2 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }
    assert_eq!(notified.load(Ordering::SeqCst), 2);
}

#[test]
fn try_recv_is_empty_when_idle() {
    let notify: EventNotifier = Arc::new(|| {});
    let engine = EngineHandle::new(Arc::new(FakeClient::default()), notify).expect("engine");
    assert_eq!(engine.try_recv(), None);
}
