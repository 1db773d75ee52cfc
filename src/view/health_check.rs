//! The health-check widget.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::client::{ApiClient, HealthReport};
use crate::view::lifetime::{Lifetime, LifetimeToken};
use crate::view::status::HealthStatus;

/// Route probed on mount.
pub const HEALTH_PATH: &str = "/health";

/// A mounted health-check widget.
///
/// Mounting issues the single request; dropping or [`unmount`](Self::unmount)ing
/// discards any result that has not arrived yet.
#[derive(Debug)]
pub struct HealthCheck {
    mount_id: Uuid,
    status: watch::Receiver<HealthStatus>,
    lifetime: Lifetime,
}

impl HealthCheck {
    /// Mount the widget and start its request. Must run inside a tokio runtime.
    pub fn mount(client: Arc<dyn ApiClient>) -> Self {
        let mount_id = Uuid::new_v4();
        let lifetime = Lifetime::new();
        let (tx, rx) = watch::channel(HealthStatus::Pending);

        let span = tracing::info_span!("health_check", %mount_id);
        tokio::spawn(check(client, tx, lifetime.token()).instrument(span));

        tracing::debug!(%mount_id, "Health check mounted");
        Self {
            mount_id,
            status: rx,
            lifetime,
        }
    }

    pub fn mount_id(&self) -> Uuid {
        self.mount_id
    }

    pub fn status(&self) -> HealthStatus {
        self.status.borrow().clone()
    }

    pub fn render(&self) -> String {
        self.status.borrow().render()
    }

    /// Receiver notified on every status change.
    pub fn subscribe(&self) -> watch::Receiver<HealthStatus> {
        self.status.clone()
    }

    /// Wait until the status is terminal.
    ///
    /// If the request task ends without reporting (it panicked), the current
    /// status is returned as is.
    pub async fn settled(&self) -> HealthStatus {
        let mut rx = self.status.clone();
        let result = rx.wait_for(HealthStatus::is_terminal).await.map(|s| s.clone());
        match result {
            Ok(status) => status,
            Err(_) => self.status(),
        }
    }

    /// Detach the widget. The in-flight request keeps running but its result is dropped.
    pub fn unmount(self) {
        self.lifetime.end();
        tracing::debug!(mount_id = %self.mount_id, "Health check unmounted");
    }
}

async fn check(
    client: Arc<dyn ApiClient>,
    tx: watch::Sender<HealthStatus>,
    token: LifetimeToken,
) {
    let outcome = client
        .get(HEALTH_PATH)
        .await
        .and_then(|payload| payload.decode::<HealthReport>());
    let next = HealthStatus::from_outcome(outcome);

    match token.run_if_alive(|| tx.send_replace(next.clone())) {
        Some(_) => tracing::info!(status = %next.render(), "Health check finished"),
        None => tracing::debug!("Discarding health result for unmounted view"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientError, ResponsePayload};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    type Outcome = Result<ResponsePayload, ClientError>;

    /// Client double: records paths and answers with whatever the test sends.
    struct StubClient {
        calls: Mutex<Vec<String>>,
        answer: Mutex<Option<oneshot::Receiver<Outcome>>>,
    }

    impl StubClient {
        fn gated() -> (Arc<Self>, oneshot::Sender<Outcome>) {
            let (tx, rx) = oneshot::channel();
            let stub = Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                answer: Mutex::new(Some(rx)),
            });
            (stub, tx)
        }

        fn answering(outcome: Outcome) -> Arc<Self> {
            let (stub, tx) = Self::gated();
            tx.send(outcome).unwrap();
            stub
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ApiClient for StubClient {
        async fn get(&self, path: &str) -> Outcome {
            self.calls.lock().unwrap().push(path.to_string());
            let answer = self.answer.lock().unwrap().take();
            match answer {
                Some(rx) => match rx.await {
                    Ok(outcome) => outcome,
                    Err(_) => std::future::pending().await,
                },
                None => Err(ClientError::Other("unexpected second request".into())),
            }
        }
    }

    fn ok_payload(message: &str) -> Outcome {
        Ok(ResponsePayload::from(json!({ "status": "ok", "message": message })))
    }

    #[tokio::test]
    async fn renders_pending_before_resolution() {
        let (stub, _gate) = StubClient::gated();
        let view = HealthCheck::mount(stub.clone());
        tokio::task::yield_now().await;

        assert_eq!(view.status(), HealthStatus::Pending);
        assert_eq!(view.render(), "Checking backend connection...");
    }

    #[tokio::test]
    async fn renders_success_message() {
        let stub = StubClient::answering(ok_payload("Flask backend is running"));
        let view = HealthCheck::mount(stub.clone());

        let status = view.settled().await;
        assert_eq!(
            status,
            HealthStatus::Healthy {
                message: "Flask backend is running".into()
            }
        );
        assert_eq!(view.render(), "✓ Flask backend is running");
        assert_eq!(stub.calls(), vec!["/health".to_string()]);
    }

    #[tokio::test]
    async fn renders_error_description() {
        let stub = StubClient::answering(Err(ClientError::Other("Network error".into())));
        let view = HealthCheck::mount(stub);

        view.settled().await;
        assert_eq!(view.render(), "Error: Network error");
    }

    #[tokio::test]
    async fn renders_fallback_without_description() {
        let stub = StubClient::answering(Err(ClientError::Unspecified));
        let view = HealthCheck::mount(stub);

        view.settled().await;
        assert_eq!(view.render(), "Error: Failed to connect to backend");
    }

    #[tokio::test]
    async fn undecodable_payload_is_unhealthy() {
        let payload = ResponsePayload::from(json!(["not", "an", "object"]));
        let view = HealthCheck::mount(StubClient::answering(Ok(payload)));

        let status = view.settled().await;
        assert!(matches!(
            status,
            HealthStatus::Unhealthy { ref error } if error.starts_with("invalid response payload")
        ));
    }

    #[tokio::test]
    async fn rerendering_does_not_refetch() {
        let (stub, gate) = StubClient::gated();
        let view = HealthCheck::mount(stub.clone());
        for _ in 0..5 {
            view.render();
            tokio::task::yield_now().await;
        }

        gate.send(ok_payload("up")).unwrap();
        view.settled().await;
        for _ in 0..5 {
            assert_eq!(view.render(), "✓ up");
        }

        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn unmount_before_resolution_discards_result() {
        let (stub, gate) = StubClient::gated();
        let view = HealthCheck::mount(stub.clone());
        let mut rx = view.subscribe();
        tokio::task::yield_now().await;

        view.unmount();
        gate.send(ok_payload("too late")).unwrap();

        // The sender is dropped when the task ends; a mutation would show up as a change first.
        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), HealthStatus::Pending);
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn dropping_the_view_also_discards_result() {
        let (stub, gate) = StubClient::gated();
        let view = HealthCheck::mount(stub);
        let mut rx = view.subscribe();
        drop(view);

        gate.send(Err(ClientError::Other("boom".into()))).unwrap();

        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), HealthStatus::Pending);
    }

    #[tokio::test]
    async fn instances_are_independent() {
        let healthy = HealthCheck::mount(StubClient::answering(ok_payload("a")));
        let failing =
            HealthCheck::mount(StubClient::answering(Err(ClientError::Other("b".into()))));

        assert_ne!(healthy.mount_id(), failing.mount_id());
        assert_eq!(healthy.settled().await.render(), "✓ a");
        assert_eq!(failing.settled().await.render(), "Error: b");
    }
}
