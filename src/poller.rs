use crate::render::render;
use crate::state::AppState;
use chrono::Local;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

pub const POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Starts the status poller. The first poll fires one interval after start.
pub fn spawn(state: AppState) -> JoinHandle<()> {
    tokio::spawn(run(state))
}

async fn run(state: AppState) {
    info!(
        controller = state.controller.base_url(),
        "polling status every {}ms",
        POLL_INTERVAL.as_millis()
    );
    let mut ticker = poll_ticker();
    loop {
        ticker.tick().await;
        // Polls are not serialised: a slow response may land after a newer one.
        let state = state.clone();
        tokio::spawn(async move {
            poll_once(&state).await;
        });
    }
}

/// A stalled ticker resumes on the fixed period instead of catching up.
fn poll_ticker() -> Interval {
    let mut ticker = interval_at(Instant::now() + POLL_INTERVAL, POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Fetches one status snapshot and renders it. Returns whether the panel was updated.
pub async fn poll_once(state: &AppState) -> bool {
    match state.controller.fetch_status().await {
        Ok(Some(status)) => {
            let mut panel = state.panel.lock().await;
            render(&status, &mut *panel);
            panel.mark_rendered(Local::now());
            true
        }
        Ok(None) => false,
        Err(err) => {
            debug!("status poll failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControllerClient;
    use crate::models::{Control, Readout};
    use crate::panel::PanelView;
    use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn state_for(base_url: &str) -> AppState {
        AppState::new(ControllerClient::new(base_url).unwrap())
    }

    #[tokio::test]
    async fn successful_poll_renders_snapshot() {
        let app = Router::new().route(
            "/getData",
            get(|| async {
                Json(serde_json::json!({
                    "statusHeater1": 0, "statusHeater2": 0, "statusBubbles": 1,
                    "statusTransfo": 0, "valueTemp1": 20, "valueTemp2": 24, "valueFlow": 5
                }))
            }),
        );
        let state = state_for(&serve(app).await);

        assert!(poll_once(&state).await);

        let panel = state.panel.lock().await;
        assert!(!panel.is_active(Control::Heater));
        assert!(panel.is_active(Control::Bubbles));
        assert!(!panel.is_active(Control::Flow));
        assert_eq!(panel.text(Readout::Temperature), "22");
        assert_eq!(panel.text(Readout::Flow), "5");
        assert!(panel.snapshot().last_render.is_some());
    }

    #[tokio::test]
    async fn ticker_runs_every_three_seconds_without_bursts() {
        assert_eq!(POLL_INTERVAL, Duration::from_millis(3000));
        let ticker = poll_ticker();
        assert_eq!(ticker.period(), POLL_INTERVAL);
        assert_eq!(ticker.missed_tick_behavior(), MissedTickBehavior::Delay);
    }

    #[tokio::test]
    async fn overlapping_polls_keep_last_arrival() {
        // The first request to reach the controller is answered last.
        async fn get_data(State(calls): State<Arc<AtomicUsize>>) -> Json<serde_json::Value> {
            let (temp, delay) = match calls.fetch_add(1, Ordering::SeqCst) {
                0 => (11, 400),
                _ => (22, 0),
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Json(serde_json::json!({
                "statusHeater1": 0, "statusHeater2": 0, "statusBubbles": 0,
                "statusTransfo": 0, "valueTemp1": temp, "valueTemp2": temp, "valueFlow": 0
            }))
        }
        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/getData", get(get_data))
            .with_state(Arc::clone(&calls));
        let state = state_for(&serve(app).await);

        let (first, second) = tokio::join!(poll_once(&state), poll_once(&state));

        assert!(first && second);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let panel = state.panel.lock().await;
        assert_eq!(panel.text(Readout::Temp1), "11");
        assert_eq!(panel.text(Readout::Temperature), "11");
    }

    #[tokio::test]
    async fn not_found_leaves_panel_untouched() {
        let app = Router::new().route("/getData", get(|| async { StatusCode::NOT_FOUND }));
        let state = state_for(&serve(app).await);
        {
            let mut panel = state.panel.lock().await;
            panel.set_active(Control::Heater, true);
            panel.set_text(Readout::Temp1, "19".to_string());
        }
        let before = state.panel.lock().await.snapshot();

        assert!(!poll_once(&state).await);

        assert_eq!(state.panel.lock().await.snapshot(), before);
    }

    #[tokio::test]
    async fn malformed_body_is_ignored() {
        let app = Router::new().route(
            "/getData",
            get(|| async { Json(serde_json::json!({ "statusHeater1": 1 })) }),
        );
        let state = state_for(&serve(app).await);

        assert!(!poll_once(&state).await);
        assert!(!state.panel.lock().await.is_active(Control::Heater));
    }

    #[tokio::test]
    async fn unreachable_controller_is_ignored() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let state = state_for(&format!("http://{addr}"));

        assert!(!poll_once(&state).await);
    }
}
