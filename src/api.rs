//! Simple async API facade
//!
//! Convenience flows built on top of the task dispatcher.

use crate::dispatcher::{TaskDispatcher, TaskRequest};
use serde_json::json;

pub const SETUP_HEADER: &str = "Setup Complete!";

/// One-click setup with a freshly built dispatcher
///
/// # Example
/// ```no_run
/// #[tokio::main]
/// async fn main() {
///     let report = agenthub::one_click_setup().await;
///     println!("{}", report);
/// }
/// ```
pub async fn one_click_setup() -> String {
    one_click_setup_with(&TaskDispatcher::default()).await
}

/// Fetch social updates and sync calendars through `dispatcher`
pub async fn one_click_setup_with(dispatcher: &TaskDispatcher) -> String {
    tracing::info!("Running one-click setup");

    let social_updates = dispatcher
        .execute_task("social_media", "fetch_latest_updates", json!({}))
        .await;
    let calendar_sync = dispatcher
        .execute_task("calendar", "sync_calendars", json!({}))
        .await;

    format!("{}\n{}\n{}", SETUP_HEADER, social_updates, calendar_sync)
}

/// The illustrative tasks run after setup by the demo command
pub fn demo_requests() -> Vec<TaskRequest> {
    vec![
        TaskRequest::new(
            "maintenance",
            "resolve_issue",
            json!({"issue": "Sink Repair"}),
        ),
        TaskRequest::new(
            "marketing",
            "create_campaign",
            json!({
                "details": {
                    "platform": "Facebook",
                    "budget": "$1000",
                    "audience": "25-35 age group"
                }
            }),
        ),
        TaskRequest::new(
            "social_media",
            "post_update",
            json!({"platform": "Twitter", "content": "Hello World!"}),
        ),
        TaskRequest::new(
            "calendar",
            "create_event",
            json!({
                "source": "Gmail",
                "event_details": {
                    "title": "Meeting",
                    "time": "10:00 AM",
                    "date": "2024-12-20"
                }
            }),
        ),
    ]
}

/// Run the demo tasks in order; failures are folded into their messages
pub async fn demo_sequence(dispatcher: &TaskDispatcher, concurrency: usize) -> Vec<String> {
    dispatcher
        .execute_batch(demo_requests(), concurrency)
        .await
        .into_iter()
        .map(|result| result.unwrap_or_else(|e| e.to_string()))
        .collect()
}
