//! Integration tests for the task dispatcher
//!
//! Everything runs in-process; no provider performs real I/O.

use agenthub::providers::{CalendarProvider, MaintenanceProvider, MarketingProvider, SocialMediaProvider};
use agenthub::{
    one_click_setup, DispatchError, Operation, Provider, ProviderRegistry, Request,
    TaskDispatcher, TaskRequest,
};
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_registry_initialization() {
    let registry = ProviderRegistry::with_defaults();

    assert!(registry.has_provider("social_media"));
    assert!(registry.has_provider("calendar"));
    assert!(registry.has_provider("maintenance"));
    assert!(registry.has_provider("marketing"));
    assert_eq!(registry.list_providers().len(), 4);
}

#[tokio::test]
async fn test_dispatch_matches_direct_calls() {
    let dispatcher = TaskDispatcher::default();

    let social = SocialMediaProvider::default();
    assert_eq!(
        dispatcher
            .execute("social_media", "fetch_latest_updates", Value::Null)
            .await
            .unwrap(),
        social.fetch_latest_updates()
    );

    let calendar = CalendarProvider::default();
    let details = json!({"title": "Meeting", "time": "10:00 AM", "date": "2024-12-20"});
    assert_eq!(
        dispatcher
            .execute(
                "calendar",
                "create_event",
                json!({"source": "Gmail", "event_details": details.clone()}),
            )
            .await
            .unwrap(),
        calendar
            .create_event("Gmail", details.as_object().unwrap())
            .unwrap()
    );

    assert_eq!(
        dispatcher
            .execute("maintenance", "resolve_issue", json!({"issue": "Sink Repair"}))
            .await
            .unwrap(),
        MaintenanceProvider::new().resolve_issue("Sink Repair")
    );

    let campaign = json!({"platform": "Facebook", "budget": "$1000"});
    assert_eq!(
        dispatcher
            .execute("marketing", "create_campaign", json!({"details": campaign.clone()}))
            .await
            .unwrap(),
        MarketingProvider::new().create_campaign(campaign.as_object().unwrap())
    );
}

#[tokio::test]
async fn test_unknown_provider_for_any_operation() {
    let dispatcher = TaskDispatcher::default();

    for operation in ["post_update", "sync_calendars", "anything", ""] {
        let message = dispatcher
            .execute_task("weather", operation, json!({"x": 1}))
            .await;
        assert_eq!(message, "Agent 'weather' not found.");
    }
}

#[tokio::test]
async fn test_unknown_operation_on_every_provider() {
    let dispatcher = TaskDispatcher::default();

    for provider in ["social_media", "calendar", "maintenance", "marketing"] {
        let err = dispatcher
            .execute(provider, "delete_everything", Value::Null)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Task 'delete_everything' not found for agent '{}'.", provider)
        );
    }
}

#[tokio::test]
async fn test_unsupported_platform_and_source() {
    let dispatcher = TaskDispatcher::default();

    let err = dispatcher
        .execute(
            "social_media",
            "post_update",
            json!({"platform": "LinkedIn", "content": "Hiring!"}),
        )
        .await
        .unwrap_err();
    assert_eq!(err, DispatchError::UnsupportedPlatform("LinkedIn".to_string()));

    let message = dispatcher
        .execute_task(
            "calendar",
            "create_event",
            json!({"source": "Yahoo", "event_details": {}}),
        )
        .await;
    assert_eq!(message, "Calendar source Yahoo not supported.");
}

#[tokio::test]
async fn test_post_update_hello_world() {
    let dispatcher = TaskDispatcher::default();
    let result = dispatcher
        .execute_task(
            "social_media",
            "post_update",
            json!({"platform": "Twitter", "content": "Hello World!"}),
        )
        .await;

    assert!(result.contains("Twitter"));
    assert!(result.contains("Hello World!"));
}

#[tokio::test]
async fn test_setup_lists_platforms_then_sources() {
    let report = one_click_setup().await;
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Setup Complete!");
    assert_eq!(
        &lines[1..4],
        &[
            "Fetched updates from Facebook.",
            "Fetched updates from Twitter.",
            "Fetched updates from Instagram.",
        ]
    );
    assert_eq!(
        &lines[4..],
        &[
            "Events fetched from Gmail.",
            "Events fetched from Outlook.",
            "Events fetched from iCloud.",
        ]
    );
}

#[tokio::test]
async fn test_invalid_arguments_are_reported() {
    let dispatcher = TaskDispatcher::default();

    let err = dispatcher
        .execute("calendar", "create_event", json!({"source": "Gmail", "event_details": "lunch"}))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_ARGUMENTS");
    assert!(err.to_string().contains("'event_details'"));
}

#[tokio::test]
async fn test_custom_registry() {
    let mut registry = ProviderRegistry::new();
    registry.register(Arc::new(SocialMediaProvider::new(vec!["Bluesky".to_string()])));
    let dispatcher = TaskDispatcher::new(registry);

    assert_eq!(
        dispatcher
            .execute_task("social_media", "fetch_latest_updates", Value::Null)
            .await,
        "Fetched updates from Bluesky."
    );
    assert_eq!(
        dispatcher.execute_task("calendar", "sync_calendars", Value::Null).await,
        "Agent 'calendar' not found."
    );
}

#[tokio::test]
async fn test_provider_handles_typed_request() {
    let provider = SocialMediaProvider::default();
    let request = Request::from_args(
        Operation::PostUpdate,
        &json!({"platform": "Instagram", "content": "sunset"}),
    )
    .unwrap();

    assert_eq!(
        provider.handle(request).await.unwrap(),
        "Posted to Instagram: sunset"
    );
}

#[tokio::test]
async fn test_batch_from_json_requests() {
    let requests: Vec<TaskRequest> = serde_json::from_value(json!([
        {"provider": "maintenance", "operation": "resolve_issue", "arguments": {"issue": "Roof leak"}},
        {"provider": "calendar", "operation": "sync_calendars"}
    ]))
    .unwrap();

    let dispatcher = TaskDispatcher::default();
    let results = dispatcher.execute_batch(requests, 4).await;

    assert_eq!(
        results[0].as_ref().unwrap(),
        "Issue 'Roof leak' resolved by connecting with service provider."
    );
    assert!(results[1].as_ref().unwrap().starts_with("Events fetched from Gmail."));
}

#[tokio::test]
async fn test_dispatcher_from_public_config_types() {
    use agenthub::config::{CalendarConfig, SocialMediaConfig};
    use agenthub::Settings;

    let settings = Settings {
        social_media: SocialMediaConfig {
            platforms: vec!["Threads".to_string()],
        },
        calendar: CalendarConfig {
            sources: vec!["Proton".to_string()],
        },
        ..Settings::default()
    };

    let report = agenthub::one_click_setup_with(&TaskDispatcher::from_settings(&settings)).await;
    assert_eq!(
        report,
        "Setup Complete!\nFetched updates from Threads.\nEvents fetched from Proton."
    );
}
