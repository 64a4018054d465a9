#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use recap::api::claude::TaskSummary;
    use recap::api::todoist::Task;
    use recap::api::{Claude, ClaudeConfig};
    use recap::libs::week::BusinessWeek;
    use serde_json::json;

    const API_KEY: &str = "test-key";

    fn config(server: &MockServer) -> ClaudeConfig {
        ClaudeConfig {
            api_url: server.base_url(),
            model: "claude-3-5-haiku-latest".to_string(),
        }
    }

    fn task(content: &str) -> Task {
        serde_json::from_value(json!({
            "id": "1",
            "content": content,
            "completed_at": "2025-06-10T14:30:00+00:00"
        }))
        .unwrap()
    }

    fn week() -> BusinessWeek {
        BusinessWeek::for_date(NaiveDate::from_ymd_opt(2025, 6, 11).unwrap())
    }

    fn text_response(payload: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "text", "text": payload.to_string() }],
            "model": "claude-3-5-haiku-latest",
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 100, "output_tokens": 50 }
        })
    }

    #[tokio::test]
    async fn test_summarize_zero_tasks_skips_api_call() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/messages");
                then.status(200).json_body(text_response(json!({})));
            })
            .await;

        let claude = Claude::new(&config(&server), API_KEY).unwrap();
        let summary = claude.summarize_tasks(&[], &week()).await.unwrap();

        mock.assert_hits_async(0).await;
        assert_eq!(summary.week_of, NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
        assert_eq!(summary.completed_tasks, 0);
        assert_eq!(summary.summary, "No tasks completed this week.");
        assert!(summary.key_categories.is_empty());
    }

    #[tokio::test]
    async fn test_summarize_tasks_parses_model_reply() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/messages")
                    .header("x-api-key", API_KEY)
                    .header("anthropic-version", "2023-06-01")
                    .body_contains("Ship feature");
                then.status(200).json_body(text_response(json!({
                    "summary": "Shipped one feature and fixed a bug.",
                    "key_categories": ["development", "maintenance"],
                    "productivity_trends": "Steady output through the week."
                })));
            })
            .await;

        let claude = Claude::new(&config(&server), API_KEY).unwrap();
        let tasks = vec![task("Ship feature"), task("Fix bug")];
        let summary = claude.summarize_tasks(&tasks, &week()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(summary.completed_tasks, 2);
        assert_eq!(summary.summary, "Shipped one feature and fixed a bug.");
        assert_eq!(summary.key_categories, vec!["development", "maintenance"]);
        assert_eq!(summary.productivity_trends, "Steady output through the week.");
    }

    #[tokio::test]
    async fn test_summarize_rejects_non_json_reply() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/messages");
                then.status(200).json_body(json!({
                    "content": [{ "type": "text", "text": "Sure! Here is your summary..." }]
                }));
            })
            .await;

        let claude = Claude::new(&config(&server), API_KEY).unwrap();
        let err = claude.summarize_tasks(&[task("Anything")], &week()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse summary response"), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_analyze_trends_with_history() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/messages").body_contains("HISTORICAL WEEKS");
                then.status(200).json_body(text_response(json!({
                    "overall_summary": "Output is picking up.",
                    "productivity_trend": "increasing",
                    "category_trends": [
                        { "category": "development", "trend": "increasing", "description": "more shipping" }
                    ],
                    "recommendations": ["Keep batching reviews"],
                    "weekly_comparison": "Busier than the last two weeks."
                })));
            })
            .await;

        let history = vec![TaskSummary {
            week_of: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            completed_tasks: 5,
            summary: "A normal week.".to_string(),
            key_categories: vec!["development".to_string()],
            productivity_trends: "stable".to_string(),
        }];

        let claude = Claude::new(&config(&server), API_KEY).unwrap();
        let analysis = claude.analyze_trends(&[task("Ship feature")], &history).await.unwrap();

        mock.assert_async().await;
        assert_eq!(analysis.productivity_trend, "increasing");
        assert_eq!(analysis.category_trends.len(), 1);
        assert_eq!(analysis.recommendations, vec!["Keep batching reviews"]);
    }

    #[tokio::test]
    async fn test_analyze_trends_without_history_or_tasks_is_fixed() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/messages");
                then.status(200).json_body(text_response(json!({})));
            })
            .await;

        let claude = Claude::new(&config(&server), API_KEY).unwrap();
        let analysis = claude.analyze_trends(&[], &[]).await.unwrap();

        mock.assert_hits_async(0).await;
        assert_eq!(analysis.overall_summary, "No tasks completed this week.");
        assert_eq!(analysis.productivity_trend, "stable");
        assert_eq!(analysis.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn test_baseline_analysis_without_history() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/messages").body_contains("initial analysis");
                then.status(200).json_body(text_response(json!({
                    "overall_summary": "First tracked week.",
                    "productivity_trend": "stable",
                    "category_trends": [],
                    "recommendations": [],
                    "weekly_comparison": "Baseline week - no historical comparison available"
                })));
            })
            .await;

        let claude = Claude::new(&config(&server), API_KEY).unwrap();
        let analysis = claude.analyze_trends(&[task("Ship feature")], &[]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(analysis.overall_summary, "First tracked week.");
    }

    #[tokio::test]
    async fn test_api_error_surfaces_error_envelope_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/messages");
                then.status(401).json_body(json!({
                    "type": "error",
                    "error": { "type": "authentication_error", "message": "invalid x-api-key" }
                }));
            })
            .await;

        let claude = Claude::new(&config(&server), API_KEY).unwrap();
        let err = claude.validate_key().await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("401"), "unexpected error: {}", message);
        assert!(message.contains("invalid x-api-key"), "unexpected error: {}", message);
    }

    #[tokio::test]
    async fn test_empty_content_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/messages");
                then.status(200).json_body(json!({ "content": [] }));
            })
            .await;

        let claude = Claude::new(&config(&server), API_KEY).unwrap();
        let err = claude.validate_key().await.unwrap_err();
        assert!(err.to_string().contains("No content"), "unexpected error: {}", err);
    }
}
