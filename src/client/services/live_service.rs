use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;

use crate::client::services::api_client::{ApiClient, ApiFailure, ApiResult};
use crate::common::models::LiveStream;

#[derive(Debug, Clone)]
pub struct LiveService {
    api: Arc<ApiClient>,
}

impl LiveService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// GET /lives/streams/ (members only see LIVE/PLANNED, the backend
    /// filters by role).
    pub async fn list(&self) -> ApiResult<Vec<LiveStream>> {
        self.api.get("/lives/streams/", &[]).await
    }

    /// GET /lives/streams/active/ — `None` when nothing is live (the
    /// endpoint answers 204).
    pub async fn active(&self) -> ApiResult<Option<LiveStream>> {
        self.api.get_opt("/lives/streams/active/").await
    }

    /// POST /lives/streams/ — schedule a stream (pastor/admin).
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        scheduled_start: Option<DateTime<Utc>>,
    ) -> ApiResult<LiveStream> {
        self.api
            .post(
                "/lives/streams/",
                &json!({
                    "title": title,
                    "description": description,
                    "scheduled_start": scheduled_start,
                }),
            )
            .await
    }

    /// POST /lives/streams/{id}/start_stream/ — the backend provisions
    /// the ingest endpoint/stream key and flips the status to LIVE.
    pub async fn start(&self, id: i64) -> ApiResult<LiveStream> {
        self.api
            .post_empty(&format!("/lives/streams/{}/start_stream/", id))
            .await
    }

    /// POST /lives/streams/{id}/stop_stream/.
    pub async fn stop(&self, id: i64) -> ApiResult<LiveStream> {
        self.api
            .post_empty(&format!("/lives/streams/{}/stop_stream/", id))
            .await
    }

    /// DELETE /lives/streams/{id}/.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("/lives/streams/{}/", id)).await
    }
}

/// Banner visibility rule: an empty result and a failed poll are rendered
/// identically — no banner. 401s are handled upstream as session
/// invalidation before this is applied.
pub fn visible_stream(
    poll: Result<Option<LiveStream>, ApiFailure>,
) -> Option<LiveStream> {
    match poll {
        Ok(stream) => stream,
        Err(failure) => {
            log::warn!("[LIVE] poll du direct actif échoué: {}", failure.message);
            None
        }
    }
}

/// Parse the schedule form input ("2025-03-01 18:30", local wall time
/// taken as UTC). Empty input means "no scheduled start".
pub fn parse_schedule_input(input: &str) -> Result<Option<DateTime<Utc>>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M")
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| "Format attendu : AAAA-MM-JJ HH:MM".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::models::StreamStatus;

    fn stream() -> LiveStream {
        LiveStream {
            id: 1,
            title: "Culte du dimanche".to_string(),
            description: String::new(),
            status: StreamStatus::Live,
            stream_key: String::new(),
            playback_url: String::new(),
            ingest_endpoint: String::new(),
            scheduled_start: None,
            started_at: None,
            ended_at: None,
            created_at: None,
        }
    }

    #[test]
    fn empty_result_and_poll_error_both_hide_the_banner() {
        assert!(visible_stream(Ok(None)).is_none());
        assert!(visible_stream(Err(ApiFailure {
            unauthorized: false,
            message: "timeout".to_string(),
        }))
        .is_none());
        assert!(visible_stream(Ok(Some(stream()))).is_some());
    }

    #[test]
    fn schedule_input_parses_or_explains() {
        assert_eq!(parse_schedule_input("  "), Ok(None));
        let parsed = parse_schedule_input("2025-03-01 18:30").unwrap().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-03-01T18:30:00+00:00");
        assert!(parse_schedule_input("demain soir").is_err());
    }
}
