use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::client::services::api_client::{ApiClient, ApiResult};
use crate::common::models::Announcement;

#[derive(Debug, Clone)]
pub struct AnnouncementService {
    api: Arc<ApiClient>,
}

impl AnnouncementService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// GET /announcements/announcements/ — members get the active,
    /// non-expired subset; admins get everything.
    pub async fn list(&self) -> ApiResult<Vec<Announcement>> {
        self.api.get("/announcements/announcements/", &[]).await
    }

    pub async fn create(
        &self,
        title: &str,
        content: &str,
        is_active: bool,
        expires_at: Option<DateTime<Utc>>,
    ) -> ApiResult<Announcement> {
        self.api
            .post(
                "/announcements/announcements/",
                &json!({
                    "title": title,
                    "content": content,
                    "is_active": is_active,
                    "expires_at": expires_at,
                }),
            )
            .await
    }

    pub async fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
        is_active: bool,
        expires_at: Option<DateTime<Utc>>,
    ) -> ApiResult<Announcement> {
        self.api
            .patch(
                &format!("/announcements/announcements/{}/", id),
                &json!({
                    "title": title,
                    "content": content,
                    "is_active": is_active,
                    "expires_at": expires_at,
                }),
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api
            .delete(&format!("/announcements/announcements/{}/", id))
            .await
    }
}

/// Defensive client-side cut of the banner rotation: active and not
/// expired at `now`. The backend already filters for members; this keeps
/// the banner honest when a cached admin list is reused.
pub fn active_announcements(list: &[Announcement], now: DateTime<Utc>) -> Vec<&Announcement> {
    list.iter()
        .filter(|a| a.is_active)
        .filter(|a| a.expires_at.map(|exp| exp > now).unwrap_or(true))
        .collect()
}

/// Banner rotation: advance and wrap.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn announcement(id: i64, active: bool, expires_min: Option<i64>) -> Announcement {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        Announcement {
            id,
            title: format!("annonce {}", id),
            content: String::new(),
            is_active: active,
            created_at: Some(base),
            expires_at: expires_min.map(|m| base + chrono::Duration::minutes(m)),
        }
    }

    #[test]
    fn only_active_unexpired_announcements_rotate() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let list = vec![
            announcement(1, true, None),
            announcement(2, false, None),
            announcement(3, true, Some(10)),  // expired at 12:10
            announcement(4, true, Some(120)), // still valid
        ];
        let ids: Vec<i64> = active_announcements(&list, now).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn rotation_wraps_and_tolerates_empty() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(5, 0), 0);
    }
}
