use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::client::services::api_client::{ApiClient, ApiResult};
use crate::common::models::{ChatMessage, MessageType, User};

/// Client side of the internal support messaging. Messages live in the
/// backend; this service only fetches, sends and marks read. The
/// "conversation" notion is derived client-side (see [`ConversationIndex`]),
/// there is no persisted conversation entity.
#[derive(Debug, Clone)]
pub struct ChatService {
    api: Arc<ApiClient>,
    support_admin_id: i64,
}

impl ChatService {
    pub fn new(api: Arc<ApiClient>, support_admin_id: i64) -> Self {
        Self {
            api,
            support_admin_id,
        }
    }

    pub fn support_admin_id(&self) -> i64 {
        self.support_admin_id
    }

    /// Unread subset for the caller. The badge count is always recomputed
    /// from this response, never maintained incrementally.
    pub async fn fetch_unread(&self) -> ApiResult<Vec<ChatMessage>> {
        self.api
            .get("/chat/messages/", &[("is_read", "false".to_string())])
            .await
    }

    /// Every message visible to the caller (the backend scopes the list
    /// by role). Used by the admin conversation screen.
    pub async fn fetch_all(&self) -> ApiResult<Vec<ChatMessage>> {
        self.api.get("/chat/messages/", &[]).await
    }

    /// The support thread: SUPPORT messages, or DONATION_ISSUE messages
    /// scoped to one donation when the widget is bound to it. Sorted
    /// stably by timestamp so refreshes never reorder visually.
    pub async fn fetch_thread(&self, donation_id: Option<i64>) -> ApiResult<Vec<ChatMessage>> {
        let query = thread_query(donation_id);
        let mut messages: Vec<ChatMessage> = self.api.get("/chat/messages/", &query).await?;
        sort_thread(&mut messages);
        Ok(messages)
    }

    /// PATCH one message read. Safe to repeat: setting `is_read` on an
    /// already-read message is a no-op server-side.
    pub async fn mark_read(&self, id: i64) -> ApiResult<ChatMessage> {
        self.api
            .patch(&format!("/chat/messages/{}/", id), &json!({ "is_read": true }))
            .await
    }

    /// Mark every unread message addressed to `me` read, one PATCH at a
    /// time (the backend has no batch endpoint). Already-read messages
    /// are skipped, so repeating the pass issues no requests at all.
    /// Returns how many were marked.
    pub async fn mark_all_read(&self, messages: &[ChatMessage], me: i64) -> ApiResult<usize> {
        let ids = ids_to_mark_read(me, messages);
        for id in &ids {
            self.mark_read(*id).await?;
        }
        Ok(ids.len())
    }

    /// Send one message. `content` must already be trimmed non-empty —
    /// use [`trimmed_content`] at the input boundary so no request is
    /// issued for whitespace.
    pub async fn send(
        &self,
        receiver: i64,
        content: &str,
        linkage: (MessageType, Option<i64>),
    ) -> ApiResult<ChatMessage> {
        let (message_type, donation) = linkage;
        self.api
            .post(
                "/chat/messages/",
                &json!({
                    "receiver": receiver,
                    "content": content,
                    "message_type": message_type,
                    "donation": donation,
                }),
            )
            .await
    }
}

/// Query of the thread fetch: scoped to one donation's DONATION_ISSUE
/// messages when bound, plain SUPPORT otherwise.
pub fn thread_query(donation_id: Option<i64>) -> Vec<(&'static str, String)> {
    match donation_id {
        Some(id) => vec![
            ("type", "DONATION_ISSUE".to_string()),
            ("donation", id.to_string()),
        ],
        None => vec![("type", "SUPPORT".to_string())],
    }
}

/// Trimmed message body, or `None` when nothing would be sent.
pub fn trimmed_content(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Ids of the messages a mark-read pass would touch: unread and
/// addressed to `me`. Empty for an already-read thread.
pub fn ids_to_mark_read(me: i64, messages: &[ChatMessage]) -> Vec<i64> {
    messages
        .iter()
        .filter(|m| m.receiver == me && !m.is_read)
        .map(|m| m.id)
        .collect()
}

/// Unread badge value: messages addressed to `me` in the fetched unread
/// subset. Being a count over a server snapshot it can never go negative.
pub fn unread_count_for(me: i64, messages: &[ChatMessage]) -> usize {
    messages.iter().filter(|m| m.receiver == me).count()
}

/// A reply inherits the type/donation linkage of the last message in the
/// thread; an empty thread starts a plain SUPPORT exchange.
pub fn reply_linkage(thread: &[ChatMessage]) -> (MessageType, Option<i64>) {
    match thread.last() {
        Some(last) => (last.message_type, last.donation),
        None => (MessageType::Support, None),
    }
}

/// Stable ordering by timestamp (id as tie-break for equal timestamps).
pub fn sort_thread(messages: &mut [ChatMessage]) {
    messages.sort_by_key(|m| (m.timestamp, m.id));
}

/// Client-side pair filter: both directions between `me` and `other`,
/// in stable timestamp order.
pub fn thread_between(me: i64, other: i64, messages: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut pair: Vec<ChatMessage> = messages
        .iter()
        .filter(|m| {
            (m.sender == other && m.receiver == me) || (m.sender == me && m.receiver == other)
        })
        .cloned()
        .collect();
    sort_thread(&mut pair);
    pair
}

/// One grouped conversation as shown in the admin list.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub user: User,
    pub last_message: ChatMessage,
    pub unread: usize,
}

/// Explicit index from counterpart id to latest message + unread tally,
/// updated per poll batch instead of being rebuilt ad hoc in the view.
/// Ingesting the same snapshot twice yields the same state.
#[derive(Debug, Default)]
pub struct ConversationIndex {
    entries: HashMap<i64, Conversation>,
}

impl ConversationIndex {
    /// Fold a fetched message batch into the index. Tallies are reset
    /// first so a full snapshot poll replaces them rather than adding up.
    pub fn ingest(&mut self, me: i64, batch: &[ChatMessage]) {
        for entry in self.entries.values_mut() {
            entry.unread = 0;
        }
        for message in batch {
            let counterpart = if message.sender == me {
                message.receiver_details.as_ref()
            } else {
                message.sender_details.as_ref()
            };
            // messages without embedded user details cannot be grouped
            let Some(counterpart) = counterpart else {
                continue;
            };
            let addressed_unread = message.receiver == me && !message.is_read;
            match self.entries.get_mut(&counterpart.id) {
                Some(entry) => {
                    if message.timestamp >= entry.last_message.timestamp {
                        entry.last_message = message.clone();
                    }
                    if addressed_unread {
                        entry.unread += 1;
                    }
                }
                None => {
                    self.entries.insert(
                        counterpart.id,
                        Conversation {
                            user: counterpart.clone(),
                            last_message: message.clone(),
                            unread: usize::from(addressed_unread),
                        },
                    );
                }
            }
        }
    }

    pub fn get(&self, counterpart_id: i64) -> Option<&Conversation> {
        self.entries.get(&counterpart_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Conversations ordered by most recent activity first.
    pub fn ordered(&self) -> Vec<&Conversation> {
        let mut list: Vec<&Conversation> = self.entries.values().collect();
        list.sort_by(|a, b| b.last_message.timestamp.cmp(&a.last_message.timestamp));
        list
    }

    /// Name search over the ordered list (username or first/last name,
    /// case-insensitive), mirroring the admin sidebar filter.
    pub fn search(&self, term: &str) -> Vec<&Conversation> {
        let needle = term.trim().to_lowercase();
        self.ordered()
            .into_iter()
            .filter(|c| {
                needle.is_empty()
                    || c.user.username.to_lowercase().contains(&needle)
                    || c.user.display_name().to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::models::Role;
    use chrono::{TimeZone, Utc};

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            role: Role::Member,
            profile_picture: None,
        }
    }

    fn message(id: i64, sender: i64, receiver: i64, minute: u32, read: bool) -> ChatMessage {
        ChatMessage {
            id,
            sender,
            receiver,
            sender_details: Some(user(sender, &format!("u{}", sender))),
            receiver_details: Some(user(receiver, &format!("u{}", receiver))),
            content: format!("message {}", id),
            message_type: MessageType::Support,
            donation: None,
            is_read: read,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 10, minute, 0).unwrap(),
        }
    }

    #[test]
    fn thread_query_scopes_to_the_bound_donation() {
        assert_eq!(thread_query(None), vec![("type", "SUPPORT".to_string())]);
        assert_eq!(
            thread_query(Some(42)),
            vec![
                ("type", "DONATION_ISSUE".to_string()),
                ("donation", "42".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        assert_eq!(trimmed_content("   "), None);
        assert_eq!(trimmed_content("\n\t"), None);
        assert_eq!(trimmed_content("  bonjour  "), Some("bonjour".to_string()));
    }

    #[test]
    fn unread_count_only_counts_messages_addressed_to_me() {
        let me = 7;
        let batch = vec![
            message(1, 2, me, 0, false),
            message(2, me, 2, 1, false),
            message(3, 3, me, 2, false),
        ];
        assert_eq!(unread_count_for(me, &batch), 2);
        assert_eq!(unread_count_for(99, &batch), 0);
    }

    #[test]
    fn marking_everything_read_empties_the_unread_count() {
        // server-side effect of mark_all_read: the unread subset for `me`
        // becomes empty, so the recomputed badge is 0
        let me = 7;
        let mut batch = vec![message(1, 2, me, 0, false), message(2, 3, me, 1, false)];
        for m in batch.iter_mut().filter(|m| m.receiver == me && !m.is_read) {
            m.is_read = true;
        }
        let unread: Vec<ChatMessage> = batch.into_iter().filter(|m| !m.is_read).collect();
        assert_eq!(unread_count_for(me, &unread), 0);
    }

    #[test]
    fn mark_read_pass_skips_already_read_messages() {
        // repeating the pass on a fully-read thread touches nothing
        let me = 7;
        let mut batch = vec![message(1, 2, me, 0, false), message(2, 2, me, 1, true)];
        assert_eq!(ids_to_mark_read(me, &batch), vec![1]);
        batch[0].is_read = true;
        assert_eq!(ids_to_mark_read(me, &batch), Vec::<i64>::new());
    }

    #[test]
    fn reply_inherits_last_linkage_or_defaults_to_support() {
        assert_eq!(reply_linkage(&[]), (MessageType::Support, None));

        let mut thread = vec![message(1, 2, 7, 0, true), message(2, 7, 2, 1, true)];
        thread[1].message_type = MessageType::DonationIssue;
        thread[1].donation = Some(42);
        assert_eq!(
            reply_linkage(&thread),
            (MessageType::DonationIssue, Some(42))
        );
    }

    #[test]
    fn thread_sort_is_stable_for_equal_timestamps() {
        let mut thread = vec![
            message(5, 1, 2, 3, true),
            message(3, 2, 1, 3, true),
            message(1, 1, 2, 0, true),
        ];
        sort_thread(&mut thread);
        let ids: Vec<i64> = thread.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn thread_between_keeps_only_the_pair() {
        let me = 1;
        let batch = vec![
            message(1, 2, me, 0, true),
            message(2, me, 2, 1, true),
            message(3, 3, me, 2, true),
            message(4, 2, 3, 3, true),
        ];
        let pair = thread_between(me, 2, &batch);
        let ids: Vec<i64> = pair.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn index_groups_by_counterpart_with_latest_and_tally() {
        let me = 1;
        let batch = vec![
            message(1, 2, me, 0, false),
            message(2, me, 2, 1, true),
            message(3, 2, me, 2, false),
            message(4, 3, me, 3, false),
        ];
        let mut index = ConversationIndex::default();
        index.ingest(me, &batch);

        let with_2 = index.get(2).unwrap();
        assert_eq!(with_2.last_message.id, 3);
        assert_eq!(with_2.unread, 2);
        let with_3 = index.get(3).unwrap();
        assert_eq!(with_3.unread, 1);

        // most recent conversation first
        let ordered: Vec<i64> = index.ordered().iter().map(|c| c.user.id).collect();
        assert_eq!(ordered, vec![3, 2]);
    }

    #[test]
    fn ingest_is_idempotent_per_snapshot() {
        let me = 1;
        let batch = vec![message(1, 2, me, 0, false), message(2, 2, me, 1, false)];
        let mut index = ConversationIndex::default();
        index.ingest(me, &batch);
        index.ingest(me, &batch);
        assert_eq!(index.get(2).unwrap().unread, 2);
    }

    #[test]
    fn search_matches_username_case_insensitively() {
        let me = 1;
        let batch = vec![message(1, 2, me, 0, false)];
        let mut index = ConversationIndex::default();
        index.ingest(me, &batch);
        assert_eq!(index.search("U2").len(), 1);
        assert_eq!(index.search("nobody").len(), 0);
        assert_eq!(index.search("").len(), 1);
    }
}
