pub mod about_service;
pub mod announcement_service;
pub mod api_client;
pub mod auth_service;
pub mod chat_service;
pub mod donation_service;
pub mod live_service;

use std::sync::Arc;

use crate::client::config::ClientConfig;

/// One shared bundle of every backend-facing service, cloned (via `Arc`)
/// into the async commands the GUI spawns.
#[derive(Debug)]
pub struct Services {
    pub api: Arc<api_client::ApiClient>,
    pub auth: auth_service::AuthService,
    pub chat: chat_service::ChatService,
    pub donations: donation_service::DonationService,
    pub live: live_service::LiveService,
    pub announcements: announcement_service::AnnouncementService,
    pub about: about_service::AboutService,
}

impl Services {
    pub fn from_config(config: &ClientConfig) -> Self {
        let api = Arc::new(api_client::ApiClient::new(config));
        Self {
            auth: auth_service::AuthService::new(api.clone()),
            chat: chat_service::ChatService::new(api.clone(), config.support_admin_id),
            donations: donation_service::DonationService::new(
                api.clone(),
                config.whatsapp_number.clone(),
            ),
            live: live_service::LiveService::new(api.clone()),
            announcements: announcement_service::AnnouncementService::new(api.clone()),
            about: about_service::AboutService::new(api.clone()),
            api,
        }
    }
}
