use std::sync::Arc;

use iced::Command;

use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::messages::Message;
use crate::client::services::api_client::ApiFailure;
use crate::client::services::chat_service::{self, ConversationIndex};
use crate::client::services::donation_service::{
    Choice, DonationDeclaration, StatusFilter, PAYMENT_METHODS, PROJECTS,
};
use crate::client::services::live_service;
use crate::client::services::about_service::{SectionForm, VisionaryForm};
use crate::client::services::Services;
use crate::client::utils::session_store;
use crate::common::models::{
    AboutSection, Announcement, ChatMessage, Donation, GlobalDonationStats, LiveStream, Role,
    SectionType, User, Visionary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    CheckingSession,
    Login,
    Dashboard,
    Donations,
    Live,
    Announcements,
    SupportConversations,
    About,
}

/// One-shot "open the support chat like this" command, e.g. from the
/// donation history's "report a problem" button. Consumed exactly once;
/// taking it out of the state is the consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatIntent {
    pub donation_id: Option<i64>,
    pub prefill: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingDelete {
    Donation(i64),
    Announcement(i64),
    Section(i64),
    Stream(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Visionary,
    Sections,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct DeclareFormState {
    pub amount_input: String,
    pub project: Choice,
    pub payment_method: Choice,
    pub notes: String,
}

impl Default for DeclareFormState {
    fn default() -> Self {
        Self {
            amount_input: String::new(),
            project: PROJECTS[0],
            payment_method: PAYMENT_METHODS[0],
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnnouncementFormState {
    pub editing: Option<i64>,
    pub title: String,
    pub content: String,
    pub is_active: bool,
    pub expiry_input: String,
}

impl Default for AnnouncementFormState {
    fn default() -> Self {
        Self {
            editing: None,
            title: String::new(),
            content: String::new(),
            // new announcements go out active, as the backend defaults
            is_active: true,
            expiry_input: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LiveFormState {
    pub title: String,
    pub description: String,
    pub schedule_input: String,
}

#[derive(Debug, Clone, Default)]
pub struct VisionaryFormState {
    pub name: String,
    pub title: String,
    pub biography: String,
    pub history: String,
    pub photo_path_input: String,
}

#[derive(Debug, Clone)]
pub struct SectionFormState {
    pub editing: Option<i64>,
    pub section_type: SectionType,
    pub title: String,
    pub content: String,
    pub image_path_input: String,
}

impl Default for SectionFormState {
    fn default() -> Self {
        Self {
            editing: None,
            section_type: SectionType::History,
            title: String::new(),
            content: String::new(),
            image_path_input: String::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ChurchAppState {
    pub route: Route,
    pub session: Option<Session>,
    // login form
    pub username_input: String,
    pub password_input: String,
    pub show_password: bool,
    pub logging_in: bool,
    pub login_error: Option<String>,
    // status bar / blocking alert
    pub logger: Vec<LogMessage>,
    pub alert: Option<String>,
    // support chat widget
    pub chat_open: bool,
    pub chat_intent: Option<ChatIntent>,
    pub chat_donation_id: Option<i64>,
    pub chat_thread: Vec<ChatMessage>,
    pub chat_input: String,
    pub chat_sending: bool,
    pub unread_count: usize,
    // admin conversations
    pub conversations: ConversationIndex,
    pub conversations_loading: bool,
    pub conversation_search: String,
    pub selected_conversation: Option<User>,
    pub conversation_thread: Vec<ChatMessage>,
    pub reply_input: String,
    // live
    pub active_live: Option<LiveStream>,
    pub live_streams: Vec<LiveStream>,
    pub live_loading: bool,
    pub live_form: LiveFormState,
    pub live_form_error: Option<String>,
    // donations
    pub donations: Vec<Donation>,
    pub donations_loading: bool,
    pub donation_filter: StatusFilter,
    pub donation_search: String,
    pub declare_form: DeclareFormState,
    pub declare_error: Option<String>,
    pub declaring: bool,
    /// WhatsApp hand-off link shown after a successful declaration.
    pub declare_success: Option<String>,
    pub global_stats: Option<GlobalDonationStats>,
    // announcements
    pub announcements: Vec<Announcement>,
    pub announcements_loading: bool,
    pub announcement_index: usize,
    pub announcement_form: AnnouncementFormState,
    pub announcement_form_error: Option<String>,
    // about content
    pub visionary: Option<Visionary>,
    pub sections: Vec<AboutSection>,
    pub about_loading: bool,
    pub about_tab: AboutTab,
    pub visionary_form: VisionaryFormState,
    pub section_form: SectionFormState,
    pub about_form_error: Option<String>,
    // deletions awaiting confirmation
    pub pending_delete: Option<PendingDelete>,
}

impl ChurchAppState {
    pub fn me(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn my_id(&self) -> i64 {
        self.me().map(|u| u.id).unwrap_or_default()
    }

    pub fn role(&self) -> Option<Role> {
        self.me().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_pastor_or_admin(&self) -> bool {
        matches!(self.role(), Some(Role::Admin) | Some(Role::Pastor))
    }

    pub fn push_log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.logger.push(LogMessage {
            level,
            message: message.into(),
        });
    }

    /// Drop the session everywhere: token, keyring, state. Every 401
    /// funnels here, background polls included.
    pub fn force_logout(&mut self, services: &Arc<Services>) {
        services.api.set_token(None);
        if let Err(e) = session_store::clear_session_token() {
            log::warn!("[SESSION] impossible d'effacer le jeton: {}", e);
        }
        *self = ChurchAppState {
            route: Route::Login,
            alert: Some("Session expirée, veuillez vous reconnecter.".to_string()),
            ..ChurchAppState::default()
        };
    }

    /// Submission failure: blocking alert, or forced logout on 401.
    pub fn fail_alert(&mut self, services: &Arc<Services>, context: &str, failure: ApiFailure) {
        if failure.unauthorized {
            self.force_logout(services);
        } else {
            log::error!("[{}] {}", context, failure.message);
            self.alert = Some(failure.message);
        }
    }

    /// Background-poll failure: log and keep stale data — except a 401,
    /// which still invalidates the session.
    pub fn fail_silent(&mut self, services: &Arc<Services>, context: &str, failure: ApiFailure) {
        if failure.unauthorized {
            self.force_logout(services);
        } else {
            log::warn!("[{}] {}", context, failure.message);
        }
    }

    /// Route switch plus the fetches the destination needs. Every screen
    /// refetches its full collection on entry; filters are client-side.
    pub fn navigate(&mut self, services: &Arc<Services>, route: Route) -> Command<Message> {
        self.route = route;
        match route {
            Route::Donations => {
                self.donations_loading = true;
                let mut commands = vec![fetch_donations(services)];
                if self.is_pastor_or_admin() {
                    commands.push(fetch_global_stats(services));
                }
                Command::batch(commands)
            }
            Route::Live => {
                self.live_loading = true;
                Command::batch(vec![fetch_streams(services), fetch_active(services)])
            }
            Route::Announcements => {
                self.announcements_loading = true;
                fetch_announcements(services)
            }
            Route::SupportConversations => {
                self.conversations_loading = true;
                fetch_all_messages(services)
            }
            Route::About => {
                self.about_loading = true;
                fetch_about(services)
            }
            Route::Dashboard => {
                let mut commands = Vec::new();
                if self.is_pastor_or_admin() {
                    commands.push(fetch_global_stats(services));
                }
                if self.role() == Some(Role::Member) {
                    commands.push(fetch_announcements(services));
                }
                Command::batch(commands)
            }
            _ => Command::none(),
        }
    }

    /// Everything except session/polling/chat-widget handling, which
    /// lives in `gui::app` next to the subscription that drives it.
    pub fn update(&mut self, message: Message, services: &Arc<Services>) -> Command<Message> {
        match message {
            Message::Navigate(route) => return self.navigate(services, route),
            Message::OpenLive => return self.navigate(services, Route::Live),
            Message::DismissAlert => {
                self.alert = None;
            }
            Message::ClearLog => {
                self.logger.clear();
            }

            // ---- donations ----
            Message::DonationsLoaded(Ok(donations)) => {
                self.donations = donations;
                self.donations_loading = false;
            }
            Message::DonationsLoaded(Err(failure)) => {
                self.donations_loading = false;
                self.fail_silent(services, "DONATIONS", failure);
            }
            Message::GlobalStatsLoaded(Ok(stats)) => {
                self.global_stats = Some(stats);
            }
            Message::GlobalStatsLoaded(Err(failure)) => {
                self.fail_silent(services, "DONATIONS", failure);
            }
            Message::DonationFilterChanged(filter) => {
                self.donation_filter = filter;
            }
            Message::DonationSearchChanged(term) => {
                self.donation_search = term;
            }
            Message::DeclareAmountChanged(value) => {
                self.declare_form.amount_input = value;
                self.declare_error = None;
            }
            Message::DeclareProjectSelected(choice) => {
                self.declare_form.project = choice;
            }
            Message::DeclareMethodSelected(choice) => {
                self.declare_form.payment_method = choice;
            }
            Message::DeclareNotesChanged(value) => {
                self.declare_form.notes = value;
            }
            Message::SubmitDeclaration => {
                let amount = self
                    .declare_form
                    .amount_input
                    .trim()
                    .replace(',', ".")
                    .parse::<f64>();
                let amount = match amount {
                    Ok(a) => a,
                    Err(_) => {
                        self.declare_error = Some("Montant invalide".to_string());
                        return Command::none();
                    }
                };
                let declaration = DonationDeclaration {
                    amount,
                    project: self.declare_form.project.id.to_string(),
                    payment_method: self.declare_form.payment_method.id.to_string(),
                    notes: self.declare_form.notes.clone(),
                };
                if let Err(reason) = declaration.validate() {
                    self.declare_error = Some(reason);
                    return Command::none();
                }
                self.declaring = true;
                self.declare_error = None;
                let services = services.clone();
                return Command::perform(
                    async move { services.donations.declare(&declaration).await.map_err(ApiFailure::from) },
                    Message::DonationDeclared,
                );
            }
            Message::DonationDeclared(Ok(whatsapp_url)) => {
                self.declaring = false;
                self.declare_success = Some(whatsapp_url);
                self.declare_form = DeclareFormState::default();
                self.push_log(LogLevel::Success, "Don déclaré avec succès !");
                self.donations_loading = true;
                return fetch_donations(services);
            }
            Message::DonationDeclared(Err(failure)) => {
                self.declaring = false;
                if failure.unauthorized {
                    self.force_logout(services);
                } else {
                    self.declare_error = Some(failure.message);
                }
            }
            Message::DismissDeclareResult => {
                self.declare_success = None;
            }
            Message::UpdateDonationStatus { id, status } => {
                let services_cloned = services.clone();
                return Command::perform(
                    async move {
                        services_cloned
                            .donations
                            .update_status(id, status)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::DonationStatusUpdated,
                );
            }
            Message::DonationStatusUpdated(Ok(_)) => {
                self.push_log(LogLevel::Success, "Statut du don mis à jour");
                self.donations_loading = true;
                let mut commands = vec![fetch_donations(services)];
                if self.is_pastor_or_admin() {
                    commands.push(fetch_global_stats(services));
                }
                return Command::batch(commands);
            }
            Message::DonationStatusUpdated(Err(failure)) => {
                self.fail_alert(services, "DONATIONS", failure);
            }

            // ---- live management ----
            Message::LiveStreamsLoaded(Ok(streams)) => {
                self.live_streams = streams;
                self.live_loading = false;
            }
            Message::LiveStreamsLoaded(Err(failure)) => {
                self.live_loading = false;
                self.fail_silent(services, "LIVE", failure);
            }
            Message::LiveTitleChanged(value) => {
                self.live_form.title = value;
                self.live_form_error = None;
            }
            Message::LiveDescriptionChanged(value) => {
                self.live_form.description = value;
            }
            Message::LiveScheduleChanged(value) => {
                self.live_form.schedule_input = value;
                self.live_form_error = None;
            }
            Message::SubmitLiveSchedule => {
                let title = self.live_form.title.trim().to_string();
                if title.is_empty() {
                    self.live_form_error = Some("Le titre est requis".to_string());
                    return Command::none();
                }
                let scheduled = match live_service::parse_schedule_input(&self.live_form.schedule_input) {
                    Ok(value) => value,
                    Err(reason) => {
                        self.live_form_error = Some(reason);
                        return Command::none();
                    }
                };
                let description = self.live_form.description.clone();
                let services_cloned = services.clone();
                return Command::perform(
                    async move {
                        services_cloned
                            .live
                            .create(&title, &description, scheduled)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::LiveStreamSaved,
                );
            }
            Message::LiveStreamSaved(Ok(_)) => {
                self.live_form = LiveFormState::default();
                self.push_log(LogLevel::Success, "Direct planifié");
                self.live_loading = true;
                return fetch_streams(services);
            }
            Message::LiveStreamSaved(Err(failure)) => {
                self.fail_alert(services, "LIVE", failure);
            }
            Message::StartLiveStream(id) => {
                let services_cloned = services.clone();
                return Command::perform(
                    async move { services_cloned.live.start(id).await.map_err(ApiFailure::from) },
                    Message::LiveActionDone,
                );
            }
            Message::StopLiveStream(id) => {
                let services_cloned = services.clone();
                return Command::perform(
                    async move { services_cloned.live.stop(id).await.map_err(ApiFailure::from) },
                    Message::LiveActionDone,
                );
            }
            Message::LiveActionDone(Ok(stream)) => {
                self.push_log(
                    LogLevel::Success,
                    format!("Direct « {} » : {}", stream.title, stream.status.label_fr()),
                );
                self.live_loading = true;
                // refresh both the list and the banner state right away
                return Command::batch(vec![fetch_streams(services), fetch_active(services)]);
            }
            Message::LiveActionDone(Err(failure)) => {
                self.fail_alert(services, "LIVE", failure);
            }

            // ---- announcements ----
            Message::AnnouncementsLoaded(Ok(list)) => {
                self.announcements = list;
                self.announcements_loading = false;
                if self.announcement_index >= self.announcements.len() {
                    self.announcement_index = 0;
                }
            }
            Message::AnnouncementsLoaded(Err(failure)) => {
                self.announcements_loading = false;
                self.fail_silent(services, "ANNOUNCEMENTS", failure);
            }
            Message::NextAnnouncement => {
                let now = chrono::Utc::now();
                let visible =
                    crate::client::services::announcement_service::active_announcements(
                        &self.announcements,
                        now,
                    )
                    .len();
                self.announcement_index =
                    crate::client::services::announcement_service::next_index(
                        self.announcement_index,
                        visible,
                    );
            }
            Message::AnnouncementTitleChanged(value) => {
                self.announcement_form.title = value;
                self.announcement_form_error = None;
            }
            Message::AnnouncementContentChanged(value) => {
                self.announcement_form.content = value;
                self.announcement_form_error = None;
            }
            Message::AnnouncementActiveToggled(active) => {
                self.announcement_form.is_active = active;
            }
            Message::AnnouncementExpiryChanged(value) => {
                self.announcement_form.expiry_input = value;
                self.announcement_form_error = None;
            }
            Message::EditAnnouncement(id) => {
                if let Some(a) = self.announcements.iter().find(|a| a.id == id) {
                    self.announcement_form = AnnouncementFormState {
                        editing: Some(a.id),
                        title: a.title.clone(),
                        content: a.content.clone(),
                        is_active: a.is_active,
                        expiry_input: a
                            .expires_at
                            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_default(),
                    };
                }
            }
            Message::ResetAnnouncementForm => {
                self.announcement_form = AnnouncementFormState::default();
                self.announcement_form_error = None;
            }
            Message::SubmitAnnouncement => {
                let form = self.announcement_form.clone();
                if form.title.trim().is_empty() || form.content.trim().is_empty() {
                    self.announcement_form_error =
                        Some("Titre et contenu sont requis".to_string());
                    return Command::none();
                }
                let expires_at = match live_service::parse_schedule_input(&form.expiry_input) {
                    Ok(value) => value,
                    Err(reason) => {
                        self.announcement_form_error = Some(reason);
                        return Command::none();
                    }
                };
                let services_cloned = services.clone();
                return Command::perform(
                    async move {
                        let result = match form.editing {
                            Some(id) => {
                                services_cloned
                                    .announcements
                                    .update(id, form.title.trim(), form.content.trim(), form.is_active, expires_at)
                                    .await
                            }
                            None => {
                                services_cloned
                                    .announcements
                                    .create(form.title.trim(), form.content.trim(), form.is_active, expires_at)
                                    .await
                            }
                        };
                        result.map_err(ApiFailure::from)
                    },
                    Message::AnnouncementSaved,
                );
            }
            Message::AnnouncementSaved(Ok(_)) => {
                self.announcement_form = AnnouncementFormState::default();
                self.push_log(LogLevel::Success, "Annonce enregistrée");
                self.announcements_loading = true;
                return fetch_announcements(services);
            }
            Message::AnnouncementSaved(Err(failure)) => {
                self.fail_alert(services, "ANNOUNCEMENTS", failure);
            }

            // ---- about content ----
            Message::AboutDataLoaded(Ok((visionary, sections))) => {
                self.about_loading = false;
                if let Some(v) = &visionary {
                    self.visionary_form = VisionaryFormState {
                        name: v.name.clone(),
                        title: v.title.clone(),
                        biography: v.biography.clone(),
                        history: v.history.clone(),
                        photo_path_input: String::new(),
                    };
                }
                self.visionary = visionary;
                self.sections = sections;
            }
            Message::AboutDataLoaded(Err(failure)) => {
                self.about_loading = false;
                self.fail_silent(services, "ABOUT", failure);
            }
            Message::AboutTabSelected(tab) => {
                self.about_tab = tab;
            }
            Message::VisionaryNameChanged(value) => {
                self.visionary_form.name = value;
            }
            Message::VisionaryTitleChanged(value) => {
                self.visionary_form.title = value;
            }
            Message::VisionaryBiographyChanged(value) => {
                self.visionary_form.biography = value;
            }
            Message::VisionaryHistoryChanged(value) => {
                self.visionary_form.history = value;
            }
            Message::VisionaryPhotoPathChanged(value) => {
                self.visionary_form.photo_path_input = value;
            }
            Message::SubmitVisionary => {
                let form = VisionaryForm {
                    name: self.visionary_form.name.trim().to_string(),
                    title: self.visionary_form.title.trim().to_string(),
                    biography: self.visionary_form.biography.clone(),
                    history: self.visionary_form.history.clone(),
                    photo_path: path_input(&self.visionary_form.photo_path_input),
                };
                if form.name.is_empty() {
                    self.about_form_error = Some("Le nom est requis".to_string());
                    return Command::none();
                }
                self.about_form_error = None;
                let existing = self.visionary.as_ref().map(|v| v.id);
                let services_cloned = services.clone();
                return Command::perform(
                    async move {
                        services_cloned
                            .about
                            .save_visionary(existing, &form)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::VisionarySaved,
                );
            }
            Message::VisionarySaved(Ok(_)) => {
                self.push_log(LogLevel::Success, "Visionnaire enregistré");
                self.about_loading = true;
                return fetch_about(services);
            }
            Message::VisionarySaved(Err(failure)) => {
                self.fail_alert(services, "ABOUT", failure);
            }
            Message::SectionTypeSelected(section_type) => {
                self.section_form.section_type = section_type;
            }
            Message::SectionTitleChanged(value) => {
                self.section_form.title = value;
            }
            Message::SectionContentChanged(value) => {
                self.section_form.content = value;
            }
            Message::SectionImagePathChanged(value) => {
                self.section_form.image_path_input = value;
            }
            Message::EditSection(id) => {
                if let Some(s) = self.sections.iter().find(|s| s.id == id) {
                    self.section_form = SectionFormState {
                        editing: Some(s.id),
                        section_type: s.section_type,
                        title: s.title.clone(),
                        content: s.content.clone(),
                        image_path_input: String::new(),
                    };
                }
            }
            Message::ResetSectionForm => {
                self.section_form = SectionFormState::default();
                self.about_form_error = None;
            }
            Message::SubmitSection => {
                let state_form = self.section_form.clone();
                if state_form.title.trim().is_empty() {
                    self.about_form_error = Some("Le titre est requis".to_string());
                    return Command::none();
                }
                self.about_form_error = None;
                let form = SectionForm {
                    section_type: state_form.section_type,
                    title: state_form.title.trim().to_string(),
                    content: state_form.content.clone(),
                    image_path: path_input(&state_form.image_path_input),
                };
                let services_cloned = services.clone();
                return Command::perform(
                    async move {
                        services_cloned
                            .about
                            .save_section(state_form.editing, &form)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::SectionSaved,
                );
            }
            Message::SectionSaved(Ok(_)) => {
                self.section_form = SectionFormState::default();
                self.push_log(LogLevel::Success, "Section enregistrée");
                self.about_loading = true;
                return fetch_about(services);
            }
            Message::SectionSaved(Err(failure)) => {
                self.fail_alert(services, "ABOUT", failure);
            }

            // ---- admin conversations ----
            Message::ConversationSearchChanged(term) => {
                self.conversation_search = term;
            }
            Message::SelectConversation(user) => {
                self.selected_conversation = Some(user);
                self.conversation_thread.clear();
                return fetch_all_for_thread(services);
            }
            Message::ConversationThreadLoaded(Ok(batch)) => {
                let me = self.my_id();
                let Some(other) = self.selected_conversation.as_ref().map(|u| u.id) else {
                    return Command::none();
                };
                let pair = chat_service::thread_between(me, other, &batch);
                self.conversation_thread = pair.clone();
                let services_cloned = services.clone();
                return Command::perform(
                    async move {
                        services_cloned
                            .chat
                            .mark_all_read(&pair, me)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::ThreadMarkedRead,
                );
            }
            Message::ConversationThreadLoaded(Err(failure)) => {
                self.fail_silent(services, "ADMIN_CHAT", failure);
            }
            Message::ReplyInputChanged(value) => {
                self.reply_input = value;
            }
            Message::SendReply => {
                let Some(content) = chat_service::trimmed_content(&self.reply_input) else {
                    return Command::none();
                };
                let Some(receiver) = self.selected_conversation.as_ref().map(|u| u.id) else {
                    return Command::none();
                };
                let linkage = chat_service::reply_linkage(&self.conversation_thread);
                self.reply_input.clear();
                let services_cloned = services.clone();
                return Command::perform(
                    async move {
                        services_cloned
                            .chat
                            .send(receiver, &content, linkage)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::ReplySent,
                );
            }
            Message::ReplySent(Ok(_)) => {
                return fetch_all_for_thread(services);
            }
            Message::ReplySent(Err(failure)) => {
                self.fail_alert(services, "ADMIN_CHAT", failure);
            }

            // ---- deletions ----
            Message::RequestDelete(pending) => {
                self.pending_delete = Some(pending);
            }
            Message::CancelDelete => {
                self.pending_delete = None;
            }
            Message::ConfirmDelete => {
                let Some(pending) = self.pending_delete.take() else {
                    return Command::none();
                };
                let services_cloned = services.clone();
                return Command::perform(
                    async move {
                        let result = match pending {
                            PendingDelete::Donation(id) => services_cloned.donations.delete(id).await,
                            PendingDelete::Announcement(id) => {
                                services_cloned.announcements.delete(id).await
                            }
                            PendingDelete::Section(id) => services_cloned.about.delete_section(id).await,
                            PendingDelete::Stream(id) => services_cloned.live.delete(id).await,
                        };
                        result.map(|_| pending).map_err(ApiFailure::from)
                    },
                    Message::DeleteDone,
                );
            }
            Message::DeleteDone(Ok(pending)) => {
                self.push_log(LogLevel::Success, "Suppression effectuée");
                return match pending {
                    PendingDelete::Donation(_) => {
                        self.donations_loading = true;
                        fetch_donations(services)
                    }
                    PendingDelete::Announcement(_) => {
                        self.announcements_loading = true;
                        fetch_announcements(services)
                    }
                    PendingDelete::Section(_) => {
                        self.about_loading = true;
                        fetch_about(services)
                    }
                    PendingDelete::Stream(_) => {
                        self.live_loading = true;
                        Command::batch(vec![fetch_streams(services), fetch_active(services)])
                    }
                };
            }
            Message::DeleteDone(Err(failure)) => {
                self.fail_alert(services, "DELETE", failure);
            }

            _ => {}
        }
        Command::none()
    }
}

fn path_input(input: &str) -> Option<std::path::PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(trimmed))
    }
}

// Shared fetch commands; each one maps straight onto a `Loaded` message.

pub fn fetch_donations(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.donations.list().await.map_err(ApiFailure::from) },
        Message::DonationsLoaded,
    )
}

pub fn fetch_global_stats(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.donations.global_stats().await.map_err(ApiFailure::from) },
        Message::GlobalStatsLoaded,
    )
}

pub fn fetch_streams(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.live.list().await.map_err(ApiFailure::from) },
        Message::LiveStreamsLoaded,
    )
}

pub fn fetch_active(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.live.active().await.map_err(ApiFailure::from) },
        Message::ActiveLiveLoaded,
    )
}

pub fn fetch_announcements(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.announcements.list().await.map_err(ApiFailure::from) },
        Message::AnnouncementsLoaded,
    )
}

pub fn fetch_all_messages(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.chat.fetch_all().await.map_err(ApiFailure::from) },
        Message::ConversationsLoaded,
    )
}

/// Same fetch as [`fetch_all_messages`] but routed to the open-thread
/// handler, which filters the batch down to the selected pair.
pub fn fetch_all_for_thread(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.chat.fetch_all().await.map_err(ApiFailure::from) },
        Message::ConversationThreadLoaded,
    )
}

pub fn fetch_about(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.about.fetch_all().await.map_err(ApiFailure::from) },
        Message::AboutDataLoaded,
    )
}

pub fn fetch_unread(services: &Arc<Services>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move { services.chat.fetch_unread().await.map_err(ApiFailure::from) },
        Message::UnreadLoaded,
    )
}

pub fn fetch_thread(services: &Arc<Services>, donation_id: Option<i64>) -> Command<Message> {
    let services = services.clone();
    Command::perform(
        async move {
            services
                .chat
                .fetch_thread(donation_id)
                .await
                .map_err(ApiFailure::from)
        },
        Message::ThreadLoaded,
    )
}
