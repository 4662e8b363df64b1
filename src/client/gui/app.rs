use std::sync::Arc;
use std::time::Duration;

use iced::{Application, Command, Element, Subscription, Theme};

use crate::client::config::ClientConfig;
use crate::client::gui::views;
use crate::client::gui::views::logger::LogLevel;
use crate::client::models::app_state::{
    self, ChatIntent, ChurchAppState, Route, Session,
};
use crate::client::models::messages::Message;
use crate::client::services::api_client::ApiFailure;
use crate::client::services::chat_service::{reply_linkage, trimmed_content, unread_count_for};
use crate::client::services::live_service::visible_stream;
use crate::client::services::Services;
use crate::client::utils::session_store;
use crate::common::models::MessageType;

pub struct ChurchApp {
    pub state: ChurchAppState,
    pub services: Arc<Services>,
}

impl ChurchApp {
    /// Open the support chat, consuming any pending one-shot intent
    /// (donation binding + prefilled text) exactly once.
    fn open_support_chat(&mut self) -> Command<Message> {
        if let Some(intent) = self.state.chat_intent.take() {
            self.state.chat_donation_id = intent.donation_id;
            if let Some(prefill) = intent.prefill {
                self.state.chat_input = prefill;
            }
        }
        self.state.chat_open = true;
        app_state::fetch_thread(&self.services, self.state.chat_donation_id)
    }
}

impl Application for ChurchApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        let services = Arc::new(Services::from_config(&config));
        let app = ChurchApp {
            state: ChurchAppState::default(),
            services: services.clone(),
        };
        // Startup check: restore and validate a saved session token.
        let command = Command::perform(
            async move {
                if let Some(token) = session_store::load_session_token() {
                    log::info!("[APP_START] jeton de session trouvé, validation…");
                    services.api.set_token(Some(token.clone()));
                    match services.auth.me().await {
                        Ok(user) => Message::SessionRestored { token, user },
                        Err(_) => {
                            services.api.set_token(None);
                            Message::SessionMissing
                        }
                    }
                } else {
                    Message::SessionMissing
                }
            },
            |m| m,
        );
        (app, command)
    }

    fn title(&self) -> String {
        "Église CFC".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::NoOp => Command::none(),

            // ---- session ----
            Message::SessionRestored { token, user } => {
                let name = user.display_name();
                self.state.session = Some(Session { token, user });
                self.state
                    .push_log(LogLevel::Success, format!("Bon retour, {} !", name));
                Command::batch(vec![
                    self.state.navigate(&self.services, Route::Dashboard),
                    app_state::fetch_unread(&self.services),
                    app_state::fetch_active(&self.services),
                ])
            }
            Message::SessionMissing => {
                self.state.route = Route::Login;
                Command::none()
            }
            Message::UsernameChanged(value) => {
                self.state.username_input = value;
                Command::none()
            }
            Message::PasswordChanged(value) => {
                self.state.password_input = value;
                Command::none()
            }
            Message::ToggleShowPassword => {
                self.state.show_password = !self.state.show_password;
                Command::none()
            }
            Message::SubmitLogin => {
                let username = self.state.username_input.clone();
                let password = self.state.password_input.clone();
                self.state.logging_in = true;
                self.state.login_error = None;
                self.state.push_log(LogLevel::Info, "Connexion au serveur…");
                let services = self.services.clone();
                Command::perform(
                    async move {
                        services
                            .auth
                            .login(&username, &password)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::LoginResult,
                )
            }
            Message::LoginResult(Ok(response)) => {
                self.state.logging_in = false;
                if let Err(e) = session_store::save_session_token(&response.access) {
                    // non-fatal: the session just won't survive a restart
                    log::warn!("[SESSION] jeton non persisté: {}", e);
                }
                let name = response.user.display_name();
                self.state.session = Some(Session {
                    token: response.access,
                    user: response.user,
                });
                self.state.username_input.clear();
                self.state.password_input.clear();
                self.state.logger.clear();
                self.state
                    .push_log(LogLevel::Success, format!("Connecté en tant que {}", name));
                Command::batch(vec![
                    self.state.navigate(&self.services, Route::Dashboard),
                    app_state::fetch_unread(&self.services),
                    app_state::fetch_active(&self.services),
                ])
            }
            Message::LoginResult(Err(failure)) => {
                self.state.logging_in = false;
                // a 401 here is just bad credentials, not an expired session
                self.state.login_error = Some(if failure.unauthorized {
                    "Identifiants invalides".to_string()
                } else {
                    failure.message
                });
                Command::none()
            }
            Message::Logout => {
                self.services.api.set_token(None);
                if let Err(e) = session_store::clear_session_token() {
                    log::warn!("[SESSION] impossible d'effacer le jeton: {}", e);
                }
                self.state = ChurchAppState {
                    route: Route::Login,
                    ..ChurchAppState::default()
                };
                Command::none()
            }

            // ---- background polls ----
            Message::UnreadPollTick => {
                if self.state.session.is_some() {
                    app_state::fetch_unread(&self.services)
                } else {
                    Command::none()
                }
            }
            Message::UnreadLoaded(Ok(batch)) => {
                // a completion may land after logout; drop it then
                if self.state.session.is_some() {
                    self.state.unread_count = unread_count_for(self.state.my_id(), &batch);
                }
                Command::none()
            }
            Message::UnreadLoaded(Err(failure)) => {
                self.state.fail_silent(&self.services, "SUPPORT_CHAT", failure);
                Command::none()
            }
            Message::LivePollTick => {
                if self.state.session.is_some() {
                    app_state::fetch_active(&self.services)
                } else {
                    Command::none()
                }
            }
            Message::ActiveLiveLoaded(result) => {
                if self.state.session.is_none() {
                    return Command::none();
                }
                if let Err(failure) = &result {
                    if failure.unauthorized {
                        self.state.force_logout(&self.services);
                        return Command::none();
                    }
                }
                // empty result and poll error render identically: no banner
                self.state.active_live = visible_stream(result);
                Command::none()
            }
            Message::ThreadPollTick => {
                if self.state.session.is_some() && self.state.chat_open {
                    app_state::fetch_thread(&self.services, self.state.chat_donation_id)
                } else {
                    Command::none()
                }
            }
            Message::ThreadLoaded(Ok(thread)) => {
                if self.state.session.is_none() || !self.state.chat_open {
                    return Command::none();
                }
                self.state.chat_thread = thread.clone();
                let me = self.state.my_id();
                let services = self.services.clone();
                Command::perform(
                    async move {
                        services
                            .chat
                            .mark_all_read(&thread, me)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::ThreadMarkedRead,
                )
            }
            Message::ThreadLoaded(Err(failure)) => {
                self.state.fail_silent(&self.services, "SUPPORT_CHAT", failure);
                Command::none()
            }
            Message::ThreadMarkedRead(Ok(marked)) => {
                // badge goes back through the server, never decremented here
                if marked > 0 && self.state.session.is_some() {
                    app_state::fetch_unread(&self.services)
                } else {
                    Command::none()
                }
            }
            Message::ThreadMarkedRead(Err(failure)) => {
                self.state.fail_silent(&self.services, "SUPPORT_CHAT", failure);
                Command::none()
            }
            Message::ConversationsPollTick => {
                if self.state.session.is_some()
                    && self.state.route == Route::SupportConversations
                {
                    app_state::fetch_all_messages(&self.services)
                } else {
                    Command::none()
                }
            }
            Message::ConversationsLoaded(Ok(batch)) => {
                if self.state.session.is_some() {
                    let me = self.state.my_id();
                    self.state.conversations.ingest(me, &batch);
                    self.state.conversations_loading = false;
                }
                Command::none()
            }
            Message::ConversationsLoaded(Err(failure)) => {
                self.state.conversations_loading = false;
                self.state.fail_silent(&self.services, "ADMIN_CHAT", failure);
                Command::none()
            }

            // ---- support chat widget ----
            Message::ToggleSupportChat => {
                if self.state.chat_open {
                    // closing only stops the 10 s thread poll; the badge
                    // poll keeps running
                    self.state.chat_open = false;
                    Command::none()
                } else {
                    self.open_support_chat()
                }
            }
            Message::OpenSupportChatWith(intent) => {
                self.state.chat_intent = Some(intent);
                self.open_support_chat()
            }
            Message::ReportDonationIssue(donation_id) => {
                self.state.chat_intent = Some(ChatIntent {
                    donation_id: Some(donation_id),
                    prefill: Some(format!(
                        "Bonjour, j'ai un problème concernant mon don #{}.",
                        donation_id
                    )),
                });
                self.open_support_chat()
            }
            Message::ChatInputChanged(value) => {
                self.state.chat_input = value;
                Command::none()
            }
            Message::SendChatMessage => {
                // whitespace-only input: nothing leaves the client
                let Some(content) = trimmed_content(&self.state.chat_input) else {
                    return Command::none();
                };
                let linkage = match self.state.chat_donation_id {
                    Some(id) => (MessageType::DonationIssue, Some(id)),
                    None => reply_linkage(&self.state.chat_thread),
                };
                self.state.chat_sending = true;
                self.state.chat_input.clear();
                let receiver = self.services.chat.support_admin_id();
                let services = self.services.clone();
                Command::perform(
                    async move {
                        services
                            .chat
                            .send(receiver, &content, linkage)
                            .await
                            .map_err(ApiFailure::from)
                    },
                    Message::ChatMessageSent,
                )
            }
            Message::ChatMessageSent(Ok(_)) => {
                self.state.chat_sending = false;
                app_state::fetch_thread(&self.services, self.state.chat_donation_id)
            }
            Message::ChatMessageSent(Err(failure)) => {
                self.state.chat_sending = false;
                let wrapped = ApiFailure {
                    unauthorized: failure.unauthorized,
                    message: format!("Erreur lors de l'envoi du message : {}", failure.message),
                };
                self.state.fail_alert(&self.services, "SUPPORT_CHAT", wrapped);
                Command::none()
            }

            other => self.state.update(other, &self.services),
        }
    }

    /// All timers derive from the current state, so logging out or
    /// leaving a screen cancels its polls in one place.
    fn subscription(&self) -> Subscription<Message> {
        let mut subs: Vec<Subscription<Message>> = Vec::new();
        if self.state.session.is_some() {
            subs.push(iced::time::every(Duration::from_secs(15)).map(|_| Message::UnreadPollTick));
            subs.push(iced::time::every(Duration::from_secs(60)).map(|_| Message::LivePollTick));
            if self.state.chat_open {
                subs.push(
                    iced::time::every(Duration::from_secs(10)).map(|_| Message::ThreadPollTick),
                );
            }
            if self.state.route == Route::SupportConversations {
                subs.push(
                    iced::time::every(Duration::from_secs(30))
                        .map(|_| Message::ConversationsPollTick),
                );
            }
        }
        Subscription::batch(subs)
    }

    fn view(&self) -> Element<Message> {
        match self.state.route {
            Route::CheckingSession => {
                iced::widget::Text::new("Vérification de la session…").into()
            }
            Route::Login => views::login::view(&self.state),
            Route::Dashboard => views::shell::wrap(&self.state, views::dashboard::view(&self.state)),
            Route::Donations => views::shell::wrap(&self.state, views::donations::view(&self.state)),
            Route::Live => views::shell::wrap(&self.state, views::live::view(&self.state)),
            Route::Announcements => {
                views::shell::wrap(&self.state, views::announcements::view(&self.state))
            }
            Route::SupportConversations => views::shell::wrap(
                &self.state,
                views::support_conversations::view(&self.state),
            ),
            Route::About => views::shell::wrap(&self.state, views::about_editor::view(&self.state)),
        }
    }
}
