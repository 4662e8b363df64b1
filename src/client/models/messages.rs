use crate::client::models::app_state::{AboutTab, ChatIntent, PendingDelete, Route};
use crate::client::services::api_client::ApiFailure;
use crate::client::services::auth_service::LoginResponse;
use crate::client::services::donation_service::{Choice, StatusFilter};
use crate::common::models::{
    AboutSection, Announcement, ChatMessage, Donation, DonationStatus, GlobalDonationStats,
    LiveStream, SectionType, User, Visionary,
};

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    // Session lifecycle
    SessionRestored { token: String, user: User },
    SessionMissing,
    UsernameChanged(String),
    PasswordChanged(String),
    ToggleShowPassword,
    SubmitLogin,
    LoginResult(Result<LoginResponse, ApiFailure>),
    Logout,
    // Navigation
    Navigate(Route),
    OpenLive,
    // Alerts / status bar
    DismissAlert,
    ClearLog,
    // Background polls (ticks come from the subscription, results from
    // the spawned fetches)
    UnreadPollTick,
    UnreadLoaded(Result<Vec<ChatMessage>, ApiFailure>),
    LivePollTick,
    ActiveLiveLoaded(Result<Option<LiveStream>, ApiFailure>),
    ThreadPollTick,
    ThreadLoaded(Result<Vec<ChatMessage>, ApiFailure>),
    ThreadMarkedRead(Result<usize, ApiFailure>),
    ConversationsPollTick,
    ConversationsLoaded(Result<Vec<ChatMessage>, ApiFailure>),
    // Support chat widget
    ToggleSupportChat,
    OpenSupportChatWith(ChatIntent),
    ChatInputChanged(String),
    SendChatMessage,
    ChatMessageSent(Result<ChatMessage, ApiFailure>),
    // Admin conversations
    ConversationSearchChanged(String),
    SelectConversation(User),
    ConversationThreadLoaded(Result<Vec<ChatMessage>, ApiFailure>),
    ReplyInputChanged(String),
    SendReply,
    ReplySent(Result<ChatMessage, ApiFailure>),
    // Donations
    DonationsLoaded(Result<Vec<Donation>, ApiFailure>),
    GlobalStatsLoaded(Result<GlobalDonationStats, ApiFailure>),
    DonationFilterChanged(StatusFilter),
    DonationSearchChanged(String),
    DeclareAmountChanged(String),
    DeclareProjectSelected(Choice),
    DeclareMethodSelected(Choice),
    DeclareNotesChanged(String),
    SubmitDeclaration,
    DonationDeclared(Result<String, ApiFailure>),
    DismissDeclareResult,
    UpdateDonationStatus { id: i64, status: DonationStatus },
    DonationStatusUpdated(Result<Donation, ApiFailure>),
    ReportDonationIssue(i64),
    // Live management
    LiveStreamsLoaded(Result<Vec<LiveStream>, ApiFailure>),
    LiveTitleChanged(String),
    LiveDescriptionChanged(String),
    LiveScheduleChanged(String),
    SubmitLiveSchedule,
    LiveStreamSaved(Result<LiveStream, ApiFailure>),
    StartLiveStream(i64),
    StopLiveStream(i64),
    LiveActionDone(Result<LiveStream, ApiFailure>),
    // Announcements
    AnnouncementsLoaded(Result<Vec<Announcement>, ApiFailure>),
    NextAnnouncement,
    AnnouncementTitleChanged(String),
    AnnouncementContentChanged(String),
    AnnouncementActiveToggled(bool),
    AnnouncementExpiryChanged(String),
    EditAnnouncement(i64),
    ResetAnnouncementForm,
    SubmitAnnouncement,
    AnnouncementSaved(Result<Announcement, ApiFailure>),
    // About content
    AboutDataLoaded(Result<(Option<Visionary>, Vec<AboutSection>), ApiFailure>),
    AboutTabSelected(AboutTab),
    VisionaryNameChanged(String),
    VisionaryTitleChanged(String),
    VisionaryBiographyChanged(String),
    VisionaryHistoryChanged(String),
    VisionaryPhotoPathChanged(String),
    SubmitVisionary,
    VisionarySaved(Result<Visionary, ApiFailure>),
    SectionTypeSelected(SectionType),
    SectionTitleChanged(String),
    SectionContentChanged(String),
    SectionImagePathChanged(String),
    EditSection(i64),
    ResetSectionForm,
    SubmitSection,
    SectionSaved(Result<AboutSection, ApiFailure>),
    // Deletions, always behind an explicit confirmation
    RequestDelete(PendingDelete),
    CancelDelete,
    ConfirmDelete,
    DeleteDone(Result<PendingDelete, ApiFailure>),
}
