pub mod about_editor;
pub mod announcements;
pub mod dashboard;
pub mod donations;
pub mod live;
pub mod logger;
pub mod login;
pub mod shell;
pub mod support_conversations;
