pub mod alert;
pub mod announcement_banner;
pub mod live_banner;
pub mod message_list;
pub mod support_chat;
