// Rotating announcement strip, shown to members only
use chrono::Utc;
use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Length};

use crate::client::models::messages::Message;
use crate::client::services::announcement_service::active_announcements;
use crate::common::models::Announcement;

const BANNER_BG: Color = Color::from_rgb(0.15, 0.25, 0.65);

pub fn view(announcements: &[Announcement], current_index: usize) -> Element<'_, Message> {
    let visible = active_announcements(announcements, Utc::now());
    if visible.is_empty() {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    }
    let index = current_index % visible.len();
    let current = visible[index];

    let mut row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new("Annonce").size(12).style(Color::WHITE))
        .push(
            Text::new(format!("{} : {}", current.title, current.content))
                .size(14)
                .style(Color::WHITE),
        )
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));

    if visible.len() > 1 {
        row = row.push(
            Text::new(format!("{} / {}", index + 1, visible.len()))
                .size(12)
                .style(Color::from_rgb(0.8, 0.85, 1.0)),
        );
        row = row.push(
            Button::new(Text::new("›").size(16))
                .on_press(Message::NextAnnouncement)
                .style(iced::theme::Button::Text)
                .padding([2, 8]),
        );
    }

    Container::new(row)
        .padding([8, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(BANNER_BG)),
                text_color: Some(Color::WHITE),
                ..Default::default()
            },
        )))
        .into()
}
