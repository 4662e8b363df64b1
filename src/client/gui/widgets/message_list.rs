// Chat bubbles shared by the support widget and the admin conversation view
use chrono::{DateTime, Utc};
use iced::widget::{Column, Container, Space, Text};
use iced::{Color, Element, Length};

use crate::client::models::messages::Message;
use crate::common::models::ChatMessage;

const MY_MESSAGE_BG: Color = Color::from_rgb(0.43, 0.03, 0.10); // bordeaux
const OTHER_MESSAGE_BG: Color = Color::from_rgb(0.2, 0.4, 0.8);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const DONATION_TAG: Color = Color::from_rgb(1.0, 0.8, 0.0);

pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

pub fn format_datetime(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

pub fn bubble(msg: &ChatMessage, is_my_message: bool) -> Element<'_, Message> {
    let bubble_color = if is_my_message {
        MY_MESSAGE_BG
    } else {
        OTHER_MESSAGE_BG
    };

    let mut content = Column::new().spacing(2);
    if let Some(donation_id) = msg.donation {
        content = content.push(
            Text::new(format!("Lien avec Don #{}", donation_id))
                .size(10)
                .style(DONATION_TAG),
        );
    }
    content = content
        .push(Text::new(&msg.content).size(14).style(TEXT_PRIMARY))
        .push(Space::new(Length::Fixed(0.0), Length::Fixed(4.0)))
        .push(
            Text::new(format_time(&msg.timestamp))
                .size(10)
                .style(TEXT_SECONDARY),
        );

    let bubble = Container::new(content)
        .padding([8, 12])
        .style(iced::theme::Container::Custom(Box::new(
            move |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bubble_color)),
                border: iced::Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        )))
        .width(Length::Fixed(280.0));

    let alignment = if is_my_message {
        iced::alignment::Horizontal::Right
    } else {
        iced::alignment::Horizontal::Left
    };

    Container::new(bubble)
        .width(Length::Fill)
        .align_x(alignment)
        .into()
}

/// A full thread as a column of bubbles; `me` decides the side.
pub fn thread(messages: &[ChatMessage], me: i64) -> Column<'_, Message> {
    let mut column = Column::new().spacing(8).padding([12, 16]);
    for msg in messages {
        column = column.push(bubble(msg, msg.sender == me));
    }
    column
}
