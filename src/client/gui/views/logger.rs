use iced::widget::container::Appearance;
use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Success => iced::Color::from_rgb(0.2, 0.8, 0.4),
            LogLevel::Error => iced::Color::from_rgb(1.0, 0.2, 0.2),
            LogLevel::Info => iced::Color::from_rgb(0.2, 0.6, 1.0),
            LogLevel::Warning => iced::Color::from_rgb(1.0, 0.8, 0.0),
        }
    }
}

/// Status bar: only the latest entry shows, as a single dismissible line.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, crate::client::models::messages::Message> {
    if let Some(log) = messages.iter().next_back() {
        let bg_color = log.color();
        Container::new(
            Row::new()
                .spacing(12)
                .align_items(Alignment::Center)
                .push(Text::new(&log.message).size(15).style(iced::Color::WHITE))
                .push(Space::new(Length::Fill, Length::Fixed(0.0)))
                .push(
                    Button::new(Text::new("✕").size(13))
                        .on_press(crate::client::models::messages::Message::ClearLog)
                        .style(iced::theme::Button::Text)
                        .padding([2, 8]),
                ),
        )
        .padding([8, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(iced::Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })))
        .into()
    } else {
        // Empty placeholder
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}
