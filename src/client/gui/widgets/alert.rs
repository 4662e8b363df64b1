// Blocking alert bar shown above the page content until dismissed
use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Length};

use crate::client::models::messages::Message;

const ALERT_BG: Color = Color::from_rgb(0.75, 0.15, 0.15);

pub fn view(message: &str) -> Element<'_, Message> {
    let dismiss = Button::new(Text::new("Fermer").size(13))
        .on_press(Message::DismissAlert)
        .style(iced::theme::Button::Secondary)
        .padding([6, 10]);

    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("⚠").size(18).style(Color::WHITE))
            .push(Text::new(message).size(15).style(Color::WHITE))
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(dismiss),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(ALERT_BG)),
            text_color: Some(Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    )))
    .into()
}
