// Red "live in progress" strip. Renders nothing at all when no stream is
// active — a failed poll leaves the exact same absence.
use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Length};

use crate::client::models::messages::Message;
use crate::common::models::LiveStream;

const LIVE_BG: Color = Color::from_rgb(0.86, 0.08, 0.08);

pub fn view(active: Option<&LiveStream>) -> Element<'_, Message> {
    let Some(stream) = active else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let join = Button::new(Text::new("Rejoindre maintenant ›").size(13))
        .on_press(Message::OpenLive)
        .style(iced::theme::Button::Secondary)
        .padding([6, 12]);

    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("● LIVE").size(13).style(Color::WHITE))
            .push(Text::new(&stream.title).size(15).style(Color::WHITE))
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(join),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(LIVE_BG)),
            text_color: Some(Color::WHITE),
            ..Default::default()
        },
    )))
    .into()
}
