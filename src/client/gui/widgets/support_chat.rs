// Support chat panel, hosted by the layout shell while open
use iced::widget::{scrollable, Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::ChurchAppState;
use crate::client::models::messages::Message;
use crate::client::gui::widgets::message_list;

const CHAT_BG: Color = Color::from_rgb(0.08, 0.09, 0.20);
const HEADER_BG: Color = Color::from_rgb(0.43, 0.03, 0.10); // bordeaux
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn view(state: &ChurchAppState) -> Element<'_, Message> {
    let subtitle = match state.chat_donation_id {
        Some(id) => format!("Problème de don #{}", id),
        None => "En ligne pour vous aider".to_string(),
    };
    let close_btn = Button::new(Text::new("✕").size(14))
        .on_press(Message::ToggleSupportChat)
        .style(iced::theme::Button::Text)
        .padding(6);

    let header = Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(
                Column::new()
                    .push(Text::new("Support Admin").font(BOLD_FONT).size(16).style(TEXT_PRIMARY))
                    .push(Text::new(subtitle).size(11).style(Color::from_rgb(0.9, 0.8, 0.8)))
                    .spacing(2),
            )
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(close_btn),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(HEADER_BG)),
            text_color: Some(TEXT_PRIMARY),
            ..Default::default()
        },
    )));

    let me = state.my_id();
    let mut messages_column = message_list::thread(&state.chat_thread, me);
    if state.chat_thread.is_empty() {
        messages_column = messages_column.push(
            Container::new(
                Text::new("Pas de messages encore. Comment pouvons-nous vous aider ?")
                    .size(13)
                    .style(TEXT_SECONDARY),
            )
            .width(Length::Fill)
            .center_x()
            .padding(20),
        );
    }
    let messages_area = Container::new(
        Scrollable::new(messages_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .id(scrollable::Id::new("support_chat_scroll")),
    )
    .width(Length::Fill)
    .height(Length::Fixed(280.0))
    .style(iced::theme::Container::Custom(Box::new(
        |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(CHAT_BG)),
            ..Default::default()
        },
    )));

    let input = TextInput::new("Écrivez votre message...", &state.chat_input)
        .on_input(Message::ChatInputChanged)
        .on_submit(Message::SendChatMessage)
        .padding(10)
        .size(14)
        .width(Length::Fill);

    let send_label = if state.chat_sending { "Envoi…" } else { "Envoyer" };
    let mut send_btn = Button::new(Text::new(send_label).size(14))
        .style(iced::theme::Button::Primary)
        .padding([10, 14]);
    // disabled while a send is in flight or nothing would be sent
    if !state.chat_sending && !state.chat_input.trim().is_empty() {
        send_btn = send_btn.on_press(Message::SendChatMessage);
    }

    let input_area = Container::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(input)
            .push(send_btn),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(INPUT_BG)),
            ..Default::default()
        },
    )));

    Container::new(
        Column::new()
            .push(header)
            .push(messages_area)
            .push(input_area),
    )
    .width(Length::Fill)
    .into()
}
