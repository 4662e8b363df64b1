// Admin view of every support conversation, grouped by counterpart
use iced::widget::{scrollable, Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::message_list;
use crate::client::models::app_state::ChurchAppState;
use crate::client::models::messages::Message;
use crate::client::services::chat_service::Conversation;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const CHAT_BG: Color = Color::from_rgb(0.08, 0.09, 0.20);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const BADGE: Color = Color::from_rgb(0.9, 0.2, 0.2);
const DONATION_TAG: Color = Color::from_rgb(1.0, 0.8, 0.0);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn sidebar_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn chat_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CHAT_BG)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn item_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn conversation_item<'a>(conversation: &'a Conversation, selected: bool) -> Element<'a, Message> {
    let mut header = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(
            Text::new(conversation.user.display_name())
                .font(BOLD_FONT)
                .size(13)
                .style(TEXT_PRIMARY),
        );
    if conversation.unread > 0 {
        header = header.push(
            Text::new(format!("({})", conversation.unread))
                .size(12)
                .style(BADGE),
        );
    }

    let preview = Column::new()
        .spacing(2)
        .push(header)
        .push(
            Text::new(&conversation.last_message.content)
                .size(11)
                .style(TEXT_SECONDARY),
        );

    let style = if selected {
        iced::theme::Button::Primary
    } else {
        iced::theme::Button::Text
    };

    Container::new(
        Button::new(preview)
            .on_press(Message::SelectConversation(conversation.user.clone()))
            .style(style)
            .width(Length::Fill)
            .padding(10),
    )
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(item_appearance)))
    .into()
}

fn sidebar(state: &ChurchAppState) -> Element<'_, Message> {
    let search = Container::new(
        TextInput::new("Rechercher un membre...", &state.conversation_search)
            .on_input(Message::ConversationSearchChanged)
            .padding(10)
            .size(13),
    )
    .padding(8);

    let mut list = Column::new().spacing(6).padding(8);
    let filtered = state.conversations.search(&state.conversation_search);
    if state.conversations_loading && state.conversations.is_empty() {
        list = list.push(
            Text::new("Chargement des conversations...")
                .size(12)
                .style(TEXT_SECONDARY),
        );
    } else if filtered.is_empty() {
        list = list.push(Text::new("Aucune discussion").size(12).style(TEXT_SECONDARY));
    } else {
        let selected_id = state.selected_conversation.as_ref().map(|u| u.id);
        for conversation in filtered {
            list = list.push(conversation_item(
                conversation,
                selected_id == Some(conversation.user.id),
            ));
        }
    }

    Container::new(
        Column::new()
            .push(search)
            .push(Scrollable::new(list).height(Length::Fill)),
    )
    .width(Length::Fixed(300.0))
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(sidebar_appearance)))
    .into()
}

fn thread_panel(state: &ChurchAppState) -> Element<'_, Message> {
    let Some(selected) = &state.selected_conversation else {
        return Container::new(
            Column::new()
                .spacing(6)
                .align_items(Alignment::Center)
                .push(
                    Text::new("Sélectionnez une conversation")
                        .font(BOLD_FONT)
                        .size(18)
                        .style(TEXT_PRIMARY),
                )
                .push(
                    Text::new("Prêt à aider nos membres ?")
                        .size(13)
                        .style(TEXT_SECONDARY),
                ),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(chat_appearance)))
        .into();
    };

    let mut header_row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Column::new()
                .spacing(1)
                .push(
                    Text::new(selected.display_name())
                        .font(BOLD_FONT)
                        .size(15)
                        .style(TEXT_PRIMARY),
                )
                .push(Text::new(selected.role.label_fr()).size(10).style(TEXT_SECONDARY)),
        )
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));
    if state.conversation_thread.iter().any(|m| m.donation.is_some()) {
        header_row = header_row.push(
            Text::new("Problème de don")
                .size(12)
                .style(DONATION_TAG),
        );
    }
    let header = Container::new(header_row)
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(sidebar_appearance)));

    let me = state.my_id();
    let messages = Scrollable::new(message_list::thread(&state.conversation_thread, me))
        .width(Length::Fill)
        .height(Length::Fill)
        .id(scrollable::Id::new("admin_thread_scroll"));

    let input = TextInput::new("Répondre au membre...", &state.reply_input)
        .on_input(Message::ReplyInputChanged)
        .on_submit(Message::SendReply)
        .padding(10)
        .size(13)
        .width(Length::Fill);
    let mut send = Button::new(Text::new("Répondre").size(13))
        .style(iced::theme::Button::Primary)
        .padding([10, 14]);
    if !state.reply_input.trim().is_empty() {
        send = send.on_press(Message::SendReply);
    }
    let input_bar = Container::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(input)
            .push(send),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(sidebar_appearance)));

    Container::new(
        Column::new()
            .push(header)
            .push(messages)
            .push(input_bar),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(chat_appearance)))
    .into()
}

pub fn view(state: &ChurchAppState) -> Element<'_, Message> {
    Column::new()
        .spacing(12)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Text::new("Messages Support")
                .font(BOLD_FONT)
                .size(26)
                .style(TEXT_PRIMARY),
        )
        .push(
            Row::new()
                .spacing(0)
                .push(sidebar(state))
                .push(thread_panel(state))
                .height(Length::Fill),
        )
        .into()
}
