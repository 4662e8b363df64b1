use iced::widget::{Button, Checkbox, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::message_list::format_datetime;
use crate::client::models::app_state::{ChurchAppState, PendingDelete};
use crate::client::models::messages::Message;
use crate::common::models::Announcement;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const SUCCESS: Color = Color::from_rgb(0.2, 0.8, 0.4);
const DANGER: Color = Color::from_rgb(1.0, 0.4, 0.4);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        border: iced::Border {
            radius: 10.0.into(),
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
        },
        ..Default::default()
    }
}

fn form(state: &ChurchAppState) -> Element<'_, Message> {
    let form = &state.announcement_form;
    let heading = if form.editing.is_some() {
        "Modifier l'annonce"
    } else {
        "Nouvelle annonce"
    };

    let mut column = Column::new()
        .spacing(10)
        .push(Text::new(heading).font(BOLD_FONT).size(17).style(TEXT_PRIMARY))
        .push(
            Container::new(
                TextInput::new("Titre", &form.title)
                    .on_input(Message::AnnouncementTitleChanged)
                    .padding(10)
                    .size(13),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .push(
            Container::new(
                TextInput::new("Contenu", &form.content)
                    .on_input(Message::AnnouncementContentChanged)
                    .padding(10)
                    .size(13),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .push(
            Row::new()
                .spacing(16)
                .align_items(Alignment::Center)
                .push(
                    Checkbox::new("Active", form.is_active)
                        .on_toggle(Message::AnnouncementActiveToggled)
                        .size(16)
                        .text_size(13),
                )
                .push(
                    Container::new(
                        TextInput::new("Expire le (AAAA-MM-JJ HH:MM, facultatif)", &form.expiry_input)
                            .on_input(Message::AnnouncementExpiryChanged)
                            .padding(10)
                            .size(13),
                    )
                    .width(Length::Fixed(300.0))
                    .style(iced::theme::Container::Custom(Box::new(input_appearance))),
                ),
        );

    if let Some(error) = &state.announcement_form_error {
        column = column.push(Text::new(error).size(13).style(DANGER));
    }

    let mut buttons = Row::new().spacing(8).push(
        Button::new(Text::new("Enregistrer").font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
            .on_press(Message::SubmitAnnouncement)
            .style(iced::theme::Button::Primary)
            .padding(12),
    );
    if form.editing.is_some() {
        buttons = buttons.push(
            Button::new(Text::new("Annuler la modification").size(13))
                .on_press(Message::ResetAnnouncementForm)
                .style(iced::theme::Button::Secondary)
                .padding(12),
        );
    }
    column = column.push(buttons);

    Container::new(column)
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn announcement_row(announcement: &Announcement) -> Element<'_, Message> {
    let status = if announcement.is_active {
        Text::new("Active").size(12).style(SUCCESS)
    } else {
        Text::new("Inactive").size(12).style(TEXT_SECONDARY)
    };
    let expiry = announcement
        .expires_at
        .map(|t| format!("Expire le {}", format_datetime(&t)))
        .unwrap_or_else(|| "Sans expiration".to_string());

    Container::new(
        Row::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(
                Column::new()
                    .spacing(2)
                    .push(Text::new(&announcement.title).font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
                    .push(Text::new(&announcement.content).size(12).style(TEXT_SECONDARY))
                    .width(Length::Fill),
            )
            .push(status)
            .push(Text::new(expiry).size(11).style(TEXT_SECONDARY))
            .push(
                Button::new(Text::new("Modifier").size(12))
                    .on_press(Message::EditAnnouncement(announcement.id))
                    .style(iced::theme::Button::Secondary)
                    .padding([6, 10]),
            )
            .push(
                Button::new(Text::new("Supprimer").size(12))
                    .on_press(Message::RequestDelete(PendingDelete::Announcement(
                        announcement.id,
                    )))
                    .style(iced::theme::Button::Destructive)
                    .padding([6, 10]),
            ),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

pub fn view(state: &ChurchAppState) -> Element<'_, Message> {
    let mut content = Column::new().spacing(16).padding(24).width(Length::Fill);
    content = content.push(
        Text::new("Gestion des Annonces")
            .font(BOLD_FONT)
            .size(26)
            .style(TEXT_PRIMARY),
    );
    content = content.push(form(state));

    if let Some(PendingDelete::Announcement(_)) = state.pending_delete {
        content = content.push(
            Container::new(
                Row::new()
                    .spacing(12)
                    .align_items(Alignment::Center)
                    .push(Text::new("Supprimer cette annonce ?").size(13).style(TEXT_PRIMARY))
                    .push(Space::new(Length::Fill, Length::Fixed(0.0)))
                    .push(
                        Button::new(Text::new("Supprimer").size(13))
                            .on_press(Message::ConfirmDelete)
                            .style(iced::theme::Button::Destructive)
                            .padding([6, 12]),
                    )
                    .push(
                        Button::new(Text::new("Annuler").size(13))
                            .on_press(Message::CancelDelete)
                            .style(iced::theme::Button::Secondary)
                            .padding([6, 12]),
                    ),
            )
            .padding([10, 16])
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
        );
    }

    let mut list = Column::new().spacing(8);
    if state.announcements_loading {
        list = list.push(Text::new("Chargement…").size(14).style(TEXT_SECONDARY));
    } else if state.announcements.is_empty() {
        list = list.push(Text::new("Aucune annonce").size(14).style(TEXT_SECONDARY));
    } else {
        for announcement in &state.announcements {
            list = list.push(announcement_row(announcement));
        }
    }
    content = content.push(Scrollable::new(list).height(Length::Fill));

    content.into()
}
