use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::message_list::format_datetime;
use crate::client::models::app_state::{ChurchAppState, PendingDelete};
use crate::client::models::messages::Message;
use crate::common::models::{LiveStream, StreamStatus};

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const PLAYER_BG: Color = Color::from_rgb(0.02, 0.02, 0.05);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const LIVE_RED: Color = Color::from_rgb(0.9, 0.15, 0.15);
const WARNING: Color = Color::from_rgb(1.0, 0.8, 0.0);

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

fn player_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(PLAYER_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            radius: 16.0.into(),
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

fn status_color(status: StreamStatus) -> Color {
    match status {
        StreamStatus::Live => LIVE_RED,
        StreamStatus::Planned => WARNING,
        StreamStatus::Ended => TEXT_SECONDARY,
    }
}

/// Playback surface. Video rendering itself is delegated to an external
/// player; the playback URL and metadata are what we can surface here.
fn player(active: &LiveStream) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("● EN DIRECT").font(BOLD_FONT).size(16).style(LIVE_RED))
            .push(Text::new(&active.title).font(BOLD_FONT).size(24).style(TEXT_PRIMARY))
            .push(
                Text::new(if active.description.is_empty() {
                    "Pas de description fournie."
                } else {
                    active.description.as_str()
                })
                .size(13)
                .style(TEXT_SECONDARY),
            )
            .push(Space::new(Length::Fill, Length::Fixed(12.0)))
            .push(Text::new("Lecture (HLS) :").size(12).style(TEXT_SECONDARY))
            .push(Text::new(&active.playback_url).size(12).style(WARNING))
            .push(
                Text::new("Ouvrez cette URL dans votre lecteur vidéo (VLC, mpv…).")
                    .size(11)
                    .style(TEXT_SECONDARY),
            ),
    )
    .padding(40)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(player_appearance)))
    .into()
}

fn empty_player() -> Element<'static, Message> {
    Container::new(
        Column::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("Aucun signal détecté").font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
            .push(
                Text::new(
                    "Le pasteur n'a pas encore lancé la diffusion. Si vous êtes le pasteur, \
                     démarrez votre logiciel (ex. OBS) puis cliquez sur « Lancer le Direct ».",
                )
                .size(13)
                .style(TEXT_SECONDARY),
            ),
    )
    .padding(48)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

fn schedule_form(state: &ChurchAppState) -> Element<'_, Message> {
    let form = &state.live_form;
    let mut column = Column::new()
        .spacing(10)
        .push(Text::new("Planifier un direct").font(BOLD_FONT).size(17).style(TEXT_PRIMARY))
        .push(
            Container::new(
                TextInput::new("Titre", &form.title)
                    .on_input(Message::LiveTitleChanged)
                    .padding(10)
                    .size(13),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .push(
            Container::new(
                TextInput::new("Description", &form.description)
                    .on_input(Message::LiveDescriptionChanged)
                    .padding(10)
                    .size(13),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .push(
            Container::new(
                TextInput::new("Début prévu (AAAA-MM-JJ HH:MM, facultatif)", &form.schedule_input)
                    .on_input(Message::LiveScheduleChanged)
                    .padding(10)
                    .size(13),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    if let Some(error) = &state.live_form_error {
        column = column.push(Text::new(error).size(13).style(Color::from_rgb(1.0, 0.4, 0.4)));
    }
    column = column.push(
        Button::new(Text::new("Planifier").font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
            .on_press(Message::SubmitLiveSchedule)
            .style(iced::theme::Button::Primary)
            .padding(12),
    );

    Container::new(column)
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn stream_row(stream: &LiveStream) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(
            Column::new()
                .spacing(2)
                .push(Text::new(&stream.title).font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
                .push(
                    Text::new(
                        stream
                            .scheduled_start
                            .map(|t| format!("Prévu le {}", format_datetime(&t)))
                            .unwrap_or_else(|| "Sans horaire".to_string()),
                    )
                    .size(11)
                    .style(TEXT_SECONDARY),
                )
                .width(Length::Fixed(260.0)),
        )
        .push(
            Text::new(stream.status.label_fr())
                .size(12)
                .style(status_color(stream.status))
                .width(Length::Fixed(90.0)),
        );

    if stream.status == StreamStatus::Live {
        row = row.push(
            Column::new()
                .spacing(2)
                .push(Text::new(format!("RTMP : {}", stream.ingest_endpoint)).size(11).style(TEXT_SECONDARY))
                .push(Text::new(format!("Clé : {}", stream.stream_key)).size(11).style(TEXT_SECONDARY)),
        );
    }
    row = row.push(Space::new(Length::Fill, Length::Fixed(0.0)));

    match stream.status {
        StreamStatus::Planned => {
            row = row.push(
                Button::new(Text::new("Lancer le Direct").size(12))
                    .on_press(Message::StartLiveStream(stream.id))
                    .style(iced::theme::Button::Positive)
                    .padding([6, 10]),
            );
        }
        StreamStatus::Live => {
            row = row.push(
                Button::new(Text::new("Arrêter").size(12))
                    .on_press(Message::StopLiveStream(stream.id))
                    .style(iced::theme::Button::Destructive)
                    .padding([6, 10]),
            );
        }
        StreamStatus::Ended => {}
    }
    row = row.push(
        Button::new(Text::new("Supprimer").size(12))
            .on_press(Message::RequestDelete(PendingDelete::Stream(stream.id)))
            .style(iced::theme::Button::Destructive)
            .padding([6, 10]),
    );

    Container::new(row)
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn confirm_delete_bar(state: &ChurchAppState) -> Option<Element<'_, Message>> {
    match state.pending_delete {
        Some(PendingDelete::Stream(_)) => Some(
            Container::new(
                Row::new()
                    .spacing(12)
                    .align_items(Alignment::Center)
                    .push(
                        Text::new("Supprimer cette planification de direct ?")
                            .size(13)
                            .style(TEXT_PRIMARY),
                    )
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
            .style(iced::theme::Container::Custom(Box::new(card_appearance)))
            .into(),
        ),
        _ => None,
    }
}

pub fn view(state: &ChurchAppState) -> Element<'_, Message> {
    let mut content = Column::new().spacing(16).padding(24).width(Length::Fill);
    content = content.push(Text::new("Direct Vidéo").font(BOLD_FONT).size(26).style(TEXT_PRIMARY));

    match &state.active_live {
        Some(active) => content = content.push(player(active)),
        None => content = content.push(empty_player()),
    }

    // management surface: schedule + lifecycle, pastors and admins only
    if state.is_pastor_or_admin() {
        content = content.push(schedule_form(state));
        if let Some(bar) = confirm_delete_bar(state) {
            content = content.push(bar);
        }

        let mut list = Column::new().spacing(8);
        if state.live_loading {
            list = list.push(Text::new("Chargement…").size(14).style(TEXT_SECONDARY));
        } else if state.live_streams.is_empty() {
            list = list.push(
                Text::new("Aucune diffusion planifiée")
                    .size(14)
                    .style(TEXT_SECONDARY),
            );
        } else {
            for stream in &state.live_streams {
                list = list.push(stream_row(stream));
            }
        }
        content = content.push(
            Text::new("Planifications")
                .font(BOLD_FONT)
                .size(17)
                .style(TEXT_PRIMARY),
        );
        content = content.push(Scrollable::new(list).height(Length::Fill));
        content.into()
    } else {
        let hint = Container::new(
            Text::new(
                "Vous pouvez interagir avec l'admin via le chat de support en haut à droite de votre écran.",
            )
            .size(12)
            .style(TEXT_SECONDARY),
        )
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));
        content = content.push(hint);
        content.into()
    }
}
