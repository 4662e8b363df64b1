use iced::widget::{Button, Column, Container, PickList, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::message_list::format_datetime;
use crate::client::models::app_state::{ChurchAppState, PendingDelete};
use crate::client::models::messages::Message;
use crate::client::services::donation_service::{
    counters_for, filter_donations, project_label, StatusFilter, PAYMENT_METHODS, PROJECTS,
};
use crate::common::models::{Donation, DonationStatus};

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const SUCCESS: Color = Color::from_rgb(0.2, 0.8, 0.4);
const WARNING: Color = Color::from_rgb(1.0, 0.8, 0.0);
const DANGER: Color = Color::from_rgb(1.0, 0.3, 0.3);
const MUTED: Color = Color::from_rgb(0.5, 0.5, 0.6);

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

fn status_color(status: DonationStatus) -> Color {
    match status {
        DonationStatus::Completed => SUCCESS,
        DonationStatus::Pending => WARNING,
        DonationStatus::Failed => DANGER,
        DonationStatus::Cancelled => MUTED,
    }
}

fn stat_card<'a>(label: &'a str, value: String, color: Color) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(4)
            .push(Text::new(label).size(12).style(TEXT_SECONDARY))
            .push(Text::new(value).font(BOLD_FONT).size(24).style(color)),
    )
    .padding(16)
    .width(Length::Fixed(190.0))
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

fn filter_bar(state: &ChurchAppState) -> Element<'_, Message> {
    let mut buttons = Row::new().spacing(8);
    for filter in StatusFilter::CHOICES {
        let style = if state.donation_filter == filter {
            iced::theme::Button::Primary
        } else {
            iced::theme::Button::Secondary
        };
        buttons = buttons.push(
            Button::new(Text::new(filter.label_fr()).size(13))
                .on_press(Message::DonationFilterChanged(filter))
                .style(style)
                .padding([8, 12]),
        );
    }

    Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Container::new(
                TextInput::new("Rechercher par nom, email, montant...", &state.donation_search)
                    .on_input(Message::DonationSearchChanged)
                    .padding(10)
                    .size(13),
            )
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .push(buttons)
        .into()
}

fn declare_form(state: &ChurchAppState) -> Element<'_, Message> {
    if let Some(whatsapp_url) = &state.declare_success {
        return Container::new(
            Column::new()
                .spacing(10)
                .push(
                    Text::new("Don déclaré avec succès !")
                        .font(BOLD_FONT)
                        .size(18)
                        .style(SUCCESS),
                )
                .push(
                    Text::new("Votre don est enregistré en attente de validation. Ouvrez ce lien WhatsApp pour finaliser :")
                        .size(13)
                        .style(TEXT_PRIMARY),
                )
                .push(Text::new(whatsapp_url.as_str()).size(12).style(WARNING))
                .push(
                    Button::new(Text::new("Fermer").size(13))
                        .on_press(Message::DismissDeclareResult)
                        .style(iced::theme::Button::Secondary)
                        .padding([6, 12]),
                ),
        )
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into();
    }

    let form = &state.declare_form;
    let mut column = Column::new()
        .spacing(12)
        .push(Text::new("Déclarer un don").font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
        .push(
            Container::new(
                TextInput::new("Montant (EUR)", &form.amount_input)
                    .on_input(Message::DeclareAmountChanged)
                    .padding(10)
                    .size(13),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .push(
            Row::new()
                .spacing(12)
                .push(
                    Column::new()
                        .spacing(4)
                        .push(Text::new("Projet").size(12).style(TEXT_SECONDARY))
                        .push(PickList::new(
                            &PROJECTS[..],
                            Some(form.project),
                            Message::DeclareProjectSelected,
                        )),
                )
                .push(
                    Column::new()
                        .spacing(4)
                        .push(Text::new("Méthode de paiement").size(12).style(TEXT_SECONDARY))
                        .push(PickList::new(
                            &PAYMENT_METHODS[..],
                            Some(form.payment_method),
                            Message::DeclareMethodSelected,
                        )),
                ),
        )
        .push(
            Container::new(
                TextInput::new("Remarques (facultatif)", &form.notes)
                    .on_input(Message::DeclareNotesChanged)
                    .padding(10)
                    .size(13),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    if let Some(error) = &state.declare_error {
        column = column.push(Text::new(error).size(13).style(DANGER));
    }

    let submit_label = if state.declaring { "Envoi…" } else { "Déclarer le don" };
    let mut submit = Button::new(Text::new(submit_label).font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
        .style(iced::theme::Button::Primary)
        .padding(12);
    if !state.declaring {
        submit = submit.on_press(Message::SubmitDeclaration);
    }
    column = column.push(submit);

    Container::new(column)
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn donation_row<'a>(state: &'a ChurchAppState, donation: &'a Donation) -> Element<'a, Message> {
    let donor = donation
        .user
        .as_ref()
        .map(|u| {
            if donation.is_anonymous {
                "Anonyme".to_string()
            } else {
                u.display_name()
            }
        })
        .unwrap_or_else(|| "Anonyme".to_string());

    let mut row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(Text::new(donor).size(13).style(TEXT_PRIMARY).width(Length::Fixed(160.0)))
        .push(
            Text::new(format_datetime(&donation.created_at))
                .size(12)
                .style(TEXT_SECONDARY)
                .width(Length::Fixed(130.0)),
        )
        .push(
            Text::new(format!("{:.2} {}", donation.amount, donation.currency))
                .font(BOLD_FONT)
                .size(14)
                .style(TEXT_PRIMARY)
                .width(Length::Fixed(110.0)),
        )
        .push(
            Text::new(project_label(&donation.project))
                .size(12)
                .style(TEXT_SECONDARY)
                .width(Length::Fixed(110.0)),
        )
        .push(
            Text::new(donation.status.label_fr())
                .size(12)
                .style(status_color(donation.status))
                .width(Length::Fixed(90.0)),
        )
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));

    if state.is_admin() {
        if donation.status == DonationStatus::Pending {
            row = row.push(
                Button::new(Text::new("Valider").size(12))
                    .on_press(Message::UpdateDonationStatus {
                        id: donation.id,
                        status: DonationStatus::Completed,
                    })
                    .style(iced::theme::Button::Positive)
                    .padding([6, 10]),
            );
            row = row.push(
                Button::new(Text::new("Annuler").size(12))
                    .on_press(Message::UpdateDonationStatus {
                        id: donation.id,
                        status: DonationStatus::Cancelled,
                    })
                    .style(iced::theme::Button::Secondary)
                    .padding([6, 10]),
            );
        }
        row = row.push(
            Button::new(Text::new("Supprimer").size(12))
                .on_press(Message::RequestDelete(PendingDelete::Donation(donation.id)))
                .style(iced::theme::Button::Destructive)
                .padding([6, 10]),
        );
    } else {
        row = row.push(
            Button::new(Text::new("Signaler un problème").size(12))
                .on_press(Message::ReportDonationIssue(donation.id))
                .style(iced::theme::Button::Secondary)
                .padding([6, 10]),
        );
    }

    Container::new(row)
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn confirm_delete_bar(state: &ChurchAppState) -> Option<Element<'_, Message>> {
    match state.pending_delete {
        Some(PendingDelete::Donation(id)) => Some(
            Container::new(
                Row::new()
                    .spacing(12)
                    .align_items(Alignment::Center)
                    .push(
                        Text::new(format!(
                            "Êtes-vous sûr de vouloir supprimer le don #{} ? Cette action est irréversible.",
                            id
                        ))
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
    let is_admin = state.is_admin();
    let title = if is_admin {
        "Gestion des Dons"
    } else {
        "Mes Dons"
    };

    let mut content = Column::new().spacing(16).padding(24).width(Length::Fill);
    content = content.push(Text::new(title).font(BOLD_FONT).size(26).style(TEXT_PRIMARY));

    // header figures, recomputed from the in-memory collection
    let counters = counters_for(&state.donations);
    let mut stats_row = Row::new()
        .spacing(12)
        .push(stat_card("Total Dons", counters.total.to_string(), TEXT_PRIMARY))
        .push(stat_card("En Attente", counters.pending.to_string(), WARNING))
        .push(stat_card("Validés", counters.completed.to_string(), SUCCESS))
        .push(stat_card(
            "Montant Validé",
            format!("{:.2} EUR", counters.total_amount),
            SUCCESS,
        ));
    if let Some(global) = state.global_stats.as_ref().filter(|_| state.is_pastor_or_admin()) {
        stats_row = stats_row.push(stat_card(
            "Total Église",
            format!("{:.2} {}", global.total_amount, global.currency),
            TEXT_PRIMARY,
        ));
    }
    content = content.push(stats_row);

    if !is_admin {
        content = content.push(declare_form(state));
    }

    content = content.push(filter_bar(state));
    if let Some(bar) = confirm_delete_bar(state) {
        content = content.push(bar);
    }

    let filtered = filter_donations(&state.donations, state.donation_filter, &state.donation_search);
    let mut list = Column::new().spacing(8);
    if state.donations_loading {
        list = list.push(Text::new("Chargement des dons…").size(14).style(TEXT_SECONDARY));
    } else if filtered.is_empty() {
        list = list.push(Text::new("Aucun don trouvé").size(14).style(TEXT_SECONDARY));
    } else {
        for donation in filtered {
            list = list.push(donation_row(state, donation));
        }
    }
    content = content.push(Scrollable::new(list).height(Length::Fill));

    content.into()
}
