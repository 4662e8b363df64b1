use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::shell;
use crate::client::models::app_state::{ChurchAppState, Route};
use crate::client::models::messages::Message;
use crate::common::models::Role;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
const ACCENT_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

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
            radius: 16.0.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
        ..Default::default()
    }
}

// Action card: title, detail and one navigation button
fn action_card<'a>(title: &'a str, detail: &'a str, route: Route) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(14)
        .padding(24)
        .push(Text::new(title).font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
        .push(Text::new(detail).size(13).style(Color::from_rgb(0.85, 0.85, 0.85)))
        .push(
            Container::new(
                Button::new(Text::new("Ouvrir").font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
                    .style(iced::theme::Button::Primary)
                    .on_press(Message::Navigate(route))
                    .padding(12),
            )
            .width(Length::Fill)
            .center_x(),
        );

    Container::new(content)
        .width(Length::Fixed(260.0))
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn card_detail(route: Route, role: Role) -> &'static str {
    match route {
        Route::Donations if role == Role::Admin => "Validez et gérez tous les dons de l'église",
        Route::Donations => "Déclarez un don et suivez son statut",
        Route::Live if role == Role::Member => "Rejoignez le culte en direct",
        Route::Live => "Planifiez et lancez vos diffusions",
        Route::Announcements => "Publiez les annonces de la communauté",
        Route::SupportConversations => "Répondez aux membres qui vous écrivent",
        Route::About => "Présentation de l'église et de son visionnaire",
        _ => "",
    }
}

pub fn view(state: &ChurchAppState) -> Element<'_, Message> {
    let Some(user) = state.me() else {
        return Text::new("…").into();
    };

    let mut content = Column::new().spacing(20).padding(24).width(Length::Fill);

    content = content.push(
        Column::new()
            .spacing(4)
            .push(
                Text::new(format!("Bienvenue, {}", user.display_name()))
                    .font(BOLD_FONT)
                    .size(26)
                    .style(TEXT_PRIMARY),
            )
            .push(Text::new(user.role.label_fr()).size(13).style(TEXT_SECONDARY)),
    );

    // global donation figures, pastors and admins only
    if state.is_pastor_or_admin() {
        if let Some(stats) = &state.global_stats {
            content = content.push(
                Container::new(
                    Row::new()
                        .spacing(32)
                        .align_items(Alignment::Center)
                        .push(
                            Column::new()
                                .spacing(2)
                                .push(Text::new("Total des dons validés").size(12).style(TEXT_SECONDARY))
                                .push(
                                    Text::new(format!("{:.2} {}", stats.total_amount, stats.currency))
                                        .font(BOLD_FONT)
                                        .size(28)
                                        .style(ACCENT_COLOR),
                                ),
                        )
                        .push(
                            Column::new()
                                .spacing(2)
                                .push(Text::new("Nombre de dons").size(12).style(TEXT_SECONDARY))
                                .push(
                                    Text::new(stats.total_count.to_string())
                                        .font(BOLD_FONT)
                                        .size(28)
                                        .style(TEXT_PRIMARY),
                                ),
                        ),
                )
                .padding(24)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(card_appearance))),
            );
        }
    }

    let mut cards = Row::new().spacing(16);
    for (label, route) in shell::nav_items(user.role) {
        if route == Route::Dashboard {
            continue;
        }
        cards = cards.push(action_card(label, card_detail(route, user.role), route));
    }
    content = content.push(cards);

    content.into()
}
