// Role-scoped layout shell: banner stack, header with navigation badge,
// page content, and the support chat panel while it is open.
use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::gui::widgets::{alert, announcement_banner, live_banner, support_chat};
use crate::client::models::app_state::{ChurchAppState, Route};
use crate::client::models::messages::Message;
use crate::common::models::Role;

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const HEADER_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const BADGE: Color = Color::from_rgb(0.9, 0.2, 0.2);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn header_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(HEADER_BG)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Navigation entries visible to a role. The routes themselves re-check
/// nothing: the backend is the authority, this only scopes the menu.
pub fn nav_items(role: Role) -> Vec<(&'static str, Route)> {
    match role {
        Role::Admin => vec![
            ("Tableau de Bord", Route::Dashboard),
            ("Annonces", Route::Announcements),
            ("Direct Vidéo", Route::Live),
            ("Messages Support", Route::SupportConversations),
            ("Dons", Route::Donations),
            ("À propos", Route::About),
        ],
        Role::Pastor => vec![
            ("Tableau de Bord", Route::Dashboard),
            ("Direct Vidéo", Route::Live),
            ("Dons", Route::Donations),
        ],
        Role::Member => vec![
            ("Accueil", Route::Dashboard),
            ("Dons", Route::Donations),
            ("Direct", Route::Live),
            ("À propos", Route::About),
        ],
    }
}

pub fn wrap<'a>(state: &'a ChurchAppState, content: Element<'a, Message>) -> Element<'a, Message> {
    let Some(user) = state.me() else {
        // no session: show the bare content (the login view handles this)
        return content;
    };

    // navigation row
    let mut nav = Row::new().spacing(8).align_items(Alignment::Center);
    for (label, route) in nav_items(user.role) {
        let active = state.route == route;
        let style = if active {
            iced::theme::Button::Primary
        } else {
            iced::theme::Button::Text
        };
        nav = nav.push(
            Button::new(Text::new(label).size(13))
                .on_press(Message::Navigate(route))
                .style(style)
                .padding([6, 10]),
        );
    }

    // support chat toggle with unread badge
    let chat_label = if state.unread_count > 0 {
        format!("💬 Support ({})", state.unread_count)
    } else {
        "💬 Support".to_string()
    };
    let chat_btn = Button::new(
        Text::new(chat_label)
            .size(13)
            .style(if state.unread_count > 0 { BADGE } else { TEXT_PRIMARY }),
    )
    .on_press(Message::ToggleSupportChat)
    .style(iced::theme::Button::Secondary)
    .padding([6, 10]);

    let logout_btn = Button::new(Text::new("Déconnexion").size(13))
        .on_press(Message::Logout)
        .style(iced::theme::Button::Destructive)
        .padding([6, 10]);

    let header = Container::new(
        Row::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(Text::new("Église CFC").font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
            .push(nav)
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(
                Column::new()
                    .push(Text::new(user.display_name()).size(13).style(TEXT_PRIMARY))
                    .push(Text::new(user.role.label_fr()).size(10).style(TEXT_SECONDARY))
                    .spacing(1),
            )
            .push(chat_btn)
            .push(logout_btn),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(header_appearance)));

    let mut page = Column::new().width(Length::Fill).height(Length::Fill);
    page = page.push(live_banner::view(state.active_live.as_ref()));
    if user.role == Role::Member {
        page = page.push(announcement_banner::view(
            &state.announcements,
            state.announcement_index,
        ));
    }
    page = page.push(header);
    if let Some(alert_text) = &state.alert {
        page = page.push(alert::view(alert_text));
    }
    page = page.push(logger_view(&state.logger));

    if state.chat_open {
        // content on the left, chat panel docked on the right
        page = page.push(
            Row::new()
                .push(Container::new(content).width(Length::Fill).height(Length::Fill))
                .push(
                    Container::new(support_chat::view(state))
                        .width(Length::Fixed(360.0))
                        .padding(8),
                ),
        );
    } else {
        page = page.push(content);
    }

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
