use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::ChurchAppState;
use crate::client::models::messages::Message;

// Consistent color palette with the rest of the views
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

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

pub fn view(state: &ChurchAppState) -> Element<'_, Message> {
    let title = Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(Text::new("Église CFC").font(BOLD_FONT).size(32).style(TEXT_PRIMARY))
        .push(
            Text::new("Connectez-vous pour accéder à votre espace")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let username_input = Container::new(
        TextInput::new("Nom d'utilisateur", &state.username_input)
            .on_input(Message::UsernameChanged)
            .padding(12)
            .size(14),
    )
    .style(iced::theme::Container::Custom(Box::new(input_appearance)));

    let mut password_field = TextInput::new("Mot de passe", &state.password_input)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::SubmitLogin)
        .padding(12)
        .size(14);
    if !state.show_password {
        password_field = password_field.secure(true);
    }
    let password_input = Container::new(
        Row::new()
            .align_items(Alignment::Center)
            .push(password_field)
            .push(
                Button::new(Text::new(if state.show_password { "Masquer" } else { "Afficher" }).size(12))
                    .on_press(Message::ToggleShowPassword)
                    .style(iced::theme::Button::Text)
                    .padding([8, 12]),
            ),
    )
    .style(iced::theme::Container::Custom(Box::new(input_appearance)));

    let submit_enabled =
        !state.logging_in && !state.username_input.trim().is_empty() && !state.password_input.is_empty();
    let submit_label = if state.logging_in {
        "Connexion…"
    } else {
        "Se connecter"
    };
    let mut submit = Button::new(
        Container::new(Text::new(submit_label).font(BOLD_FONT).size(16).style(TEXT_PRIMARY))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(14);
    if submit_enabled {
        submit = submit.on_press(Message::SubmitLogin);
    }

    let mut card = Column::new()
        .spacing(16)
        .padding(32)
        .width(Length::Fixed(380.0))
        .push(title)
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(username_input)
        .push(password_input);

    if let Some(error) = &state.login_error {
        card = card.push(Text::new(error).size(13).style(Color::from_rgb(1.0, 0.4, 0.4)));
    }
    card = card.push(submit).push(
        Text::new("Votre compte est créé par l'église.")
            .size(11)
            .style(TEXT_SECONDARY),
    );

    let content = Column::new()
        .align_items(Alignment::Center)
        .width(Length::Fill)
        .push(Space::new(Length::Fill, Length::Fixed(60.0)))
        .push(
            Container::new(card)
                .style(iced::theme::Container::Custom(Box::new(card_appearance))),
        )
        .push(Space::new(Length::Fill, Length::Fixed(16.0)))
        .push(logger_view(&state.logger));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
