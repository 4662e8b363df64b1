use iced::widget::{Button, Column, Container, PickList, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::{AboutTab, ChurchAppState, PendingDelete};
use crate::client::models::messages::Message;
use crate::common::models::{AboutSection, SectionType};

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const DANGER: Color = Color::from_rgb(1.0, 0.4, 0.4);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const SECTION_TYPES: [SectionType; 4] = [
    SectionType::History,
    SectionType::Mission,
    SectionType::Vision,
    SectionType::Values,
];

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

fn text_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Container::new(
        TextInput::new(placeholder, value)
            .on_input(on_input)
            .padding(10)
            .size(13),
    )
    .style(iced::theme::Container::Custom(Box::new(input_appearance)))
    .into()
}

fn visionary_editor(state: &ChurchAppState) -> Element<'_, Message> {
    let form = &state.visionary_form;
    let mut column = Column::new()
        .spacing(10)
        .push(
            Text::new(if state.visionary.is_some() {
                "Modifier le visionnaire"
            } else {
                "Créer le visionnaire"
            })
            .font(BOLD_FONT)
            .size(17)
            .style(TEXT_PRIMARY),
        )
        .push(text_input("Nom", &form.name, Message::VisionaryNameChanged))
        .push(text_input("Titre", &form.title, Message::VisionaryTitleChanged))
        .push(text_input(
            "Biographie",
            &form.biography,
            Message::VisionaryBiographyChanged,
        ))
        .push(text_input(
            "Histoire",
            &form.history,
            Message::VisionaryHistoryChanged,
        ))
        .push(text_input(
            "Photo (chemin du fichier, facultatif)",
            &form.photo_path_input,
            Message::VisionaryPhotoPathChanged,
        ));

    if let Some(error) = &state.about_form_error {
        column = column.push(Text::new(error).size(13).style(DANGER));
    }
    column = column.push(
        Button::new(Text::new("Enregistrer").font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
            .on_press(Message::SubmitVisionary)
            .style(iced::theme::Button::Primary)
            .padding(12),
    );

    Container::new(column)
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn section_editor(state: &ChurchAppState) -> Element<'_, Message> {
    let form = &state.section_form;
    let mut column = Column::new()
        .spacing(10)
        .push(
            Text::new(if form.editing.is_some() {
                "Modifier la section"
            } else {
                "Nouvelle section"
            })
            .font(BOLD_FONT)
            .size(17)
            .style(TEXT_PRIMARY),
        )
        .push(
            Row::new()
                .spacing(12)
                .align_items(Alignment::Center)
                .push(Text::new("Type").size(12).style(TEXT_SECONDARY))
                .push(PickList::new(
                    &SECTION_TYPES[..],
                    Some(form.section_type),
                    Message::SectionTypeSelected,
                )),
        )
        .push(text_input("Titre", &form.title, Message::SectionTitleChanged))
        .push(text_input(
            "Contenu",
            &form.content,
            Message::SectionContentChanged,
        ))
        .push(text_input(
            "Image (chemin du fichier, facultatif)",
            &form.image_path_input,
            Message::SectionImagePathChanged,
        ));

    if let Some(error) = &state.about_form_error {
        column = column.push(Text::new(error).size(13).style(DANGER));
    }
    let mut buttons = Row::new().spacing(8).push(
        Button::new(Text::new("Enregistrer").font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
            .on_press(Message::SubmitSection)
            .style(iced::theme::Button::Primary)
            .padding(12),
    );
    if form.editing.is_some() {
        buttons = buttons.push(
            Button::new(Text::new("Annuler la modification").size(13))
                .on_press(Message::ResetSectionForm)
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

fn section_row<'a>(section: &'a AboutSection, editable: bool) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(
            Text::new(section.section_type.label_fr())
                .size(11)
                .style(TEXT_SECONDARY)
                .width(Length::Fixed(80.0)),
        )
        .push(
            Column::new()
                .spacing(2)
                .push(Text::new(&section.title).font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
                .push(Text::new(&section.content).size(12).style(TEXT_SECONDARY))
                .width(Length::Fill),
        );

    if editable {
        row = row
            .push(
                Button::new(Text::new("Modifier").size(12))
                    .on_press(Message::EditSection(section.id))
                    .style(iced::theme::Button::Secondary)
                    .padding([6, 10]),
            )
            .push(
                Button::new(Text::new("Supprimer").size(12))
                    .on_press(Message::RequestDelete(PendingDelete::Section(section.id)))
                    .style(iced::theme::Button::Destructive)
                    .padding([6, 10]),
            );
    }

    Container::new(row)
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

pub fn view(state: &ChurchAppState) -> Element<'_, Message> {
    let editable = state.is_admin();
    let mut content = Column::new().spacing(16).padding(24).width(Length::Fill);
    content = content.push(
        Text::new(if editable { "Gestion « À propos »" } else { "À propos" })
            .font(BOLD_FONT)
            .size(26)
            .style(TEXT_PRIMARY),
    );

    if state.about_loading {
        content = content.push(Text::new("Chargement…").size(14).style(TEXT_SECONDARY));
        return content.into();
    }

    // tab bar
    let tab = |label: &'static str, value: AboutTab, current: AboutTab| {
        let style = if value == current {
            iced::theme::Button::Primary
        } else {
            iced::theme::Button::Secondary
        };
        Button::new(Text::new(label).size(13))
            .on_press(Message::AboutTabSelected(value))
            .style(style)
            .padding([8, 14])
    };
    content = content.push(
        Row::new()
            .spacing(8)
            .push(tab("Visionnaire", AboutTab::Visionary, state.about_tab))
            .push(tab("Sections", AboutTab::Sections, state.about_tab)),
    );

    match state.about_tab {
        AboutTab::Visionary => {
            if let Some(v) = &state.visionary {
                content = content.push(
                    Container::new(
                        Column::new()
                            .spacing(4)
                            .push(Text::new(&v.name).font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
                            .push(Text::new(&v.title).size(13).style(TEXT_SECONDARY))
                            .push(Space::new(Length::Fill, Length::Fixed(8.0)))
                            .push(Text::new(&v.biography).size(13).style(TEXT_PRIMARY)),
                    )
                    .padding(20)
                    .width(Length::Fill)
                    .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                );
            }
            if editable {
                content = content.push(visionary_editor(state));
            }
        }
        AboutTab::Sections => {
            if editable {
                content = content.push(section_editor(state));
                if let Some(PendingDelete::Section(_)) = state.pending_delete {
                    content = content.push(
                        Container::new(
                            Row::new()
                                .spacing(12)
                                .align_items(Alignment::Center)
                                .push(
                                    Text::new("Supprimer cette section ?")
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
                        .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                    );
                }
            }
            let mut list = Column::new().spacing(8);
            if state.sections.is_empty() {
                list = list.push(Text::new("Aucune section").size(14).style(TEXT_SECONDARY));
            } else {
                for section in &state.sections {
                    list = list.push(section_row(section, editable));
                }
            }
            content = content.push(Scrollable::new(list).height(Length::Fill));
        }
    }

    content.into()
}
