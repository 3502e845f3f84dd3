// SPDX-License-Identifier: MPL-2.0
//! Bottom help bar listing the carousel's control hints.

use crate::carousel::HelpPrompt;
use iced::widget::{container, Row, Text};
use iced::{Color, Element, Length};

const HELP_TEXT_SIZE: f32 = 14.0;

pub fn help_bar<'a, Message: 'a>(prompts: &[HelpPrompt]) -> Element<'a, Message> {
    let mut row = Row::new().spacing(24.0);
    for prompt in prompts {
        row = row.push(
            Text::new(format!("{}  {}", prompt.control, prompt.action))
                .size(HELP_TEXT_SIZE)
                .color(Color::from_rgb(0.75, 0.75, 0.75)),
        );
    }
    container(row)
        .width(Length::Fill)
        .padding([6.0, 16.0])
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgb(0.1, 0.1, 0.1))),
            ..container::Style::default()
        })
        .into()
}
