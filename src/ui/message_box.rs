// SPDX-License-Identifier: MPL-2.0
//! One-button acknowledgment dialog, shown e.g. when an empty catalog forces
//! the UI mode back to full.

use iced::widget::{button, container, Column, Text};
use iced::{Alignment, Element, Length};

pub fn message_box<'a, Message: Clone + 'a>(body: &str, on_ok: Message) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(24.0)
        .align_x(Alignment::Center)
        .push(Text::new(body.to_string()).size(18.0))
        .push(button(Text::new("OK")).on_press(on_ok).padding([8.0, 32.0]));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
