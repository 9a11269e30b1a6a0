/// Upload panel: pick/clear buttons and the status line
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn view<'a>(loaded: bool, status: &'a str) -> Element<'a, Message> {
    let mut actions = row![button("Choose File…")
        .on_press(Message::OpenFile)
        .padding(10)]
    .spacing(12);

    // Only offered while there is something to clear
    if loaded {
        actions = actions.push(
            button("Clear Image")
                .on_press(Message::ClearImage)
                .padding(10)
                .style(button::danger),
        );
    }

    container(
        column![
            text("Upload Your Image").size(20),
            actions,
            text("…or drop an image onto the window").size(14),
            text(status).size(14),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(container::bordered_box)
    .into()
}
