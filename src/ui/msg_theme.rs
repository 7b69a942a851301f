// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::{CurrentMessage, MessageKind};

pub const INFO_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

// Validation failures (bad base, missing file, length out of range)
pub const ERROR_STYLE: Style = Style::new().fg(Color::White).bg(Color::Red);

pub const WARNING_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

// Export path prompt
pub const ARGUMENT_STYLE: Style = Style::new().fg(Color::White).bg(Color::Blue);

pub fn style_for(kind: &MessageKind) -> Style {
    match kind {
        MessageKind::Info => INFO_STYLE,
        MessageKind::Warning => WARNING_STYLE,
        MessageKind::Error => ERROR_STYLE,
        MessageKind::Argument => ARGUMENT_STYLE,
    }
}

/// The message bar: the prefix ("ERROR: ", "Save FASTA as: ", ...) in bold, then the message.
pub fn message_line(msg: &CurrentMessage) -> Line<'static> {
    let style = style_for(&msg.kind);
    Line::from(vec![
        Span::styled(msg.prefix.clone(), style.add_modifier(Modifier::BOLD)),
        Span::styled(msg.message.clone(), style),
    ])
    .style(style)
}

#[cfg(test)]
mod tests {
    use super::{message_line, ERROR_STYLE};
    use crate::app::{CurrentMessage, MessageKind};
    use ratatui::style::Modifier;

    #[test]
    fn error_prefix_is_bold() {
        let msg = CurrentMessage {
            prefix: String::from("ERROR: "),
            message: String::from("The file was not found: x.fa"),
            kind: MessageKind::Error,
        };
        let line = message_line(&msg);
        assert_eq!(line.to_string(), "ERROR: The file was not found: x.fa");
        assert_eq!(line.spans[0].style, ERROR_STYLE.add_modifier(Modifier::BOLD));
        assert_eq!(line.spans[1].style, ERROR_STYLE);
    }
}
