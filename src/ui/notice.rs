use crate::ui::centered_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders a blocking notice that stays up until acknowledged
pub fn render_notice(frame: &mut Frame, message: &str, area: Rect) {
    let notice_area = centered_rect(50, 25, area);
    frame.render_widget(Clear, notice_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("(Enter) OK", Style::default().fg(Color::Gray))),
    ];

    let notice = Paragraph::new(text)
        .block(Block::default().title("Notice").borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(notice, notice_area);
}
