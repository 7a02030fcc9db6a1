use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

pub const BANNER: &str = "Welcome to ROBCO Industries (TM) Termlink";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let inner_width = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let leak_lines = (self.leak.chars().count() as u16).div_ceil(inner_width).max(1);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(leak_lines + 1),
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(vec![
            Line::from(Span::styled(BANNER, Style::default().fg(Color::Blue))),
            Line::from("Password Required"),
            Line::from("-----------------"),
        ])
        .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            self.leak.as_str(),
            Style::default().fg(Color::Yellow),
        ))
        .wrap(Wrap { trim: false })
        .render(chunks[1], buf);

        let prompt_line = match self.state {
            AppState::Guessing => Line::from(vec![
                Span::styled("> ", bold_style),
                Span::raw(self.typed()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            AppState::Unlocked => Line::from(Span::styled("> ACCESS GRANTED", green_bold_style)),
        };
        Paragraph::new(prompt_line).render(chunks[2], buf);

        if let Some(attempt) = self.last_attempt() {
            let style = if attempt.submission.matched {
                green_bold_style
            } else {
                red_bold_style
            };
            let mut lines: Vec<Line> = attempt
                .submission
                .message
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    if i == 0 {
                        Line::from(Span::styled(line.to_string(), style))
                    } else {
                        Line::from(line.to_string())
                    }
                })
                .collect();
            lines.push(Line::from(Span::styled(
                format!("attempts: {}", self.attempts.len()),
                dim_style,
            )));

            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(chunks[3], buf);
        }

        let legend = match self.state {
            AppState::Guessing => "(enter) submit / (esc) quit",
            AppState::Unlocked => "press any key to exit",
        };
        Paragraph::new(Span::styled(legend, Style::default().fg(Color::Gray).patch(dim_style)))
            .render(chunks[4], buf);
    }
}
