use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::core::state::{App, Mode};

/// Display column every name is padded or truncated to.
const NAME_COLUMN_WIDTH: usize = 15;

const HELP_LINE: &str =
    "[Enter] count up | [d] count down | [r] reset all | [Up/Down] move | [q] / [Ctrl+C] quit";

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, help_area, rule_area, list_area, status_area] = layout.areas(frame.area());

    frame.render_widget(
        Span::styled("Tally counter", Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );
    frame.render_widget(Span::raw(HELP_LINE), help_area);
    frame.render_widget(Span::raw("-".repeat(30)), rule_area);

    draw_counter_list(frame, list_area, app);

    let status = match app.mode {
        Mode::ResetNotice => "All counts reset to 0. Press any key to continue.",
        Mode::Counting => "",
    };
    frame.render_widget(
        Span::styled(status, Style::default().fg(Color::Yellow)),
        status_area,
    );
}

fn draw_counter_list(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .counters
        .iter()
        .enumerate()
        .map(|(i, counter)| {
            let selected = i == app.selected;
            let marker = if selected { ">>" } else { "  " };
            let text = format!(
                "{} {} : {:3}",
                marker,
                pad_name(&counter.name, NAME_COLUMN_WIDTH),
                counter.count
            );
            if selected {
                Line::styled(
                    text,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                Line::raw(text)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Pad or truncate to exactly `width` terminal columns. Wide characters
/// count double; one that would straddle the boundary is dropped and the
/// gap filled with a space.
fn pad_name(name: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    for _ in used..width {
        out.push(' ');
    }
    out
}
