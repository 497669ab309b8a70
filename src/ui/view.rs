use crate::app::{AppMode, RenderState, Status};
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

const INPUT_TITLE: &str = " Paste your CNPJ (or multiple) ";
const INPUT_PLACEHOLDER: &str = "e.g. 12.345.678/0001-90";
const OUTPUT_TITLE: &str = " Cleaned Result ";
const OUTPUT_PLACEHOLDER: &str = "cgc 12345678000190";
const STRIP_NOTE: &str = "Automatically strips dots (.), commas (,), slashes (/), hyphens (-), and spaces. Line breaks are preserved.";

fn base_style() -> Style {
    Style::default().fg(colors::text()).bg(colors::background())
}

fn panel(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        colors::accent()
    } else {
        colors::dimmed()
    };
    Block::bordered()
        .title(title)
        .border_style(Style::default().fg(border))
        .style(base_style())
}

/// First input row to show so the cursor row stays visible.
pub fn input_scroll(cursor_row: u16, inner_height: u16) -> u16 {
    if inner_height == 0 {
        return 0;
    }
    cursor_row.saturating_sub(inner_height - 1)
}

pub fn render_input(state: &RenderState, scroll: u16) -> Paragraph<'static> {
    let text = if state.is_empty() {
        Text::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(colors::dimmed()),
        ))
    } else {
        state
            .input
            .split('\n')
            .map(|line| Line::from(line.trim_end_matches('\r').to_string()))
            .collect::<Vec<_>>()
            .into()
    };

    Paragraph::new(text)
        .block(panel(INPUT_TITLE.to_string(), state.mode == AppMode::Editing))
        .scroll((scroll, 0))
}

/// Clamp the requested output scroll so the panel stays filled.
pub fn output_scroll(requested: u16, total: usize, inner_height: u16) -> u16 {
    let total = u16::try_from(total).unwrap_or(u16::MAX);
    requested.min(total.saturating_sub(inner_height))
}

fn output_title(scroll: u16, total: usize, inner_height: u16) -> String {
    let total_rows = u16::try_from(total).unwrap_or(u16::MAX);
    if total_rows <= inner_height {
        return OUTPUT_TITLE.to_string();
    }
    let last = scroll.saturating_add(inner_height).min(total_rows);
    format!(
        "{}(lines {}-{} of {}, PgUp/PgDn) ",
        OUTPUT_TITLE,
        scroll + 1,
        last,
        total
    )
}

pub fn render_output(state: &RenderState, inner_height: u16) -> Paragraph<'static> {
    let scroll = output_scroll(state.output_scroll, state.output.len(), inner_height);
    let text: Text<'static> = if state.output.is_empty() {
        Text::from(Span::styled(
            OUTPUT_PLACEHOLDER,
            Style::default().fg(colors::dimmed()),
        ))
    } else {
        state
            .output
            .iter()
            .map(|line| {
                let style = if line.is_valid {
                    Style::default()
                        .fg(colors::accent())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::error())
                };
                Line::from(Span::styled(line.token.clone(), style))
            })
            .collect::<Vec<_>>()
            .into()
    };

    Paragraph::new(text)
        .block(panel(
            output_title(scroll, state.output.len(), inner_height),
            false,
        ))
        .scroll((scroll, 0))
}

pub fn render_warning(state: &RenderState) -> Line<'static> {
    let Some(warning) = &state.warning else {
        return Line::default();
    };

    let mut spans = vec![Span::styled(
        format!("⚠ {}", warning),
        Style::default()
            .fg(colors::error())
            .add_modifier(Modifier::BOLD),
    )];
    // One row only: the first entry, then a count of the rest.
    if let Some(first) = state.invalid_lines.first() {
        spans.push(Span::styled(
            format!("  {}", first),
            Style::default().fg(colors::error()),
        ));
    }
    let rest = state.invalid_lines.len().saturating_sub(1);
    if rest > 0 {
        spans.push(Span::styled(
            format!("  (+{} more)", rest),
            Style::default().fg(colors::dimmed()),
        ));
    }
    Line::from(spans)
}

pub fn render_status(state: &RenderState) -> Line<'static> {
    match &state.status {
        Some(Status::Error(message)) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(colors::error()),
        )),
        _ if state.copied => Line::from(Span::styled(
            "✓ Copied!",
            Style::default()
                .fg(colors::success())
                .add_modifier(Modifier::BOLD),
        )),
        Some(Status::Info(message)) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(colors::dimmed()),
        )),
        None => Line::default(),
    }
}

fn hint(key: &'static str, label: String, style: Style) -> Vec<Span<'static>> {
    vec![
        Span::styled(key, style.add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}  ", label), style),
    ]
}

pub fn render_hints(state: &RenderState) -> Line<'static> {
    let enabled = Style::default().fg(colors::text());
    let disabled = Style::default().fg(colors::dimmed());

    let (copy_label, copy_style) = if state.copied {
        ("Copied!", Style::default().fg(colors::success()))
    } else if state.can_copy {
        ("Copy Result", enabled)
    } else {
        ("Copy Result", disabled)
    };
    let clear_style = if state.can_clear { enabled } else { disabled };
    let validation = if state.validation { "on" } else { "off" };

    let mut spans = Vec::new();
    spans.extend(hint("^Y", copy_label.to_string(), copy_style));
    spans.extend(hint("^L", "Clear".to_string(), clear_style));
    spans.extend(hint("^V", "Paste".to_string(), enabled));
    spans.extend(hint("^T", format!("Validation: {}", validation), enabled));
    spans.extend(hint("F1", "Help".to_string(), enabled));
    spans.extend(hint("Esc", "Quit".to_string(), enabled));
    Line::from(spans)
}

pub fn render_help() -> Paragraph<'static> {
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(
                format!("{:<10}", k),
                Style::default()
                    .fg(colors::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(what),
        ])
    };

    let lines = vec![
        key("Ctrl-V", "paste from system clipboard"),
        key("Ctrl-Y", "copy cleaned result"),
        key("Ctrl-L", "clear input"),
        key("Ctrl-T", "toggle CNPJ checksum validation"),
        key("← → ", "move cursor"),
        key("Home End", "start / end of line"),
        key("PgUp PgDn", "scroll cleaned result"),
        key("F1 Esc", "close this help"),
        key("Ctrl-C", "quit"),
        Line::default(),
        Line::from(Span::styled(STRIP_NOTE, Style::default().fg(colors::dimmed()))),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(" Help ".to_string(), true))
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the whole screen for one frame.
pub fn render_app(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(base_style()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        " CNPJ Cleaner ",
        Style::default()
            .fg(colors::text())
            .bg(colors::accent())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Left);
    frame.render_widget(header, chunks[0]);

    let input_area = chunks[1];
    let inner_height = input_area.height.saturating_sub(2);
    let (row, col) = state.cursor;
    let scroll = input_scroll(row, inner_height);
    frame.render_widget(render_input(state, scroll), input_area);

    let output_height = chunks[2].height.saturating_sub(2);
    frame.render_widget(render_output(state, output_height), chunks[2]);
    frame.render_widget(Paragraph::new(render_warning(state)), chunks[3]);
    frame.render_widget(Paragraph::new(render_status(state)), chunks[4]);
    frame.render_widget(Paragraph::new(render_hints(state)), chunks[5]);

    match state.mode {
        AppMode::Editing => {
            let x = input_area.x + 1 + col.min(input_area.width.saturating_sub(3));
            let y = input_area.y + 1 + (row - scroll);
            frame.set_cursor_position((x, y));
        }
        AppMode::Help => {
            let help_area = centered_rect(64, 14, area);
            frame.render_widget(Clear, help_area);
            frame.render_widget(render_help(), help_area);
        }
        AppMode::Quit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::OutputLine;
    use ratatui::{backend::TestBackend, Terminal};

    fn state_with(input: &str, output: &[(&str, bool)]) -> RenderState {
        RenderState {
            mode: AppMode::Editing,
            input: input.to_string(),
            cursor: (0, 0),
            output_scroll: 0,
            output: output
                .iter()
                .map(|&(token, is_valid)| OutputLine {
                    token: token.to_string(),
                    is_valid,
                })
                .collect(),
            warning: None,
            invalid_lines: vec![],
            copied: false,
            can_copy: !output.is_empty(),
            can_clear: !input.is_empty(),
            validation: true,
            status: None,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_input_scroll_keeps_cursor_visible() {
        assert_eq!(input_scroll(0, 5), 0);
        assert_eq!(input_scroll(4, 5), 0);
        assert_eq!(input_scroll(7, 5), 3);
        assert_eq!(input_scroll(3, 0), 0);
    }

    #[test]
    fn test_hints_show_copied_label() {
        let mut state = state_with("1", &[("cgc 1", false)]);
        assert!(line_text(&render_hints(&state)).contains("Copy Result"));

        state.copied = true;
        assert!(line_text(&render_hints(&state)).contains("Copied!"));
    }

    #[test]
    fn test_hints_show_validation_state() {
        let mut state = state_with("", &[]);
        state.validation = false;
        assert!(line_text(&render_hints(&state)).contains("Validation: off"));
    }

    #[test]
    fn test_warning_line_lists_invalid_entries() {
        let mut state = state_with("1", &[("cgc 1", false)]);
        assert!(render_warning(&state).spans.is_empty());

        state.warning = Some("1 invalid CNPJ detected".to_string());
        state.invalid_lines = vec!["line 1: cgc 1 (expected 14 digits, found 1)".to_string()];
        let text = line_text(&render_warning(&state));
        assert!(text.contains("1 invalid CNPJ detected"));
        assert!(text.contains("line 1: cgc 1"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_warning_line_counts_hidden_entries() {
        let mut state = state_with("1\n2\n3", &[("cgc 1", false), ("cgc 2", false), ("cgc 3", false)]);
        state.warning = Some("3 invalid CNPJs detected".to_string());
        state.invalid_lines = (1..=3)
            .map(|n| format!("line {n}: cgc {n} (expected 14 digits, found 1)"))
            .collect();

        let text = line_text(&render_warning(&state));
        assert!(text.contains("line 1: cgc 1"));
        assert!(!text.contains("line 2:"));
        assert!(text.contains("(+2 more)"));
    }

    #[test]
    fn test_output_scroll_clamps_to_panel() {
        assert_eq!(output_scroll(0, 20, 8), 0);
        assert_eq!(output_scroll(5, 20, 8), 5);
        assert_eq!(output_scroll(19, 20, 8), 12);
        assert_eq!(output_scroll(3, 4, 8), 0);
    }

    #[test]
    fn test_output_title_shows_visible_range() {
        assert_eq!(output_title(0, 4, 8), OUTPUT_TITLE);
        assert_eq!(
            output_title(12, 20, 8),
            " Cleaned Result (lines 13-20 of 20, PgUp/PgDn) "
        );
    }

    #[test]
    fn test_render_app_scrolls_long_output() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let tokens: Vec<String> = (0..30).map(|i| format!("cgc {:04}", i)).collect();
        let pairs: Vec<(&str, bool)> = tokens.iter().map(|t| (t.as_str(), false)).collect();
        let mut state = state_with("x", &pairs);
        state.output_scroll = 29;

        terminal.draw(|frame| render_app(frame, &state)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("cgc 0029"));
        assert!(!screen.contains("cgc 0000"));
        assert!(screen.contains("of 30"));
    }

    #[test]
    fn test_status_error_wins_over_copied() {
        let mut state = state_with("1", &[("cgc 1", false)]);
        state.copied = true;
        state.status = Some(Status::Error("Clipboard error: no display".to_string()));
        assert_eq!(line_text(&render_status(&state)), "Clipboard error: no display");
    }

    #[test]
    fn test_render_app_draws_both_panels() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = state_with(
            "11.444.777/0001-61",
            &[("cgc 11444777000161", true)],
        );

        terminal.draw(|frame| render_app(frame, &state)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("CNPJ Cleaner"));
        assert!(screen.contains("11.444.777/0001-61"));
        assert!(screen.contains("cgc 11444777000161"));
    }

    #[test]
    fn test_render_app_shows_placeholders_when_empty() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = state_with("", &[]);

        terminal.draw(|frame| render_app(frame, &state)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("e.g. 12.345.678/0001-90"));
        assert!(screen.contains("cgc 12345678000190"));
    }

    #[test]
    fn test_render_app_help_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = state_with("", &[]);
        state.mode = AppMode::Help;

        terminal.draw(|frame| render_app(frame, &state)).unwrap();

        assert!(screen_text(&terminal).contains("toggle CNPJ checksum validation"));
    }
}
