// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::{
    report::{format_pct, write_generated_preview, RESULTS_TITLE},
    source::SourceMode,
    ui::{
        msg_theme::{message_line, style_for},
        InputMode, UI, USER_GUIDE,
    },
};

const TITLE: &str = " GC-Compute ";

const EDITING_BORDER: Style = Style::new().fg(Color::Yellow);
const SELECTED_TAB: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

pub fn render_ui(f: &mut Frame, ui: &mut UI) {
    let [tabs_area, input_area, results_area, msg_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Percentage(45),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(f.area());
    debug!(
        "input pane: {:?}, results pane: {:?}",
        input_area, results_area
    );

    render_tabs(f, ui, tabs_area);
    render_input_pane(f, ui, input_area);
    render_results_pane(f, ui, results_area);
    render_message(f, ui, msg_area);

    if ui.is_showing_help() {
        render_help(f);
    }
}

fn render_tabs(f: &mut Frame, ui: &UI, area: Rect) {
    let titles: Vec<String> = SourceMode::ALL
        .iter()
        .map(|mode| format!("({}) {}", mode.key().to_ascii_lowercase(), mode))
        .collect();
    let selected = SourceMode::ALL
        .iter()
        .position(|mode| *mode == ui.mode())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(SELECTED_TAB)
        .block(Block::default().borders(Borders::ALL).title(TITLE));
    f.render_widget(tabs, area);
}

fn input_block(ui: &UI) -> Block<'static> {
    let title = format!(" {} ", ui.mode().menu_entry());
    let block = Block::default().borders(Borders::ALL).title(title);
    if ui.is_editing() {
        block.border_style(EDITING_BORDER)
    } else {
        block
    }
}

fn render_input_pane(f: &mut Frame, ui: &mut UI, area: Rect) {
    let block = input_block(ui);
    let inner = block.inner(area);
    f.render_widget(block, area);
    ui.input_pane_height = Some(inner.height);

    match ui.mode() {
        SourceMode::Manual => render_paste_area(f, ui, inner),
        SourceMode::File => {
            let text = ui.path_editor.text();
            let cursor = ui.path_editor.cursor();
            render_line_input(f, ui, inner, "FASTA file: ", &text, cursor, Vec::new());
        }
        SourceMode::Random => {
            let text = ui.length_editor.text();
            let cursor = ui.length_editor.cursor();
            let preview = generated_preview(ui);
            render_line_input(f, ui, inner, "Length: ", &text, cursor, preview);
        }
    }
}

fn render_paste_area(f: &mut Frame, ui: &mut UI, area: Rect) {
    let height = area.height as usize;
    ui.paste_area.ensure_visible(height);
    let scroll = ui.paste_area.scroll();

    let lines: Vec<Line> = if ui.paste_area.is_blank() && !ui.is_editing() {
        vec![Line::styled(
            "Press Enter to type or paste FASTA text",
            Style::new().add_modifier(Modifier::DIM),
        )]
    } else {
        ui.paste_area
            .lines()
            .skip(scroll)
            .take(height)
            .map(Line::raw)
            .collect()
    };
    f.render_widget(Paragraph::new(lines), area);

    if ui.is_editing() && area.height > 0 {
        let x = area.x + ui.paste_area.col().min(area.width.saturating_sub(1) as usize) as u16;
        let y = area.y + (ui.paste_area.row() - scroll) as u16;
        f.set_cursor_position(Position::new(x, y));
    }
}

fn render_line_input(
    f: &mut Frame,
    ui: &UI,
    area: Rect,
    label: &str,
    text: &str,
    cursor: usize,
    extra: Vec<Line<'static>>,
) {
    let mut lines = vec![Line::from(vec![
        Span::styled(label.to_string(), Style::new().add_modifier(Modifier::BOLD)),
        Span::raw(text.to_string()),
    ])];
    lines.extend(extra);
    f.render_widget(Paragraph::new(lines), area);

    if ui.is_editing() {
        let offset = (label.len() + cursor).min(area.width.saturating_sub(1) as usize);
        f.set_cursor_position(Position::new(area.x + offset as u16, area.y));
    }
}

fn generated_preview(ui: &UI) -> Vec<Line<'static>> {
    let Some(record) = ui.app.generated() else {
        return Vec::new();
    };
    let config = ui.app.config();
    let mut buf = Vec::new();
    if write_generated_preview(&mut buf, record, config.wrap_width, config.preview_lines).is_err()
    {
        return Vec::new();
    }
    String::from_utf8_lossy(&buf)
        .lines()
        .map(|l| Line::raw(l.to_string()))
        .collect()
}

fn render_results_pane(f: &mut Frame, ui: &UI, area: Rect) {
    let title = match ui.app.results_origin() {
        Some(origin) => format!(" {} ({}) ", RESULTS_TITLE.trim_end_matches(':'), origin),
        None => format!(" {} ", RESULTS_TITLE.trim_end_matches(':')),
    };
    let lines: Vec<Line> = ui
        .app
        .results()
        .iter()
        .flat_map(|result| {
            [
                Line::styled(
                    result.header.clone(),
                    Style::new().add_modifier(Modifier::BOLD),
                ),
                Line::raw(format!(
                    "GC-content: {}",
                    format_pct(result.gc_content)
                )),
            ]
        })
        .collect();
    let para = Paragraph::new(lines)
        .scroll((ui.results_scroll(), 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(para, area);
}

fn render_message(f: &mut Frame, ui: &UI, area: Rect) {
    let msg = ui.app.current_message();
    let para = Paragraph::new(message_line(msg)).style(style_for(&msg.kind));
    f.render_widget(para, area);

    // Export path being typed
    if let InputMode::ExportFasta { editor } = &ui.input_mode {
        let offset =
            (msg.prefix.chars().count() + editor.cursor()).min(area.width.saturating_sub(1) as usize);
        f.set_cursor_position(Position::new(area.x + offset as u16, area.y));
    }
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(f.area(), 80, 22);
    let para = Paragraph::new(USER_GUIDE).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help (Esc to close) "),
    );
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
