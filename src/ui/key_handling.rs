// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Thomas Junier
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{
    line_editor::LineEditor,
    InputMode,
    InputMode::{ConfirmOverwrite, Editing, ExportFasta, Help, Normal},
    UI,
};
use crate::source::SourceMode;

// Returns true IFF the user quits.
pub fn handle_key_press(ui: &mut UI, key_event: KeyEvent) -> bool {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        return true;
    }
    let mode = ui.input_mode.clone();
    match mode {
        Normal => return handle_normal_key(ui, key_event),
        Help => handle_help_key(ui, key_event),
        Editing => handle_editing_key(ui, key_event),
        ExportFasta { editor } => handle_export_fasta(ui, key_event, editor),
        ConfirmOverwrite { editor, path } => handle_confirm_overwrite(ui, key_event, editor, path),
    };
    false
}

// Bracketed paste goes to whichever input is being edited, including the export path; outside
// editing, pasting into the paste mode starts editing it.
pub fn handle_paste(ui: &mut UI, text: &str) {
    if let ExportFasta { editor } = &mut ui.input_mode {
        editor.insert_str(text.trim());
        refresh_export_prompt(ui);
        return;
    }
    match ui.input_mode {
        Editing => {}
        Normal if ui.app.mode() == SourceMode::Manual => ui.input_mode = Editing,
        _ => return,
    }
    match ui.app.mode() {
        SourceMode::Manual => ui.paste_area.insert_str(text),
        SourceMode::File => ui.path_editor.insert_str(text.trim()),
        SourceMode::Random => ui.length_editor.insert_str(text.trim()),
    }
}

fn handle_normal_key(ui: &mut UI, key_event: KeyEvent) -> bool {
    let mut done = false;
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => done = true,
        KeyCode::Esc => ui.app.clear_msg(),
        KeyCode::Tab => ui.next_mode(),
        KeyCode::BackTab => ui.prev_mode(),
        KeyCode::Char(c @ ('a' | 'b' | 'c' | 'A' | 'B' | 'C')) => {
            if let Ok(mode) = c.to_string().parse::<SourceMode>() {
                ui.select_mode(mode);
            }
        }
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => {
            ui.input_mode = InputMode::Editing;
            let hint = editing_hint(ui.app.mode());
            ui.app.info_msg(hint);
        }
        KeyCode::Char('s') => {
            if ui.app.generated().is_some() {
                let default_path = ui.app.config().export_path.display().to_string();
                ui.input_mode = InputMode::ExportFasta {
                    editor: LineEditor::from_text(&default_path),
                };
                ui.app
                    .argument_msg(String::from("Save FASTA as: "), default_path);
            } else {
                ui.app
                    .warning_msg("No generated sequence to save (use mode C first)");
            }
        }
        KeyCode::Char('?') => {
            ui.input_mode = InputMode::Help;
        }
        KeyCode::Down | KeyCode::Char('j') => ui.scroll_results_down(1),
        KeyCode::Up | KeyCode::Char('k') => ui.scroll_results_up(1),
        KeyCode::PageDown => ui.scroll_results_down(10),
        KeyCode::PageUp => ui.scroll_results_up(10),
        _ => {}
    }
    done
}

fn editing_hint(mode: SourceMode) -> &'static str {
    match mode {
        SourceMode::Manual => "Paste or type FASTA text; Ctrl-R analyzes, Esc stops editing",
        SourceMode::File => "Enter the path to the FASTA file (max 1GB); Enter loads it",
        SourceMode::Random => "Enter a length (50,000 to 1,000,000,000); Enter generates",
    }
}

fn handle_help_key(ui: &mut UI, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            ui.input_mode = InputMode::Normal;
            ui.app.clear_msg();
        }
        _ => {}
    }
}

fn handle_editing_key(ui: &mut UI, key_event: KeyEvent) {
    if key_event.code == KeyCode::Esc {
        ui.input_mode = InputMode::Normal;
        ui.app.clear_msg();
        return;
    }
    match ui.app.mode() {
        SourceMode::Manual => handle_paste_area_key(ui, key_event),
        SourceMode::File | SourceMode::Random => handle_line_key(ui, key_event),
    }
}

fn handle_paste_area_key(ui: &mut UI, key_event: KeyEvent) {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let area = &mut ui.paste_area;
    match key_event.code {
        KeyCode::Char('r') if ctrl => {
            if ui.submit() {
                ui.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('w') if ctrl => area.delete_word_left(),
        KeyCode::Char(c) if !ctrl => area.insert_char(c),
        KeyCode::Enter => area.newline(),
        KeyCode::Backspace => area.backspace(),
        KeyCode::Left => area.move_left(),
        KeyCode::Right => area.move_right(),
        KeyCode::Up => area.move_up(),
        KeyCode::Down => area.move_down(),
        KeyCode::Home => area.move_line_start(),
        KeyCode::End => area.move_line_end(),
        _ => {}
    }
    if let Some(height) = ui.input_pane_height {
        ui.paste_area.ensure_visible(height as usize);
    }
}

fn handle_line_key(ui: &mut UI, key_event: KeyEvent) {
    if key_event.code == KeyCode::Enter {
        if ui.submit() {
            ui.input_mode = InputMode::Normal;
        }
        return;
    }
    let editor = match ui.app.mode() {
        SourceMode::Random => &mut ui.length_editor,
        _ => &mut ui.path_editor,
    };
    match key_event.code {
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            editor.insert_char(c)
        }
        KeyCode::Char('u') => editor.clear(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Home => editor.move_home(),
        KeyCode::End => editor.move_end(),
        _ => {}
    }
}

fn handle_export_fasta(ui: &mut UI, key_event: KeyEvent, mut editor: LineEditor) {
    match key_event.code {
        KeyCode::Esc => {
            ui.input_mode = InputMode::Normal;
            ui.app.clear_msg();
        }
        KeyCode::Enter => {
            let path = editor.text();
            if path.trim().is_empty() {
                ui.input_mode = InputMode::ExportFasta { editor };
                ui.app.warning_msg("Export path cannot be empty");
                return;
            }
            if Path::new(&path).exists() {
                ui.input_mode = InputMode::ConfirmOverwrite { editor, path };
                ui.app.info_msg("Overwrite FASTA file? (y/n)");
            } else {
                save_generated(ui, &path);
                ui.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) if !c.is_control() => {
            editor.insert_char(c);
            ui.input_mode = InputMode::ExportFasta { editor };
            refresh_export_prompt(ui);
        }
        KeyCode::Backspace => {
            editor.backspace();
            ui.input_mode = InputMode::ExportFasta { editor };
            refresh_export_prompt(ui);
        }
        KeyCode::Left => {
            editor.move_left();
            ui.input_mode = InputMode::ExportFasta { editor };
        }
        KeyCode::Right => {
            editor.move_right();
            ui.input_mode = InputMode::ExportFasta { editor };
        }
        KeyCode::Home => {
            editor.move_home();
            ui.input_mode = InputMode::ExportFasta { editor };
        }
        KeyCode::End => {
            editor.move_end();
            ui.input_mode = InputMode::ExportFasta { editor };
        }
        _ => {}
    }
}

fn handle_confirm_overwrite(ui: &mut UI, key_event: KeyEvent, editor: LineEditor, path: String) {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            save_generated(ui, &path);
            ui.input_mode = InputMode::Normal;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            ui.input_mode = InputMode::ExportFasta { editor };
            refresh_export_prompt(ui);
        }
        _ => {}
    }
}

fn refresh_export_prompt(ui: &mut UI) {
    let text = ui.export_prompt_text();
    ui.app.argument_msg(String::from("Save FASTA as: "), text);
}

fn save_generated(ui: &mut UI, path: &str) {
    if let Err(e) = ui.app.save_generated(Path::new(path.trim())) {
        ui.app.error_msg(format!("Export failed: {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_key_press, handle_paste};
    use crate::{app::App, config::GcConfig, source::SourceMode, ui::UI};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = App::new(GcConfig::default());
        let mut ui = UI::new(&mut app);
        assert!(handle_key_press(&mut ui, ctrl('c')));
        handle_key_press(&mut ui, KeyCode::Enter.into());
        assert!(ui.is_editing());
        assert!(handle_key_press(&mut ui, ctrl('c')));
    }

    #[test]
    fn q_types_while_editing() {
        let mut app = App::new(GcConfig::default());
        let mut ui = UI::new(&mut app);
        handle_key_press(&mut ui, KeyCode::Char('b').into());
        assert_eq!(ui.mode(), SourceMode::File);
        handle_key_press(&mut ui, KeyCode::Char('e').into());
        assert!(!handle_key_press(&mut ui, KeyCode::Char('q').into()));
        assert_eq!(ui.path_text(), "q");
    }

    #[test]
    fn paste_then_analyze() {
        let mut app = App::new(GcConfig::default());
        let mut ui = UI::new(&mut app);
        handle_paste(&mut ui, ">A\r\nGGCC\r\n\r\n>B\r\nATAT\r\n");
        assert!(ui.is_editing());
        handle_key_press(&mut ui, ctrl('r'));
        assert!(!ui.is_editing());
        assert_eq!(ui.app().results().len(), 2);
    }

    #[test]
    fn failed_submit_keeps_editing() {
        let mut app = App::new(GcConfig::default());
        let mut ui = UI::new(&mut app);
        handle_key_press(&mut ui, KeyCode::Char('c').into());
        handle_key_press(&mut ui, KeyCode::Enter.into());
        handle_key_press(&mut ui, KeyCode::Backspace.into());
        handle_key_press(&mut ui, KeyCode::Enter.into());
        assert!(ui.is_editing());
        assert_eq!(ui.length_text(), "5000");
        assert!(ui.app().results().is_empty());
    }

    #[test]
    fn save_without_generated_sequence_warns() {
        let mut app = App::new(GcConfig::default());
        let mut ui = UI::new(&mut app);
        handle_key_press(&mut ui, KeyCode::Char('s').into());
        assert!(ui.export_prompt_text().is_empty());
        assert!(ui
            .app()
            .current_message()
            .message
            .contains("No generated sequence"));
    }

    #[test]
    fn export_path_takes_non_ascii_and_paste() {
        let mut app = App::new(GcConfig::default());
        let mut ui = UI::new(&mut app);
        handle_key_press(&mut ui, KeyCode::Char('c').into());
        handle_key_press(&mut ui, KeyCode::Enter.into());
        handle_key_press(&mut ui, KeyCode::Enter.into());
        assert!(ui.app().generated().is_some());

        handle_key_press(&mut ui, KeyCode::Char('s').into());
        assert_eq!(ui.export_prompt_text(), "random_sequence.fasta");
        handle_key_press(&mut ui, KeyCode::Char('é').into());
        handle_paste(&mut ui, " _2\n");
        assert_eq!(ui.export_prompt_text(), "random_sequence.fastaé_2");
        assert_eq!(
            ui.app().current_message().message,
            "random_sequence.fastaé_2"
        );
    }

    #[test]
    fn ctrl_u_clears_line_input() {
        let mut app = App::new(GcConfig::default());
        let mut ui = UI::new(&mut app);
        handle_key_press(&mut ui, KeyCode::Char('c').into());
        handle_key_press(&mut ui, KeyCode::Char('i').into());
        assert!(ui.is_editing());
        handle_key_press(&mut ui, ctrl('u'));
        assert_eq!(ui.length_text(), "");
        handle_key_press(&mut ui, KeyCode::Char('7').into());
        assert_eq!(ui.length_text(), "7");
    }
}
