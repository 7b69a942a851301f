// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
pub mod key_handling;
mod line_editor;
mod msg_theme;
pub mod render;
mod text_area;

use log::debug;

use crate::{app::App, source::SourceMode};

pub use line_editor::LineEditor;
pub use text_area::TextArea;

pub const USER_GUIDE: &str = "\
GC-Compute key bindings

  Tab / Shift-Tab   next / previous input mode
  a, b, c           select mode: (a) paste FASTA, (b) load file, (c) random
  Enter, e, i       edit the input of the current mode
  s                 save the last generated sequence as FASTA
  j / k, Down / Up  scroll results
  ?                 toggle this help
  q, Ctrl-C         quit

While editing:
  Esc               stop editing
  Ctrl-R            analyze the pasted FASTA text (paste mode)
  Enter             new line (paste mode) / submit (file and random modes)
  Ctrl-W            delete word left (paste mode)
  Ctrl-U            clear the input (file and random modes)
";

#[derive(Clone, PartialEq)]
enum InputMode {
    Normal,
    Help,
    Editing,
    ExportFasta { editor: LineEditor },
    ConfirmOverwrite { editor: LineEditor, path: String },
}

pub struct UI<'a> {
    app: &'a mut App,
    input_mode: InputMode,
    paste_area: TextArea,
    path_editor: LineEditor,
    length_editor: LineEditor,
    results_scroll: u16,
    // Known only once a frame has been laid out.
    input_pane_height: Option<u16>,
}

impl<'a> UI<'a> {
    pub fn new(app: &'a mut App) -> Self {
        app.info_msg("Press '?' for help");
        UI {
            app,
            input_mode: InputMode::Normal,
            paste_area: TextArea::default(),
            path_editor: LineEditor::new(),
            length_editor: LineEditor::from_text("50000"),
            results_scroll: 0,
            input_pane_height: None,
        }
    }

    pub fn app(&self) -> &App {
        &*self.app
    }

    pub fn mode(&self) -> SourceMode {
        self.app.mode()
    }

    pub fn is_editing(&self) -> bool {
        self.input_mode == InputMode::Editing
    }

    pub fn is_showing_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn paste_text(&self) -> String {
        self.paste_area.text()
    }

    pub fn path_text(&self) -> String {
        self.path_editor.text()
    }

    pub fn length_text(&self) -> String {
        self.length_editor.text()
    }

    pub fn show_error(&mut self, msg: impl Into<String>) {
        self.app.error_msg(msg);
    }

    pub fn results_scroll(&self) -> u16 {
        self.results_scroll
    }

    // ****************************************************************
    // Mode selection

    pub fn select_mode(&mut self, mode: SourceMode) {
        debug!("Selecting mode {:?}", mode);
        self.app.set_mode(mode);
        self.app.clear_msg();
    }

    pub fn next_mode(&mut self) {
        self.select_mode(self.app.mode().next());
    }

    pub fn prev_mode(&mut self) {
        self.select_mode(self.app.mode().prev());
    }

    // ****************************************************************
    // Submission: hands the current input over to the app. Returns true on success, in which
    // case editing ends; on failure the input is kept for correction.

    pub fn submit(&mut self) -> bool {
        let ok = match self.app.mode() {
            SourceMode::Manual => {
                if self.paste_area.is_blank() {
                    self.app.warning_msg("Nothing to analyze: paste FASTA text first");
                    false
                } else {
                    let text = self.paste_area.text();
                    self.app.analyze_text(&text)
                }
            }
            SourceMode::File => {
                let path = self.path_editor.text();
                self.app.analyze_file(&path)
            }
            SourceMode::Random => {
                let length = self.length_editor.text();
                self.app.generate_random(&length)
            }
        };
        if ok {
            self.results_scroll = 0;
        }
        ok
    }

    // ****************************************************************
    // Scrolling (results pane)

    pub fn scroll_results_down(&mut self, count: u16) {
        let max = self.max_results_scroll();
        self.results_scroll = self.results_scroll.saturating_add(count).min(max);
    }

    pub fn scroll_results_up(&mut self, count: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(count);
    }

    // Each result takes two lines (header, percentage).
    fn max_results_scroll(&self) -> u16 {
        let nb_lines = self.app.results().len().saturating_mul(2);
        u16::try_from(nb_lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    // ****************************************************************
    // Export

    pub fn export_prompt_text(&self) -> String {
        match &self.input_mode {
            InputMode::ExportFasta { editor } | InputMode::ConfirmOverwrite { editor, .. } => {
                editor.text()
            }
            _ => String::new(),
        }
    }
}
