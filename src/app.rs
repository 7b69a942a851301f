// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::Path;

use log::{info, warn};
use rand::Rng;

use crate::{
    config::GcConfig,
    errors::GcError,
    gc::{analyze, GcResult},
    seq::{
        collection::SeqCollection,
        fasta::{parse_fasta_str, read_fasta_file, write_fasta_file},
        random::{parse_length, RandomSequenceGenerator},
        record::SeqRecord,
    },
    source::SourceMode,
};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, PartialEq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
    Argument,
}

// Simple, 1-line message (possibly just "")
pub struct CurrentMessage {
    pub prefix: String,
    pub message: String,
    pub kind: MessageKind,
}

// State of the form variant: which source is selected, the latest results, and the latest
// generated sequence (kept so that it can be saved).
pub struct App {
    config: GcConfig,
    generator: RandomSequenceGenerator,
    mode: SourceMode,
    results: Vec<GcResult>,
    results_origin: Option<String>,
    generated: Option<SeqRecord>,
    current_msg: CurrentMessage,
}

impl App {
    pub fn new(config: GcConfig) -> Self {
        let generator = RandomSequenceGenerator::new(config.seed);
        App {
            config,
            generator,
            mode: SourceMode::Manual,
            results: Vec::new(),
            results_origin: None,
            generated: None,
            current_msg: CurrentMessage {
                prefix: String::from(""),
                message: String::from(""),
                kind: MessageKind::Info,
            },
        }
    }

    pub fn config(&self) -> &GcConfig {
        &self.config
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SourceMode) {
        self.mode = mode;
    }

    pub fn next_mode(&mut self) {
        self.mode = self.mode.next();
    }

    pub fn prev_mode(&mut self) {
        self.mode = self.mode.prev();
    }

    pub fn results(&self) -> &[GcResult] {
        &self.results
    }

    pub fn results_origin(&self) -> Option<&str> {
        self.results_origin.as_deref()
    }

    pub fn generated(&self) -> Option<&SeqRecord> {
        self.generated.as_ref()
    }

    fn show_collection(&mut self, collection: &SeqCollection, origin: String) {
        self.results = analyze(collection);
        info!("{} record(s) analyzed from {}", self.results.len(), origin);
        self.info_msg(format!(
            "{} sequence(s) analyzed from {}",
            self.results.len(),
            origin
        ));
        self.results_origin = Some(origin);
    }

    // The three acquisition modes. Each returns true on success; on failure the error is shown
    // in the message line and earlier results are kept, so the user can just correct the input.

    pub fn analyze_text(&mut self, text: &str) -> bool {
        match parse_fasta_str(text, self.config.duplicate_headers) {
            Ok(collection) => {
                self.show_collection(&collection, String::from("pasted text"));
                true
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    pub fn analyze_file(&mut self, path: &str) -> bool {
        let path = path.trim();
        match read_fasta_file(path, self.config.duplicate_headers) {
            Ok(collection) => {
                self.show_collection(&collection, path.to_string());
                true
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    pub fn generate_random(&mut self, length_text: &str) -> bool {
        self.generate_random_with(length_text, &mut rand::rng())
    }

    pub fn generate_random_with<G: Rng + ?Sized>(
        &mut self,
        length_text: &str,
        label_rng: &mut G,
    ) -> bool {
        match parse_length(length_text) {
            Ok(length) => {
                let record = self.generator.generate(length, label_rng);
                let collection = SeqCollection::single(record.clone());
                self.show_collection(&collection, String::from("random generator"));
                self.info_msg(format!(
                    "Generated {} ({} bases) - press 's' to save it",
                    record.header,
                    record.len()
                ));
                self.generated = Some(record);
                true
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    pub fn save_generated(&mut self, path: &Path) -> Result<(), GcError> {
        let Some(record) = &self.generated else {
            return Err(GcError::EmptyInput);
        };
        write_fasta_file(path, record, self.config.wrap_width)?;
        let msg = format!("Saved {} to {}", record.header, path.display());
        self.info_msg(msg);
        Ok(())
    }

    fn report_error(&mut self, err: &GcError) {
        warn!("{}", err);
        self.error_msg(err.to_string());
    }

    // Messages

    pub fn current_message(&self) -> &CurrentMessage {
        &self.current_msg
    }

    pub fn clear_msg(&mut self) {
        self.current_msg = CurrentMessage {
            prefix: String::from(""),
            message: String::from(""),
            kind: MessageKind::Info,
        }
    }

    pub fn info_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from(""),
            message: msg.into(),
            kind: MessageKind::Info,
        };
    }

    pub fn warning_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from("WARNING: "),
            message: msg.into(),
            kind: MessageKind::Warning,
        };
    }

    pub fn error_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from("ERROR: "),
            message: msg.into(),
            kind: MessageKind::Error,
        };
    }

    pub fn argument_msg(&mut self, pfx: impl Into<String>, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: pfx.into(),
            message: msg.into(),
            kind: MessageKind::Argument,
        };
    }
}
