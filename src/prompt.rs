// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// The sequential console protocol: choose a mode, answer that mode's prompts, get the report.
// Every recoverable error is printed and the same question is asked again.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use log::{debug, info};
use rand::Rng;

use crate::config::GcConfig;
use crate::errors::GcError;
use crate::gc::{analyze, GcResult};
use crate::report::{write_generated_preview, write_report, ReportFormat};
use crate::seq::{
    collection::SeqCollection,
    fasta::{read_fasta_file, write_fasta_file},
    random::{parse_length, RandomSequenceGenerator},
    record::SeqRecord,
};
use crate::source::{check_header, manual_record, SourceMode};

pub struct Console<R, W> {
    input: R,
    output: W,
    config: GcConfig,
    generator: RandomSequenceGenerator,
    format: ReportFormat,
    save_random: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: GcConfig) -> Self {
        let generator = RandomSequenceGenerator::new(config.seed);
        Console {
            input,
            output,
            config,
            generator,
            format: ReportFormat::Text,
            save_random: None,
        }
    }

    pub fn set_format(&mut self, format: ReportFormat) {
        self.format = format;
    }

    pub fn set_save_random(&mut self, path: Option<PathBuf>) {
        self.save_random = path;
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // None at end of input. The line terminator is removed.
    fn read_line(&mut self) -> Result<Option<String>, GcError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GcError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()?.ok_or(GcError::EndOfInput)
    }

    fn report_error(&mut self, err: &GcError, advice: &str) -> Result<(), GcError> {
        debug!("Recoverable error: {:?}", err);
        writeln!(self.output, "\nError: {}\n{}\n", err, advice)?;
        Ok(())
    }

    pub fn choose_mode(&mut self) -> Result<SourceMode, GcError> {
        loop {
            writeln!(self.output, "Choose an option:")?;
            for mode in SourceMode::ALL {
                writeln!(self.output, "{}) {}", mode.key(), mode.menu_entry())?;
            }
            let answer = self.ask("Enter A, B, or C: ")?;
            match answer.parse::<SourceMode>() {
                Ok(mode) => {
                    info!("Mode: {:?}", mode);
                    return Ok(mode);
                }
                Err(e) => writeln!(self.output, "{}\n", e)?,
            }
        }
    }

    pub fn manual_entry(&mut self) -> Result<SeqRecord, GcError> {
        loop {
            writeln!(self.output, "\nEnter your DNA sequence in FASTA format (example):")?;
            writeln!(self.output, ">CD28_Human")?;
            writeln!(self.output, "ATGGCTAGCTAGCTACGATCGATCGTACGTAGCTAGCTAGCTAGC")?;
            writeln!(self.output, "TGACTGACTGACTGACTGACTGACTGACTGACTGACTGACTGAC")?;
            writeln!(self.output, "Note: Press Enter on an empty line when you're done.")?;

            let header = self.ask("Header line (must start with '>'): ")?;
            if let Err(e) = check_header(&header) {
                self.report_error(&e, "Please re-enter your sequence.")?;
                continue;
            }
            let mut lines: Vec<String> = Vec::new();
            while let Some(line) = self.read_line()? {
                if line.trim().is_empty() {
                    break;
                }
                lines.push(line);
            }
            match manual_record(&header, &lines) {
                Ok(record) => return Ok(record),
                Err(e) if e.is_recoverable() => {
                    self.report_error(&e, "Please re-enter your sequence.")?
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn load_file(&mut self) -> Result<SeqCollection, GcError> {
        loop {
            let path = self.ask("Enter the path to the FASTA file (max 1GB): ")?;
            match read_fasta_file(path.trim(), self.config.duplicate_headers) {
                Ok(collection) => return Ok(collection),
                // Failing reads (e.g. a binary file) are also worth another try with a
                // different path.
                Err(e) => self.report_error(&e, "Please try again.")?,
            }
        }
    }

    pub fn random_sequence<G: Rng + ?Sized>(
        &mut self,
        label_rng: &mut G,
    ) -> Result<SeqRecord, GcError> {
        let length = loop {
            let answer =
                self.ask("Enter desired DNA sequence length (50,000 to 1,000,000,000 bases): ")?;
            match parse_length(&answer) {
                Ok(length) => break length,
                Err(e) => self.report_error(&e, "Please enter a valid integer.")?,
            }
        };
        let record = self.generator.generate(length, label_rng);
        write_generated_preview(
            &mut self.output,
            &record,
            self.config.wrap_width,
            self.config.preview_lines,
        )?;
        if let Some(path) = self.save_random.clone() {
            match write_fasta_file(&path, &record, self.config.wrap_width) {
                Ok(()) => writeln!(self.output, "Saved generated FASTA to {}", path.display())?,
                Err(e) => writeln!(self.output, "Error: could not save {}: {}", path.display(), e)?,
            }
        }
        Ok(record)
    }

    pub fn report(&mut self, results: &[GcResult]) -> Result<(), GcError> {
        if self.format == ReportFormat::Text {
            writeln!(self.output)?;
        }
        write_report(&mut self.output, results, self.format)?;
        self.output.flush()?;
        Ok(())
    }

    /// One complete interactive session. Returns the reported results.
    pub fn run_session(&mut self) -> Result<Vec<GcResult>, GcError> {
        let collection = match self.choose_mode()? {
            SourceMode::Manual => SeqCollection::single(self.manual_entry()?),
            SourceMode::File => self.load_file()?,
            SourceMode::Random => SeqCollection::single(self.random_sequence(&mut rand::rng())?),
        };
        let results = analyze(&collection);
        self.report(&results)?;
        Ok(results)
    }
}
