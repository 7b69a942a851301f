// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::errors::GcError;
use crate::seq::alphabet::check_alphabet;
use crate::seq::collection::{DuplicatePolicy, SeqCollection};
use crate::seq::record::{SeqRecord, RECORD_DELIMITER};

/// Largest FASTA file accepted (uncompressed): 1 GiB.
pub const FILE_SIZE_LIMIT: u64 = 1024 * 1024 * 1024;

/// Conventional FASTA line width, used when showing or writing sequences.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

pub fn check_file_size(size: u64) -> Result<(), GcError> {
    if size > FILE_SIZE_LIMIT {
        Err(GcError::SizeLimit {
            size,
            limit: FILE_SIZE_LIMIT,
        })
    } else {
        Ok(())
    }
}

/// Loads every record of a FASTA file.
///
/// The path must name an existing file no larger than [`FILE_SIZE_LIMIT`]; both are checked
/// before any byte is read. The first invalid record aborts the whole load.
pub fn read_fasta_file<P: AsRef<Path>>(
    path: P,
    policy: DuplicatePolicy,
) -> Result<SeqCollection, GcError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(GcError::FileNotFound(path.to_path_buf()));
    }
    let size = fs::metadata(path)?.len();
    debug!("{}: {} bytes", path.display(), size);
    check_file_size(size)?;

    let file = File::open(path)?;
    let collection = read_fasta(BufReader::new(file), policy)?;
    info!(
        "Read {} record(s) from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

/// Parses FASTA text, e.g. a pasted block.
pub fn parse_fasta_str(text: &str, policy: DuplicatePolicy) -> Result<SeqCollection, GcError> {
    read_fasta(Cursor::new(text), policy)
}

/// Streams FASTA records from `reader`.
///
/// Lines are trimmed and blank lines skipped. A header line flushes the record being
/// accumulated; any other line is appended (upper-cased) to the current record's bases. A
/// header followed by no sequence lines gives a record with empty bases.
pub fn read_fasta<R: BufRead>(reader: R, policy: DuplicatePolicy) -> Result<SeqCollection, GcError> {
    let mut collection = SeqCollection::new(policy);
    let mut current: Option<(String, String)> = None;

    for (linenum, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(RECORD_DELIMITER) {
            if let Some((header, bases)) = current.take() {
                flush_record(&mut collection, header, bases)?;
            }
            current = Some((line.to_string(), String::new()));
        } else {
            match current.as_mut() {
                Some((_, bases)) => bases.push_str(&line.to_ascii_uppercase()),
                None => {
                    return Err(GcError::InvalidHeader(format!(
                        "line {} holds sequence data before any header",
                        linenum + 1
                    )))
                }
            }
        }
    }
    if let Some((header, bases)) = current.take() {
        flush_record(&mut collection, header, bases)?;
    }

    if collection.is_empty() {
        return Err(GcError::EmptyInput);
    }
    Ok(collection)
}

fn flush_record(
    collection: &mut SeqCollection,
    header: String,
    bases: String,
) -> Result<(), GcError> {
    check_alphabet(&header, &bases)?;
    if bases.is_empty() {
        warn!("{} has no sequence lines; its GC content is reported as 0", header);
    }
    collection.insert(SeqRecord::new(header, bases))
}

/// Splits a sequence into lines of at most `width` characters. Purely presentational.
pub fn wrap_lines(sequence: &str, width: usize) -> impl Iterator<Item = &str> {
    let width = width.max(1);
    let mut rest = sequence;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let split = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(idx, _)| idx);
        let (line, tail) = rest.split_at(split);
        rest = tail;
        Some(line)
    })
}

pub fn write_fasta<W: Write>(writer: &mut W, record: &SeqRecord, width: usize) -> Result<(), GcError> {
    writeln!(writer, "{}", record.header)?;
    for line in wrap_lines(&record.sequence, width) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

pub fn write_fasta_file<P: AsRef<Path>>(
    path: P,
    record: &SeqRecord,
    width: usize,
) -> Result<(), GcError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_fasta(&mut writer, record, width)?;
    writer.flush()?;
    info!("Wrote {} to {}", record.header, path.display());
    Ok(())
}
