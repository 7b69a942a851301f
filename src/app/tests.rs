use super::{App, MessageKind};
use crate::{config::GcConfig, seq::collection::DuplicatePolicy, source::SourceMode};
use approx::assert_relative_eq;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro256PlusPlus};

#[test]
fn test_mode_cycle_00() {
    let mut app = App::new(GcConfig::default());
    assert_eq!(app.mode(), SourceMode::Manual);
    app.next_mode();
    assert_eq!(app.mode(), SourceMode::File);
    app.next_mode();
    assert_eq!(app.mode(), SourceMode::Random);
    app.next_mode();
    assert_eq!(app.mode(), SourceMode::Manual);
    app.prev_mode();
    assert_eq!(app.mode(), SourceMode::Random);
}

#[test]
fn test_analyze_text_00() {
    let mut app = App::new(GcConfig::default());
    assert!(app.analyze_text(">A\nGGCC\n\n>B\nATAT\n"));
    let results = app.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].header, ">A");
    assert_relative_eq!(results[0].gc_content, 100.0);
    assert_eq!(results[1].header, ">B");
    assert_relative_eq!(results[1].gc_content, 0.0);
    assert_eq!(app.results_origin(), Some("pasted text"));
    assert_eq!(app.current_message().kind, MessageKind::Info);
}

#[test]
fn test_analyze_text_error_keeps_results() {
    let mut app = App::new(GcConfig::default());
    assert!(app.analyze_text(">X\nATCG\n"));
    assert!(!app.analyze_text(">Y\nATQG\n"));
    assert_eq!(app.results().len(), 1);
    assert_eq!(app.results()[0].header, ">X");
    let msg = app.current_message();
    assert_eq!(msg.kind, MessageKind::Error);
    assert!(msg.message.contains("'Q'"));
}

#[test]
fn test_analyze_text_reject_duplicates() {
    let config = GcConfig {
        duplicate_headers: DuplicatePolicy::Reject,
        ..GcConfig::default()
    };
    let mut app = App::new(config);
    assert!(!app.analyze_text(">A\nGG\n>A\nCC\n"));
    assert!(app.current_message().message.contains("Duplicate FASTA header"));
}

#[test]
fn test_analyze_file_00() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.fa");
    std::fs::write(&path, ">e\n>f\nGCGC\n").unwrap();
    let mut app = App::new(GcConfig::default());
    assert!(app.analyze_file(&format!("  {}  ", path.display())));
    assert_eq!(app.results().len(), 2);
    assert_eq!(app.results()[0].length, 0);
    assert_eq!(app.results()[0].gc_content, 0.0);
    assert_relative_eq!(app.results()[1].gc_content, 100.0);
}

#[test]
fn test_analyze_missing_file() {
    let mut app = App::new(GcConfig::default());
    assert!(!app.analyze_file("/no/such/file.fasta"));
    assert_eq!(app.current_message().kind, MessageKind::Error);
    assert!(app.current_message().message.contains("not found"));
}

#[test]
fn test_generate_and_save() {
    let mut app = App::new(GcConfig::default());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    assert!(!app.generate_random_with("1000", &mut rng));
    assert!(app.generated().is_none());

    assert!(app.generate_random_with("50,000", &mut rng));
    let record = app.generated().unwrap().clone();
    assert_eq!(record.len(), 50_000);
    assert_eq!(app.results().len(), 1);
    assert_eq!(app.results()[0].header, record.header);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("random_sequence.fasta");
    app.save_generated(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(record.header.as_str()));
    let body: Vec<&str> = lines.collect();
    assert!(body.iter().all(|l| l.len() <= 80));
    assert_eq!(body.concat(), record.sequence);
}

#[test]
fn test_generated_bases_reproducible() {
    let mut app1 = App::new(GcConfig::default());
    let mut app2 = App::new(GcConfig::default());
    assert!(app1.generate_random("50000"));
    assert!(app2.generate_random("50000"));
    assert_eq!(
        app1.generated().unwrap().sequence,
        app2.generated().unwrap().sequence
    );
}
