use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info_span;

use lead_cli::intake::{IntakeResult, ingest_sources, resolve_sources, retain_min_score};
use lead_ingest::{SchemaRule, Scrubber};
use lead_model::{IngestOptions, NormalizedRecord};

use crate::cli::IngestArgs;
use crate::summary::apply_table_style;

pub fn run_schemas() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "Applies when"]);
    apply_table_style(&mut table);
    for (position, rule) in SchemaRule::ALL.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            rule.label().to_string(),
            rule.condition().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_ingest(args: &IngestArgs) -> Result<IntakeResult> {
    let span = info_span!("ingest", source = %args.source.display());
    let _guard = span.enter();
    let started = Instant::now();

    let options = match &args.config {
        Some(path) => IngestOptions::load(path)
            .with_context(|| format!("load options from {}", path.display()))?,
        None => IngestOptions::default(),
    };
    let scrubber = Scrubber::new(&options.scrub);

    let descriptors = resolve_sources(&args.source, &scrubber)
        .with_context(|| format!("resolve sources from {}", args.source.display()))?;

    let progress = progress_bar(descriptors.len() as u64, args.no_progress)?;
    let mut result = ingest_sources(&descriptors, &scrubber, |descriptor| {
        progress.set_message(descriptor.filename.clone());
        progress.inc(1);
    });
    progress.finish_and_clear();

    retain_min_score(&mut result.records, args.min_score);

    if let Some(path) = &args.output {
        write_records(path, &result.records)
            .with_context(|| format!("write records to {}", path.display()))?;
    }

    tracing::info!(
        records = result.records.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "ingest finished"
    );
    Ok(result)
}

fn progress_bar(len: u64, disabled: bool) -> Result<ProgressBar> {
    if disabled || !io::stderr().is_terminal() {
        return Ok(ProgressBar::hidden());
    }
    let style = ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {wide_msg}")
        .context("progress bar template")?
        .progress_chars("=> ");
    Ok(ProgressBar::new(len).with_style(style))
}

fn write_records(path: &Path, records: &[NormalizedRecord]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
