//! Sequential action pipeline.
//!
//! Stages run in a fixed order and publish their outputs as soon as they are
//! computed. The first failing stage ends the run.
use crate::config::ActionConfig;
use crate::error::{ActionError, Stage, StageFailure};
use crate::file::append_to_file;
use crate::numbers::{aggregate, format_number, NumberSummary};
use crate::output::OutputSink;
use crate::probe::{check_reachable, ProbeOptions, ProbeOutcome};
use crate::text::{process_text, TextSummary};
use std::time::{Duration, Instant};

/// Values computed by a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub text: TextSummary,
    pub numbers: NumberSummary,
    pub probe: ProbeOutcome,
    pub elapsed: Duration,
}

/// Run every stage against `config`, writing outputs to `sink`.
pub fn run_action(
    config: &ActionConfig,
    sink: &mut dyn OutputSink,
    options: &ProbeOptions,
) -> Result<RunReport, StageFailure> {
    let start = Instant::now();

    let text = run_text(config, sink).map_err(|err| StageFailure::new(Stage::Text, err))?;
    let numbers =
        run_numbers(config, sink).map_err(|err| StageFailure::new(Stage::Numbers, err))?;
    append_to_file(&config.input_file, &config.output_file, &config.append_text)
        .map_err(|err| StageFailure::new(Stage::File, err))?;
    let probe =
        run_probe(config, sink, options).map_err(|err| StageFailure::new(Stage::Api, err))?;

    let elapsed = start.elapsed();
    tracing::info!(
        word_count = text.word_count,
        numbers = config.number_list.len(),
        status = probe.status,
        elapsed_ms = elapsed.as_millis(),
        "action complete"
    );
    Ok(RunReport {
        text,
        numbers,
        probe,
        elapsed,
    })
}

fn run_text(
    config: &ActionConfig,
    sink: &mut dyn OutputSink,
) -> Result<TextSummary, ActionError> {
    let summary = process_text(&config.input_text, &config.find_word, &config.replace_word);
    sink.set_output("processed_text", &summary.processed)?;
    sink.set_output("word_count", &summary.word_count.to_string())?;
    Ok(summary)
}

fn run_numbers(
    config: &ActionConfig,
    sink: &mut dyn OutputSink,
) -> Result<NumberSummary, ActionError> {
    let summary = aggregate(&config.number_list);
    if config.number_list.is_empty() {
        tracing::warn!("number_list is empty; average is NaN");
    }
    sink.set_output("sum", &format_number(summary.sum))?;
    sink.set_output("average", &format_number(summary.average))?;
    Ok(summary)
}

fn run_probe(
    config: &ActionConfig,
    sink: &mut dyn OutputSink,
    options: &ProbeOptions,
) -> Result<ProbeOutcome, ActionError> {
    let options = ProbeOptions {
        response_key: config
            .response_key
            .clone()
            .or_else(|| options.response_key.clone()),
        ..options.clone()
    };
    let outcome = check_reachable(&config.api_url, &options)?;
    sink.set_output("response_field", &outcome.response_field)?;
    Ok(outcome)
}
