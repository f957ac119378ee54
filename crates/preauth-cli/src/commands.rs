use std::sync::Arc;

use eyre::{Result, WrapErr};
use preauth_export::csv::{write_anomalies_file, write_responses_file};
use preauth_export::review::write_review_file;
use preauth_rules::engine::{Engine, EngineOptions};

use crate::cli::{GenerateArgs, LexiconArgs};
use crate::config;

pub fn generate(args: &GenerateArgs) -> Result<()> {
    let lexicon = config::load_lexicon(args.lexicon.as_deref())?;
    let engine = Engine::new(
        Arc::new(lexicon),
        EngineOptions {
            code_suffix_laterality: args.code_suffix_laterality,
        },
    )?;

    let records = preauth_ingest::read_path(&args.input)
        .wrap_err_with(|| format!("failed to load intake file {}", args.input.display()))?;
    println!("Loaded {} patient records", records.len());

    let outcome = engine.evaluate_batch(&records);
    let flagged = outcome.review_queue().count();
    let (responses, reports) = outcome.into_parts();

    write_responses_file(&args.output, &responses)?;
    if let Some(path) = &args.anomalies {
        write_anomalies_file(path, &reports)?;
    }
    if let Some(path) = &args.review {
        write_review_file(path, &reports)?;
    }

    println!(
        "Wrote {} PA responses to {} ({flagged} flagged for review)",
        responses.len(),
        args.output.display()
    );
    Ok(())
}

pub fn print_lexicon(args: &LexiconArgs) -> Result<()> {
    let lexicon = config::load_lexicon(args.lexicon.as_deref())?;
    println!("{}", lexicon.to_json_pretty()?);
    Ok(())
}
