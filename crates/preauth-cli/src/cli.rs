use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "preauth", version)]
#[command(about = "Generate physical-therapy prior-authorization answers from patient intake data")]
pub struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer the PA form for every record in an intake file
    Generate(GenerateArgs),
    /// Print the lexicon in use as JSON
    Lexicon(LexiconArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Intake file (.csv or .json)
    #[arg(long, short)]
    pub input: PathBuf,

    /// Where to write the PA response CSV
    #[arg(long, short, default_value = "pa_responses.csv")]
    pub output: PathBuf,

    /// Also write flagged records as CSV
    #[arg(long)]
    pub anomalies: Option<PathBuf>,

    /// Also write a Markdown review report
    #[arg(long)]
    pub review: Option<PathBuf>,

    /// Lexicon JSON file (defaults to the built-in table)
    #[arg(long, env = "PREAUTH_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Read laterality from the diagnosis code's last character when its
    /// fifth character is not a digit
    #[arg(long)]
    pub code_suffix_laterality: bool,
}

#[derive(Debug, Args)]
pub struct LexiconArgs {
    /// Lexicon JSON file to load, migrate and print
    #[arg(long, env = "PREAUTH_LEXICON")]
    pub lexicon: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_arguments() {
        let cli = Cli::try_parse_from([
            "preauth",
            "generate",
            "--input",
            "intake.csv",
            "--anomalies",
            "flagged.csv",
            "--code-suffix-laterality",
            "--log-json",
        ])
        .unwrap();

        assert!(cli.log_json);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.input, PathBuf::from("intake.csv"));
        assert_eq!(args.output, PathBuf::from("pa_responses.csv"));
        assert_eq!(args.anomalies, Some(PathBuf::from("flagged.csv")));
        assert_eq!(args.review, None);
        assert!(args.code_suffix_laterality);
    }

    #[test]
    fn generate_requires_input() {
        assert!(Cli::try_parse_from(["preauth", "generate"]).is_err());
    }
}
