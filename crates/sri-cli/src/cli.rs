use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sri_core::models::session::AssessmentMode;
use sri_instruments::i18n::Locale;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "sri",
    about = "Score and manage Sexual Repression Index assessments",
    version
)]
pub struct Cli {
    /// Data directory holding progress, archived sessions and config.json
    #[arg(long, global = true, default_value = "sri-data")]
    pub data_dir: PathBuf,
    /// Config file to use instead of {data-dir}/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Language for scale text, narrative and reports
    #[arg(long, global = true, value_enum, default_value_t = LocaleArg::Zh)]
    pub locale: LocaleArg,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the registered scales
    Scales {
        /// Print every question of each scale
        #[arg(long)]
        questions: bool,
    },
    /// Show which scales an answer file's respondent would get
    Select {
        /// Answer file; only `type` and `demographics` are read
        input: PathBuf,
    },
    /// Score an answer file, archive the session and print the report
    Score(ScoreArgs),
    /// Inspect or manage saved in-progress answers
    Progress {
        #[command(subcommand)]
        command: ProgressCommand,
    },
    /// Browse and manage archived sessions
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Render the report of an archived session
    Report {
        id: Uuid,
        /// Tera template to render instead of the built-in report
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Print a share token for an archived session
    Share { id: Uuid },
    /// Decode a share token
    Decode { token: String },
    /// Write the default config to {data-dir}/config.json or --config
    InitConfig,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Answer file (`{type, demographics, responses}`)
    pub input: PathBuf,
    /// Merge with saved progress for the same mode before scoring
    #[arg(long)]
    pub resume: bool,
    /// Print the results as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
    /// Do not write the session to the archive
    #[arg(long)]
    pub no_archive: bool,
}

#[derive(Subcommand, Debug)]
pub enum ProgressCommand {
    /// Save an answer file as in-progress answers
    Save { input: PathBuf },
    /// Show saved progress for a mode and where to resume
    Show {
        #[arg(long, value_enum, default_value_t = ModeArg::Full)]
        mode: ModeArg,
    },
    /// Discard saved progress
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List archived sessions, most recent first
    List,
    /// Print one archived session as JSON
    Show { id: Uuid },
    /// Delete one archived session
    Delete { id: Uuid },
    /// Delete every archived session
    Clear {
        /// Required; clearing cannot be undone
        #[arg(long)]
        yes: bool,
    },
    /// Totals across the archive
    Stats,
    /// Export every archived session
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleArg {
    Zh,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Zh => Locale::Zh,
            LocaleArg::En => Locale::En,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Quick,
    Full,
}

impl From<ModeArg> for AssessmentMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Quick => AssessmentMode::Quick,
            ModeArg::Full => AssessmentMode::Full,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}
