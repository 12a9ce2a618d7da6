use std::path::Path;

use eyre::{Result, WrapErr, bail, eyre};
use jiff::Timestamp;
use sri_assessment::assessment::Assessment;
use sri_assessment::coordinator::Coordinator;
use sri_cli::input::AnswerFile;
use sri_cli::workspace::DataDir;
use sri_core::config::{SriConfig, save_config};
use sri_core::models::session::AssessmentMode;
use sri_export::export::{export_all_csv, export_all_json};
use sri_export::render::{render_report, render_template};
use sri_export::share::{self, ShareSummary};
use sri_instruments::all_scales;
use sri_instruments::i18n::{Locale, localize_scale};
use sri_instruments::selector::{covered_dimensions, describe_group, select_scales};
use sri_scoring::engine::Scorer;
use sri_storage::FlushOutcome;
use sri_storage::archive::SessionArchive;
use sri_storage::file::FileStore;
use sri_storage::progress::ProgressTracker;
use uuid::Uuid;

use crate::cli::{Cli, Command, ExportFormat, HistoryCommand, ProgressCommand, ScoreArgs};

struct Ctx {
    data_dir: DataDir,
    config: SriConfig,
    locale: Locale,
}

impl Ctx {
    fn coordinator(&self) -> Coordinator<FileStore, FileStore> {
        Coordinator::new(
            self.config.progress.clone(),
            self.data_dir.progress_store(),
            self.data_dir.archive_store(),
        )
    }

    fn archive(&self) -> SessionArchive<FileStore> {
        SessionArchive::new(self.data_dir.archive_store())
    }

    fn tracker(&self) -> ProgressTracker<FileStore> {
        ProgressTracker::from_config(self.data_dir.progress_store(), &self.config.progress)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = DataDir::new(&cli.data_dir);

    if let Command::InitConfig = cli.command {
        let path = cli.config.clone().unwrap_or_else(|| data_dir.config_path());
        save_config(&path, &SriConfig::default())
            .wrap_err_with(|| format!("failed to write config to {}", path.display()))?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = data_dir
        .load_config(cli.config.as_deref())
        .wrap_err("failed to load config")?;
    let ctx = Ctx {
        data_dir,
        config,
        locale: cli.locale.into(),
    };

    match cli.command {
        Command::Scales { questions } => list_scales(&ctx, questions),
        Command::Select { input } => select(&ctx, &input),
        Command::Score(args) => score(&ctx, &args),
        Command::Progress { command } => progress(&ctx, command),
        Command::History { command } => history(&ctx, command),
        Command::Report { id, template } => report(&ctx, id, template.as_deref()),
        Command::Share { id } => share_token(&ctx, id),
        Command::Decode { token } => decode(&token),
        Command::InitConfig => Ok(()),
    }
}

fn read_answer_file(path: &Path) -> Result<AnswerFile> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    AnswerFile::parse(&contents).wrap_err_with(|| format!("invalid answer file {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn list_scales(ctx: &Ctx, questions: bool) -> Result<()> {
    for scale in all_scales() {
        let localized = localize_scale(scale.id(), ctx.locale)
            .ok_or_else(|| eyre!("scale {} is not registered", scale.id()))?;
        let feeds: Vec<String> = scale
            .weights()
            .iter()
            .map(|w| format!("{}×{}", w.dimension.key(), w.weight))
            .collect();
        println!(
            "{:<22} {:<28} {:>2} items  {}",
            localized.id,
            localized.name,
            localized.questions.len(),
            feeds.join(", ")
        );
        if questions {
            for q in &localized.questions {
                let marker = if q.reverse { " (R)" } else { "" };
                println!("    {:<12} {}{marker}", q.id, q.text);
            }
        }
    }
    Ok(())
}

fn select(ctx: &Ctx, input: &Path) -> Result<()> {
    let file = read_answer_file(input)?;
    let ids = select_scales(&file.demographics, file.mode);
    println!("{}", describe_group(&file.demographics, ctx.locale));
    for id in &ids {
        println!("  {id}");
    }
    let dimensions: Vec<&str> = covered_dimensions(&ids).iter().map(|d| d.key()).collect();
    println!("covers: {}", dimensions.join(", "));
    Ok(())
}

fn score(ctx: &Ctx, args: &ScoreArgs) -> Result<()> {
    let file = read_answer_file(&args.input)?;
    let scorer = Scorer::new(&ctx.config)?;
    let now = Timestamp::now();
    let mut coordinator = ctx.coordinator();

    let mut assessment = if args.resume {
        let (assessment, resumed) = coordinator.start(file.mode, file.demographics, now);
        if resumed {
            tracing::info!("merged saved progress");
        }
        assessment
    } else {
        Assessment::begin_at(file.mode, file.demographics, &ctx.config.progress, now)
    };
    file.apply(&mut assessment, now)?;

    let session = if args.no_archive {
        assessment.finalize_at(&scorer, ctx.locale, now)?
    } else {
        coordinator.complete(assessment, &scorer, ctx.locale, now)?
    };

    if args.json {
        print_json(&session.results)
    } else {
        print!("{}", render_report(&session, ctx.locale)?);
        Ok(())
    }
}

fn progress(ctx: &Ctx, command: ProgressCommand) -> Result<()> {
    match command {
        ProgressCommand::Save { input } => {
            let file = read_answer_file(&input)?;
            let now = Timestamp::now();
            let mut coordinator = ctx.coordinator();
            let (mut assessment, _) = coordinator.start(file.mode, file.demographics, now);
            for (question_id, value) in &file.responses {
                coordinator.answer(&mut assessment, question_id, *value, now)?;
            }
            if let Some(page) = file.current_page {
                coordinator.set_page(&mut assessment, page, now)?;
            }
            if let FlushOutcome::MemoryOnly(e) = coordinator.flush() {
                bail!("failed to save progress: {e}");
            }
            print_json(&assessment.stats())
        }
        ProgressCommand::Show { mode } => {
            let mode: AssessmentMode = mode.into();
            let Some(snapshot) = ctx.tracker().restore(mode) else {
                println!("no saved progress for {} mode", mode.as_str());
                return Ok(());
            };
            let assessment = Assessment::resume(snapshot, &ctx.config.progress);
            print_json(&serde_json::json!({
                "type": mode,
                "stats": assessment.stats(),
                "currentPage": assessment.current_page(),
                "pageCount": assessment.page_count(),
                "resumeAt": assessment.resume_target(),
            }))
        }
        ProgressCommand::Clear => {
            ctx.tracker().clear()?;
            Ok(())
        }
    }
}

fn history(ctx: &Ctx, command: HistoryCommand) -> Result<()> {
    let mut archive = ctx.archive();
    match command {
        HistoryCommand::List => {
            for session in archive.list() {
                let score = session
                    .results
                    .as_ref()
                    .map(|r| format!("{:.1} {}", r.sri.total_score, r.sri.level.key()))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}  {:<5}  {}  {}",
                    session.id,
                    session.mode.as_str(),
                    session.start_time,
                    score
                );
            }
            Ok(())
        }
        HistoryCommand::Show { id } => {
            let session = archive
                .get(id)
                .ok_or_else(|| eyre!("no archived session {id}"))?;
            print_json(&session)
        }
        HistoryCommand::Delete { id } => {
            if !archive.delete(id)? {
                bail!("no archived session {id}");
            }
            Ok(())
        }
        HistoryCommand::Clear { yes } => {
            if !yes {
                bail!("refusing to clear the archive without --yes");
            }
            let removed = archive.clear_all()?;
            println!("removed {removed} session(s)");
            Ok(())
        }
        HistoryCommand::Stats => print_json(&archive.stats()),
        HistoryCommand::Export { format, out } => {
            let sessions = archive.list();
            let body = match format {
                ExportFormat::Json => export_all_json(&sessions)?,
                ExportFormat::Csv => export_all_csv(&sessions)?,
            };
            match out {
                Some(path) => std::fs::write(&path, body)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?,
                None => print!("{body}"),
            }
            Ok(())
        }
    }
}

fn report(ctx: &Ctx, id: Uuid, template: Option<&Path>) -> Result<()> {
    let session = ctx
        .archive()
        .get(id)
        .ok_or_else(|| eyre!("no archived session {id}"))?;
    let rendered = match template {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read template {}", path.display()))?;
            render_template("custom", &content, &session, ctx.locale)?
        }
        None => render_report(&session, ctx.locale)?,
    };
    print!("{rendered}");
    Ok(())
}

fn share_token(ctx: &Ctx, id: Uuid) -> Result<()> {
    let session = ctx
        .archive()
        .get(id)
        .ok_or_else(|| eyre!("no archived session {id}"))?;
    let summary = ShareSummary::from_session(&session)
        .ok_or_else(|| eyre!("session {id} has not been scored"))?;
    println!("{}", share::encode(&summary)?);
    Ok(())
}

fn decode(token: &str) -> Result<()> {
    let summary = share::try_decode(token).wrap_err("invalid share token")?;
    print_json(&summary)
}
