use clap::Parser;
use directories::ProjectDirs;
use quizdb::api::{Artifact, QuizApi};
use quizdb::config::{QuizConfig, CONFIG_KEYS};
use quizdb::error::{QuizError, Result};
use quizdb::export::ExportFormat;
use quizdb::model::{QuestionFilter, QuestionInput, QuestionPatch};
use quizdb::store::fs_backend::FsBackend;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::Level;

mod args;
mod cli;
use args::{Cli, Commands, ExportKind};
use cli::print::{
    print_full_questions, print_leaderboard, print_messages, print_questions, print_values,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if e.is_parse_failure() {
            eprintln!("Stored data is unreadable. Fix the file by hand or run `quizdb reset --results` to start over.");
        }
        std::process::exit(1);
    }
}

struct AppContext {
    api: QuizApi<FsBackend>,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            question,
            options,
            answer,
            category,
            difficulty,
        }) => handle_add(&mut ctx, question, options, answer, category, difficulty),
        Some(Commands::List {
            category,
            difficulty,
        }) => handle_list(&ctx, category, difficulty),
        Some(Commands::View { ids }) => handle_view(&ctx, &ids),
        Some(Commands::Edit {
            id,
            question,
            options,
            answer,
            category,
            difficulty,
        }) => {
            let mut patch = QuestionPatch {
                question,
                category,
                difficulty,
                ..Default::default()
            };
            if !options.is_empty() {
                patch.options = Some(options);
            }
            if let Some(answer) = answer {
                patch.correct_answer = Some(zero_based(answer)?);
            }
            handle_edit(&mut ctx, id, patch)
        }
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Categories) => handle_values(ctx.api.categories()?),
        Some(Commands::Difficulties) => handle_values(ctx.api.difficulties()?),
        Some(Commands::Count) => handle_values(ctx.api.count()?),
        Some(Commands::Play { name, student_id }) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            cli::play::run(&mut ctx.api, name, student_id, &mut input, &mut output)
        }
        Some(Commands::Leaderboard) => handle_leaderboard(&ctx),
        Some(Commands::Export { format, output }) => handle_export(&ctx, format, output),
        Some(Commands::Certificate { player, output }) => {
            handle_certificate(&ctx, &player, output)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Reset { results }) => handle_reset(&mut ctx, results),
        None => handle_list(&ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "quizdb", "quizdb")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                QuizError::Config("Could not determine a data directory; pass --data-dir".into())
            })?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "opening question bank");

    let config = QuizConfig::load(&data_dir)?;
    let backend = FsBackend::new(data_dir.clone());
    let api = QuizApi::new(backend, config)?;

    Ok(AppContext { api, data_dir })
}

fn zero_based(answer: usize) -> Result<usize> {
    answer
        .checked_sub(1)
        .ok_or_else(|| QuizError::Validation("Answer numbers start at 1".into()))
}

fn handle_add(
    ctx: &mut AppContext,
    question: String,
    options: Vec<String>,
    answer: usize,
    category: String,
    difficulty: String,
) -> Result<()> {
    let input = QuestionInput::new(question, options, zero_based(answer)?, category, difficulty);
    let result = ctx.api.create_question(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    category: Option<String>,
    difficulty: Option<String>,
) -> Result<()> {
    let filter = QuestionFilter {
        category,
        difficulty,
    };
    let result = ctx.api.list_questions(&filter)?;
    print_questions(&result.listed_questions);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: &[u64]) -> Result<()> {
    let result = ctx.api.view_questions(ids)?;
    print_full_questions(&result.listed_questions);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: u64, patch: QuestionPatch) -> Result<()> {
    let result = ctx.api.update_question(id, patch)?;
    print_full_questions(&result.affected_questions);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[u64]) -> Result<()> {
    let result = ctx.api.delete_questions(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_values(result: quizdb::api::CmdResult) -> Result<()> {
    print_values(&result.values);
    print_messages(&result.messages);
    Ok(())
}

fn handle_leaderboard(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.leaderboard()?;
    print_leaderboard(&result.ranked_results);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, kind: ExportKind, output: Option<PathBuf>) -> Result<()> {
    let format = match kind {
        ExportKind::Csv => ExportFormat::Csv,
        ExportKind::Json => ExportFormat::Json,
    };
    let result = ctx.api.export_results(format)?;
    if let Some(artifact) = &result.artifact {
        let path = write_artifact(output.as_deref(), artifact)?;
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_certificate(ctx: &AppContext, player: &str, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.certificate(player)?;
    if let Some(artifact) = &result.artifact {
        let path = write_artifact(output.as_deref(), artifact)?;
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn write_artifact(dir: Option<&Path>, artifact: &Artifact) -> Result<PathBuf> {
    let dir = dir.unwrap_or_else(|| Path::new("."));
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(QuizError::Io)?;
    }
    let path = dir.join(&artifact.file_name);
    fs::write(&path, &artifact.content).map_err(QuizError::Io)?;
    Ok(path)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = ctx.api.config().clone();
    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(&ctx.data_dir)?;
            println!("{} = {}", key, config.get(&key)?);
        }
    }
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, results: bool) -> Result<()> {
    let result = ctx.api.reset(results)?;
    print_messages(&result.messages);
    Ok(())
}
