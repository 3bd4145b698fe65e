use chrono::Utc;
use colored::Colorize;
use quizdb::api::{MessageLevel, QuizApi};
use quizdb::certificate::grade;
use quizdb::error::{QuizError, Result};
use quizdb::leaderboard::format_clock;
use quizdb::session::AnswerOutcome;
use quizdb::store::KvBackend;
use std::io::{BufRead, Write};

/// Interactive quiz: prompts on `output`, reads answers line by line from `input`.
/// End of input finishes the run early with whatever was answered.
pub(crate) fn run<B, R, W>(
    api: &mut QuizApi<B>,
    name: Option<String>,
    student_id: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    B: KvBackend + Clone,
    R: BufRead,
    W: Write,
{
    let name = match name {
        Some(name) => name,
        None => prompt(input, output, "Enter Hacker Alias: ")?.unwrap_or_default(),
    };
    let student_id = match student_id {
        Some(id) => id,
        None => prompt(input, output, "Enter Student ID: ")?.unwrap_or_default(),
    };

    let mut session = api.start_quiz(&name, &student_id)?;
    writeln!(
        output,
        "{}",
        format!(
            "INFILTRATION PROTOCOL for {}: {} questions, {} on the clock",
            session.player_name(),
            session.total(),
            format_clock(session.time_left(Utc::now()))
        )
        .cyan()
    )?;

    'questions: while let Some(question) = session.current_question().cloned() {
        let (n, total) = session.position();
        writeln!(output)?;
        writeln!(
            output,
            "{}  {}",
            format!("SECURITY CHALLENGE {}/{}", n, total).bold(),
            format!("[{} left]", format_clock(session.time_left(Utc::now()))).dimmed()
        )?;
        writeln!(output, "{}", question.question)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}. {}", i + 1, option)?;
        }

        let choice = loop {
            let Some(line) = prompt(input, output, "> ")? else {
                break 'questions;
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => break n - 1,
                _ => writeln!(
                    output,
                    "{}",
                    format!("Enter a number between 1 and {}", question.options.len()).yellow()
                )?,
            }
        };

        match session.answer(choice, Utc::now())? {
            AnswerOutcome::Correct => writeln!(output, "{}", "ACCESS GRANTED".green())?,
            AnswerOutcome::Incorrect { correct_answer } => {
                let correct = question
                    .options
                    .get(correct_answer)
                    .map(String::as_str)
                    .unwrap_or("?");
                writeln!(
                    output,
                    "{} {}",
                    "ACCESS DENIED".red(),
                    format!("(correct: {})", correct).dimmed()
                )?;
            }
            AnswerOutcome::TimeUp => {
                writeln!(output, "{}", "TIME'S UP".red().bold())?;
                break;
            }
        }
    }

    let score = session.score();
    let total = session.total();
    let percentage = if total == 0 {
        0.0
    } else {
        f64::from(score) / total as f64 * 100.0
    };

    let result = api.finish_quiz(session)?;
    writeln!(output)?;
    for message in &result.messages {
        let line = match message.level {
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Info => message.content.dimmed(),
        };
        writeln!(output, "{}", line)?;
    }
    writeln!(output, "Rank: {}", grade(percentage).bold())?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(QuizError::Io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
