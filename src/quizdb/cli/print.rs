use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use quizdb::api::{CmdMessage, MessageLevel};
use quizdb::leaderboard::{format_duration, AccuracyTier, RankedResult};
use quizdb::model::Question;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 6;
const CATEGORY_WIDTH: usize = 20;
const DIFFICULTY_WIDTH: usize = 14;
const TIME_WIDTH: usize = 16;
const ALIAS_WIDTH: usize = 20;
const STUDENT_WIDTH: usize = 12;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_values(values: &[String]) {
    for value in values {
        println!("{}", value);
    }
}

pub(crate) fn print_questions(questions: &[Question]) {
    if questions.is_empty() {
        return;
    }

    let fixed = ID_WIDTH + CATEGORY_WIDTH + DIFFICULTY_WIDTH + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);

    for q in questions {
        let id = pad_to_width(&format!("{}.", q.id), ID_WIDTH);
        let text = pad_to_width(&truncate_to_width(&q.question, available), available);
        let category = pad_to_width(&truncate_to_width(&q.category, CATEGORY_WIDTH), CATEGORY_WIDTH);
        let difficulty = pad_to_width(&q.difficulty, DIFFICULTY_WIDTH);

        println!(
            "{}{}{}{}{}",
            id.yellow(),
            text,
            category.cyan(),
            difficulty_colored(&q.difficulty, difficulty),
            format_time_ago(q.created_at).dimmed()
        );
    }
}

pub(crate) fn print_full_questions(questions: &[Question]) {
    for (i, q) in questions.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", format!("#{}", q.id).yellow(), q.question.bold());
        println!(
            "{} / {}",
            q.category.cyan(),
            difficulty_colored(&q.difficulty, q.difficulty.clone())
        );
        println!("--------------------------------");
        for (n, option) in q.options.iter().enumerate() {
            let line = format!("  {}. {}", n + 1, option);
            if q.is_correct(n) {
                println!("{} {}", line.green(), "(correct)".dimmed());
            } else {
                println!("{}", line);
            }
        }
        if let Some(note) = missing_answer_note(q) {
            println!("{}", note.red());
        }
    }
}

pub(crate) fn print_leaderboard(ranked: &[RankedResult]) {
    if ranked.is_empty() {
        return;
    }

    println!(
        "{}",
        format!(
            "{}{}{}{}{}{}{}",
            pad_to_width("RANK", ID_WIDTH),
            pad_to_width("HACKER ALIAS", ALIAS_WIDTH),
            pad_to_width("STUDENT ID", STUDENT_WIDTH),
            pad_to_width("SCORE", 8),
            pad_to_width("ACCURACY", 10),
            pad_to_width("TIME", 8),
            "DATE"
        )
        .bold()
    );

    for entry in ranked {
        let rank = pad_to_width(&format!("#{}", entry.rank), ID_WIDTH);
        let rank = match entry.rank {
            1 => rank.yellow(),
            2 => rank.white(),
            3 => rank.red(),
            _ => rank.cyan(),
        };
        let result = &entry.result;
        let alias = pad_to_width(&truncate_to_width(&result.player_name, ALIAS_WIDTH), ALIAS_WIDTH);
        let student = pad_to_width(&truncate_to_width(&result.student_id, STUDENT_WIDTH), STUDENT_WIDTH);
        let score = pad_to_width(
            &format!("{}/{}", result.score, result.total_questions),
            8,
        );
        let accuracy = pad_to_width(&format!("{:.1}%", entry.percentage), 10);
        let accuracy = match entry.tier {
            AccuracyTier::High => accuracy.green(),
            AccuracyTier::Medium => accuracy.yellow(),
            AccuracyTier::Low => accuracy.red(),
        };
        let time = pad_to_width(&format_duration(result.time_spent), 8);

        println!(
            "{}{}{}{}{}{}{}",
            rank,
            alias.green(),
            student.cyan(),
            score,
            accuracy,
            time,
            result.timestamp.format("%-m/%-d/%Y").to_string().dimmed()
        );
    }
}

fn missing_answer_note(q: &Question) -> Option<String> {
    if q.correct_option().is_some() {
        return None;
    }
    Some(format!(
        "  answer index {} has no matching option",
        q.correct_answer.saturating_add(1)
    ))
}

fn difficulty_colored(difficulty: &str, shown: String) -> ColoredString {
    match difficulty {
        "Basic" => shown.green(),
        "Intermediate" => shown.yellow(),
        "Advanced" => shown.red(),
        _ => shown.normal(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() < max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(2) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
