//! Completion certificates, rendered as 800x600 SVG images.

use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use std::fmt::Write;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const GRID_STEP: usize = 20;

pub const ELITE_THRESHOLD: f64 = 80.0;

pub fn grade(percentage: f64) -> &'static str {
    if percentage >= ELITE_THRESHOLD {
        "ELITE HACKER"
    } else {
        "SKILLED OPERATIVE"
    }
}

fn text_line(out: &mut String, y: u32, size: u32, bold: bool, fill: &str, text: &str) {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    let _ = writeln!(
        out,
        r#"  <text x="400" y="{}" font-family="monospace" font-size="{}"{} fill="{}" text-anchor="middle">{}</text>"#,
        y,
        size,
        weight,
        fill,
        escape(text)
    );
}

pub fn render_svg(player_name: &str, score: u32, total: u32, date: DateTime<Utc>) -> String {
    let percentage = if total == 0 {
        0.0
    } else {
        f64::from(score) / f64::from(total) * 100.0
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = WIDTH,
        h = HEIGHT
    );
    out.push_str(
        "  <defs>\n    <linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\n      \
         <stop offset=\"0\" stop-color=\"#0a0a0a\"/>\n      \
         <stop offset=\"1\" stop-color=\"#1a0a2e\"/>\n    </linearGradient>\n  </defs>\n",
    );
    let _ = writeln!(
        out,
        r##"  <rect width="{}" height="{}" fill="url(#bg)"/>"##,
        WIDTH, HEIGHT
    );
    out.push_str(
        "  <rect x=\"20\" y=\"20\" width=\"760\" height=\"560\" fill=\"none\" stroke=\"#22c55e\" stroke-width=\"3\"/>\n",
    );

    out.push_str("  <g stroke=\"#22c55e\" stroke-width=\"0.5\">\n");
    for x in (40..WIDTH).step_by(GRID_STEP) {
        let _ = writeln!(out, r#"    <line x1="{x}" y1="40" x2="{x}" y2="580"/>"#);
    }
    for y in (40..HEIGHT).step_by(GRID_STEP) {
        let _ = writeln!(out, r#"    <line x1="40" y1="{y}" x2="780" y2="{y}"/>"#);
    }
    out.push_str("  </g>\n");

    text_line(&mut out, 120, 36, true, "#06b6d4", "CYBERSECURITY CERTIFICATION");
    text_line(&mut out, 160, 18, false, "#22c55e", "INFILTRATION PROTOCOL COMPLETED");
    text_line(&mut out, 240, 28, true, "#ec4899", &player_name.to_uppercase());
    text_line(&mut out, 280, 20, false, "#22c55e", "HAS ACHIEVED THE RANK OF");
    text_line(&mut out, 320, 24, true, "#fbbf24", grade(percentage));
    text_line(
        &mut out,
        380,
        18,
        false,
        "#06b6d4",
        &format!("Score: {}/{} ({:.1}%)", score, total, percentage),
    );
    text_line(
        &mut out,
        420,
        16,
        false,
        "#22c55e",
        &format!("Certified on: {}", date.format("%-m/%-d/%Y")),
    );
    text_line(
        &mut out,
        500,
        14,
        false,
        "#ec4899",
        "CYBER ACADEMY - DIGITAL SECURITY DIVISION",
    );
    out.push_str("</svg>\n");
    out
}

/// `cybersecurity-certificate-<name>.svg`, whitespace runs collapsed to `-`.
pub fn file_name(player_name: &str) -> String {
    let slug = player_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("cybersecurity-certificate-{}.svg", slug)
}
