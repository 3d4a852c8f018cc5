//! Plain-text screens.

use std::io::{self, Write};

use quiz_core::{AnswerFeedback, GameSummary, PlayerResult, Progress, Round, Stars};

const BAR_WIDTH: usize = 20;
/// Rows shown on the leaderboard screen.
pub const RANKING_SHOWN: usize = 5;

pub fn stars(stars: Stars) -> String {
    let filled = usize::from(stars.count());
    format!("{}{}", "★".repeat(filled), "☆".repeat(3 - filled))
}

pub fn title<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "==============================")?;
    writeln!(out, "     Aventura Matemática")?;
    writeln!(out, "==============================")
}

pub fn leaderboard<W: Write>(out: &mut W, rows: &[PlayerResult]) -> io::Result<()> {
    writeln!(out, "🏆 Ranking")?;
    if rows.is_empty() {
        return writeln!(out, "  Nenhum recorde ainda. Seja o primeiro!");
    }
    for (pos, row) in rows.iter().take(RANKING_SHOWN).enumerate() {
        writeln!(
            out,
            "  {:>2}. {:<20} {} ({})",
            pos + 1,
            row.name,
            stars(row.stars),
            row.level
        )?;
    }
    Ok(())
}

pub fn progress_bar(progress: Progress) -> String {
    let filled = (progress.fraction() * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.answered,
        progress.total
    )
}

pub fn question<W: Write>(
    out: &mut W,
    round: &Round,
    progress: Progress,
    level_label: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}  Nível: {}", progress_bar(progress), level_label)?;
    writeln!(out, "  {}", round.problem.prompt())?;
    for (i, value) in round.options.values().iter().enumerate() {
        writeln!(out, "    {}) {}", i + 1, value)?;
    }
    Ok(())
}

pub fn feedback<W: Write>(out: &mut W, fb: &AnswerFeedback) -> io::Result<()> {
    if fb.correct {
        writeln!(out, "  ✔ Correto! Pontuação: {}", fb.score)
    } else {
        writeln!(
            out,
            "  ✘ Ops! A resposta era {}. Pontuação: {}",
            fb.correct_answer, fb.score
        )
    }
}

fn greeting(stars: Stars) -> &'static str {
    match stars {
        Stars::Three => "Parabéns",
        Stars::Two => "Muito bem",
        Stars::One => "Continue praticando",
    }
}

pub fn summary<W: Write>(out: &mut W, summary: &GameSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}, {}!", greeting(summary.stars), summary.player_name)?;
    writeln!(
        out,
        "Você acertou {} de {} perguntas.",
        summary.score, summary.total
    )?;
    writeln!(
        out,
        "Estrelas: {}  Nível final: {}",
        stars(summary.stars),
        summary.level.label()
    )
}
