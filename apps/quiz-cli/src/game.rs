//! Line-driven game loop.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use quiz_core::{
    Advance, GameSession, Round, SessionError, FEEDBACK_DELAY, START_TRANSITION_DELAY,
};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::client::RankingClient;
use crate::render;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Whether to honour the delays between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    Real,
    Fast,
}

impl Pacing {
    async fn pause(self, delay: Duration) {
        if self == Pacing::Real {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Read one line; `None` at end of input.
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    read_line(input)
}

/// Option number (1-4) or the value itself.
fn parse_choice(line: &str, round: &Round) -> Option<u32> {
    let n: u32 = line.parse().ok()?;
    let by_position = usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| round.options.get(i));
    by_position.or_else(|| round.options.contains(n).then_some(n))
}

/// Run games until the player declines to play again or input ends.
pub async fn play<R, I, O>(
    session: &mut GameSession<R>,
    client: &RankingClient,
    input: &mut I,
    out: &mut O,
    pacing: Pacing,
) -> Result<(), GameError>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    render::title(out)?;
    render::leaderboard(out, &client.leaderboard().await)?;

    if prompt(input, out, "\nPressione Enter para começar a aventura...")?.is_none() {
        return Ok(());
    }
    session.start_adventure()?;
    pacing.pause(START_TRANSITION_DELAY).await;

    let mut round = loop {
        let Some(name) = prompt(input, out, "Qual é o seu nome? ")? else {
            return Ok(());
        };
        match session.confirm_name(&name) {
            Ok(round) => break round,
            Err(SessionError::EmptyName) => writeln!(out, "Por favor, digite seu nome.")?,
            Err(e) => return Err(e.into()),
        }
    };

    loop {
        let summary = loop {
            render::question(out, &round, session.progress(), session.level().label())?;
            let selected = loop {
                let Some(line) = prompt(input, out, "Sua resposta: ")? else {
                    return Ok(());
                };
                match parse_choice(&line, &round) {
                    Some(value) => break value,
                    None => writeln!(out, "Escolha uma das opções (1-4).")?,
                }
            };

            let feedback = session.answer(selected)?;
            render::feedback(out, &feedback)?;
            pacing.pause(FEEDBACK_DELAY).await;

            match session.advance()? {
                Advance::Next(next) => round = next,
                Advance::Finished(summary) => break summary,
            }
        };

        render::summary(out, &summary)?;
        if let Some(reply) = client.submit(&summary.result()).await {
            writeln!(out, "{}", reply.message)?;
        }
        render::leaderboard(out, &client.leaderboard().await)?;

        let again = prompt(input, out, "\nJogar novamente? (s/n) ")?;
        if !matches!(again.as_deref(), Some("s" | "S" | "sim")) {
            debug!("player left");
            return Ok(());
        }
        round = session.restart()?;
    }
}
