//! Game session state machine.
//!
//! `Start → NameEntry → Playing → Finished`, with `restart` looping a finished
//! session back into play for the same player. Every transition is driven by
//! the caller; timing between screens is the presentation adapter's job, using
//! [`START_TRANSITION_DELAY`] and [`FEEDBACK_DELAY`].

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionError;
use crate::generator::{ProblemGenerator, Round};
use crate::recent::RecentQuestionLog;
use crate::rules::{Level, Stars, TOTAL_QUESTIONS};

/// Pause between the start button and the name prompt.
pub const START_TRANSITION_DELAY: Duration = Duration::from_millis(400);

/// How long answer feedback stays on screen before the next question.
pub const FEEDBACK_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    NameEntry,
    Playing,
    Finished,
}

/// Result record handed to the ranking service at game end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub name: String,
    pub stars: Stars,
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub selected: u32,
    pub correct_answer: u32,
    pub score: u32,
    pub answered: u32,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub player_name: String,
    pub score: u32,
    pub total: u32,
    pub stars: Stars,
    pub level: Level,
}

impl GameSummary {
    pub fn result(&self) -> PlayerResult {
        PlayerResult {
            name: self.player_name.clone(),
            stars: self.stars,
            level: self.level.label().to_string(),
        }
    }
}

/// What `advance` moved the session to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Next(Round),
    Finished(GameSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: u32,
    pub total: u32,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.answered) / f64::from(self.total)
    }
}

pub struct GameSession<R> {
    phase: Phase,
    player_name: Option<String>,
    score: u32,
    answered: u32,
    level: Level,
    recent: RecentQuestionLog,
    current: Option<Round>,
    pending_advance: bool,
    generator: ProblemGenerator<R>,
}

impl<R: Rng> GameSession<R> {
    pub fn new(rng: R) -> Self {
        Self {
            phase: Phase::Start,
            player_name: None,
            score: 0,
            answered: 0,
            level: Level::Easy,
            recent: RecentQuestionLog::new(),
            current: None,
            pending_advance: false,
            generator: ProblemGenerator::new(rng),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.answered,
            total: TOTAL_QUESTIONS,
        }
    }

    pub fn start_adventure(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Start {
            return Err(SessionError::invalid("start the adventure", self.phase));
        }
        self.phase = Phase::NameEntry;
        Ok(())
    }

    /// Accept the player's name and deal the first question.
    pub fn confirm_name(&mut self, name: &str) -> Result<Round, SessionError> {
        if self.phase != Phase::NameEntry {
            return Err(SessionError::invalid("confirm a name", self.phase));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        self.player_name = Some(name.to_string());
        Ok(self.begin_game())
    }

    /// Play again with the same name.
    pub fn restart(&mut self) -> Result<Round, SessionError> {
        if self.phase != Phase::Finished {
            return Err(SessionError::invalid("restart", self.phase));
        }
        Ok(self.begin_game())
    }

    pub fn answer(&mut self, selected: u32) -> Result<AnswerFeedback, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::invalid("answer", self.phase));
        }
        if self.pending_advance {
            return Err(SessionError::AlreadyAnswered);
        }
        let round = self
            .current
            .ok_or(SessionError::invalid("answer", self.phase))?;
        if !round.options.contains(selected) {
            return Err(SessionError::NotAnOption(selected));
        }

        let correct = selected == round.problem.correct_result;
        if correct {
            self.score += 1;
        }
        self.answered += 1;
        self.level = Level::from_score(self.score);
        self.pending_advance = true;

        Ok(AnswerFeedback {
            correct,
            selected,
            correct_answer: round.problem.correct_result,
            score: self.score,
            answered: self.answered,
            level: self.level,
        })
    }

    /// Move past the feedback screen: next question, or the end of the game.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::invalid("advance", self.phase));
        }
        if !self.pending_advance {
            return Err(SessionError::AwaitingAnswer);
        }
        self.pending_advance = false;

        if self.answered < TOTAL_QUESTIONS {
            let round = self.deal();
            return Ok(Advance::Next(round));
        }

        self.phase = Phase::Finished;
        self.current = None;
        self.level = Level::from_score(self.score);
        let summary = self.summary_unchecked();
        debug!(
            score = summary.score,
            stars = summary.stars.count(),
            level = summary.level.label(),
            "game finished"
        );
        Ok(Advance::Finished(summary))
    }

    pub fn summary(&self) -> Option<GameSummary> {
        (self.phase == Phase::Finished).then(|| self.summary_unchecked())
    }

    fn summary_unchecked(&self) -> GameSummary {
        GameSummary {
            player_name: self.player_name.clone().unwrap_or_default(),
            score: self.score,
            total: TOTAL_QUESTIONS,
            stars: Stars::from_score(self.score),
            level: self.level,
        }
    }

    fn begin_game(&mut self) -> Round {
        self.score = 0;
        self.answered = 0;
        self.pending_advance = false;
        self.level = Level::from_score(self.score);
        self.phase = Phase::Playing;
        self.deal()
    }

    fn deal(&mut self) -> Round {
        let round = self.generator.next_round(self.level, &mut self.recent);
        self.current = Some(round);
        round
    }
}
