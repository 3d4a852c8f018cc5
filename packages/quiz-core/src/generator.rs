//! Problem and answer-option generation.
//!
//! Operands are drawn with `rand(max)`, a uniform integer in `1..=max`.
//! Division picks divisor and quotient first and derives the dividend, so the
//! quotient is always exact. Subtraction never goes below zero.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::problem::{Operator, Problem};
use crate::recent::RecentQuestionLog;
use crate::rules::Level;

/// Candidates drawn before a repeat is accepted: the first draw plus 20 retries.
pub const MAX_ATTEMPTS: u32 = 21;

/// Distractors lie within this distance of the correct answer.
pub const DISTRACTOR_SPREAD: u32 = 4;

/// Number of choices shown for each problem, correct one included.
pub const OPTION_COUNT: usize = 4;

/// Four distinct choices in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOptions([u32; OPTION_COUNT]);

impl AnswerOptions {
    pub fn values(&self) -> &[u32; OPTION_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.0.contains(&value)
    }
}

/// A problem together with the options offered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub problem: Problem,
    pub options: AnswerOptions,
}

/// Outcome of one generation pass, kept for diagnostics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Draw {
    pub problem: Problem,
    pub attempts: u32,
    pub fresh: bool,
}

#[derive(Debug, Clone)]
pub struct ProblemGenerator<R> {
    rng: R,
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a problem for `level` plus its shuffled options, and record
    /// the problem in `recent`.
    pub fn next_round(&mut self, level: Level, recent: &mut RecentQuestionLog) -> Round {
        let problem = self.generate_problem(level, recent);
        let options = self.answer_options(problem.correct_result);
        Round { problem, options }
    }

    /// Generate a problem whose signature is not in `recent`, giving up on
    /// freshness after [`MAX_ATTEMPTS`] draws. The accepted problem is pushed
    /// onto `recent`.
    pub fn generate_problem(&mut self, level: Level, recent: &mut RecentQuestionLog) -> Problem {
        let draw = self.draw(level, recent);
        recent.push(draw.problem.signature());
        draw.problem
    }

    pub(crate) fn draw(&mut self, level: Level, recent: &RecentQuestionLog) -> Draw {
        let mut attempts = 0;
        loop {
            let problem = self.candidate(level);
            attempts += 1;

            let fresh = !recent.contains(&problem.signature());
            if fresh || attempts >= MAX_ATTEMPTS {
                if !fresh {
                    debug!(
                        attempts,
                        prompt = %problem.prompt(),
                        "repeat accepted after exhausting retries"
                    );
                }
                return Draw {
                    problem,
                    attempts,
                    fresh,
                };
            }
        }
    }

    /// Correct value plus three distinct non-negative distractors within
    /// [`DISTRACTOR_SPREAD`], shuffled.
    pub fn answer_options(&mut self, correct: u32) -> AnswerOptions {
        let pool: Vec<u32> = (1..=DISTRACTOR_SPREAD)
            .flat_map(|delta| [correct.checked_sub(delta), correct.checked_add(delta)])
            .flatten()
            .collect();

        // At least DISTRACTOR_SPREAD values are always above `correct`.
        let mut values = [correct; OPTION_COUNT];
        for (slot, wrong) in values[1..]
            .iter_mut()
            .zip(pool.choose_multiple(&mut self.rng, OPTION_COUNT - 1))
        {
            *slot = *wrong;
        }
        values.shuffle(&mut self.rng);
        AnswerOptions(values)
    }

    fn candidate(&mut self, level: Level) -> Problem {
        let operator = self.pick_operator(level);
        self.operands(operator, level)
    }

    fn pick_operator(&mut self, level: Level) -> Operator {
        let choices: &[Operator] = match level {
            Level::Easy => &Operator::BASIC,
            Level::Medium | Level::Hard => &Operator::ALL,
        };
        choices[self.rng.random_range(0..choices.len())]
    }

    fn operands(&mut self, operator: Operator, level: Level) -> Problem {
        let max = level.operand_max();
        let factor = level.factor_max();

        let (operand1, operand2, correct_result) = match operator {
            Operator::Add => {
                let a = self.rand_up_to(max);
                let b = self.rand_up_to(max);
                (a, b, a + b)
            }
            Operator::Subtract => {
                let mut a = self.rand_up_to(max);
                let mut b = self.rand_up_to(a.min(max));
                if b > a {
                    std::mem::swap(&mut a, &mut b);
                }
                (a, b, a - b)
            }
            Operator::Multiply => {
                let a = self.rand_up_to(factor);
                let b = self.rand_up_to(factor);
                (a, b, a * b)
            }
            Operator::Divide => {
                let divisor = self.rand_up_to(factor);
                let quotient = self.rand_up_to(factor);
                (divisor * quotient, divisor, quotient)
            }
        };

        Problem {
            operand1,
            operand2,
            operator,
            correct_result,
        }
    }

    fn rand_up_to(&mut self, max: u32) -> u32 {
        self.rng.random_range(1..=max.max(1))
    }
}
