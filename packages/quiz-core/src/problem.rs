//! Arithmetic problems and their signatures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four operators the game can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Operators available on the first level.
    pub const BASIC: [Operator; 2] = [Operator::Add, Operator::Subtract];

    /// Every operator, in display order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown to the player.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply the operator. Returns `None` when the result would be negative
    /// or the division would leave a remainder.
    pub fn apply(self, left: u32, right: u32) -> Option<u32> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 || left % right != 0 {
                    None
                } else {
                    Some(left / right)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Identity of a question for repeat detection: operands plus operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    pub operand1: u32,
    pub operator: Operator,
    pub operand2: u32,
}

/// One generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub operand1: u32,
    pub operand2: u32,
    pub operator: Operator,
    pub correct_result: u32,
}

impl Problem {
    pub fn signature(&self) -> Signature {
        Signature {
            operand1: self.operand1,
            operator: self.operator,
            operand2: self.operand2,
        }
    }

    /// Question text, e.g. `12 + 7 = ?`.
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.operand1, self.operator, self.operand2)
    }

    /// True when `correct_result` agrees with the operands.
    pub fn is_consistent(&self) -> bool {
        self.operator.apply(self.operand1, self.operand2) == Some(self.correct_result)
    }
}
