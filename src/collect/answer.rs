// Answer values produced by the collection strategies

use serde::Serialize;
use std::fmt;

use crate::errors::{JournalError, Result};
use crate::goals::Goal;

/// Belief strength as typed: whole numbers stay whole
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    Integer(i64),
    Decimal(f64),
}

impl Score {
    /// Parse an integer or decimal score and check it against `[min, max]`
    pub fn parse(input: &str, min: i64, max: i64) -> Result<Self> {
        let trimmed = input.trim();
        let score = match trimmed.parse::<i64>() {
            Ok(n) => Score::Integer(n),
            Err(_) => match trimmed.parse::<f64>() {
                Ok(x) if x.is_finite() => Score::Decimal(x),
                _ => {
                    return Err(JournalError::InvalidScore {
                        input: input.to_string(),
                        reason: "not a number".to_string(),
                    })
                }
            },
        };

        let value = score.value();
        if value < min as f64 || value > max as f64 {
            return Err(JournalError::InvalidScore {
                input: input.to_string(),
                reason: format!("outside {}..={}", min, max),
            });
        }
        Ok(score)
    }

    pub fn value(&self) -> f64 {
        match self {
            Score::Integer(n) => *n as f64,
            Score::Decimal(x) => *x,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Integer(n) => write!(f, "{}", n),
            Score::Decimal(x) => write!(f, "{}", x),
        }
    }
}

/// A self-rated conviction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Belief {
    pub score: Score,
    pub reason: String,
}

/// What one prompt produced; the shape follows the prompt kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
    Lines(Vec<String>),
    /// `None` when the single belief entry was left blank
    Belief(Option<Belief>),
    Beliefs(Vec<Belief>),
    Goals(Vec<Goal>),
}
