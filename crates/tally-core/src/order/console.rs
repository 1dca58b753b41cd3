//! Input source abstraction for order collection.
//!
//! The collector never touches stdin directly. It reads through a
//! [`Console`], so the same loop runs against a live line editor or a
//! scripted list of answers.

use std::collections::VecDeque;
use std::fmt;

use super::collector::MAX_QUANTITY;
use crate::error::Result;
use crate::menu::ItemName;

/// A recoverable problem with one answer. The collector reports it and
/// asks again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The item name is not on the menu
    UnknownItem(ItemName),
    /// The quantity answer is not an integer
    QuantityNotInteger(String),
    /// The quantity is zero or negative
    QuantityNotPositive(i64),
    /// The quantity is above [`MAX_QUANTITY`]
    QuantityTooLarge(i64),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnknownItem(_) => write!(f, "Item is not in the menu. Please try again."),
            Rejection::QuantityNotInteger(_) => write!(f, "Quantity must be integer"),
            Rejection::QuantityNotPositive(_) => write!(f, "Quantity must be positive."),
            Rejection::QuantityTooLarge(_) => {
                write!(f, "Quantity must be at most {}.", MAX_QUANTITY)
            }
        }
    }
}

/// Interactive input/output used while collecting an order.
pub trait Console {
    /// Shows `prompt` and reads one line.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(line))`: the user answered
    /// - `Ok(None)`: the input is exhausted
    /// - `Err(TallyError::Cancelled)`: the user interrupted
    /// - `Err(_)`: the input source failed
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Tells the user an answer was refused.
    fn reject(&mut self, rejection: &Rejection);
}

/// A console that replays a fixed list of answers.
///
/// Prompts and rejections are recorded for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    rejections: Vec<Rejection>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Rejections reported so far, in order.
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn reject(&mut self, rejection: &Rejection) {
        self.rejections.push(rejection.clone());
    }
}
