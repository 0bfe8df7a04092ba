//! Scripted prompter shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use formulary_core::prompt::{Prompter, Validate};

/// One scripted user answer.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Confirm(bool),
    Select(usize),
}

/// Prompter that replays answers and records everything it was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    /// Every prompt message, in order (re-asks included)
    pub asked: Vec<String>,
    /// Rejection messages shown for refused text answers
    pub rejections: Vec<String>,
    /// Blocks passed to `show`
    pub shown: Vec<String>,
    pub clears: usize,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> io::Result<Answer> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.shown.push(text.to_string());
        Ok(())
    }

    fn ask_text(&mut self, message: &str, validate: Validate<'_>) -> io::Result<String> {
        loop {
            match self.next(message)? {
                Answer::Text(text) => match validate(text) {
                    Ok(()) => return Ok(text.trim().to_string()),
                    Err(rejection) => self.rejections.push(rejection.to_string()),
                },
                other => panic!("expected a text answer for {:?}, got {:?}", message, other),
            }
        }
    }

    fn ask_confirm(&mut self, message: &str) -> io::Result<bool> {
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            other => panic!("expected a confirmation for {:?}, got {:?}", message, other),
        }
    }

    fn ask_select(&mut self, message: &str, choices: &[&str]) -> io::Result<usize> {
        match self.next(message)? {
            Answer::Select(index) => {
                assert!(index < choices.len(), "selection out of range");
                Ok(index)
            }
            other => panic!("expected a selection for {:?}, got {:?}", message, other),
        }
    }
}
