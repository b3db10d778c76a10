//! Option groups, one per thematic block of the tool's switches.
//!
//! Every group renders its fields in declared order. A field left at its default
//! contributes nothing; the layer never checks whether switches make sense together.

mod copy;
mod job;
mod logging;
mod retry;
mod selection;
mod throttle;

pub use copy::CopyOptions;
pub use job::JobOptions;
pub use logging::LoggingOptions;
pub use retry::RetryOptions;
pub use selection::FileSelectionOptions;
pub use throttle::ThrottlingOptions;

use crate::flags::{Flag, FlagSet, SizedQuantity};
use std::fmt::Display;

/// Serialize an option group into argument tokens.
pub trait CommandArgs {
    fn command_args(&self) -> Vec<String>;
}

/// Accumulates switch tokens for one option group.
#[derive(Debug, Default)]
pub(crate) struct ArgList {
    args: Vec<String>,
}

impl ArgList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `/name` when `enabled`.
    pub(crate) fn switch(&mut self, name: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.args.push(format!("/{}", name));
        }
        self
    }

    /// `/name:value`; zero is unset.
    pub(crate) fn number<N>(&mut self, name: &str, value: N) -> &mut Self
    where
        N: Display + Default + PartialEq,
    {
        if value != N::default() {
            self.args.push(format!("/{}:{}", name, value));
        }
        self
    }

    /// `/name:value` for an explicitly set value, including zero.
    pub(crate) fn optional<N: Display>(&mut self, name: &str, value: Option<N>) -> &mut Self {
        if let Some(value) = value {
            self.args.push(format!("/{}:{}", name, value));
        }
        self
    }

    /// `/name:text`; the empty string is unset.
    pub(crate) fn text(&mut self, name: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.args.push(format!("/{}:{}", name, value));
        }
        self
    }

    /// `/name:LETTERS`; the empty set is unset.
    pub(crate) fn flags<F: Flag>(&mut self, name: &str, value: FlagSet<F>) -> &mut Self {
        if !value.is_empty() {
            self.args.push(format!("/{}:{}", name, value));
        }
        self
    }

    /// `/name:<n>[kmg]`, skipped while [`SizedQuantity::is_unset`].
    pub(crate) fn sized(&mut self, name: &str, value: &SizedQuantity) -> &mut Self {
        if !value.is_unset() {
            self.args.push(format!("/{}:{}", name, value));
        }
        self
    }

    /// `/name` followed by each item as its own token.
    pub(crate) fn list(&mut self, name: &str, items: &[String]) -> &mut Self {
        if !items.is_empty() {
            self.args.push(format!("/{}", name));
            self.args.extend(items.iter().cloned());
        }
        self
    }

    pub(crate) fn finish(&mut self) -> Vec<String> {
        std::mem::take(&mut self.args)
    }
}
