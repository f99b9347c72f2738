//! Ordered keyword dispatch.

use tlc_core::Dice;
use tracing::debug;

use crate::turn::{Narration, Signal, Turn};

/// Handles a matched command. Receives the normalized input.
pub type Handler<S> = fn(&str, &mut S, &mut dyn Dice, &mut Narration) -> Signal;

/// One entry of a scenario's command table.
pub struct Rule<S> {
    /// Short name for logs.
    pub action: &'static str,
    /// The rule matches when any of these appears in the input.
    pub keywords: &'static [&'static str],
    /// What the command does.
    pub handler: Handler<S>,
}

impl<S> Rule<S> {
    /// Whether the normalized input triggers this rule.
    pub fn matches(&self, input: &str) -> bool {
        self.keywords.iter().any(|k| input.contains(k))
    }
}

impl<S> std::fmt::Debug for Rule<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("action", &self.action)
            .field("keywords", &self.keywords)
            .finish()
    }
}

/// Trim and lowercase player input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// The first rule in `rules` that matches the normalized input.
pub fn find_rule<'r, S>(rules: &'r [Rule<S>], input: &str) -> Option<&'r Rule<S>> {
    rules.iter().find(|r| r.matches(input))
}

/// Run a command against a rule table.
///
/// Blank input is ignored. Input no rule matches produces `fallback` and
/// leaves the record untouched.
pub fn dispatch<S>(
    rules: &[Rule<S>],
    fallback: &str,
    input: &str,
    mut state: S,
    dice: &mut dyn Dice,
) -> Turn<S> {
    let cmd = normalize(input);
    if cmd.is_empty() {
        return Turn::silent(state);
    }

    let mut narration = Narration::new();
    let signal = match find_rule(rules, &cmd) {
        Some(rule) => {
            debug!(action = rule.action, input = %cmd, "command matched");
            (rule.handler)(&cmd, &mut state, dice, &mut narration)
        }
        None => {
            debug!(input = %cmd, "command not understood");
            narration.say(fallback);
            Signal::Continue
        }
    };

    Turn {
        lines: narration.into_lines(),
        state,
        signal,
    }
}
