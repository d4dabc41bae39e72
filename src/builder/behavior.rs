//! Builder for constructing local participant behaviors.

use crate::builder::error::BuildError;
use crate::core::{LocalAction, LocalBehavior, LocalState, LocalTransition, Message};
use std::collections::BTreeSet;

/// Builder for [`LocalBehavior`] with a fluent API.
///
/// States mentioned by transitions are registered automatically; messages
/// must be declared with [`input`](Self::input) or [`output`](Self::output)
/// before a transition may use them.
#[derive(Debug, Default)]
pub struct LocalBehaviorBuilder {
    initial: Option<LocalState>,
    states: BTreeSet<LocalState>,
    messages: BTreeSet<Message>,
    transitions: Vec<LocalTransition>,
}

impl LocalBehaviorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<LocalState>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state that no transition touches.
    pub fn state(mut self, state: impl Into<LocalState>) -> Self {
        self.states.insert(state.into());
        self
    }

    /// Declare a message this participant receives.
    pub fn input(mut self, name: impl Into<String>) -> Self {
        self.messages.insert(Message::input(name));
        self
    }

    /// Declare a message this participant sends.
    pub fn output(mut self, name: impl Into<String>) -> Self {
        self.messages.insert(Message::output(name));
        self
    }

    pub fn internal(self, from: impl Into<LocalState>, to: impl Into<LocalState>) -> Self {
        self.transition(from, to, LocalAction::Internal)
    }

    pub fn async_send(
        self,
        from: impl Into<LocalState>,
        to: impl Into<LocalState>,
        message: impl Into<String>,
    ) -> Self {
        self.transition(from, to, LocalAction::AsynchronousSend(Message::output(message)))
    }

    pub fn async_receive(
        self,
        from: impl Into<LocalState>,
        to: impl Into<LocalState>,
        message: impl Into<String>,
    ) -> Self {
        self.transition(from, to, LocalAction::AsynchronousReceive(Message::input(message)))
    }

    pub fn sync_send(
        self,
        from: impl Into<LocalState>,
        to: impl Into<LocalState>,
        message: impl Into<String>,
    ) -> Self {
        self.transition(from, to, LocalAction::SynchronousSend(Message::output(message)))
    }

    pub fn sync_receive(
        self,
        from: impl Into<LocalState>,
        to: impl Into<LocalState>,
        message: impl Into<String>,
    ) -> Self {
        self.transition(from, to, LocalAction::SynchronousReceive(Message::input(message)))
    }

    /// Add an arbitrary local transition. Repeating an identical transition
    /// has no effect.
    pub fn transition(
        mut self,
        from: impl Into<LocalState>,
        to: impl Into<LocalState>,
        action: LocalAction,
    ) -> Self {
        let transition = LocalTransition::new(from.into(), to.into(), action);
        if !self.transitions.contains(&transition) {
            self.transitions.push(transition);
        }
        self
    }

    /// Build the behavior.
    /// Returns an error if the initial state is missing or a transition uses an
    /// undeclared message.
    pub fn build(self) -> Result<LocalBehavior, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        for transition in &self.transitions {
            let Some(message) = transition.action.message() else {
                continue;
            };
            if !self.messages.contains(message) {
                let expected = if message.is_output() { "output" } else { "input" };
                return Err(BuildError::UndeclaredMessage {
                    from: transition.source.to_string(),
                    to: transition.target.to_string(),
                    message: message.name().to_string(),
                    expected,
                });
            }
        }

        let mut states = self.states;
        states.insert(initial.clone());
        for transition in &self.transitions {
            states.insert(transition.source.clone());
            states.insert(transition.target.clone());
        }

        Ok(LocalBehavior {
            initial,
            states,
            messages: self.messages,
            transitions: self.transitions,
        })
    }
}
