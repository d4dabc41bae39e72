//! The four transition discovery algorithms.
//!
//! Each algorithm looks at one source state and returns candidate transitions
//! in a fixed order. A candidate's target is always a fresh clone of the
//! source; the source itself is never touched.

use crate::core::{LocalAction, LocalState, Message, Participant, ParticipantBehavior};
use crate::model::{GlobalState, TransitionKind};
use crate::validation::{validate_rendezvous, GenerateError};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::trace;

/// A transition that has been found but not yet linked into the graph.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Candidate {
    pub kind: TransitionKind,
    pub target: GlobalState,
}

/// Names that `sender` outputs and `receiver` inputs, compared by name only.
pub fn channel<'a, B: ParticipantBehavior>(sender: &'a B, receiver: &'a B) -> BTreeSet<&'a str> {
    let inputs: BTreeSet<&str> = receiver.input_messages().map(Message::name).collect();
    sender
        .output_messages()
        .map(Message::name)
        .filter(|name| inputs.contains(name))
        .collect()
}

/// Targets of the local transitions from `current` performing `action`.
/// Local transitions form a set, so a repeated transition counts once.
fn local_targets<'a, B: ParticipantBehavior>(
    behavior: &'a B,
    current: &'a LocalState,
    action: &'a LocalAction,
) -> impl Iterator<Item = &'a LocalState> + 'a {
    let mut seen = HashSet::new();
    behavior
        .transitions_from(current)
        .filter(move |transition| transition.action == *action)
        .filter(move |transition| seen.insert(*transition))
        .map(|transition| &transition.target)
}

type Located<'a, B> = (&'a Participant, &'a B, &'a LocalState);

/// Ordered pairs of distinct participants together with their current local
/// states.
fn pairs<'a, B: ParticipantBehavior>(
    behaviors: &'a BTreeMap<Participant, B>,
    state: &'a GlobalState,
) -> impl Iterator<Item = (Located<'a, B>, Located<'a, B>)> + 'a {
    let located = move |(participant, behavior): (&'a Participant, &'a B)| {
        state
            .local_state(participant)
            .map(|local| (participant, behavior, local))
    };
    behaviors.iter().filter_map(located).flat_map(move |sender| {
        behaviors
            .iter()
            .filter_map(located)
            .filter(move |receiver| receiver.0 != sender.0)
            .map(move |receiver| (sender, receiver))
    })
}

/// Buffered sends: the sender advances and the message joins the tail of the
/// receiver's queue. Saturated or disabled queues produce nothing.
pub fn asynchronous_send_candidates<B: ParticipantBehavior>(
    behaviors: &BTreeMap<Participant, B>,
    state: &GlobalState,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for ((sender, sender_behavior, current), (receiver, receiver_behavior, _)) in pairs(behaviors, state) {
        for name in channel(sender_behavior, receiver_behavior) {
            let message = Message::output(name);
            let action = LocalAction::AsynchronousSend(message.clone());
            for local_target in local_targets(sender_behavior, current, &action) {
                let mut target = state.clone();
                let enqueued = target
                    .queue_mut(receiver)
                    .is_some_and(|queue| queue.try_enqueue(message.clone()));
                if !enqueued {
                    trace!("queue of {receiver} refuses {name} from {sender}");
                    continue;
                }
                target.set_local_state(sender, local_target.clone());
                candidates.push(Candidate {
                    kind: TransitionKind::AsynchronousSend {
                        sender: sender.clone(),
                        receiver: receiver.clone(),
                        message: message.clone(),
                    },
                    target,
                });
            }
        }
    }
    candidates
}

/// Consumption from the head of a participant's own queue.
pub fn asynchronous_receive_candidates<B: ParticipantBehavior>(
    behaviors: &BTreeMap<Participant, B>,
    state: &GlobalState,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (participant, behavior) in behaviors {
        let Some(current) = state.local_state(participant) else {
            continue;
        };
        for input in behavior.input_messages() {
            let action = LocalAction::AsynchronousReceive(input.clone());
            for local_target in local_targets(behavior, current, &action) {
                let mut target = state.clone();
                let consumed = target
                    .queue_mut(participant)
                    .is_some_and(|queue| queue.try_dequeue_if_head_matches(input.name()));
                if !consumed {
                    continue;
                }
                target.set_local_state(participant, local_target.clone());
                candidates.push(Candidate {
                    kind: TransitionKind::AsynchronousReceiveAndConsumption {
                        message: input.clone(),
                    },
                    target,
                });
            }
        }
    }
    candidates
}

/// Rendezvous between a synchronous send and the matching synchronous
/// receive. Both participants advance together and no queue changes.
///
/// Fails when either side has more than one matching local transition.
pub fn synchronous_rendezvous_candidates<B: ParticipantBehavior>(
    behaviors: &BTreeMap<Participant, B>,
    state: &GlobalState,
) -> Result<Vec<Candidate>, GenerateError> {
    let mut candidates = Vec::new();
    for ((sender, sender_behavior, sender_state), (receiver, receiver_behavior, receiver_state)) in
        pairs(behaviors, state)
    {
        for name in channel(sender_behavior, receiver_behavior) {
            let send = LocalAction::SynchronousSend(Message::output(name));
            let receive = LocalAction::SynchronousReceive(Message::input(name));
            let sends: Vec<_> = local_targets(sender_behavior, sender_state, &send).collect();
            let receives: Vec<_> = local_targets(receiver_behavior, receiver_state, &receive).collect();

            validate_rendezvous(sender, sender_state, name, "send", sends.len())?;
            validate_rendezvous(receiver, receiver_state, name, "receive", receives.len())?;

            if let ([sender_target], [receiver_target]) = (sends.as_slice(), receives.as_slice()) {
                let mut target = state.clone();
                target.set_local_state(sender, (*sender_target).clone());
                target.set_local_state(receiver, (*receiver_target).clone());
                candidates.push(Candidate {
                    kind: TransitionKind::SynchronousSendReceive {
                        sender: sender.clone(),
                        receiver: receiver.clone(),
                        message_name: name.to_string(),
                    },
                    target,
                });
            }
        }
    }
    Ok(candidates)
}

/// Silent steps of a single participant.
pub fn internal_action_candidates<B: ParticipantBehavior>(
    behaviors: &BTreeMap<Participant, B>,
    state: &GlobalState,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (participant, behavior) in behaviors {
        let Some(current) = state.local_state(participant) else {
            continue;
        };
        for local_target in local_targets(behavior, current, &LocalAction::Internal) {
            let mut target = state.clone();
            target.set_local_state(participant, local_target.clone());
            candidates.push(Candidate {
                kind: TransitionKind::InternalAction,
                target,
            });
        }
    }
    candidates
}

/// All candidates leaving `state`: asynchronous sends, asynchronous receives,
/// rendezvous, then internal actions.
pub fn discover<B: ParticipantBehavior>(
    behaviors: &BTreeMap<Participant, B>,
    state: &GlobalState,
) -> Result<Vec<Candidate>, GenerateError> {
    let mut candidates = asynchronous_send_candidates(behaviors, state);
    candidates.extend(asynchronous_receive_candidates(behaviors, state));
    candidates.extend(synchronous_rendezvous_candidates(behaviors, state)?);
    candidates.extend(internal_action_candidates(behaviors, state));
    Ok(candidates)
}
