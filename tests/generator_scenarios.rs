//! End-to-end generation scenarios.
//!
//! Expected sizes were worked out by hand for the small models; the
//! six-participant model mixes every transition kind.

use hybrid_system_behavior::{
    BuildError, GenerateError, GeneratorBuilder, HybridSystemBehavior,
    HybridSystemBehaviorGenerator, LocalBehavior, Message, Participant, TransitionKind, Violation,
};
use std::collections::BTreeMap;

fn p(name: &str) -> Participant {
    Participant::new(name)
}

fn generate(
    behaviors: Vec<(&str, LocalBehavior)>,
    capacities: &[(&str, i64)],
) -> Result<HybridSystemBehavior, GenerateError> {
    let behaviors = behaviors
        .into_iter()
        .map(|(name, behavior)| (p(name), behavior))
        .collect();
    let capacities = capacities
        .iter()
        .map(|(name, capacity)| (p(name), *capacity))
        .collect();
    HybridSystemBehaviorGenerator::with_capacities(behaviors, capacities)?.generate()
}

fn two_participants() -> Vec<(&'static str, LocalBehavior)> {
    vec![
        (
            "P1",
            LocalBehavior::builder()
                .initial("s0")
                .output("m1")
                .async_send("s0", "s1", "m1")
                .build()
                .unwrap(),
        ),
        (
            "P2",
            LocalBehavior::builder()
                .initial("s0")
                .input("m1")
                .async_receive("s0", "s1", "m1")
                .build()
                .unwrap(),
        ),
    ]
}

fn six_participants() -> Vec<(&'static str, LocalBehavior)> {
    vec![
        (
            "P1",
            LocalBehavior::builder()
                .initial("s0")
                .output("m1")
                .async_send("s0", "s1", "m1")
                .build()
                .unwrap(),
        ),
        (
            "P2",
            LocalBehavior::builder()
                .initial("s0")
                .output("m2")
                .output("m5")
                .async_send("s0", "s2", "m2")
                .internal("s2", "s5")
                .async_send("s2", "s5", "m5")
                .build()
                .unwrap(),
        ),
        (
            "P3",
            LocalBehavior::builder()
                .initial("s0")
                .input("m1")
                .input("m2")
                .input("m5")
                .output("m6")
                .async_receive("s0", "s1", "m1")
                .async_receive("s1", "s2", "m2")
                .async_receive("s2", "s5", "m5")
                .internal("s2", "s5")
                .sync_send("s2", "s5", "m6")
                .build()
                .unwrap(),
        ),
        (
            "P4",
            LocalBehavior::builder()
                .initial("s0")
                .output("m3")
                .sync_send("s0", "s3", "m3")
                .internal("s0", "s3")
                .build()
                .unwrap(),
        ),
        (
            "P5",
            LocalBehavior::builder()
                .initial("s0")
                .output("m4")
                .output("m7")
                .sync_send("s0", "s4", "m4")
                .sync_send("s0", "s5", "m7")
                .internal("s0", "s5")
                .sync_send("s4", "s5", "m7")
                .build()
                .unwrap(),
        ),
        (
            "P6",
            LocalBehavior::builder()
                .initial("s0")
                .input("m3")
                .input("m4")
                .input("m6")
                .input("m7")
                .sync_receive("s0", "s3", "m3")
                .sync_receive("s0", "s4", "m4")
                .internal("s0", "s5")
                .sync_receive("s3", "s4", "m6")
                .sync_receive("s4", "s5", "m7")
                .build()
                .unwrap(),
        ),
    ]
}

fn client_server() -> Vec<(&'static str, LocalBehavior)> {
    vec![
        (
            "C",
            LocalBehavior::builder()
                .initial("c0")
                .output("req")
                .input("resp")
                .async_send("c0", "c1", "req")
                .async_receive("c1", "c0", "resp")
                .build()
                .unwrap(),
        ),
        (
            "S",
            LocalBehavior::builder()
                .initial("s0")
                .input("req")
                .output("resp")
                .async_receive("s0", "s1", "req")
                .async_send("s1", "s0", "resp")
                .build()
                .unwrap(),
        ),
    ]
}

fn burst() -> Vec<(&'static str, LocalBehavior)> {
    vec![
        (
            "P",
            LocalBehavior::builder()
                .initial("p0")
                .output("m")
                .async_send("p0", "p1", "m")
                .async_send("p1", "p2", "m")
                .build()
                .unwrap(),
        ),
        (
            "Q",
            LocalBehavior::builder()
                .initial("q0")
                .input("m")
                .async_receive("q0", "q1", "m")
                .async_receive("q1", "q2", "m")
                .build()
                .unwrap(),
        ),
    ]
}

#[test]
fn two_participant_example_matches_expected_graph() {
    let graph = generate(two_participants(), &[("P1", 1), ("P2", 1)]).unwrap();

    assert_eq!(graph.state_count(), 3);
    assert_eq!(graph.transition_count(), 2);
    assert_eq!(graph.initial_state().to_string(), "(P1:s0:[],P2:s0:[])");

    let rendered: Vec<_> = graph
        .transitions()
        .iter()
        .map(|transition| graph.render_transition(transition))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "(P1:(P1:s0:[],P2:s0:[]), m1, P2:(P1:s1:[],P2:s0:[m1]), asynchronous)",
            "((P1:s1:[],P2:s0:[m1]), epsilon, (P1:s1:[],P2:s1:[]))",
        ]
    );

    assert_eq!(
        graph.transitions()[0].kind,
        TransitionKind::AsynchronousSend {
            sender: p("P1"),
            receiver: p("P2"),
            message: Message::output("m1"),
        }
    );
    assert_eq!(
        graph.transitions()[1].kind,
        TransitionKind::AsynchronousReceiveAndConsumption {
            message: Message::input("m1"),
        }
    );
    assert_eq!(graph.messages().len(), 2);
}

#[test]
fn disabled_queues_block_asynchronous_communication() {
    let graph = generate(two_participants(), &[("P1", 0), ("P2", 0)]).unwrap();

    assert_eq!(graph.state_count(), 1);
    assert_eq!(graph.transition_count(), 0);
}

#[test]
fn six_participant_model_mixes_every_kind() {
    let capacities = [
        ("P1", 1),
        ("P2", 1),
        ("P3", 1),
        ("P4", 0),
        ("P5", 0),
        ("P6", 0),
    ];
    let graph = generate(six_participants(), &capacities).unwrap();

    assert_eq!(graph.state_count(), 162);
    assert_eq!(graph.transition_count(), 468);

    let count = |check: fn(&TransitionKind) -> bool| {
        graph
            .transitions()
            .iter()
            .filter(|transition| check(&transition.kind))
            .count()
    };
    assert!(count(|kind| matches!(kind, TransitionKind::AsynchronousSend { .. })) > 0);
    assert!(count(|kind| matches!(kind, TransitionKind::AsynchronousReceiveAndConsumption { .. })) > 0);
    assert!(count(TransitionKind::is_synchronous) > 0);
    assert!(count(|kind| matches!(kind, TransitionKind::InternalAction)) > 0);

    for transition in graph.transitions() {
        if let TransitionKind::AsynchronousSend { receiver, .. } = &transition.kind {
            assert_eq!(receiver, &p("P3"));
        }
    }
}

#[test]
fn six_participant_queues_stay_within_capacity() {
    let capacities = [
        ("P1", 1),
        ("P2", 1),
        ("P3", 1),
        ("P4", 0),
        ("P5", 0),
        ("P6", 0),
    ];
    let graph = generate(six_participants(), &capacities).unwrap();

    for state in graph.states() {
        for (participant, queue) in state.queues() {
            assert!(queue.len() <= graph.queue_capacities()[participant]);
        }
    }
}

#[test]
fn client_server_loop_closes_back_on_initial_state() {
    let graph = generate(client_server(), &[("C", 1), ("S", 1)]).unwrap();

    assert_eq!(graph.state_count(), 4);
    assert_eq!(graph.transition_count(), 4);
    assert!(graph
        .transitions()
        .iter()
        .any(|transition| transition.target == graph.initial_state_id()));
}

#[test]
fn queue_capacity_bounds_the_reachable_states() {
    let expected = [(0, 1, 0), (1, 5, 4), (2, 6, 6), (3, 6, 6)];

    for (capacity, states, transitions) in expected {
        let graph = generate(burst(), &[("P", 1), ("Q", capacity)]).unwrap();

        assert_eq!(graph.state_count(), states, "capacity {capacity}");
        assert_eq!(graph.transition_count(), transitions, "capacity {capacity}");
    }
}

#[test]
fn rendezvous_and_internal_choice() {
    let behaviors = vec![
        (
            "A",
            LocalBehavior::builder()
                .initial("a0")
                .output("ping")
                .sync_send("a0", "a1", "ping")
                .internal("a0", "a2")
                .build()
                .unwrap(),
        ),
        (
            "B",
            LocalBehavior::builder()
                .initial("b0")
                .input("ping")
                .sync_receive("b0", "b1", "ping")
                .build()
                .unwrap(),
        ),
    ];
    let graph = generate(behaviors, &[("A", 0), ("B", 0)]).unwrap();

    assert_eq!(graph.state_count(), 3);
    assert_eq!(graph.transition_count(), 2);
    assert_eq!(
        graph.render_transition(&graph.transitions()[0]),
        "(A:(A:a0:[],B:b0:[]), ping, B:(A:a1:[],B:b1:[]), synchronous)"
    );
    assert_eq!(
        graph.render_transition(&graph.transitions()[1]),
        "((A:a0:[],B:b0:[]), epsilon, (A:a2:[],B:b0:[]))"
    );
}

#[test]
fn repeated_synchronous_send_fires_one_rendezvous() {
    let behaviors = vec![
        (
            "A",
            LocalBehavior::builder()
                .initial("a0")
                .output("ping")
                .sync_send("a0", "a1", "ping")
                .sync_send("a0", "a1", "ping")
                .build()
                .unwrap(),
        ),
        (
            "B",
            LocalBehavior::builder()
                .initial("b0")
                .input("ping")
                .sync_receive("b0", "b1", "ping")
                .build()
                .unwrap(),
        ),
    ];
    let graph = generate(behaviors, &[("A", 0), ("B", 0)]).unwrap();

    assert_eq!(graph.state_count(), 2);
    assert_eq!(graph.transition_count(), 1);
    assert!(matches!(
        &graph.transitions()[0].kind,
        TransitionKind::SynchronousSendReceive { message_name, .. } if message_name == "ping"
    ));
}

#[test]
fn ambiguous_rendezvous_fails_only_when_reachable() {
    let ambiguous = |reachable: bool| {
        let mut receiver = LocalBehavior::builder()
            .initial("b0")
            .input("ping")
            .sync_receive("b1", "b2", "ping")
            .sync_receive("b1", "b3", "ping");
        if reachable {
            receiver = receiver.internal("b0", "b1");
        }
        vec![
            (
                "A",
                LocalBehavior::builder()
                    .initial("a0")
                    .output("ping")
                    .sync_send("a0", "a1", "ping")
                    .build()
                    .unwrap(),
            ),
            ("B", receiver.build().unwrap()),
        ]
    };

    assert!(generate(ambiguous(false), &[("A", 0), ("B", 0)]).is_ok());

    let error = generate(ambiguous(true), &[("A", 0), ("B", 0)]).unwrap_err();
    assert!(error.is_malformed_input());
    assert!(matches!(
        error.violations(),
        [Violation::AmbiguousSynchronousTransitions { participant, count: 2, .. }] if participant == "B"
    ));
}

#[test]
fn shared_input_message_is_malformed() {
    let consumer = || {
        LocalBehavior::builder()
            .initial("s0")
            .input("m1")
            .async_receive("s0", "s1", "m1")
            .build()
            .unwrap()
    };
    let behaviors = BTreeMap::from([(p("P1"), consumer()), (p("P2"), consumer())]);

    let error = HybridSystemBehaviorGenerator::with_uniform_capacity(behaviors, 1).unwrap_err();

    assert!(matches!(error, GenerateError::MalformedInput(_)));
    assert_eq!(
        error.to_string(),
        "Malformed input: The input messages of participants P1 and P2 must be disjoint, both declare [m1]"
    );
}

#[test]
fn negative_capacity_is_malformed() {
    let error = generate(two_participants(), &[("P1", 1), ("P2", -1)]).unwrap_err();

    assert_eq!(
        error.violations(),
        &[Violation::NegativeCapacity {
            element: "queue capacity of P2".to_string(),
            value: -1,
        }]
    );
}

#[test]
fn empty_model_is_malformed() {
    let behaviors: BTreeMap<Participant, LocalBehavior> = BTreeMap::new();

    let error = HybridSystemBehaviorGenerator::with_capacities(behaviors, BTreeMap::new()).unwrap_err();

    assert_eq!(error.violations().len(), 2);
    assert!(error
        .violations()
        .iter()
        .all(|violation| matches!(violation, Violation::EmptyMap { .. })));
}

#[test]
fn builder_reports_absent_values() {
    let missing_initial = LocalBehavior::builder().output("m1").build();
    assert_eq!(missing_initial, Err(BuildError::MissingInitialState));

    let error = GeneratorBuilder::new()
        .participant("P1", two_participants().remove(0).1)
        .build()
        .unwrap_err();
    assert_eq!(
        error,
        GenerateError::AbsentRequiredValue(BuildError::MissingCapacity {
            participant: "P1".to_string()
        })
    );
}
