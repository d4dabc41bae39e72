//! Client/Server
//!
//! This example explores a request/response protocol and then repeats it with
//! a synchronous handshake in front.
//!
//! Key concepts:
//! - Asynchronous request and response through bounded queues
//! - How queue capacity shapes the reachable states
//! - Synchronous rendezvous that bypasses queues
//!
//! Run with: cargo run --example client_server

use hybrid_system_behavior::{
    GenerateError, GeneratorBuilder, HybridSystemBehavior, LocalBehavior, TransitionKind,
};

fn client() -> LocalBehavior {
    LocalBehavior::builder()
        .initial("idle")
        .output("hello")
        .output("req")
        .input("resp")
        .sync_send("idle", "ready", "hello")
        .async_send("ready", "waiting", "req")
        .async_receive("waiting", "ready", "resp")
        .build()
        .expect("client behavior")
}

fn server() -> LocalBehavior {
    LocalBehavior::builder()
        .initial("closed")
        .input("hello")
        .input("req")
        .output("resp")
        .sync_receive("closed", "listening", "hello")
        .async_receive("listening", "busy", "req")
        .async_send("busy", "listening", "resp")
        .build()
        .expect("server behavior")
}

fn explore(capacity: i64) -> Result<HybridSystemBehavior, GenerateError> {
    GeneratorBuilder::new()
        .participant("Client", client())
        .participant("Server", server())
        .uniform_capacity(capacity)
        .build()?
        .generate()
}

fn print_graph(graph: &HybridSystemBehavior) {
    println!("Initial state: {}", graph.initial_state());
    println!(
        "States: {}, transitions: {}",
        graph.state_count(),
        graph.transition_count()
    );
    for transition in graph.transitions() {
        let marker = match transition.kind {
            TransitionKind::SynchronousSendReceive { .. } => "sync ",
            TransitionKind::AsynchronousSend { .. } => "send ",
            TransitionKind::AsynchronousReceiveAndConsumption { .. } => "recv ",
            TransitionKind::InternalAction => "tau  ",
        };
        println!("  {marker}{}", graph.render_transition(transition));
    }
    println!();
}

fn main() {
    println!("=== Client/Server Example ===\n");

    println!("Scenario 1: Queues of capacity 1");
    match explore(1) {
        Ok(graph) => print_graph(&graph),
        Err(error) => println!("  ✗ {error}\n"),
    }

    println!("Scenario 2: Queues disabled");
    println!("  Only the handshake can happen");
    match explore(0) {
        Ok(graph) => print_graph(&graph),
        Err(error) => println!("  ✗ {error}\n"),
    }

    println!("Scenario 3: Negative capacity");
    match explore(-1) {
        Ok(graph) => print_graph(&graph),
        Err(error) => println!("  ✗ {error}\n"),
    }
}
