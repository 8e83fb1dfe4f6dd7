use grd::{
    error::{Error, RuntimeError},
    interpreter::{command::Outcome, engine::Engine, graph::Graph},
};
use pretty_assertions::assert_eq;

const CALLS: &str = r"
    [START {call(F)} -> AFTER]
    [AFTER {set(x, $[x] + 1)} -> END]
    [F     {set(x, 40 + 1)} -> NONE]
    [END   {print($[x])}]
    [x {0}]
";

#[test]
fn stepping_tracks_calls() {
    let graph = Graph::parse(CALLS).unwrap();
    let mut out = Vec::new();
    let mut engine = Engine::new(&graph, &mut out).unwrap();

    assert_eq!(engine.current(), graph.lookup("START").unwrap());
    assert_eq!(engine.call_depth(), 0);

    engine.step().unwrap();
    assert_eq!(engine.current(), graph.lookup("F").unwrap());
    assert_eq!(engine.call_depth(), 1);

    engine.step().unwrap();
    assert_eq!(engine.current(), graph.lookup("AFTER").unwrap());
    assert_eq!(engine.call_depth(), 0);
    assert_eq!(engine.store().value_of(&graph, "x"), Some("41"));

    engine.step().unwrap();
    assert_eq!(engine.current(), graph.lookup("END").unwrap());
    assert_eq!(engine.store().value_of(&graph, "x"), Some("42"));
}

#[test]
fn run_returns_final_values_and_leaves_graph_untouched() {
    let graph = Graph::parse(CALLS).unwrap();
    let mut out = Vec::new();

    let store = Engine::new(&graph, &mut out).unwrap().run().unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "42\n42\n");
    assert_eq!(store.value_of(&graph, "x"), Some("42"));
    assert_eq!(store.value_of(&graph, "missing"), None);

    let x = graph.lookup("x").unwrap();
    assert_eq!(graph.node(x).operation, "0");
}

#[test]
fn set_can_rewrite_a_node_that_runs_later() {
    let graph = Graph::parse(r#"
        [START {set(MSG, 7)} -> SHOW]
        [SHOW  {print($[MSG])} -> END]
        [MSG   {unused}]
        [END   {print("end")}]
    "#).unwrap();
    let mut out = Vec::new();

    Engine::new(&graph, &mut out).unwrap().run().unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "7\nend\nend\n");
}

#[test]
fn return_to_caller_without_edges_is_error() {
    let graph = Graph::parse(r"[START {call(F)}] [F {print(f)} -> NONE] [END {print(end)}]");
    let graph = graph.unwrap();
    let mut out = Vec::new();

    match Engine::new(&graph, &mut out).unwrap().run() {
        Err(Error::Runtime(RuntimeError::MissingNextNode { node })) => assert_eq!(node, "START"),
        other => panic!("expected missing next node, got {other:?}"),
    }
    assert_eq!(String::from_utf8(out).unwrap(), "f\n");
}

#[test]
fn call_from_node_without_edges_enters_function() {
    let graph = Graph::parse(r"[START {call(F)}] [F {print(f)} -> NONE] [END {print(end)}]");
    let graph = graph.unwrap();
    let mut engine = Engine::new(&graph, Vec::new()).unwrap();

    let outcome = engine.step().unwrap();

    assert_eq!(outcome, Outcome::Invoke(graph.lookup("F").unwrap()));
    assert_eq!(engine.current(), graph.lookup("F").unwrap());
    assert_eq!(engine.call_depth(), 1);
}
