use grd::{
    ast::{BinaryOperator, Expr},
    error::{ExpressionError, SyntaxError},
    interpreter::{
        expression::{Expression, evaluate, is_expression},
        graph::{Edge, Graph},
        parser::{block::Blocks, node::parse_node},
    },
};
use pretty_assertions::assert_eq;

fn target(name: &str) -> Edge {
    Edge::Target(name.to_string())
}

fn value(src: &str) -> f64 {
    Expression::compile(src).unwrap_or_else(|e| panic!("{src:?} failed to compile: {e}")).value()
}

#[test]
fn blocks_keep_nested_references_together() {
    let blocks = Blocks::new("junk [A {print($[$[k]])} -> B] more [B {print(x)}]")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(blocks, vec!["[A {print($[$[k]])} -> B]", "[B {print(x)}]"]);
}

#[test]
fn blocks_stop_after_mismatched_bracket() {
    let mut blocks = Blocks::new("[A {print(a)}] [B {print($[a)}");

    assert_eq!(blocks.next(), Some(Ok("[A {print(a)}]")));
    assert_eq!(blocks.next(), Some(Err(SyntaxError::MismatchedBrackets { offset: 15 })));
    assert_eq!(blocks.next(), None);
}

#[test]
fn header_block_without_edges_ends_at_operation() {
    let blocks = Blocks::new("[END]{print(end)}\n[v]{0}").collect::<Result<Vec<_>, _>>();

    assert_eq!(blocks, Ok(vec!["[END]{print(end)}", "[v]{0}"]));
}

#[test]
fn node_without_edges() {
    let node = parse_node("[counter {0}]").unwrap();

    assert_eq!(node.name, "counter");
    assert_eq!(node.operation, "0");
    assert!(node.edges.is_empty());
}

#[test]
fn node_with_placeholder_edge() {
    let node = parse_node("[F {print(f)} -> NONE | NEXT]").unwrap();

    assert_eq!(node.edges, vec![Edge::Placeholder, target("NEXT")]);
}

#[test]
fn header_node_parses_like_bracketed_node() {
    let header = parse_node("[LOOP]{if($[i] < 3)}->DONE|BODY").unwrap();
    let bracketed = parse_node("[LOOP {if($[i] < 3)} -> DONE | BODY]").unwrap();

    assert_eq!(header, bracketed);
}

#[test]
fn invalid_node_names() {
    assert_eq!(parse_node("[ {print(a)}]"),
               Err(SyntaxError::InvalidNodeName { name: String::new() }));
    assert_eq!(parse_node("[NONE {print(a)}]"),
               Err(SyntaxError::InvalidNodeName { name: "NONE".to_string() }));
}

#[test]
fn invalid_operations() {
    assert!(matches!(parse_node("[A]"), Err(SyntaxError::InvalidOperation { .. })));
    assert!(matches!(parse_node("[A {   }]"), Err(SyntaxError::InvalidOperation { .. })));
    assert!(matches!(parse_node("[A {print(a)]"), Err(SyntaxError::InvalidOperation { .. })));
}

#[test]
fn invalid_edge_lists() {
    let invalid = Err(SyntaxError::InvalidEdges { node: "A".to_string() });

    assert_eq!(parse_node("[A {print(a)} -> ]"), invalid);
    assert_eq!(parse_node("[A {print(a)} -> B || C]"), invalid);
}

#[test]
fn program_without_blocks_is_rejected() {
    assert_eq!(Graph::parse("no blocks here").unwrap_err(), SyntaxError::NoNodes);
}

#[test]
fn duplicate_names_keep_first_definition() {
    let graph = Graph::parse("[A {print(one)}] [A {print(two)}]").unwrap();
    let id = graph.lookup("A").unwrap();

    assert_eq!(graph.len(), 2);
    assert_eq!(id.index(), 0);
    assert_eq!(graph.node(id).operation, "print(one)");
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(value("2 + 3 * 4"), 14.0);
    assert_eq!(value("(2 + 3) * 4"), 20.0);
    assert_eq!(value("10 - 4 - 3"), 3.0);
    assert_eq!(value("8 / 4 / 2"), 1.0);
    assert_eq!(value(".5 + 5."), 5.5);
}

#[test]
fn comparisons_bind_looser_than_arithmetic() {
    assert_eq!(value("1 + 1 == 2"), 1.0);
    assert_eq!(value("1 + 1 = 3"), 0.0);
    assert_eq!(value("2 <> 3"), 1.0);
    assert_eq!(value("2 <= 2"), 1.0);
    assert_eq!(value("3 < 2"), 0.0);
}

#[test]
fn unary_operators() {
    assert_eq!(value("-3 + 5"), 2.0);
    assert_eq!(value("--3"), 3.0);
    assert_eq!(value("+4"), 4.0);
    assert_eq!(value("!0"), 1.0);
    assert_eq!(value("!(2 > 1)"), 0.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(value("1 / 0"), f64::INFINITY);
    assert_eq!(value("-1 / 0"), f64::NEG_INFINITY);
    assert!(value("0 / 0").is_nan());
}

#[test]
fn expression_errors() {
    assert_eq!(Expression::compile("1 +"), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(Expression::compile("(1 + 2"), Err(ExpressionError::ExpectedClosingParen));
    assert!(matches!(Expression::compile("1 2"), Err(ExpressionError::UnexpectedToken { .. })));
    assert!(matches!(Expression::compile("1 . 2"), Err(ExpressionError::InvalidToken { .. })));
    assert!(matches!(Expression::compile("1 $ 2"), Err(ExpressionError::InvalidToken { .. })));
}

#[test]
fn expression_gate() {
    assert!(is_expression("1 + 2"));
    assert!(is_expression("\t(3)"));
    assert!(!is_expression("1 + a"));
    assert!(!is_expression(""));

    assert_eq!(evaluate("hello").unwrap(), 0.0);
    assert_eq!(evaluate("6 * 7").unwrap(), 42.0);
    assert!(evaluate("6 *").is_err());
}

#[test]
fn comparisons_associate_to_the_left() {
    let expression = Expression::compile("1 < 2 == 1").unwrap();

    let Expr::BinaryOp { left, op, .. } = expression.root() else {
        panic!("expected a binary operation, got {:?}", expression.root());
    };
    assert_eq!(*op, BinaryOperator::Equal);
    assert!(matches!(**left, Expr::BinaryOp { op: BinaryOperator::Less, .. }));
    assert_eq!(expression.value(), 1.0);
}
