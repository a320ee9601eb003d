mod common;

use common::{id, load_map, names};
use wayfinder_lib::{
    uniform_cost_search, Error, MoveKind, StuckReason, Traversal, TraversalPhase,
};

const DIAMOND: &str = "A B 4\nB D 3\nA C 2\nC D 5\n";

#[test]
fn begin_plans_initial_route_and_stands_at_origin() {
    let (map, graph) = load_map(DIAMOND);

    let session = Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");
    assert_eq!(session.phase(), TraversalPhase::AtNode);
    assert_eq!(session.current(), id(&map, "A"));
    assert_eq!(names(&map, &session.active_path().nodes), vec!["A", "B", "D"]);
    assert_eq!(session.position(), 0);
    assert_eq!(session.recomputations(), 0);
}

#[test]
fn conforming_moves_never_replan_and_keep_the_original_path() {
    let (map, graph) = load_map(DIAMOND);
    let mut session =
        Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");
    let initial = session.active_path().clone();

    let first = session.select(id(&map, "B")).expect("legal move");
    assert_eq!(first, MoveKind::Conforming);
    assert_eq!(session.phase(), TraversalPhase::AtNode);
    assert_eq!(session.position(), 1);

    let second = session.select(id(&map, "D")).expect("legal move");
    assert_eq!(second, MoveKind::Conforming);

    assert_eq!(session.phase(), TraversalPhase::Arrived);
    assert_eq!(session.active_path(), &initial);
    assert_eq!(session.recomputations(), 0);
    assert_eq!(names(&map, session.walked()), vec!["A", "B", "D"]);
    assert_eq!(session.walked_cost(), 7.0);
}

#[test]
fn deviation_replans_exactly_once_from_the_chosen_node() {
    let (map, graph) = load_map(DIAMOND);
    let mut session =
        Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");

    // The plan says A-B-D; step onto C instead.
    let kind = session.select(id(&map, "C")).expect("legal move");
    assert_eq!(kind, MoveKind::Deviating);
    assert_eq!(session.recomputations(), 1);
    assert_eq!(session.position(), 0);

    // The replanned route starts at the node actually stepped onto, and is
    // itself optimal from there.
    let expected =
        uniform_cost_search(&graph, id(&map, "C"), id(&map, "D")).expect("declared nodes");
    assert_eq!(session.active_path(), &expected);
    assert_eq!(session.active_path().nodes[0], id(&map, "C"));
    assert_eq!(names(&map, &session.active_path().nodes), vec!["C", "D"]);
}

#[test]
fn conforming_after_deviation_follows_the_new_plan() {
    let (map, graph) = load_map(DIAMOND);
    let mut session =
        Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");

    session.select(id(&map, "C")).expect("deviation");
    let kind = session.select(id(&map, "D")).expect("conforming finish");

    assert_eq!(kind, MoveKind::Conforming);
    assert_eq!(session.phase(), TraversalPhase::Arrived);
    assert_eq!(session.recomputations(), 1);
    assert_eq!(names(&map, session.walked()), vec!["A", "C", "D"]);
    assert_eq!(session.walked_cost(), 7.0);
}

#[test]
fn deviating_straight_onto_the_destination_arrives_without_replanning() {
    // Plan A-B-D, but the traveller takes the expensive direct edge.
    let (map, graph) = load_map("A B 1\nB D 1\nA D 10\n");
    let mut session =
        Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");

    let kind = session.select(id(&map, "D")).expect("legal move");
    assert_eq!(kind, MoveKind::Deviating);
    assert_eq!(session.phase(), TraversalPhase::Arrived);
    assert_eq!(session.recomputations(), 0);
    assert_eq!(session.walked_cost(), 10.0);
}

#[test]
fn invalid_selection_is_rejected_and_state_does_not_advance() {
    let (map, graph) = load_map(DIAMOND);
    let mut session =
        Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");

    // D is not adjacent to A in this map.
    let error = session.select(id(&map, "D")).expect_err("not a neighbour");
    assert!(matches!(error, Error::InvalidSelection { .. }));

    assert_eq!(session.phase(), TraversalPhase::AtNode);
    assert_eq!(session.current(), id(&map, "A"));
    assert_eq!(session.position(), 0);
    assert_eq!(session.recomputations(), 0);
    assert_eq!(names(&map, session.walked()), vec!["A"]);
}

#[test]
fn dead_end_node_sticks_the_session() {
    let (map, graph) = load_map("A B 1\nB D 1\nA X 1 oneway\n");
    let mut session =
        Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");

    let kind = session.select(id(&map, "X")).expect("legal move");
    assert_eq!(kind, MoveKind::Deviating);
    assert_eq!(session.phase(), TraversalPhase::Stuck(StuckReason::DeadEnd));
    assert_eq!(names(&map, session.walked()), vec!["A", "X"]);
}

#[test]
fn deviation_into_unreachable_region_sticks_the_session() {
    // C-E form a one-way trap: reachable from A, never reaching D.
    let (map, graph) = load_map("A B 1\nB D 1\nA C 1 oneway\nC E 1 oneway\nE C 1 oneway\n");
    let mut session =
        Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");

    let kind = session.select(id(&map, "C")).expect("legal move");
    assert_eq!(kind, MoveKind::Deviating);
    assert_eq!(session.recomputations(), 1);
    assert_eq!(
        session.phase(),
        TraversalPhase::Stuck(StuckReason::DestinationUnreachable)
    );
}

#[test]
fn unreachable_destination_sticks_the_session_at_begin() {
    let (map, graph) = load_map("A B 4\nC D 2\n");

    let session = Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");
    assert_eq!(
        session.phase(),
        TraversalPhase::Stuck(StuckReason::NoRouteFromOrigin)
    );
    assert!(session.active_path().is_empty());
}

#[test]
fn origin_equal_to_destination_arrives_immediately() {
    let (map, graph) = load_map("A B 4\n");
    let a = id(&map, "A");

    let session = Traversal::begin(&map, &graph, a, a).expect("begins");
    assert_eq!(session.phase(), TraversalPhase::Arrived);
    assert_eq!(session.active_path().nodes, vec![a]);
    assert_eq!(session.walked_cost(), 0.0);
}

#[test]
fn terminal_sessions_reject_further_moves() {
    let (map, graph) = load_map("A B 4\n");
    let mut session =
        Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "B")).expect("begins");
    session.select(id(&map, "B")).expect("arrives");

    let error = session.select(id(&map, "A")).expect_err("terminal");
    assert!(matches!(error, Error::TraversalEnded));
}

#[test]
fn begin_rejects_undeclared_endpoints() {
    let (map, graph) = load_map("A B 4\n");

    let error = Traversal::begin(&map, &graph, id(&map, "A"), 42).expect_err("undeclared");
    assert!(matches!(error, Error::UnknownNodeId { id: 42 }));
}

#[test]
fn snapshot_exposes_legal_moves_and_serialises() {
    let (map, graph) = load_map(DIAMOND);
    let session = Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");

    let snapshot = session.snapshot().expect("current node declared");
    assert_eq!(snapshot.current.display_name(), "A");
    assert_eq!(snapshot.moves.len(), 2);
    assert_eq!(snapshot.position, 0);
    assert_eq!(snapshot.recomputations, 0);

    let json = serde_json::to_value(&snapshot).expect("serialises");
    assert_eq!(json["phase"], "at_node");
    assert_eq!(json["current"]["name"], "A");
    assert_eq!(json["route"][1]["name"], "B");
}

#[test]
fn snapshot_of_terminal_session_has_no_moves() {
    let (map, graph) = load_map("A B 4\nC D 2\n");
    let session = Traversal::begin(&map, &graph, id(&map, "A"), id(&map, "D")).expect("begins");

    let snapshot = session.snapshot().expect("declared");
    assert!(snapshot.moves.is_empty());

    let json = serde_json::to_value(&snapshot).expect("serialises");
    assert_eq!(json["phase"]["stuck"], "no_route_from_origin");
}
