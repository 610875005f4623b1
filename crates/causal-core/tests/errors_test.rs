//! Error codes and messages.

use causal_core::errors::error_code;
use causal_core::{ConfigError, EquivalenceError, ErrorCode, GraphError, PdagError};

#[test]
fn graph_errors_have_stable_codes() {
    let cases = [
        (GraphError::Cycle { path: vec![1, 2, 1] }, error_code::CYCLE_DETECTED),
        (GraphError::UnknownNode { node: 4 }, error_code::UNKNOWN_NODE),
        (GraphError::ArcNotFound { from: 1, to: 2 }, error_code::ARC_NOT_FOUND),
        (GraphError::SelfLoop { node: 3 }, error_code::SELF_LOOP),
        (
            GraphError::InvalidMatrix { reason: "ragged".into() },
            error_code::INVALID_MATRIX,
        ),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code);
    }
}

#[test]
fn pdag_errors_have_stable_codes() {
    assert_eq!(
        PdagError::InvalidArc { from: 1, to: 2 }.error_code(),
        error_code::INVALID_ARC
    );
    assert_eq!(PdagError::InvalidEdge { a: 1, b: 2 }.error_code(), error_code::INVALID_EDGE);
    assert_eq!(
        PdagError::Inconsistent { remaining: vec![1] }.error_code(),
        error_code::INCONSISTENT_PDAG
    );
    assert_eq!(PdagError::Conflict { a: 1, b: 2 }.error_code(), error_code::PDAG_CONFLICT);
    assert_eq!(
        PdagError::NotFullyDirected { edges: 2 }.error_code(),
        error_code::NOT_FULLY_DIRECTED
    );
}

#[test]
fn aggregate_error_forwards_codes() {
    let err: EquivalenceError = GraphError::UnknownNode { node: 9 }.into();
    assert_eq!(err.error_code(), error_code::UNKNOWN_NODE);

    let err: EquivalenceError = PdagError::InvalidEdge { a: 1, b: 2 }.into();
    assert_eq!(err.error_code(), error_code::INVALID_EDGE);

    let err: EquivalenceError = ConfigError::FileNotFound { path: "x.toml".into() }.into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);

    let err = EquivalenceError::SkeletonMismatch { details: "extra (1, 2)".into() };
    assert_eq!(err.error_code(), error_code::SKELETON_MISMATCH);
}

#[test]
fn coded_string_prefixes_the_code() {
    let err = GraphError::ArcNotFound { from: 1, to: 2 };
    assert_eq!(err.coded_string(), "[ARC_NOT_FOUND] arc 1 -> 2 not found");
}
