//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::Node;

/// Log a completed CPDAG construction.
pub fn cpdag_built(nodes: usize, compelled: usize, reversible: usize, vstructures: usize) {
    tracing::debug!(
        event = "cpdag_built",
        nodes = nodes,
        compelled = compelled,
        reversible = reversible,
        vstructures = vstructures,
        "cpdag built"
    );
}

/// Log a Meek closure fixed point.
pub fn meek_closure_reached(passes: usize, r1: usize, r2: usize, r3: usize, r4: usize) {
    tracing::trace!(
        event = "meek_closure_reached",
        passes = passes,
        r1 = r1,
        r2 = r2,
        r3 = r3,
        r4 = r4,
        "meek closure reached fixed point"
    );
}

/// Log one enumerated extension. `verbose` promotes the event to `info`.
pub fn extension_found(index: usize, arcs: &[(Node, Node)], verbose: bool) {
    if verbose {
        tracing::info!(event = "extension_found", index = index, arcs = ?arcs, "extension found");
    } else {
        tracing::trace!(event = "extension_found", index = index, arcs = ?arcs, "extension found");
    }
}

/// Log the end of an enumeration.
pub fn extensions_enumerated(count: usize, states: usize, truncated: bool) {
    if truncated {
        tracing::warn!(
            event = "extensions_enumerated",
            count = count,
            states = states,
            truncated = truncated,
            "extension enumeration hit its limit"
        );
    } else {
        tracing::debug!(
            event = "extensions_enumerated",
            count = count,
            states = states,
            truncated = truncated,
            "extension enumeration complete"
        );
    }
}

/// Log an interventional refinement.
pub fn interventional_cpdag_built(targets: usize, newly_oriented: usize, remaining: usize) {
    tracing::debug!(
        event = "interventional_cpdag_built",
        targets = targets,
        newly_oriented = newly_oriented,
        remaining = remaining,
        "interventional cpdag built"
    );
}

/// Log the selected intervention.
pub fn intervention_selected(node: Node, score: f64, remaining: usize, policy: &str) {
    tracing::info!(
        event = "intervention_selected",
        node = node,
        score = score,
        remaining = remaining,
        policy = %policy,
        "intervention selected"
    );
}
