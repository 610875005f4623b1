//! Span definitions per operation: cpdag, extension, intervention, selection.

/// Create a CPDAG construction span.
#[macro_export]
macro_rules! cpdag_span {
    ($nodes:expr, $arcs:expr) => {
        tracing::debug_span!("causal.cpdag", nodes = $nodes, arcs = $arcs)
    };
}

/// Create a consistent-extension span.
#[macro_export]
macro_rules! extension_span {
    ($mode:expr, $edges:expr) => {
        tracing::debug_span!("causal.extension", mode = %$mode, undirected = $edges)
    };
}

/// Create an interventional refinement span.
#[macro_export]
macro_rules! intervention_span {
    ($targets:expr) => {
        tracing::debug_span!("causal.intervention", targets = ?$targets)
    };
}

/// Create an intervention selection span.
#[macro_export]
macro_rules! selection_span {
    ($policy:expr, $candidates:expr) => {
        tracing::info_span!("causal.selection", policy = %$policy, candidates = $candidates)
    };
}

