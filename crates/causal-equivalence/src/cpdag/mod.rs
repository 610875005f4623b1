//! CPDAG construction: skeleton, v-structures, then Meek closure.

pub mod meek;
pub mod vstructures;

use causal_core::tracing_setup::events;
use causal_core::{cpdag_span, Arc, Dag, GraphError, PdagError};

use crate::pdag::Pdag;

pub use meek::{MeekRule, MeekStats};

/// Compute the completed PDAG of `dag`'s Markov equivalence class.
///
/// Fails with [`GraphError::Cycle`] when `dag` is not acyclic.
pub fn build(dag: &Dag) -> Result<Pdag, GraphError> {
    dag.topological_sort()?;
    let _span = cpdag_span!(dag.num_nodes(), dag.num_arcs()).entered();

    let mut pdag = Pdag::skeleton_of(dag);
    let vstructures = vstructures::orient_vstructures(dag, &mut pdag);
    let stats = meek::close(&mut pdag);

    tracing::trace!(propagated = stats.total(), "meek closure applied");
    events::cpdag_built(pdag.num_nodes(), pdag.num_arcs(), pdag.num_edges(), vstructures);
    Ok(pdag)
}

/// Like [`build`], with extra arcs of `dag` known to be oriented (background
/// knowledge) before closure. Each known arc must be an arc of `dag`.
pub fn build_with_known_arcs<I>(dag: &Dag, known: I) -> Result<Pdag, causal_core::EquivalenceError>
where
    I: IntoIterator<Item = Arc>,
{
    dag.topological_sort()?;
    let mut pdag = Pdag::skeleton_of(dag);
    let vstructures = vstructures::orient_vstructures(dag, &mut pdag);
    for (from, to) in known {
        if !dag.has_arc(from, to) {
            return Err(PdagError::InvalidArc { from, to }.into());
        }
        if pdag.has_edge(from, to) {
            pdag.orient(from, to);
        }
    }
    meek::close(&mut pdag);
    events::cpdag_built(pdag.num_nodes(), pdag.num_arcs(), pdag.num_edges(), vstructures);
    Ok(pdag)
}
