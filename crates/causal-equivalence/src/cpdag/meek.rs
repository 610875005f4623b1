//! Meek orientation rules R1–R4, applied to a fixed point.
//!
//! Each rule answers one question: does the current PDAG compel the undirected
//! edge `a - b` to be the arc `a -> b`? The rule set is confluent, so the order
//! in which edges are visited does not change the fixed point.

use causal_core::tracing_setup::events;
use causal_core::Node;

use crate::pdag::Pdag;

/// Which rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeekRule {
    /// `c -> a - b`, `c` and `b` non-adjacent.
    R1,
    /// `a -> c -> b` with `a - b`.
    R2,
    /// `a - c -> b`, `a - d -> b`, `c` and `d` non-adjacent.
    R3,
    /// `c -> d -> b`, `a` adjacent to `c` and `d`, `b` and `c` non-adjacent.
    R4,
}

/// Counters for one closure run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeekStats {
    /// Full sweeps over the undirected edges, including the final no-op sweep.
    pub passes: usize,
    pub r1: usize,
    pub r2: usize,
    pub r3: usize,
    pub r4: usize,
}

impl MeekStats {
    /// Total number of edges oriented.
    pub fn total(&self) -> usize {
        self.r1 + self.r2 + self.r3 + self.r4
    }

    fn record(&mut self, rule: MeekRule) {
        match rule {
            MeekRule::R1 => self.r1 += 1,
            MeekRule::R2 => self.r2 += 1,
            MeekRule::R3 => self.r3 += 1,
            MeekRule::R4 => self.r4 += 1,
        }
    }
}

/// Orient every undirected edge compelled by R1–R4 until no rule fires.
pub fn close(pdag: &mut Pdag) -> MeekStats {
    let mut stats = MeekStats::default();
    loop {
        stats.passes += 1;
        let mut changed = false;
        let edges: Vec<(Node, Node)> = pdag.edges().iter().copied().collect();
        for (x, y) in edges {
            let fired = compelling_rule(pdag, x, y)
                .map(|rule| (x, y, rule))
                .or_else(|| compelling_rule(pdag, y, x).map(|rule| (y, x, rule)));
            if let Some((from, to, rule)) = fired {
                pdag.orient(from, to);
                stats.record(rule);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    events::meek_closure_reached(stats.passes, stats.r1, stats.r2, stats.r3, stats.r4);
    stats
}

/// The first rule that compels `a -> b` for the undirected edge `a - b`.
pub fn compelling_rule(pdag: &Pdag, a: Node, b: Node) -> Option<MeekRule> {
    if rule1(pdag, a, b) {
        Some(MeekRule::R1)
    } else if rule2(pdag, a, b) {
        Some(MeekRule::R2)
    } else if rule3(pdag, a, b) {
        Some(MeekRule::R3)
    } else if rule4(pdag, a, b) {
        Some(MeekRule::R4)
    } else {
        None
    }
}

fn rule1(pdag: &Pdag, a: Node, b: Node) -> bool {
    pdag.parents_of(a)
        .iter()
        .any(|&c| c != b && !pdag.is_adjacent(c, b))
}

fn rule2(pdag: &Pdag, a: Node, b: Node) -> bool {
    let into_b = pdag.parents_of(b);
    pdag.children_of(a).iter().any(|c| into_b.contains(c))
}

fn rule3(pdag: &Pdag, a: Node, b: Node) -> bool {
    let into_b = pdag.parents_of(b);
    let shared: Vec<Node> = pdag
        .undirected_neighbors_of(a)
        .iter()
        .copied()
        .filter(|c| into_b.contains(c))
        .collect();
    shared.iter().enumerate().any(|(i, &c)| {
        shared[i + 1..]
            .iter()
            .any(|&d| !pdag.is_adjacent(c, d))
    })
}

fn rule4(pdag: &Pdag, a: Node, b: Node) -> bool {
    pdag.parents_of(b)
        .iter()
        .filter(|&&d| d != a && pdag.is_adjacent(a, d))
        .any(|&d| {
            pdag.parents_of(d)
                .iter()
                .any(|&c| c != a && c != b && pdag.is_adjacent(a, c) && !pdag.is_adjacent(b, c))
        })
}
