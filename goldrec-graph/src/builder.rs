use petgraph::graph::{NodeIndex, UnGraph};
use tracing::info;

use goldrec_core::record::{RecordId, ScoredPair};
use goldrec_feedback::FeedbackStore;

use crate::admission::admit_edge;

/// The undirected match graph. Every record id in the dataset is a node —
/// including records with no admitted pair — so component discovery
/// assigns every record a cluster (a singleton when isolated).
///
/// Node index i is record id i; nodes are added in ascending order before
/// any edge.
#[derive(Debug)]
pub struct MatchGraph {
    graph: UnGraph<RecordId, ()>,
}

impl MatchGraph {
    /// Number of record nodes.
    pub fn record_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of admitted edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether an edge was admitted between two records.
    pub fn contains_edge(&self, a: RecordId, b: RecordId) -> bool {
        if a >= self.record_count() || b >= self.record_count() {
            return false;
        }
        self.graph
            .contains_edge(NodeIndex::new(a), NodeIndex::new(b))
    }

    /// Neighbors of a record, ascending.
    pub fn neighbors(&self, record: RecordId) -> Vec<RecordId> {
        if record >= self.record_count() {
            return Vec::new();
        }
        let mut out: Vec<RecordId> = self
            .graph
            .neighbors(NodeIndex::new(record))
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out
    }
}

/// Build the match graph from scored pairs, feedback, and the admission
/// threshold.
///
/// Per pair: `Yes` feedback admits the edge unconditionally, `No` rejects
/// it regardless of probability, and `Undecided`/absent feedback defers to
/// the model probability against the threshold.
pub fn build_match_graph(
    record_count: usize,
    scored: &[ScoredPair],
    feedback: &FeedbackStore,
    threshold: f64,
) -> MatchGraph {
    let mut graph = UnGraph::with_capacity(record_count, scored.len());

    for id in 0..record_count {
        graph.add_node(id);
    }

    for pair in scored {
        let decision = feedback.lookup_key(pair.key());
        if admit_edge(pair.probability, decision, threshold) {
            graph.add_edge(
                NodeIndex::new(pair.pair.id1),
                NodeIndex::new(pair.pair.id2),
                (),
            );
        }
    }

    info!(
        records = record_count,
        pairs = scored.len(),
        edges = graph.edge_count(),
        threshold,
        "match graph built"
    );

    MatchGraph { graph }
}

pub(crate) fn inner(graph: &MatchGraph) -> &UnGraph<RecordId, ()> {
    &graph.graph
}
