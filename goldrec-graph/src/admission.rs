use goldrec_core::record::Decision;

/// Whether a scored pair becomes a match-graph edge.
///
/// Total over every feedback state, with asymmetric priority:
/// `Yes` admits unconditionally, `No` rejects unconditionally, and
/// `Undecided` or absent feedback defers to `probability >= threshold`.
/// Boundary ties admit.
pub fn admit_edge(probability: f64, decision: Option<Decision>, threshold: f64) -> bool {
    match decision {
        Some(Decision::Yes) => true,
        Some(Decision::No) => false,
        Some(Decision::Undecided) | None => probability >= threshold,
    }
}
