//! MatchEngine — the staged matching pipeline over a session context.

use tracing::info;

use goldrec_core::errors::{GoldrecResult, SessionError};
use goldrec_core::models::{
    ClusterAssignment, ExplanationArtifact, GoldenRecord, MatchStats, ReportWorkbook,
};
use goldrec_core::record::{FeedbackEntry, PairFeatures, ScoredPair};
use goldrec_core::traits::{IEmbeddingProvider, IMatchExplainer, IPairClassifier};
use goldrec_feedback::SubmissionSummary;

use crate::context::SessionContext;

/// Coordinates the pipeline stages against a [`SessionContext`]:
/// pair generation → scoring → (feedback) → clustering → merge → report.
///
/// Owns the external scoring collaborators; every stage checks its
/// prerequisite and fails fast when invoked out of order. Failures are
/// terminal for the requested operation — nothing is retried.
pub struct MatchEngine {
    embedder: Box<dyn IEmbeddingProvider>,
    classifier: Box<dyn IPairClassifier>,
}

impl MatchEngine {
    pub fn new(
        embedder: Box<dyn IEmbeddingProvider>,
        classifier: Box<dyn IPairClassifier>,
    ) -> Self {
        Self {
            embedder,
            classifier,
        }
    }

    /// Stage 1: generate candidate pairs for the session's dataset.
    /// Replaces any previous pairs and invalidates downstream scores.
    pub fn generate_pairs(&self, ctx: &mut SessionContext) -> GoldrecResult<usize> {
        let pairs = goldrec_features::generate_pairs(
            ctx.records(),
            ctx.identifier(),
            self.embedder.as_ref(),
        )?;
        let count = pairs.len();
        ctx.candidate_pairs = Some(pairs);
        ctx.scored_pairs = None;
        ctx.touch();
        Ok(count)
    }

    /// Stage 2: score the candidate pairs with the classifier.
    pub fn score_pairs(&self, ctx: &mut SessionContext) -> GoldrecResult<usize> {
        let candidates = ctx.candidate_pairs.as_deref().ok_or(
            SessionError::MissingPrerequisite {
                stage: "pair scoring",
                hint: "run candidate pair generation first",
            },
        )?;
        let scored = goldrec_scoring::score_pairs(candidates, self.classifier.as_ref())?;
        let count = scored.len();
        ctx.scored_pairs = Some(scored);
        ctx.touch();
        Ok(count)
    }

    /// Stages 1+2 in one call, the common "run matching" entry point.
    pub fn run_matching(&self, ctx: &mut SessionContext) -> GoldrecResult<usize> {
        self.generate_pairs(ctx)?;
        self.score_pairs(ctx)
    }

    /// Record a batch of human decisions. Invalid entries are rejected
    /// individually; clusters derived afterwards see the new decisions.
    pub fn submit_feedback(
        &self,
        ctx: &mut SessionContext,
        entries: &[FeedbackEntry],
    ) -> SubmissionSummary {
        let summary = ctx.feedback.submit(entries);
        ctx.touch();
        summary
    }

    /// Stage 3: build the match graph and resolve clusters under the
    /// session's admission threshold and current feedback.
    pub fn resolve_clusters(&self, ctx: &SessionContext) -> GoldrecResult<ClusterAssignment> {
        let scored = self.require_scored(ctx, "clustering")?;
        let graph = goldrec_graph::build_match_graph(
            ctx.record_count(),
            scored,
            ctx.feedback(),
            ctx.config().matching.admission_threshold,
        );
        Ok(goldrec_graph::resolve_clusters(&graph))
    }

    /// Stage 4: merge every resolved cluster into a golden record.
    pub fn golden_records(&self, ctx: &SessionContext) -> GoldrecResult<Vec<GoldenRecord>> {
        let assignment = self.resolve_clusters(ctx)?;
        Ok(goldrec_merge::merge_all(&assignment, ctx.records()))
    }

    /// Aggregate statistics over the scored pairs.
    pub fn stats(&self, ctx: &SessionContext) -> GoldrecResult<MatchStats> {
        let scored = self.require_scored(ctx, "statistics")?;
        Ok(goldrec_report::match_stats(scored, &ctx.config().report))
    }

    /// ROC-AUC against the dataset's pre-resolution cluster labels.
    pub fn model_auc(&self, ctx: &SessionContext) -> GoldrecResult<f64> {
        let scored = self.require_scored(ctx, "model evaluation")?;
        Ok(goldrec_report::model_auc(scored, ctx.records())?)
    }

    /// Assemble the full report workbook from the current session state.
    pub fn build_report(&self, ctx: &SessionContext) -> GoldrecResult<ReportWorkbook> {
        let scored = self.require_scored(ctx, "report generation")?;
        let assignment = self.resolve_clusters(ctx)?;
        let golden = goldrec_merge::merge_all(&assignment, ctx.records());
        let workbook = goldrec_report::assemble_workbook(
            ctx.records(),
            &assignment,
            &golden,
            scored,
            ctx.feedback(),
        );
        info!(
            session = %ctx.session_id,
            clusters = assignment.clusters.len(),
            golden = workbook.golden_records.len(),
            "report built"
        );
        Ok(workbook)
    }

    /// Render a feature-contribution summary via the explainability
    /// collaborator.
    pub fn explain(
        &self,
        ctx: &SessionContext,
        explainer: &dyn IMatchExplainer,
    ) -> GoldrecResult<ExplanationArtifact> {
        let candidates = ctx.candidate_pairs.as_deref().ok_or(
            SessionError::MissingPrerequisite {
                stage: "explanation",
                hint: "run candidate pair generation first",
            },
        )?;
        let features: Vec<PairFeatures> = candidates.iter().map(|p| p.features).collect();
        explainer.explain(self.classifier.as_ref(), &features)
    }

    fn require_scored<'c>(
        &self,
        ctx: &'c SessionContext,
        stage: &'static str,
    ) -> GoldrecResult<&'c [ScoredPair]> {
        ctx.scored_pairs.as_deref().ok_or_else(|| {
            SessionError::MissingPrerequisite {
                stage,
                hint: "run pair scoring first",
            }
            .into()
        })
    }
}
