// Classification engine: one URL in, one verdict out.
//
// Two stages. The rule cascade runs first and is terminal on any hit.
// Only URLs no rule recognizes go on to the blended stage, where the
// model probability and the structural heuristic are combined and
// banded. Scorer failures propagate; a half-scored URL never gets a
// made-up verdict.

use anyhow::Result;
use tracing::debug;

use crate::features;
use crate::model::traits::UrlScorer;
use crate::rules;
use crate::rules::lists::WatchLists;
use crate::scoring;
use crate::urls::UrlParts;
use crate::verdict::Classification;

pub struct Engine {
    lists: WatchLists,
    scorer: Box<dyn UrlScorer>,
}

impl Engine {
    pub fn new(lists: WatchLists, scorer: Box<dyn UrlScorer>) -> Self {
        Self { lists, scorer }
    }

    /// Classify one URL.
    pub fn classify(&self, url: &str) -> Result<Classification> {
        let parts = UrlParts::parse(url);

        if let Some(hit) = rules::evaluate(url, &parts, &self.lists) {
            debug!(
                url = %url,
                verdict = %hit.prediction,
                reason = %hit.reason,
                "rule cascade hit"
            );
            return Ok(hit);
        }

        let features = features::extract(url);
        let ml_probability = self.scorer.score_url(url, &features)?;
        let rule_score = scoring::heuristic::score(&parts, &self.lists);
        let result = scoring::decision::blend(ml_probability, rule_score);

        debug!(
            url = %url,
            ml = ml_probability,
            heuristic = rule_score,
            verdict = %result.prediction,
            "blended decision"
        );
        Ok(result)
    }

    pub fn lists(&self) -> &WatchLists {
        &self.lists
    }
}
