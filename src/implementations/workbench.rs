use log::{ debug, info };
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::implementations::extractor::extract_candidates;
use crate::implementations::proof_heuristic::{ mock_prove, SpecIndex };
use crate::implementations::prover::prove_with_fallback;
use crate::implementations::suggestions::suggest_improvements;
use crate::implementations::temporal::{ rewrite_with_step, STEP_MS };
use crate::models::common::{ Kind, Priority, ProofStatus };
use crate::models::proof::ProveOutcome;
use crate::models::requirement::{ Formalization, Requirement };
use crate::traits::{ LinguisticTool, ProofBackend };

/// Counts over the working set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequirementStats {
    pub total: usize,
    pub functional: usize,
    pub non_functional: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub proved: usize,
    pub failed: usize,
}

/// Filter applied when listing requirements
#[derive(Debug, Clone, Default)]
pub struct RequirementFilter {
    pub kind: Option<Kind>,
    pub priority: Option<Priority>,
    pub query: String,
}

impl RequirementFilter {
    pub fn matches(&self, requirement: &Requirement) -> bool {
        let query = self.query.trim().to_lowercase();
        self.kind.map_or(true, |k| requirement.kind == k)
            && self.priority.map_or(true, |p| requirement.priority == p)
            && (query.is_empty() || requirement.text.to_lowercase().contains(&query))
    }
}

/// A specification source together with the requirements mined from it
pub struct Workbench {
    source: String,
    requirements: Vec<Requirement>,
    linguistics: Box<dyn LinguisticTool>,
    step_ms: u64,
}

impl Workbench {
    pub fn new(source: impl Into<String>, linguistics: Box<dyn LinguisticTool>) -> Self {
        Self {
            source: source.into(),
            requirements: Vec::new(),
            linguistics,
            step_ms: STEP_MS,
        }
    }

    pub fn with_step_ms(mut self, step_ms: u64) -> Self {
        self.step_ms = step_ms;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn get(&self, id: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Requirement> {
        self.requirements.iter_mut().find(|r| r.id == id)
    }

    /// Replace the working set with freshly extracted candidates
    pub fn analyze(&mut self) -> usize {
        self.requirements = extract_candidates(&self.source, self.linguistics.as_ref());
        info!("Analysis produced {} requirement(s)", self.requirements.len());
        self.requirements.len()
    }

    /// Insert a placeholder requirement at the front and return its id
    pub fn add_manual(&mut self) -> String {
        let requirement = Requirement::manual();
        let id = requirement.id.clone();
        self.requirements.insert(0, requirement);
        id
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.requirements.len();
        self.requirements.retain(|r| r.id != id);
        self.requirements.len() != before
    }

    pub fn clear(&mut self) {
        self.requirements.clear();
    }

    /// Edit the text only; kind and rationale stay as classified
    pub fn update_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(r) => {
                r.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn set_selected(&mut self, id: &str, selected: bool) -> bool {
        match self.get_mut(id) {
            Some(r) => {
                r.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn select_all(&mut self, selected: bool) {
        for r in &mut self.requirements {
            r.selected = selected;
        }
    }

    /// Regenerate suggestions from the current text and kind
    pub fn refresh_suggestions(&mut self, id: &str) -> Option<&[String]> {
        let idx = self.requirements.iter().position(|r| r.id == id)?;
        let suggestions = {
            let r = &self.requirements[idx];
            suggest_improvements(&r.text, r.kind, self.linguistics.as_ref())
        };
        self.requirements[idx].suggestions = suggestions;
        Some(&self.requirements[idx].suggestions)
    }

    /// Attach (or overwrite) the temporal rewrite of a requirement
    pub fn formalize(&mut self, id: &str) -> Option<&Formalization> {
        let step_ms = self.step_ms;
        let r = self.get_mut(id)?;
        r.formalization = Some(rewrite_with_step(&r.text, step_ms));
        r.formalization.as_ref()
    }

    /// Run the local heuristic over every requirement
    pub fn prove_local(&mut self) -> usize {
        mock_prove(&mut self.requirements, &self.source)
    }

    /// Mark one requirement selected and run the local heuristic on it
    pub fn prove_one_local(&mut self, id: &str) -> Option<ProofStatus> {
        let index = SpecIndex::build(&self.source);
        let r = self.requirements.iter_mut().find(|r| r.id == id)?;
        r.selected = true;
        index.apply(r);
        debug!("Local proof of {} -> {}", r.id, r.status);
        Some(r.status)
    }

    /// Remote evaluation with local fallback
    pub async fn prove_remote(
        &mut self,
        backend: &dyn ProofBackend,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> ProveOutcome {
        prove_with_fallback(
            backend,
            &mut self.requirements,
            &self.source,
            None,
            timeout,
            cancel
        ).await
    }

    pub fn filter(&self, filter: &RequirementFilter) -> Vec<&Requirement> {
        self.requirements
            .iter()
            .filter(|r| filter.matches(r))
            .collect()
    }

    pub fn stats(&self) -> RequirementStats {
        let count = |pred: &dyn Fn(&Requirement) -> bool| {
            self.requirements.iter().filter(|r| pred(r)).count()
        };
        RequirementStats {
            total: self.requirements.len(),
            functional: count(&|r| r.kind == Kind::Functional),
            non_functional: count(&|r| r.kind == Kind::NonFunctional),
            high: count(&|r| r.priority == Priority::High),
            medium: count(&|r| r.priority == Priority::Medium),
            low: count(&|r| r.priority == Priority::Low),
            proved: count(&|r| r.status == ProofStatus::Proved),
            failed: count(&|r| r.status == ProofStatus::Failed),
        }
    }
}
