use std::collections::BTreeMap;

use lotto_db::models::DrawRecord;
use lotto_db::source::DrawSource;
use serde::Serialize;
use thiserror::Error;

use crate::lines::{full_iteration, most_frequent, most_frequent_together, GeneratedLine, LabelledLine, Strategy};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("historique des tirages indisponible")]
    DataUnavailable(#[source] anyhow::Error),
}

/// Grilles générées, indexées par méthode (`method1`, `method2`, `method3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenerationResult {
    lines: BTreeMap<Strategy, Vec<GeneratedLine>>,
}

impl GenerationResult {
    pub fn lines(&self, strategy: Strategy) -> &[GeneratedLine] {
        self.lines.get(&strategy).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn strategies(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.lines.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Strategy, &[GeneratedLine])> + '_ {
        self.lines.iter().map(|(s, l)| (*s, l.as_slice()))
    }
}

/// Détail de la génération, avec l'origine des grilles de la méthode 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub draw_count: usize,
    pub most_frequent_together: GeneratedLine,
    pub most_frequent: GeneratedLine,
    pub full_iteration: Vec<LabelledLine>,
}

impl GenerationReport {
    pub fn from_history(draws: &[DrawRecord]) -> Self {
        let report = Self {
            draw_count: draws.len(),
            most_frequent_together: most_frequent_together(draws),
            most_frequent: most_frequent(draws),
            full_iteration: full_iteration(draws),
        };
        log::info!(
            "{} tirages analysés, {} grilles par machine et jeu de boules",
            report.draw_count,
            report.full_iteration.len()
        );
        report
    }

    pub fn into_result(self) -> GenerationResult {
        let mut lines = BTreeMap::new();
        lines.insert(Strategy::MostFrequentTogether, vec![self.most_frequent_together]);
        lines.insert(Strategy::MostFrequent, vec![self.most_frequent]);
        lines.insert(
            Strategy::FullIteration,
            self.full_iteration.into_iter().map(|l| l.line).collect(),
        );
        GenerationResult { lines }
    }
}

pub fn generate_from_history(draws: &[DrawRecord]) -> GenerationResult {
    GenerationReport::from_history(draws).into_result()
}

pub struct LineGenerator<S> {
    source: S,
}

impl<S: DrawSource> LineGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn read_history(&self) -> Result<Vec<DrawRecord>, GenerateError> {
        self.source
            .read_draw_history()
            .map_err(GenerateError::DataUnavailable)
    }

    pub fn generate(&self) -> Result<GenerationResult, GenerateError> {
        let draws = self.read_history()?;
        Ok(generate_from_history(&draws))
    }

    pub fn report(&self) -> Result<GenerationReport, GenerateError> {
        let draws = self.read_history()?;
        Ok(GenerationReport::from_history(&draws))
    }
}
