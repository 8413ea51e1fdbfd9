use std::fmt;

use lotto_db::models::{DrawRecord, MAIN_BALLS};
use serde::{Deserialize, Serialize};

use crate::filters::{filter_by_ball, filter_by_ball_set, filter_by_machine};
use crate::frequency::{
    count_occurrences, most_frequent_ball_value, rank_by_frequency_descending, Attribute, NO_BALL,
};

/// Grille générée : six numéros triés par ordre croissant. Peut contenir
/// plusieurs [`NO_BALL`] quand l'historique ne suffit pas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedLine {
    pub balls: [u8; MAIN_BALLS],
}

impl GeneratedLine {
    pub fn from_picks(mut balls: [u8; MAIN_BALLS]) -> Self {
        balls.sort();
        Self { balls }
    }

    pub fn is_complete(&self) -> bool {
        !self.balls.contains(&NO_BALL)
    }
}

impl fmt::Display for GeneratedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.balls.iter().map(|b| format!("{:2}", b)).collect();
        write!(f, "{}", parts.join(" - "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "method1")]
    MostFrequentTogether,
    #[serde(rename = "method2")]
    MostFrequent,
    #[serde(rename = "method3")]
    FullIteration,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::MostFrequentTogether,
        Strategy::MostFrequent,
        Strategy::FullIteration,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Strategy::MostFrequentTogether => "method1",
            Strategy::MostFrequent => "method2",
            Strategy::FullIteration => "method3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::MostFrequentTogether => "Boules fréquentes ensemble",
            Strategy::MostFrequent => "Boules les plus fréquentes",
            Strategy::FullIteration => "Par machine et jeu de boules",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Grille de la méthode 3 avec le sous-ensemble qui l'a produite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledLine {
    pub machine: String,
    pub ball_set: String,
    pub draw_count: usize,
    pub line: GeneratedLine,
}

/// Choisit six boules parmi les plus fréquentes de `draws`.
///
/// Avec `couple_by_cooccurrence`, chaque tirage retenu doit contenir la boule
/// choisie précédemment, donc le vivier se réduit à chaque tour. Une fois vide,
/// les tours restants donnent [`NO_BALL`].
pub fn pick_six_frequent_balls(draws: Vec<&DrawRecord>, couple_by_cooccurrence: bool) -> GeneratedLine {
    let mut picked: Vec<u8> = Vec::with_capacity(MAIN_BALLS);
    let mut pool = draws;

    let mut candidate = most_frequent_ball_value(pool.iter().copied(), &picked);
    picked.push(candidate);

    while picked.len() < MAIN_BALLS {
        if couple_by_cooccurrence {
            pool = filter_by_ball(pool, candidate);
        }
        candidate = most_frequent_ball_value(pool.iter().copied(), &picked);
        picked.push(candidate);
    }

    let mut balls = [NO_BALL; MAIN_BALLS];
    balls.copy_from_slice(&picked);
    GeneratedLine::from_picks(balls)
}

pub fn most_frequent_together(draws: &[DrawRecord]) -> GeneratedLine {
    pick_six_frequent_balls(draws.iter().collect(), true)
}

pub fn most_frequent(draws: &[DrawRecord]) -> GeneratedLine {
    pick_six_frequent_balls(draws.iter().collect(), false)
}

/// Une grille par couple (machine, jeu de boules), les machines puis les jeux
/// étant parcourus par nombre de tirages décroissant.
pub fn full_iteration(draws: &[DrawRecord]) -> Vec<LabelledLine> {
    let machines = rank_by_frequency_descending(&count_occurrences(draws, Attribute::Machine));
    let mut lines = Vec::new();

    for machine in machines {
        let by_machine = filter_by_machine(draws, machine);
        let ball_sets =
            rank_by_frequency_descending(&count_occurrences(by_machine.iter().copied(), Attribute::BallSet));

        for ball_set in ball_sets {
            let subset = filter_by_ball_set(by_machine.iter().copied(), ball_set);
            let draw_count = subset.len();
            let line = pick_six_frequent_balls(subset, true);
            log::debug!("{machine}/{ball_set} : {draw_count} tirages -> {line}");
            lines.push(LabelledLine {
                machine: machine.to_string(),
                ball_set: ball_set.to_string(),
                draw_count,
                line,
            });
        }
    }

    lines
}
