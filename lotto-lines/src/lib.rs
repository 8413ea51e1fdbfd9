//! Génération de grilles à partir des fréquences observées dans l'historique
//! des tirages : filtres, compteurs de fréquence et trois méthodes de
//! construction de grilles.

pub mod filters;
pub mod frequency;
pub mod generator;
pub mod lines;

pub use frequency::NO_BALL;
pub use generator::{generate_from_history, GenerateError, GenerationReport, GenerationResult, LineGenerator};
pub use lines::{GeneratedLine, LabelledLine, Strategy};

use lotto_db::models::DrawRecord;

pub fn make_draw(draw_number: u32, balls: [u8; 6], bonus_ball: u8, machine: &str, ball_set: &str) -> DrawRecord {
    DrawRecord {
        draw_number,
        date: format!("2024-01-{:02}", (draw_number % 28) + 1),
        balls,
        bonus_ball,
        machine: machine.to_string(),
        ball_set: ball_set.to_string(),
    }
}

/// Trois tirages : A et B sur la machine X (jeu S1), C sur la machine Y (jeu S2).
pub fn sample_history() -> Vec<DrawRecord> {
    vec![
        make_draw(1, [1, 2, 3, 4, 5, 6], 7, "X", "S1"),
        make_draw(2, [1, 2, 3, 4, 5, 8], 9, "X", "S1"),
        make_draw(3, [1, 2, 7, 8, 9, 10], 11, "Y", "S2"),
    ]
}
