use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Plus haut numéro de boule du jeu (1-59).
pub const MAX_BALL: u8 = 59;

/// Nombre de boules principales par tirage.
pub const MAIN_BALLS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub draw_number: u32,
    pub date: String,
    pub balls: [u8; MAIN_BALLS],
    pub bonus_ball: u8,
    pub machine: String,
    pub ball_set: String,
}

impl DrawRecord {
    /// Les six boules principales puis la boule bonus, dans l'ordre des champs.
    pub fn all_balls(&self) -> impl Iterator<Item = u8> + '_ {
        self.balls.iter().copied().chain(std::iter::once(self.bonus_ball))
    }

    pub fn contains_ball(&self, ball: u8) -> bool {
        self.all_balls().any(|b| b == ball)
    }
}

pub fn validate_draw(balls: &[u8; MAIN_BALLS], bonus_ball: u8) -> Result<()> {
    for &b in balls {
        if b < 1 || b > MAX_BALL {
            bail!("Boule {} hors limites (1-{})", b, MAX_BALL);
        }
    }
    if bonus_ball < 1 || bonus_ball > MAX_BALL {
        bail!("Boule bonus {} hors limites (1-{})", bonus_ball, MAX_BALL);
    }
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            if balls[i] == balls[j] {
                bail!("Boule en double : {}", balls[i]);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_draw(draw_number: u32, date: &str) -> DrawRecord {
    DrawRecord {
        draw_number,
        date: date.to_string(),
        balls: [1, 2, 3, 4, 5, 6],
        bonus_ball: 7,
        machine: "Arthur".to_string(),
        ball_set: "5".to_string(),
    }
}
