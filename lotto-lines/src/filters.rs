use lotto_db::models::DrawRecord;

/// Tirages contenant `ball`, boule bonus comprise.
pub fn filter_by_ball<'a, I>(draws: I, ball: u8) -> Vec<&'a DrawRecord>
where
    I: IntoIterator<Item = &'a DrawRecord>,
{
    draws.into_iter().filter(|d| d.contains_ball(ball)).collect()
}

pub fn filter_by_machine<'a, I>(draws: I, machine: &str) -> Vec<&'a DrawRecord>
where
    I: IntoIterator<Item = &'a DrawRecord>,
{
    draws.into_iter().filter(|d| d.machine == machine).collect()
}

pub fn filter_by_ball_set<'a, I>(draws: I, ball_set: &str) -> Vec<&'a DrawRecord>
where
    I: IntoIterator<Item = &'a DrawRecord>,
{
    draws.into_iter().filter(|d| d.ball_set == ball_set).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_draw;

    fn history() -> Vec<DrawRecord> {
        vec![
            make_draw(1, [1, 2, 3, 4, 5, 6], 7, "X", "S1"),
            make_draw(2, [1, 2, 3, 4, 5, 8], 9, "X", "S2"),
            make_draw(3, [1, 2, 7, 8, 9, 10], 11, "Y", "S1"),
        ]
    }

    fn numbers(draws: &[&DrawRecord]) -> Vec<u32> {
        draws.iter().map(|d| d.draw_number).collect()
    }

    #[test]
    fn test_filter_by_ball_main_and_bonus() {
        let draws = history();
        assert_eq!(numbers(&filter_by_ball(&draws, 7)), vec![1, 3]);
        assert_eq!(numbers(&filter_by_ball(&draws, 8)), vec![2, 3]);
        assert_eq!(numbers(&filter_by_ball(&draws, 1)), vec![1, 2, 3]);
        assert!(filter_by_ball(&draws, 42).is_empty());
    }

    #[test]
    fn test_filter_by_machine_exact() {
        let draws = history();
        assert_eq!(numbers(&filter_by_machine(&draws, "X")), vec![1, 2]);
        assert_eq!(numbers(&filter_by_machine(&draws, "Y")), vec![3]);
        assert!(filter_by_machine(&draws, "x").is_empty());
    }

    #[test]
    fn test_filter_by_ball_set_exact() {
        let draws = history();
        assert_eq!(numbers(&filter_by_ball_set(&draws, "S1")), vec![1, 3]);
        assert!(filter_by_ball_set(&draws, "S").is_empty());
    }

    #[test]
    fn test_filters_chain() {
        let draws = history();
        let x = filter_by_machine(&draws, "X");
        let x_s2 = filter_by_ball_set(x.iter().copied(), "S2");
        assert_eq!(numbers(&x_s2), vec![2]);
    }

    #[test]
    fn test_filters_empty_input() {
        let draws: Vec<DrawRecord> = vec![];
        assert!(filter_by_ball(&draws, 1).is_empty());
        assert!(filter_by_machine(&draws, "X").is_empty());
        assert!(filter_by_ball_set(&draws, "S1").is_empty());
    }
}
