use std::collections::HashSet;

use lotto_db::models::{DrawRecord, MAX_BALL};
use lotto_lines::filters::{filter_by_ball, filter_by_ball_set, filter_by_machine};
use lotto_lines::frequency::{count_balls, most_frequent_ball_value};
use lotto_lines::{generate_from_history, make_draw, Strategy as Method, NO_BALL};
use proptest::prelude::*;

fn arb_draw() -> impl Strategy<Value = ([u8; 6], u8, &'static str, &'static str)> {
    (
        prop::sample::subsequence((1..=MAX_BALL).collect::<Vec<u8>>(), 6).prop_shuffle(),
        1..=MAX_BALL,
        prop::sample::select(vec!["Arthur", "Lancelot", "Merlin"]),
        prop::sample::select(vec!["1", "2", "3", "4"]),
    )
        .prop_map(|(balls, bonus, machine, ball_set)| {
            let mut arr = [0u8; 6];
            arr.copy_from_slice(&balls);
            (arr, bonus, machine, ball_set)
        })
}

fn arb_history(max: usize) -> impl Strategy<Value = Vec<DrawRecord>> {
    prop::collection::vec(arb_draw(), 0..max).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (balls, bonus, machine, ball_set))| make_draw(i as u32, balls, bonus, machine, ball_set))
            .collect()
    })
}

fn is_sorted(balls: &[u8]) -> bool {
    balls.windows(2).all(|w| w[0] <= w[1])
}

fn is_order_preserving_subset(output: &[&DrawRecord], input: &[DrawRecord]) -> bool {
    output.len() <= input.len() && output.windows(2).all(|w| w[0].draw_number < w[1].draw_number)
}

// ── Structure du résultat ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn result_has_three_methods(history in arb_history(40)) {
        let result = generate_from_history(&history);
        prop_assert_eq!(result.strategies().collect::<Vec<_>>(), Method::ALL.to_vec());
        prop_assert_eq!(result.lines(Method::MostFrequentTogether).len(), 1);
        prop_assert_eq!(result.lines(Method::MostFrequent).len(), 1);
    }

    #[test]
    fn full_iteration_one_line_per_pair(history in arb_history(40)) {
        let pairs: HashSet<(&str, &str)> = history
            .iter()
            .map(|d| (d.machine.as_str(), d.ball_set.as_str()))
            .collect();
        let result = generate_from_history(&history);
        prop_assert_eq!(result.lines(Method::FullIteration).len(), pairs.len());
    }

    #[test]
    fn every_line_sorted(history in arb_history(40)) {
        let result = generate_from_history(&history);
        for (strategy, lines) in result.iter() {
            for line in lines {
                prop_assert!(is_sorted(&line.balls), "{} : {:?}", strategy, line.balls);
            }
        }
    }

    #[test]
    fn uncoupled_line_has_no_sentinel_with_history(history in arb_history(40)) {
        prop_assume!(!history.is_empty());
        let result = generate_from_history(&history);
        let line = result.lines(Method::MostFrequent)[0];
        prop_assert!(line.is_complete());
        let distinct: HashSet<u8> = line.balls.iter().copied().collect();
        prop_assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn generation_is_idempotent(history in arb_history(40)) {
        prop_assert_eq!(generate_from_history(&history), generate_from_history(&history));
    }
}

// ── Filtres ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn filter_by_ball_is_order_preserving(history in arb_history(30), ball in 1..=MAX_BALL) {
        let out = filter_by_ball(&history, ball);
        prop_assert!(is_order_preserving_subset(&out, &history));
        prop_assert!(out.iter().all(|d| d.contains_ball(ball)));
        prop_assert_eq!(out.len(), history.iter().filter(|d| d.contains_ball(ball)).count());
    }

    #[test]
    fn filter_by_machine_is_order_preserving(history in arb_history(30)) {
        let out = filter_by_machine(&history, "Lancelot");
        prop_assert!(is_order_preserving_subset(&out, &history));
        prop_assert!(out.iter().all(|d| d.machine == "Lancelot"));
        prop_assert_eq!(out.len(), history.iter().filter(|d| d.machine == "Lancelot").count());
    }

    #[test]
    fn filter_by_ball_set_is_order_preserving(history in arb_history(30)) {
        let out = filter_by_ball_set(&history, "2");
        prop_assert!(is_order_preserving_subset(&out, &history));
        prop_assert!(out.iter().all(|d| d.ball_set == "2"));
    }
}

// ── Départage ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn most_frequent_ball_prefers_first_observed(history in arb_history(30)) {
        let picked = most_frequent_ball_value(&history, &[]);
        if history.is_empty() {
            prop_assert_eq!(picked, NO_BALL);
        } else {
            let counts = count_balls(&history, &[]);
            let max = counts.entries().iter().map(|e| e.1).max().unwrap_or(0);
            let first_seen = history
                .iter()
                .flat_map(|d| d.all_balls())
                .find(|b| counts.get(b) == max);
            prop_assert_eq!(Some(picked), first_seen);
        }
    }

    #[test]
    fn excluded_balls_never_picked(history in arb_history(30), excluded in prop::collection::vec(1..=MAX_BALL, 0..10)) {
        let picked = most_frequent_ball_value(&history, &excluded);
        prop_assert!(!excluded.contains(&picked));
    }
}

#[test]
fn empty_history_gives_six_sentinels_everywhere() {
    let result = generate_from_history(&[]);
    for (_, lines) in result.iter() {
        for line in lines {
            assert_eq!(line.balls, [NO_BALL; 6]);
        }
    }
    assert!(result.lines(Method::FullIteration).is_empty());
}
