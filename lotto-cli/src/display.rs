use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::import::ImportResult;
use lotto_db::models::DrawRecord;
use lotto_lines::{GeneratedLine, GenerationReport, Strategy};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn line_cell(line: &GeneratedLine) -> Cell {
    let cell = Cell::new(line.to_string());
    if line.is_complete() {
        cell
    } else {
        cell.fg(Color::Yellow)
    }
}

pub fn display_draws(draws: &[DrawRecord]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = new_table(vec!["N°", "Date", "Boules", "Bonus", "Machine", "Jeu"]);

    for draw in draws {
        let mut sorted_balls = draw.balls;
        sorted_balls.sort();

        let balls_str = sorted_balls
            .iter()
            .map(|b| format!("{:2}", b))
            .collect::<Vec<_>>()
            .join(" - ");

        table.add_row(vec![
            &draw.draw_number.to_string(),
            &draw.date,
            &balls_str,
            &format!("{:2}", draw.bonus_ball),
            &draw.machine,
            &draw.ball_set,
        ]);
    }

    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import terminé :");
    println!("  Total lignes lues : {}", result.total_records);
    println!("  Insérés           : {}", result.inserted);
    println!("  Doublons ignorés  : {}", result.skipped);
    if result.errors > 0 {
        println!("  Erreurs           : {}", result.errors);
    }
}

pub fn display_frequencies<K: ToString>(title: &str, key_header: &str, ranked: &[(K, u32)], total: usize) {
    println!("\n── {title} ──");
    let mut table = new_table(vec![key_header, "Fréquence", "%"]);

    for (key, count) in ranked {
        let share = if total > 0 {
            100.0 * *count as f64 / total as f64
        } else {
            0.0
        };
        table.add_row(vec![
            key.to_string(),
            count.to_string(),
            format!("{:.1}", share),
        ]);
    }
    println!("{table}");
}

pub fn display_report(report: &GenerationReport) {
    println!("\n🎯 Grilles générées ({} tirages analysés)\n", report.draw_count);

    let mut table = new_table(vec!["Méthode", "Description", "Boules"]);
    for (strategy, line) in [
        (Strategy::MostFrequentTogether, &report.most_frequent_together),
        (Strategy::MostFrequent, &report.most_frequent),
    ] {
        table.add_row(vec![
            Cell::new(strategy.key()),
            Cell::new(strategy.label()),
            line_cell(line),
        ]);
    }
    println!("{table}");

    let strategy = Strategy::FullIteration;
    println!("\n── {} : {} ──", strategy.key(), strategy.label());
    if report.full_iteration.is_empty() {
        println!("Aucune combinaison machine / jeu de boules.");
        return;
    }

    let mut table = new_table(vec!["#", "Machine", "Jeu", "Tirages", "Boules"]);
    for (i, labelled) in report.full_iteration.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&labelled.machine),
            Cell::new(&labelled.ball_set),
            Cell::new(labelled.draw_count),
            line_cell(&labelled.line),
        ]);
    }
    println!("{table}");
}
