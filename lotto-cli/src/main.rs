mod display;
mod import;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::display::{display_draws, display_frequencies, display_import_summary, display_report};
use lotto_db::db::{count_draws, db_path, fetch_last_draws, migrate, open_db};
use lotto_db::rusqlite::Connection;
use lotto_db::source::DrawSource;
use lotto_lines::filters::filter_by_machine;
use lotto_lines::frequency::{count_balls, count_occurrences, Attribute};
use lotto_lines::LineGenerator;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "lotto", about = "Générateur de grilles Lotto par fréquences")]
struct Cli {
    /// Chemin de la base SQLite (défaut : ./data/lotto.db)
    #[arg(long, env = "LOTTO_DB", global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Importer les tirages depuis le fichier CSV officiel
    Import {
        /// Chemin vers le fichier CSV
        #[arg(short, long, default_value = "assets/lotto-draws-history.csv")]
        file: PathBuf,
    },

    /// Afficher le chemin de la base de données
    DbPath,

    /// Lister les derniers tirages
    List {
        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Fréquences des machines, jeux de boules et boules
    Stats {
        /// Limiter les boules à une machine
        #[arg(short, long)]
        machine: Option<String>,

        /// Nombre de boules à afficher
        #[arg(short, long, default_value = "15")]
        top: usize,
    },

    /// Générer les grilles des trois méthodes
    Generate {
        /// Format de sortie
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let path = cli.db.unwrap_or_else(db_path);
    let conn = open_db(&path)?;
    migrate(&conn)?;

    match cli.command {
        Command::Import { file } => cmd_import(&conn, &file),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&conn, last),
        Command::Stats { machine, top } => cmd_stats(&conn, machine.as_deref(), top),
        Command::Generate { format } => cmd_generate(&conn, format),
    }
}

fn ensure_not_empty(conn: &Connection) -> Result<bool> {
    if count_draws(conn)? == 0 {
        println!("Base vide. Lancez d'abord : lotto import");
        return Ok(false);
    }
    Ok(true)
}

fn cmd_import(conn: &Connection, file: &PathBuf) -> Result<()> {
    let result = import::import_csv(conn, file)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_list(conn: &Connection, last: u32) -> Result<()> {
    if !ensure_not_empty(conn)? {
        return Ok(());
    }
    let draws = fetch_last_draws(conn, last)?;
    display_draws(&draws);
    Ok(())
}

fn cmd_stats(conn: &Connection, machine: Option<&str>, top: usize) -> Result<()> {
    if !ensure_not_empty(conn)? {
        return Ok(());
    }
    let draws = conn.read_draw_history()?;
    println!("\n📊 Statistiques sur {} tirages", draws.len());

    let machines = count_occurrences(&draws, Attribute::Machine).ranked_entries();
    display_frequencies("Machines", "Machine", &machines, draws.len());

    let ball_sets = count_occurrences(&draws, Attribute::BallSet).ranked_entries();
    display_frequencies("Jeux de boules", "Jeu", &ball_sets, draws.len());

    let subset = match machine {
        Some(name) => filter_by_machine(&draws, name),
        None => draws.iter().collect(),
    };
    let mut balls = count_balls(subset.iter().copied(), &[]).ranked_entries();
    balls.truncate(top);
    let title = match machine {
        Some(name) => format!("Boules les plus fréquentes ({name}, {} tirages)", subset.len()),
        None => "Boules les plus fréquentes".to_string(),
    };
    display_frequencies(&title, "Boule", &balls, subset.len());
    Ok(())
}

fn cmd_generate(conn: &Connection, format: OutputFormat) -> Result<()> {
    let generator = LineGenerator::new(conn);
    match format {
        OutputFormat::Table => {
            let report = generator.report()?;
            display_report(&report);
        }
        OutputFormat::Json => {
            let result = generator.generate()?;
            let json = serde_json::to_string_pretty(&result)
                .context("Sérialisation JSON impossible")?;
            println!("{json}");
        }
    }
    Ok(())
}
