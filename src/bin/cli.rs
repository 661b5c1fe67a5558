use clap::Parser;
use env_logger::Env;
use hexboard::render::{self, Palette};
use hexboard::{CardSummary, GameVariant, GenerationParams, generate_board, generate_seeded};
use std::fs;
use std::path::PathBuf;

/// Генератор игровых досок из гексов
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Вариант доски: BASE_3_4 или BASE_5_6 (перекрывает значение из конфигурации)
    #[arg(short, long)]
    variant: Option<String>,

    /// Сид генератора (перекрывает значение из конфигурации)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Путь для сохранения изображения доски
    #[arg(short, long, default_value = "board.png")]
    output: PathBuf,

    /// Путь для сохранения доски в JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut params = match &cli.config {
        Some(path) => {
            println!("Загрузка конфигурации из {}...", path.display());
            GenerationParams::from_toml_file(path)?
        }
        None => GenerationParams::default(),
    };
    if let Some(name) = &cli.variant {
        params.variant = name.parse::<GameVariant>()?;
        params.template = None;
    }
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }

    let template = params.resolve_template()?;
    println!(
        "Генерация доски {} (сетка {}×{})...",
        params.template_label(),
        template.width(),
        template.height()
    );
    let board = match params.seed {
        Some(seed) => generate_seeded(&template, seed)?,
        None => generate_board(&template)?,
    };
    log::info!(
        "board ready: {} land tiles, {} harbors",
        board.land_tiles().count(),
        board.harbor_tiles().count()
    );

    println!("Сохранение изображения в {}", cli.output.display());
    let output = cli.output.to_str().ok_or("output path is not valid UTF-8")?;
    render::save_as_png(&board, &params.render, &Palette::default(), output)?;

    if let Some(path) = &cli.json {
        println!("Сохранение JSON в {}", path.display());
        fs::write(path, board.to_json()?)?;
    }

    println!("\nКарты в колоде:");
    for line in CardSummary::from_template(&template).lines() {
        println!("  {line}");
    }

    println!("\nГотово!");
    Ok(())
}
