mod report;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::{ColoredString, Colorize};
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use perya_game::{
    Color, GameSession, VariantCatalog, VariantConfig, cumulative, outcome_counts, simulate_batch,
    summarize,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use report::{VariantRun, generate_console_report, generate_csv_report, generate_json_report};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RunMode {
    /// Play one round per variant and seed, showing the die
    Roll,
    /// Monte Carlo batch simulation with aggregate statistics
    Simulate,
}

#[derive(Debug, Parser)]
#[command(name = "perya", version)]
#[command(about = "Monte Carlo analysis and play tool for the perya color dice game")]
struct Args {
    /// Run mode: roll a single round or simulate a batch
    #[arg(long, value_enum, default_value_t = RunMode::Simulate)]
    mode: RunMode,

    /// Variants to run (comma-separated ids, or "all")
    #[arg(long, default_value = "fair,house-classic")]
    variants: String,

    /// List available variants and exit
    #[arg(long)]
    list_variants: bool,

    /// Bet amount per round
    #[arg(long, default_value_t = 1.0)]
    bet: f64,

    /// Number of plays per variant and seed (simulate mode)
    #[arg(long, default_value_t = 20_000)]
    plays: usize,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Optional JSON file replacing the built-in variant catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output report format (simulate mode)
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "csv"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let catalog = load_catalog(args.catalog.as_deref())?;

    if args.list_variants {
        let mut output = OutputTarget::new(args.output.clone())?;
        list_variants(&catalog, output.writer())?;
        output.flush_inner()?;
        return Ok(());
    }

    let variants = resolve_variants(&catalog, &args.variants)?;
    let seeds = parse_seeds(&args.seeds)?;

    match args.mode {
        RunMode::Roll => {
            announce_banner();
            run_rolls(&variants, &seeds, args.bet)?;
        }
        RunMode::Simulate => {
            if args.report == "console" {
                announce_banner();
            }
            let runs = run_simulations(&variants, &seeds, args.bet, args.plays)?;
            let mut output = OutputTarget::new(args.output.clone())?;
            write_report(&args.report, &runs, &mut output)?;
            output.flush_inner()?;
        }
    }

    Ok(())
}

fn announce_banner() {
    println!("{}", "🎲 Perya Color Dice".bright_cyan().bold());
    println!("{}", "====================".cyan());
}

fn list_variants(catalog: &VariantCatalog, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "Available variants:")?;
    for variant in catalog {
        writeln!(writer, "  {:18} - {}: {}", variant.id, variant.name, variant.desc)?;
    }
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<VariantCatalog> {
    let Some(path) = path else {
        return Ok(VariantCatalog::builtin());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let catalog = VariantCatalog::from_json(&json)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    if catalog.is_empty() {
        bail!("catalog {} contains no variants", path.display());
    }
    Ok(catalog)
}

fn resolve_variants(catalog: &VariantCatalog, spec: &str) -> Result<Vec<VariantConfig>> {
    if spec.trim() == "all" {
        return Ok(catalog.iter().cloned().collect());
    }
    let mut variants = Vec::new();
    for id in split_csv(spec) {
        match catalog.get_by_id(&id) {
            Some(variant) => variants.push(variant.clone()),
            None => bail!(
                "unknown variant '{id}' (available: {})",
                catalog.ids().join(", ")
            ),
        }
    }
    if variants.is_empty() {
        bail!("no variants requested");
    }
    Ok(variants)
}

fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_seeds(input: &str) -> Result<Vec<u64>> {
    let tokens = split_csv(input);
    if tokens.is_empty() {
        bail!("no seeds provided");
    }
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed '{token}'"))
        })
        .collect()
}

fn run_rolls(variants: &[VariantConfig], seeds: &[u64], bet: f64) -> Result<()> {
    for variant in variants {
        for seed in seeds {
            let mut session = GameSession::new(variant.clone(), *seed);
            let result = session
                .play(bet)
                .with_context(|| format!("rolling variant '{}'", variant.id))?;
            let face = paint(result.outcome, &result.outcome.die_face().to_string());
            let name = paint(result.outcome, result.outcome.as_str());
            let money = format!("${:.2}", result.profit.abs());
            let verdict = if result.is_win() {
                format!("you won {}", money.green())
            } else {
                format!("you lost {}", money.red())
            };
            println!("{face} {name}  {verdict} [{} seed {seed}]", variant.id);
        }
    }
    Ok(())
}

fn run_simulations(
    variants: &[VariantConfig],
    seeds: &[u64],
    bet: f64,
    plays: usize,
) -> Result<Vec<VariantRun>> {
    let mut runs = Vec::with_capacity(variants.len() * seeds.len());
    for variant in variants {
        for seed in seeds {
            let mut rng = SmallRng::seed_from_u64(*seed);
            let results =
                simulate_batch(&mut rng, &variant.distribution, &variant.payout, bet, plays)
                    .with_context(|| format!("simulating variant '{}'", variant.id))?;
            let profits: Vec<f64> = results.iter().map(|r| r.profit).collect();
            let summary = summarize(&profits, bet)
                .with_context(|| format!("summarizing variant '{}'", variant.id))?;
            log::debug!(
                "{}: seed {seed}, mean {:.4}, house edge {:.4}",
                variant.id,
                summary.mean,
                summary.house_edge
            );
            runs.push(VariantRun {
                variant_id: variant.id.clone(),
                variant_name: variant.name.clone(),
                seed: *seed,
                plays,
                bet,
                expected_mean: variant.expected_profit(bet),
                summary,
                face_counts: outcome_counts(&results),
                cumulative: cumulative(&profits),
            });
        }
    }
    Ok(runs)
}

fn write_report(format: &str, runs: &[VariantRun], output: &mut OutputTarget) -> Result<()> {
    match format {
        "json" => generate_json_report(output.writer(), runs),
        "csv" => generate_csv_report(output.writer(), runs),
        _ => generate_console_report(output.writer(), runs),
    }
}

fn paint(color: Color, text: &str) -> ColoredString {
    match color {
        Color::Red => text.red(),
        Color::Blue => text.blue(),
        Color::Yellow => text.yellow(),
        Color::Green => text.green(),
        Color::White => text.white(),
        Color::Purple => text.magenta(),
    }
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
