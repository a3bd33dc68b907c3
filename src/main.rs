// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::info;

use lcglab::{
    analyze, export, render,
    rngs::{presets, GeneratorParameters},
};

const CHART_WIDTH: usize = 50;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Preset {
    Randu,
    Minstd,
    AnsiC,
    NumericalRecipes,
}

impl Preset {
    fn triple(self) -> presets::Triple {
        match self {
            Preset::Randu => presets::RANDU,
            Preset::Minstd => presets::MINSTD,
            Preset::AnsiC => presets::ANSI_C,
            Preset::NumericalRecipes => presets::NUMERICAL_RECIPES,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Initial state, reduced modulo m. Random when omitted.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Multiplier a.
    #[arg(short = 'a', long, value_name = "INT")]
    multiplier: Option<u64>,

    /// Increment c.
    #[arg(short = 'c', long, value_name = "INT")]
    increment: Option<u64>,

    /// Modulus m.
    #[arg(short = 'm', long, value_name = "INT")]
    modulus: Option<u64>,

    /// Named parameter set for a, c and m. Explicit flags take precedence.
    #[arg(long, value_enum, default_value = "ansi-c")]
    preset: Preset,

    /// Number of values to generate.
    #[arg(short = 'n', long, value_name = "INT", default_value = "1000")]
    count: usize,

    /// Number of histogram bins.
    #[arg(short = 'b', long, value_name = "INT", default_value = "10")]
    bins: usize,

    /// Export the sequence as CSV.
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "lcg_sequence.csv"
    )]
    csv: Option<PathBuf>,

    /// How many values to show in the sample preview.
    #[arg(long, value_name = "INT", default_value = "20")]
    preview: usize,

    /// Do not draw the histogram.
    #[arg(long)]
    no_chart: bool,

    /// More output, repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn generator_parameters(&self) -> GeneratorParameters {
        let (multiplier, increment, modulus) = self.preset.triple();
        let seed = self.seed.unwrap_or_else(|| {
            let seed = rand::random::<u64>();
            info!("no seed given, using random seed {seed}");
            seed
        });
        GeneratorParameters {
            seed,
            multiplier: self.multiplier.unwrap_or(multiplier),
            increment: self.increment.unwrap_or(increment),
            modulus: self.modulus.unwrap_or(modulus),
            count: self.count,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    info!("args = {:?}", args);

    let params = args.generator_parameters();
    let result = analyze(&params, args.bins)?;

    if !args.no_chart {
        println!("{}\n", render::histogram_bars(&result.histogram, CHART_WIDTH));
    }
    println!("{}", result.format_report(args.preview));

    if let Some(path) = &args.csv {
        export::save_csv(path, &result.sequence)?;
        println!("Sequence written to {}", path.display());
    }
    Ok(())
}
