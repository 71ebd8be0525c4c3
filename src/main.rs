use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tabled::Table;

use physiosim::config::AppConfig;
use physiosim::export::{self, ExportFormat};
use physiosim::logging::{init_logging, LogLevel};
use physiosim::models::{InitialPhysiology, SimulationInput, Trajectory, TrainingRegimen};
use physiosim::optimizer::{OptimizerConfig, PlanOptimizer};
use physiosim::report::ReportBuilder;
use physiosim::simulation::PhysiologySimulator;
use physiosim::validation::InputValidator;

/// PhysioSim - Athlete Physiology Projection CLI
///
/// Projects an athlete's physiological trajectory (muscle mass, body fat,
/// strength, endurance, VO2max) over a multi-month horizon under a static
/// training regimen, and searches a regimen grid for the best plan.
#[derive(Parser)]
#[command(name = "physiosim")]
#[command(version = "0.1.0")]
#[command(about = "Athlete Physiology Projection CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Baseline athlete measurements
#[derive(Args)]
struct PhysiologyArgs {
    /// Age in years (11-50)
    #[arg(long)]
    age: f64,

    /// Body weight in kg (30-120)
    #[arg(long)]
    body_weight: f64,

    /// Muscle mass as % of body weight (25-55)
    #[arg(long)]
    muscle_mass: f64,

    /// Body fat percentage (5-35)
    #[arg(long)]
    body_fat: f64,

    /// Strength index in points (30-200)
    #[arg(long, default_value_t = 100.0)]
    strength: f64,

    /// Endurance index in points (30-200)
    #[arg(long, default_value_t = 100.0)]
    endurance: f64,

    /// Mobility score in points (30-100)
    #[arg(long, default_value_t = 70.0)]
    mobility: f64,
}

impl PhysiologyArgs {
    fn to_physiology(&self) -> InitialPhysiology {
        InitialPhysiology {
            age: self.age,
            body_weight: self.body_weight,
            muscle_mass_percentage: self.muscle_mass,
            body_fat: self.body_fat,
            strength_index: self.strength,
            endurance_index: self.endurance,
            mobility_score: self.mobility,
        }
    }
}

/// Training regimen parameters
#[derive(Args)]
struct RegimenArgs {
    /// Daily training hours (0.5-6)
    #[arg(long)]
    hours: f64,

    /// Session intensity % (0-100)
    #[arg(long)]
    intensity: f64,

    /// Diet quality % (0-100)
    #[arg(long)]
    diet: f64,

    /// Nightly sleep hours (4-10)
    #[arg(long)]
    sleep: f64,
}

impl RegimenArgs {
    fn to_regimen(&self) -> TrainingRegimen {
        TrainingRegimen {
            training_hours: self.hours,
            intensity: self.intensity,
            diet: self.diet,
            sleep_hours: self.sleep,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Project a trajectory under a fixed regimen
    Simulate {
        #[command(flatten)]
        physiology: PhysiologyArgs,

        #[command(flatten)]
        regimen: RegimenArgs,

        /// Projection horizon in months (presets: 6, 12, 24, 36)
        #[arg(short, long)]
        months: Option<u32>,

        /// Write the trajectory to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (csv, json)
        #[arg(short = 'f', long, default_value = "csv")]
        format: String,

        /// Print the report payload as JSON
        #[arg(long)]
        report: bool,
    },

    /// Search the regimen grid for the optimal plan
    Optimize {
        #[command(flatten)]
        physiology: PhysiologyArgs,

        /// Projection horizon in months (presets: 6, 12, 24, 36)
        #[arg(short, long)]
        months: Option<u32>,

        /// Write the winning trajectory to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (csv, json)
        #[arg(short = 'f', long, default_value = "csv")]
        format: String,

        /// Print the report payload as JSON
        #[arg(long)]
        report: bool,
    },

    /// Manage the configuration file
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,

        /// Print the active configuration
        #[arg(long)]
        show: bool,

        /// Print the default config path
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref());

    let mut log_config = config.log.clone();
    if cli.verbose > 0 {
        log_config.level = LogLevel::from_verbosity(cli.verbose);
    }
    init_logging(&log_config)?;

    match cli.command {
        Commands::Simulate {
            physiology,
            regimen,
            months,
            output,
            format,
            report,
        } => {
            let physiology = physiology.to_physiology();
            let regimen = regimen.to_regimen();
            let input = SimulationInput::new(physiology, regimen);
            InputValidator::validate_input(&input)?;

            let months = months.unwrap_or(config.settings.default_duration_months);

            println!("{}", "Projecting trajectory...".green().bold());
            println!("  Regimen: {}", regimen);
            println!("  Horizon: {} months", months);

            let trajectory = PhysiologySimulator::simulate(&input, months);
            print_trajectory(&trajectory);

            if let Some(path) = output {
                let format = ExportFormat::from_str(&format)?;
                export::export_trajectory(&trajectory, &path, format)?;
                println!("{} {}", "✓ Trajectory written to".green(), path.display());
            }

            if report {
                if let Some(payload) =
                    ReportBuilder::simulation_report(&physiology, &regimen, &trajectory)
                {
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }
        }

        Commands::Optimize {
            physiology,
            months,
            output,
            format,
            report,
        } => {
            let physiology = physiology.to_physiology();
            InputValidator::validate_physiology(&physiology)?;

            let months = months.unwrap_or(config.settings.default_duration_months);

            let optimizer = PlanOptimizer::with_config(OptimizerConfig {
                grid: config.optimizer.grid.clone(),
                weights: config.optimizer.weights,
                parallel: config.optimizer.parallel,
                show_progress: true,
            });

            println!("{}", "Searching regimen grid...".blue().bold());
            println!("  Candidates: {}", config.optimizer.grid.len());
            println!("  Horizon: {} months", months);

            let result = optimizer.find_optimal_plan(&physiology, months)?;

            println!("{}", "✓ Optimal plan found".blue().bold());
            println!("  Regimen: {}", result.regimen.to_string().bold());
            println!("  Score: {:.3}", result.score);
            print_trajectory(&result.trajectory);

            if let Some(path) = output {
                let format = ExportFormat::from_str(&format)?;
                export::export_trajectory(&result.trajectory, &path, format)?;
                println!("{} {}", "✓ Trajectory written to".blue(), path.display());
            }

            if report {
                if let Some(payload) = ReportBuilder::optimization_report(&physiology, &result) {
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }
        }

        Commands::Config { init, show, path } => {
            let config_path = cli
                .config
                .clone()
                .unwrap_or_else(AppConfig::default_config_path);

            if init {
                let mut fresh = AppConfig::default();
                fresh.save_to_file(&config_path)?;
                println!(
                    "{} {}",
                    "✓ Default configuration written to".white(),
                    config_path.display()
                );
            }
            if show {
                println!("{}", toml::to_string_pretty(&config)?);
            }
            if path {
                println!("{}", config_path.display());
            }
            if !init && !show && !path {
                println!("Specify --init, --show or --path");
            }
        }
    }

    Ok(())
}

fn print_trajectory(trajectory: &Trajectory) {
    println!("{}", Table::new(trajectory));

    if let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) {
        println!(
            "  Muscle {:.2} -> {:.2} kg | Body fat {:.2} -> {:.2}% | VO2max {:.2} -> {:.2}",
            first.muscle_mass,
            last.muscle_mass,
            first.body_fat,
            last.body_fat,
            first.vo2_max,
            last.vo2_max
        );
    }
}
