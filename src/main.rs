use anyhow::Result;
use citylight_lib::model::city::City;
use citylight_lib::model::config::AppConfig;
use citylight_lib::ui::renderer;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of simulation ticks to run
    #[arg(short, long, default_value_t = 5000)]
    steps: u64,

    /// Override the RNG seed from the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Print an ASCII snapshot of the light map on exit
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = AppConfig::load_from(&args.config);
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let mut city = City::new(config)?;
    for _ in 0..args.steps {
        city.step();
        if city.tick % 1000 == 0 {
            info!(
                tick = city.tick,
                active = city.active_count(),
                lit = city.grid.lit_count(),
                "progress"
            );
        }
    }

    if args.snapshot {
        print!("{}", renderer::render_ascii(&city));
    }
    info!(
        ticks = city.tick,
        agents = city.agents.len(),
        "simulation finished"
    );
    Ok(())
}
