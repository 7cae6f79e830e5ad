#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod host;

use abstutil::Timer;
use anyhow::Result;
use geom::Time;
use structopt::StructOpt;

use model::{Config, FlightMap, ViewMode};

use self::host::{FrameClock, Host};

#[derive(StructOpt)]
struct Args {
    /// A JSON file describing the origin, destinations, and animation settings. Anything
    /// missing uses the defaults.
    #[structopt(long)]
    config: Option<String>,
    /// Write the default config to this path and quit
    #[structopt(long)]
    dump_config: Option<String>,
    /// How many frames per second the simulated map renders
    #[structopt(long, default_value = "60")]
    fps: f64,
    /// Stop after this many frames, even if the trails aren't done
    #[structopt(long, default_value = "100000")]
    max_frames: usize,
    /// Write the origin, arcs, and final trails to this GeoJSON file
    #[structopt(long)]
    geojson: Option<String>,
    /// After the trails finish, switch back to the origin view
    #[structopt(long)]
    back_to_origin: bool,
}

impl Args {
    fn load_config(&self, timer: &mut Timer) -> Result<Config> {
        match self.config {
            Some(ref path) => abstio::maybe_read_json::<Config>(path.clone(), timer),
            None => Ok(Config::default()),
        }
    }
}

fn main() -> Result<()> {
    abstutil::logger::setup();

    let args = Args::from_iter(abstutil::cli_args());
    if let Some(ref path) = args.dump_config {
        abstio::write_json(path.clone(), &Config::default());
        return Ok(());
    }

    let mut timer = Timer::new("replay flight paths");
    let config = args.load_config(&mut timer)?;
    let mut map = FlightMap::new(config, &mut timer)?;
    drop(timer);

    let clock = FrameClock::new(Time::START_OF_DAY, args.fps)?;
    let mut host = Host::new(clock, args.max_frames);
    host.select(&mut map, ViewMode::FlightPaths);
    if !host.run_until_idle(&mut map) {
        warn!("Trails didn't finish; try raising --max-frames");
    }
    info!(
        "Rendered {} frames, ending at {}",
        host.frames_rendered,
        host.now()
    );

    if let Some(path) = args.geojson {
        map.export_to_geojson(path)?;
    }

    if args.back_to_origin {
        host.select(&mut map, ViewMode::Origin);
    }
    Ok(())
}
