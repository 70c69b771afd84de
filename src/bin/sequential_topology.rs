//! Builds the sequential topology and hands it to the emulator with default
//! driver options. Takes no arguments.

use color_eyre::Result;
use env_logger::Env;

use sdntopo::catalog::sequential_topology;
use sdntopo::driver::launch;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let topology = sequential_topology()?;
    launch(&topology)
}
