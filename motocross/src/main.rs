/// Headless motocross session: heightmap in, ride summary out
mod camera;
mod collectible;
mod config;
mod logging;
mod report;
mod session;
mod vehicle;
mod world;

use config::SessionConfig;
use report::ReportWriter;
use session::{InputScript, Session};
use std::env;
use std::path::Path;
use terrain::TerrainMesh;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [session.json]", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => SessionConfig::load(Path::new(path))?,
        None => SessionConfig::default(),
    };
    info!("Session config: {:?}", config);

    let script = match &config.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript::demo(),
    };

    let mut session = Session::from_config(&config)?;
    let writer = ReportWriter::new(&config.output_dir)?;

    let mesh = TerrainMesh::build(session.terrain());
    writer.write_mesh_summary(&mesh.summary())?;

    let summary = session.run(&script);
    writer.write_run_summary(&summary)?;
    info!(
        "{} collectibles still waiting on the course",
        session.world().active_collectibles().count()
    );

    Ok(())
}
