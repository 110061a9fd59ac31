use std::fs::{self, File};
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use wallfit::fitting::rank_candidates;
use wallfit::io::export::{export_layout, export_suggestions};
use wallfit::io::import::Importer;
use wallfit::io::svg::s_layout_to_svg;

use wall_builder::config::BuilderConfig;
use wall_builder::io::cli::Cli;
use wall_builder::io::output::BuilderOutput;
use wall_builder::opt::WallFiller;
use wall_builder::session::estimate;
use wall_builder::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BuilderConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(strategy) = args.strategy {
        config.fill_strategy = strategy;
    }

    info!("Successfully parsed BuilderConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_catalog = io::read_catalog(args.input_file.as_path())?;
    let importer = Importer::new(config.limits);
    let catalog = importer.import_catalog(&ext_catalog)?;
    let layout = importer.import_layout(&catalog, &ext_catalog.placements)?;

    info!(
        "[MAIN] '{}': {} mm wall, {} modules placed, utilization {:.1}%",
        catalog.name,
        catalog.wall.width,
        layout.len(),
        layout.utilization_pct()
    );

    let mut filler = WallFiller::new(catalog, layout, config.clone());
    let solution = match args.no_fill {
        true => filler.layout.save(),
        false => filler.solve()?,
    };
    let WallFiller {
        catalog, layout, ..
    } = filler;

    let suggestions = rank_candidates(&layout, &catalog.modules, &config.fit_config);

    {
        let output = BuilderOutput {
            layout: export_layout(&layout),
            suggestions: export_suggestions(&suggestions),
            estimate: estimate(&layout, &catalog, &config.pricing),
            catalog: ext_catalog,
            config: config.clone(),
            run_time_ms: EPOCH.elapsed().as_millis() as u64,
        };
        info!("[MAIN] estimated price: {}", output.estimate.formatted_total());

        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_stem}.svg"));
        let svg = s_layout_to_svg(&solution, &catalog, config.svg_draw_options, &input_stem);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
