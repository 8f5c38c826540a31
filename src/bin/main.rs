extern crate rust_raytracer as root;

use root::parsing::config::*;
use root::parsing::{construct_world, parse_config};
use root::renderer::{construct_renderer, output_film, render, Renderer};
use root::world::World;

#[macro_use]
extern crate tracing;

use anyhow::{bail, Context};
use structopt::StructOpt;
use tracing::level_filters::LevelFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    // replaces the filename of the only render_settings entry
    #[structopt(short = "o", long)]
    pub output: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn construct_scene(scene_file: Option<&str>) -> anyhow::Result<World> {
    match scene_file {
        Some(path) => construct_world(path),
        None => {
            info!("no scene file given, using the built in scene");
            Ok(World::default_scene())
        }
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config: Config = parse_config(&opts.config_file)
        .with_context(|| format!("couldn't read config {}", opts.config_file))?;

    // override scene file based on provided command line argument
    if opts.scene_file.is_some() {
        config.scene_file = opts.scene_file;
    }
    if let Some(output) = opts.output {
        if config.render_settings.len() != 1 {
            bail!(
                "--output needs exactly one render_settings entry, config has {}",
                config.render_settings.len()
            );
        }
        config.render_settings[0].filename = output;
    }

    let threads = config
        .render_settings
        .iter()
        .map(|i| i.threads)
        .fold(1, |a, b| a.max(b.unwrap_or(1)));
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()
        .context("failed to build the global thread pool")?;

    let world = construct_scene(config.scene_file.as_deref())
        .context("fatal error parsing world, aborting")?;
    let renderer: Box<dyn Renderer> = construct_renderer(config.renderer);

    if opts.dry_run {
        info!(
            "dry run, skipping {} render(s)",
            config.render_settings.len()
        );
        return Ok(());
    }

    for settings in &config.render_settings {
        let framebuffer = render(&world, settings, renderer.as_ref());
        output_film(settings, &framebuffer)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    let log_level = parse_log_level(&opts.log_level, LevelFilter::INFO);
    tracing_subscriber::fmt().with_max_level(log_level).init();

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        return Err(e);
    }
    Ok(())
}
