use scrolly_chart::api::{BarChart, ChartConfig, Container, Orchestrator};
use scrolly_chart::core::Record;
use scrolly_chart::interaction::{NarrativeBinding, ScriptedNarrative};
use scrolly_chart::render::SvgRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_OUTPUT_ROOT: &str = "target/scrolly-snapshots";
const DEFAULT_SECTIONS: [usize; 4] = [0, 1, 2, 3];

#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    data_path: Option<PathBuf>,
    output_root: PathBuf,
    sections: Vec<usize>,
}

fn main() {
    let _ = scrolly_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => ChartConfig::from_json_str(&read_file(path)?)
            .map_err(|err| format!("failed to parse config `{}`: {err}", path.display()))?,
        None => Orchestrator::demo_config(),
    };
    let data: Vec<Record> = match &args.data_path {
        Some(path) => serde_json::from_str(&read_file(path)?)
            .map_err(|err| format!("failed to parse data `{}`: {err}", path.display()))?,
        None => Orchestrator::demo_data(),
    };

    fs::create_dir_all(&args.output_root).map_err(|err| {
        format!(
            "failed to create output root `{}`: {err}",
            args.output_root.display()
        )
    })?;

    let binding = NarrativeBinding::default();
    let container = Container::new(binding.chart_region_id.clone());
    let mut orchestrator = Orchestrator::new(BarChart::from_config(config), data, container);
    let step_count = args.sections.iter().max().map_or(0, |max| max + 1);
    let mut narrative = ScriptedNarrative::new(binding, step_count);

    orchestrator.start();
    write_snapshot(&mut orchestrator, &args.output_root, "start")?;

    let mut written = 1usize;
    for &index in &args.sections {
        if narrative.scroll_to(index, &mut orchestrator).is_none() {
            continue;
        }
        write_snapshot(&mut orchestrator, &args.output_root, &format!("section-{index}"))?;
        written += 1;
    }

    println!(
        "wrote {written} snapshot(s) to {}",
        args.output_root.display()
    );
    Ok(())
}

fn write_snapshot(
    orchestrator: &mut Orchestrator,
    output_root: &Path,
    name: &str,
) -> Result<(), String> {
    let container = orchestrator.container_mut();
    container.settle();

    let mut renderer = SvgRenderer::new();
    container
        .draw(&mut renderer)
        .map_err(|err| format!("snapshot `{name}` render failed: {err}"))?;
    let path = output_root.join(format!("{name}.svg"));
    renderer
        .write_to_file(&path)
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    info!(snapshot = name, path = %path.display(), "svg written");

    #[cfg(feature = "cairo-backend")]
    write_png(container, output_root, name)?;
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(container: &Container, output_root: &Path, name: &str) -> Result<(), String> {
    use scrolly_chart::render::CairoRenderer;

    let Some(surface) = container.surface() else {
        return Ok(());
    };
    let viewport = surface.viewport();
    let width = raster_size(viewport.width, "width")?;
    let height = raster_size(viewport.height, "height")?;
    let mut renderer = CairoRenderer::new(width, height)
        .map_err(|err| format!("snapshot `{name}` raster setup failed: {err}"))?;
    container
        .draw(&mut renderer)
        .map_err(|err| format!("snapshot `{name}` raster render failed: {err}"))?;
    let path = output_root.join(format!("{name}.png"));
    renderer
        .write_png(&path)
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    info!(snapshot = name, path = %path.display(), "png written");
    Ok(())
}

/// Pixel size of a raster snapshot; rejects sizes that do not fit a surface.
#[cfg_attr(not(feature = "cairo-backend"), allow(dead_code))]
fn raster_size(value: f64, dimension: &str) -> Result<i32, String> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= 1.0 && rounded <= f64::from(i32::MAX) {
        Ok(rounded as i32)
    } else {
        Err(format!("chart {dimension} `{value}` is not a usable raster size"))
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut data_path: Option<PathBuf> = None;
    let mut output_root = PathBuf::from(DEFAULT_OUTPUT_ROOT);
    let mut sections = DEFAULT_SECTIONS.to_vec();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = Some(PathBuf::from(value));
            }
            "--output-root" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-root".to_owned())?;
                output_root = PathBuf::from(value);
            }
            "--sections" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --sections".to_owned())?;
                sections = parse_sections(&value)?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        data_path,
        output_root,
        sections,
    })
}

fn parse_sections(value: &str) -> Result<Vec<usize>, String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|err| format!("invalid section index `{part}`: {err}"))
        })
        .collect()
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin scrolly_snapshots -- [options]\n\nOptions:\n  --config <path>        Chart config json (default: demo chart)\n  --data <path>          Records json array (default: demo records)\n  --output-root <path>   Snapshot directory (default: {DEFAULT_OUTPUT_ROOT})\n  --sections <i,j,..>    Active section sequence (default: 0,1,2,3)\n  -h, --help             Show this message"
    )
}
