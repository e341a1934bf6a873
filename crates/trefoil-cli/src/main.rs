use serde::Serialize;
use serde_json::Value;
use std::io::{Read, Write};
use std::str::FromStr;
use trefoil::render::raster::{self, RasterError, RasterOptions};
use trefoil::render::{
    DiagramConfig, HeadlessError, RenderError, SvgRenderOptions, layout_diagram, render_statuses_svg,
    sanitize_svg_id, status_map_from_names, svg_data_uri,
};
use trefoil::{
    Answers, AreaDefinition, AssessmentResults, Catalogue, Question, ScoreBands, StatusMap,
};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Input(trefoil::Error),
    Render(HeadlessError),
    Raster(RasterError),
    InvalidStatuses(trefoil::render::DiagramInputError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Input(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::InvalidStatuses(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<trefoil::Error> for CliError {
    fn from(value: trefoil::Error) -> Self {
        Self::Input(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Render(value)
    }
}

impl From<RenderError> for CliError {
    fn from(value: RenderError) -> Self {
        Self::Render(HeadlessError::Render(value))
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Score,
    Layout,
    Render,
    Catalogue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum InputKind {
    #[default]
    Answers,
    Statuses,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    DataUri,
    PngDataUri,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "data-uri" => Ok(Self::DataUri),
            "png-data-uri" => Ok(Self::PngDataUri),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    input_kind: InputKind,
    config: Option<String>,
    pretty: bool,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    diagram_id: Option<String>,
    title: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "trefoil\n\
\n\
USAGE:\n\
  trefoil [score] [--pretty] [<path>|-]\n\
  trefoil layout [--pretty] [--input-kind answers|statuses] [--config <path>] [<path>|-]\n\
  trefoil render [--format svg|png|jpg|data-uri|png-data-uri] [--input-kind answers|statuses] [--config <path>] [--scale <n>] [--background <css-color>] [--id <diagram-id>] [--title <text>] [--out <path>] [<path>|-]\n\
  trefoil catalogue [--pretty]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - answers input is a JSON object of question id to rating (1-5).\n\
  - statuses input is a JSON object of area display name to low|medium|high (or red|amber|green).\n\
  - --config takes a JSON object deep-merged over the default diagram config.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG output defaults to writing next to the input file (or ./out.png / ./out.jpg for stdin).\n\
  - Log verbosity follows TREFOIL_LOG (e.g. TREFOIL_LOG=debug); logs go to stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Score,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "score" => args.command = Command::Score,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "catalogue" | "catalog" => args.command = Command::Catalogue,
            "--pretty" => args.pretty = true,
            "--input-kind" => {
                args.input_kind = match next_value(&mut it)?.as_str() {
                    "answers" => InputKind::Answers,
                    "statuses" => InputKind::Statuses,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--id" => args.diagram_id = Some(next_value(&mut it)?.clone()),
            "--title" => args.title = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: std::path::PathBuf) -> Result<(), CliError> {
    std::fs::write(&out, bytes)?;
    tracing::info!(path = %out.display(), bytes = bytes.len(), "wrote raster output");
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn load_config(path: Option<&str>) -> Result<DiagramConfig, CliError> {
    let Some(path) = path else {
        return Ok(DiagramConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    Ok(DiagramConfig::from_json_str(&text)?)
}

/// Statuses JSON: display name to tag. Non-string values are reported as invalid tags.
fn parse_statuses(text: &str) -> Result<StatusMap, CliError> {
    let obj: serde_json::Map<String, Value> = serde_json::from_str(text)?;
    let entries = obj.into_iter().map(|(k, v)| {
        let tag = match v {
            Value::String(s) => s,
            other => other.to_string(),
        };
        (k, tag)
    });
    status_map_from_names(entries).map_err(CliError::InvalidStatuses)
}

fn score(text: &str) -> Result<AssessmentResults, CliError> {
    let answers = Answers::from_json_str(text)?;
    tracing::debug!(answers = answers.len(), "scoring answers");
    Ok(trefoil::compute_results(&answers))
}

fn statuses_for(args: &Args, text: &str) -> Result<StatusMap, CliError> {
    match args.input_kind {
        InputKind::Answers => Ok(score(text)?.status_map()),
        InputKind::Statuses => parse_statuses(text),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogueOut<'a> {
    version: &'a str,
    questions_per_area: u32,
    max_score: u32,
    bands: ScoreBands,
    areas: &'a [AreaDefinition],
    questions: &'a [Question],
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Catalogue => {
            let cat = Catalogue::standard();
            write_json(
                &CatalogueOut {
                    version: cat.version(),
                    questions_per_area: cat.questions_per_area(),
                    max_score: cat.max_score(),
                    bands: cat.bands(),
                    areas: cat.areas(),
                    questions: cat.questions(),
                },
                args.pretty,
            )
        }
        Command::Score => {
            let text = read_input(args.input.as_deref())?;
            write_json(&score(&text)?, args.pretty)
        }
        Command::Layout => {
            let text = read_input(args.input.as_deref())?;
            let statuses = statuses_for(&args, &text)?;
            let config = load_config(args.config.as_deref())?;
            let layout = layout_diagram(&statuses, &config)?;
            write_json(&layout, args.pretty)
        }
        Command::Render => {
            let text = read_input(args.input.as_deref())?;
            let statuses = statuses_for(&args, &text)?;
            let config = load_config(args.config.as_deref())?;
            let svg_options = SvgRenderOptions {
                diagram_id: args.diagram_id.as_deref().map(sanitize_svg_id),
                title: args.title.clone(),
                ..SvgRenderOptions::default()
            };
            let svg = render_statuses_svg(&statuses, &config, &svg_options)?;
            let raster_options = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
                ..RasterOptions::default()
            };

            match args.render_format {
                RenderFormat::Svg => write_text(&svg, args.out.as_deref()),
                RenderFormat::DataUri => {
                    write_text(&format!("{}\n", svg_data_uri(&svg)), args.out.as_deref())
                }
                RenderFormat::PngDataUri => {
                    let png = raster::svg_to_png(&svg, &raster_options)?;
                    let uri = raster::png_data_uri(&png);
                    write_text(&format!("{uri}\n"), args.out.as_deref())
                }
                RenderFormat::Png => {
                    let png = raster::svg_to_png(&svg, &raster_options)?;
                    let out = args.out.as_deref().map(std::path::PathBuf::from).unwrap_or_else(
                        || default_raster_out_path(args.input.as_deref(), "png"),
                    );
                    write_bytes(&png, out)
                }
                RenderFormat::Jpeg => {
                    let jpg = raster::svg_to_jpeg(&svg, &raster_options)?;
                    let out = args.out.as_deref().map(std::path::PathBuf::from).unwrap_or_else(
                        || default_raster_out_path(args.input.as_deref(), "jpg"),
                    );
                    write_bytes(&jpg, out)
                }
            }
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("TREFOIL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
