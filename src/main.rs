//! abstdraw CLI - turn a mood and a few words into a drawing.

use abstdraw::config::AbstdrawConfig;
use abstdraw::engine::{
    ArtEngine, GenerationRequest, RenderBundle, DEFAULT_POINTS, MAX_POINTS, MIN_POINTS,
};
use abstdraw::generators::{Style, StyleChoice};
use abstdraw::render::{RenderDispatcher, RenderOutcome, SvgCanvas, TextGrid};
use abstdraw::weather::{FixedWeather, WeatherSource, WttrWeather};
use anyhow::Result;
use clap::{Args, Parser, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const MAX_MOOD: i32 = 100;

#[derive(Parser)]
#[command(name = "abstdraw")]
#[command(about = "Draw an abstract piece from how you feel today")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "abstdraw.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate one piece from command-line arguments
    Generate {
        /// Mood, 0-100; the last digit picks the meaning and line color
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(0..=MAX_MOOD as i64))]
        mood: i32,

        /// A few words, up to 100 characters
        #[arg(short, long, default_value = "")]
        prompt: String,

        /// Generation style
        #[arg(short, long, value_enum)]
        style: Option<StyleArg>,

        /// Number of points (1-5000)
        #[arg(long)]
        points: Option<usize>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Ask for mood, words, point budget and style on stdin
    Prompt {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render every style for the same mood and words
    Showcase {
        /// Mood, 0-100
        #[arg(
            short,
            long,
            default_value = "5",
            value_parser = clap::value_parser!(i32).range(0..=MAX_MOOD as i64)
        )]
        mood: i32,

        /// A few words, up to 100 characters
        #[arg(short, long, default_value = "")]
        prompt: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Skip the weather lookup
        #[arg(long)]
        offline: bool,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Draw as text in the terminal instead of SVG
    #[arg(long)]
    text: bool,

    /// Skip the weather lookup
    #[arg(long)]
    offline: bool,

    /// SVG output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also save the generated bundle as JSON
    #[arg(long)]
    save_bundle: bool,
}

#[derive(Clone, Copy, ValueEnum, Debug)]
enum StyleArg {
    /// Let the seed pick
    Auto,
    /// Logistic-map clusters
    Chaotic,
    /// Grid-aligned bands
    Axis,
    /// Random-walk gesture
    Drift,
    /// Expanding spiral
    Spiral,
    /// Six-armed bloom
    Radial,
}

impl StyleArg {
    fn to_choice(self) -> StyleChoice {
        match self {
            StyleArg::Auto => StyleChoice::Auto,
            StyleArg::Chaotic => StyleChoice::Fixed(Style::Chaotic),
            StyleArg::Axis => StyleChoice::Fixed(Style::Axis),
            StyleArg::Drift => StyleChoice::Fixed(Style::Drift),
            StyleArg::Spiral => StyleChoice::Fixed(Style::Spiral),
            StyleArg::Radial => StyleChoice::Fixed(Style::Radial),
        }
    }
}

/// Malformed input counts as mood 0; anything else is clamped to 0-100.
fn parse_mood(input: &str) -> i32 {
    input
        .trim()
        .parse::<i64>()
        .map(|m| m.clamp(0, MAX_MOOD as i64) as i32)
        .unwrap_or(0)
}

/// Empty or malformed input uses the default budget.
fn parse_point_budget(input: &str) -> usize {
    input
        .trim()
        .parse::<usize>()
        .map(|p| p.clamp(MIN_POINTS, MAX_POINTS))
        .unwrap_or(DEFAULT_POINTS)
}

/// Unknown style names fall back to auto.
fn parse_style(input: &str) -> StyleChoice {
    input.parse().unwrap_or_else(|e| {
        warn!("{e}; using auto");
        StyleChoice::Auto
    })
}

async fn lookup_weather(config: &AbstdrawConfig, offline: bool) -> String {
    if offline || !config.weather.enabled {
        return FixedWeather::unknown().current().await;
    }
    WttrWeather::new(&config.weather.url, config.weather.timeout())
        .current()
        .await
}

fn default_svg_path(config: &AbstdrawConfig, bundle: &RenderBundle) -> PathBuf {
    PathBuf::from(&config.output.directory).join(format!(
        "abstdraw_{}_{}.svg",
        bundle.display().date,
        bundle.seed()
    ))
}

fn print_summary(bundle: &RenderBundle) {
    for line in bundle.display().summary_lines() {
        println!("{line}");
    }
    println!("Style: {} (seed {})", bundle.style(), bundle.seed());
}

fn save_bundle(bundle: &RenderBundle, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(bundle)?)?;
    println!("Saved bundle to {}", path.display());
    Ok(())
}

/// Text grid from config, plus the SVG canvas unless text was asked for.
fn dispatcher(config: &AbstdrawConfig, svg_path: &Path, text_only: bool) -> RenderDispatcher {
    let grid = TextGrid::new(config.render.grid_width, config.render.grid_height);
    let dispatcher = RenderDispatcher::new(grid);
    if text_only || config.render.text_only {
        return dispatcher;
    }
    match SvgCanvas::new(svg_path, config.render.width, config.render.height) {
        Ok(canvas) => dispatcher.with_canvas(Box::new(canvas)),
        Err(e) => {
            warn!("{e}");
            dispatcher
        }
    }
}

fn report(outcome: &RenderOutcome, svg_path: &Path) {
    match outcome {
        RenderOutcome::Canvas { .. } => println!("Saved to {}", svg_path.display()),
        RenderOutcome::Text { reason: Some(reason) } => println!("(drawn as text: {reason})"),
        RenderOutcome::Text { reason: None } => {}
    }
}

fn draw(config: &AbstdrawConfig, bundle: &RenderBundle, args: &RenderArgs) -> Result<()> {
    print_summary(bundle);

    let svg_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_svg_path(config, bundle));

    let outcome = dispatcher(config, &svg_path, args.text).render(
        bundle,
        config.render.max_points,
        &mut io::stdout().lock(),
    );
    report(&outcome, &svg_path);

    if args.save_bundle || config.output.save_bundle {
        save_bundle(bundle, &svg_path.with_extension("json"))?;
    }
    Ok(())
}

fn ask(lines: &mut impl Iterator<Item = io::Result<String>>, question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.unwrap_or_default())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("abstdraw=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = AbstdrawConfig::load(Path::new(&cli.config))?;
    let engine = ArtEngine::default();

    match cli.command {
        Commands::Generate {
            mood,
            prompt,
            style,
            points,
            render,
        } => {
            let style =
                style.map_or_else(|| parse_style(&config.generator.style), StyleArg::to_choice);
            let weather = lookup_weather(&config, render.offline).await;

            let request = GenerationRequest::new(mood, &prompt, &weather)
                .with_style(style)
                .with_point_budget(points.unwrap_or(config.generator.point_budget));
            info!(seed = request.seed_material().seed(), "generating");

            let bundle = engine.generate(&request);
            draw(&config, &bundle, &render)?;
        }

        Commands::Prompt { render } => {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();

            let mood = parse_mood(&ask(&mut lines, &format!("Feeling (0-{MAX_MOOD}): "))?);
            let prompt = ask(&mut lines, "Words (up to 100): ")?;
            let points = parse_point_budget(&ask(
                &mut lines,
                &format!("Points ({MIN_POINTS}-{MAX_POINTS}, default {DEFAULT_POINTS}): "),
            )?);
            let style = parse_style(&ask(
                &mut lines,
                "Style (auto, chaotic, axis, drift, spiral, radial): ",
            )?);

            let weather = lookup_weather(&config, render.offline).await;
            let request = GenerationRequest::new(mood, &prompt, &weather)
                .with_style(style)
                .with_point_budget(points);

            let bundle = engine.generate(&request);
            draw(&config, &bundle, &render)?;
        }

        Commands::Showcase {
            mood,
            prompt,
            output_dir,
            offline,
        } => {
            let output_dir = output_dir
                .unwrap_or_else(|| PathBuf::from(&config.output.directory).join("showcase"));

            let weather = lookup_weather(&config, offline).await;
            println!("Generating showcase for mood {mood} ({weather})...");

            for style in Style::ALL {
                let request = GenerationRequest::new(mood, &prompt, &weather)
                    .with_style(StyleChoice::Fixed(style))
                    .with_point_budget(config.generator.point_budget);
                let bundle = engine.generate(&request);

                let svg_path = output_dir.join(format!("{}.svg", style.name()));
                println!("  {} (seed {})", style, bundle.seed());
                let outcome = dispatcher(&config, &svg_path, false).render(
                    &bundle,
                    config.render.max_points,
                    &mut io::stdout().lock(),
                );
                report(&outcome, &svg_path);
            }

            println!("Done! Showcase written under {}", output_dir.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_input_is_defaulted_and_clamped() {
        assert_eq!(parse_mood("7"), 7);
        assert_eq!(parse_mood(" 42 \n"), 42);
        assert_eq!(parse_mood("-3"), 0);
        assert_eq!(parse_mood("250"), MAX_MOOD);
        assert_eq!(parse_mood("happy"), 0);
        assert_eq!(parse_mood(""), 0);
    }

    #[test]
    fn point_budget_input_is_defaulted_and_clamped() {
        assert_eq!(parse_point_budget(""), DEFAULT_POINTS);
        assert_eq!(parse_point_budget("lots"), DEFAULT_POINTS);
        assert_eq!(parse_point_budget("0"), MIN_POINTS);
        assert_eq!(parse_point_budget("9000"), MAX_POINTS);
        assert_eq!(parse_point_budget("2500"), 2500);
    }

    #[test]
    fn style_input_falls_back_to_auto() {
        assert_eq!(parse_style("radial"), StyleChoice::Fixed(Style::Radial));
        assert_eq!(parse_style(""), StyleChoice::Auto);
        assert_eq!(parse_style("baroque"), StyleChoice::Auto);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn style_args_cover_every_style() {
        let fixed: Vec<Style> = StyleArg::value_variants()
            .iter()
            .filter_map(|arg| match arg.to_choice() {
                StyleChoice::Fixed(style) => Some(style),
                StyleChoice::Auto => None,
            })
            .collect();
        assert_eq!(fixed, Style::ALL.to_vec());
    }

    fn sample_bundle(style: Style) -> RenderBundle {
        let request = GenerationRequest::new(4, "showcase", "Fog")
            .with_date("20240101")
            .with_style(StyleChoice::Fixed(style))
            .with_point_budget(200);
        ArtEngine::default().generate(&request)
    }

    #[test]
    fn zero_sized_canvas_falls_back_to_text() {
        let mut config = AbstdrawConfig::default();
        config.render.width = 0;
        let path = std::env::temp_dir().join("abstdraw-zero-canvas.svg");

        for style in Style::ALL {
            let mut out = Vec::new();
            let outcome =
                dispatcher(&config, &path, false).render(&sample_bundle(style), 200, &mut out);
            assert_eq!(outcome, RenderOutcome::Text { reason: None });
            assert_eq!(String::from_utf8(out).unwrap().lines().count(), 30);
        }
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_output_dir_falls_back_to_text() {
        let blocker = std::env::temp_dir().join(format!("abstdraw-blocker-{}", std::process::id()));
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("showcase").join("spiral.svg");

        let mut out = Vec::new();
        let outcome = dispatcher(&AbstdrawConfig::default(), &path, false).render(
            &sample_bundle(Style::Spiral),
            200,
            &mut out,
        );
        assert!(matches!(outcome, RenderOutcome::Text { reason: Some(_) }));
        assert!(!out.is_empty());

        fs::remove_file(&blocker).unwrap();
    }

    #[test]
    fn text_flag_skips_the_canvas() {
        let path = std::env::temp_dir().join("abstdraw-text-flag.svg");
        let mut out = Vec::new();
        let outcome = dispatcher(&AbstdrawConfig::default(), &path, true).render(
            &sample_bundle(Style::Axis),
            200,
            &mut out,
        );
        assert_eq!(outcome, RenderOutcome::Text { reason: None });
    }
}
