use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::time::Instant;

use semantic_transition::config::Config;
use semantic_transition::duration::TransitionDuration;
use semantic_transition::logging::init_tracing;
use semantic_transition::render::{render_child, Element};
use semantic_transition::timer::TokioScheduler;
use semantic_transition::transition::{
    TransitionCallbacks, TransitionEngine, TransitionProps, TransitionState, TransitionStatus,
};

#[derive(Debug, Parser)]
#[command(name = "semantic-transition", version, about = "Drive and inspect UI transitions")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a toggle sequence against a live transition and print each frame
    Simulate(SimulateArgs),
    /// Print the rendered classes and style for every status
    Classes(ClassesArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Toggle {
    Show,
    Hide,
}

#[derive(Debug, clap::Args)]
struct SimulateArgs {
    /// Comma separated visibility requests, e.g. show,hide,show
    #[arg(long, value_delimiter = ',', required = true)]
    toggles: Vec<Toggle>,

    /// Delay between toggles in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    #[command(flatten)]
    overrides: PropOverrides,

    /// Start visible
    #[arg(long)]
    initial_visible: bool,
}

#[derive(Debug, clap::Args)]
struct ClassesArgs {
    #[command(flatten)]
    overrides: PropOverrides,
}

#[derive(Debug, clap::Args)]
struct PropOverrides {
    /// Animation name
    #[arg(long)]
    animation: Option<String>,

    /// Milliseconds, or SHOW/HIDE milliseconds
    #[arg(long, value_parser = parse_duration)]
    duration: Option<TransitionDuration>,

    #[arg(long)]
    transition_on_mount: bool,

    #[arg(long)]
    unmount_on_hide: bool,

    /// Keep the child mounted while hidden before the first show
    #[arg(long)]
    no_mount_on_show: bool,
}

impl PropOverrides {
    fn props(&self, config: &Config, visible: bool) -> TransitionProps {
        let animation = self
            .animation
            .as_deref()
            .unwrap_or(&config.defaults.animation);
        let mut props = config.props_for(animation, visible);
        if let Some(duration) = &self.duration {
            props.duration = duration.clone();
        }
        props.transition_on_mount |= self.transition_on_mount;
        props.unmount_on_hide |= self.unmount_on_hide;
        if self.no_mount_on_show {
            props.mount_on_show = false;
        }
        props
    }
}

fn parse_duration(raw: &str) -> Result<TransitionDuration, String> {
    match raw.split_once('/') {
        Some((show, hide)) => {
            let show = show.trim().parse().map_err(|e| format!("invalid show duration: {e}"))?;
            let hide = hide.trim().parse().map_err(|e| format!("invalid hide duration: {e}"))?;
            Ok(TransitionDuration::split(show, hide))
        }
        None => Ok(raw
            .trim()
            .parse::<u64>()
            .map(TransitionDuration::Millis)
            .unwrap_or_else(|_| TransitionDuration::Text(raw.to_string()))),
    }
}

fn sample_child() -> Element {
    Element::new("div")
        .with_class("ui segment")
        .with_text("Transitioned content")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Command::Simulate(args) => simulate(&config, args).await,
        Command::Classes(args) => {
            print_classes(&config, &args);
            Ok(())
        }
    }
}

async fn simulate(config: &Config, args: SimulateArgs) -> anyhow::Result<()> {
    let props = args.overrides.props(config, args.initial_visible);
    tracing::info!(?props, toggles = args.toggles.len(), "Starting simulation");

    let started = Instant::now();
    let callbacks = TransitionCallbacks::new().on_any(move |hook, _, status| {
        println!("{:>6}ms  {:<10} {}", started.elapsed().as_millis(), hook, status);
        Ok(())
    });

    let (scheduler, mut fired) = TokioScheduler::new();
    let child = sample_child();
    let mut engine = TransitionEngine::mount(props, scheduler, callbacks)?;
    print_frame(&engine, &child, started);

    let mut toggles = args.toggles.into_iter();
    let mut toggling = true;
    let mut ticker = tokio::time::interval(Duration::from_millis(args.interval_ms.max(1)));
    ticker.tick().await;

    loop {
        tokio::select! {
            Some(key) = fired.recv() => {
                if key.instance == engine.id() {
                    engine.handle_timer(key.token)?;
                    print_frame(&engine, &child, started);
                }
            }
            _ = ticker.tick(), if toggling => {
                match toggles.next() {
                    Some(toggle) => {
                        engine.set_visible(toggle == Toggle::Show)?;
                        print_frame(&engine, &child, started);
                    }
                    None => toggling = false,
                }
            }
        }

        if !toggling && !engine.is_animating() {
            break;
        }
    }

    tracing::info!(status = %engine.status(), "Simulation settled");
    Ok(())
}

fn print_frame<S: semantic_transition::timer::Scheduler>(
    engine: &TransitionEngine<S>,
    child: &Element,
    started: Instant,
) {
    let markup = engine
        .render(child)
        .map(|element| element.to_markup())
        .unwrap_or_else(|| "(nothing)".to_string());
    println!(
        "{:>6}ms  {:<10} {}",
        started.elapsed().as_millis(),
        engine.status(),
        markup
    );
}

fn print_classes(config: &Config, args: &ClassesArgs) {
    let props = args.overrides.props(config, true);
    let child = sample_child();
    for status in TransitionStatus::ALL {
        let state = TransitionState {
            status,
            animating: !status.is_resting(),
            ..TransitionState::default()
        };
        let markup = render_child(&child, &props, &state)
            .map(|element| element.to_markup())
            .unwrap_or_else(|| "(nothing)".to_string());
        println!("{:<10} {}", status, markup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_split_durations() {
        assert_eq!(parse_duration("250").unwrap(), TransitionDuration::Millis(250));
        assert_eq!(parse_duration("300/150").unwrap(), TransitionDuration::split(300, 150));
        assert_eq!(
            parse_duration("soon").unwrap(),
            TransitionDuration::Text("soon".to_string())
        );
        assert!(parse_duration("x/1").is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_config() {
        let cli = Cli::parse_from([
            "semantic-transition",
            "classes",
            "--animation",
            "pulse",
            "--duration",
            "100",
            "--unmount-on-hide",
        ]);
        let Command::Classes(args) = cli.command else {
            panic!("Expected classes command");
        };
        let props = args.overrides.props(&Config::default(), true);
        assert_eq!(props.animation, "pulse");
        assert_eq!(props.duration, TransitionDuration::Millis(100));
        assert!(props.unmount_on_hide);
        assert!(props.mount_on_show);
    }

    #[test]
    fn simulate_requires_toggles() {
        assert!(Cli::try_parse_from(["semantic-transition", "simulate"]).is_err());
        let cli = Cli::try_parse_from(["semantic-transition", "simulate", "--toggles", "show,hide"])
            .unwrap();
        let Command::Simulate(args) = cli.command else {
            panic!("Expected simulate command");
        };
        assert_eq!(args.toggles, vec![Toggle::Show, Toggle::Hide]);
    }
}
