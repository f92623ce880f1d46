use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use termpong::ai::Opponent;
use termpong::config::{self, Config, SpeedPreset};
use termpong::debug;
use termpong::game_modes::{run_game_local, run_game_vs_ai};

/// Options taken from the command line; they override the config file
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    two_player: bool,
    debug: bool,
    help: bool,
    ball_speed: Option<SpeedPreset>,
    paddle_speed: Option<SpeedPreset>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("termpong");

    let options = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage(program);
            std::process::exit(1);
        }
    };
    if options.help {
        print_usage(program);
        return Ok(());
    }

    // Logging must be up before the config loader can warn about anything
    debug::init(options.debug)?;

    let mut config = config::load_config()?;
    apply_options(&mut config, &options);
    config.validate()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = match config.ai.opponent {
        Opponent::Computer => run_game_vs_ai(&mut terminal, &config),
        Opponent::Human => run_game_local(&mut terminal, &config),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result? {
        Some(winner) => println!("{} is the winner!", winner.display_name()),
        None => tracing::info!("Quit before the match was decided"),
    }
    Ok(())
}

/// Parse command line arguments (program name already stripped)
fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--two-player" | "-2" => options.two_player = true,
            "--debug" | "-d" => options.debug = true,
            "--help" | "-h" => options.help = true,
            "--ball-speed" => options.ball_speed = Some(speed_value(arg, iter.next())?),
            "--paddle-speed" => options.paddle_speed = Some(speed_value(arg, iter.next())?),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn speed_value(flag: &str, value: Option<&String>) -> Result<SpeedPreset, String> {
    value
        .ok_or_else(|| format!("{} requires slow, medium or fast", flag))?
        .parse()
}

fn apply_options(config: &mut Config, options: &CliOptions) {
    if options.two_player {
        config.ai.opponent = Opponent::Human;
    }
    if let Some(preset) = options.ball_speed {
        config.physics.ball_speed = preset.value();
    }
    if let Some(preset) = options.paddle_speed {
        config.physics.paddle_speed = preset.value();
    }
}

fn print_usage(program: &str) {
    println!("termpong - Pong in the terminal");
    println!();
    println!("Usage:");
    println!(
        "  {}                              # Play against the computer",
        program
    );
    println!(
        "  {} --two-player                 # Two players, one keyboard",
        program
    );
    println!();
    println!("Options:");
    println!("  --ball-speed <slow|medium|fast>    Starting ball speed (default medium)");
    println!("  --paddle-speed <slow|medium|fast>  Starting paddle speed (default slow)");
    println!(
        "  --debug                            Log to {}",
        debug::LOG_FILE_PATH
    );
    println!("  --help                             Show this message");
    println!();
    println!(
        "Settings are read from {}",
        config::get_config_path().display()
    );
}
