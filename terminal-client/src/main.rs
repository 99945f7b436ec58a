mod config;
mod game_loop;
mod render;

use std::io::BufRead;

use clap::Parser;
use common::games::SessionRng;
use common::{debug_log, log, logger};
use tokio::sync::mpsc;

use config::{get_config_manager, Validate, CONFIG_FILE};
use game_loop::{run_game_loop, TerminalSession};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a one-move-lookahead computer")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Seed for the computer's random choices.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    thinking_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    // Plain thread: a blocked stdin read must not hold up runtime shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(&args.config).get_config()?;

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose_logging);

    let mut settings = config.game;
    if let Some(delay) = args.thinking_delay_ms {
        settings.thinking_delay_ms = delay;
    }
    settings.validate()?;

    let rng = SessionRng::from_seed_or_random(args.seed);
    log!("Starting game, seed {}, thinking delay {} ms", rng.seed(), settings.thinking_delay_ms);

    let mut session = TerminalSession::new(rng, std::io::stdout());
    let input = spawn_stdin_reader();
    let score = run_game_loop(&mut session, input, settings.thinking_delay()).await?;
    debug_log!("Last game ended in phase {:?}", session.state().phase());

    log!(
        "Session finished: {} won, {} lost, {} drawn",
        score.human_wins,
        score.opponent_wins,
        score.draws
    );

    Ok(())
}
