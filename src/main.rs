use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{execute, terminal};
use std::io;
use std::time::Duration;
use tictactoe_minimax::config::GameConfig;
use tictactoe_minimax::game::Game;
use tictactoe_minimax::selfplay::{run_selfplay, Matchup, SelfPlayConfig};
use tictactoe_minimax::ui::{self, selection};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug shows search statistics; redirect stderr to keep the board clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::load_or_default();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen, EnableMouseCapture)?;

    let res = run(&config);

    execute!(io::stdout(), DisableMouseCapture, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run(config: &GameConfig) -> anyhow::Result<()> {
    let mut options = selection::MODES.to_vec();
    options.push("Self-play statistics");

    loop {
        ui::show_menu("Tic Tac Toe", &options)?;
        let choice = match ui::read_choice(options.len())? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        if choice == selection::MODES.len() {
            run_stats(config)?;
            continue;
        }

        let (p1, p2) = selection::create_player_controllers(choice, config)?;
        let mut game =
            Game::new().with_think_delay(Duration::from_millis(config.ai.think_delay_ms));
        game.play(p1.as_ref(), p2.as_ref())?;
    }
}

fn run_stats(config: &GameConfig) -> anyhow::Result<()> {
    ui::show_menu("Self-Play", &[])?;
    print!("Running {} games per matchup...\r\n\r\n", config.selfplay.num_games);

    for matchup in Matchup::ALL {
        let stats = run_selfplay(&SelfPlayConfig {
            num_games: config.selfplay.num_games,
            matchup,
            searcher: config.searcher(),
            seed: config.selfplay.seed,
        })?;
        let json = serde_json::to_string_pretty(&stats)?;
        print!("{}\r\n", json.replace('\n', "\r\n"));
    }

    print!("\r\nPress any key to return to menu...\r\n");
    ui::wait_for_key()
}
