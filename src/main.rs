use std::error::Error;
use std::io::{self, BufRead};
use std::sync::mpsc::{channel, TryRecvError};
use std::thread;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use solo_chess::accounts::account_store::{AccountService, IdentityProvider};
use solo_chess::accounts::key_value_store::JsonFileStore;
use solo_chess::config::GameConfig;
use solo_chess::game_state::chess_types::Square;
use solo_chess::session::game_session::{ClickOutcome, GameSession};
use solo_chess::utils::algebraic::algebraic_to_square;
use solo_chess::utils::render_game_state::render_snapshot;

type Session = GameSession<AccountService<JsonFileStore>>;

const HELP: &str = "\
commands:
  click <sq>                      select a piece or a destination
  move <from> <to>                play a move in one step
  reset                           start a new game
  board | json                    show the position
  register <user> <pass> <pass>   create an account and log in
  login <user> <pass>             log in
  logout | whoami | stats
  help | quit";

enum Command {
    Click(Square),
    Move(Square, Square),
    Reset,
    Board,
    Json,
    Register(String, String, String),
    Login(String, String),
    Logout,
    WhoAmI,
    Stats,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let square = |s: &str| algebraic_to_square(s).map_err(|e| e.to_string());

    match parts.as_slice() {
        ["click", sq] => Ok(Command::Click(square(sq)?)),
        ["move", from, to] => Ok(Command::Move(square(from)?, square(to)?)),
        ["reset"] => Ok(Command::Reset),
        ["board"] => Ok(Command::Board),
        ["json"] => Ok(Command::Json),
        ["register", user, pass, confirm] => Ok(Command::Register(
            user.to_string(),
            pass.to_string(),
            confirm.to_string(),
        )),
        ["login", user, pass] => Ok(Command::Login(user.to_string(), pass.to_string())),
        ["logout"] => Ok(Command::Logout),
        ["whoami"] => Ok(Command::WhoAmI),
        ["stats"] => Ok(Command::Stats),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        _ => Err(format!("unknown command: {line} (try `help`)")),
    }
}

/// Returns `false` when the host should exit.
fn run_command(session: &mut Session, command: Command) -> bool {
    let now = Utc::now();

    match command {
        Command::Click(square) => {
            let outcome = session.click(square, now);
            report_outcome(session, &outcome);
        }
        Command::Move(from, to) => {
            let outcome = session.try_move(from, to, now);
            report_outcome(session, &outcome);
        }
        Command::Reset => {
            session.reset(now);
            println!("{}", render_snapshot(&session.snapshot()));
        }
        Command::Board => println!("{}", render_snapshot(&session.snapshot())),
        Command::Json => match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to encode snapshot: {e}"),
        },
        Command::Register(user, pass, confirm) => {
            match session.sink_mut().register(&user, &pass, &confirm, now) {
                Ok(identity) => println!("registered and logged in as {}", identity.display_name),
                Err(e) => eprintln!("{e}"),
            }
        }
        Command::Login(user, pass) => match session.sink_mut().login(&user, &pass, now) {
            Ok(identity) => println!("welcome, {}", identity.display_name),
            Err(e) => eprintln!("{e}"),
        },
        Command::Logout => match session.sink_mut().logout() {
            Ok(()) => println!("logged out"),
            Err(e) => eprintln!("{e}"),
        },
        Command::WhoAmI => match session.sink().current_user() {
            Some(identity) => println!("{}", identity.display_name),
            None => println!("not logged in"),
        },
        Command::Stats => match session.sink().current_stats() {
            Ok(Some(stats)) => println!(
                "trophies {}  wins {}  losses {}  draws {}",
                stats.trophies, stats.wins, stats.losses, stats.draws
            ),
            Ok(None) => println!("not logged in"),
            Err(e) => eprintln!("{e}"),
        },
        Command::Help => println!("{HELP}"),
        Command::Quit => return false,
    }

    true
}

fn report_outcome(session: &Session, outcome: &ClickOutcome) {
    match outcome {
        ClickOutcome::Ignored => println!("nothing to do"),
        ClickOutcome::Rejected => println!("illegal move"),
        ClickOutcome::Deselected | ClickOutcome::Selected(_) | ClickOutcome::Moved { .. } => {}
    }
    println!("{}", render_snapshot(&session.snapshot()));
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from_env()?;
    tracing::info!(
        budget_secs = config.time_budget_secs,
        store = %config.store_path.display(),
        "starting"
    );

    let store = JsonFileStore::open(&config.store_path)?;
    let mut accounts = AccountService::new(store, config.trophy_award);
    match accounts.restore_session()? {
        Some(identity) => println!("welcome back, {}", identity.display_name),
        None => println!("not logged in; results are recorded after `login` or `register`"),
    }

    let mut session = GameSession::new(accounts, config.time_budget_secs, Utc::now());
    println!("{}", render_snapshot(&session.snapshot()));
    println!("{HELP}");

    let (command_tx, command_rx) = channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let trimmed = line.trim().to_owned();
            if !trimmed.is_empty() && command_tx.send(trimmed).is_err() {
                break;
            }
        }
    });

    loop {
        // Commands and clock ticks share this one loop, so they never interleave.
        loop {
            match command_rx.try_recv() {
                Ok(line) => match parse_command(&line) {
                    Ok(command) => {
                        if !run_command(&mut session, command) {
                            return Ok(());
                        }
                    }
                    Err(message) => eprintln!("{message}"),
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        if let Some(status) = session.tick(Utc::now()) {
            println!("{}", status.status_text());
            println!("{}", render_snapshot(&session.snapshot()));
        }

        thread::sleep(config.tick_interval);
    }
}
