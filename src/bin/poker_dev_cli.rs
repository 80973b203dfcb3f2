// src/bin/poker_dev_cli.rs
//
// Прогон сессии ботами без UI: загружаем GameConfig, сажаем ботов,
// печатаем события стола.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use poker_core::domain::card::Card;
use poker_core::domain::chips::Chips;
use poker_core::domain::player::Player;
use poker_core::domain::PlayerId;
use poker_core::engine::{DecisionProvider, GameObserver, PlayerAction, RandomSource, RoundSnapshot};
use poker_core::eval::HandRank;
use poker_core::infra::{CheckCallBot, DeterministicRng, JsonLinesStore, RandomBot, SystemRng};
use poker_core::{EngineError, GameConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotKind {
    /// Только чек/колл.
    CheckCall,
    /// Случайные решения (seed из конфига).
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "poker_dev_cli")]
#[command(about = "Headless poker session runner")]
struct Cli {
    #[arg(short, long)]
    #[arg(help = "JSON-конфиг сессии (по умолчанию – 6-max NL холдем 5/10)")]
    config: Option<PathBuf>,

    #[arg(long)]
    #[arg(help = "Лимит раздач (перекрывает max_hands из конфига)")]
    hands: Option<u32>,

    #[arg(long)]
    #[arg(help = "RNG seed (перекрывает seed из конфига)")]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "random")]
    bot: BotKind,

    #[arg(long)]
    #[arg(help = "Каталог для chips.json / hands.jsonl")]
    store: Option<PathBuf>,

    #[arg(long, requires = "store")]
    #[arg(help = "Продолжить со стеками из хранилища")]
    resume: bool,
}

/// Печатает события стола в stdout.
#[derive(Default)]
struct PrintObserver {
    names: BTreeMap<PlayerId, String>,
}

impl PrintObserver {
    fn name(&self, id: PlayerId) -> String {
        self.names.get(&id).cloned().unwrap_or_else(|| format!("#{id}"))
    }
}

impl GameObserver for PrintObserver {
    fn on_hand_started(&mut self, snapshot: &RoundSnapshot) {
        self.names = snapshot
            .seats
            .iter()
            .map(|s| (s.player_id, s.name.clone()))
            .collect();
        println!();
        println!("=== Новая раздача, кнопка: место {} ===", snapshot.button);
        for s in &snapshot.seats {
            let mark = if s.sitting_out { " (sit-out)" } else { "" };
            println!("  [{}] {:<8} {:>6}{}", s.seat, s.name, s.stack, mark);
        }
    }

    fn on_phase_started(&mut self, phase: &str) {
        println!("-- {phase} --");
    }

    fn on_player_action(&mut self, action: &PlayerAction) {
        println!(
            "  {:<8} {:?} {}",
            self.name(action.player_id),
            action.action,
            action.amount
        );
    }

    fn on_community_dealt(&mut self, cards: &[Card]) {
        let shown: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
        println!("  Борд: {}", shown.join(" "));
    }

    fn on_showdown(&mut self, ranks: &BTreeMap<PlayerId, HandRank>) {
        for (id, rank) in ranks {
            println!("  {:<8} {}", self.name(*id), rank);
        }
    }

    fn on_hand_ended(&mut self, winnings: &BTreeMap<PlayerId, Chips>) {
        for (id, amount) in winnings {
            println!("  {} выигрывает {}", self.name(*id), amount);
        }
    }

    fn on_player_timeout(&mut self, player: PlayerId) {
        println!("  {} не успел ответить", self.name(player));
    }

    fn on_session_ended(&mut self, winner: Option<&Player>) {
        println!();
        match winner {
            Some(p) => println!("Победитель сессии: {} со стеком {}", p.name, p.stack),
            None => println!("Сессия остановлена по лимиту раздач"),
        }
    }
}

fn run<R: RandomSource>(cfg: &GameConfig, cli: &Cli, rng: R) -> Result<(), EngineError> {
    let decisions: Box<dyn DecisionProvider> = match cli.bot {
        BotKind::CheckCall => Box::new(CheckCallBot),
        BotKind::Random => Box::new(RandomBot::new(cfg.seed.unwrap_or(0))),
    };

    let mut engine = cfg.build_engine(decisions, rng)?;
    if let Some(dir) = &cli.store {
        match JsonLinesStore::open(dir) {
            Ok(store) => {
                engine = engine.with_store(Box::new(store));
                if cli.resume {
                    let restored = engine.restore_stacks();
                    info!("Восстановлено стеков: {restored}");
                }
            }
            Err(e) => error!("Хранилище {} недоступно: {e}", dir.display()),
        }
    }
    engine.register_observer(Box::new(PrintObserver::default()));

    info!(
        "Старт: {} , мест {}, фишек в игре {}",
        engine.variant().name(),
        engine.table().seat_count(),
        engine.chips_in_play()
    );
    let outcome = engine.run_session(cfg.max_hands)?;
    info!(
        "Сыграно раздач: {}, фишек в игре {}",
        outcome.hands_played,
        engine.chips_in_play()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => match GameConfig::from_path(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    if cli.hands.is_some() {
        cfg.max_hands = cli.hands;
    }
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }

    let result = match cfg.seed {
        Some(seed) => run(&cfg, &cli, DeterministicRng::from_seed(seed)),
        None => run(&cfg, &cli, SystemRng),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Сессия прервана: {e}");
            ExitCode::FAILURE
        }
    }
}
