use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn, Level};

use trilha::{
    Board, CardKind, GameResult, MemoryStore, PlayerColor, PlayerSetup, Resolution, TrailConfig,
    TurnAdvance, TurnEngine,
};

#[derive(Parser, Debug)]
#[command(name = "trilha")]
#[command(about = "Plays a game of Trilha do Equilibrio in the terminal")]
#[command(long_about = "Plays a game of Trilha do Equilibrio in the terminal.

Each player rolls the engine's dice in turn; every card drawn is printed and
acknowledged automatically. The game runs until someone reaches the finish,
at most one player is left with stress cards, or --max-turns is reached.")]
struct Args {
    /// Player as NAME:COLOR (color by name or hex). Repeat per seat.
    #[arg(long = "player", value_parser = parse_player)]
    players: Vec<PlayerSetup>,

    /// Dice seed for a reproducible game
    #[arg(long, env = "TRILHA_SEED")]
    seed: Option<u64>,

    /// TOML file with game rules
    #[arg(long, env = "TRILHA_CONFIG")]
    config: Option<PathBuf>,

    /// Stop after this many rolls
    #[arg(long, default_value = "500")]
    max_turns: usize,

    /// Let every eligible player share a stress card on collaboration cards
    #[arg(long)]
    share: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TRILHA_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn parse_player(value: &str) -> Result<PlayerSetup, String> {
    let (name, color) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:COLOR, got '{}'", value))?;
    let color = PlayerColor::parse(color).ok_or_else(|| format!("unknown color '{}'", color))?;
    Ok(PlayerSetup::new(name, color))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level: Level = args
        .log_level
        .parse()
        .map_err(|_| anyhow!("invalid log level '{}'", args.log_level))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = match &args.config {
        Some(path) => TrailConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TrailConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let setups = if args.players.is_empty() {
        (0..config.min_players)
            .map(|seat| PlayerSetup::new(format!("Jogador {}", seat + 1), PlayerColor::for_seat(seat)))
            .collect()
    } else {
        args.players.clone()
    };

    let store = MemoryStore::with_board(&Board::standard());
    let mut engine = TurnEngine::start(config, &setups, store)?;

    let mut rolls = 0;
    while !engine.is_finished() && rolls < args.max_turns {
        let player = engine.current_player();
        let name = engine.roster()[player].name.clone();
        let (_, outcome) = engine.roll_dice(player)?;
        rolls += 1;
        println!("{} rolou {}: {} -> {}", name, outcome.die, outcome.from, outcome.to);

        let Some(effect) = outcome.effect else {
            continue;
        };
        println!("  [{}] {}", effect.kind.title(), effect.kind.message());
        if let Some(text) = &effect.text {
            println!("  {}", text);
        }

        if effect.kind == CardKind::Collaboration && args.share {
            let donors: Vec<_> = engine
                .collaboration()
                .map(|window| window.eligible_donors(engine.roster()).collect())
                .unwrap_or_default();
            for donor in donors {
                match engine.share_stress_card(donor, player) {
                    Ok(transfer) if transfer.overflowed => {
                        println!("  {} doou uma carta de estresse (perdida, limite atingido)", engine.roster()[donor].name);
                    }
                    Ok(_) => println!("  {} doou uma carta de estresse", engine.roster()[donor].name),
                    Err(err) => warn!(%donor, error = %err, "share refused"),
                }
            }
        }

        let ack = engine.acknowledge()?;
        if let Resolution::StressLost { eliminated: true, .. } = ack.resolution {
            println!("  {} foi eliminado", name);
        }
        if let TurnAdvance::Next(next) = ack.turn {
            info!(next = %next, "turn passed");
        }
    }

    println!();
    match &engine.session().result {
        Some(GameResult::Winner { player, .. }) => {
            println!("Vencedor: {}", engine.roster()[*player].name);
        }
        Some(GameResult::NoWinner) => println!("Sem vencedor"),
        None => println!("Jogo interrompido depois de {} jogadas", rolls),
    }
    for player in engine.roster().iter() {
        println!(
            "  {:<12} {:<9} casa {:>2}  atividade {:>2}  estresse {:>2}",
            player.name,
            player.color.name(),
            player.position,
            player.activity_cards,
            player.stress_cards,
        );
    }

    Ok(())
}
