//! Xiuxian demo client binary.
//!
//! Composition root: reads the environment, sets up logging, loads content
//! from the data directory, and runs one battle at a fixed frame rate with
//! the player casting its first skill whenever it is ready.
//!
//! ```bash
//! XIUXIAN_SEED=7 RUST_LOG=debug cargo run -p xiuxian-client
//! ```

mod config;
mod logging;

use anyhow::{Context, Result};
use xiuxian_content::ContentFactory;
use xiuxian_core::{CombatState, GameEvent};
use xiuxian_runtime::{Session, Topic};

use crate::config::ClientConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::info!(data_dir = %config.data_dir.display(), "Starting xiuxian client");

    let factory = ContentFactory::new(&config.data_dir);
    let mut game_config = factory.load_config().context("loading game config")?;
    if config.seed.is_some() {
        game_config.battle.seed = config.seed;
    }
    let definitions = factory.load_attributes().context("loading attributes")?;
    let experience = factory.load_experience().context("loading experience table")?;
    let setup = factory.load_battle().context("loading battle setup")?;

    let mut session = Session::new(game_config, definitions)
        .context("building session")?
        .with_experience_table(experience);
    subscribe_printers(&mut session);
    session.flush()?;

    let mut participants = setup.build();
    let stats = session.character_stats();
    for player in participants.iter_mut().filter(|p| p.is_player) {
        player.stats = stats;
    }
    session.start_battle(participants)?;
    let dt = config.frame_time();
    let mut frames = 0;
    while frames < config.max_frames && !session.battle().is_result_confirmed() {
        if session.battle().state() == CombatState::Fighting {
            session.cast_player_skill(0)?;
        }
        session.update(dt)?;
        frames += 1;
    }

    if !session.battle().is_result_confirmed() {
        tracing::warn!(frames, "frame cap reached before the battle finished");
    }
    let character = session.character();
    println!(
        "Level {} ({} / {} exp), items: {:?}",
        character.level(),
        character.level_engine().current_experience(),
        character.level_engine().experience_to_next_level(),
        session.inventory().iter().collect::<Vec<_>>()
    );
    tracing::info!(frames, "Client shutdown complete");
    Ok(())
}

fn subscribe_printers(session: &mut Session) {
    session.subscribe(Topic::Battle, |event| match event {
        GameEvent::BattleStarted => println!("The battle begins!"),
        GameEvent::SkillCast {
            caster,
            skill,
            targets,
            damage,
        } => {
            let targets: Vec<_> = targets.iter().map(|t| t.as_str()).collect();
            println!("{caster} uses {skill} on {} for {damage:.1}", targets.join(", "));
        }
        GameEvent::BattleEnded { victory: true } => println!("Victory!"),
        GameEvent::BattleEnded { victory: false } => println!("Defeat..."),
        GameEvent::BattleReward {
            experience, items, ..
        } => println!("Reward: {experience} exp, {items:?}"),
        _ => {}
    });
    session.subscribe(Topic::Progression, |event| {
        if let GameEvent::LevelUp { level, changed } = event {
            println!("Breakthrough! Reached level {level}");
            for (key, value) in changed {
                println!("  {key}: {value}");
            }
        }
    });
    session.subscribe(Topic::Attribute, |event| {
        if let GameEvent::SystemInitialized { attributes } = event {
            println!("{attributes} attributes loaded");
        }
    });
}
