use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use bevy::log::LogPlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use jetpack_items::prelude::*;
use jetpack_items::{game_plugin, gift_item_plugin, item_plugin, time_item_plugin};

/// Headless run of the item spawners where every item gets caught
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML file overriding the default item configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for item placement and type draws
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate at 60 FPS
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// Game level, 0-based
    #[arg(long, default_value_t = 0)]
    level: u32,
}

/// Stands in for collision detection by catching every live item
fn catch_everything(
    items: Query<Entity, Or<(With<Pooled<TimeItem>>, With<Pooled<GiftItem>>)>>,
    mut caught_events: MessageWriter<ItemCaughtEvent>,
) {
    for item_entity in items.iter() {
        caught_events.write(ItemCaughtEvent { item_entity });
    }
}

fn build_app(config: ItemConfig, seed: Option<u64>, level: u32) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)))
        .insert_resource(config);

    if let Some(seed) = seed {
        app.insert_resource(ItemRng::seeded(seed));
    }

    app.add_plugins((item_plugin, game_plugin, time_item_plugin, gift_item_plugin))
        .add_systems(
            Update,
            catch_everything
                .after(GameSet::Spawning)
                .before(GameSet::Collection)
                .run_if(in_state(GameState::InGame)),
        );

    app.world_mut().resource_mut::<Game>().level = level;
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app
}

/// Run until the frame budget is spent or the clock runs out
fn run(app: &mut App, frames: u32) {
    app.finish();
    app.cleanup();

    for _ in 0..frames {
        app.update();
        if *app.world().resource::<State<GameState>>().get() == GameState::GameOver {
            break;
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ItemConfig::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => ItemConfig::default(),
    };

    let mut app = build_app(config, args.seed, args.level);
    app.add_plugins(LogPlugin::default());
    run(&mut app, args.frames);

    let game = app.world().resource::<Game>();
    info!(
        "Session finished: score {}, {:.1}s left on the clock",
        game.score, game.time_left
    );
    ExitCode::SUCCESS
}
