//! walk_sim.rs - walk a player through a small built-in level and print
//! where the physics puts them every tic.
//!
//! USAGE:
//! ```bash
//! RUST_LOG=debug cargo run --bin walk_sim -- --tics 60 --thrust 32
//! cargo run --bin walk_sim -- --config physics.json --turn 200
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use glam::{Vec3, vec3};
use std::{fs, path::PathBuf};

use planewalk::{
    sim::{PhysicsConfig, Player, TicCmd, TicRunner},
    world::{Level, Plane},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Number of tics to simulate
    #[arg(long, default_value_t = 40)]
    tics: u32,

    /// Forward thrust per tic (64 = one map unit)
    #[arg(long, default_value_t = 32, allow_hyphen_values = true)]
    thrust: i8,

    /// Heading change per tic (32768 = full turn)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    turn: i16,

    /// JSON file overriding physics constants
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let cfg: PhysicsConfig = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => PhysicsConfig::default(),
    };

    let level = demo_level();
    if let Err(e) = level.check() {
        bail!("built-in level is malformed: {e}");
    }
    println!(
        "level `{}`: {} planes, {} walls",
        level.name,
        level.planes().len(),
        level.walls().count()
    );

    let mut sim = TicRunner::new(cfg);
    let me = sim.spawn_player(&level, Player::new(&cfg, vec3(2.0, 2.0, 0.0), None));

    for _ in 0..opts.tics {
        sim.submit(
            me,
            TicCmd {
                forward: opts.thrust,
                rotation: opts.turn,
                ..TicCmd::default()
            },
        );
        let (_, outcome) = *sim
            .run_tic(&level)
            .first()
            .context("no player simulated")?;
        let p = sim.player(me).context("player vanished")?;
        println!(
            "tic {:3}  pos ({:6.2}, {:6.2}, {:5.2})  plane {:>4}  air {:2}  {:?}",
            sim.tic(),
            p.pos.x,
            p.pos.y,
            p.pos.z,
            p.plane.map_or("void".to_string(), |id| id.to_string()),
            p.air_time,
            outcome
        );
    }
    Ok(())
}

/// Room, three steps up, a landing, a pit and a wall, all along +x.
fn demo_level() -> Level {
    let mut level = Level::new("demo");

    let strip = |x0: f32, x1: f32, z: f32| {
        Plane::new(vec![
            vec3(x0, 0.0, z),
            vec3(x1, 0.0, z),
            vec3(x1, 4.0, z),
            vec3(x0, 4.0, z),
        ])
    };

    level.add_plane(strip(0.0, 8.0, 0.0));
    for (i, z) in [0.25, 0.5, 0.75].into_iter().enumerate() {
        let x = 8.0 + i as f32;
        level.add_plane(strip(x, x + 1.0, z));
    }
    level.add_plane(strip(11.0, 15.0, 0.75));
    level.add_plane(strip(15.0, 19.0, 0.0));

    // far wall of the pit
    let wall: Vec<Vec3> = vec![
        vec3(19.0, 0.0, 0.0),
        vec3(19.0, 4.0, 0.0),
        vec3(19.0, 4.0, 3.0),
        vec3(19.0, 0.0, 3.0),
    ];
    level.add_plane(Plane::new(wall).impassable(true));

    // the steps meet the room and each other at different heights, so
    // vertex sharing alone would miss them
    for a in 0..5 {
        level.link(a, a + 1);
    }
    level.link_shared_edges();
    level.detect_walls();
    level
}
