use hecs::{Entity, World};
use log::debug;

use super::systems::{self, MoveOutcome};
use super::{PhysicsConfig, Player, TicCmd};
use crate::world::Level;

pub const SIM_FPS: u32 = 35;

/// Owns every simulated player and drives them one tic at a time.
///
/// Each player entity carries a `Player` and the `TicCmd` queued for the
/// next tic.  Players only share the (read-only) level.
pub struct TicRunner {
    world: World,
    cfg: PhysicsConfig,
    tic: u64,
}

impl Default for TicRunner {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl TicRunner {
    pub fn new(cfg: PhysicsConfig) -> Self {
        Self {
            world: World::new(),
            cfg,
            tic: 0,
        }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn config(&self) -> &PhysicsConfig {
        &self.cfg
    }

    /// Number of tics run so far.
    #[inline]
    pub fn tic(&self) -> u64 {
        self.tic
    }

    /// Spawn a player, standing them on whatever is under `player.pos` when
    /// no plane was assigned yet.
    pub fn spawn_player(&mut self, level: &Level, mut player: Player) -> Entity {
        if player.plane.is_none() && !systems::place_player(level, &mut player) {
            debug!("spawned {} in the void", player.pos);
        }
        self.world.spawn((player, TicCmd::default()))
    }

    /// Queue the command for `player`'s next tic.  Returns `false` for an
    /// unknown entity.
    pub fn submit(&mut self, player: Entity, cmd: TicCmd) -> bool {
        match self.world.get::<&mut TicCmd>(player) {
            Ok(mut slot) => {
                *slot = cmd;
                true
            }
            Err(_) => false,
        }
    }

    /// Snapshot of one player's state.
    pub fn player(&self, e: Entity) -> Option<Player> {
        self.world.get::<&Player>(e).ok().map(|p| (*p).clone())
    }

    /// Run one fixed-rate tic for every player.
    pub fn run_tic(&mut self, level: &Level) -> Vec<(Entity, MoveOutcome)> {
        let cfg = self.cfg;
        let outcomes = self
            .world
            .query_mut::<(&mut Player, &mut TicCmd)>()
            .into_iter()
            .map(|(e, (player, cmd))| (e, systems::player_tic(level, player, cmd, &cfg)))
            .collect();
        self.tic += 1;
        outcomes
    }
}
