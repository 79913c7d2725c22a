//! Fighter strafe system.
//!
//! Applies the latched strafe intent to the fighter's position, clamped to
//! the world edges. The fighter never leaves its fixed altitude.

use hecs::World;

use starswarm_core::components::{Fighter, StrafeIntent};
use starswarm_core::constants::*;
use starswarm_core::enums::StrafeDir;
use starswarm_core::types::Position;

pub fn run(world: &mut World) {
    let limit = WORLD_WIDTH / 2.0 - FIGHTER_EDGE_MARGIN;

    for (_entity, (_fighter, pos, intent)) in
        world.query_mut::<(&Fighter, &mut Position, &StrafeIntent)>()
    {
        match intent.dir {
            StrafeDir::Left => pos.x -= STRAFE_SPEED * DT,
            StrafeDir::Right => pos.x += STRAFE_SPEED * DT,
            StrafeDir::Center => {}
        }
        pos.x = pos.x.clamp(-limit, limit);
    }
}
