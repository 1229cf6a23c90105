use rand::Rng;

use crate::simulation::entity::Entity;
use crate::simulation::params::SimulationParameters;

/// Fresh batch of `count` random entities with ids `0..count`
pub fn initialize_entities<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Entity> {
    (0..count as u32).map(|id| Entity::random(id, rng)).collect()
}

/// Next snapshot from the current one.
///
/// Every entity reads the same pre-step `entities` slice; the new set is
/// built separately and handed back whole.
pub fn step_simulation<R: Rng + ?Sized>(
    entities: &[Entity],
    params: &SimulationParameters,
    rng: &mut R,
) -> Vec<Entity> {
    entities
        .iter()
        .map(|entity| entity.update(entities, params, rng))
        .collect()
}
