use crate::config::ENTANGLEMENT_SIMILARITY;
use crate::simulation::entity::{Entity, Traits};

/// Mean over the four traits of `1 - |a - b|`, in [0, 1]
pub fn similarity(a: &Entity, b: &Entity) -> f32 {
    trait_similarity(&a.traits, &b.traits)
}

pub fn trait_similarity(a: &Traits, b: &Traits) -> f32 {
    let total: f32 = a
        .as_array()
        .iter()
        .zip(b.as_array().iter())
        .map(|(x, y)| 1.0 - (x - y).abs())
        .sum();
    total / Traits::COUNT as f32
}

/// Euclidean distance between entity positions
pub fn distance(a: &Entity, b: &Entity) -> f32 {
    a.position.distance(b.position)
}

/// Whether a pair is similar enough to count (and render) as entangled
pub fn is_entangled(a: &Entity, b: &Entity) -> bool {
    similarity(a, b) > ENTANGLEMENT_SIMILARITY
}

/// Visit every unordered pair `(i, j)` with `i < j`
pub fn for_each_pair<'a, F>(entities: &'a [Entity], mut f: F)
where
    F: FnMut(&'a Entity, &'a Entity),
{
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            f(a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::entity::Point;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn at(id: u32, x: f32, y: f32, traits: Traits) -> Entity {
        Entity::new(id, Point::new(x, y), Point::default(), traits, 0.0)
    }

    #[test]
    fn test_similarity_symmetric_and_reflexive() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let entities: Vec<Entity> = (0..16).map(|id| Entity::random(id, &mut rng)).collect();

        for a in &entities {
            assert!((similarity(a, a) - 1.0).abs() < 1e-6);
            for b in &entities {
                assert_eq!(similarity(a, b), similarity(b, a));
                let s = similarity(a, b);
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }

    #[test]
    fn test_similarity_of_opposites_is_zero() {
        let a = at(0, 0.0, 0.0, Traits::new(0.0, 0.0, 0.0, 0.0));
        let b = at(1, 0.0, 0.0, Traits::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(similarity(&a, &b), 0.0);
        assert!(!is_entangled(&a, &b));
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = at(0, 0.0, 0.0, Traits::new(0.5, 0.5, 0.5, 0.5));
        let b = at(1, 3.0, 4.0, Traits::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(distance(&a, &b), 5.0);
        assert!(is_entangled(&a, &b));
    }

    #[test]
    fn test_for_each_pair_visits_unordered_pairs() {
        let entities: Vec<Entity> = (0..5)
            .map(|id| at(id, 0.0, 0.0, Traits::new(0.5, 0.5, 0.5, 0.5)))
            .collect();
        let mut pairs = Vec::new();
        for_each_pair(&entities, |a, b| pairs.push((a.id, b.id)));
        assert_eq!(pairs.len(), 10);
        assert!(pairs.iter().all(|(a, b)| a < b));
    }
}
