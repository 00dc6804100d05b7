use super::*;

/// Random placement over every cell except the top-left one.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self { seed, placement }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Vec<usize> {
        use rand::prelude::*;

        let total_cells = usize::from(config.total_cells());
        let requested = usize::from(config.requested_mines());
        // index 0 never holds a mine
        let candidates = total_cells.saturating_sub(1);
        if candidates == 0 {
            return Vec::new();
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        match self.placement {
            Placement::Independent => (0..requested)
                .map(|_| rng.random_range(1..total_cells))
                .collect(),
            Placement::Distinct => {
                if requested > candidates {
                    log::warn!(
                        "Minefield already full, requested {} but only fits {}",
                        requested,
                        candidates
                    );
                }
                let amount = requested.min(candidates);
                rand::seq::index::sample(&mut rng, candidates, amount)
                    .into_iter()
                    .map(|index| index + 1)
                    .collect()
            }
        }
    }
}
