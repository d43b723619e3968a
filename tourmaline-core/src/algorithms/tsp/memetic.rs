#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/memetic_test.rs"]
mod memetic_test;

use super::*;
use crate::utils::compare_floats;
use rand::seq::SliceRandom;

/// Parameters of the memetic search.
#[derive(Clone, Debug)]
pub struct MemeticConfig {
    /// Amount of individuals kept in every generation.
    pub population_size: usize,
    /// Amount of generations to run.
    pub generations: usize,
    /// Probability to apply a swap mutation to an offspring.
    pub mutation_probability: Float,
    /// Amount of best individuals carried over unchanged.
    pub elite_size: usize,
    /// Amount of individuals sampled by one selection tournament.
    pub tournament_size: usize,
    /// Bounds full 2-opt improvement sweeps applied to the generation best.
    pub two_opt_sweeps: usize,
}

impl Default for MemeticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            mutation_probability: 0.1,
            elite_size: 5,
            tournament_size: 3,
            two_opt_sweeps: 50,
        }
    }
}

type Individual = Vec<usize>;

/// A genetic search over visiting orders hybridized with 2-opt local refinement
/// of the generation best (a memetic algorithm).
///
/// The first point of every tour is pinned: crossover and mutation only touch the
/// suffix. Fitness is 1 / (distance + 1), so shorter tours always win and a tour
/// with an unreachable leg gets zero fitness which effectively removes it from
/// selection. The search is stochastic: repeated runs on the same input may return
/// different tours of statistically improving quality, so tests assert distance
/// bounds instead of exact sequences.
pub struct MemeticSolver<'a> {
    matrix: &'a DistanceMatrix,
    kind: TourKind,
    config: MemeticConfig,
    random: Arc<dyn Random>,
}

impl<'a> MemeticSolver<'a> {
    /// Creates a new instance of `MemeticSolver`.
    pub fn new(matrix: &'a DistanceMatrix, kind: TourKind, config: MemeticConfig, random: Arc<dyn Random>) -> Self {
        assert!(config.population_size > 0);
        Self { matrix, kind, config, random }
    }

    /// Runs the evolution and returns the best tour ever observed together with
    /// its distance. When every individual of every generation had an unreachable
    /// leg, the identity order with infinite distance is returned.
    pub fn solve(&self) -> TourSolution {
        let n = self.matrix.size();
        if n < 2 {
            return TourSolution { tour: (0..n).collect(), distance: 0. };
        }

        let mut population = self.create_initial_population(n);

        let mut best_tour: Option<Individual> = None;
        let mut best_distance = Float::INFINITY;

        for _ in 0..self.config.generations {
            let fitness: Vec<Float> = population.iter().map(|individual| self.fitness(individual)).collect();

            // best ever memory, independent of population drift
            if let Some(best_idx) = (0..population.len()).max_by(|&a, &b| compare_floats(fitness[a], fitness[b])) {
                let candidate = tour_distance(self.matrix, &population[best_idx], self.kind);
                if candidate < best_distance {
                    best_distance = candidate;
                    best_tour = Some(population[best_idx].clone());
                }
            }

            let mut next_generation = self.select_elites(&population, &fitness);

            while next_generation.len() < self.config.population_size {
                let first = self.tournament(&population, &fitness);
                let second = self.tournament(&population, &fitness);
                let (left, right) = self.crossover(first, second);

                next_generation.push(self.mutate(left));
                if next_generation.len() < self.config.population_size {
                    next_generation.push(self.mutate(right));
                }
            }

            // local refinement of the freshly formed generation best
            let refined = two_opt(self.matrix, self.kind, next_generation[0].clone(), self.config.two_opt_sweeps);
            next_generation[0] = refined;

            next_generation.truncate(self.config.population_size);
            population = next_generation;
        }

        let mut tour = best_tour.unwrap_or_else(|| (0..n).collect());
        if self.kind == TourKind::Closed {
            tour.push(tour[0]);
        }

        TourSolution { tour, distance: best_distance }
    }

    fn create_initial_population(&self, n: usize) -> Vec<Individual> {
        (0..self.config.population_size)
            .map(|_| {
                let mut tour: Individual = (0..n).collect();
                tour[1..].shuffle(&mut self.random.get_rng());
                tour
            })
            .collect()
    }

    fn fitness(&self, individual: &[usize]) -> Float {
        let distance = tour_distance(self.matrix, individual, self.kind);
        if distance.is_finite() {
            1. / (distance + 1.)
        } else {
            0.
        }
    }

    fn select_elites(&self, population: &[Individual], fitness: &[Float]) -> Vec<Individual> {
        let mut ranked: Vec<usize> = (0..population.len()).collect();
        ranked.sort_by(|&a, &b| compare_floats(fitness[b], fitness[a]));

        ranked.into_iter().take(self.config.elite_size).map(|idx| population[idx].clone()).collect()
    }

    /// Tournament selection: samples a small random subset and keeps its fittest member.
    fn tournament<'b>(&self, population: &'b [Individual], fitness: &[Float]) -> &'b [usize] {
        let size = self.config.tournament_size.min(population.len());

        (0..size)
            .map(|_| self.random.uniform_int(0, population.len() as i32 - 1) as usize)
            .max_by(|&a, &b| compare_floats(fitness[a], fitness[b]))
            .map(|idx| population[idx].as_slice())
            .expect("tournament requires a non empty population")
    }

    /// Order crossover (OX) over the non fixed suffix: a segment of one parent is
    /// copied verbatim, the rest is filled in the order of the other parent while
    /// skipping already placed points. Children are valid permutations with the
    /// start untouched; both segment role assignments are produced.
    fn crossover(&self, first: &[usize], second: &[usize]) -> (Individual, Individual) {
        if first.len() < 3 {
            return (first.to_vec(), second.to_vec());
        }

        let suffix_len = first.len() - 1;
        let cut_start = self.random.uniform_int(0, suffix_len as i32 - 1) as usize;
        let cut_end = self.random.uniform_int(cut_start as i32 + 1, suffix_len as i32) as usize;

        (self.offspring(first, second, cut_start, cut_end), self.offspring(second, first, cut_start, cut_end))
    }

    fn offspring(&self, donor: &[usize], filler: &[usize], cut_start: usize, cut_end: usize) -> Individual {
        let segment = &donor[1 + cut_start..1 + cut_end];
        let remaining: Vec<usize> = filler[1..].iter().copied().filter(|point| !segment.contains(point)).collect();

        let mut child = Vec::with_capacity(donor.len());
        child.push(donor[0]);
        child.extend_from_slice(&remaining[..cut_start]);
        child.extend_from_slice(segment);
        child.extend_from_slice(&remaining[cut_start..]);

        child
    }

    /// Swaps two random non start positions with the configured probability.
    fn mutate(&self, mut individual: Individual) -> Individual {
        if individual.len() > 3 && self.random.is_hit(self.config.mutation_probability) {
            let first = self.random.uniform_int(1, individual.len() as i32 - 1) as usize;
            let mut second = first;
            while second == first {
                second = self.random.uniform_int(1, individual.len() as i32 - 1) as usize;
            }
            individual.swap(first, second);
        }

        individual
    }
}
