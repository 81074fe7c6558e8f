//! Tests for lowest-weight cell selection and count-weighted collapse

#[cfg(test)]
mod tests {
    use wavetile::algorithm::observer::{observe, Observation};
    use wavetile::algorithm::pattern_table::PatternTable;
    use wavetile::algorithm::rng::Xorshift32;
    use wavetile::algorithm::wave::Wave;
    use wavetile::spatial::exemplar::Exemplar;

    // Tests a single-pattern wave reports Finished without collapsing
    // Verified by returning Restart instead of Finished when already decided
    #[test]
    fn test_single_pattern_wave_is_finished() {
        let exemplar = Exemplar::new(vec![0, 0, 0, 0], 2, 2).expect("valid exemplar");
        let table = PatternTable::extract(&exemplar);
        let mut wave = Wave::new(3, 3, table.len());
        let mut rng = Xorshift32::new(1).expect("non-zero seed");
        assert_eq!(observe(&mut wave, &table, &mut rng), Observation::Finished);
    }

    // Tests a cell with zero allowed patterns forces a restart
    // Verified by skipping the zero-popcount check entirely
    #[test]
    fn test_contradicted_cell_forces_restart() {
        let exemplar = Exemplar::new(vec![0, 1, 1, 0], 2, 2).expect("valid exemplar");
        let table = PatternTable::extract(&exemplar);
        let mut wave = Wave::new(2, 2, table.len());
        for p in 0..table.len() {
            wave.clear(0, p);
        }
        let mut rng = Xorshift32::new(4).expect("non-zero seed");
        assert_eq!(observe(&mut wave, &table, &mut rng), Observation::Restart);
    }

    // Tests collapsing a cell leaves exactly one allowed pattern
    // Verified by clearing zero patterns after a collapse
    #[test]
    fn test_collapse_decides_exactly_one_pattern() {
        let exemplar = Exemplar::new(vec![0, 1, 1, 0], 2, 2).expect("valid exemplar");
        let table = PatternTable::extract(&exemplar);
        let mut wave = Wave::new(2, 2, table.len());
        let mut rng = Xorshift32::new(13).expect("non-zero seed");
        let Observation::Collapsed(index) = observe(&mut wave, &table, &mut rng) else {
            panic!("expected a collapse on a multi-pattern wave");
        };
        assert_eq!(wave.popcount_allowed(index), 1);
    }
}
