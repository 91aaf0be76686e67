use perya_game::{
    COLOR_COUNT, Color, Distribution, PayoutRule, VariantCatalog, outcome_counts, simulate_batch,
    summarize,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const SAMPLE_SIZE: usize = 100_000;
const FREQ_TOLERANCE: f64 = 0.02;

#[allow(clippy::cast_precision_loss)]
fn observed_frequencies(counts: &[usize; COLOR_COUNT], total: usize) -> [f64; COLOR_COUNT] {
    let denom = total as f64;
    let mut freqs = [0.0; COLOR_COUNT];
    for (freq, count) in freqs.iter_mut().zip(counts) {
        *freq = *count as f64 / denom;
    }
    freqs
}

#[test]
fn uniform_sampling_tracks_weights() {
    let mut rng = SmallRng::seed_from_u64(0xACED);
    let dist = Distribution::uniform();
    let rule = PayoutRule::new(Color::Red, 5.0);
    let results = simulate_batch(&mut rng, &dist, &rule, 1.0, SAMPLE_SIZE).unwrap();

    let freqs = observed_frequencies(&outcome_counts(&results), SAMPLE_SIZE);
    for (i, freq) in freqs.iter().enumerate() {
        assert!(
            (freq - 1.0 / 6.0).abs() <= FREQ_TOLERANCE,
            "face {i} drifted: observed {freq:.4}"
        );
    }
}

#[test]
fn skewed_sampling_tracks_weights() {
    let weights = [0.13, 0.174, 0.174, 0.174, 0.174, 0.174];
    let mut rng = SmallRng::seed_from_u64(0xBEEF);
    let dist = Distribution::new(weights).unwrap();
    let rule = PayoutRule::new(Color::Red, 1.9);
    let results = simulate_batch(&mut rng, &dist, &rule, 1.0, SAMPLE_SIZE).unwrap();

    let freqs = observed_frequencies(&outcome_counts(&results), SAMPLE_SIZE);
    for (i, (freq, weight)) in freqs.iter().zip(weights).enumerate() {
        assert!(
            (freq - weight).abs() <= FREQ_TOLERANCE,
            "face {i} drifted: observed {freq:.4}, expected {weight:.4}"
        );
    }
}

#[test]
fn fair_game_mean_profit_converges_to_zero() {
    let mut rng = SmallRng::seed_from_u64(1337);
    let dist = Distribution::uniform();
    let rule = PayoutRule::new(Color::Red, 5.0);
    let results = simulate_batch(&mut rng, &dist, &rule, 1.0, 200_000).unwrap();

    let profits: Vec<f64> = results.iter().map(|r| r.profit).collect();
    let summary = summarize(&profits, 1.0).unwrap();
    assert!(
        summary.mean.abs() <= 0.02,
        "fair mean drifted: {:.4}",
        summary.mean
    );
    assert!(summary.house_edge.abs() <= 0.02);
}

#[test]
fn house_classic_mean_converges_to_closed_form() {
    let catalog = VariantCatalog::builtin();
    let variant = catalog.get_by_id("house-classic").unwrap();
    let mut rng = SmallRng::seed_from_u64(0xD1CE);
    let results = simulate_batch(
        &mut rng,
        &variant.distribution,
        &variant.payout,
        1.0,
        SAMPLE_SIZE,
    )
    .unwrap();

    let profits: Vec<f64> = results.iter().map(|r| r.profit).collect();
    let summary = summarize(&profits, 1.0).unwrap();
    // 0.13 * 1.9 - 0.87 = -0.623
    assert!(
        (summary.mean + 0.623).abs() <= 0.02,
        "house-classic mean drifted: {:.4}",
        summary.mean
    );
}

#[test]
fn win_rate_is_consistent_with_positive_profit_count() {
    let mut rng = SmallRng::seed_from_u64(77);
    let dist = Distribution::uniform();
    let rule = PayoutRule::new(Color::Green, 5.0);
    let plays = 9_973;
    let results = simulate_batch(&mut rng, &dist, &rule, 1.0, plays).unwrap();
    assert_eq!(results.len(), plays);

    let profits: Vec<f64> = results.iter().map(|r| r.profit).collect();
    let summary = summarize(&profits, 1.0).unwrap();
    let wins = results.iter().filter(|r| r.is_win()).count();
    #[allow(clippy::cast_precision_loss)]
    let delta = summary.win_rate * plays as f64 - wins as f64;
    assert!(delta.abs() < 1e-6);
}

#[test]
fn almost_impossible_never_wins() {
    let catalog = VariantCatalog::builtin();
    let variant = catalog.get_by_id("almost-impossible").unwrap();
    let mut rng = SmallRng::seed_from_u64(31_337);
    let results = simulate_batch(
        &mut rng,
        &variant.distribution,
        &variant.payout,
        1.0,
        50_000,
    )
    .unwrap();

    let profits: Vec<f64> = results.iter().map(|r| r.profit).collect();
    let summary = summarize(&profits, 1.0).unwrap();
    assert!(summary.win_rate.abs() < f64::EPSILON);
    assert!((summary.house_edge - 1.0).abs() < f64::EPSILON);
}
