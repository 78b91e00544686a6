use std::time::Duration;

use typist::chance::RandomChance;
use typist::clock::mock::RecordingClock;
use typist::{Profile, Typist};

fn sample_delays(wpm: i64, keystrokes: usize, seed: u64) -> Vec<f64> {
    let clock = RecordingClock::new();
    let mut typist = Typist::with_parts(
        Profile::new(wpm, 1.0).unwrap(),
        clock.clone(),
        RandomChance::seeded(seed),
    );
    let mut out = Vec::new();
    for _ in 0..keystrokes {
        typist.keystroke(&mut out, 'x').unwrap();
    }
    assert_eq!(out.len(), keystrokes);
    clock.delays().iter().map(Duration::as_secs_f64).collect()
}

fn mean_and_std_dev(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

#[test]
fn mean_delay_matches_wpm() {
    // 60 WPM: 300 keystrokes a minute, 200ms apart on average.
    let delays = sample_delays(60, 20_000, 1);
    let (mean, _) = mean_and_std_dev(&delays);
    assert!((mean - 0.2).abs() < 0.2 * 0.01, "mean {mean}");
}

#[test]
fn spread_is_a_third_of_the_mean() {
    let delays = sample_delays(60, 20_000, 2);
    let (_, std_dev) = mean_and_std_dev(&delays);
    let expected = 0.2 / 3.0;
    assert!(
        (std_dev - expected).abs() < expected * 0.05,
        "std dev {std_dev}, expected {expected}"
    );
}

#[test]
fn roughly_normal_shape() {
    // About 68% of a normal distribution lies within one sigma of the mean.
    let delays = sample_delays(120, 20_000, 3);
    let mean = 0.1;
    let sigma = mean / 3.0;
    let within = delays
        .iter()
        .filter(|d| (*d - mean).abs() <= sigma)
        .count() as f64
        / delays.len() as f64;
    assert!((within - 0.6827).abs() < 0.02, "share within one sigma {within}");
}

#[test]
fn delays_are_never_negative_and_vary() {
    let delays = sample_delays(75, 5_000, 4);
    assert!(delays.iter().all(|d| *d >= 0.0));
    let first = delays[0];
    assert!(delays.iter().any(|d| *d != first));
}

#[test]
fn faster_typists_pause_less() {
    let (slow, _) = mean_and_std_dev(&sample_delays(30, 5_000, 5));
    let (fast, _) = mean_and_std_dev(&sample_delays(90, 5_000, 5));
    assert!(fast < slow);
    assert!((slow / fast - 3.0).abs() < 0.1, "ratio {}", slow / fast);
}

#[test]
fn one_wait_per_emitted_character() {
    let clock = RecordingClock::new();
    let mut typist = Typist::with_parts(
        Profile::new(75, 0.5).unwrap(),
        clock.clone(),
        RandomChance::seeded(6),
    );
    let mut out = Vec::new();
    typist.type_line(&mut out, "hello, world").unwrap();

    let emitted = String::from_utf8(out).unwrap().chars().count();
    assert_eq!(clock.delays().len(), emitted);
}
