#![forbid(unsafe_code)]

//! Facade smoke tests: everything reachable through `sortviz::prelude`.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use sortviz::prelude::*;

#[test]
fn generated_traces_sort_random_sequences() {
    let mut rng = SmallRng::seed_from_u64(0xba5e);
    for algorithm in Algorithm::ALL {
        for ordering in [Ordering::Ascending, Ordering::Descending] {
            let input = Sequence::random(25, 10..=109, &mut rng).unwrap();
            let trace = sortviz::generate(algorithm, &input, ordering);
            let out = trace.replay(input.values());
            assert!(ordering.is_sorted(&out), "{algorithm} {ordering}");
        }
    }
}

#[test]
fn names_parse_through_facade_errors() {
    let algorithm: Algorithm = "Insertion".parse().unwrap();
    assert_eq!(algorithm, Algorithm::Insertion);
    let err: Error = "sideways".parse::<Ordering>().unwrap_err().into();
    assert!(err.to_string().contains("sideways"));
}

#[test]
fn session_runs_shuffle_then_sort() -> Result<()> {
    let config = VisualizerConfig {
        size: 15,
        speed_ms: 1,
        shuffle_step_ms: 0,
        ..VisualizerConfig::default()
    };
    let mut session = Session::with_seed(config, BarChartRenderer::new(), 99)?;

    session.shuffle()?;
    session.wait();
    session.start_sort()?;
    let report = session.wait().expect("sort report");

    assert!(report.is_completed());
    assert_eq!(session.status(), Activity::Idle);
    let chart = session.renderer().expect("renderer returned").chart();
    assert_eq!(
        chart.highlighted(sortviz::Highlight::Sorted).len(),
        chart.len()
    );
    Ok(())
}

#[test]
fn shuffle_is_reachable_from_facade() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut live = Sequence::new(vec![10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
    let mut renderer = sortviz::RecordingRenderer::new();
    let signal = sortviz::Unattended;

    let report = sortviz::shuffle(&mut live, &mut renderer, &mut rng, &signal);

    assert!(report.is_completed());
    let mut values = live.values().to_vec();
    values.sort_by(f64::total_cmp);
    assert_eq!(values, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    assert!(!renderer.is_finalized());
}
