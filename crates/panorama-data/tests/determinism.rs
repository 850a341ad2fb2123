use panorama_core::SampleOptions;
use panorama_data::{
    cluster_points, device_share, monthly_sales, price_history, regional_summary, team_performance,
};

#[test]
fn sales_replays_identically() {
    let opts = SampleOptions::default();
    assert_eq!(monthly_sales(&opts, 12), monthly_sales(&opts, 12));
}

#[test]
fn regional_replays_identically() {
    let opts = SampleOptions::default();
    assert_eq!(regional_summary(&opts), regional_summary(&opts));
}

#[test]
fn performance_replays_identically() {
    let opts = SampleOptions::default();
    assert_eq!(team_performance(&opts), team_performance(&opts));
}

#[test]
fn price_history_replays_identically() {
    let opts = SampleOptions::default();
    assert_eq!(price_history(&opts, 90), price_history(&opts, 90));
}

#[test]
fn scatter_replays_identically() {
    let opts = SampleOptions::default();
    assert_eq!(cluster_points(&opts, 150), cluster_points(&opts, 150));
}

#[test]
fn share_replays_identically() {
    let opts = SampleOptions::default();
    assert_eq!(device_share(&opts), device_share(&opts));
}

#[test]
fn seeds_separate_runs() {
    let a = SampleOptions::with_seed(42);
    let b = SampleOptions::with_seed(43);
    assert_ne!(monthly_sales(&a, 12), monthly_sales(&b, 12));
    assert_ne!(regional_summary(&a), regional_summary(&b));
    assert_ne!(team_performance(&a), team_performance(&b));
    assert_ne!(price_history(&a, 30), price_history(&b, 30));
    assert_ne!(cluster_points(&a, 30), cluster_points(&b, 30));
}

#[test]
fn datasets_draw_from_independent_streams() {
    let opts = SampleOptions::default();

    // Generating one dataset must not shift another dataset's stream.
    let baseline = regional_summary(&opts);
    let _ = monthly_sales(&opts, 24);
    let _ = price_history(&opts, 90);
    assert_eq!(baseline, regional_summary(&opts));
}
