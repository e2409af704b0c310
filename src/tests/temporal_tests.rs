use log::debug;

use crate::implementations::temporal::{
    millis_to_steps,
    rewrite_nfr_to_temporal,
    rewrite_with_step,
    seconds_to_steps,
};
use crate::tests::setup;

#[test]
fn test_latency_template() {
    setup();

    let f = rewrite_nfr_to_temporal("Mode change latency should be under 100 ms.");
    debug!("{}\n{}", f.title, f.tla);
    assert_eq!(f.title, "Bounded response within 100 ms (~2 steps)");
    assert!(f.tla.contains("LatencyBound == [] (lat_req => lat_t <= 2)"));
    assert!(f.tla.contains("THEOREM Spec => LatencyBound"));
    assert_eq!(f.assumptions, vec!["Assume ~50 ms per step; set event/goal predicates."]);

    let f = rewrite_nfr_to_temporal("Recovery within 2 s after a fault");
    assert_eq!(f.title, "Bounded response within 2000 ms (~40 steps)");

    // partial steps round up, zero still needs one step
    assert!(rewrite_nfr_to_temporal("response within 120 ms").tla.contains("lat_t <= 3"));
    assert!(rewrite_nfr_to_temporal("response under 0 ms").tla.contains("lat_t <= 1"));
}

#[test]
fn test_availability_template() {
    setup();

    let f = rewrite_nfr_to_temporal("Availability >= 99.9% during cruise.");
    assert_eq!(f.title, "Availability \u{2265} 99.9% (long-run)");
    assert!(f.tla.contains("AvailBound == [] (1000 * upTicks >= 999 * ticks)"));
    assert_eq!(f.assumptions, vec!["Define Up predicate; long-run average."]);

    let f = rewrite_nfr_to_temporal("Uptime at least 95% per month");
    assert!(f.tla.contains("(1000 * upTicks >= 950 * ticks)"));
}

#[test]
fn test_throughput_template() {
    setup();

    let f = rewrite_nfr_to_temporal("throughput >= 50 per 10 s");
    assert_eq!(f.title, "Throughput \u{2265} 50 per 10s (~200 steps)");
    assert!(f.tla.contains("TPCheck == [] (win = 200 - 1 => count >= 50)"));
    assert_eq!(f.assumptions, vec!["Define Event action once per occurrence; tumbling window."]);
}

#[test]
fn test_mtbf_template() {
    setup();

    let f = rewrite_nfr_to_temporal("MTBF >= 300 s");
    assert_eq!(f.title, "MTBF \u{2265} 300s (~6000 steps between failures)");
    assert!(f.tla.contains("MTBFBound == [] (sinceFail >= 6000)"));

    let f = rewrite_nfr_to_temporal("Mean time between failures at least 60 seconds");
    assert!(f.tla.contains("sinceFail >= 1200"));
}

#[test]
fn test_first_template_wins() {
    let f = rewrite_nfr_to_temporal("Recovery latency under 100 ms and availability >= 99%");
    assert!(f.title.starts_with("Bounded response"));
}

#[test]
fn test_no_rewrite_placeholder() {
    setup();

    for sentence in [
        "The UI should feel snappy",
        "",
        "latency under 99999999999999999999999 ms",
    ] {
        let f = rewrite_nfr_to_temporal(sentence);
        assert_eq!(f.title, "No rewrite available");
        assert!(f.tla.starts_with("\\* Try wording like"));
        assert!(f.assumptions.is_empty());
    }
}

#[test]
fn test_custom_step_duration() {
    let f = rewrite_with_step("response within 100 ms", 10);
    assert!(f.tla.contains("lat_t <= 10"));
    assert_eq!(f.assumptions, vec!["Assume ~10 ms per step; set event/goal predicates."]);

    // a zero step is clamped instead of dividing by zero
    let f = rewrite_with_step("response within 100 ms", 0);
    assert!(f.tla.contains("lat_t <= 100"));
}

#[test]
fn test_step_conversions() {
    assert_eq!(millis_to_steps(100, 50), 2);
    assert_eq!(millis_to_steps(101, 50), 3);
    assert_eq!(millis_to_steps(0, 50), 1);

    assert_eq!(seconds_to_steps(10, 50), Some(200));
    assert_eq!(seconds_to_steps(1, 300), Some(3));
    assert_eq!(seconds_to_steps(1, 400), Some(3));
    assert_eq!(seconds_to_steps(0, 50), Some(1));
    assert_eq!(seconds_to_steps(u64::MAX, 50), None);
}

#[test]
fn test_oversized_second_bounds_fall_through() {
    setup();

    for sentence in [
        "MTBF >= 18446744073709551615 s",
        "throughput >= 50 per 18446744073709551615 s",
    ] {
        let f = rewrite_nfr_to_temporal(sentence);
        assert_eq!(f.title, "No rewrite available", "{}", sentence);
    }

    // a window too large for one template still lets a later one match
    let f = rewrite_nfr_to_temporal(
        "requests >= 5 per 18446744073709551615 s and MTBF >= 300 s"
    );
    assert_eq!(f.title, "MTBF \u{2265} 300s (~6000 steps between failures)");
}
