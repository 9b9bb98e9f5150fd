// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn window(min: u64, max: u64) -> TimerConfig {
    TimerConfig {
        min_delay: Duration::from_secs(min),
        max_delay: Duration::from_secs(max),
    }
}

#[test]
fn first_poll_arms_without_firing() {
    let mut timer = EventTimer::new(&window(60, 120));
    let mut rng = StdRng::seed_from_u64(1);

    assert!(!timer.poll(Duration::ZERO, &mut rng));

    let next = timer.next_at().unwrap();
    assert!(next >= Duration::from_secs(60) && next <= Duration::from_secs(120));
}

#[test]
fn fires_at_deadline_and_rearms() {
    let mut timer = EventTimer::new(&window(60, 60));
    let mut rng = StdRng::seed_from_u64(1);
    timer.poll(Duration::ZERO, &mut rng);

    assert!(!timer.poll(Duration::from_secs(59), &mut rng));
    assert!(timer.poll(Duration::from_secs(60), &mut rng));
    assert_eq!(timer.next_at(), Some(Duration::from_secs(120)));
}

#[test]
fn reset_disarms() {
    let mut timer = EventTimer::new(&window(10, 20));
    let mut rng = StdRng::seed_from_u64(1);
    timer.poll(Duration::ZERO, &mut rng);

    timer.reset();
    assert_eq!(timer.next_at(), None);
    assert!(!timer.poll(Duration::from_secs(500), &mut rng));
    assert!(timer.next_at().unwrap() >= Duration::from_secs(510));
}

#[test]
fn delays_stay_inside_window() {
    let mut timer = EventTimer::new(&window(600, 1200));
    let mut rng = StdRng::seed_from_u64(99);
    let mut now = Duration::ZERO;
    timer.poll(now, &mut rng);

    for _ in 0..200 {
        let armed_at = now;
        now = timer.next_at().unwrap();
        let delay = now - armed_at;
        assert!(delay >= Duration::from_secs(600) && delay <= Duration::from_secs(1200));
        assert!(timer.poll(now, &mut rng));
    }
}
