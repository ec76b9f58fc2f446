use work_timer::{TimerCollection, TimerConfig, TimerError, format_hms, parse_initial, parse_relative};

#[test]
fn work_session_scenario() {
    let mut timers = TimerCollection::default();
    timers.add("work", parse_initial("00:00:00").unwrap()).unwrap();
    timers.toggle("work").unwrap();
    for _ in 0..65 {
        timers.tick();
    }
    assert_eq!(timers.display("work").as_deref(), Some("00:01:05"));

    let elapsed = timers.add_time("work", parse_relative("1h").unwrap()).unwrap();
    assert_eq!(elapsed, 3665);
    assert_eq!(format_hms(elapsed), "01:01:05");
}

#[test]
fn switching_focus_keeps_paused_time() {
    let mut timers = TimerCollection::default();
    timers.add("work", 0).unwrap();
    timers.add("email", parse_initial("10:00").unwrap()).unwrap();

    timers.toggle("work").unwrap();
    for _ in 0..30 {
        timers.tick();
    }
    timers.toggle("email").unwrap();
    for _ in 0..15 {
        timers.tick();
    }

    assert_eq!(timers.get("work").unwrap().elapsed_secs, 30);
    assert_eq!(timers.get("email").unwrap().elapsed_secs, 615);
    assert_eq!(timers.running_name(), Some("email"));

    timers.toggle("email").unwrap();
    timers.tick();
    assert_eq!(timers.get("email").unwrap().elapsed_secs, 615);
    assert_eq!(timers.running_name(), None);
}

#[test]
fn collection_never_exceeds_cap() {
    let mut timers = TimerCollection::new(TimerConfig { max_timers: 3 });
    let mut rejected = 0;
    for i in 0..8 {
        match timers.add(&format!("t{i}"), 0) {
            Ok(()) => {}
            Err(TimerError::Capacity { max }) => {
                assert_eq!(max, 3);
                rejected += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
        assert!(timers.len() <= 3);
    }
    assert_eq!(rejected, 5);
}

#[test]
fn reset_after_long_run_displays_zero() {
    let mut timers = TimerCollection::default();
    timers.add("deep work", parse_initial("12:34:56").unwrap()).unwrap();
    timers.toggle("deep work").unwrap();
    timers.tick();
    timers.reset("deep work").unwrap();
    assert_eq!(timers.display("deep work").as_deref(), Some("00:00:00"));
    assert_eq!(timers.running_name(), None);
}
