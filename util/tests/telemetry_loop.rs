use std::f64::consts::PI;
use std::time::{Duration, Instant};

use grabbag_util::angle::{normalize_angle, shortest_angular_distance};
use grabbag_util::config::LoopConfig;
use grabbag_util::pack::{append_f16, append_i32, Packer};
use grabbag_util::rate::RateLimiter;

/// Heading (deg*100, 2 bytes), turn to target (rad*1000, 2 bytes), tick (4 bytes)
const FRAME_LEN: usize = 8;

fn decode(frame: &[u8; FRAME_LEN]) -> (i16, i16, i32) {
    (
        i16::from_be_bytes([frame[0], frame[1]]),
        i16::from_be_bytes([frame[2], frame[3]]),
        i32::from_be_bytes([frame[4], frame[5], frame[6], frame[7]]),
    )
}

#[test]
fn control_loop_packs_frames_at_rate() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("loop.toml");
    LoopConfig::new(40).store(&path)?;

    let cfg = LoopConfig::load(&path)?;
    let limiter = RateLimiter::from_config(&cfg)?;
    assert_eq!(limiter.period(), Duration::from_millis(25));

    let target = PI / 2.0;
    let began = Instant::now();
    let mut heading = 3.0 * PI / 2.0;
    for tick in 0..4 {
        let start = Instant::now();

        let turn = shortest_angular_distance(heading, target);
        let mut frame = [0u8; FRAME_LEN];
        let mut cursor = 0;
        append_f16(&mut frame, normalize_angle(heading).to_degrees() as f32, 100.0, &mut cursor);
        append_f16(&mut frame, turn as f32, 1000.0, &mut cursor);
        append_i32(&mut frame, tick, &mut cursor);
        assert_eq!(cursor, FRAME_LEN);

        let (deg, turn_mrad, seen_tick) = decode(&frame);
        assert!((deg as f64 / 100.0 - normalize_angle(heading).to_degrees()).abs() < 0.011);
        assert!((turn_mrad as f64 / 1000.0 - turn).abs() < 0.0011);
        assert_eq!(seen_tick, tick);

        heading += turn / 2.0;

        let elapsed = limiter.wait(start);
        assert!(elapsed > 0.02, "tick {tick} returned after {elapsed}s");
    }
    // four ticks of 25ms minus compensation each
    assert!(began.elapsed() >= Duration::from_millis(88));
    Ok(())
}

#[test]
fn packer_refuses_to_overrun_frame() -> anyhow::Result<()> {
    let mut frame = [0u8; 5];
    let mut packer = Packer::from_buffer(&mut frame[..]);
    packer.put_i32(1)?;
    let err = packer.put_f16(2.0, 10.0).unwrap_err();
    assert_eq!(err.needed, 2);
    assert_eq!(err.available, 1);
    assert_eq!(packer.position(), 4);
    assert_eq!(frame, [0, 0, 0, 1, 0]);
    Ok(())
}

#[test]
fn missing_config_reports_path() {
    let err = LoopConfig::load("/nonexistent/loop.toml").unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/loop.toml"));
}
