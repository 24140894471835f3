//! Driver Vigilance Demo
//!
//! Feeds a scripted synthetic landmark stream through one session with a
//! synthetic 30fps clock and prints each frame outcome as a JSON line.
//! Stands in for the camera + landmark model host.

use face_geometry::{FaceIndices, Point};
use monitor::{DriverMonitor, MonitorConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME_MS: u64 = 33;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("=== Driver Vigilance Demo v{} ===", env!("CARGO_PKG_VERSION"));

    let mut monitor = DriverMonitor::new(MonitorConfig::default())?;
    let mut now: u64 = 0;

    // Script: calm warm-up, a long blink, a yawn, a sustained head turn,
    // and a stretch with no face in frame.
    let segments: Vec<(&str, u64, Option<Vec<Point>>)> = vec![
        ("calm warm-up", 3000, Some(synthetic_frame(0.30, 0.05, 0.5))),
        ("long blink", 600, Some(synthetic_frame(0.10, 0.05, 0.5))),
        ("calm", 2000, Some(synthetic_frame(0.30, 0.05, 0.5))),
        ("yawn", 900, Some(synthetic_frame(0.30, 0.14, 0.5))),
        ("calm", 2000, Some(synthetic_frame(0.30, 0.05, 0.5))),
        ("head turn", 1400, Some(synthetic_frame(0.30, 0.05, 0.85))),
        ("face lost", 700, None),
        ("calm", 1000, Some(synthetic_frame(0.30, 0.05, 0.5))),
    ];

    for (label, duration_ms, landmarks) in segments {
        info!(label, duration_ms, "segment start");
        let end = now + duration_ms;
        while now < end {
            let outcome = monitor.process_frame(landmarks.as_deref(), now);
            if !outcome.events.is_empty() || !outcome.face_detected {
                println!("{}", serde_json::to_string(&outcome)?);
            }
            now += FRAME_MS;
        }
    }

    let metrics = monitor.metrics();
    info!(
        blinks = metrics.blink_count,
        yawns = metrics.yawn_count,
        avg_blink_ms = metrics.avg_blink_ms,
        score = metrics.alertness_score,
        "session summary"
    );
    println!("{}", serde_json::to_string(&metrics)?);

    Ok(())
}

/// Frame with the default MediaPipe indices populated so the extractor
/// produces the requested raw EAR, MAR, and nose-x.
fn synthetic_frame(ear: f64, mar: f64, nose_x: f64) -> Vec<Point> {
    let mut points = vec![Point::default(); 468];
    let idx = FaceIndices::default();

    let eye_gap = ear * 0.1;
    for eye in [&idx.left_eye, &idx.right_eye] {
        points[eye[0]] = Point::new(0.40, 0.50);
        points[eye[3]] = Point::new(0.50, 0.50);
        points[eye[1]] = Point::new(0.43, 0.50 - eye_gap / 2.0);
        points[eye[5]] = Point::new(0.43, 0.50 + eye_gap / 2.0);
        points[eye[2]] = Point::new(0.47, 0.50 - eye_gap / 2.0);
        points[eye[4]] = Point::new(0.47, 0.50 + eye_gap / 2.0);
    }

    let mouth_gap = mar * 0.2;
    points[idx.mouth_left] = Point::new(0.40, 0.70);
    points[idx.mouth_right] = Point::new(0.60, 0.70);
    points[idx.upper_lip] = Point::new(0.50, 0.70 - mouth_gap / 2.0);
    points[idx.lower_lip] = Point::new(0.50, 0.70 + mouth_gap / 2.0);

    points[idx.nose_tip] = Point::new(nose_x, 0.55);
    points
}
