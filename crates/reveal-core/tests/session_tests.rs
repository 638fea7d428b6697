use reveal_core::*;

/// Sink that records applied frames and can pretend its layers are missing.
#[derive(Default)]
struct RecordingSink {
    ready: bool,
    applied: Vec<Frame>,
}

impl PresentationSink for RecordingSink {
    fn apply(&mut self, frame: &Frame) -> Result<(), EngineError> {
        if !self.ready {
            return Err(EngineError::NotReady("mask"));
        }
        self.applied.push(*frame);
        Ok(())
    }
}

/// Host whose size changes after every query, like a window being resized.
struct ShrinkingHost {
    widths: std::cell::Cell<f64>,
}

impl ViewportHost for ShrinkingHost {
    fn geometry(&self) -> ViewportGeometry {
        let w = self.widths.get();
        self.widths.set(w / 2.0);
        ViewportGeometry::new(w, 100.0)
    }
}

fn ready_sink() -> RecordingSink {
    RecordingSink {
        ready: true,
        ..Default::default()
    }
}

#[test]
fn move_pushes_frame_to_sink() {
    let mut session = RevealSession::new(EffectConfig::classic(), ready_sink());
    let host = ViewportGeometry::new(800.0, 600.0);
    let d = session.pointer_moved(PointerSample::new(600.0, 150.0), &host);
    assert_eq!(d, Delivery::Applied);
    assert_eq!(session.sink().applied.len(), 1);
    assert_eq!(session.phase(), Phase::Tracking);
    assert_eq!(session.sink().applied[0], *session.engine().current());
}

#[test]
fn not_ready_sink_drops_frames_without_corrupting_state() {
    let mut session = RevealSession::new(EffectConfig::enhanced(), RecordingSink::default());
    let host = ViewportGeometry::new(800.0, 600.0);

    for _ in 0..3 {
        assert_eq!(
            session.pointer_moved(PointerSample::new(100.0, 100.0), &host),
            Delivery::Dropped
        );
    }
    assert_eq!(session.pointer_left(), Delivery::Dropped);
    assert_eq!(session.pointer_left(), Delivery::Dropped);
    assert!(session.sink().applied.is_empty());
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(
        *session.engine().current(),
        Frame::reset(session.engine().config())
    );

    // Layers show up; the next event goes through normally.
    session.sink_mut().ready = true;
    assert_eq!(
        session.pointer_moved(PointerSample::new(600.0, 150.0), &host),
        Delivery::Applied
    );
    let applied = &session.sink().applied;
    assert_eq!(applied.len(), 1);
    assert!((applied[0].transform.rotate_y_deg - 5.0).abs() < 1e-9);
}

#[test]
fn refresh_resends_current_frame() {
    let mut session = RevealSession::new(EffectConfig::classic(), RecordingSink::default());
    session.sink_mut().ready = true;
    assert_eq!(session.refresh(), Delivery::Applied);
    assert!(session.sink().applied[0].mask.is_disabled());
    assert!(session.sink().applied[0].transform.is_neutral_pose());
}

#[test]
fn geometry_is_queried_on_every_event() {
    let mut session = RevealSession::new(EffectConfig::classic(), ready_sink());
    let host = ShrinkingHost {
        widths: std::cell::Cell::new(400.0),
    };
    let p = PointerSample::new(100.0, 50.0);
    session.pointer_moved(p, &host); // width 400 -> nx = -0.5
    session.pointer_moved(p, &host); // width 200 -> nx = 0
    session.pointer_moved(p, &host); // width 100 -> nx = 1
    let ry: Vec<f64> = session
        .sink()
        .applied
        .iter()
        .map(|f| f.transform.rotate_y_deg)
        .collect();
    assert_eq!(ry, vec![-5.0, 0.0, 10.0]);
}

#[test]
fn leave_pushes_disabled_mask() {
    let mut session = RevealSession::new(EffectConfig::classic(), ready_sink());
    let host = ViewportGeometry::new(10.0, 10.0);
    session.pointer_moved(PointerSample::new(1.0, 9.0), &host);
    session.pointer_left();
    let last = session.sink().applied.last().unwrap();
    assert!(last.mask.is_disabled());
    assert!(last.transform.is_neutral_pose());
}
