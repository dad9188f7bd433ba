use super::*;
use crate::core::VortexError;
use crate::domain::particle::ParticleRecord;
use crate::surface::{CompositeMode, DrawCommand, DrawTarget, Point, RecordingSurface, Rect};

fn options(count: i64, seed: u32) -> VortexOptions {
    VortexOptions::default().with_particle_count(count).with_seed(seed)
}

fn core_with(count: i64, seed: u32, width: u32, height: u32) -> VortexCore<RecordingSurface> {
    VortexCore::create(RecordingSurface::new(width, height), options(count, seed)).unwrap()
}

#[test]
fn create_rejects_zero_particles_without_state() {
    let err = VortexCore::create(RecordingSurface::new(64, 64), options(0, 1))
        .err()
        .unwrap();
    assert!(matches!(err, VortexError::InvalidParticleCount(0)));
}

#[test]
fn create_spawns_every_slot_inside_bounds() {
    let core = core_with(200, 3, 500, 500);
    assert_eq!(core.particle_count(), 200);
    assert_eq!(core.tick(), 0);

    let cy = core.viewport().center_y;
    for r in core.pool().records() {
        assert!(r.x >= 0.0 && r.x <= 500.0);
        assert!(r.y >= cy - 400.0 && r.y <= cy + 400.0);
        assert_eq!(r.life, 0);
        assert_eq!((r.vx, r.vy), (0.0, 0.0));
    }
}

#[test]
fn frame_draws_in_pipeline_order() {
    let mut core = core_with(5, 11, 100, 80);
    assert_eq!(core.frame(), FrameOutcome::Rendered);

    let commands = core.surface_mut().take_commands();
    let full = Rect::covering(&Viewport::new(100, 80));
    assert_eq!(commands[0], DrawCommand::Clear(full));
    assert_eq!(commands[1], DrawCommand::FillRect(full, Rgba::BLACK));

    let strokes = &commands[2..7];
    assert!(strokes
        .iter()
        .all(|c| matches!(c, DrawCommand::StrokeLine { .. })));

    // Two glow passes, then present.
    let tail = &commands[7..];
    assert_eq!(tail.len(), 14);
    assert_eq!(tail[3], DrawCommand::DrawSelfOnto(DrawTarget::Itself));
    assert_eq!(tail[8], DrawCommand::DrawSelfOnto(DrawTarget::Itself));
    assert_eq!(tail[11], DrawCommand::SetCompositeMode(CompositeMode::Lighter));
    assert_eq!(tail[12], DrawCommand::DrawSelfOnto(DrawTarget::Visible));
    assert_eq!(tail[13], DrawCommand::Restore);
    assert!(core.surface().is_balanced());
}

#[test]
fn stroke_width_and_alpha_follow_the_record() {
    let mut core = core_with(1, 5, 200, 200);
    let before = core.pool().record(0);
    core.frame();

    let stroke = core
        .surface()
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::StrokeLine { from, width, color, .. } => Some((*from, *width, *color)),
            _ => None,
        })
        .unwrap();
    assert_eq!(stroke.0, Point::new(before.x, before.y));
    assert_eq!(stroke.1, before.radius);
    assert_eq!(stroke.2.h, before.hue);
    // life 0 draws fully transparent
    assert_eq!(stroke.2.a, 0.0);
}

#[test]
fn zero_sized_surface_skips_without_ticking() {
    let mut core = core_with(10, 1, 0, 0);
    assert_eq!(core.frame(), FrameOutcome::Skipped);
    assert_eq!(core.tick(), 0);
    assert!(core.surface().commands().is_empty());

    core.surface_mut().set_dimensions(40, 40);
    core.resize(40, 40);
    assert_eq!(core.frame(), FrameOutcome::Rendered);
    assert_eq!(core.tick(), 1);
}

#[test]
fn destroy_is_idempotent_and_stops_frames() {
    let mut core = core_with(50, 2, 64, 64);
    core.frame();
    core.destroy();
    core.destroy();

    assert!(core.is_disposed());
    assert!(core.pool().is_released());
    assert_eq!(core.particles_len(), 0);

    let drawn = core.surface().commands().len();
    assert_eq!(core.frame(), FrameOutcome::Disposed);
    assert_eq!(core.surface().commands().len(), drawn);
    assert_eq!(core.tick(), 1);

    core.resize(10, 10);
    assert_eq!(core.viewport().width, 64.0);
}

#[test]
fn respawn_replaces_all_nine_fields() {
    let mut core = core_with(1, 9, 300, 300);
    let sentinel = ParticleRecord {
        x: 150.0,
        y: 150.0,
        vx: 7.0,
        vy: -7.0,
        life: 500,
        ttl: 10,
        speed: 0.0,
        radius: 999.0,
        hue: -1.0,
    };
    core.pool.write(0, &sentinel);
    core.frame();

    let fresh = core.pool().record(0);
    assert_eq!(fresh.life, 0);
    assert_eq!((fresh.vx, fresh.vy), (0.0, 0.0));
    assert!(fresh.ttl >= 50 && fresh.ttl < 200);
    assert!(fresh.speed >= 0.0 && fresh.speed <= 1.5);
    assert!(fresh.radius >= 1.0 && fresh.radius <= 3.0);
    assert!(fresh.hue >= 220.0 && fresh.hue <= 320.0);
    assert!(fresh.x >= 0.0 && fresh.x <= 300.0);
    let cy = core.viewport().center_y;
    assert!(fresh.y >= cy - 400.0 && fresh.y <= cy + 400.0);

    let stats = {
        core.enable_perf_metrics(true);
        core.pool.write(0, &sentinel);
        core.frame();
        core.get_perf_stats()
    };
    assert_eq!(stats.respawned_expired(), 1);
}

#[test]
fn out_of_bounds_respawns_in_the_same_pass() {
    let mut core = core_with(1, 4, 100, 100);
    core.enable_perf_metrics(true);
    core.pool.write(
        0,
        &ParticleRecord {
            x: 100.0,
            y: 50.0,
            vx: 50.0,
            vy: 0.0,
            life: 0,
            ttl: 100,
            speed: 10.0,
            radius: 1.0,
            hue: 220.0,
        },
    );
    core.frame();

    // Fresh spawn box, not the viewport: y spans cy +/- rangeY.
    let r = core.pool().record(0);
    assert!(r.x >= 0.0 && r.x <= 100.0);
    assert!(r.y >= 50.0 - 400.0 && r.y <= 50.0 + 400.0);
    assert_eq!(r.life, 0);
    assert_eq!((r.vx, r.vy), (0.0, 0.0));
    assert_eq!(core.get_perf_stats().respawned_out_of_bounds(), 1);
}

#[test]
fn same_seed_same_buffer() {
    let mut a = core_with(300, 1234, 320, 240);
    let mut b = core_with(300, 1234, 320, 240);
    for _ in 0..60 {
        a.frame();
        b.frame();
    }
    assert_eq!(a.pool().as_slice(), b.pool().as_slice());

    let mut c = core_with(300, 4321, 320, 240);
    for _ in 0..60 {
        c.frame();
    }
    assert_ne!(a.pool().as_slice(), c.pool().as_slice());
}

#[test]
fn zero_speed_particle_stays_put_until_expiry() {
    let opts = VortexOptions {
        particle_count: 1,
        range_y: 0.0,
        base_speed: 0.0,
        range_speed: 0.0,
        seed: Some(77),
        ..VortexOptions::default()
    };
    let mut core = VortexCore::create(RecordingSurface::new(64, 64).without_log(), opts).unwrap();

    let start = core.pool().record(0);
    assert_eq!(start.y, 32.0);
    for expected_life in 1..=start.ttl {
        core.frame();
        let r = core.pool().record(0);
        assert_eq!((r.x, r.y), (start.x, start.y));
        assert_eq!(r.life, expected_life);
        assert_eq!(r.ttl, start.ttl);
    }

    core.frame();
    let respawned = core.pool().record(0);
    assert_eq!(respawned.life, 0);
    assert_eq!(respawned.y, 32.0);
}

#[test]
fn life_never_exceeds_ttl_between_frames() {
    let mut core = VortexCore::create(
        RecordingSurface::new(500, 500).without_log(),
        options(700, 8),
    )
    .unwrap();
    for _ in 0..300 {
        core.frame();
        assert!(core.pool().records().all(|r| r.life <= r.ttl));
    }
}

#[test]
fn resize_keeps_the_buffer() {
    let mut core = core_with(100, 6, 200, 100);
    core.frame();
    let ptr = core.particles_ptr();
    let len = core.particles_len();
    let before = core.pool().as_slice().to_vec();

    core.resize(800, 600);
    assert_eq!(core.particles_ptr(), ptr);
    assert_eq!(core.particles_len(), len);
    assert_eq!(core.pool().as_slice(), &before[..]);
    assert_eq!(core.viewport().center_x, 400.0);
    assert_eq!(core.viewport().center_y, 300.0);
}

#[test]
fn respawn_all_resets_tick() {
    let mut core = core_with(20, 3, 100, 100);
    for _ in 0..5 {
        core.frame();
    }
    core.respawn_all();
    assert_eq!(core.tick(), 0);
    assert!(core.pool().records().all(|r| r.life == 0));
}

#[test]
fn perf_stats_only_when_enabled() {
    let mut core = core_with(40, 3, 100, 100);
    core.frame();
    assert_eq!(core.get_perf_stats(), PerfStats::default());

    core.enable_perf_metrics(true);
    core.frame();
    let stats = core.get_perf_stats();
    assert_eq!(stats.particles_advected(), 40);
    assert_eq!(stats.particle_count(), 40);
    assert_eq!(stats.tick(), 2.0);
    assert_eq!(stats.buffer_bytes(), 40 * 9 * 4);
    assert!(stats.frame_ms() >= 0.0);

    core.enable_perf_metrics(false);
    assert_eq!(core.get_perf_stats(), PerfStats::default());
}

#[test]
fn options_json_reports_the_seed() {
    let core = core_with(10, 42, 10, 10);
    let parsed = VortexOptions::from_json(&core.options_json()).unwrap();
    assert_eq!(parsed.seed, Some(42));
    assert_eq!(parsed.particle_count, 10);
}

// Frame loop

fn running_loop<F: FrameScheduler + 'static>(scheduler: F) -> AnimationLoop<RecordingSurface, F> {
    let core = VortexCore::create(RecordingSurface::new(64, 64).without_log(), options(10, 1)).unwrap();
    let animation = AnimationLoop::new(core, scheduler);
    animation.start().unwrap();
    animation
}

#[test]
fn loop_requests_one_frame_at_a_time() {
    let animation = running_loop(ManualScheduler::new());
    assert_eq!(animation.scheduler().pending(), 1);

    assert_eq!(animation.scheduler().run(5), 5);
    assert_eq!(animation.with_core(|c| c.tick()), 5);
    assert_eq!(animation.scheduler().pending(), 1);
    assert!(animation.is_running());
}

#[test]
fn stop_cancels_the_pending_frame() {
    let animation = running_loop(ManualScheduler::new());
    animation.scheduler().run(2);
    animation.stop();

    assert!(!animation.is_running());
    assert_eq!(animation.scheduler().pending(), 0);
    assert!(!animation.scheduler().fire_next());
    assert_eq!(animation.with_core(|c| c.tick()), 2);
}

#[test]
fn late_callback_after_stop_is_a_no_op() {
    let animation = running_loop(ManualScheduler::with_late_cancel());
    animation.scheduler().run(3);
    animation.destroy();

    // The host already queued this one.
    assert_eq!(animation.scheduler().pending(), 1);
    assert!(animation.scheduler().fire_next());
    assert_eq!(animation.scheduler().pending(), 0);
    assert_eq!(animation.with_core(|c| c.tick()), 3);
    assert!(animation.with_core(|c| c.is_disposed()));
}

#[test]
fn destroyed_core_ends_the_loop() {
    let animation = running_loop(ManualScheduler::new());
    animation.scheduler().run(1);
    animation.with_core(|c| c.destroy());

    assert!(animation.scheduler().fire_next());
    assert!(!animation.is_running());
    assert_eq!(animation.scheduler().pending(), 0);
}

#[test]
fn loop_handle_reaches_the_core_until_dropped() {
    let animation = running_loop(ManualScheduler::new());
    let handle = animation.handle();
    assert_eq!(handle.with_core(|c| c.particle_count()), Some(10));

    handle.with_core(|c| c.resize(32, 32));
    assert_eq!(animation.with_core(|c| c.viewport().width), 32.0);

    drop(animation);
    assert_eq!(handle.with_core(|c| c.particle_count()), None);
}

#[test]
fn dropped_loop_is_freed_even_if_cancel_never_lands() {
    let animation = running_loop(ManualScheduler::with_late_cancel());
    animation.scheduler().run(2);
    let handle = animation.handle();
    animation.destroy();

    drop(animation);
    assert_eq!(handle.with_core(|c| c.tick()), None);
}

#[test]
fn queued_callback_outliving_its_loop_is_harmless() {
    let scheduler = std::rc::Rc::new(ManualScheduler::with_late_cancel());
    let animation = running_loop(SharedScheduler(scheduler.clone()));
    let handle = animation.handle();
    scheduler.run(3);
    animation.destroy();
    drop(animation);

    assert_eq!(handle.with_core(|c| c.tick()), None);
    // The host still fires the cancelled request.
    assert_eq!(scheduler.pending(), 1);
    assert!(scheduler.fire_next());
    assert_eq!(scheduler.pending(), 0);
}

/// Scheduler held outside the loop, the way a browser window is.
struct SharedScheduler(std::rc::Rc<ManualScheduler>);

impl FrameScheduler for SharedScheduler {
    fn request_frame(&self, callback: FrameCallback) -> VortexResult<FrameHandle> {
        self.0.request_frame(callback)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.0.cancel_frame(handle)
    }
}
