//! Fixed timestep simulation tick
//!
//! Core step that resolves input against targets, moves them and updates the
//! running statistics.

use rand::Rng;

use super::state::{InputState, SessionStats, TargetSet};
use super::target::Target;
use crate::consts::*;

/// What happened during a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Targets under the pointer this tick
    pub hits: u32,
    /// A drag was active and overlapped nothing
    pub missed: bool,
    /// Slots that received a fresh target
    pub replaced: Vec<usize>,
}

/// Advance the session by one fixed timestep
pub fn tick<R: Rng>(
    targets: &mut TargetSet,
    input: &mut InputState,
    stats: &mut SessionStats,
    rng: &mut R,
) -> TickEvents {
    let mut events = TickEvents::default();

    for slot in 0..targets.len() {
        if input.dragging {
            let target = &targets[slot];
            let offset_sq = target.offset_squared(input.pointer);
            let radius_sq = target.radius * target.radius;

            if offset_sq <= radius_sq {
                events.hits += 1;
                stats.hit_count += 1;
                stats.total_error += f64::from(offset_sq).sqrt();
                // Reward falls off quadratically with distance from center
                stats.score += f64::from(radius_sq - offset_sq) * SCORE_SCALE;
                log::debug!(
                    "Hit slot {} at offset {:.1} (r={:.1})",
                    slot,
                    offset_sq.sqrt(),
                    target.radius
                );

                if !input.tracking_mode {
                    targets.replace(slot, Target::spawn(&mut *rng));
                    stats.targets_created += 1;
                    events.replaced.push(slot);
                }
            }
        }

        // A freshly replaced target takes its first step this tick
        if let Some(target) = targets.get_mut(slot) {
            target.step();
        }
    }

    if input.dragging && events.hits == 0 {
        stats.miss_count += 1;
        events.missed = true;
    }

    // Single-shot drags resolve once
    if !input.tracking_mode {
        input.dragging = false;
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::HudText;
    use crate::sim::state::SessionState;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Three slow targets at known spots, far apart
    fn fixed_targets() -> TargetSet {
        TargetSet::from_slots([
            Target::new(Vec2::new(300.0, 300.0), Vec2::new(2.0, 1.0), 50.0),
            Target::new(Vec2::new(960.0, 540.0), Vec2::new(1.0, 3.0), 80.0),
            Target::new(Vec2::new(1600.0, 800.0), Vec2::new(4.0, 2.0), 64.0),
        ])
    }

    fn session() -> SessionState {
        let mut state = SessionState::new(12345);
        state.targets = fixed_targets();
        state
    }

    #[test]
    fn test_idle_tick_only_moves_targets() {
        let mut state = session();
        let events = state.tick();
        assert_eq!(events, TickEvents::default());
        assert_eq!(state.targets[0].pos, Vec2::new(302.0, 301.0));
        assert_eq!(state.targets[1].pos, Vec2::new(961.0, 543.0));
        assert_eq!(state.stats.hit_count, 0);
        assert_eq!(state.stats.miss_count, 0);
    }

    #[test]
    fn test_center_hit_scores_full() {
        let mut state = session();
        state.input.set_tracking_mode(true);
        state.input.press(Vec2::new(300.0, 300.0));

        let events = state.tick();

        assert_eq!(events.hits, 1);
        assert!(!events.missed);
        assert!((state.stats.score - 50.0 * 50.0 * SCORE_SCALE).abs() < 1e-9);
        assert_eq!(state.stats.total_error, 0.0);
    }

    #[test]
    fn test_edge_hit_scores_zero() {
        let mut state = session();
        state.input.set_tracking_mode(true);
        state.input.press(Vec2::new(350.0, 300.0));

        let events = state.tick();

        assert_eq!(events.hits, 1);
        assert_eq!(state.stats.score, 0.0);
        assert_eq!(state.stats.total_error, 50.0);
        assert_eq!(state.stats.average_error(), Some(50.0));
    }

    #[test]
    fn test_single_shot_hit_replaces_target() {
        let mut state = session();
        let original = state.targets[1];
        state.input.press(Vec2::new(960.0, 540.0));

        let events = state.tick();

        assert_eq!(events.hits, 1);
        assert_eq!(events.replaced, vec![1]);
        assert_eq!(state.stats.hit_count, 1);
        assert_eq!(state.stats.miss_count, 0);
        assert_eq!(state.stats.targets_created, TARGET_COUNT as u32 + 1);
        assert_ne!(state.targets[1].pos, original.pos + original.vel);
        assert!(state.targets[1].in_bounds());
        // Drag consumed without a release
        assert!(!state.input.dragging);

        // Holding on without releasing registers nothing more
        let events = state.tick();
        assert_eq!(events, TickEvents::default());
        state.input.release();
        assert_eq!(state.stats.hit_count, 1);
        assert_eq!(state.stats.miss_count, 0);
    }

    #[test]
    fn test_replaced_target_steps_same_tick() {
        let mut targets = fixed_targets();
        let mut input = InputState::default();
        let mut stats = SessionStats::default();
        input.press(Vec2::new(300.0, 300.0));

        // Spawn the same replacement on a twin RNG to know where it started
        let mut rng = Pcg32::seed_from_u64(8);
        let mut twin = rng.clone();
        let expected_spawn = Target::spawn(&mut twin);

        tick(&mut targets, &mut input, &mut stats, &mut rng);

        let mut expected = expected_spawn;
        expected.step();
        assert_eq!(targets[0], expected);
    }

    #[test]
    fn test_single_shot_miss() {
        let mut state = session();
        state.input.press(Vec2::new(10.0, 10.0));

        let events = state.tick();

        assert!(events.missed);
        assert_eq!(state.stats.miss_count, 1);
        assert_eq!(state.stats.hit_count, 0);
        assert!(!state.input.dragging);
        assert_eq!(state.stats.accuracy(), Some(0.0));
        assert_eq!(HudText::from_stats(&state.stats).accuracy, "Accuracy: 0%");
    }

    #[test]
    fn test_tracking_hits_every_tick_without_replacement() {
        let mut state = session();
        state.input.set_tracking_mode(true);
        state.input.press(state.targets[2].pos);

        for _ in 0..10 {
            let events = state.tick();
            assert_eq!(events.hits, 1);
            assert!(events.replaced.is_empty());
            assert!(state.input.dragging);
            // Follow the target as it moves
            let pos = state.targets[2].pos;
            state.input.pointer_moved(pos);
        }

        assert_eq!(state.stats.hit_count, 10);
        assert_eq!(state.stats.miss_count, 0);
        assert_eq!(state.stats.targets_created, TARGET_COUNT as u32);

        state.input.release();
        let events = state.tick();
        assert_eq!(events, TickEvents::default());
        assert_eq!(state.stats.hit_count, 10);
    }

    #[test]
    fn test_tracking_miss_every_tick_while_held() {
        let mut state = session();
        state.input.set_tracking_mode(true);
        state.input.press(Vec2::new(10.0, 1070.0));

        for _ in 0..5 {
            assert!(state.tick().missed);
        }

        assert_eq!(state.stats.miss_count, 5);
        assert_eq!(state.stats.accuracy(), Some(0.0));
    }

    #[test]
    fn test_overlapping_targets_each_hit() {
        let mut state = session();
        state.targets = TargetSet::from_slots([
            Target::new(Vec2::new(500.0, 500.0), Vec2::ONE, 60.0),
            Target::new(Vec2::new(520.0, 500.0), Vec2::ONE, 60.0),
            Target::new(Vec2::new(1500.0, 500.0), Vec2::ONE, 60.0),
        ]);
        state.input.set_tracking_mode(true);
        state.input.press(Vec2::new(510.0, 500.0));

        let events = state.tick();

        assert_eq!(events.hits, 2);
        assert!(!events.missed);
        assert_eq!(state.stats.hit_count, 2);
        assert_eq!(state.stats.total_error, 20.0);
    }

    #[test]
    fn test_reset_then_derived_undefined() {
        let mut state = session();
        state.input.press(Vec2::new(300.0, 300.0));
        state.tick();
        assert!(state.stats.accuracy().is_some());

        state.reset();

        assert_eq!(state.stats.average_error(), None);
        assert_eq!(state.stats.accuracy(), None);
        let hud = HudText::from_stats(&state.stats);
        assert_eq!(hud.error, "Avg Error: ?");
        assert_eq!(hud.accuracy, "Accuracy: ?");
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut a = SessionState::new(99999);
        let mut b = SessionState::new(99999);

        for i in 0..600 {
            if i % 37 == 0 {
                let p = a.targets[i % TARGET_COUNT].pos;
                a.input.press(p);
                b.input.press(p);
            }
            a.tick();
            b.tick();
        }

        assert_eq!(a.targets, b.targets);
        assert_eq!(a.stats, b.stats);
    }
}
