use super::commands::apply_commands;
use super::render::{build_hud, compose, RenderInputs};
use super::{EffectCore, PerfTimer};

pub(super) fn step(effect: &mut EffectCore, now_ms: f64) -> bool {
    let perf_on = effect.perf_enabled;
    if perf_on {
        effect.perf_stats.reset();
        effect.perf_stats.grid_size = effect.grid.size() as u32;
        effect.perf_stats.frame_bytes = (effect.frame_buffer.pixels().len() as u32).saturating_mul(4);
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === COMMANDS ===
    if perf_on {
        let t0 = PerfTimer::start();
        apply_commands(effect);
        effect.perf_stats.commands_ms = t0.elapsed_ms();
    } else {
        apply_commands(effect);
    }

    if !effect.running {
        effect.samples.clear();
        effect.debug_landmarks.clear();
        return false;
    }

    effect.outcomes.clear();
    if !effect.paused {
        // === EMISSION ===
        if perf_on {
            let t0 = PerfTimer::start();
            process_samples(effect, now_ms);
            effect.perf_stats.emission_ms = t0.elapsed_ms();
        } else {
            process_samples(effect, now_ms);
        }

        // === SETTLE === exactly once per frame
        if perf_on {
            let t0 = PerfTimer::start();
            effect.perf_stats.particles_moved = effect.grid.settle();
            effect.perf_stats.settle_ms = t0.elapsed_ms();
        } else {
            effect.grid.settle();
        }
    }

    // === RENDER ===
    if perf_on {
        let t0 = PerfTimer::start();
        render(effect);
        effect.perf_stats.render_ms = t0.elapsed_ms();
    } else {
        render(effect);
    }

    effect.frame += 1;
    effect.samples.clear();
    effect.debug_landmarks.clear();

    if let Some(t) = step_start {
        effect.perf_stats.particle_count = effect.grid.occupied_count() as u32;
        effect.perf_stats.step_ms = t.elapsed_ms();
    }
    true
}

fn process_samples(effect: &mut EffectCore, now_ms: f64) {
    let samples = std::mem::take(&mut effect.samples);
    let mirror = effect.config.mirror;

    for sample in samples.iter() {
        let sample = if mirror { sample.mirrored() } else { *sample };
        match effect
            .emission
            .emit(&sample, now_ms, &effect.viewport, &mut effect.grid, &mut effect.hue)
        {
            Some(outcome) => {
                if effect.perf_enabled {
                    effect.perf_stats.samples_processed += 1;
                    effect.perf_stats.particles_inserted += outcome.inserted;
                }
                effect.outcomes.push(outcome);
            }
            None => {
                if effect.perf_enabled {
                    effect.perf_stats.samples_ignored += 1;
                }
                log::debug!(
                    "ignored sample for feature {}: not a {} sample",
                    sample.feature_id(),
                    effect.emission.pattern().name()
                );
            }
        }
    }

    effect.samples = samples;
}

fn render(effect: &mut EffectCore) {
    let inputs = RenderInputs {
        camera: effect.camera.as_ref(),
        mirror: effect.config.mirror,
        view: effect.view,
        viewport: &effect.viewport,
        grid: &effect.grid,
        pattern: effect.emission.pattern(),
        outcomes: &effect.outcomes,
        landmarks: &effect.debug_landmarks,
    };
    compose(&mut effect.frame_buffer, &inputs);

    build_hud(
        &mut effect.hud,
        effect.view,
        effect.emission.pattern(),
        &effect.outcomes,
        effect.paused,
        effect.frame_buffer.height(),
    );
}
