use super::perf_stats::PerfStats;
use super::render::ViewMode;
use super::EffectCore;

pub(super) fn enable_perf_metrics(effect: &mut EffectCore, enabled: bool) {
    effect.perf_enabled = enabled;
    if !enabled {
        effect.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(effect: &EffectCore) -> PerfStats {
    effect.perf_stats.clone()
}

pub(super) fn set_view(effect: &mut EffectCore, view: ViewMode) {
    effect.view = view;
}

pub(super) fn set_mirror(effect: &mut EffectCore, mirror: bool) {
    effect.config.mirror = mirror;
}
