use crate::{
    config::options::{ResolvedOptions, WaveOptions},
    driver::{
        host::{
            ElementLookup, FrameClock, RootTarget, TickHandle, VisibilitySource, WaveSurface,
            check_root,
        },
        state::{AnimationState, Phase},
    },
    foundation::{core::Timestamp, error::WavesResult},
    noise_field::field::{NoiseField, SimplexField},
    shape::{
        heights::wave_heights,
        wave::{WaveShape, create_static_wave_shape},
    },
};

/// A mounted, frame-driven wave animation.
///
/// One instance owns its noise field, noise timeline and scheduled tick;
/// separate instances share nothing. Playback starts once the host reports
/// the root as visible (and [`WaveAnimation::pause`] has not been called).
/// Dropping the animation tears it down like [`WaveAnimation::destroy`].
#[derive(Debug)]
pub struct WaveAnimation<S, C, V, N = SimplexField>
where
    S: WaveSurface,
    C: FrameClock,
    V: VisibilitySource,
    N: NoiseField,
{
    surface: S,
    clock: C,
    visibility: V,
    noise: N,
    options: ResolvedOptions,
    shapes: Vec<WaveShape>,
    state: AnimationState,
    visible: bool,
    should_play: bool,
}

/// Resolve `target` and start animating it.
///
/// Misconfiguration (unresolvable root, wrong element kind, no path
/// children, invalid options) is logged and yields `None`.
pub fn animate_waves<S, L, C, V>(
    target: RootTarget<S>,
    lookup: &L,
    options: &WaveOptions,
    clock: C,
    visibility: V,
) -> Option<WaveAnimation<S, C, V>>
where
    S: WaveSurface,
    L: ElementLookup<S> + ?Sized,
    C: FrameClock,
    V: VisibilitySource,
{
    let mounted = target
        .resolve(lookup)
        .and_then(|surface| WaveAnimation::mount(surface, options, clock, visibility));
    match mounted {
        Ok(animation) => Some(animation),
        Err(err) => {
            tracing::error!(%err, "fluid-waves: cannot animate waves");
            None
        }
    }
}

impl<S, C, V> WaveAnimation<S, C, V>
where
    S: WaveSurface,
    C: FrameClock,
    V: VisibilitySource,
{
    /// Mount on an already resolved surface, seeding noise from the options
    /// (or randomly when no seed is set).
    pub fn mount(surface: S, options: &WaveOptions, clock: C, visibility: V) -> WavesResult<Self> {
        let resolved = options.resolve()?;
        let noise = match resolved.seed {
            Some(seed) => SimplexField::new(seed),
            None => SimplexField::random(),
        };
        tracing::debug!(seed = noise.seed(), "fluid-waves: noise seeded");
        Self::mount_with_noise(surface, options, noise, clock, visibility)
    }
}

impl<S, C, V, N> WaveAnimation<S, C, V, N>
where
    S: WaveSurface,
    C: FrameClock,
    V: VisibilitySource,
    N: NoiseField,
{
    /// Mount with a caller-provided noise field.
    #[tracing::instrument(skip_all)]
    pub fn mount_with_noise(
        mut surface: S,
        options: &WaveOptions,
        noise: N,
        clock: C,
        mut visibility: V,
    ) -> WavesResult<Self> {
        check_root(&surface)?;
        let resolved = options.resolve()?;
        let shapes = build_shapes(&resolved, surface.path_count(), 0.0, &noise)?;
        write_paths(&mut surface, &shapes);

        visibility.observe();
        tracing::debug!(layers = shapes.len(), position = %resolved.position, "fluid-waves: mounted");

        Ok(Self {
            surface,
            clock,
            visibility,
            noise,
            options: resolved,
            shapes,
            state: AnimationState::new(),
            visible: false,
            should_play: true,
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Accumulated noise time shared by all layers.
    pub fn noise_timeline(&self) -> f64 {
        self.state.noise_timeline()
    }

    /// The pending tick, if any.
    pub fn scheduled_tick(&self) -> Option<TickHandle> {
        self.state.scheduled_tick()
    }

    /// Per-layer shapes of the last rendered frame.
    pub fn shapes(&self) -> &[WaveShape] {
        &self.shapes
    }

    /// Options currently in effect.
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// The surface paths are written to.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The frame clock ticks are requested from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the frame clock, for hosts that fire ticks themselves.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// The visibility source.
    pub fn visibility(&self) -> &V {
        &self.visibility
    }

    /// Host callback: the root entered (`true`) or left (`false`) the viewport.
    pub fn on_visibility_change(&mut self, intersecting: bool) {
        if self.state.phase() == Phase::Destroyed {
            return;
        }
        self.visible = intersecting;
        if intersecting && self.should_play {
            self.start_ticking();
        } else {
            self.stop_ticking();
        }
    }

    /// Allow playback; ticking starts as soon as the root is visible.
    /// Calling this while already playing does nothing.
    pub fn play(&mut self) {
        self.should_play = true;
        if self.visible {
            self.start_ticking();
        }
    }

    /// Stop ticking until [`WaveAnimation::play`]. Redundant calls do nothing.
    pub fn pause(&mut self) {
        self.should_play = false;
        self.stop_ticking();
    }

    /// Stop observing visibility and cancel any pending tick.
    ///
    /// After this no tick is processed again. Repeated calls do nothing.
    pub fn destroy(&mut self) {
        if self.state.phase() == Phase::Destroyed {
            return;
        }
        self.visibility.disconnect();
        if let Some(handle) = self.state.destroy() {
            self.clock.cancel_tick(handle);
        }
        tracing::debug!("fluid-waves: destroyed");
    }

    /// Host callback: the tick `handle` fired at `now`.
    ///
    /// Advances the noise timeline, recomputes and writes every layer, then
    /// requests the next tick. Handles that are not the pending tick (stale,
    /// cancelled, or delivered after [`WaveAnimation::destroy`]) are ignored.
    pub fn on_frame(&mut self, handle: TickHandle, now: Timestamp) {
        if !self.state.accept_tick(handle) {
            tracing::trace!(?handle, "fluid-waves: ignoring stale tick");
            return;
        }

        let noise_time = self.state.advance(now, self.options.speed_per_ms);
        for shape in &mut self.shapes {
            shape.update_in_place(
                self.options.position,
                self.options.movement_radius,
                self.options.noise_scaling,
                noise_time,
                &self.noise,
            );
        }
        write_paths(&mut self.surface, &self.shapes);
        tracing::trace!(noise_time, "fluid-waves: frame written");

        let next = self.clock.request_tick();
        self.state.reschedule(next);
    }

    /// Apply new options, rebuilding every layer's static geometry.
    ///
    /// The noise field, timeline and playback state are kept; a running
    /// animation keeps exactly one scheduled tick. The noise seed is not
    /// changed by reconfiguration.
    pub fn reconfigure(&mut self, options: &WaveOptions) -> WavesResult<()> {
        if self.state.phase() == Phase::Destroyed {
            tracing::debug!("fluid-waves: reconfigure after destroy ignored");
            return Ok(());
        }
        let resolved = options.resolve()?;
        let shapes = build_shapes(
            &resolved,
            self.surface.path_count(),
            self.state.noise_timeline(),
            &self.noise,
        )?;
        write_paths(&mut self.surface, &shapes);
        self.shapes = shapes;
        self.options = resolved;
        tracing::debug!(layers = self.shapes.len(), "fluid-waves: reconfigured");
        Ok(())
    }

    fn start_ticking(&mut self) {
        let clock = &mut self.clock;
        if self.state.start(|| clock.request_tick()) {
            tracing::debug!("fluid-waves: playing");
        }
    }

    fn stop_ticking(&mut self) {
        if let Some(handle) = self.state.pause() {
            self.clock.cancel_tick(handle);
            tracing::debug!("fluid-waves: paused");
        }
    }
}

impl<S, C, V, N> Drop for WaveAnimation<S, C, V, N>
where
    S: WaveSurface,
    C: FrameClock,
    V: VisibilitySource,
    N: NoiseField,
{
    fn drop(&mut self) {
        self.destroy();
    }
}

fn build_shapes<N: NoiseField + ?Sized>(
    options: &ResolvedOptions,
    layers: usize,
    noise_time: f64,
    noise: &N,
) -> WavesResult<Vec<WaveShape>> {
    wave_heights(options.lowest_height, options.highest_height, layers)
        .into_iter()
        .enumerate()
        .map(|(i, h)| create_static_wave_shape(&options.layer(i, h), noise_time, noise))
        .collect()
}

fn write_paths<S: WaveSurface + ?Sized>(surface: &mut S, shapes: &[WaveShape]) {
    for (i, shape) in shapes.iter().enumerate() {
        surface.set_path_data(i, shape.path());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/animation.rs"]
mod tests;
