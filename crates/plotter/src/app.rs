// File: crates/plotter/src/app.rs
// Summary: AppContext: owns the inputs and both graphs; one update cycle recomputes, one render draws.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use anyhow::{Context, Result};
use integral_core::{compute, Computation, IntegrationRequest};
use log::{debug, info};
use plot_core::{ContainerSize, DrawingSurface, PlotSurface, Theme};

use crate::config::Config;
use crate::inputs::{InputChange, Inputs};

/// Both graphs' state plus the inputs that drive them. Every field sits
/// behind its own mutex so a render of one graph never waits on the other.
pub struct AppContext {
    inputs: Mutex<Inputs>,
    function_graph: Mutex<PlotSurface>,
    integral_graph: Mutex<PlotSurface>,
    container: Mutex<ContainerSize>,
    latest: Mutex<Option<Computation>>,
}

/// Render targets for the two graphs, owned by whoever renders.
pub struct Frames<S> {
    pub function: S,
    pub integral: S,
}

/// Poisoning only means another thread panicked mid-update; the plain data
/// inside is still usable.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AppContext {
    pub fn new(inputs: Inputs, container: ContainerSize, theme: Theme) -> Self {
        let mut function_graph = PlotSurface::with_theme(theme);
        function_graph.set_color(theme.function_line);
        let mut integral_graph = PlotSurface::with_theme(theme);
        integral_graph.set_color(theme.integral_line);
        Self {
            inputs: Mutex::new(inputs),
            function_graph: Mutex::new(function_graph),
            integral_graph: Mutex::new(integral_graph),
            container: Mutex::new(container),
            latest: Mutex::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let theme = config.render.theme().context("render settings")?;
        Ok(Self::new(config.inputs.clone(), config.render.container(), theme))
    }

    pub fn inputs(&self) -> Inputs { lock(&self.inputs).clone() }

    pub fn apply_change(&self, change: &InputChange) -> Result<()> {
        lock(&self.inputs).apply(change)
    }

    pub fn container(&self) -> ContainerSize { *lock(&self.container) }

    /// Both graphs re-read this on their next render.
    pub fn set_container(&self, size: ContainerSize) { *lock(&self.container) = size; }

    /// The result of the last update cycle, if any.
    pub fn latest(&self) -> Option<Computation> { lock(&self.latest).clone() }

    pub fn function_graph(&self) -> MutexGuard<'_, PlotSurface> { lock(&self.function_graph) }

    pub fn integral_graph(&self) -> MutexGuard<'_, PlotSurface> { lock(&self.integral_graph) }

    /// Resolve the inputs, recompute both data sets and hand them to the graphs.
    ///
    /// The function curve is sampled at the function graph's current pixel
    /// size, so before the first render it comes back empty; the next cycle
    /// fills it in.
    pub fn update_data(&self) -> Computation {
        let started = Instant::now();
        let params = self.inputs().resolve();

        let pixel_size = {
            let mut g = self.function_graph();
            g.set_y_range(params.y_lock);
            g.set_x_range(params.x_range);
            g.pixel_size()
        };
        self.integral_graph().set_x_range(params.x_range);

        let req = IntegrationRequest {
            x_range: params.x_range,
            y_filter: params.y_lock,
            sample_count: params.sample_count,
            rule: params.rule,
            pixel_size,
        };
        let f = &params.function;
        let result = compute(|x| f.evaluate(x), &req);

        {
            let mut g = self.function_graph();
            g.set_data(result.function.clone());
            g.set_shapes(result.integral.shapes.clone());
        }
        self.integral_graph().set_data(result.integral.series.clone());

        debug!(
            "update: {} over [{}, {}], n={}, {} curve samples, integral {} in {:?}",
            params.rule,
            params.x_range.min,
            params.x_range.max,
            params.sample_count,
            result.function.len(),
            result.integral.formatted(),
            started.elapsed()
        );
        *lock(&self.latest) = Some(result.clone());
        result
    }

    /// Draw both graphs with the most recently computed data.
    pub fn render<S: DrawingSurface>(&self, frames: &mut Frames<S>) -> Result<()> {
        let container = self.container();
        self.function_graph()
            .render(&container, &mut frames.function)
            .context("rendering function graph")?;
        self.integral_graph()
            .render(&container, &mut frames.integral)
            .context("rendering integral graph")?;
        Ok(())
    }

    /// One complete pass for batch use: render to establish the plot width,
    /// compute with it, then render the data.
    pub fn run_once<S: DrawingSurface>(&self, frames: &mut Frames<S>) -> Result<Computation> {
        self.render(frames)?;
        let result = self.update_data();
        self.render(frames)?;
        info!("integral = {}", result.integral.formatted());
        Ok(result)
    }
}
