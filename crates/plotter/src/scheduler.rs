// File: crates/plotter/src/scheduler.rs
// Summary: Two worker threads: periodic/event-driven recompute and fixed-rate rendering.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use plot_core::SkiaSurface;

use crate::app::{AppContext, Frames};
use crate::config::ScheduleConfig;

enum Command {
    Recompute,
    Stop,
}

#[derive(Debug, Default)]
struct Counters {
    recomputes: AtomicU64,
    renders: AtomicU64,
}

/// What the render thread hands back on shutdown: the last frames as PNG.
#[derive(Debug, Clone)]
pub struct FinalFrames {
    pub function_png: Vec<u8>,
    pub integral_png: Vec<u8>,
    pub renders: u64,
    pub recomputes: u64,
}

/// Runs the update cycle once at start, then on every input change and every
/// `recompute_interval`; renders both graphs every `render_interval`.
/// Must be stopped with [`Scheduler::shutdown`] to collect the final frames;
/// dropping it stops the threads and discards them.
pub struct Scheduler {
    tx: Sender<Command>,
    stop: Arc<AtomicBool>,
    counters: Arc<Counters>,
    recompute: Option<JoinHandle<()>>,
    render: Option<JoinHandle<Result<FinalFrames>>>,
}

impl Scheduler {
    pub fn start(ctx: Arc<AppContext>, cfg: &ScheduleConfig) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let counters = Arc::new(Counters::default());

        let recompute = {
            let (ctx, counters) = (Arc::clone(&ctx), Arc::clone(&counters));
            let every = cfg.recompute_interval();
            thread::Builder::new()
                .name("recompute".into())
                .spawn(move || recompute_loop(&ctx, &rx, every, &counters))
                .context("spawning recompute thread")?
        };
        let render = {
            let (ctx, counters, stop) = (Arc::clone(&ctx), Arc::clone(&counters), Arc::clone(&stop));
            let every = cfg.render_interval();
            thread::Builder::new()
                .name("render".into())
                .spawn(move || render_loop(&ctx, every, &stop, &counters))
                .context("spawning render thread")?
        };
        info!(
            "scheduler started: recompute every {:?}, render every {:?}",
            cfg.recompute_interval(),
            cfg.render_interval()
        );
        Ok(Self { tx, stop, counters, recompute: Some(recompute), render: Some(render) })
    }

    /// Ask for an update cycle now instead of waiting for the next tick.
    pub fn input_changed(&self) {
        if self.tx.send(Command::Recompute).is_err() {
            warn!("recompute thread is gone; change will not be applied");
        }
    }

    pub fn recomputes(&self) -> u64 { self.counters.recomputes.load(Ordering::Relaxed) }

    pub fn renders(&self) -> u64 { self.counters.renders.load(Ordering::Relaxed) }

    /// Stop both threads, wait for them, and return the last rendered frames.
    pub fn shutdown(mut self) -> Result<FinalFrames> {
        self.signal_stop();
        if let Some(h) = self.recompute.take() {
            h.join().map_err(|_| anyhow!("recompute thread panicked"))?;
        }
        let h = self.render.take().context("render thread already joined")?;
        let frames = h.join().map_err(|_| anyhow!("render thread panicked"))??;
        info!("scheduler stopped after {} recomputes, {} renders", frames.recomputes, frames.renders);
        Ok(frames)
    }

    fn signal_stop(&self) {
        self.stop.store(true, Ordering::Release);
        let _ = self.tx.send(Command::Stop);
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if self.recompute.is_none() && self.render.is_none() {
            return;
        }
        self.signal_stop();
        if let Some(h) = self.recompute.take() {
            let _ = h.join();
        }
        if let Some(h) = self.render.take() {
            let _ = h.join();
        }
    }
}

fn recompute_loop(ctx: &AppContext, rx: &Receiver<Command>, every: Duration, counters: &Counters) {
    loop {
        ctx.update_data();
        counters.recomputes.fetch_add(1, Ordering::Relaxed);
        match rx.recv_timeout(every) {
            Ok(Command::Recompute) | Err(RecvTimeoutError::Timeout) => {}
            Ok(Command::Stop) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!("recompute thread exiting");
}

/// Skia surfaces are created and dropped on this thread.
fn render_loop(ctx: &AppContext, every: Duration, stop: &AtomicBool, counters: &Counters) -> Result<FinalFrames> {
    let mut frames = Frames { function: SkiaSurface::new(), integral: SkiaSurface::new() };
    let mut next = Instant::now();
    while !stop.load(Ordering::Acquire) {
        if let Err(e) = ctx.render(&mut frames) {
            warn!("render failed: {e:#}");
        } else {
            counters.renders.fetch_add(1, Ordering::Relaxed);
        }
        next += every;
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        } else {
            // fell behind; don't try to catch up with a burst
            next = now;
        }
    }

    // one last frame so the snapshot reflects the final data
    ctx.render(&mut frames)?;
    counters.renders.fetch_add(1, Ordering::Relaxed);
    debug!("render thread exiting");
    Ok(FinalFrames {
        function_png: frames.function.encode_png()?,
        integral_png: frames.integral.encode_png()?,
        renders: counters.renders.load(Ordering::Relaxed),
        recomputes: counters.recomputes.load(Ordering::Relaxed),
    })
}
