// src/gui/actions/refresh.rs
//
// The fetch worker. One flight at a time per window: a Refresh while one
// runs is queued, never run concurrently. Every spawn takes a fresh
// generation number and poll() drops any result wearing an old one, so a
// slow relay can never overwrite newer data.

use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    gui::{app::App, components::banner::Banner, progress::GuiProgress},
    scrape::{self, IndustryRow, ScrapeError},
};

/// What the worker thread sends back over the channel.
pub struct FetchResult {
    pub generation: u64,
    pub outcome: Result<Vec<IndustryRow>, ScrapeError>,
}

/// Start a market fetch, or queue one if a fetch is already in flight.
pub fn refresh(app: &mut App, ctx: &egui::Context) {
    if app.running {
        if !app.pending_refresh {
            app.pending_refresh = true;
            logd!("Refresh: queued behind in-flight fetch");
        }
        return;
    }

    app.running = true;
    app.banner = None;
    app.generation += 1;
    let generation = app.generation;

    app.status("Fetching market page");
    logf!("Refresh: Begin gen={generation}");

    let (tx, rx) = mpsc::channel();
    app.rx = Some(rx);

    let status = app.status.clone();
    let ctx = ctx.clone();
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let outcome = scrape::collect_industries(Some(&mut prog));
        // Receiver is gone when the window already closed; the result just drops.
        let _ = tx.send(FetchResult { generation, outcome });
        ctx.request_repaint();
    });
}

/// Drain the worker channel; called once per frame before drawing.
pub fn poll(app: &mut App, ctx: &egui::Context) {
    use mpsc::TryRecvError;

    let Some(rx) = app.rx.take() else { return };

    let result = match rx.try_recv() {
        Ok(r) => r,
        Err(TryRecvError::Empty) => {
            // Still in flight; hand the channel back.
            app.rx = Some(rx);
            return;
        }
        Err(TryRecvError::Disconnected) => {
            // Worker died without delivering (panic); recover the UI.
            app.running = false;
            loge!("Refresh: worker vanished without a result");
            app.status("Fetch failed");
            return;
        }
    };

    app.running = false;

    if result.generation != app.generation {
        logd!(
            "Refresh: stale result discarded (gen {} != {})",
            result.generation,
            app.generation
        );
    } else {
        apply(app, result.outcome);
    }

    if app.pending_refresh {
        app.pending_refresh = false;
        logd!("Refresh: running queued request");
        refresh(app, ctx);
    }
}

fn apply(app: &mut App, outcome: Result<Vec<IndustryRow>, ScrapeError>) {
    match outcome {
        Ok(rows) => {
            logf!("Refresh: OK rows={}", rows.len());
            app.market.replace(rows);
            app.rebuild_view();
            app.status(format!("Ready: {} industries", app.market.len()));
        }
        Err(ScrapeError::NoData) => {
            loge!("Refresh: page fetched but zero rows extracted");
            app.banner = Some(Banner::warning(ScrapeError::NoData.to_string()));
            app.status("No industry rows found");
        }
        Err(err) => {
            loge!("Refresh: Error: {err}");
            app.banner = Some(Banner::error(err.to_string()));
            app.status("Fetch failed");
        }
    }
}
