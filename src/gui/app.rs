// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, options::PageKind, state::AppState},
    data::MarketData,
    recs::{self, AggregatedRow},
    taxonomy::Resolver,
    view::{self, ViewState},
};

use super::{
    actions::{self, FetchResult},
    components::{self, banner::Banner},
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::load(), &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical datasets
    pub market: MarketData,
    pub recs: Vec<AggregatedRow>,

    // derived row orders for the two tables; rebuilt on any filter change
    pub row_ix: Vec<usize>,
    pub rec_ix: Vec<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (the fetch worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    /// Sticky fetch failure; shown until dismissed or the next refresh.
    pub banner: Option<Banner>,

    // refresh plumbing: results carry a generation tag so a late worker
    // can never overwrite newer data
    pub generation: u64,
    pub rx: Option<mpsc::Receiver<FetchResult>>,
    pub pending_refresh: bool,
}

impl App {
    pub fn new(mut state: AppState, ctx: &egui::Context) -> Self {
        // A stale state file may name a tab that no longer exists.
        state.gui.current_page_index =
            state.gui.current_page_index.min(router::all_pages().len() - 1);

        let recs = recs::aggregate(recs::RECOMMENDATIONS, Resolver::shared());
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!(
            "Init: page index={}, rec targets={}",
            state.gui.current_page_index,
            recs.len()
        );

        let mut app = Self {
            state,
            market: MarketData::default(),
            recs,
            row_ix: Vec::new(),
            rec_ix: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Starting"))),
            running: false,
            banner: None,
            generation: 0,
            rx: None,
            pending_refresh: false,
        };
        app.rebuild_view();

        // Fetch on launch, same as hitting Refresh.
        actions::refresh(&mut app, ctx);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { router::all_pages()[self.current_index()].kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Filter/sort state for the active tab.
    pub fn view_state(&self) -> &ViewState {
        match self.current_page_kind() {
            PageKind::Industries => &self.state.gui.industries,
            PageKind::Recommendations => &self.state.gui.recommendations,
        }
    }

    pub fn view_state_mut(&mut self) -> &mut ViewState {
        match self.current_page_kind() {
            PageKind::Industries => &mut self.state.gui.industries,
            PageKind::Recommendations => &mut self.state.gui.recommendations,
        }
    }

    /// Re-derive both tables' visible rows from current data and state.
    pub fn rebuild_view(&mut self) {
        let r = Resolver::shared();
        self.row_ix = view::visible_rows(self.market.rows(), &self.state.gui.industries, r);
        self.rec_ix = view::visible_recs(&self.recs, &self.state.gui.recommendations);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self, ctx);

        // Remember the window size for next launch.
        let size = ctx.screen_rect().size();
        if size.x > 0.0 && size.y > 0.0 {
            self.state.gui.window_w = size.x as u32;
            self.state.gui.window_h = size.y as u32;
        }

        let page = self.current_page();

        if page.kind() == PageKind::Industries {
            egui::SidePanel::left("groups")
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    components::sidebar::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();

            components::banner::draw(ui, self);
            page.draw_filters(ui, self);

            ui.separator();
            components::export_bar::draw(ui, self);
            ui.separator();

            page.draw_table(ui, self);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save();
        logf!("State saved on exit");
    }
}
