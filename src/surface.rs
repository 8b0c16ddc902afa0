//! The search surface: one event-driven controller for the whole overlay.
//!
//! Hosts feed [`SurfaceEvent`]s into [`SearchSurface::update`] and render
//! from the accessors afterwards. The only asynchronous piece is the
//! debounce timer; it is spawned onto the ambient Tokio runtime and reports
//! back through the event channel handed out by [`SearchSurface::new`], so
//! the host's event loop stays the single writer of surface state.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::SearchTuning;
use crate::model::Catalog;
use crate::pipeline::{EditOutcome, QueryPipeline};
use crate::search::{search, ResultDescriptor};
use crate::selection::Selection;

/// Everything that can happen to the surface.
#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    Show,
    Hide,
    Toggle,
    /// The query input changed; carries the full new text.
    QueryChanged(String),
    /// A debounce timer for this generation ran out.
    DebounceElapsed(u64),
    /// The host swapped in a fresh catalog snapshot.
    CollectionsChanged(Catalog),
    SelectNext,
    SelectPrev,
    /// Pointer moved over a result row.
    HoverIndex(usize),
    /// Activate the selected row.
    Confirm,
}

/// Side effects the host must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEffect {
    /// Route to a wiki path, or open an external URL.
    Navigate(String),
}

/// State of the quick-search overlay.
///
/// [`update`](Self::update) must run inside a Tokio runtime because query
/// edits arm the debounce timer with `tokio::spawn`.
pub struct SearchSurface {
    catalog: Catalog,
    tuning: SearchTuning,
    pipeline: QueryPipeline,
    selection: Selection,
    results: Vec<ResultDescriptor>,
    open: bool,
    timer: Option<JoinHandle<()>>,
    events: mpsc::UnboundedSender<SurfaceEvent>,
}

impl SearchSurface {
    /// Build a closed surface over a catalog snapshot.
    ///
    /// The returned receiver delivers the surface's own timer events; the
    /// host's event loop forwards them back into [`update`](Self::update)
    /// along with its input events.
    pub fn new(
        catalog: Catalog,
        mut tuning: SearchTuning,
    ) -> (Self, mpsc::UnboundedReceiver<SurfaceEvent>) {
        tuning.validate();
        let (events, rx) = mpsc::unbounded_channel();
        let surface = SearchSurface {
            catalog,
            tuning,
            pipeline: QueryPipeline::default(),
            selection: Selection::default(),
            results: Vec::new(),
            open: false,
            timer: None,
            events,
        };
        (surface, rx)
    }

    /// Apply one event and return the effect the host must perform, if any.
    pub fn update(&mut self, event: SurfaceEvent) -> Option<SurfaceEffect> {
        match event {
            SurfaceEvent::Show => {
                self.open = true;
                None
            }
            SurfaceEvent::Hide => {
                self.dismiss();
                None
            }
            SurfaceEvent::Toggle => {
                if self.open {
                    self.dismiss();
                } else {
                    self.open = true;
                }
                None
            }
            // Catalog swaps land even while closed so the next open is fresh.
            SurfaceEvent::CollectionsChanged(catalog) => {
                self.catalog = catalog;
                if self.open {
                    self.recompute();
                }
                None
            }
            _ if !self.open => None,
            SurfaceEvent::QueryChanged(text) => {
                match self.pipeline.edit(text) {
                    EditOutcome::Debounce(generation) => self.arm_timer(generation),
                    EditOutcome::Commit => {
                        self.cancel_timer();
                        self.recompute();
                    }
                }
                None
            }
            SurfaceEvent::DebounceElapsed(generation) => {
                if self.pipeline.timer_elapsed(generation) {
                    self.timer = None;
                    self.recompute();
                }
                None
            }
            SurfaceEvent::SelectNext => {
                self.selection.next(self.results.len());
                None
            }
            SurfaceEvent::SelectPrev => {
                self.selection.previous(self.results.len());
                None
            }
            SurfaceEvent::HoverIndex(index) => {
                self.selection.hover(index, self.results.len());
                None
            }
            SurfaceEvent::Confirm => self.confirm(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn results(&self) -> &[ResultDescriptor] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selection.index()
    }

    pub fn selected_result(&self) -> Option<&ResultDescriptor> {
        self.results.get(self.selection.index())
    }

    /// The text currently in the input box.
    pub fn query(&self) -> &str {
        self.pipeline.raw()
    }

    /// The query the visible results were computed from.
    pub fn committed_query(&self) -> &str {
        self.pipeline.committed()
    }

    /// A sender for feeding events from other tasks or threads.
    pub fn events(&self) -> mpsc::UnboundedSender<SurfaceEvent> {
        self.events.clone()
    }

    fn dismiss(&mut self) {
        self.open = false;
        self.cancel_timer();
        self.pipeline.reset();
        self.results.clear();
        self.selection.reset();
    }

    fn confirm(&mut self) -> Option<SurfaceEffect> {
        let path = self.results.get(self.selection.index())?.path.clone();
        self.dismiss();
        Some(SurfaceEffect::Navigate(path))
    }

    fn recompute(&mut self) {
        self.results = search(
            &self.catalog,
            self.pipeline.committed(),
            self.tuning.score_threshold,
            self.tuning.max_results,
        );
        self.selection.reset();
    }

    fn arm_timer(&mut self, generation: u64) {
        self.cancel_timer();
        let events = self.events.clone();
        let delay = self.tuning.debounce();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(SurfaceEvent::DebounceElapsed(generation));
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SearchSurface {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
