//! Top-level page orchestration: load, render, observe.
//!
//! The page holds the current content document (created once per load,
//! immutable thereafter), the view tree rendered from it, and the
//! playback controller tracking every rendered video. Applying a new
//! document re-renders the tree and resynchronizes the controller in one
//! step, so observation never straddles two generations of elements.

use vitrine_common::warning::{clear_warnings, warn_once};
use vitrine_content::{ContentDocument, ContentError, ContentLoader};
use vitrine_dom::{NodeId, ViewTree};
use vitrine_playback::PlaybackController;

use crate::media::VideoHandle;
use crate::renderer::{RenderedPage, SiteConfig, render_page};

/// A loaded, rendered, and observed page.
pub struct Page {
    config: SiteConfig,
    loader: ContentLoader,
    content: ContentDocument,
    tree: ViewTree,
    playback: PlaybackController<VideoHandle>,
    scroll_y: f32,
    generation: u64,
}

impl Page {
    /// Create a page for the given site configuration.
    ///
    /// The empty document is rendered immediately, so the page chrome is
    /// present before (and regardless of) any successful load.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let loader = ContentLoader::new(config.base_url.clone());
        let viewport = config.metrics.viewport_at(0.0);
        let mut page = Self {
            loader,
            content: ContentDocument::default(),
            tree: ViewTree::new(),
            playback: PlaybackController::new(viewport),
            scroll_y: 0.0,
            generation: 0,
            config,
        };
        page.rerender();
        page
    }

    /// Perform one best-effort load of the content document.
    ///
    /// # Errors
    ///
    /// Returns the [`ContentError`] from the failed fetch or parse. On
    /// failure the page's current state is untouched: it keeps rendering
    /// whatever document it last held (possibly the empty one).
    pub fn load(&mut self) -> Result<(), ContentError> {
        let generation = self.begin_load();
        let doc = self.loader.load()?;
        let _applied = self.apply(doc, generation);
        Ok(())
    }

    /// Load, swallowing failure per the page's error policy: a failed
    /// fetch or parse leaves the current content in place and warns.
    pub fn load_or_keep(&mut self) {
        if let Err(err) = self.load() {
            warn_once("content", &format!("{err}; keeping current content"));
        }
    }

    /// Mark the start of a load attempt, returning its generation token.
    ///
    /// Callers driving the loader themselves (rather than through
    /// [`Page::load`]) take a token before fetching and present it to
    /// [`Page::apply`] with the result.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply a fetched document if `generation` is still current.
    ///
    /// A stale completion - an older load finishing after a newer one
    /// began - is discarded rather than overwriting newer state. Returns
    /// whether the document was applied.
    pub fn apply(&mut self, doc: ContentDocument, generation: u64) -> bool {
        if generation != self.generation {
            warn_once(
                "content",
                &format!("discarding stale load (generation {generation})"),
            );
            return false;
        }
        clear_warnings();
        self.content = doc;
        self.rerender();
        true
    }

    /// Move the viewport to a vertical scroll offset, feeding the
    /// playback controller the new visibility state.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y;
        let viewport = self.config.metrics.viewport_at(y);
        self.playback.set_viewport(viewport);
    }

    /// Rebuild the view tree from the current document and hand the new
    /// media set to the controller.
    ///
    /// The deregister-all-then-register cycle happens exactly once per
    /// content update, inside a single controller call, so no visibility
    /// event can observe the set mid-replacement.
    fn rerender(&mut self) {
        let RenderedPage { tree, media } = render_page(&self.content, &self.config);
        self.tree = tree;
        self.playback
            .resync(media.into_iter().map(|b| (b.key, b.handle, b.bounds)));
    }

    /// The site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The currently held content document.
    #[must_use]
    pub fn content(&self) -> &ContentDocument {
        &self.content
    }

    /// The rendered view tree.
    #[must_use]
    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    /// Root node of the rendered view tree.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// The playback controller tracking the page's videos.
    #[must_use]
    pub fn playback(&self) -> &PlaybackController<VideoHandle> {
        &self.playback
    }

    /// Current vertical scroll offset.
    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }
}
