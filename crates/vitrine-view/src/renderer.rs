//! View renderer: content model to view tree.
//!
//! Composes the partitioned content into two layout regions. The featured
//! region is a grid of full cards; the secondary region is a vertically
//! stacked compact list of the same fields at smaller scale. Card media
//! is a three-way dispatch on the media kind, with the static image as
//! the landing spot for anything unrecognized (the parse already degraded
//! unknown kinds to [`MediaKind::Image`], so a malformed card renders as
//! a placeholder instead of crashing).
//!
//! Every `<video>` element is reported back as a [`MediaBinding`] so the
//! page can hand it to the playback controller the moment it exists.

use vitrine_common::url::resolve_media_url;
use vitrine_content::{ContentDocument, MediaKind, Project, Section, partition_sections};
use vitrine_dom::{ElementData, NodeId, ViewTree};
use vitrine_playback::{MediaKey, Rect};

use crate::layout::LayoutMetrics;
use crate::media::VideoHandle;

/// Static configuration for one rendered site.
///
/// Chosen by the embedding environment and passed in explicitly; the
/// renderer keeps no ambient global state.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site base URL; the empty string selects the same-origin
    /// deployment mode.
    pub base_url: String,
    /// Brand name shown in the navigation bar and footer.
    pub site_name: String,
    /// Fixed layout metrics for card placement.
    pub metrics: LayoutMetrics,
}

impl SiteConfig {
    /// Configuration for the given base URL with default branding and
    /// metrics.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            site_name: "Vitrine".to_string(),
            metrics: LayoutMetrics::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("")
    }
}

/// A rendered video element awaiting registration with the playback
/// controller.
#[derive(Debug, Clone)]
pub struct MediaBinding {
    /// Stable identity of the element (its view tree node index).
    pub key: MediaKey,
    /// The DOM-attachable handle the controller will own.
    pub handle: VideoHandle,
    /// Page-coordinate bounds of the element.
    pub bounds: Rect,
}

/// Output of one render pass.
#[derive(Debug)]
pub struct RenderedPage {
    /// The emitted view tree.
    pub tree: ViewTree,
    /// Every video element in the tree, in document order.
    pub media: Vec<MediaBinding>,
}

/// Render a content document into a page.
///
/// Pure with respect to the document: rendering never mutates content,
/// and an empty document still renders the page chrome (navigation bar
/// and footer) around zero sections.
#[must_use]
pub fn render_page(doc: &ContentDocument, config: &SiteConfig) -> RenderedPage {
    Renderer {
        config,
        tree: ViewTree::new(),
        media: Vec::new(),
    }
    .render(doc)
}

struct Renderer<'a> {
    config: &'a SiteConfig,
    tree: ViewTree,
    media: Vec<MediaBinding>,
}

impl Renderer<'_> {
    fn render(mut self, doc: &ContentDocument) -> RenderedPage {
        let partition = partition_sections(doc);
        let root = self.tree.root();

        self.render_nav(root);

        let content = self.element(root, ElementData::new("div").with_attr("class", "content"));
        let featured_region = self.element(
            content,
            ElementData::new("div").with_attr("class", "featured-region"),
        );
        let secondary_region = self.element(
            content,
            ElementData::new("div").with_attr("class", "secondary-region"),
        );

        let mut featured_y = self.config.metrics.nav_height;
        for section in partition.featured {
            featured_y = self.render_featured_section(featured_region, section, featured_y);
        }

        let mut secondary_y = self.config.metrics.nav_height;
        for section in partition.secondary {
            secondary_y = self.render_secondary_section(secondary_region, section, secondary_y);
        }

        self.render_footer(root);

        RenderedPage {
            tree: self.tree,
            media: self.media,
        }
    }

    /// Fixed page chrome: brand link plus Home, About, and the decorative
    /// (deliberately inert) Log In link.
    fn render_nav(&mut self, root: NodeId) {
        let nav = self.element(root, ElementData::new("nav").with_attr("class", "navbar"));

        let brand = self.element(
            nav,
            ElementData::new("a")
                .with_attr("class", "brand")
                .with_attr("href", "#"),
        );
        let _logo = self.element(
            brand,
            ElementData::new("img")
                .with_attr("class", "brand-logo")
                .with_attr("src", "logo192.png")
                .with_attr("alt", "Logo"),
        );
        let site_name = self.config.site_name.clone();
        self.text(brand, &site_name);

        let links = self.element(nav, ElementData::new("div").with_attr("class", "nav-links"));
        self.nav_link(links, "Home", Some("#"));
        self.nav_link(links, "About", Some("#"));
        // No authentication: the Log In link has no target.
        self.nav_link(links, "Log In", None);
    }

    fn nav_link(&mut self, parent: NodeId, label: &str, href: Option<&str>) {
        let mut data = ElementData::new("a");
        data = match href {
            Some(target) => data.with_attr("class", "nav-link").with_attr("href", target),
            None => data.with_attr("class", "nav-link nav-disabled"),
        };
        let link = self.element(parent, data);
        self.text(link, label);
    }

    fn render_footer(&mut self, root: NodeId) {
        let footer = self.element(root, ElementData::new("footer").with_attr("class", "footer"));
        let line = self.element(footer, ElementData::new("p"));
        self.text(
            line,
            &format!("© 2024 {}. All rights reserved.", self.config.site_name),
        );
    }

    /// Render one featured section as a heading plus a card grid; returns
    /// the vertical cursor below the section.
    fn render_featured_section(&mut self, region: NodeId, section: &Section, y: f32) -> f32 {
        let metrics = self.config.metrics.clone();
        let node = self.element(
            region,
            ElementData::new("section").with_attr("class", "featured-section"),
        );
        self.heading(node, "h2", &section.title);

        let grid = self.element(
            node,
            ElementData::new("div").with_attr("class", "featured-grid"),
        );
        let grid_top = y + metrics.heading_height;
        for (index, project) in section.projects.iter().enumerate() {
            let bounds = metrics.featured_card_rect(grid_top, index);
            self.render_featured_card(grid, project, bounds);
        }

        grid_top + metrics.featured_grid_height(section.projects.len())
    }

    fn render_featured_card(&mut self, grid: NodeId, project: &Project, bounds: Rect) {
        let card = self.element(
            grid,
            ElementData::new("div").with_attr("class", "project-card"),
        );
        let link = self.element(
            card,
            ElementData::new("a")
                .with_attr("class", "card-link")
                .with_attr("href", &project.link),
        );
        self.render_media(link, project, bounds);

        let body = self.element(card, ElementData::new("div").with_attr("class", "card-body"));
        self.heading(body, "h3", &project.title);
        let description = self.element(
            body,
            ElementData::new("p").with_attr("class", "card-description"),
        );
        self.text(description, &project.description);
        self.render_github_link(body, project);
    }

    /// Render one secondary section as a heading plus compact rows;
    /// returns the vertical cursor below the section.
    fn render_secondary_section(&mut self, region: NodeId, section: &Section, y: f32) -> f32 {
        let metrics = self.config.metrics.clone();
        let node = self.element(
            region,
            ElementData::new("section").with_attr("class", "secondary-section"),
        );
        self.heading(node, "h2", &section.title);

        let list = self.element(
            node,
            ElementData::new("div").with_attr("class", "section-list"),
        );
        let mut row_y = y + metrics.heading_height;
        for project in &section.projects {
            let row = metrics.secondary_row_rect(row_y);
            self.render_secondary_row(list, project, row);
            row_y += metrics.secondary_row_height + metrics.gap;
        }
        row_y
    }

    fn render_secondary_row(&mut self, list: NodeId, project: &Project, row: Rect) {
        let metrics = self.config.metrics.clone();
        let card = self.element(
            list,
            ElementData::new("div").with_attr("class", "project-row"),
        );
        let link = self.element(
            card,
            ElementData::new("a")
                .with_attr("class", "card-link")
                .with_attr("href", &project.link),
        );

        // The media thumbnail occupies a small square at the row's left
        // edge; that square is what visibility is evaluated against.
        let thumb = Rect::new(row.x, row.y, metrics.secondary_thumb_size, metrics.secondary_thumb_size);
        self.render_media(link, project, thumb);

        let body = self.element(link, ElementData::new("div").with_attr("class", "row-body"));
        self.heading(body, "h3", &project.title);
        let description = self.element(
            body,
            ElementData::new("p").with_attr("class", "row-description"),
        );
        self.text(description, &project.description);
        self.render_github_link(body, project);
    }

    /// Three-way media dispatch for one card.
    fn render_media(&mut self, parent: NodeId, project: &Project, bounds: Rect) {
        match project.media_type {
            MediaKind::Video => {
                let src = resolve_media_url(&project.media, &self.config.base_url);
                let node = self.element(
                    parent,
                    ElementData::new("video")
                        .with_attr("class", "card-media")
                        .with_attr("src", src.as_str())
                        .with_attr("muted", "")
                        .with_attr("loop", "")
                        .with_attr("autoplay", ""),
                );
                self.media.push(MediaBinding {
                    key: MediaKey(node.0),
                    handle: VideoHandle::new(node, src, true),
                    bounds,
                });
            }
            MediaKind::Fontawesome => {
                let wrap = self.element(
                    parent,
                    ElementData::new("div").with_attr("class", "icon-media"),
                );
                let _icon = self.element(
                    wrap,
                    ElementData::new("i").with_attr("class", &project.media),
                );
            }
            MediaKind::Image => {
                let src = resolve_media_url(&project.media, &self.config.base_url);
                let _img = self.element(
                    parent,
                    ElementData::new("img")
                        .with_attr("class", "card-media")
                        .with_attr("src", src)
                        .with_attr("alt", &project.title),
                );
            }
        }
    }

    /// Optional GitHub affordance: rendered only when the project carries
    /// a repository link.
    fn render_github_link(&mut self, body: NodeId, project: &Project) {
        let Some(github) = &project.github else {
            return;
        };
        let wrap = self.element(
            body,
            ElementData::new("div").with_attr("class", "card-github"),
        );
        let link = self.element(
            wrap,
            ElementData::new("a")
                .with_attr("class", "github-link")
                .with_attr("href", github),
        );
        let _icon = self.element(
            link,
            ElementData::new("i").with_attr("class", "fab fa-github"),
        );
    }

    // ----- small tree-building helpers -----

    fn element(&mut self, parent: NodeId, data: ElementData) -> NodeId {
        let id = self.tree.alloc_element(data);
        self.tree.append_child(parent, id);
        id
    }

    fn text(&mut self, parent: NodeId, text: &str) {
        let id = self.tree.alloc_text(text);
        self.tree.append_child(parent, id);
    }

    fn heading(&mut self, parent: NodeId, level: &str, text: &str) {
        let node = self.element(
            parent,
            ElementData::new(level).with_attr("class", "section-heading"),
        );
        self.text(node, text);
    }
}
