//! Tests for the view renderer: region placement, media dispatch, URL
//! resolution, and chrome.

use vitrine_content::ContentDocument;
use vitrine_dom::{NodeId, ViewTree};
use vitrine_view::{RenderedPage, SiteConfig, render_page};

/// The two-section scenario document: one featured section with a
/// relative image, one secondary section with an absolute image.
fn scenario_doc() -> ContentDocument {
    ContentDocument::from_json(
        r#"{
            "sections": [
                {
                    "title": "Featured Projects",
                    "projects": [
                        {"title": "A", "description": "a", "link": "https://a.example",
                         "media": "x.png", "media_type": "image"}
                    ]
                },
                {
                    "title": "Links",
                    "projects": [
                        {"title": "B", "description": "b", "link": "https://b.example",
                         "media": "http://e.com/y.png", "media_type": "image"}
                    ]
                }
            ]
        }"#,
    )
    .expect("scenario document should parse")
}

fn render(doc: &ContentDocument) -> RenderedPage {
    render_page(doc, &SiteConfig::new("https://site"))
}

/// Helper: all elements under `root` whose class list contains `class`.
fn find_by_class(tree: &ViewTree, class: &str) -> Vec<NodeId> {
    tree.descendants(tree.root())
        .filter(|&id| tree.as_element(id).is_some_and(|e| e.has_class(class)))
        .collect()
}

/// Helper: `src` attributes of all card media images, in document order.
fn card_image_srcs(tree: &ViewTree) -> Vec<String> {
    tree.find_all(tree.root(), "img")
        .into_iter()
        .filter_map(|id| {
            let element = tree.as_element(id)?;
            if element.has_class("card-media") {
                element.attr("src").map(String::from)
            } else {
                None
            }
        })
        .collect()
}

// ========== region placement ==========

#[test]
fn test_featured_and_secondary_regions() {
    let page = render(&scenario_doc());
    let tree = &page.tree;

    let featured = find_by_class(tree, "featured-section");
    assert_eq!(featured.len(), 1);
    let heading = tree.find_all(featured[0], "h2");
    assert_eq!(tree.text_content(heading[0]), "Featured Projects");

    let secondary = find_by_class(tree, "secondary-section");
    assert_eq!(secondary.len(), 1);
    let heading = tree.find_all(secondary[0], "h2");
    assert_eq!(tree.text_content(heading[0]), "Links");
}

#[test]
fn test_media_urls_resolved_per_region() {
    let page = render(&scenario_doc());
    // Relative media resolves against the base; absolute passes through.
    assert_eq!(
        card_image_srcs(&page.tree),
        ["https://site/x.png", "http://e.com/y.png"]
    );
}

#[test]
fn test_mistitled_featured_section_lands_secondary() {
    let doc = ContentDocument::from_json(
        r#"{"sections": [{"title": "featured projects", "projects": []}]}"#,
    )
    .expect("document should parse");
    let page = render(&doc);
    assert!(find_by_class(&page.tree, "featured-section").is_empty());
    assert_eq!(find_by_class(&page.tree, "secondary-section").len(), 1);
}

// ========== media dispatch ==========

fn single_project_doc(media: &str, media_type_json: &str) -> ContentDocument {
    ContentDocument::from_json(&format!(
        r#"{{"sections": [{{"title": "Featured Projects", "projects": [
            {{"title": "P", "description": "d", "link": "l",
             "media": "{media}"{media_type_json}}}
        ]}}]}}"#
    ))
    .expect("document should parse")
}

#[test]
fn test_video_media_renders_video_element_and_binding() {
    let page = render(&single_project_doc("clip.mp4", r#", "media_type": "video""#));
    let videos = page.tree.find_all(page.tree.root(), "video");
    assert_eq!(videos.len(), 1);

    let element = page.tree.as_element(videos[0]).expect("video element");
    assert_eq!(element.attr("src"), Some("https://site/clip.mp4"));
    assert_eq!(element.attr("muted"), Some(""));
    assert_eq!(element.attr("loop"), Some(""));

    // The binding carries the node's identity and a muted handle.
    assert_eq!(page.media.len(), 1);
    let binding = &page.media[0];
    assert_eq!(binding.key.0, videos[0].0);
    assert_eq!(binding.handle.node(), videos[0]);
    assert!(binding.handle.is_muted());
    assert_eq!(binding.handle.src(), "https://site/clip.mp4");
}

#[test]
fn test_fontawesome_media_renders_icon() {
    let page = render(&single_project_doc(
        "fas fa-rocket",
        r#", "media_type": "fontawesome""#,
    ));
    let icons = page.tree.find_all(page.tree.root(), "i");
    let rocket = icons
        .iter()
        .find(|&&id| page.tree.as_element(id).is_some_and(|e| e.has_class("fa-rocket")));
    assert!(rocket.is_some());
    assert!(page.media.is_empty());
}

#[test]
fn test_unrecognized_media_type_renders_image() {
    let page = render(&single_project_doc(
        "mystery.bin",
        r#", "media_type": "unknown-value""#,
    ));
    assert!(page.tree.find_all(page.tree.root(), "video").is_empty());
    assert_eq!(card_image_srcs(&page.tree), ["https://site/mystery.bin"]);
}

#[test]
fn test_absent_media_type_renders_image() {
    let page = render(&single_project_doc("plain.png", ""));
    assert_eq!(card_image_srcs(&page.tree), ["https://site/plain.png"]);
}

// ========== github affordance ==========

#[test]
fn test_github_link_rendered_when_present() {
    let doc = ContentDocument::from_json(
        r#"{"sections": [{"title": "Featured Projects", "projects": [
            {"title": "P", "description": "d", "link": "l", "media": "m.png",
             "github": "https://github.com/example/p"}
        ]}]}"#,
    )
    .expect("document should parse");
    let page = render(&doc);

    let links = find_by_class(&page.tree, "github-link");
    assert_eq!(links.len(), 1);
    let element = page.tree.as_element(links[0]).expect("github anchor");
    assert_eq!(element.attr("href"), Some("https://github.com/example/p"));
}

#[test]
fn test_no_github_affordance_when_absent() {
    let page = render(&scenario_doc());
    assert!(find_by_class(&page.tree, "github-link").is_empty());
}

// ========== chrome ==========

#[test]
fn test_empty_document_renders_chrome_and_zero_sections() {
    let page = render(&ContentDocument::default());
    let tree = &page.tree;

    assert!(tree.find_all(tree.root(), "section").is_empty());
    assert_eq!(tree.find_all(tree.root(), "nav").len(), 1);
    assert_eq!(tree.find_all(tree.root(), "footer").len(), 1);
    assert!(page.media.is_empty());
}

#[test]
fn test_login_link_is_decorative() {
    let page = render(&ContentDocument::default());
    let tree = &page.tree;

    let disabled = find_by_class(tree, "nav-disabled");
    assert_eq!(disabled.len(), 1);
    let element = tree.as_element(disabled[0]).expect("login anchor");
    assert_eq!(element.attr("href"), None);
    assert_eq!(tree.text_content(disabled[0]), "Log In");
}

#[test]
fn test_footer_carries_brand_name() {
    let mut config = SiteConfig::new("https://site");
    config.site_name = "Goblin Powered".to_string();
    let page = render_page(&ContentDocument::default(), &config);
    let tree = &page.tree;

    let footers = tree.find_all(tree.root(), "footer");
    assert!(tree.text_content(footers[0]).contains("Goblin Powered"));
}
