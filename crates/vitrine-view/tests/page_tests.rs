//! Tests for page orchestration: load policy, generation guarding,
//! scroll-driven playback, and content-update resynchronization.

use vitrine_content::ContentDocument;
use vitrine_playback::{MediaKey, PlaybackState};
use vitrine_view::{Page, SiteConfig};

/// One featured video plus one secondary video far down the page.
fn video_doc() -> ContentDocument {
    ContentDocument::from_json(
        r#"{
            "sections": [
                {
                    "title": "Featured Projects",
                    "projects": [
                        {"title": "Reel", "description": "d", "link": "l",
                         "media": "reel.mp4", "media_type": "video"}
                    ]
                },
                {
                    "title": "Links",
                    "projects": [
                        {"title": "Clip", "description": "d", "link": "l",
                         "media": "clip.mp4", "media_type": "video"}
                    ]
                }
            ]
        }"#,
    )
    .expect("document should parse")
}

/// Helper: apply a document through the generation protocol.
fn apply(page: &mut Page, doc: ContentDocument) {
    let generation = page.begin_load();
    assert!(page.apply(doc, generation));
}

/// Helper: keys of the page's registered videos, in document order.
fn video_keys(page: &Page) -> Vec<MediaKey> {
    page.tree()
        .find_all(page.root(), "video")
        .into_iter()
        .map(|id| MediaKey(id.0))
        .collect()
}

// ========== initial state and load policy ==========

#[test]
fn test_new_page_renders_chrome_with_zero_sections() {
    let page = Page::new(SiteConfig::new("https://site"));
    assert!(page.content().sections.is_empty());
    assert!(page.tree().find_all(page.root(), "section").is_empty());
    assert_eq!(page.tree().find_all(page.root(), "nav").len(), 1);
    assert!(page.playback().is_empty());
}

#[test]
fn test_failed_load_keeps_current_state() {
    // Port 1 on loopback: the fetch fails without leaving the machine.
    let mut page = Page::new(SiteConfig::new("http://127.0.0.1:1"));
    assert!(page.load().is_err());

    // The view still renders: chrome present, zero sections, no crash.
    assert!(page.content().sections.is_empty());
    assert!(page.tree().find_all(page.root(), "section").is_empty());
    assert_eq!(page.tree().find_all(page.root(), "footer").len(), 1);
}

#[test]
fn test_load_or_keep_swallows_failure() {
    let mut page = Page::new(SiteConfig::new("http://127.0.0.1:1"));
    apply(&mut page, video_doc());
    let sections_before = page.content().sections.len();

    page.load_or_keep();

    assert_eq!(page.content().sections.len(), sections_before);
}

// ========== applying content ==========

#[test]
fn test_apply_renders_sections_and_registers_videos() {
    let mut page = Page::new(SiteConfig::new("https://site"));
    apply(&mut page, video_doc());

    assert_eq!(page.content().sections.len(), 2);
    let keys = video_keys(&page);
    assert_eq!(keys.len(), 2);
    assert_eq!(page.playback().len(), 2);

    // Both videos sit in the initial viewport, so both play at once:
    // elements are independent, no one-at-a-time semantics.
    for key in &keys {
        assert_eq!(page.playback().state(*key), PlaybackState::Playing);
    }
}

#[test]
fn test_stale_generation_is_discarded() {
    let mut page = Page::new(SiteConfig::new("https://site"));

    let stale = page.begin_load();
    let current = page.begin_load();

    // The older request completes after the newer one began: ignored.
    assert!(!page.apply(video_doc(), stale));
    assert!(page.content().sections.is_empty());

    // The current request applies normally.
    assert!(page.apply(video_doc(), current));
    assert_eq!(page.content().sections.len(), 2);
}

#[test]
fn test_content_update_resyncs_the_tracked_set() {
    let mut page = Page::new(SiteConfig::new("https://site"));
    apply(&mut page, video_doc());
    let old_keys = video_keys(&page);

    // Replace the whole document with a single-section variant.
    let replacement = ContentDocument::from_json(
        r#"{"sections": [{"title": "Featured Projects", "projects": [
            {"title": "Solo", "description": "d", "link": "l",
             "media": "solo.mp4", "media_type": "video"}
        ]}]}"#,
    )
    .expect("document should parse");
    apply(&mut page, replacement);

    let new_keys = video_keys(&page);
    assert_eq!(new_keys.len(), 1);
    assert_eq!(page.playback().len(), 1);
    assert_eq!(page.playback().state(new_keys[0]), PlaybackState::Playing);

    // Stale keys from the previous render are no longer observed.
    for key in old_keys {
        if !new_keys.contains(&key) {
            assert_eq!(page.playback().state(key), PlaybackState::Unobserved);
        }
    }
}

// ========== scrolling ==========

#[test]
fn test_scrolling_gates_playback() {
    let mut page = Page::new(SiteConfig::new("https://site"));
    apply(&mut page, video_doc());
    let keys = video_keys(&page);

    // Scroll far past every card: all videos pause.
    page.scroll_to(10_000.0);
    assert!((page.scroll_y() - 10_000.0).abs() < f32::EPSILON);
    for key in &keys {
        assert_eq!(page.playback().state(*key), PlaybackState::Paused);
    }

    // Scroll back to the top: they play again.
    page.scroll_to(0.0);
    for key in &keys {
        assert_eq!(page.playback().state(*key), PlaybackState::Playing);
    }
}
