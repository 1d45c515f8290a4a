//! Visibility-gated playback controller.
//!
//! [Intersection Observer](https://w3c.github.io/IntersectionObserver/)
//! [§ 4.8.11.8 Playing the media resource](https://html.spec.whatwg.org/multipage/media.html#playing-the-media-resource)
//!
//! Models the scroll-driven play/pause callback as an explicit observer
//! with a register/deregister contract. Each tracked element carries a
//! small independent state machine (`Unobserved`, observed-playing,
//! observed-paused); the viewport rectangle is the event source, and the
//! most recent intersection state wins - a last-write-wins model, not a
//! queue.
//!
//! The controller owns every registered element alongside its
//! registration, so an observation can never outlive the element it
//! targets.

use std::collections::HashMap;

use thiserror::Error;
use vitrine_common::warning::warn_once;

use crate::geometry::{Rect, intersection_ratio};

/// Minimum visible fraction of an element's area for playback.
pub const VISIBILITY_THRESHOLD: f32 = 0.25;

/// Playback refusal from the media engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// [§ 4.8.11.8](https://html.spec.whatwg.org/multipage/media.html#playing-the-media-resource)
    /// The user agent's autoplay policy refused `play()`.
    #[error("autoplay policy refused playback")]
    AutoplayBlocked,
}

/// A playable media element.
///
/// `play` may be refused (for example by an autoplay policy); `pause`
/// always succeeds. The controller swallows refusals: its promise is
/// "play while visible", not "played successfully".
pub trait MediaElement {
    /// Attempt to start playback.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] when the media engine refuses to play.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Halt playback.
    fn pause(&mut self);
}

/// Stable identity of a registered element.
///
/// The view layer uses the video node's arena index, giving each card a
/// key that is correct regardless of per-section project counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaKey(pub usize);

/// Observed playback state of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// The key is not currently registered.
    Unobserved,
    /// Registered, and at least [`VISIBILITY_THRESHOLD`] of the element
    /// is inside the viewport.
    Playing,
    /// Registered, but below the threshold - or playback was refused.
    Paused,
}

/// One tracked element: the element itself, its page bounds, and whether
/// the last visibility evaluation left it playing.
struct Tracked<M> {
    element: M,
    bounds: Rect,
    playing: bool,
}

/// Plays each registered element while it is sufficiently visible and
/// pauses it otherwise.
///
/// Elements are independent: a visibility transition for one never
/// affects another's state. All mutation happens through `&mut self`
/// methods on the single UI thread, so a full deregister-then-register
/// cycle ([`PlaybackController::resync`]) is atomic with respect to
/// incoming visibility events.
pub struct PlaybackController<M: MediaElement> {
    viewport: Rect,
    tracked: HashMap<MediaKey, Tracked<M>>,
}

impl<M: MediaElement> PlaybackController<M> {
    /// Create a controller observing the given viewport rectangle.
    #[must_use]
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            tracked: HashMap::new(),
        }
    }

    /// The viewport rectangle events are evaluated against.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    /// Whether no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Begin observing an element.
    ///
    /// The element's visibility is evaluated immediately: an element that
    /// is already at or above the threshold when registered starts
    /// playing right away, everything else starts paused. Registering an
    /// already-registered key replaces the previous registration.
    pub fn register(&mut self, key: MediaKey, element: M, bounds: Rect) {
        let mut tracked = Tracked {
            element,
            bounds,
            playing: false,
        };
        apply_visibility(key, &mut tracked, self.viewport);
        let _replaced = self.tracked.insert(key, tracked);
    }

    /// Stop observing an element and return ownership of it.
    ///
    /// Must be called before the element is destroyed; because the
    /// controller owns the element until this point, a dangling
    /// observation cannot occur. Returns `None` for unknown keys.
    pub fn deregister(&mut self, key: MediaKey) -> Option<M> {
        self.tracked.remove(&key).map(|t| t.element)
    }

    /// Replace the entire tracked set in one step.
    ///
    /// Called exactly once per content-model update: all previous
    /// registrations are dropped, then the new set is registered. As a
    /// single `&mut self` call it cannot interleave with visibility
    /// events, so no event ever observes the set mid-replacement.
    pub fn resync(&mut self, elements: impl IntoIterator<Item = (MediaKey, M, Rect)>) {
        self.tracked.clear();
        for (key, element, bounds) in elements {
            self.register(key, element, bounds);
        }
    }

    /// Feed the latest viewport rectangle (the scroll event source).
    ///
    /// Every tracked element's intersection ratio is recomputed and its
    /// state machine advanced. Repeating the same viewport is idempotent:
    /// states settle to the same values.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        for (key, tracked) in &mut self.tracked {
            apply_visibility(*key, tracked, viewport);
        }
    }

    /// Observed state of a key.
    #[must_use]
    pub fn state(&self, key: MediaKey) -> PlaybackState {
        self.tracked.get(&key).map_or(PlaybackState::Unobserved, |t| {
            if t.playing {
                PlaybackState::Playing
            } else {
                PlaybackState::Paused
            }
        })
    }

    /// Borrow a registered element.
    #[must_use]
    pub fn element(&self, key: MediaKey) -> Option<&M> {
        self.tracked.get(&key).map(|t| &t.element)
    }

    /// All tracked keys with their states, sorted by key for stable
    /// output.
    #[must_use]
    pub fn states(&self) -> Vec<(MediaKey, PlaybackState)> {
        let mut states: Vec<(MediaKey, PlaybackState)> = self
            .tracked
            .keys()
            .map(|&key| (key, self.state(key)))
            .collect();
        states.sort_by_key(|(key, _)| key.0);
        states
    }
}

/// Advance one element's state machine for the given viewport.
///
/// At or above the threshold, play is invoked (every event, matching the
/// platform observer's callback shape); below it, pause. A refused play
/// is swallowed and the element stays paused.
fn apply_visibility<M: MediaElement>(key: MediaKey, tracked: &mut Tracked<M>, viewport: Rect) {
    let ratio = intersection_ratio(tracked.bounds, viewport);
    if ratio >= VISIBILITY_THRESHOLD {
        match tracked.element.play() {
            Ok(()) => tracked.playing = true,
            Err(err) => {
                warn_once("playback", &format!("media {}: {err}", key.0));
                tracked.playing = false;
            }
        }
    } else {
        tracked.element.pause();
        tracked.playing = false;
    }
}
