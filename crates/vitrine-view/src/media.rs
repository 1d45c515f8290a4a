//! DOM-attachable video element handles.
//!
//! [§ 4.8.9 The video element](https://html.spec.whatwg.org/multipage/media.html#the-video-element)

use vitrine_dom::NodeId;
use vitrine_playback::{MediaElement, PlaybackError};

/// Handle to a rendered `<video>` element.
///
/// The playback controller owns the handle alongside its registration, so
/// an observation can never target a destroyed element. Playback state
/// lives on the handle; the view tree node only carries the element's
/// structure (tag and attributes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHandle {
    node: NodeId,
    src: String,
    muted: bool,
    playing: bool,
}

impl VideoHandle {
    /// Create a handle for the video element at `node`.
    #[must_use]
    pub fn new(node: NodeId, src: impl Into<String>, muted: bool) -> Self {
        Self {
            node,
            src: src.into(),
            muted,
            playing: false,
        }
    }

    /// The view tree node this handle controls.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Resolved source URL of the video.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Whether the element is muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether the element is currently playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl MediaElement for VideoHandle {
    /// [§ 4.8.11.8 Playing the media resource](https://html.spec.whatwg.org/multipage/media.html#playing-the-media-resource)
    ///
    /// User agents deny un-gestured playback of audible media; muted
    /// inline video is the allowed case. The renderer always emits muted
    /// videos, so refusal only occurs for handles constructed otherwise.
    fn play(&mut self) -> Result<(), PlaybackError> {
        if !self.muted {
            return Err(PlaybackError::AutoplayBlocked);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }
}
