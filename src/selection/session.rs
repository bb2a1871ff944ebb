//! Player session combining circular navigation and diverse shuffle.

use tracing::debug;

use crate::{
    catalog::VideoRecord,
    selection::{
        navigation::{index_of, next_index, prev_index},
        shuffle::{RandomSource, ShuffleHistory, pick_diverse},
    },
};

/// Single-owner playback session over an ordered queue of videos.
///
/// The `PlayerSession` tracks the current video by catalog id, handles
/// prev/next navigation with wraparound, and owns the shuffle history used
/// when shuffle is enabled. It is not meant to be shared between sessions.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    /// Ordered videos available for playback.
    queue: Vec<VideoRecord>,
    /// Catalog id of the current video.
    current_id: Option<u64>,
    /// Whether `next` picks randomly instead of stepping forward.
    shuffle: bool,
    /// Recently played ids, used to avoid repeats while shuffling.
    history: ShuffleHistory<u64>,
    /// Requested shuffle window before clamping to the queue size.
    configured_window: usize,
}

impl PlayerSession {
    /// Creates an empty session.
    ///
    /// # Arguments
    ///
    /// * `shuffle_window` - Preferred number of recent picks to avoid
    #[must_use]
    pub fn new(shuffle_window: usize) -> Self {
        Self {
            queue: Vec::new(),
            current_id: None,
            shuffle: false,
            history: ShuffleHistory::new(0),
            configured_window: shuffle_window,
        }
    }

    /// Sets a new queue, replacing any existing one.
    ///
    /// The current video is kept if it is still present, otherwise the first
    /// video becomes current. The shuffle history starts over.
    pub fn set_queue(&mut self, videos: Vec<VideoRecord>) {
        debug!("PlayerSession: Setting new queue with {} videos", videos.len());

        let window = ShuffleHistory::<u64>::window_for(videos.len(), self.configured_window);
        self.history = ShuffleHistory::new(window);
        self.queue = videos;

        if index_of(self.current_id.as_ref(), &self.queue, |v| v.id).is_none() {
            self.current_id = self.queue.first().map(|v| v.id);
        }
        if let Some(id) = self.current_id {
            self.history.push(id);
        }
    }

    /// Gets the queue in play order.
    #[must_use]
    pub fn queue(&self) -> &[VideoRecord] {
        &self.queue
    }

    /// Gets the current video.
    #[must_use]
    pub fn current(&self) -> Option<&VideoRecord> {
        let index = index_of(self.current_id.as_ref(), &self.queue, |v| v.id)?;
        self.queue.get(index)
    }

    /// Makes the video with `id` current.
    ///
    /// # Returns
    ///
    /// `true` if the id is in the queue.
    pub fn select(&mut self, id: u64) -> bool {
        if index_of(Some(&id), &self.queue, |v| v.id).is_none() {
            debug!("PlayerSession: Video {id} is not in the queue");
            return false;
        }
        self.current_id = Some(id);
        self.history.push(id);
        true
    }

    /// Enables or disables shuffle.
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    /// Checks whether shuffle is enabled.
    #[must_use]
    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    /// Gets the shuffle history.
    #[must_use]
    pub fn history(&self) -> &ShuffleHistory<u64> {
        &self.history
    }

    /// Advances to the next video.
    ///
    /// With shuffle enabled the next video is a diverse random pick; otherwise it
    /// is the following queue entry, wrapping to the start.
    pub fn next<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> Option<&VideoRecord> {
        let next_id = if self.shuffle {
            pick_diverse(&self.queue, &mut self.history, |v| v.id, random).map(|v| v.id)
        } else {
            let current = index_of(self.current_id.as_ref(), &self.queue, |v| v.id);
            let next = next_index(current, self.queue.len())?;
            let id = self.queue[next].id;
            self.history.push(id);
            Some(id)
        };

        self.current_id = next_id;
        self.current()
    }

    /// Steps back to the previous queue entry, wrapping to the end.
    pub fn previous(&mut self) -> Option<&VideoRecord> {
        let current = index_of(self.current_id.as_ref(), &self.queue, |v| v.id);
        let prev = prev_index(current, self.queue.len())?;
        let id = self.queue[prev].id;
        self.history.push(id);
        self.current_id = Some(id);
        self.current()
    }
}
