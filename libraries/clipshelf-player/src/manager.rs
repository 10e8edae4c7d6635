//! Player - core orchestration
//!
//! Owns the playback slot, the playlists and the flag registry, reads the
//! catalog, and reports every outcome through the console.

use crate::{
    console::{Console, StdConsole},
    display,
    error::{PlayerError, Result},
    events::{PlaybackStatus, PlayerEvent},
    flags::{FlagRecord, FlagRegistry},
    playlist::PlaylistBook,
    search,
    types::{PlaybackState, PlayerConfig, SearchMode, SearchResults},
};
use clipshelf_core::{Video, VideoCatalog, VideoId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Central video player
///
/// Single owner of all mutable state:
/// - Playback slot (Idle / Playing / Paused)
/// - Playlists (case-insensitive names)
/// - Moderation flags
///
/// Operations run to completion. A failed precondition leaves state
/// untouched, displays a message and returns the matching [`PlayerError`].
pub struct Player<C: Console = StdConsole> {
    // Collaborators
    catalog: Box<dyn VideoCatalog>,
    console: C,

    // State
    state: PlaybackState,
    playlists: PlaylistBook,
    flags: FlagRegistry,

    // Random selection
    rng: StdRng,

    // Event queue for callers that want structured updates
    pending_events: Vec<PlayerEvent>,
}

impl<C: Console> Player<C> {
    /// Create a new player over `catalog`
    pub fn new(catalog: Box<dyn VideoCatalog>, console: C, config: PlayerConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            console,
            state: PlaybackState::Idle,
            playlists: PlaylistBook::new(),
            flags: FlagRegistry::new(),
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Accessors =====

    /// Current playback slot
    pub fn playback_state(&self) -> &PlaybackState {
        &self.state
    }

    /// Playing (or paused) video
    pub fn playing_video(&self) -> Option<&Video> {
        self.state.video()
    }

    /// True when the playing video is paused
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Playlist collection
    pub fn playlists(&self) -> &PlaylistBook {
        &self.playlists
    }

    /// Flag registry
    pub fn flags(&self) -> &FlagRegistry {
        &self.flags
    }

    /// The catalog this player reads
    pub fn catalog(&self) -> &dyn VideoCatalog {
        self.catalog.as_ref()
    }

    /// The console this player reports to
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Consume the player, returning its console
    pub fn into_console(self) -> C {
        self.console
    }

    // ===== Library =====

    /// Report and return the number of catalog videos
    pub fn video_count(&mut self) -> usize {
        let count = self.catalog.len();
        self.console
            .display(&format!("{count} videos in the library"));
        count
    }

    /// List every catalog video sorted by title
    ///
    /// Flagged videos are listed with their reason rather than hidden.
    pub fn list_all(&mut self) -> Vec<Video> {
        let mut videos: Vec<Video> = self.catalog.get_all_videos().into_iter().cloned().collect();
        search::sort_by_title(&mut videos);

        let lines: Vec<String> = videos
            .iter()
            .map(|video| format!("  {}{}", display::video_line(video), self.flag_suffix(&video.id)))
            .collect();

        self.console.display("Here's a list of all available videos:");
        self.display_lines(lines);
        videos
    }

    // ===== Playback Control =====

    /// Play a video, stopping whatever is playing first
    pub fn play(&mut self, video_id: &str) -> Result<()> {
        // Both checks run before the current video is touched
        let video = match self
            .lookup_video(video_id)
            .and_then(|video| self.ensure_not_flagged(&video.id).map(|_| video))
        {
            Ok(video) => video,
            Err(err) => return Err(self.report(Some("Cannot play video"), err)),
        };

        self.stop_current();

        self.console
            .display(&format!("Playing video: {}", video.title));
        tracing::debug!("Playback started: {}", video.id);

        let id = video.id.clone();
        self.state = PlaybackState::Playing(video);
        self.emit(PlayerEvent::VideoStarted { video_id: id });
        self.emit_state_changed();
        Ok(())
    }

    /// Stop the playing video
    pub fn stop(&mut self) -> Result<()> {
        match self.stop_current() {
            Some(_) => Ok(()),
            None => Err(self.report(Some("Cannot stop video"), PlayerError::NothingPlaying)),
        }
    }

    /// Play a uniformly random unflagged video
    pub fn play_random(&mut self) -> Result<()> {
        let candidates: Vec<VideoId> = self
            .catalog
            .get_all_videos()
            .into_iter()
            .filter(|video| !self.flags.is_flagged(video.id.as_str()))
            .map(|video| video.id.clone())
            .collect();

        match candidates.choose(&mut self.rng) {
            Some(id) => {
                let id = id.clone();
                self.play(id.as_str())
            }
            None => Err(self.report(None, PlayerError::NoVideosAvailable)),
        }
    }

    /// Pause the playing video
    pub fn pause(&mut self) -> Result<()> {
        let check = match &self.state {
            PlaybackState::Idle => Err((Some("Cannot pause video"), PlayerError::NothingPlaying)),
            PlaybackState::Paused(video) => Err((
                None,
                PlayerError::AlreadyPaused {
                    title: video.title.clone(),
                },
            )),
            PlaybackState::Playing(_) => Ok(()),
        };
        if let Err((context, err)) = check {
            return Err(self.report(context, err));
        }

        if let PlaybackState::Playing(video) = std::mem::take(&mut self.state) {
            self.console
                .display(&format!("Pausing video: {}", video.title));
            tracing::debug!("Playback paused: {}", video.id);
            self.state = PlaybackState::Paused(video);
        }
        self.emit_state_changed();
        Ok(())
    }

    /// Continue the paused video
    pub fn resume(&mut self) -> Result<()> {
        let check = match &self.state {
            PlaybackState::Idle => Err(PlayerError::NothingPlaying),
            PlaybackState::Playing(_) => Err(PlayerError::NotPaused),
            PlaybackState::Paused(_) => Ok(()),
        };
        if let Err(err) = check {
            return Err(self.report(Some("Cannot continue video"), err));
        }

        if let PlaybackState::Paused(video) = std::mem::take(&mut self.state) {
            self.console
                .display(&format!("Continuing video: {}", video.title));
            tracing::debug!("Playback continued: {}", video.id);
            self.state = PlaybackState::Playing(video);
        }
        self.emit_state_changed();
        Ok(())
    }

    /// Report the playing video
    pub fn show_playing(&mut self) -> Result<Video> {
        let Some(video) = self.state.video().cloned() else {
            return Err(self.report(None, PlayerError::NothingPlaying));
        };

        let paused = if self.state.is_paused() { " - PAUSED" } else { "" };
        self.console.display(&format!(
            "Currently playing: {}{}",
            display::video_line(&video),
            paused
        ));
        Ok(video)
    }

    // ===== Search =====

    /// Search unflagged videos and offer to play one of the results
    ///
    /// A numeric answer in range plays that result; any other answer is
    /// taken as "no selection".
    pub fn search(&mut self, term: &str, mode: SearchMode) -> Result<SearchResults> {
        let mut matches: Vec<Video> = self
            .catalog
            .get_all_videos()
            .into_iter()
            .filter(|video| !self.flags.is_flagged(video.id.as_str()))
            .filter(|video| search::matches(video, term, mode))
            .cloned()
            .collect();
        search::sort_by_title(&mut matches);

        tracing::debug!("Search {:?} '{}' matched {} videos", mode, term, matches.len());

        if matches.is_empty() {
            self.console
                .display(&format!("No search results for {term}"));
            return Ok(SearchResults {
                matches,
                selected: None,
            });
        }

        let lines: Vec<String> = matches
            .iter()
            .enumerate()
            .map(|(index, video)| format!("  {}", display::search_result_line(index + 1, video)))
            .collect();

        self.console
            .display(&format!("Here are the results for {term}:"));
        self.display_lines(lines);
        self.console.display(
            "Would you like to play any of the above? If yes, specify the number of the video.",
        );
        self.console
            .display("If your answer is not a valid number, we will assume it's a no.");

        let selected = self
            .console
            .prompt_line()
            .and_then(|answer| search::parse_selection(&answer, matches.len()))
            .map(|index| matches[index].id.clone());

        if let Some(id) = &selected {
            self.play(id.as_str())?;
        }

        Ok(SearchResults { matches, selected })
    }

    // ===== Playlists =====

    /// Create an empty playlist
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.create(name) {
            Ok(playlist) => {
                let stored = playlist.name().to_string();
                self.console
                    .display(&format!("Successfully created new playlist: {name}"));
                tracing::info!("Playlist created: {}", stored);
                self.emit(PlayerEvent::PlaylistCreated { name: stored });
                Ok(())
            }
            Err(err) => Err(self.report(Some("Cannot create playlist"), err)),
        }
    }

    /// Append a video to a playlist
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        match self.try_add_to_playlist(name, video_id) {
            Ok(video) => {
                self.console
                    .display(&format!("Added video to {name}: {}", video.title));
                Ok(())
            }
            Err(err) => Err(self.report(Some(&format!("Cannot add video to {name}")), err)),
        }
    }

    fn try_add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Video> {
        self.playlists.require(name)?;
        let video = self.lookup_video(video_id)?;
        self.ensure_not_flagged(&video.id)?;

        let playlist = self.playlists.require_mut(name)?;
        if !playlist.push(video.id.clone()) {
            return Err(PlayerError::AlreadyInPlaylist {
                playlist: name.to_string(),
                video_id: video.id,
            });
        }

        let event = PlayerEvent::PlaylistChanged {
            name: playlist.name().to_string(),
            length: playlist.len(),
        };
        tracing::debug!("Added {} to playlist {}", video.id, playlist.name());
        self.emit(event);
        Ok(video)
    }

    /// Remove a video from a playlist
    ///
    /// Flag status is not checked; flagged videos can always be removed.
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        match self.try_remove_from_playlist(name, video_id) {
            Ok(video) => {
                self.console
                    .display(&format!("Removed video from {name}: {}", video.title));
                Ok(())
            }
            Err(err) => Err(self.report(Some(&format!("Cannot remove video from {name}")), err)),
        }
    }

    fn try_remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<Video> {
        self.playlists.require(name)?;
        let video = self.lookup_video(video_id)?;

        let playlist = self.playlists.require_mut(name)?;
        if !playlist.remove(video.id.as_str()) {
            return Err(PlayerError::NotInPlaylist {
                playlist: name.to_string(),
                video_id: video.id,
            });
        }

        let event = PlayerEvent::PlaylistChanged {
            name: playlist.name().to_string(),
            length: playlist.len(),
        };
        tracing::debug!("Removed {} from playlist {}", video.id, playlist.name());
        self.emit(event);
        Ok(video)
    }

    /// Remove every video from a playlist, returning how many were removed
    pub fn clear_playlist(&mut self, name: &str) -> Result<usize> {
        let result = self.playlists.require_mut(name).and_then(|playlist| {
            if playlist.is_empty() {
                return Err(PlayerError::PlaylistEmpty(name.to_string()));
            }
            let removed = playlist.clear();
            Ok((playlist.name().to_string(), removed))
        });

        match result {
            Ok((stored, removed)) => {
                self.console
                    .display(&format!("Successfully removed all videos from {name}"));
                tracing::debug!("Cleared {} videos from playlist {}", removed, stored);
                self.emit(PlayerEvent::PlaylistChanged {
                    name: stored,
                    length: 0,
                });
                Ok(removed)
            }
            Err(err) => Err(self.report(Some(&format!("Cannot clear playlist {name}")), err)),
        }
    }

    /// Delete a playlist
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.remove(name) {
            Ok(playlist) => {
                self.console.display(&format!("Deleted playlist: {name}"));
                tracing::info!("Playlist deleted: {}", playlist.name());
                self.emit(PlayerEvent::PlaylistDeleted {
                    name: playlist.name().to_string(),
                });
                Ok(())
            }
            Err(err) => Err(self.report(Some(&format!("Cannot delete playlist {name}")), err)),
        }
    }

    /// List playlist names, sorted ascending
    pub fn list_playlists(&mut self) -> Result<Vec<String>> {
        if self.playlists.is_empty() {
            return Err(self.report(None, PlayerError::NoPlaylists));
        }

        let names: Vec<String> = self.playlists.names().into_iter().map(str::to_string).collect();

        self.console.display("Showing all playlists:");
        self.display_lines(names.iter().map(|name| format!("  {name}")));
        Ok(names)
    }

    /// List the videos of a playlist in playlist order
    ///
    /// Flagged members are shown with their reason.
    pub fn show_playlist(&mut self, name: &str) -> Result<Vec<Video>> {
        let ids = match self.playlists.require(name) {
            Ok(playlist) => playlist.videos().to_vec(),
            Err(err) => return Err(self.report(Some(&format!("Cannot show playlist {name}")), err)),
        };

        self.console.display(&format!("Showing playlist: {name}"));

        if ids.is_empty() {
            self.console.display("  No videos here yet");
            return Ok(Vec::new());
        }

        let videos: Vec<Video> = ids
            .iter()
            .filter_map(|id| self.catalog.get_video(id.as_str()).cloned())
            .collect();
        let lines: Vec<String> = videos
            .iter()
            .map(|video| format!("  {}{}", display::video_line(video), self.flag_suffix(&video.id)))
            .collect();

        self.display_lines(lines);
        Ok(videos)
    }

    // ===== Flags =====

    /// Flag a video, stopping it if it is playing or paused
    ///
    /// A missing or empty reason is recorded as "Not supplied"; any other reason is kept verbatim.
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<()> {
        let video = match self.lookup_video(video_id).and_then(|video| {
            if self.flags.is_flagged(video.id.as_str()) {
                Err(PlayerError::AlreadyFlagged(video.id))
            } else {
                Ok(video)
            }
        }) {
            Ok(video) => video,
            Err(err) => return Err(self.report(Some("Cannot flag video"), err)),
        };

        if self.state.holds(video.id.as_str()) {
            self.stop_current();
        }

        let record = FlagRecord::new(video.id.clone(), reason);
        self.console.display(&format!(
            "Successfully flagged video: {} (reason: {})",
            video.title, record.reason
        ));
        tracing::info!("Video flagged: {} ({})", video.id, record.reason);

        let event = PlayerEvent::VideoFlagged {
            video_id: video.id,
            reason: record.reason.clone(),
        };
        self.flags.insert(record);
        self.emit(event);
        Ok(())
    }

    /// Remove the flag from a video
    ///
    /// Playback is not restored.
    pub fn allow_video(&mut self, video_id: &str) -> Result<()> {
        let video = match self.lookup_video(video_id).and_then(|video| {
            if self.flags.is_flagged(video.id.as_str()) {
                Ok(video)
            } else {
                Err(PlayerError::NotFlagged(video.id))
            }
        }) {
            Ok(video) => video,
            Err(err) => return Err(self.report(Some("Cannot remove flag from video"), err)),
        };

        self.flags.remove(video.id.as_str());
        self.console
            .display(&format!("Successfully removed flag from video: {}", video.title));
        tracing::info!("Video allowed: {}", video.id);
        self.emit(PlayerEvent::VideoUnflagged { video_id: video.id });
        Ok(())
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn lookup_video(&self, video_id: &str) -> Result<Video> {
        self.catalog
            .get_video(video_id)
            .cloned()
            .ok_or_else(|| PlayerError::VideoNotFound(VideoId::new(video_id)))
    }

    fn ensure_not_flagged(&self, video_id: &VideoId) -> Result<()> {
        match self.flags.get(video_id.as_str()) {
            Some(record) => Err(PlayerError::Flagged {
                video_id: video_id.clone(),
                reason: record.reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn flag_suffix(&self, video_id: &VideoId) -> String {
        self.flags
            .get(video_id.as_str())
            .map(display::flag_suffix)
            .unwrap_or_default()
    }

    /// Empty the playback slot, announcing the stop
    fn stop_current(&mut self) -> Option<Video> {
        let video = std::mem::take(&mut self.state).into_video()?;

        self.console
            .display(&format!("Stopping video: {}", video.title));
        tracing::debug!("Playback stopped: {}", video.id);

        self.emit(PlayerEvent::VideoStopped {
            video_id: video.id.clone(),
        });
        self.emit_state_changed();
        Some(video)
    }

    /// Display a failure and hand the error back
    fn report(&mut self, context: Option<&str>, err: PlayerError) -> PlayerError {
        let line = match context {
            Some(context) => format!("{context}: {err}"),
            None => err.to_string(),
        };
        self.console.display(&line);
        tracing::debug!("Rejected ({:?}): {}", err.kind(), line);
        err
    }

    fn display_lines<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        for line in lines {
            self.console.display(&line);
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_state_changed(&mut self) {
        let state = PlaybackStatus::from(&self.state);
        self.pending_events.push(PlayerEvent::StateChanged { state });
    }
}
