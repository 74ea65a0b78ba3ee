//! Immersive Relaxation
//!
//! Virtual environments, guided audio sessions and the session timer.

use serde::Serialize;
use thiserror::Error;

/// Session lengths offered by the timer, in minutes
pub const SESSION_DURATIONS: [u32; 6] = [5, 10, 15, 20, 30, 45];

pub const DEFAULT_DURATION_MINUTES: u32 = 10;
pub const DEFAULT_VOLUME: u8 = 75;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Loop length as displayed; every environment loops forever
    pub duration: String,
    /// Share of users who rated it, in percent
    pub popularity: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GuidedSession {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub instructor: String,
    pub level: String,
    pub description: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("No environment selected")]
    NothingSelected,

    #[error("Unsupported session length: {0} minutes")]
    UnsupportedDuration(u32),
}

/// Local player state for the relaxation screen
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VrPlayer {
    pub environment: Option<String>,
    pub playing: bool,
    pub volume: u8,
    pub duration_minutes: u32,
    pub elapsed_seconds: u32,
}

impl Default for VrPlayer {
    fn default() -> Self {
        Self {
            environment: None,
            playing: false,
            volume: DEFAULT_VOLUME,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            elapsed_seconds: 0,
        }
    }
}

impl VrPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to another environment. Playback stops and the clock resets.
    pub fn select_environment(
        &mut self,
        environments: &[Environment],
        id: &str,
    ) -> Result<(), PlayerError> {
        let env = find_environment(environments, id)
            .ok_or_else(|| PlayerError::UnknownEnvironment(id.to_string()))?;
        self.environment = Some(env.id.clone());
        self.playing = false;
        self.elapsed_seconds = 0;
        Ok(())
    }

    /// Play/pause. Only meaningful once an environment is on screen.
    pub fn toggle_play(&mut self) -> Result<bool, PlayerError> {
        if self.environment.is_none() {
            return Err(PlayerError::NothingSelected);
        }
        self.playing = !self.playing;
        Ok(self.playing)
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }

    pub fn select_duration(&mut self, minutes: u32) -> Result<(), PlayerError> {
        if !SESSION_DURATIONS.contains(&minutes) {
            return Err(PlayerError::UnsupportedDuration(minutes));
        }
        self.duration_minutes = minutes;
        Ok(())
    }

    /// Advance the session clock while playing; stops at the chosen length
    pub fn tick(&mut self, seconds: u32) {
        if !self.playing {
            return;
        }
        let limit = self.duration_minutes * 60;
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds).min(limit);
        if self.elapsed_seconds >= limit {
            self.playing = false;
        }
    }

    pub fn elapsed_label(&self) -> String {
        format_session_time(self.elapsed_seconds)
    }
}

/// `m:ss` clock label
pub fn format_session_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn find_environment<'a>(environments: &'a [Environment], id: &str) -> Option<&'a Environment> {
    environments.iter().find(|e| e.id == id)
}

pub fn environments() -> Vec<Environment> {
    [
        ("ocean-waves", "Ocean Waves", "Peaceful beach with gentle waves and seagulls", "Nature", 95),
        ("forest-grove", "Forest Grove", "Serene woodland with birds chirping and wind through trees", "Nature", 88),
        ("mountain-peak", "Mountain Peak", "Majestic mountain vista with cool breeze and distant eagles", "Nature", 82),
        ("sunset-meadow", "Sunset Meadow", "Golden hour in a flower meadow with warm light", "Nature", 91),
        ("rain-ambiance", "Rain Ambiance", "Cozy indoor space with gentle rain on windows", "Indoor", 87),
    ]
    .into_iter()
    .map(|(id, name, description, category, popularity)| Environment {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        duration: "∞".to_string(),
        popularity,
    })
    .collect()
}

pub fn guided_sessions() -> Vec<GuidedSession> {
    [
        ("breathing-basics", "Deep Breathing Basics", "5 min", "Dr. Sarah Chen", "Beginner", "Learn fundamental breathing techniques for instant calm"),
        ("body-scan", "Progressive Body Scan", "15 min", "Michael Torres", "Intermediate", "Release tension through guided body awareness"),
        ("mindful-meditation", "Mindful Meditation", "20 min", "Dr. Emma Wilson", "All Levels", "Cultivate present-moment awareness and peace"),
    ]
    .into_iter()
    .map(|(id, title, duration, instructor, level, description)| GuidedSession {
        id: id.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
        instructor: instructor.to_string(),
        level: level.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct VrView {
    pub environments: Vec<Environment>,
    pub guided_sessions: Vec<GuidedSession>,
    pub durations: Vec<u32>,
    pub player: VrPlayer,
}

pub fn view() -> VrView {
    VrView {
        environments: environments(),
        guided_sessions: guided_sessions(),
        durations: SESSION_DURATIONS.to_vec(),
        player: VrPlayer::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_session_time() {
        assert_eq!(format_session_time(0), "0:00");
        assert_eq!(format_session_time(65), "1:05");
        assert_eq!(format_session_time(600), "10:00");
        assert_eq!(format_session_time(2701), "45:01");
    }

    #[test]
    fn test_player_defaults() {
        let player = VrPlayer::new();
        assert!(player.environment.is_none());
        assert!(!player.playing);
        assert_eq!(player.volume, 75);
        assert_eq!(player.duration_minutes, 10);
    }

    #[test]
    fn test_toggle_requires_environment() {
        let mut player = VrPlayer::new();
        assert_eq!(player.toggle_play(), Err(PlayerError::NothingSelected));

        player.select_environment(&environments(), "rain-ambiance").unwrap();
        assert_eq!(player.toggle_play(), Ok(true));
        assert_eq!(player.toggle_play(), Ok(false));
    }

    #[test]
    fn test_switching_environment_resets() {
        let envs = environments();
        let mut player = VrPlayer::new();
        player.select_environment(&envs, "ocean-waves").unwrap();
        player.toggle_play().unwrap();
        player.tick(30);
        assert_eq!(player.elapsed_label(), "0:30");

        player.select_environment(&envs, "forest-grove").unwrap();
        assert!(!player.playing);
        assert_eq!(player.elapsed_seconds, 0);

        assert!(matches!(
            player.select_environment(&envs, "moon-base"),
            Err(PlayerError::UnknownEnvironment(_))
        ));
        assert_eq!(player.environment.as_deref(), Some("forest-grove"));
    }

    #[test]
    fn test_tick_stops_at_duration() {
        let mut player = VrPlayer::new();
        player.select_environment(&environments(), "mountain-peak").unwrap();
        player.select_duration(5).unwrap();
        player.toggle_play().unwrap();

        player.tick(299);
        assert!(player.playing);
        player.tick(10);
        assert_eq!(player.elapsed_seconds, 300);
        assert!(!player.playing);

        // paused clock does not move
        player.tick(10);
        assert_eq!(player.elapsed_seconds, 300);
    }

    #[test]
    fn test_duration_and_volume() {
        let mut player = VrPlayer::new();
        assert_eq!(player.select_duration(7), Err(PlayerError::UnsupportedDuration(7)));
        assert_eq!(player.duration_minutes, 10);

        player.set_volume(250);
        assert_eq!(player.volume, 100);
        player.set_volume(0);
        assert_eq!(player.volume, 0);
    }
}
