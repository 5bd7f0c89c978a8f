use std::fmt;

pub const STATUS_LINE: &str = "Status: Script template - functionality coming soon";
pub const INITIAL_COMMIT_NOTE: &str = "This is the initial commit. Check back for updates.";

/// The four inputs of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mp3_file: String,
    pub output: String,
    pub model: String,
    pub no_lyrics: bool,
}

impl Invocation {
    pub fn pending_stages(&self) -> Vec<Stage> {
        Stage::ALL
            .into_iter()
            .filter(|stage| !(self.no_lyrics && stage.needs_lyrics()))
            .collect()
    }
}

/// Steps of the MP3 to REAPER workflow. None of them run yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SeparateStems,
    TranscribeVocals,
    CreateProject,
    InsertLyrics,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::SeparateStems,
        Stage::TranscribeVocals,
        Stage::CreateProject,
        Stage::InsertLyrics,
    ];

    pub fn needs_lyrics(self) -> bool {
        matches!(self, Stage::TranscribeVocals | Stage::InsertLyrics)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SeparateStems => "separate stems",
            Stage::TranscribeVocals => "transcribe vocals",
            Stage::CreateProject => "create REAPER project",
            Stage::InsertLyrics => "insert lyrics",
        };
        f.write_str(name)
    }
}

/// Lines printed to stdout, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub lines: Vec<String>,
}

impl StatusReport {
    pub fn placeholder(mp3_file: &str) -> Self {
        Self {
            lines: vec![
                format!("Processing: {}", mp3_file),
                STATUS_LINE.to_string(),
                String::new(),
                INITIAL_COMMIT_NOTE.to_string(),
            ],
        }
    }
}
