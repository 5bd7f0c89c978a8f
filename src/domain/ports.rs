use crate::domain::model::{Invocation, StatusReport};
use crate::utils::error::Result;

pub trait InvocationProvider {
    fn mp3_file(&self) -> &str;
    fn output(&self) -> &str;
    fn model(&self) -> &str;
    fn no_lyrics(&self) -> bool;

    fn invocation(&self) -> Invocation {
        Invocation {
            mp3_file: self.mp3_file().to_string(),
            output: self.output().to_string(),
            model: self.model().to_string(),
            no_lyrics: self.no_lyrics(),
        }
    }
}

pub trait Reporter {
    fn report(&mut self, report: &StatusReport) -> Result<()>;
}

impl InvocationProvider for Invocation {
    fn mp3_file(&self) -> &str {
        &self.mp3_file
    }

    fn output(&self) -> &str {
        &self.output
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn no_lyrics(&self) -> bool {
        self.no_lyrics
    }
}
