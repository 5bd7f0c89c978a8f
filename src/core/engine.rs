use crate::core::{InvocationProvider, Reporter, StatusReport};
use crate::utils::error::Result;

pub struct RiftEngine<P: InvocationProvider, R: Reporter> {
    provider: P,
    reporter: R,
}

impl<P: InvocationProvider, R: Reporter> RiftEngine<P, R> {
    pub fn new(provider: P, reporter: R) -> Self {
        Self { provider, reporter }
    }

    /// Report on the invocation. Output, model and the lyrics flag are
    /// recorded but do not affect what is printed.
    pub fn run(&mut self) -> Result<()> {
        let invocation = self.provider.invocation();
        tracing::debug!(
            mp3_file = %invocation.mp3_file,
            output = %invocation.output,
            model = %invocation.model,
            no_lyrics = invocation.no_lyrics,
            "Received invocation"
        );

        let report = StatusReport::placeholder(&invocation.mp3_file);
        self.reporter.report(&report)?;

        for stage in invocation.pending_stages() {
            tracing::debug!("Not implemented yet: {}", stage);
        }
        if invocation.no_lyrics {
            tracing::debug!("Lyrics stages skipped (--no-lyrics)");
        }

        Ok(())
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
