//! Startup gate that holds the page back until its images have settled.
//!
//! Two paths lead to readiness and they race: every image settles (loaded or
//! failed) and then a short grace delay passes, or the ceiling timer started
//! at activation fires. Whichever arrives first reveals the page; the other is
//! a no-op.

/// How an image request ended. Both count toward completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOutcome {
    Loaded,
    Failed,
}

/// Which path revealed the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyReason {
    AllSettled,
    Ceiling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadProgress {
    total_assets: usize,
    loaded_or_failed: usize,
    is_done: bool,
}

impl LoadProgress {
    pub fn new(total_assets: usize) -> Self {
        Self { total_assets, loaded_or_failed: 0, is_done: false }
    }

    /// Count one settled asset. Returns true on the call that completes the set.
    /// Extra reports past the total are ignored.
    pub fn record(&mut self) -> bool {
        if self.loaded_or_failed >= self.total_assets {
            return false;
        }
        self.loaded_or_failed += 1;
        self.loaded_or_failed == self.total_assets
    }

    pub fn is_complete(&self) -> bool {
        self.loaded_or_failed == self.total_assets
    }

    pub fn mark_done(&mut self) {
        self.is_done = true;
    }

    pub fn total_assets(&self) -> usize {
        self.total_assets
    }

    pub fn loaded_or_failed(&self) -> usize {
        self.loaded_or_failed
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadGate {
    progress: LoadProgress,
    failed: usize,
    reason: Option<ReadyReason>,
}

impl PreloadGate {
    pub fn new(total_assets: usize) -> Self {
        Self { progress: LoadProgress::new(total_assets), failed: 0, reason: None }
    }

    /// Record one image. Returns true when this was the last one outstanding,
    /// which is the caller's cue to start the grace delay.
    pub fn settle(&mut self, outcome: AssetOutcome) -> bool {
        let completed = self.progress.record();
        if outcome == AssetOutcome::Failed {
            self.failed += 1;
            log::debug!("preload asset failed, counted as settled");
        }
        completed
    }

    /// Open the gate. Only the first call has any effect; returns whether it did.
    pub fn reveal(&mut self, reason: ReadyReason) -> bool {
        if self.progress.is_done() {
            return false;
        }
        self.progress.mark_done();
        self.reason = Some(reason);
        log::info!(
            "preload ready via {:?} ({}/{} settled, {} failed)",
            reason,
            self.progress.loaded_or_failed(),
            self.progress.total_assets(),
            self.failed
        );
        true
    }

    /// True when there is nothing left to wait for, including the empty case.
    pub fn all_settled(&self) -> bool {
        self.progress.is_complete()
    }

    pub fn is_ready(&self) -> bool {
        self.progress.is_done()
    }

    pub fn reason(&self) -> Option<ReadyReason> {
        self.reason
    }

    pub fn progress(&self) -> &LoadProgress {
        &self.progress
    }
}
