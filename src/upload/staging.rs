//! Staged files and simulated upload progress
//!
//! Nothing is actually transferred. Starting an upload produces a
//! [`ProgressPlan`]: for every file not yet uploaded, in order, progress
//! values 0, 10, ..., 100 applied [`PROGRESS_STEP_MS`] apart. The driver
//! (tokio in the CLI, gloo timers in the browser) applies each step with
//! [`UploadQueue::set_progress`] and calls [`UploadQueue::finish`] at the
//! end. The summary is revealed [`SUMMARY_DELAY_MS`] after that.

use std::collections::HashMap;

use uuid::Uuid;

use super::validation::{format_file_size, validate, FileKind};
use super::UploadError;

/// Delay between two progress steps
pub const PROGRESS_STEP_MS: u64 = 200;

/// Delay between upload completion and the summary appearing
pub const SUMMARY_DELAY_MS: u64 = 2000;

/// Progress increment per step, in percent
pub const PROGRESS_INCREMENT: u8 = 10;

/// A file offered for upload, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// A validated file waiting in the queue
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub progress: u8,
    pub uploaded: bool,
}

impl StagedFile {
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.mime)
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// One step of simulated progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub file_id: Uuid,
    pub progress: u8,
}

/// Ordered steps for one upload run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressPlan {
    steps: Vec<ProgressStep>,
}

impl ProgressPlan {
    pub fn steps(&self) -> &[ProgressStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Simulated wall time of the run
    pub fn duration_ms(&self) -> u64 {
        self.steps.len() as u64 * PROGRESS_STEP_MS
    }
}

impl IntoIterator for ProgressPlan {
    type Item = ProgressStep;
    type IntoIter = std::vec::IntoIter<ProgressStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Files staged on the upload page
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    files: Vec<StagedFile>,
    uploading: bool,
    complete: bool,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append files. Valid files are staged even when others
    /// in the same batch are rejected; the rejections are returned.
    pub fn stage<I>(&mut self, candidates: I) -> Vec<UploadError>
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        let mut rejected = Vec::new();

        for candidate in candidates {
            match validate(&candidate.mime, candidate.size) {
                Ok(()) => {
                    tracing::debug!(name = %candidate.name, size = candidate.size, "File staged");
                    self.files.push(StagedFile {
                        id: Uuid::new_v4(),
                        name: candidate.name,
                        size: candidate.size,
                        mime: candidate.mime,
                        progress: 0,
                        uploaded: false,
                    });
                }
                Err(e) => {
                    tracing::warn!(name = %candidate.name, error = %e, "File rejected");
                    rejected.push(e);
                }
            }
        }

        rejected
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Drop a staged file. Not allowed mid-upload.
    pub fn remove(&mut self, id: Uuid) -> Result<bool, UploadError> {
        if self.uploading {
            return Err(UploadError::Busy);
        }
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        Ok(self.files.len() != before)
    }

    /// Start the simulated upload and return the steps to play back
    pub fn begin_upload(&mut self) -> Result<ProgressPlan, UploadError> {
        if self.files.is_empty() {
            return Err(UploadError::NothingToUpload);
        }
        if self.uploading {
            return Err(UploadError::Busy);
        }

        self.uploading = true;

        let steps = self
            .files
            .iter()
            .filter(|f| !f.uploaded)
            .flat_map(|f| {
                (0..=100u8)
                    .step_by(PROGRESS_INCREMENT as usize)
                    .map(move |progress| ProgressStep {
                        file_id: f.id,
                        progress,
                    })
            })
            .collect();

        Ok(ProgressPlan { steps })
    }

    /// Apply one progress step. Reaching 100 marks the file uploaded.
    pub fn set_progress(&mut self, id: Uuid, progress: u8) {
        if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
            file.progress = progress.min(100);
            if file.progress == 100 {
                file.uploaded = true;
            }
        }
    }

    pub fn apply(&mut self, step: ProgressStep) {
        self.set_progress(step.file_id, step.progress);
    }

    /// End of the run
    pub fn finish(&mut self) {
        self.uploading = false;
        self.complete = true;
        tracing::info!(files = self.files.len(), "Upload complete");
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Expand/collapse state of the summary sections, keyed by section name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionToggles {
    expanded: HashMap<String, bool>,
}

impl SectionToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section key for the n-th main topic
    pub fn topic_key(index: usize) -> String {
        format!("topic-{}", index)
    }

    pub fn toggle(&mut self, section: &str) {
        let entry = self.expanded.entry(section.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Sections start collapsed
    pub fn is_expanded(&self, section: &str) -> bool {
        self.expanded.get(section).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> FileCandidate {
        FileCandidate::new(name, "application/pdf", size)
    }

    #[test]
    fn test_stage_keeps_valid_and_reports_rejected() {
        let mut queue = UploadQueue::new();
        let rejected = queue.stage(vec![
            pdf("a.pdf", 100),
            FileCandidate::new("b.png", "image/png", 100),
            pdf("c.pdf", 30 * 1024 * 1024),
            FileCandidate::new("d.txt", "text/plain", 5),
        ]);

        assert_eq!(rejected.len(), 2);
        let names: Vec<_> = queue.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "d.txt"]);
        assert_ne!(queue.files()[0].id, queue.files()[1].id);
    }

    #[test]
    fn test_remove() {
        let mut queue = UploadQueue::new();
        queue.stage(vec![pdf("a.pdf", 1), pdf("b.pdf", 2)]);
        let id = queue.files()[0].id;

        assert!(queue.remove(id).unwrap());
        assert!(!queue.remove(id).unwrap());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_remove_refused_while_uploading() {
        let mut queue = UploadQueue::new();
        queue.stage(vec![pdf("a.pdf", 1)]);
        let id = queue.files()[0].id;
        queue.begin_upload().unwrap();

        assert!(matches!(queue.remove(id), Err(UploadError::Busy)));
    }

    #[test]
    fn test_begin_upload_requires_files() {
        let mut queue = UploadQueue::new();
        assert!(matches!(queue.begin_upload(), Err(UploadError::NothingToUpload)));
    }

    #[test]
    fn test_plan_is_sequential_per_file() {
        let mut queue = UploadQueue::new();
        queue.stage(vec![pdf("a.pdf", 1), pdf("b.pdf", 2)]);
        let a = queue.files()[0].id;
        let b = queue.files()[1].id;

        let plan = queue.begin_upload().unwrap();
        assert_eq!(plan.len(), 22);
        assert_eq!(plan.duration_ms(), 4400);

        let steps = plan.steps();
        assert_eq!(steps[0], ProgressStep { file_id: a, progress: 0 });
        assert_eq!(steps[10], ProgressStep { file_id: a, progress: 100 });
        assert_eq!(steps[11], ProgressStep { file_id: b, progress: 0 });
        assert!(steps.windows(2).all(|w| w[0].file_id != w[1].file_id
            || w[1].progress == w[0].progress + PROGRESS_INCREMENT));
    }

    #[test]
    fn test_playback_marks_uploaded_and_skips_them_next_time() {
        let mut queue = UploadQueue::new();
        queue.stage(vec![pdf("a.pdf", 1)]);

        for step in queue.begin_upload().unwrap() {
            queue.apply(step);
        }
        queue.finish();
        assert!(queue.is_complete());
        assert!(!queue.is_uploading());
        assert!(queue.files()[0].uploaded);
        assert_eq!(queue.files()[0].progress, 100);

        queue.stage(vec![pdf("b.pdf", 1)]);
        let plan = queue.begin_upload().unwrap();
        assert_eq!(plan.len(), 11);
        assert!(plan.steps().iter().all(|s| s.file_id == queue.files()[1].id));
    }

    #[test]
    fn test_section_toggles() {
        let mut toggles = SectionToggles::new();
        let key = SectionToggles::topic_key(0);
        assert!(!toggles.is_expanded(&key));
        toggles.toggle(&key);
        assert!(toggles.is_expanded(&key));
        toggles.toggle(&key);
        assert!(!toggles.is_expanded(&key));
        assert!(!toggles.is_expanded("keyTerms"));
    }
}
