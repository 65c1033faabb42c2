//! Wall-clock drivers
//!
//! The session and upload types count seconds and steps but never read a
//! clock. These helpers own the tokio timers that feed them on native
//! targets; the browser build drives the same types with its own timers.

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::upload::{StagedFile, UploadError, UploadQueue, PROGRESS_STEP_MS, SUMMARY_DELAY_MS};

/// Period of every countdown
pub const TICK: Duration = Duration::from_secs(1);

/// A one-second ticker whose first tick fires a full second after creation
///
/// A late tick is delayed rather than bursted, so a stalled terminal never
/// drains several seconds from a countdown at once.
pub fn ticker() -> Interval {
    let mut ticker = tokio::time::interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Call `on_tick` once a second until it yields a value
pub async fn run_until<T, F>(mut on_tick: F) -> T
where
    F: FnMut() -> Option<T>,
{
    let mut ticker = ticker();
    loop {
        ticker.tick().await;
        if let Some(done) = on_tick() {
            return done;
        }
    }
}

/// Play back the simulated upload of every file in `queue` not yet uploaded.
///
/// `on_step` sees the file after each step is applied. Returns the number
/// of steps played.
pub async fn play_upload<F>(queue: &mut UploadQueue, mut on_step: F) -> Result<usize, UploadError>
where
    F: FnMut(&StagedFile),
{
    let plan = queue.begin_upload()?;
    let steps = plan.len();
    let delay = Duration::from_millis(PROGRESS_STEP_MS);

    tracing::debug!(steps, duration_ms = plan.duration_ms(), "Playing upload progress");

    for step in plan {
        queue.apply(step);
        if let Some(file) = queue.files().iter().find(|f| f.id == step.file_id) {
            on_step(file);
        }
        tokio::time::sleep(delay).await;
    }

    queue.finish();
    Ok(steps)
}

/// Wait between upload completion and the summary appearing
pub async fn summary_delay() {
    tokio::time::sleep(Duration::from_millis(SUMMARY_DELAY_MS)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::session::{ExamEvent, ExamSession, PracticeSession, PracticeTick};
    use crate::upload::FileCandidate;

    #[tokio::test(start_paused = true)]
    async fn test_exam_runs_for_full_duration() {
        let mut session = ExamSession::new(mock::exams());
        session.start(session.find(1).cloned().unwrap());

        let started = Instant::now();
        let ended = run_until(|| match session.tick() {
            ExamEvent::TimeUp(exam) => Some(exam),
            _ => None,
        })
        .await;

        assert_eq!(ended.id, 1);
        assert_eq!(started.elapsed(), Duration::from_secs(3600));
        assert!(!session.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_practice_timer_expires() {
        let mut session = PracticeSession::new(mock::practice_questions());
        session.start();

        let ticks = run_until({
            let mut count = 0u32;
            move || {
                count += 1;
                match session.tick() {
                    PracticeTick::TimeUp => Some(count),
                    _ => None,
                }
            }
        })
        .await;

        assert_eq!(ticks, crate::session::PRACTICE_TIME_LIMIT_SECS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_upload_marks_files_uploaded() {
        let mut queue = UploadQueue::new();
        let rejected = queue.stage(vec![
            FileCandidate::new("notes.pdf", "application/pdf", 1024),
            FileCandidate::new("slides.txt", "text/plain", 2048),
        ]);
        assert!(rejected.is_empty());

        let mut seen = Vec::new();
        let started = Instant::now();
        let steps = play_upload(&mut queue, |file| seen.push(file.progress))
            .await
            .unwrap();

        assert_eq!(steps, 22);
        assert_eq!(seen.len(), 22);
        assert_eq!(seen[10], 100);
        assert_eq!(started.elapsed(), Duration::from_millis(22 * PROGRESS_STEP_MS));
        assert!(queue.is_complete());
        assert!(queue.files().iter().all(|f| f.uploaded));
    }

    #[tokio::test]
    async fn test_play_upload_empty_queue() {
        let mut queue = UploadQueue::new();
        let result = play_upload(&mut queue, |_| {}).await;
        assert!(matches!(result, Err(UploadError::NothingToUpload)));
    }
}
