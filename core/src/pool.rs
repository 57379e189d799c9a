//! Fixed-size worker pool.
//!
//! `workers` tokio tasks pull `(index, job)` pairs off a shared queue and
//! send `(index, output)` back to the caller, which owns one slot per job.
//! Workers never observe each other's output, and the returned vector is
//! indexed like the input no matter in which order jobs complete.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::error;

#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// A pool running at most `workers` jobs at once. Zero is bumped to one.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `task` over every job and returns the outputs in job order.
    ///
    /// `on_complete` is invoked on the calling task once per job, in completion
    /// order, with `None` for a job that panicked. A panic is contained to its
    /// own job: the worker keeps draining the queue and only that slot stays
    /// `None`.
    pub async fn run<J, T, F, Fut>(
        &self,
        jobs: Vec<J>,
        task: F,
        mut on_complete: impl FnMut(Option<&T>),
    ) -> Vec<Option<T>>
    where
        J: Send + 'static,
        T: Send + 'static,
        F: Fn(J) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let total = jobs.len();
        let mut slots: Vec<Option<T>> = (0..total).map(|_| None).collect();
        if total == 0 {
            return slots;
        }

        let (job_tx, job_rx) = mpsc::unbounded_channel::<(usize, J)>();
        for (idx, job) in jobs.into_iter().enumerate() {
            // The receiver is alive until the workers below drop it.
            let _ = job_tx.send((idx, job));
        }
        drop(job_tx);

        let queue = Arc::new(Mutex::new(job_rx));
        let task = Arc::new(task);
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(usize, Option<T>)>();

        let mut workers: JoinSet<()> = JoinSet::new();
        for _ in 0..self.workers.min(total) {
            let queue = Arc::clone(&queue);
            let task = Arc::clone(&task);
            let done_tx = done_tx.clone();
            workers.spawn(async move {
                loop {
                    let next = queue.lock().await.recv().await;
                    let Some((idx, job)) = next else { break };
                    let output = match tokio::spawn(task(job)).await {
                        Ok(output) => Some(output),
                        Err(e) => {
                            error!("job {idx} terminated abnormally: {e}");
                            None
                        }
                    };
                    if done_tx.send((idx, output)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(done_tx);

        while let Some((idx, output)) = done_rx.recv().await {
            on_complete(output.as_ref());
            slots[idx] = output;
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!("worker terminated abnormally: {e}");
            }
        }

        slots
    }
}
