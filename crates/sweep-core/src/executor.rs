use crate::error::Error;
use rayon::prelude::*;
use rayon::ThreadPool;

/// One unit of entry-processing work. Jobs return a preview string in dry
/// run and nothing otherwise.
pub type EntryJob = Box<dyn FnOnce() -> Option<String> + Send>;

/// Seam between the cleanup engine and its worker pool.
///
/// The engine submits one job per child entry and collects whatever the
/// jobs return. Completion order is not part of the contract; tests use
/// [`SerialExecutor`] when they need submission order.
pub trait TaskExecutor: Send + Sync {
    fn run_all(&self, jobs: Vec<EntryJob>) -> Vec<String>;
}

/// Bounded pool executor backed by a dedicated rayon pool, sized to the
/// host's available parallelism.
pub struct ParallelExecutor {
    pool: ThreadPool,
}

impl ParallelExecutor {
    pub fn new() -> Result<Self, Error> {
        let pool = rayon::ThreadPoolBuilder::new().build()?;
        Ok(ParallelExecutor { pool })
    }
}

impl TaskExecutor for ParallelExecutor {
    fn run_all(&self, jobs: Vec<EntryJob>) -> Vec<String> {
        self.pool
            .install(|| jobs.into_par_iter().filter_map(|job| job()).collect())
    }
}

/// Runs every job on the calling thread, in submission order.
pub struct SerialExecutor;

impl TaskExecutor for SerialExecutor {
    fn run_all(&self, jobs: Vec<EntryJob>) -> Vec<String> {
        jobs.into_iter().filter_map(|job| job()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_executor_preserves_order() {
        let jobs: Vec<EntryJob> = vec![
            Box::new(|| Some("a".to_string())),
            Box::new(|| None),
            Box::new(|| Some("b".to_string())),
        ];
        let results = SerialExecutor.run_all(jobs);
        assert_eq!(results, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_parallel_executor_collects_all_results() {
        let executor = ParallelExecutor::new().unwrap();
        let jobs: Vec<EntryJob> = (0..32)
            .map(|i| Box::new(move || Some(format!("job {}", i))) as EntryJob)
            .collect();
        let mut results = executor.run_all(jobs);
        results.sort();
        assert_eq!(results.len(), 32);
        assert!(results.contains(&"job 0".to_string()));
        assert!(results.contains(&"job 31".to_string()));
    }
}
