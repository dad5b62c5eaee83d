/*!
 * Property Tests
 * FIFO, priority, demotion and conservation over random workloads
 */

use mlfq_sim::{Event, EventLog, JobId, Mlfq, Seed, Work};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn quanta_strategy() -> impl Strategy<Value = Vec<Work>> {
    prop::collection::vec(1i64..50, 1..6)
}

fn workload_strategy(levels: usize) -> impl Strategy<Value = Vec<Seed>> {
    prop::collection::vec((1i64..300, 0..levels), 0..40).prop_map(|jobs| {
        jobs.into_iter()
            .enumerate()
            .map(|(i, (work, level))| Seed::new(format!("j{}", i), work, level))
            .collect()
    })
}

fn scenario() -> impl Strategy<Value = (Vec<Work>, Vec<Seed>)> {
    quanta_strategy().prop_flat_map(|quanta| {
        let levels = quanta.len();
        (Just(quanta), workload_strategy(levels))
    })
}

proptest! {
    #[test]
    fn prop_fifo_within_level(count in 1usize..30, level in 0usize..3) {
        let mut mlfq = Mlfq::default();
        let ids: Vec<JobId> = (0..count)
            .map(|i| mlfq.spawn(format!("p{}", i), 5, level).unwrap())
            .collect();

        let popped: Vec<JobId> = std::iter::from_fn(|| mlfq.select_next().map(|j| j.id())).collect();
        prop_assert_eq!(popped, ids);
    }

    #[test]
    fn prop_priority_precedence(levels in prop::collection::vec(0usize..3, 1..40)) {
        let mut mlfq = Mlfq::default();
        for (i, level) in levels.iter().enumerate() {
            mlfq.spawn(format!("p{}", i), 5, *level).unwrap();
        }

        let mut last_level = 0;
        while let Some(job) = mlfq.select_next() {
            prop_assert!(job.level() >= last_level);
            // Nothing at a higher-priority level may remain
            for higher in 0..job.level() {
                prop_assert_eq!(mlfq.queue_len(higher), 0);
            }
            last_level = job.level();
        }
    }

    #[test]
    fn prop_run_loop_conserves_jobs((quanta, seeds) in scenario()) {
        let levels = quanta.len();
        let mut mlfq = Mlfq::try_from_quanta(quanta.clone()).unwrap();
        let total = seeds.len();
        prop_assert!(mlfq.seed(seeds).is_empty());

        let mut log = EventLog::new();
        let stats = mlfq.run_loop(&mut log);

        prop_assert!(mlfq.is_empty());
        prop_assert_eq!(stats.retirements, total);
        prop_assert_eq!(stats.admitted, total);

        let mut retired: HashSet<JobId> = HashSet::new();
        let mut current_level: HashMap<JobId, usize> = HashMap::new();
        let mut remaining: HashMap<JobId, Work> = HashMap::new();

        for event in log.events() {
            match event {
                Event::Running { id, level, quantum, size_before, size_after, .. } => {
                    prop_assert!(!retired.contains(id), "job {} ran after retiring", id);
                    prop_assert!(*level < levels);
                    prop_assert_eq!(*quantum, quanta[*level]);
                    prop_assert_eq!(*size_after, size_before - quantum);
                    if let Some(prev) = remaining.get(id) {
                        prop_assert_eq!(prev, size_before);
                    }
                    remaining.insert(*id, *size_after);

                    // Levels never go back up
                    let prev_level = current_level.entry(*id).or_insert(*level);
                    prop_assert!(*level >= *prev_level);
                    *prev_level = *level;
                }
                Event::Demoted { id, from_level, to_level, .. } => {
                    prop_assert_eq!(*to_level, (*from_level + 1).min(levels - 1));
                    prop_assert!(remaining[id] > 0);
                }
                Event::Retired { id, .. } => {
                    prop_assert!(remaining[id] <= 0);
                    prop_assert!(retired.insert(*id), "job {} retired twice", id);
                }
            }
        }
        prop_assert_eq!(retired.len(), total);
    }
}
