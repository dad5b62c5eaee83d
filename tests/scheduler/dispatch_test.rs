/*!
 * Dispatch Tests
 * Event traces for the run loop
 */

use mlfq_sim::{demo_workload, Event, EventLog, JobId, Kind, Mlfq, SchedulerError};
use pretty_assertions::assert_eq;

fn running(id: u64, label: &str, level: usize, quantum: i64, before: i64) -> Event {
    Event::Running {
        id: JobId(id),
        label: label.into(),
        level,
        quantum,
        size_before: before,
        size_after: before - quantum,
    }
}

fn demoted(id: u64, label: &str, from_level: usize, to_level: usize) -> Event {
    Event::Demoted {
        id: JobId(id),
        label: label.into(),
        from_level,
        to_level,
    }
}

fn retired(id: u64, label: &str) -> Event {
    Event::Retired {
        id: JobId(id),
        label: label.into(),
    }
}

#[test]
fn test_two_job_trace() {
    let mut mlfq = Mlfq::try_from_quanta(vec![10, 20, 40]).unwrap();
    mlfq.spawn("A", 10, 0).unwrap();
    mlfq.spawn("B", 30, 0).unwrap();

    let mut log = EventLog::new();
    let stats = mlfq.run_loop(&mut log);

    assert_eq!(
        log.into_events(),
        vec![
            running(1, "A", 0, 10, 10),
            retired(1, "A"),
            running(2, "B", 0, 10, 30),
            demoted(2, "B", 0, 1),
            running(2, "B", 1, 20, 20),
            retired(2, "B"),
        ]
    );
    assert_eq!(stats.dispatches, 3);
    assert!(mlfq.is_empty());
}

#[test]
fn test_demo_workload_trace() {
    let mut mlfq = Mlfq::default();
    assert!(mlfq.seed(demo_workload()).is_empty());

    let mut log = EventLog::new();
    let stats = mlfq.run_loop(&mut log);

    // Level 0: A B C, then level 1 holds D E F B C, then level 2 G H I E F C
    let order: Vec<u64> = log.dispatch_order().into_iter().map(JobId::get).collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 2, 3, 7, 8, 9, 5, 6, 3]);

    assert_eq!(stats.retirements, 9);
    assert_eq!(stats.demotions, 5);
    assert_eq!(log.count(Kind::Retired), 9);
    assert!(mlfq.is_empty());
}

#[test]
fn test_lowest_level_keeps_cycling() {
    let mut mlfq = Mlfq::try_from_quanta(vec![10, 20]).unwrap();
    let id = mlfq.spawn("long", 100, 1).unwrap();

    let mut log = EventLog::new();
    mlfq.run_loop(&mut log);

    // 100 -> 80 -> 60 -> 40 -> 20 -> 0, always at level 1
    let levels: Vec<usize> = log
        .for_job(id)
        .filter_map(|e| match e {
            Event::Running { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![1; 5]);
    assert!(log.events().iter().all(|e| match e {
        Event::Demoted {
            from_level,
            to_level,
            ..
        } => *from_level == 1 && *to_level == 1,
        _ => true,
    }));
}

#[test]
fn test_invalid_admission_leaves_queues_untouched() {
    let mut mlfq = Mlfq::default();
    mlfq.spawn("A", 10, 0).unwrap();

    let job = mlfq.create_job("P", 10);
    let id = job.id();
    let rejected = mlfq.admit(job, 5).unwrap_err();
    assert_eq!(
        rejected.error,
        SchedulerError::InvalidPriorityLevel {
            level: 5,
            levels: 3
        }
    );
    assert_eq!(mlfq.level_of(id), None);
    assert_eq!(mlfq.len(), 1);

    let mut log = EventLog::new();
    mlfq.run_loop(&mut log);
    assert_eq!(log.for_job(id).count(), 0);
    assert_eq!(log.count(Kind::Retired), 1);
}

#[test]
fn test_high_priority_admission_runs_first() {
    let mut mlfq = Mlfq::default();
    mlfq.spawn("background", 100, 2).unwrap();

    let mut log = EventLog::new();
    assert!(mlfq.step(&mut log));

    // A new level-0 job jumps ahead of the demoted background job
    let urgent = mlfq.spawn("urgent", 10, 0).unwrap();
    assert!(mlfq.step(&mut log));

    let order = log.dispatch_order();
    assert_eq!(order[1], urgent);
}
