use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

/// Runs a task once after a delay. Dropping the returned handle cancels the
/// task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo. `Timeout` clears itself on drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Holds at most one pending reset. Arming again, calling `cancel`, or
/// dropping the timer cancels whatever was pending.
pub struct ResetTimer<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> ResetTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn arm(&mut self, delay_ms: u32, task: impl FnOnce() + 'static) {
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

struct ScheduledTask {
    id: u64,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

/// Simulated clock. Nothing runs until `advance` moves time past a task's
/// deadline; tasks then run in deadline order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<ManualClock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.tasks.retain(|t| t.id != self.id);
            }
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let task = clock.tasks.remove(i);
                    clock.now_ms = task.due_ms;
                    task
                })
            };
            match next {
                // The clock is not borrowed here, so tasks may schedule more work.
                Some(scheduled) => (scheduled.task)(),
                None => break,
            }
        }
        self.clock.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.tasks.push(ScheduledTask { id, due_ms, task });
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let hits = Rc::new(Cell::new(0));
        let make = {
            let hits = hits.clone();
            move || {
                let hits = hits.clone();
                Box::new(move || hits.set(hits.get() + 1)) as Box<dyn FnOnce()>
            }
        };
        (hits, make)
    }

    #[test]
    fn test_task_runs_only_after_deadline() {
        let scheduler = ManualScheduler::new();
        let (hits, task) = counter();
        let _handle = scheduler.schedule(5_000, task());

        scheduler.advance(4_999);
        assert_eq!(hits.get(), 0);
        scheduler.advance(1);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.now_ms(), 5_000);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let (hits, task) = counter();
        let handle = scheduler.schedule(100, task());
        drop(handle);

        scheduler.advance(1_000);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_rearming_replaces_pending_reset() {
        let scheduler = ManualScheduler::new();
        let mut timer = ResetTimer::new(scheduler.clone());
        let (hits, task) = counter();

        timer.arm(3_000, task());
        scheduler.advance(2_000);
        timer.arm(3_000, task());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(1_500);
        assert_eq!(hits.get(), 0);
        scheduler.advance(1_500);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_dropping_timer_cancels() {
        let scheduler = ManualScheduler::new();
        let (hits, task) = counter();
        {
            let mut timer = ResetTimer::new(scheduler.clone());
            timer.arm(10, task());
        }
        scheduler.advance(10);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_tasks_run_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (delay, tag) in [(300, 'c'), (100, 'a'), (200, 'b')] {
            let order = order.clone();
            handles.push(scheduler.schedule(delay, Box::new(move || order.borrow_mut().push(tag))));
        }
        scheduler.advance(300);
        assert_eq!(*order.borrow(), vec!['a', 'b', 'c']);
    }
}
