/// One-shot delayed callbacks. The browser implementation wraps `setTimeout`.
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
