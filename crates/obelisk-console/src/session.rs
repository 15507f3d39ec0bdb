/*
[INPUT]:  Agent name + raw params text, ObeliskClient, CancellationToken
[OUTPUT]: Task submission and a watched stream of status updates
[POS]:    Execution layer - submission controller and status poller
[UPDATE]: When changing supersession/teardown guarantees or poll semantics
*/

use obelisk_adapter::{
    AgentKind, CreateTaskRequest, ObeliskClient, Result, TaskId, TaskStatus,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Identity of a submitted task, owned by the active polling session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHandle {
    pub id: TaskId,
}

/// Poller lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservePhase {
    /// No task is being observed
    Idle,
    /// A handle is set and the recurring status query is active
    Observing,
    /// The task reached SUCCESS or FAILURE; polling has stopped
    Terminal,
}

/// Observable state of the tracked task. Published through a watch
/// channel; rendering reads it, never duplicates it.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub phase: ObservePhase,
    pub task_id: Option<TaskId>,
    pub agent: Option<AgentKind>,
    pub status: Option<TaskStatus>,
    pub result: Option<serde_json::Value>,
    /// Failed status queries since the last successful one. The loop
    /// retries on the next tick instead of aborting.
    pub consecutive_errors: u32,
}

impl TaskView {
    fn idle() -> Self {
        Self {
            phase: ObservePhase::Idle,
            task_id: None,
            agent: None,
            status: None,
            result: None,
            consecutive_errors: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == ObservePhase::Terminal
    }
}

#[derive(Debug)]
struct ActivePoll {
    handle: TaskHandle,
    shutdown: CancellationToken,
    join: JoinHandle<()>,
}

/// Tracks at most one in-flight task: validates and submits requests,
/// polls status until a terminal outcome, and cancels the poll on
/// supersession or teardown.
#[derive(Debug)]
pub struct TaskSession {
    client: Arc<ObeliskClient>,
    poll_interval: Duration,
    session_id: Uuid,
    /// Monotonic counter identifying the current poll session. A
    /// response is applied only if the generation it was issued under
    /// is still current; this is the single source of truth for
    /// validity-checking late responses.
    generation: Arc<AtomicU64>,
    view_tx: watch::Sender<TaskView>,
    shutdown: CancellationToken,
    active: Option<ActivePoll>,
}

impl TaskSession {
    pub fn new(client: Arc<ObeliskClient>, poll_interval: Duration) -> Self {
        let (view_tx, _view_rx) = watch::channel(TaskView::idle());
        Self {
            client,
            poll_interval,
            session_id: Uuid::new_v4(),
            generation: Arc::new(AtomicU64::new(0)),
            view_tx,
            shutdown: CancellationToken::new(),
            active: None,
        }
    }

    /// Subscribe to status updates for whatever task is being tracked
    pub fn subscribe(&self) -> watch::Receiver<TaskView> {
        self.view_tx.subscribe()
    }

    pub fn current_handle(&self) -> Option<&TaskHandle> {
        self.active.as_ref().map(|active| &active.handle)
    }

    pub fn phase(&self) -> ObservePhase {
        self.view_tx.borrow().phase
    }

    /// Validate params and submit a task.
    ///
    /// Malformed params fail before any network call and leave the
    /// current poll untouched. On success the returned handle is
    /// already being observed; any prior poll has been superseded.
    pub async fn submit(&mut self, agent: AgentKind, raw_params: &str) -> Result<TaskHandle> {
        let req = CreateTaskRequest::from_raw_params(agent, raw_params)?;
        let created = self.client.create_task(req).await?;
        let handle = TaskHandle { id: created.id };

        tracing::info!(
            session_id = %self.session_id,
            task_id = %handle.id,
            agent = %agent,
            "task submitted"
        );

        self.observe(agent, handle.clone());
        Ok(handle)
    }

    /// Start observing `handle`, superseding any prior poll.
    ///
    /// Resets the view to OBSERVING and schedules the recurring
    /// status query.
    pub fn observe(&mut self, agent: AgentKind, handle: TaskHandle) {
        self.supersede();

        let poll_generation = self.generation.load(Ordering::Acquire);
        self.view_tx.send_replace(TaskView {
            phase: ObservePhase::Observing,
            task_id: Some(handle.id.clone()),
            agent: Some(agent),
            status: Some(TaskStatus::Pending),
            result: None,
            consecutive_errors: 0,
        });

        let shutdown = self.shutdown.child_token();
        let ctx = PollContext {
            client: self.client.clone(),
            handle: handle.clone(),
            interval: self.poll_interval,
            shutdown: shutdown.clone(),
            generation: self.generation.clone(),
            poll_generation,
            view_tx: self.view_tx.clone(),
        };
        let join = tokio::spawn(poll_loop(ctx));

        self.active = Some(ActivePoll {
            handle,
            shutdown,
            join,
        });
    }

    /// Stop observing and return the view to IDLE. The cancellation
    /// is synchronous: no further tick can fire once this returns.
    pub fn teardown(&mut self) {
        self.supersede();
        self.view_tx.send_replace(TaskView::idle());
        tracing::debug!(session_id = %self.session_id, "session torn down");
    }

    /// Cancel the active poll, if any, and invalidate its generation
    /// so an in-flight response for the old handle is dropped.
    fn supersede(&mut self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(active) = self.active.take() {
            active.shutdown.cancel();
            tracing::debug!(
                session_id = %self.session_id,
                task_id = %active.handle.id,
                "poll superseded"
            );
            // Dropping the join handle detaches the loop; it exits on
            // its own once it observes the cancelled token.
            drop(active.join);
        }
    }
}

impl Drop for TaskSession {
    fn drop(&mut self) {
        // The viewing context going away must stop the timer too.
        self.shutdown.cancel();
    }
}

struct PollContext {
    client: Arc<ObeliskClient>,
    handle: TaskHandle,
    interval: Duration,
    shutdown: CancellationToken,
    generation: Arc<AtomicU64>,
    poll_generation: u64,
    view_tx: watch::Sender<TaskView>,
}

impl PollContext {
    /// Apply an update to the view only if this poll is still the
    /// current one and the view has not gone terminal. Queries overlap,
    /// so a slower non-terminal response can land after the terminal
    /// one; it must not reopen the view. Returns false when the update
    /// was rejected.
    fn apply_update(&self, update: impl FnOnce(&mut TaskView)) -> bool {
        self.view_tx.send_if_modified(|view| {
            if self.generation.load(Ordering::Acquire) != self.poll_generation {
                return false;
            }
            if view.phase == ObservePhase::Terminal {
                return false;
            }
            update(view);
            true
        })
    }
}

/// Recurring status query for one handle. The ticker fires on a fixed
/// cadence whether or not earlier queries have resolved; each query
/// runs as its own task, so a slow service overlaps in-flight queries
/// instead of stretching the interval. Runs until terminal status or
/// cancellation.
async fn poll_loop(ctx: PollContext) {
    let ctx = Arc::new(ctx);
    let mut ticker = tokio::time::interval(ctx.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately; consume it so the
    // first query happens one full interval after submission.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ctx.shutdown.cancelled() => {
                tracing::debug!(task_id = %ctx.handle.id, "poll cancelled");
                return;
            }
            _ = ticker.tick() => {}
        }
        tokio::spawn(run_status_query(ctx.clone()));
    }
}

/// One status query. A failed query bumps the error counter and lets
/// the next tick retry; a terminal status stops the ticker through the
/// same token the supersession path cancels.
async fn run_status_query(ctx: Arc<PollContext>) {
    let snapshot = match ctx.client.query_task(&ctx.handle.id).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(
                task_id = %ctx.handle.id,
                error = %err,
                retryable = err.is_retryable(),
                "status query failed; retrying on next tick"
            );
            ctx.apply_update(|view| view.consecutive_errors += 1);
            return;
        }
    };

    // A response that raced a supersession or teardown belongs to
    // a handle nobody observes anymore.
    if ctx.shutdown.is_cancelled() {
        tracing::debug!(task_id = %ctx.handle.id, "stale status response dropped");
        return;
    }

    let terminal = snapshot.status.is_terminal();
    let applied = ctx.apply_update(|view| {
        view.status = Some(snapshot.status.clone());
        view.consecutive_errors = 0;
        if terminal {
            view.result = snapshot.result.clone();
            view.phase = ObservePhase::Terminal;
        }
    });

    if !applied {
        tracing::debug!(task_id = %ctx.handle.id, "stale status response dropped");
        return;
    }

    if terminal {
        tracing::info!(
            task_id = %ctx.handle.id,
            status = %snapshot.status,
            "task reached terminal status; polling stopped"
        );
        ctx.shutdown.cancel();
    }
}

/// Wait until the tracked task reaches a terminal phase and return the
/// final view. Returns the last seen view if the session goes away.
pub async fn wait_for_terminal(rx: &mut watch::Receiver<TaskView>) -> TaskView {
    loop {
        {
            let view = rx.borrow_and_update();
            if view.is_terminal() {
                return view.clone();
            }
        }
        if rx.changed().await.is_err() {
            return rx.borrow().clone();
        }
    }
}
