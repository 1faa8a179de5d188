use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::{runtime::Handle, sync::mpsc};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::{Cmd, DebounceTicket, FetchRequest},
        raw_msg::RawMsg,
    },
    domain::catalog::FetchHandler,
};

/// Command executor that runs list commands on the tokio runtime
///
/// Completions are never applied here; they are sent back as [`RawMsg`] so the
/// owner can apply them on its own context. At most one fetch and one debounce
/// timer are alive at a time: starting a new one cancels its predecessor.
pub struct CmdExecutor<T> {
    raw_tx: mpsc::UnboundedSender<RawMsg<T>>,
    runtime: Handle,
    fetch_token: Option<CancellationToken>,
    debounce_token: Option<CancellationToken>,
}

impl<T: Send + 'static> CmdExecutor<T> {
    /// Create an executor bound to the current tokio runtime
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg<T>>) -> Result<Self> {
        Ok(Self {
            raw_tx,
            runtime: Handle::try_current()?,
            fetch_token: None,
            debounce_token: None,
        })
    }

    pub fn execute_all<Q>(&mut self, cmds: Vec<Cmd<Q>>, handler: &FetchHandler<Q, T>) {
        for cmd in cmds {
            self.execute(cmd, handler);
        }
    }

    /// Execute a single command
    pub fn execute<Q>(&mut self, cmd: Cmd<Q>, handler: &FetchHandler<Q, T>) {
        match cmd {
            Cmd::Fetch(request) => self.spawn_fetch(request, handler),
            Cmd::ScheduleDebounce { ticket, delay } => self.schedule_debounce(ticket, delay),
            Cmd::CancelDebounce => {
                if let Some(token) = self.debounce_token.take() {
                    token.cancel();
                }
            }
        }
    }

    fn spawn_fetch<Q>(&mut self, request: FetchRequest<Q>, handler: &FetchHandler<Q, T>) {
        let token = CancellationToken::new();
        if let Some(previous) = self.fetch_token.replace(token.clone()) {
            previous.cancel();
        }

        let FetchRequest { ticket, mode, query } = request;
        let fetch = handler.fetch(query);
        let raw_tx = self.raw_tx.clone();
        tracing::debug!(?ticket, ?mode, "Spawning fetch");

        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(?ticket, "Fetch superseded");
                }
                result = fetch => {
                    // A closed channel means the owning list is gone
                    let _ = raw_tx.send(RawMsg::PageFetched { ticket, result });
                }
            }
        });
    }

    fn schedule_debounce(&mut self, ticket: DebounceTicket, delay: Duration) {
        let token = CancellationToken::new();
        if let Some(previous) = self.debounce_token.replace(token.clone()) {
            previous.cancel();
        }

        let raw_tx = self.raw_tx.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = raw_tx.send(RawMsg::DebounceElapsed(ticket));
                }
            }
        });
    }
}

impl<T> Drop for CmdExecutor<T> {
    fn drop(&mut self) {
        for token in [self.fetch_token.take(), self.debounce_token.take()]
            .into_iter()
            .flatten()
        {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::cmd::{FetchMode, FetchTicket},
        domain::{
            catalog::{fetch_handler, Page, PageRequest},
            error::FetchError,
        },
    };
    use pretty_assertions::assert_eq;

    fn fetch(ticket: u64, page: u32) -> Cmd {
        Cmd::Fetch(FetchRequest {
            ticket: FetchTicket(ticket),
            mode: FetchMode::Reset,
            query: PageRequest::new(page, 2),
        })
    }

    fn pages() -> FetchHandler<PageRequest, u32> {
        fetch_handler(|req: PageRequest| async move {
            tokio::time::sleep(Duration::from_millis(100 * u64::from(req.page))).await;
            Ok::<_, FetchError>(Page::new(vec![req.page; req.page_size as usize], true))
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_reports_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new(tx).unwrap();
        executor.execute(fetch(1, 1), &pages());

        assert_eq!(
            rx.recv().await,
            Some(RawMsg::PageFetched {
                ticket: FetchTicket(1),
                result: Ok(Page::new(vec![1, 1], true)),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_fetch_cancels_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new(tx).unwrap();
        let handler = pages();
        executor.execute_all(vec![fetch(1, 3), fetch(2, 1)], &handler);

        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, RawMsg::PageFetched { ticket: FetchTicket(2), .. }));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_restarts() {
        let (tx, mut rx) = mpsc::unbounded_channel::<RawMsg<u32>>();
        let mut executor = CmdExecutor::new(tx).unwrap();
        let handler = pages();
        let delay = Duration::from_millis(350);

        executor.execute(
            Cmd::ScheduleDebounce { ticket: DebounceTicket(1), delay },
            &handler,
        );
        tokio::time::sleep(Duration::from_millis(200)).await;
        executor.execute(
            Cmd::ScheduleDebounce { ticket: DebounceTicket(2), delay },
            &handler,
        );

        assert_eq!(rx.recv().await, Some(RawMsg::DebounceElapsed(DebounceTicket(2))));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_debounce_and_drop() {
        let (tx, mut rx) = mpsc::unbounded_channel::<RawMsg<u32>>();
        let mut executor = CmdExecutor::new(tx).unwrap();
        let handler = pages();

        executor.execute(
            Cmd::ScheduleDebounce {
                ticket: DebounceTicket(1),
                delay: Duration::from_millis(350),
            },
            &handler,
        );
        executor.execute(Cmd::CancelDebounce, &handler);
        executor.execute(fetch(1, 1), &handler);
        drop(executor);

        // Every sender is gone once the cancelled tasks finish
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_new_requires_runtime() {
        let (tx, _rx) = mpsc::unbounded_channel::<RawMsg<u32>>();
        assert!(CmdExecutor::new(tx).is_err());
    }
}
