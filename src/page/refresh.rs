use tokio::sync::mpsc;

use crate::provider::ProviderCommand;

/// Handle the page uses to ask the provider for fresh data.
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    tx: Option<mpsc::UnboundedSender<ProviderCommand>>,
}

impl RefreshHandle {
    pub fn new(tx: mpsc::UnboundedSender<ProviderCommand>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Handle with no provider behind it; every request is dropped.
    pub fn detached() -> Self {
        Self { tx: None }
    }

    /// Refresh button. Does nothing while a fetch is in flight.
    pub fn refresh(&self, loading: bool) -> bool {
        if loading {
            tracing::debug!("Refresh ignored while loading");
            return false;
        }
        self.send(ProviderCommand::RefetchStats)
    }

    /// Retry button on the error view.
    pub fn retry(&self) -> bool {
        self.send(ProviderCommand::RefetchStats)
    }

    /// Wallet connected.
    pub fn start(&self) -> bool {
        self.send(ProviderCommand::Start)
    }

    /// Wallet disconnected.
    pub fn pause(&self) -> bool {
        self.send(ProviderCommand::Pause)
    }

    fn send(&self, cmd: ProviderCommand) -> bool {
        let Some(tx) = &self.tx else {
            tracing::warn!("No provider attached, dropping {cmd:?}");
            return false;
        };
        if tx.send(cmd).is_err() {
            tracing::error!("Provider is gone, dropping {cmd:?}");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<ProviderCommand>) -> Vec<ProviderCommand> {
        let mut out = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            out.push(cmd);
        }
        out
    }

    #[test]
    fn retry_sends_one_refetch_per_click() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = RefreshHandle::new(tx);

        assert!(handle.retry());
        assert_eq!(drain(&mut rx), vec![ProviderCommand::RefetchStats]);

        handle.retry();
        handle.retry();
        assert_eq!(drain(&mut rx).len(), 2);
    }

    #[test]
    fn refresh_is_disabled_while_loading() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = RefreshHandle::new(tx);

        assert!(!handle.refresh(true));
        assert!(drain(&mut rx).is_empty());

        assert!(handle.refresh(false));
        assert_eq!(drain(&mut rx), vec![ProviderCommand::RefetchStats]);
    }

    #[test]
    fn connection_commands() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = RefreshHandle::new(tx);
        handle.start();
        handle.pause();
        assert_eq!(
            drain(&mut rx),
            vec![ProviderCommand::Start, ProviderCommand::Pause]
        );
    }

    #[test]
    fn closed_or_detached_handles_report_failure() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        assert!(!RefreshHandle::new(tx).retry());
        assert!(!RefreshHandle::detached().retry());
    }
}
