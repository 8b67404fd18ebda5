//! 加载调度
//!
//! 把加载放到 tokio 运行时上执行，完成后通过通道送回 UI 线程。

use std::sync::Arc;

use state_nicknames_core::{CoreResult, LoadTicket, LoaderService, StateRecord};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::update::Command;

/// 一次加载的结果，连同发起时的凭据
#[derive(Debug, Clone)]
pub struct LoadCompletion {
    pub ticket: LoadTicket,
    pub result: CoreResult<Vec<StateRecord>>,
}

/// 加载调度器
pub struct LoadDispatcher {
    handle: Handle,
    loader: Arc<LoaderService>,
    tx: UnboundedSender<LoadCompletion>,
}

impl LoadDispatcher {
    /// 创建调度器，返回接收完成结果的一端（由主循环持有）
    pub fn new(
        handle: Handle,
        loader: Arc<LoaderService>,
    ) -> (Self, UnboundedReceiver<LoadCompletion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { handle, loader, tx }, rx)
    }

    /// 执行 Update 层返回的命令
    pub fn execute(&self, command: Command) {
        match command {
            Command::Load(ticket) => self.dispatch(ticket),
            Command::None => {}
        }
    }

    fn dispatch(&self, ticket: LoadTicket) {
        let loader = Arc::clone(&self.loader);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let result = loader.load().await;
            if tx.send(LoadCompletion { ticket, result }).is_err() {
                log::debug!("UI loop gone, dropping load result");
            }
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use state_nicknames_core::{Fetcher, ListPresenter, LoadError, RecordDecoder};

    use super::*;

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self) -> CoreResult<Vec<u8>> {
            Ok(self.0.as_bytes().to_vec())
        }

        fn endpoint(&self) -> &str {
            "static://states"
        }
    }

    fn dispatcher(body: &'static str) -> (LoadDispatcher, UnboundedReceiver<LoadCompletion>) {
        let loader = LoaderService::new(Arc::new(StaticFetcher(body)), RecordDecoder::default());
        LoadDispatcher::new(Handle::current(), Arc::new(loader))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn completion_carries_ticket_and_records() {
        let (dispatcher, mut rx) = dispatcher(r#"[{"Names":"Oklahoma","Nicknames":"Sooner State"}]"#);
        let mut presenter = ListPresenter::new();
        let ticket = presenter.begin_load().unwrap();

        dispatcher.execute(Command::Load(ticket));
        let completion = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(completion.ticket, ticket);
        assert_eq!(
            completion.result,
            Ok(vec![StateRecord::new("Oklahoma", "Sooner State")])
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failures_are_delivered_too() {
        let (dispatcher, mut rx) = dispatcher("");
        let mut presenter = ListPresenter::new();
        let ticket = presenter.begin_load().unwrap();

        dispatcher.execute(Command::Load(ticket));
        let completion = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(completion.result, Err(LoadError::EmptyBody));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn none_command_spawns_nothing() {
        let (dispatcher, mut rx) = dispatcher("[]");
        dispatcher.execute(Command::None);

        let waited = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(waited.is_err());
    }
}
