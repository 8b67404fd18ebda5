//! 列表加载服务
//!
//! 把一次抓取和一次解码串起来：Fetcher → 空负载检查 → RecordDecoder。
//! 所有失败都在这里记录日志，调用方只需要把结果交给 `ListPresenter`。

use std::sync::Arc;

use crate::decoder::RecordDecoder;
use crate::error::{CoreResult, LoadError};
use crate::traits::Fetcher;
use crate::types::StateRecord;

/// 列表加载服务
pub struct LoaderService {
    fetcher: Arc<dyn Fetcher>,
    decoder: RecordDecoder,
}

impl LoaderService {
    /// 创建加载服务实例
    #[must_use]
    pub fn new(fetcher: Arc<dyn Fetcher>, decoder: RecordDecoder) -> Self {
        Self { fetcher, decoder }
    }

    /// 抓取并解码
    pub async fn load(&self) -> CoreResult<Vec<StateRecord>> {
        let result = self.fetch_and_decode().await;

        match &result {
            Ok(records) => {
                log::info!(
                    "Loaded {} records from {}",
                    records.len(),
                    self.fetcher.endpoint()
                );
            }
            Err(e) if e.is_expected() => {
                log::warn!(
                    "Load from {} failed ({:?}): {e}",
                    self.fetcher.endpoint(),
                    e.kind()
                );
            }
            Err(e) => {
                log::error!(
                    "Load from {} failed ({:?}): {e}",
                    self.fetcher.endpoint(),
                    e.kind()
                );
            }
        }

        result
    }

    async fn fetch_and_decode(&self) -> CoreResult<Vec<StateRecord>> {
        let payload = self.fetcher.fetch().await?;
        if payload.is_empty() {
            return Err(LoadError::EmptyBody);
        }
        Ok(self.decoder.decode(&payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, ErrorKind};
    use crate::test_utils::MockFetcher;

    fn service(fetcher: MockFetcher) -> LoaderService {
        LoaderService::new(Arc::new(fetcher), RecordDecoder::default())
    }

    #[tokio::test]
    async fn load_decodes_payload() {
        let svc = service(MockFetcher::with_body(
            r#"[{"Names":"Oklahoma","Nicknames":"Sooner State"}]"#,
        ));
        let records = svc.load().await;
        assert_eq!(records, Ok(vec![StateRecord::new("Oklahoma", "Sooner State")]));
    }

    #[tokio::test]
    async fn empty_body_is_reported() {
        let svc = service(MockFetcher::with_body(""));
        assert_eq!(svc.load().await, Err(LoadError::EmptyBody));
    }

    #[tokio::test]
    async fn fetch_error_passes_through() {
        let svc = service(MockFetcher::with_error(LoadError::Transport(
            "connection reset".into(),
        )));
        assert_eq!(
            svc.load().await,
            Err(LoadError::Transport("connection reset".into()))
        );
    }

    #[tokio::test]
    async fn decode_error_is_wrapped() {
        let svc = service(MockFetcher::with_body(r#"[{"Names":"Oklahoma"}]"#));
        assert_eq!(
            svc.load().await,
            Err(LoadError::Decode(DecodeError::MissingField {
                index: 0,
                key: "Nicknames".into(),
            }))
        );
    }

    #[tokio::test]
    async fn failures_are_classified() {
        let cases = [
            (MockFetcher::with_body(""), ErrorKind::Decode),
            (MockFetcher::with_body("<html>"), ErrorKind::Decode),
            (
                MockFetcher::with_error(LoadError::Transport("timeout".into())),
                ErrorKind::Transport,
            ),
            (
                MockFetcher::with_error(LoadError::InvalidEndpoint {
                    endpoint: "::".into(),
                    detail: "relative URL without a base".into(),
                }),
                ErrorKind::Configuration,
            ),
        ];

        for (fetcher, expected) in cases {
            let kind = service(fetcher).load().await.map_err(|e| e.kind());
            assert_eq!(kind.err(), Some(expected));
        }
    }

    #[tokio::test]
    async fn each_load_fetches_once() {
        let fetcher = Arc::new(MockFetcher::with_body("[]"));
        let svc = LoaderService::new(fetcher.clone(), RecordDecoder::default());
        let _ = svc.load().await;
        let _ = svc.load().await;
        assert_eq!(fetcher.calls(), 2);
    }
}
