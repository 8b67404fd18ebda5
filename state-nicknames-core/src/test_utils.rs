//! 测试辅助模块
//!
//! 提供 mock 实现。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{CoreResult, LoadError};
use crate::traits::Fetcher;

// ===== MockFetcher =====

pub struct MockFetcher {
    result: CoreResult<Vec<u8>>,
    calls: AtomicUsize,
}

impl MockFetcher {
    pub fn with_body(body: &str) -> Self {
        Self {
            result: Ok(body.as_bytes().to_vec()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_error(err: LoadError) -> Self {
        Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    /// `fetch` 被调用的次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self) -> CoreResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn endpoint(&self) -> &str {
        "mock://states"
    }
}
