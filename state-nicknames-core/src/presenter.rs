//! 列表 Presenter
//!
//! 持有当前记录列表与加载指示器，并作为 `ListSource` 提供给列表控件。
//!
//! 状态机：
//!     Idle ──begin_load──▶ Loading ──complete(Ok)──▶ Loaded
//!                            │
//!                            └──complete(Err)──▶ Failed（列表不变）
//!
//! 每次 `begin_load` 都会推进代数（generation），`complete` 只接受当前代数的凭据。
//! `detach` 同样推进代数，用来丢弃界面销毁后才返回的结果。

use crate::error::CoreResult;
use crate::traits::ListSource;
use crate::types::{LoadPhase, LoadTicket, LoadingIndicator, StateRecord};

/// `complete` 的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// 列表已替换
    Loaded { rows: usize },
    /// 加载失败，列表保持原样
    Failed,
    /// 凭据已过期，结果被丢弃
    Stale,
}

/// 列表 Presenter
#[derive(Debug, Default)]
pub struct ListPresenter {
    records: Vec<StateRecord>,
    phase: LoadPhase,
    indicator: LoadingIndicator,
    generation: u64,
}

impl ListPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一次加载（界面出现时调用）
    ///
    /// 已在加载中时返回 `None`，不会发起第二个请求。
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.phase.is_loading() {
            log::debug!("Load already in flight (generation {})", self.generation);
            return None;
        }

        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.indicator.start();
        log::debug!("Load started (generation {})", self.generation);

        Some(LoadTicket::new(self.generation))
    }

    /// 应用一次加载的结果
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: CoreResult<Vec<StateRecord>>,
    ) -> Completion {
        if ticket.generation() != self.generation || !self.phase.is_loading() {
            log::debug!(
                "Discarding stale result (ticket {}, current {})",
                ticket.generation(),
                self.generation
            );
            return Completion::Stale;
        }

        self.indicator.stop();
        match result {
            Ok(records) => {
                let rows = records.len();
                self.records = records;
                self.phase = LoadPhase::Loaded;
                Completion::Loaded { rows }
            }
            Err(_) => {
                self.phase = LoadPhase::Failed;
                Completion::Failed
            }
        }
    }

    /// 界面销毁：让进行中的加载失效
    pub fn detach(&mut self) {
        self.generation += 1;
        self.indicator.stop();
        self.phase = LoadPhase::Idle;
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    pub fn indicator(&self) -> &LoadingIndicator {
        &self.indicator
    }

    /// 推进指示器动画
    pub fn tick(&mut self) {
        self.indicator.tick();
    }
}

impl ListSource for ListPresenter {
    fn row_count(&self) -> usize {
        self.records.len()
    }

    fn row_text(&self, index: usize) -> Option<String> {
        self.records.get(index).map(StateRecord::row_text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, LoadError};

    fn oklahoma() -> StateRecord {
        StateRecord::new("Oklahoma", "Sooner State")
    }

    fn loaded_with(records: Vec<StateRecord>) -> ListPresenter {
        let mut presenter = ListPresenter::new();
        let ticket = presenter.begin_load().unwrap();
        presenter.complete(ticket, Ok(records));
        presenter
    }

    #[test]
    fn starts_idle_and_empty() {
        let presenter = ListPresenter::new();
        assert_eq!(presenter.phase(), LoadPhase::Idle);
        assert_eq!(presenter.row_count(), 0);
        assert!(!presenter.indicator().is_animating());
    }

    #[test]
    fn begin_load_starts_indicator() {
        let mut presenter = ListPresenter::new();
        assert!(presenter.begin_load().is_some());
        assert_eq!(presenter.phase(), LoadPhase::Loading);
        assert!(presenter.indicator().is_animating());
    }

    #[test]
    fn second_begin_while_loading_is_refused() {
        let mut presenter = ListPresenter::new();
        let first = presenter.begin_load();
        assert!(first.is_some());
        assert_eq!(presenter.begin_load(), None);
    }

    #[test]
    fn success_replaces_list() {
        let mut presenter = loaded_with(vec![StateRecord::new("Texas", "Lone Star State")]);
        let ticket = presenter.begin_load().unwrap();
        let outcome = presenter.complete(ticket, Ok(vec![oklahoma(), oklahoma()]));

        assert_eq!(outcome, Completion::Loaded { rows: 2 });
        assert_eq!(presenter.phase(), LoadPhase::Loaded);
        assert_eq!(presenter.row_count(), 2);
        assert_eq!(presenter.records(), &[oklahoma(), oklahoma()]);
        assert!(!presenter.indicator().is_animating());
    }

    #[test]
    fn previous_list_visible_while_loading() {
        let mut presenter = loaded_with(vec![oklahoma()]);
        presenter.begin_load();
        assert_eq!(presenter.row_count(), 1);
        assert_eq!(presenter.row_text(0).as_deref(), Some("Oklahoma - Sooner State"));
    }

    #[test]
    fn failure_keeps_list() {
        let mut presenter = loaded_with(vec![oklahoma()]);
        let ticket = presenter.begin_load().unwrap();
        let outcome = presenter.complete(
            ticket,
            Err(LoadError::Decode(DecodeError::Malformed("eof".into()))),
        );

        assert_eq!(outcome, Completion::Failed);
        assert_eq!(presenter.phase(), LoadPhase::Failed);
        assert_eq!(presenter.records(), &[oklahoma()]);
        assert!(!presenter.indicator().is_animating());
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut presenter = ListPresenter::new();
        let old = presenter.begin_load().unwrap();
        presenter.detach();
        let current = presenter.begin_load().unwrap();
        assert_ne!(old, current);

        assert_eq!(presenter.complete(old, Ok(vec![oklahoma()])), Completion::Stale);
        assert_eq!(presenter.phase(), LoadPhase::Loading);
        assert_eq!(presenter.row_count(), 0);
        assert!(presenter.indicator().is_animating());
    }

    #[test]
    fn result_after_detach_is_discarded() {
        let mut presenter = ListPresenter::new();
        let ticket = presenter.begin_load().unwrap();
        presenter.detach();

        assert_eq!(presenter.complete(ticket, Ok(vec![oklahoma()])), Completion::Stale);
        assert_eq!(presenter.phase(), LoadPhase::Idle);
        assert_eq!(presenter.row_count(), 0);
        assert!(!presenter.indicator().is_animating());
    }

    #[test]
    fn duplicate_completion_does_not_restart_or_reapply() {
        let mut presenter = ListPresenter::new();
        let ticket = presenter.begin_load().unwrap();
        presenter.complete(ticket, Ok(vec![oklahoma()]));

        assert_eq!(presenter.complete(ticket, Ok(vec![])), Completion::Stale);
        assert_eq!(presenter.row_count(), 1);
        presenter.tick();
        assert!(!presenter.indicator().is_animating());
    }

    #[test]
    fn row_text_out_of_range_is_none() {
        let presenter = loaded_with(vec![oklahoma()]);
        assert_eq!(presenter.row_text(1), None);
    }
}
