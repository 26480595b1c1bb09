//! 领域事件（Domain Event）
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`），以及为载荷补充
//! 事件标识、版本与发生时间的事件记录 `RecordedEvent`。

mod domain_event_trait;
mod recorded_event;

pub use domain_event_trait::DomainEvent;
pub use recorded_event::RecordedEvent;
