//! 事件溯源领域基础库（es-domain）
//!
//! 提供以事件溯源为中心的领域建模构件，用于在应用中实现：
//! - 实体（`entity`）：类型化标识、领域事件累积与基于标识的相等语义
//! - 领域事件（`domain_event`）：事件载荷契约与带版本/时间戳的事件记录
//! - 事件溯源实体（`event_sourced`）：apply/replay 协议、版本跟踪与未提交变更缓冲
//! - 事件派发（`dispatch`）：顺序投递、处理器注册与协作取消
//! - 值对象（`value_object`）与审计/软删除等标记契约（`audit`）
//!
//! 本 crate 不包含事件的持久化、快照与跨进程投递保证，这些由调用方
//! 的基础设施层负责；库内仅定义领域层协议与最小必要的错误类型。
//!
//! 典型用法：
//! 1. 定义聚合状态并实现 `EventSourced`（在 `apply` 中按事件变体折叠状态）；
//! 2. 由用例加载历史事件并调用 `load_from_history` 重建实体；
//! 3. 命令方法内部通过 `apply_new` 记录新事件；
//! 4. 调用方取出 `uncommitted_changes`，经 `EventDispatcher` 派发后
//!    调用 `mark_changes_as_committed` 确认提交。
//!
pub mod audit;
#[cfg(feature = "eventing")]
pub mod dispatch;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod event_sourced;
pub mod value_object;
