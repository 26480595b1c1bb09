//! 事件溯源实体（EventSourcedEntity）
//!
//! 核心状态机：
//! - `apply_new`：为新事件赋版本（当前版本 + 1）、折叠进状态并记入未提交缓冲；
//! - `load_from_history`：按给定顺序重放历史事件，只折叠状态、不触碰未提交缓冲；
//! - `uncommitted_changes` / `mark_changes_as_committed`：由调用方在派发与
//!   持久化确认后显式清空缓冲。
//!
//! 关键设计：把“折叠状态”（`EventSourced::apply`）与“记录变更”分离，
//! 同一条折叠路径同时服务于新命令处理与历史重放，而只有新事件进入
//! 未提交缓冲——重放绝不会重新填充该缓冲。
//!
use crate::domain_event::{DomainEvent, RecordedEvent};
use crate::entity::Entity;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// 事件溯源聚合状态需要实现的折叠契约。
///
/// `apply` 将一条事件投影到状态：全量、不可失败，按事件变体静态分派
/// （枚举 `match`）。实现未匹配的事件变体（通配分支）将被静默忽略，
/// 状态保持不变——这是约定的宽松行为，不是错误。
pub trait EventSourced: Default + Send + Sync {
    /// 聚合标识类型，默认值表示尚未持久化
    type Id: Clone + fmt::Debug + Default + PartialEq + Hash + Send + Sync;
    /// 该聚合产生与消费的领域事件类型
    type Event: DomainEvent;

    /// 应用事件，更新聚合状态
    fn apply(&mut self, event: &Self::Event);
}

/// 事件溯源实体：在 `Entity` 之上叠加版本跟踪与未提交变更缓冲。
///
/// 单实例假定单写者访问（典型工作单元范围：加载、变更、保存各一次），
/// 不提供内部加锁。
#[derive(Debug, Clone)]
pub struct EventSourcedEntity<S>
where
    S: EventSourced,
{
    entity: Entity<S::Id, S::Event>,
    state: S,
    version: usize,
    uncommitted: Vec<RecordedEvent<S::Event>>,
}

impl<S> EventSourcedEntity<S>
where
    S: EventSourced,
{
    /// 使用给定标识创建实体：版本 0，状态为初始值
    pub fn new(id: S::Id) -> Self {
        Self {
            entity: Entity::new(id),
            state: S::default(),
            version: 0,
            uncommitted: Vec::new(),
        }
    }

    /// 创建瞬态实体（标识为默认值）
    pub fn transient() -> Self {
        Self::new(S::Id::default())
    }

    /// 获取实体标识
    pub fn id(&self) -> &S::Id {
        self.entity.id()
    }

    /// 为瞬态实体补齐标识（首次保存后回填）
    pub fn set_id(&mut self, id: S::Id) {
        self.entity.set_id(id);
    }

    /// 标识是否仍为类型默认值
    pub fn is_not_persisted(&self) -> bool {
        self.entity.is_not_persisted()
    }

    /// 当前版本（非负、单调不减，仅由重放/apply 逻辑推进）
    pub fn version(&self) -> usize {
        self.version
    }

    /// 当前聚合状态
    pub fn state(&self) -> &S {
        &self.state
    }

    /// 应用一条新事件：赋版本 `version + 1`，折叠进状态并记入未提交缓冲
    pub fn apply_new(&mut self, payload: S::Event) {
        let mut event = RecordedEvent::new(payload);
        event.assign_version(self.version + 1);
        self.state.apply(event.payload());
        self.version = event.version();
        self.uncommitted.push(event);
    }

    /// 按给定顺序重放历史事件，逐条折叠状态并同步版本。
    ///
    /// 前置条件：历史事件按版本升序给出；本方法信任来源、不做校验。
    /// 重放不会写入未提交缓冲。
    pub fn load_from_history<I>(&mut self, history: I)
    where
        I: IntoIterator<Item = RecordedEvent<S::Event>>,
    {
        for event in history {
            self.state.apply(event.payload());
            self.version = event.version();
        }
    }

    /// 未提交的变更（只读快照语义：调用方不应依赖其反映后续变更）
    pub fn uncommitted_changes(&self) -> &[RecordedEvent<S::Event>] {
        &self.uncommitted
    }

    /// 将未提交变更标记为已提交（清空缓冲）；幂等
    pub fn mark_changes_as_committed(&mut self) {
        self.uncommitted.clear();
    }

    /// 已记录的领域事件（通知用途，独立于未提交缓冲）
    pub fn domain_events(&self) -> &[RecordedEvent<S::Event>] {
        self.entity.domain_events()
    }

    /// 追加一条领域事件
    pub fn add_domain_event(&mut self, event: RecordedEvent<S::Event>) {
        self.entity.add_domain_event(event);
    }

    /// 移除首个相等的领域事件；不存在时为空操作
    pub fn remove_domain_event(&mut self, event: &RecordedEvent<S::Event>) {
        self.entity.remove_domain_event(event);
    }

    /// 清空领域事件缓冲
    pub fn clear_domain_events(&mut self) {
        self.entity.clear_domain_events();
    }
}

impl<S> Default for EventSourcedEntity<S>
where
    S: EventSourced,
{
    fn default() -> Self {
        Self::transient()
    }
}

impl<S> Deref for EventSourcedEntity<S>
where
    S: EventSourced,
{
    type Target = S;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl<S> PartialEq for EventSourcedEntity<S>
where
    S: EventSourced,
{
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.entity == other.entity
    }
}

impl<S> Hash for EventSourcedEntity<S>
where
    S: EventSourced,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity.hash(state);
    }
}
