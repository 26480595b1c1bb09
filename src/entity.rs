//! 实体（Entity）基础抽象
//!
//! 为领域实体提供统一的标识与领域事件累积能力：
//! - 调用方指定的类型化标识（默认值标识视为“尚未持久化”）；
//! - 有序的领域事件缓冲（插入顺序即派发顺序）；
//! - 基于标识的相等语义，且哈希在实体持久化后一次性记忆。
//!
use crate::domain_event::{DomainEvent, RecordedEvent};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ptr;
use std::sync::OnceLock;

/// 聚合根标记 trait
pub trait AggregateRoot {}

/// 具备标识与领域事件缓冲的实体基础构件。
///
/// 相等语义：同一引用恒等；任一方未持久化（标识为默认值）则不等；
/// 否则比较标识。跨具体类型的比较在 Rust 中由类型系统静态排除。
#[derive(Debug, Clone)]
pub struct Entity<TId, E>
where
    E: DomainEvent,
{
    id: TId,
    domain_events: Vec<RecordedEvent<E>>,
    // 持久化后按标识记忆的哈希；未持久化实体绝不写入
    id_hash: OnceLock<u64>,
}

impl<TId, E> Entity<TId, E>
where
    TId: Default + PartialEq,
    E: DomainEvent,
{
    /// 使用给定标识创建实体（持久化形态）
    pub fn new(id: TId) -> Self {
        Self {
            id,
            domain_events: Vec::new(),
            id_hash: OnceLock::new(),
        }
    }

    /// 创建瞬态实体（标识为类型默认值，例如首次保存之前）
    pub fn transient() -> Self {
        Self::new(TId::default())
    }

    /// 获取实体标识
    pub fn id(&self) -> &TId {
        &self.id
    }

    /// 为瞬态实体补齐标识（典型场景：首次保存后回填）。
    /// 前置条件：实体尚未持久化；已持久化实体不支持改换标识。
    pub fn set_id(&mut self, id: TId) {
        debug_assert!(
            self.id_hash.get().is_none(),
            "id must be assigned before the hash is memoized"
        );
        self.id = id;
    }

    /// 标识是否仍为类型默认值（即尚未持久化）
    pub fn is_not_persisted(&self) -> bool {
        self.id == TId::default()
    }

    /// 已记录的领域事件（插入顺序即派发顺序）
    pub fn domain_events(&self) -> &[RecordedEvent<E>] {
        &self.domain_events
    }

    /// 追加一条领域事件，不做任何校验
    pub fn add_domain_event(&mut self, event: RecordedEvent<E>) {
        self.domain_events.push(event);
    }

    /// 移除首个相等的领域事件；不存在时为空操作
    pub fn remove_domain_event(&mut self, event: &RecordedEvent<E>) {
        if let Some(pos) = self.domain_events.iter().position(|e| e == event) {
            self.domain_events.remove(pos);
        }
    }

    /// 清空领域事件缓冲
    pub fn clear_domain_events(&mut self) {
        self.domain_events.clear();
    }

    fn memoized_id_hash(&self) -> u64
    where
        TId: Hash,
    {
        *self.id_hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.id.hash(&mut hasher);
            hasher.finish()
        })
    }
}

impl<TId, E> Default for Entity<TId, E>
where
    TId: Default + PartialEq,
    E: DomainEvent,
{
    fn default() -> Self {
        Self::transient()
    }
}

impl<TId, E> PartialEq for Entity<TId, E>
where
    TId: Default + PartialEq,
    E: DomainEvent,
{
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        if self.is_not_persisted() || other.is_not_persisted() {
            return false;
        }
        self.id == other.id
    }
}

impl<TId, E> Hash for Entity<TId, E>
where
    TId: Default + PartialEq + Hash,
    E: DomainEvent,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_not_persisted() {
            // 标识尚未确定，不做记忆
            self.id.hash(state);
        } else {
            state.write_u64(self.memoized_id_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum NoteEvent {
        Pinned,
        Archived,
    }

    impl DomainEvent for NoteEvent {
        fn event_type(&self) -> &str {
            match self {
                NoteEvent::Pinned => "NoteEvent.Pinned",
                NoteEvent::Archived => "NoteEvent.Archived",
            }
        }
    }

    type Note = Entity<String, NoteEvent>;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // 同标识的持久化实体相等且哈希一致
    #[test]
    fn persisted_entities_with_same_id_are_equal() {
        let a = Note::new("n-1".into());
        let b = Note::new("n-1".into());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    // 不同标识的持久化实体不等
    #[test]
    fn persisted_entities_with_different_ids_are_unequal() {
        let a = Note::new("n-1".into());
        let b = Note::new("n-2".into());
        assert_ne!(a, b);
    }

    // 瞬态实体仅与自身引用相等
    #[test]
    fn transient_entity_is_only_equal_to_itself() {
        let a = Note::transient();
        let b = Note::transient();
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    // 瞬态与持久化实体（即使标识相同为默认值）不等
    #[test]
    fn transient_never_equals_persisted() {
        let a = Note::transient();
        let b = Note::new("n-1".into());
        assert_ne!(a, b);
        assert_ne!(b, a);
    }

    // 哈希在持久化实体上重复读取保持稳定
    #[test]
    fn persisted_hash_is_stable_across_reads() {
        let a = Note::new("n-1".into());
        assert_eq!(hash_of(&a), hash_of(&a));
    }

    // 瞬态实体不记忆哈希：先取哈希再补标识，哈希随标识变化
    #[test]
    fn hash_follows_id_assigned_after_construction() {
        let mut a = Note::transient();
        let transient_hash = hash_of(&a);
        a.set_id("n-9".into());
        assert_eq!(hash_of(&a), hash_of(&Note::new("n-9".into())));
        assert_ne!(hash_of(&a), transient_hash);
    }

    // 事件按插入顺序累积，清空后为空
    #[test]
    fn domain_events_accumulate_in_order() {
        let mut a = Note::new("n-1".into());
        a.add_domain_event(NoteEvent::Pinned.into());
        a.add_domain_event(NoteEvent::Archived.into());
        let types: Vec<_> = a.domain_events().iter().map(|e| e.event_type()).collect();
        assert_eq!(types, ["NoteEvent.Pinned", "NoteEvent.Archived"]);

        a.clear_domain_events();
        assert!(a.domain_events().is_empty());
    }

    // 移除首个相等事件；不存在的事件移除为空操作
    #[test]
    fn remove_domain_event_is_first_match_or_noop() {
        let mut a = Note::new("n-1".into());
        let pinned = RecordedEvent::new(NoteEvent::Pinned);
        let archived = RecordedEvent::new(NoteEvent::Archived);
        a.add_domain_event(pinned.clone());

        a.remove_domain_event(&archived);
        assert_eq!(a.domain_events().len(), 1);

        a.remove_domain_event(&pinned);
        assert!(a.domain_events().is_empty());
    }

    // is_not_persisted 以标识默认值为准
    #[test]
    fn is_not_persisted_checks_default_id() {
        assert!(Note::transient().is_not_persisted());
        assert!(!Note::new("n-1".into()).is_not_persisted());
    }
}
