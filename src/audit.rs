//! 审计与并发控制标记契约
//!
//! 纯数据形态的接口约定，供持久化实体按需实现：
//! - `Audit`：创建/修改人与时间；
//! - `SoftDelete`：软删除标记与删除审计；
//! - `RowVersion`：行版本并发令牌（乐观并发由调用方负责）。
//!
use chrono::{DateTime, Utc};

/// 创建与修改审计契约
pub trait Audit {
    fn created_by(&self) -> Option<&str>;
    fn created_on(&self) -> DateTime<Utc>;
    fn modified_by(&self) -> Option<&str>;
    fn modified_on(&self) -> Option<DateTime<Utc>>;

    fn set_created(&mut self, by: Option<String>, on: DateTime<Utc>);
    fn set_modified(&mut self, by: Option<String>, on: DateTime<Utc>);
}

/// 软删除契约：标记删除而非物理移除，支持恢复与审计
pub trait SoftDelete {
    fn is_deleted(&self) -> bool;
    fn deleted_by(&self) -> Option<&str>;
    fn deleted_on(&self) -> Option<DateTime<Utc>>;

    fn mark_deleted(&mut self, by: Option<String>, on: DateTime<Utc>);
    fn restore(&mut self);
}

/// 行版本契约：数据库侧并发控制使用的版本令牌
pub trait RowVersion {
    fn row_version(&self) -> &[u8];
    fn set_row_version(&mut self, version: Vec<u8>);
}
