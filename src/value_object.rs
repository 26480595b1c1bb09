//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! `SingleValueObject` 为单值包装提供完整的值语义与同底层原语之间的
//! 纯双向映射（序列化透明；启用 `infra-sqlx` 后可直接作为数据库列类型）。
//!
use serde::{Deserialize, Serialize};
use std::fmt;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 单值包装：把一个原语当作具备完整值语义的对象使用
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SingleValueObject<T>(T);

impl<T> SingleValueObject<T> {
    /// 包装给定值
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// 借用底层值
    pub fn value(&self) -> &T {
        &self.0
    }

    /// 取出底层值
    pub fn into_value(self) -> T {
        self.0
    }
}

impl<T> From<T> for SingleValueObject<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Display for SingleValueObject<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// 基础设施侧转换：把单值包装直接映射为底层原语的数据库列类型
#[cfg(feature = "infra-sqlx")]
mod sqlx_impls {
    use super::SingleValueObject;
    use sqlx::error::BoxDynError;
    use sqlx::{Database, Decode, Encode, Type, encode::IsNull};

    impl<T, DB> Type<DB> for SingleValueObject<T>
    where
        T: Type<DB>,
        DB: Database,
    {
        fn type_info() -> DB::TypeInfo {
            T::type_info()
        }

        fn compatible(ty: &DB::TypeInfo) -> bool {
            T::compatible(ty)
        }
    }

    impl<'q, T, DB> Encode<'q, DB> for SingleValueObject<T>
    where
        T: Encode<'q, DB>,
        DB: Database,
    {
        fn encode_by_ref(&self, buf: &mut DB::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
            self.0.encode_by_ref(buf)
        }
    }

    impl<'r, T, DB> Decode<'r, DB> for SingleValueObject<T>
    where
        T: Decode<'r, DB>,
        DB: Database,
    {
        fn decode(value: DB::ValueRef<'r>) -> Result<Self, BoxDynError> {
            Ok(SingleValueObject(T::decode(value)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    struct Email(SingleValueObject<String>);

    impl ValueObject for Email {
        type Error = DomainError;

        fn validate(&self) -> Result<(), Self::Error> {
            if self.0.value().contains('@') {
                Ok(())
            } else {
                Err(DomainError::InvalidValue {
                    reason: "email must contain '@'".into(),
                })
            }
        }
    }

    // 序列化对底层原语透明
    #[test]
    fn serde_is_transparent() {
        let amount = SingleValueObject::new(42_i64);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "42");

        let restored: SingleValueObject<i64> = serde_json::from_str("42").unwrap();
        assert_eq!(restored, amount);
    }

    // 与底层值之间的纯双向映射
    #[test]
    fn wraps_and_unwraps_the_underlying_value() {
        let wrapped: SingleValueObject<String> = "acc-1".to_string().into();
        assert_eq!(wrapped.value().as_str(), "acc-1");
        assert_eq!(wrapped.into_value(), "acc-1");
    }

    // Display 委托给底层值
    #[test]
    fn display_delegates_to_value() {
        let wrapped = SingleValueObject::new(7_u32);
        assert_eq!(format!("{wrapped}"), "7");
    }

    // 校验通过与失败
    #[test]
    fn validation_accepts_and_rejects() {
        let ok = Email(SingleValueObject::new("a@b.c".into()));
        assert!(ok.validate().is_ok());

        let bad = Email(SingleValueObject::new("nope".into()));
        assert!(matches!(
            bad.validate(),
            Err(DomainError::InvalidValue { .. })
        ));
    }
}
