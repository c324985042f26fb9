//! 非有限浮点数的序列化辅助函数。
//!
//! JSON 无法表示 `NaN` 和无穷大。通过 `#[serde(with = "non_finite")]` 使用时：
//!
//! - `NaN` 序列化为 `null`，`null` 反序列化为 `NaN`
//! - `+inf`、`-inf` 分别序列化为字符串 `"inf"`、`"-inf"`
//! - 有限值按普通数字处理

use serde::{
    Deserializer, Serializer,
    de::{Error, Unexpected, Visitor},
};

const POSITIVE_INFINITY: &str = "inf";
const NEGATIVE_INFINITY: &str = "-inf";

struct NonFiniteVisitor;

impl Visitor<'_> for NonFiniteVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a number, null, \"inf\" or \"-inf\"")
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(value as f64)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(value as f64)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match value {
            POSITIVE_INFINITY => Ok(f64::INFINITY),
            NEGATIVE_INFINITY => Ok(f64::NEG_INFINITY),
            "nan" | "NaN" => Ok(f64::NAN),
            other => Err(E::invalid_value(Unexpected::Str(other), &self)),
        }
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(f64::NAN)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(f64::NAN)
    }
}

/// 序列化可能为 `NaN` 或无穷大的 `f64`。
///
/// # Errors
///
/// 返回底层序列化器的错误。
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_none()
    } else if value.is_infinite() {
        match value.is_sign_positive() {
            true => serializer.serialize_str(POSITIVE_INFINITY),
            false => serializer.serialize_str(NEGATIVE_INFINITY),
        }
    } else {
        serializer.serialize_f64(*value)
    }
}

/// 反序列化由 [`serialize`] 写出的 `f64`。
///
/// # Errors
///
/// 输入既不是数字、`null`，也不是可识别的无穷大字符串时返回错误。
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NonFiniteVisitor)
}
