//! 非有限浮点数检查
//!
//! serde_json 会把 `NaN`/`±inf` 写成 `null` 且不报错，读回时无法还原。
//! 编码前先以只校验、不输出的 `Serializer` 走一遍值，遇到非有限浮点数即失败，
//! 错误信息带上字段路径（如 `balance` 或 `Updated.balance`）。
//!
use serde::ser::{self, Error as _, Serialize};

type CheckResult = Result<(), serde_json::Error>;

/// 值中含有 JSON 无法表示的浮点数时返回错误
pub(crate) fn ensure_finite<T>(value: &T) -> CheckResult
where
    T: Serialize + ?Sized,
{
    value.serialize(FiniteCheck)
}

fn check_float(finite: bool, repr: impl std::fmt::Display) -> CheckResult {
    if finite {
        Ok(())
    } else {
        Err(serde_json::Error::custom(format!(
            "non-finite float {repr} cannot be represented"
        )))
    }
}

fn within<T>(name: &str, value: &T) -> CheckResult
where
    T: Serialize + ?Sized,
{
    value
        .serialize(FiniteCheck)
        .map_err(|err| serde_json::Error::custom(format!("{name}: {err}")))
}

struct FiniteCheck;

impl ser::Serializer for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _v: bool) -> CheckResult {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> CheckResult {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> CheckResult {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> CheckResult {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> CheckResult {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> CheckResult {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> CheckResult {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> CheckResult {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> CheckResult {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> CheckResult {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> CheckResult {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> CheckResult {
        check_float(v.is_finite(), v)
    }

    fn serialize_f64(self, v: f64) -> CheckResult {
        check_float(v.is_finite(), v)
    }

    fn serialize_char(self, _v: char) -> CheckResult {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> CheckResult {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> CheckResult {
        Ok(())
    }

    fn serialize_none(self) -> CheckResult {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> CheckResult {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> CheckResult {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> CheckResult {
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        within(variant, value)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T>(&mut self, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T>(&mut self, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T>(&mut self, key: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        key.serialize(FiniteCheck)
    }

    fn serialize_value<T>(&mut self, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        within(key, value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> CheckResult
    where
        T: Serialize + ?Sized,
    {
        within(key, value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_finite;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Reading {
        sensor: String,
        values: Vec<f64>,
        limit: Option<f32>,
    }

    #[derive(Serialize)]
    enum Change {
        Rate(f64),
        Balance { balance: f64 },
    }

    #[test]
    fn finite_values_pass() {
        let r = Reading {
            sensor: "s-1".into(),
            values: vec![0.0, -1.5, f64::MAX],
            limit: None,
        };
        assert!(ensure_finite(&r).is_ok());
        assert!(ensure_finite(&BTreeMap::from([("a", 1.0f64)])).is_ok());
        assert!(ensure_finite(&(1u128, 'x', ())).is_ok());
    }

    #[test]
    fn nested_non_finite_values_fail() {
        let r = Reading {
            sensor: "s-1".into(),
            values: vec![1.0, f64::NAN],
            limit: None,
        };
        let err = ensure_finite(&r).unwrap_err();
        assert_eq!(
            err.to_string(),
            "values: non-finite float NaN cannot be represented"
        );

        let r = Reading {
            sensor: "s-2".into(),
            values: vec![],
            limit: Some(f32::NEG_INFINITY),
        };
        assert!(ensure_finite(&r).unwrap_err().to_string().starts_with("limit: "));
        assert!(ensure_finite(&BTreeMap::from([("a", f64::INFINITY)])).is_err());
    }

    #[test]
    fn variant_path_is_reported() {
        let err = ensure_finite(&Change::Rate(f64::INFINITY)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Rate: non-finite float inf cannot be represented"
        );
        let err = ensure_finite(&Change::Balance { balance: f64::NAN }).unwrap_err();
        assert!(err.to_string().starts_with("balance: "));
    }
}
