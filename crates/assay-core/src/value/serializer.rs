//! Serde serializer producing reflected [`Value`]s
//!
//! `Serialize` is the reflection surface: walking a value through this
//! serializer records its runtime shape without requiring any trait beyond
//! what `#[derive(Serialize)]` already provides.

use serde::ser::{self, Serialize};
use thiserror::Error;

use super::{Fields, Value};

/// Error raised by a `Serialize` implementation while reflecting a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Custom error reported by the value's own `Serialize` impl
    #[error("Value could not be reflected: {0}")]
    Custom(String),

    /// A map entry value was serialized without a preceding key
    #[error("Map value serialized before its key")]
    ValueWithoutKey,
}

impl ser::Error for ValueError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        ValueError::Custom(msg.to_string())
    }
}

/// Reflect any serializable value
///
/// `None` at the root yields `Ok(None)`; `Some(x)` reflects `x` itself.
pub fn to_value<T>(value: &T) -> Result<Option<Value>, ValueError>
where
    T: Serialize + ?Sized,
{
    value.serialize(ValueSerializer)
}

/// Serializer whose output is a reflected, possibly-absent value
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Option<Value>;
    type Error = ValueError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = UnnamedBuilder;
    type SerializeTupleVariant = UnnamedBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = NamedBuilder;
    type SerializeStructVariant = NamedBuilder;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::Bool(v)))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::I8(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::I16(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::I32(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::I64(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::I128(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::U8(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::U16(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::U32(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::U64(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::U128(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::F32(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::F64(v)))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::Char(v)))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::Str(v.to_string())))
    }

    // Byte buffers reflect as a sequence of u8, the same shape `Vec<u8>`
    // takes without `serde_bytes`.
    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::Seq(
            v.iter().map(|byte| Some(Value::U8(*byte))).collect(),
        )))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::Unit))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::Struct {
            name,
            fields: Fields::Unit,
        }))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::Variant {
            name,
            variant,
            fields: Fields::Unit,
        }))
    }

    fn serialize_newtype_struct<T>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Some(Value::Struct {
            name,
            fields: Fields::Unnamed(vec![value.serialize(ValueSerializer)?]),
        }))
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Some(Value::Variant {
            name,
            variant,
            fields: Fields::Unnamed(vec![value.serialize(ValueSerializer)?]),
        }))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
            tuple: false,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len),
            tuple: true,
        })
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(UnnamedBuilder {
            name,
            variant: None,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(UnnamedBuilder {
            name,
            variant: Some(variant),
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(MapBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(NamedBuilder {
            name,
            variant: None,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(NamedBuilder {
            name,
            variant: Some(variant),
            fields: Vec::with_capacity(len),
        })
    }
}

/// Collects sequence and tuple elements
pub struct SeqBuilder {
    items: Vec<Option<Value>>,
    tuple: bool,
}

impl SeqBuilder {
    fn push<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Option<Value> {
        if self.tuple {
            Some(Value::Tuple(self.items))
        } else {
            Some(Value::Seq(self.items))
        }
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Option<Value>;
    type Error = ValueError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Option<Value>;
    type Error = ValueError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.finish())
    }
}

/// Collects positional fields of tuple structs and tuple variants
pub struct UnnamedBuilder {
    name: &'static str,
    variant: Option<&'static str>,
    items: Vec<Option<Value>>,
}

impl UnnamedBuilder {
    fn finish(self) -> Option<Value> {
        let fields = Fields::Unnamed(self.items);
        Some(match self.variant {
            Some(variant) => Value::Variant {
                name: self.name,
                variant,
                fields,
            },
            None => Value::Struct {
                name: self.name,
                fields,
            },
        })
    }
}

impl ser::SerializeTupleStruct for UnnamedBuilder {
    type Ok = Option<Value>;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for UnnamedBuilder {
    type Ok = Option<Value>;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.finish())
    }
}

/// Collects map entries in iteration order
pub struct MapBuilder {
    entries: Vec<(Option<Value>, Option<Value>)>,
    pending_key: Option<Option<Value>>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Option<Value>;
    type Error = ValueError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.pending_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        let key = self.pending_key.take().ok_or(ValueError::ValueWithoutKey)?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(Some(Value::Map(self.entries)))
    }
}

/// Collects named fields of structs and struct variants
pub struct NamedBuilder {
    name: &'static str,
    variant: Option<&'static str>,
    fields: Vec<(&'static str, Option<Value>)>,
}

impl NamedBuilder {
    fn push<T>(&mut self, key: &'static str, value: &T) -> Result<(), ValueError>
    where
        T: Serialize + ?Sized,
    {
        self.fields.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn finish(self) -> Option<Value> {
        let fields = Fields::Named(self.fields);
        Some(match self.variant {
            Some(variant) => Value::Variant {
                name: self.name,
                variant,
                fields,
            },
            None => Value::Struct {
                name: self.name,
                fields,
            },
        })
    }
}

impl ser::SerializeStruct for NamedBuilder {
    type Ok = Option<Value>;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.push(key, value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for NamedBuilder {
    type Ok = Option<Value>;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.push(key, value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core_types::TypeKind;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: Option<i32>,
    }

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Rect { w: u8, h: u8 },
    }

    #[test]
    fn test_root_none_is_absent() {
        assert!(to_value(&None::<i32>).unwrap().is_none());
        assert!(matches!(to_value(&Some(5i32)).unwrap(), Some(Value::I32(5))));
    }

    #[test]
    fn test_integer_widths_are_preserved() {
        assert!(matches!(to_value(&1i32).unwrap(), Some(Value::I32(1))));
        assert!(matches!(to_value(&1i64).unwrap(), Some(Value::I64(1))));
        assert!(matches!(to_value(&1u8).unwrap(), Some(Value::U8(1))));
    }

    #[test]
    fn test_strings_are_scalars() {
        let value = to_value("abc").unwrap().unwrap();
        assert_eq!(value.kind(), TypeKind::String);
        let owned = to_value(&"abc".to_string()).unwrap().unwrap();
        assert!(matches!(owned, Value::Str(ref s) if s == "abc"));
    }

    #[test]
    fn test_vec_and_array_shapes() {
        let vec = to_value(&vec![1i32, 2]).unwrap().unwrap();
        assert!(matches!(vec, Value::Seq(ref items) if items.len() == 2));
        let array = to_value(&[1i32, 2]).unwrap().unwrap();
        assert!(matches!(array, Value::Tuple(ref items) if items.len() == 2));
    }

    #[test]
    fn test_nested_none_stays_in_place() {
        let value = to_value(&vec![Some(1i32), None]).unwrap().unwrap();
        let items = value.as_sequence().unwrap();
        assert!(items[0].is_some());
        assert!(items[1].is_none());
    }

    #[test]
    fn test_struct_keeps_name_and_fields() {
        let value = to_value(&Point { x: 1, y: None }).unwrap().unwrap();
        match value {
            Value::Struct {
                name,
                fields: Fields::Named(fields),
            } => {
                assert_eq!(name, "Point");
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].0, "x");
                assert!(fields[1].1.is_none());
            }
            other => panic!("unexpected shape: {}", other),
        }
    }

    #[test]
    fn test_enum_variants_reflect_as_enum_kind() {
        for shape in [Shape::Empty, Shape::Circle(1.0), Shape::Rect { w: 1, h: 2 }] {
            let value = to_value(&shape).unwrap().unwrap();
            assert_eq!(value.kind(), TypeKind::Enum);
        }
    }

    #[test]
    fn test_map_entries_in_order() {
        let mut map = BTreeMap::new();
        map.insert("b", 2u32);
        map.insert("a", 1u32);
        let value = to_value(&map).unwrap().unwrap();
        match value {
            Value::Map(entries) => {
                assert_eq!(entries.len(), 2);
                assert!(matches!(entries[0].0, Some(Value::Str(ref k)) if k == "a"));
            }
            other => panic!("unexpected shape: {}", other),
        }
    }

    #[test]
    fn test_custom_serialize_error_surfaces() {
        struct Broken;
        impl Serialize for Broken {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("refused"))
            }
        }
        let err = to_value(&Broken).unwrap_err();
        assert_eq!(err, ValueError::Custom("refused".to_string()));
    }
}
