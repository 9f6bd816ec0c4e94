use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Unexpected, Visitor},
};
use std::{fmt, marker, str::FromStr};

pub trait Uint: Copy + fmt::Display + FromStr {
    const NAME: &'static str;

    fn from_u64(value: u64) -> Option<Self>;

    fn from_u128(value: u128) -> Option<Self>;
}

/// An unsigned integer which is a decimal string in JSON.
///
/// Both JSON numbers and decimal strings are accepted when deserializing, because upstream data
/// mixes the two. Serializing always emits a string, so values above 2^53 survive JavaScript
/// readers.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Debug)]
pub struct JsonUint<T: Uint>(T);

struct JsonUintVisitor<T: Uint>(marker::PhantomData<T>);

impl<T: Uint> JsonUint<T> {
    pub fn value(self) -> T {
        self.0
    }
}

impl<T: Uint> fmt::Display for JsonUint<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl<T: Uint> From<T> for JsonUint<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Uint> Serialize for JsonUint<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T: Uint> Deserialize<'de> for JsonUint<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonUintVisitor(marker::PhantomData))
    }
}

impl<T: Uint> Visitor<'_> for JsonUintVisitor<T> {
    type Value = JsonUint<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "a non-negative integer or a decimal string fitting in {}",
            T::NAME
        )
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        T::from_u64(value)
            .map(JsonUint)
            .ok_or_else(|| Error::custom(format!("Invalid {} {}: overflow", T::NAME, value)))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E>
    where
        E: Error,
    {
        T::from_u128(value)
            .map(JsonUint)
            .ok_or_else(|| Error::custom(format!("Invalid {} {}: overflow", T::NAME, value)))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(Error::invalid_value(Unexpected::Signed(value), &self)),
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::custom(format!(
                "Invalid {} {:?}: only decimal digits are allowed",
                T::NAME,
                value
            )));
        }
        value
            .parse::<T>()
            .map(JsonUint)
            .map_err(|_| Error::custom(format!("Invalid {} {}: overflow", T::NAME, value)))
    }
}

macro_rules! def_json_uint {
    ($alias:ident, $inner:ident, $bits:expr) => {
        #[doc = "The "]
        #[doc = $bits]
        #[doc = r#" unsigned integer type encoded as a decimal string in JSON.

## Examples

| JSON     | Decimal Value                   |
| -------- | ------------------------------- |
| "0"      | 0                               |
| "4803777"| 4803777                         |
| 4803777  | 4803777, numbers are accepted   |
| "0x10"   | Invalid, decimal is required    |
| "-1"     | Invalid, negative               |"#]
        pub type $alias = JsonUint<$inner>;

        impl Uint for $inner {
            const NAME: &'static str = stringify!($alias);

            fn from_u64(value: u64) -> Option<Self> {
                $inner::try_from(value).ok()
            }

            fn from_u128(value: u128) -> Option<Self> {
                $inner::try_from(value).ok()
            }
        }

        impl From<JsonUint<$inner>> for $inner {
            fn from(value: JsonUint<$inner>) -> Self {
                value.value()
            }
        }
    };
}

def_json_uint!(Uint32, u32, "32-bit");
def_json_uint!(Uint64, u64, "64-bit");
def_json_uint!(Uint128, u128, "128-bit");
