/// ID types for Tunebox entities
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "sqlx-support")]
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite, Type,
};

/// Blob Store key
///
/// Assigned by the Blob Store on `put`. Keys are monotonic and never reused
/// within the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobKey(i64);

impl BlobKey {
    /// Wrap a raw key
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw key
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BlobKey {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

#[cfg(feature = "sqlx-support")]
impl Type<Sqlite> for BlobKey {
    fn type_info() -> SqliteTypeInfo {
        <i64 as Type<Sqlite>>::type_info()
    }
}

#[cfg(feature = "sqlx-support")]
impl<'q> Encode<'q, Sqlite> for BlobKey {
    fn encode_by_ref(
        &self,
        args: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<Sqlite>>::encode_by_ref(&self.0, args)
    }
}

#[cfg(feature = "sqlx-support")]
impl<'r> Decode<'r, Sqlite> for BlobKey {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <i64 as Decode<Sqlite>>::decode(value)?;
        Ok(BlobKey(raw))
    }
}
