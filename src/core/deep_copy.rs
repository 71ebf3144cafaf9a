use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ops::Deref;

/// 深層複製的結果：成功時為全新值，失敗時退回原本的參考
#[derive(Debug)]
pub enum DeepCopy<'a, T> {
    Copied(T),
    Original(&'a T),
}

impl<'a, T> DeepCopy<'a, T> {
    pub fn is_copied(&self) -> bool {
        matches!(self, DeepCopy::Copied(_))
    }

    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            DeepCopy::Copied(value) => value,
            DeepCopy::Original(value) => value.clone(),
        }
    }
}

impl<T> Deref for DeepCopy<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            DeepCopy::Copied(value) => value,
            DeepCopy::Original(value) => value,
        }
    }
}

/// 經由 serde_json::Value 往返建立新值
pub fn try_deep_copy<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let intermediate = serde_json::to_value(value)?;
    Ok(serde_json::from_value(intermediate)?)
}

pub fn deep_copy<T>(value: &T) -> DeepCopy<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    match try_deep_copy(value) {
        Ok(copy) => DeepCopy::Copied(copy),
        Err(e) => {
            tracing::warn!("Deep copy failed, returning original: {}", e);
            DeepCopy::Original(value)
        }
    }
}
