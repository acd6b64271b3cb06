//! Enables serde serialization support for `ArrayMap`
use std::marker::PhantomData;
use std::hash::{BuildHasher, Hash};

use std::fmt::{self, Formatter};
use serde::de::{Deserialize, Deserializer, Visitor, MapAccess};
use serde::ser::{SerializeMap, Serializer, Serialize};

use super::ArrayMap;

struct ArrayMapVisitor<K, V, S>(PhantomData<ArrayMap<K, V, S>>);

impl<'de, K, V, S> Visitor<'de> for ArrayMapVisitor<K, V, S>
    where K: Hash + Eq + Clone + Deserialize<'de>, V: Deserialize<'de>, S: BuildHasher + Default {
    type Value = ArrayMap<K, V, S>;
    #[inline]
    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("an ArrayMap")
    }
    /// Entries are put in the order they're read, so a repeated key keeps its first position.
    #[inline]
    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error> where M: MapAccess<'de> {
        let mut result = ArrayMap::with_capacity_and_hasher(
            access.size_hint().unwrap_or(0),
            S::default()
        );
        while let Some((key, value)) = access.next_entry()? {
            result.put(key, value);
        }
        Ok(result)
    }
}
impl<'de, K, V, S> Deserialize<'de> for ArrayMap<K, V, S>
    where K: Hash + Eq + Clone + Deserialize<'de>, V: Deserialize<'de>, S: BuildHasher + Default {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ArrayMapVisitor(PhantomData))
    }
}
/// Serializes as a map, in insertion order
impl<K, V, S> Serialize for ArrayMap<K, V, S> where K: Serialize, V: Serialize {
    #[inline]
    fn serialize<S2: Serializer>(&self, serializer: S2) -> Result<S2::Ok, S2::Error> {
        let mut map = serializer.serialize_map(Some(self.keys().len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
