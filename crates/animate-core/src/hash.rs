//! Hasher selection for the runtime's internal maps.

#[cfg(feature = "std-hash")]
pub mod default {
    pub use std::collections::hash_map::RandomState as BuildHasher;
}

#[cfg(not(feature = "std-hash"))]
pub mod default {
    pub use ahash::RandomState as BuildHasher;
}

/// Map type used for listener tables; iteration order is unspecified.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, default::BuildHasher>;

#[inline]
pub fn new_map<K, V>() -> FastHashMap<K, V> {
    FastHashMap::with_hasher(default::BuildHasher::default())
}
