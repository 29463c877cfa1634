//! The hash-map used by the welding and edge-counting passes.

/// Hashmap using [`hashbrown::HashMap`]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V>;
