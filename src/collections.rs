use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub(crate) use rustc_hash::FxHashMap;


/// Use indexmap for fast lookups and stable indices, rustc_hash for fast hashing
/// Coordinates are small integer pairs, so Fx is a good fit
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
