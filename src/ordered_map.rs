use std::{
    borrow::Borrow,
    collections::{hash_map::RandomState, HashMap},
    fmt,
    hash::{BuildHasher, Hash},
    mem, ops, slice,
};

use nohash_hasher::BuildNoHashHasher;

/// An [OrderedMap] keyed by integers, hashed with the identity function.
pub type IntOrderedMap<K, V> = OrderedMap<K, V, BuildNoHashHasher<K>>;

/// A map that remembers the order in which keys were first inserted.
///
/// Lookup, insertion and removal go through an internal `HashMap`, so they
/// cost what `HashMap` costs. A separate sequence records first-insertion
/// order and drives [`iter`](OrderedMap::iter), [`keys`](OrderedMap::keys)
/// and [`values`](OrderedMap::values). Overwriting the value of a key that is
/// already present does not move it: the key keeps its original position.
///
/// Key identity is whatever `K`'s `Hash` and `Eq` say it is. Two keys whose
/// `Hash`/`Eq` compare by address (e.g. a wrapper hashing `Rc::as_ptr`) are
/// distinct entries even when the data behind them is equal.
///
/// Removal of a key scans the order sequence, so `remove` is O(n) in the
/// number of live keys. The structure targets small maps where stable
/// enumeration matters more than removal throughput.
#[derive(Clone)]
pub struct OrderedMap<K, V, S = RandomState> {
    map: HashMap<K, V, S>,
    order: Vec<K>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys(self.order.iter())
    }

    /// `(&K, &V)` pairs in first-insertion order.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            order: self.order.iter(),
            map: &self.map,
        }
    }

    /// Values in the same order as [`keys`](OrderedMap::keys).
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values(self.iter())
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts a key-value pair and returns the previous value, if any.
    ///
    /// A new key is appended to the end of the enumeration order. An existing
    /// key only has its value replaced; its position does not change.
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
    {
        if let Some(slot) = self.map.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }

        self.order.push(key.clone());
        self.map.insert(key, value);
        None
    }

    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.map.get(key)
    }

    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.map.get_mut(key)
    }

    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Removes a key and returns its value. Absent keys are a no-op.
    ///
    /// The surviving keys keep their relative enumeration order.
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let value = self.map.remove(key)?;
        //the key was in the map, so it is in the order sequence
        let position = self.order.iter().position(|k| k.borrow() == key).unwrap();
        self.order.remove(position);

        Some(value)
    }
}

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    fn default() -> Self {
        Self {
            map: HashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Equality is order-sensitive: the same pairs inserted in a different order
/// compare unequal.
impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, Q: ?Sized, S> ops::Index<&Q> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        let Self { mut map, order } = self;
        order
            .into_iter()
            .map(|key| {
                let value = map.remove(&key).unwrap();
                (key, value)
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, K, V, S> {
    order: slice::Iter<'a, K>,
    map: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.order.next()?;
        Some((key, self.map.get(key).unwrap()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<'a, K, V, S> ExactSizeIterator for Iter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

pub struct Keys<'a, K>(slice::Iter<'a, K>);

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K> ExactSizeIterator for Keys<'a, K> {}

pub struct Values<'a, K, V, S>(Iter<'a, K, V, S>);

impl<'a, K, V, S> Iterator for Values<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V, S> ExactSizeIterator for Values<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}
