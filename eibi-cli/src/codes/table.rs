//! String-keyed code table with chained hashing.
//!
//! EiBi publishes its language, country, and target-area codes as plain
//! `"CODE Name"` text files. Each file is loaded into its own `CodeTable`,
//! which is then queried in both directions while printing: code → name
//! when rendering a record, and name → code when turning a user-supplied
//! display name back into the code that appears in the schedule.

use std::fmt;

/// Bucket count of a freshly created table.
const INITIAL_BUCKETS: usize = 100;

/// Load factor above which the bucket array doubles.
const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// One key/value pair in a bucket chain.
#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: String,
}

/// A case-sensitive, exact-match string-to-string map.
///
/// Collisions are resolved by chaining: each bucket holds its entries as a
/// `Vec` whose front is the chain head. New entries are prepended, so among
/// entries sharing a value the most recently inserted one in a bucket wins
/// reverse-lookup ties. The table grows by doubling its bucket count
/// whenever the load factor would exceed 0.75; it never shrinks, and
/// entries cannot be removed.
///
/// The table owns every key and value it stores. Dropping the table
/// releases all of them.
///
/// # Examples
///
/// ```
/// use eibi_cli::codes::CodeTable;
///
/// let mut table = CodeTable::new();
/// table.insert("E", "English");
/// assert_eq!(table.get("E"), Some("English"));
/// assert_eq!(table.find_key("English"), Some("E"));
/// assert_eq!(table.get("F"), None);
/// ```
#[derive(Clone)]
pub struct CodeTable {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl CodeTable {
    /// Create an empty table with the initial bucket count.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); INITIAL_BUCKETS],
            len: 0,
        }
    }

    /// djb2 over the key's bytes, reduced modulo the bucket count.
    ///
    /// Runs in 32-bit wrapping arithmetic; chain placement depends on the
    /// modulus, so this must stay stable across resizes for rehashing to
    /// place entries correctly.
    fn bucket_index(key: &str, bucket_count: usize) -> usize {
        let mut hash: u32 = 5381;
        for &b in key.as_bytes() {
            hash = hash.wrapping_mul(33).wrapping_add(u32::from(b));
        }
        hash as usize % bucket_count
    }

    /// Insert a key/value pair, replacing the value if the key is present.
    ///
    /// Keys and values are copied into the table. Empty strings are valid
    /// for both. Updating an existing key leaves `len` unchanged.
    pub fn insert(&mut self, key: &str, value: &str) {
        if self.len as f64 / self.buckets.len() as f64 > LOAD_FACTOR_THRESHOLD {
            self.resize(self.buckets.len() * 2);
        }

        let index = Self::bucket_index(key, self.buckets.len());
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|e| e.key == key) {
            entry.value = value.to_owned();
            return;
        }

        // Prepend: the newest entry becomes the chain head.
        chain.insert(
            0,
            Entry {
                key: key.to_owned(),
                value: value.to_owned(),
            },
        );
        self.len += 1;
    }

    /// Look up the value stored for `key`.
    ///
    /// O(1) on average, O(chain length) in the worst case.
    pub fn get(&self, key: &str) -> Option<&str> {
        let index = Self::bucket_index(key, self.buckets.len());
        self.buckets[index]
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Look up the key of the first entry whose value matches exactly.
    ///
    /// Unlike [`get`](Self::get) this is a full-table scan: O(n) over every
    /// entry, visiting buckets in index order and each chain head-to-tail.
    /// When several keys share a value, which one is returned is an
    /// artifact of that scan order (within a bucket, the most recently
    /// inserted entry wins), but it is deterministic for a fixed insertion
    /// sequence.
    pub fn find_key(&self, value: &str) -> Option<&str> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter())
            .find(|e| e.value == value)
            .map(|e| e.key.as_str())
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Rehash every entry into a new bucket array of `new_count` buckets.
    ///
    /// The new array is built completely before it replaces the old one,
    /// so no partially-resized table is ever observable. Old buckets are
    /// drained in index order and each chain head-to-tail, prepending into
    /// the new chains; entries are moved, never cloned.
    fn resize(&mut self, new_count: usize) {
        let mut new_buckets: Vec<Vec<Entry>> = vec![Vec::new(); new_count];

        for chain in self.buckets.drain(..) {
            for entry in chain {
                let index = Self::bucket_index(&entry.key, new_count);
                new_buckets[index].insert(0, entry);
            }
        }

        self.buckets = new_buckets;
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeTable")
            .field("len", &self.len)
            .field("bucket_count", &self.buckets.len())
            .finish()
    }
}
