//! Growable, sentinel-terminated argument vectors.
//!
//! [`ArgvBuilder`] assembles a target command line one token at a time.  The
//! storage always ends with an empty sentinel slot, mirroring the
//! NULL-terminated `argv` layout `execv(2)` expects, and grows by doubling
//! its slot count whenever the sentinel would no longer fit.  Every token is
//! copied in, so callers may drop or reuse their strings immediately.
//!
//! Allocation failure aborts the process (Rust's global allocator
//! behaviour); there is no path that leaves a vector without its sentinel.

use crate::config::ARGV_INITIAL_CAPACITY;

/// An owned argument vector under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgvBuilder {
    /// Tokens followed by exactly one `None` sentinel.
    slots: Vec<Option<String>>,
    /// Logical slot count; doubles when the sentinel slot is needed for a token.
    size: usize,
    /// Number of times `size` has doubled.
    growths: usize,
}

impl ArgvBuilder {
    /// Creates an empty vector holding only the sentinel.
    pub fn init() -> Self {
        Self::with_capacity(ARGV_INITIAL_CAPACITY)
    }

    /// Creates an empty vector with `capacity` slots (sentinel included).
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let size = capacity.max(1);
        let mut slots = Vec::with_capacity(size);
        slots.push(None);
        ArgvBuilder {
            slots,
            size,
            growths: 0,
        }
    }

    /// Creates a vector whose first token is `program`.
    pub fn new(program: &str) -> Self {
        let mut argv = Self::init();
        argv.add(program);
        argv
    }

    /// Copies `token` onto the end of the vector.
    pub fn add(&mut self, token: &str) {
        let used = self.len();
        if used + 1 == self.size {
            self.size *= 2;
            self.slots.reserve_exact(self.size - self.slots.len());
            self.growths += 1;
        }
        self.slots[used] = Some(token.to_owned());
        self.slots.push(None);
        debug_assert!(self.is_terminated());
    }

    /// Copies `flag` and `value` as two consecutive tokens.
    pub fn add_pair(&mut self, flag: &str, value: &str) {
        self.add(flag);
        self.add(value);
    }

    /// Copies every token of `src` onto `self`, in order.  `src` is unchanged.
    pub fn append(&mut self, src: &ArgvBuilder) {
        for token in src.iter() {
            self.add(token);
        }
    }

    /// Releases the vector and every token it owns.
    pub fn release(self) {
        drop(self);
    }

    /// Number of tokens, sentinel excluded.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Logical slot count (sentinel included).
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// How many times the vector has doubled since creation.
    pub fn growth_events(&self) -> usize {
        self.growths
    }

    /// Returns `true` when the last slot is the sentinel and no other is.
    pub fn is_terminated(&self) -> bool {
        matches!(self.slots.last(), Some(None))
            && self.slots[..self.slots.len() - 1].iter().all(Option::is_some)
    }

    /// Raw slots, sentinel included.
    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Token at `index`, or `None` for the sentinel and beyond.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    /// The program path (token 0), if any token was added.
    pub fn program(&self) -> Option<&str> {
        self.get(0)
    }

    /// Iterates over the tokens, sentinel excluded.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map_while(|s| s.as_deref())
    }

    /// Tokens after the program path.
    pub fn arguments(&self) -> impl Iterator<Item = &str> {
        self.iter().skip(1)
    }

    /// Returns `true` when some token equals `token`.
    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|t| t == token)
    }

    /// Copies the tokens out as plain strings.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl Default for ArgvBuilder {
    fn default() -> Self {
        Self::init()
    }
}
