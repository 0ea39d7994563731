use std::hash::{BuildHasher, Hash, Hasher};
use std::rc::Rc;

/// A value with a hash chosen by the test, so that collisions can be forced.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: i64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: i64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A Hasher whose output is the last integer written to it, reinterpreted as a u64. Signed values
/// keep their two's complement representation, so `-7_i64` hashes to `(-7_i64) as u64`.
#[derive(Debug)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut offset = 0_u64;
        for byte in bytes {
            self.state ^= (*byte as u64) << (offset * 8);
            offset = (offset + 1) % 8;
        }
    }

    fn write_i32(&mut self, i: i32) {
        self.state = i as i64 as u64;
    }

    fn write_i64(&mut self, i: i64) {
        self.state = i as u64;
    }

    fn write_u32(&mut self, i: u32) {
        self.state = i as u64;
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }

    fn write_usize(&mut self, i: usize) {
        self.state = i as u64;
    }
}

#[derive(Debug, Default, Clone)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher {
            state: 0
        }
    }
}

/// A reference type without a notion of value equality: two Identities are only equal if they
/// point to the same allocation.
#[derive(Debug, Clone)]
pub struct Identity(pub Rc<u8>);

impl Identity {
    pub fn new() -> Identity {
        Identity(Rc::new(0))
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}
