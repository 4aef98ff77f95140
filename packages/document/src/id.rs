use crc32fast::Hasher;

/// Derive the stable id seed for a document from its name (CRC32, hex).
pub fn document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential node-id allocator for one document.
///
/// Ids are `"{seed}-{n}"`. The counter only moves forward — an undo does not
/// rewind it, so an id minted in a discarded future is never handed out
/// again. Template node ids are human-readable names and cannot collide
/// with this shape.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    seed: String,
    count: u32,
}

impl IdAllocator {
    pub fn new(document_name: &str) -> Self {
        Self {
            seed: document_seed(document_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Mint the next id.
    pub fn allocate(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_stable_per_name() {
        assert_eq!(document_seed("untitled"), document_seed("untitled"));
        assert_ne!(document_seed("untitled"), document_seed("landing"));
    }

    #[test]
    fn test_ids_are_sequential_and_seed_prefixed() {
        let mut ids = IdAllocator::new("untitled");

        let first = ids.allocate();
        let second = ids.allocate();

        assert_ne!(first, second);
        assert!(first.ends_with("-1"));
        assert!(second.ends_with("-2"));
        assert!(first.starts_with(ids.seed()));
        assert!(second.starts_with(ids.seed()));
    }

    #[test]
    fn test_from_seed_skips_hashing() {
        let mut ids = IdAllocator::from_seed("doc");
        assert_eq!(ids.allocate(), "doc-1");
        assert_eq!(ids.allocate(), "doc-2");
    }
}
