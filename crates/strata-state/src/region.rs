//! Fixed-capacity site bitsets.

/// A set of site indices in `0..capacity`.
///
/// Used for the empty and playable regions of a container. Bits at or above
/// `capacity` are always clear, so two regions of the same capacity compare
/// equal exactly when they hold the same sites.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    capacity: usize,
    bits: Vec<u64>,
}

impl Region {
    const BITS_PER_WORD: usize = 64;

    fn words(capacity: usize) -> usize {
        capacity.div_ceil(Self::BITS_PER_WORD)
    }

    /// A region with no sites.
    pub fn empty(capacity: usize) -> Self {
        Self {
            capacity,
            bits: vec![0; Self::words(capacity)],
        }
    }

    /// A region holding every site in `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        let mut region = Self::empty(capacity);
        region.fill();
        region
    }

    /// A region holding the given sites. Sites outside the capacity are
    /// ignored.
    pub fn from_sites(capacity: usize, sites: impl IntoIterator<Item = usize>) -> Self {
        let mut region = Self::empty(capacity);
        for site in sites {
            region.insert(site);
        }
        region
    }

    /// Number of addressable sites.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add a site. Returns `true` if it was not already present.
    pub fn insert(&mut self, site: usize) -> bool {
        if site >= self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(site);
        let fresh = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        fresh
    }

    /// Remove a site. Returns `true` if it was present.
    pub fn remove(&mut self, site: usize) -> bool {
        if site >= self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(site);
        let present = self.bits[word] & mask != 0;
        self.bits[word] &= !mask;
        present
    }

    /// Add or remove a site. Returns `true` if membership changed.
    pub fn set(&mut self, site: usize, present: bool) -> bool {
        if present {
            self.insert(site)
        } else {
            self.remove(site)
        }
    }

    /// Check whether the region holds a site.
    pub fn contains(&self, site: usize) -> bool {
        if site >= self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(site);
        self.bits[word] & mask != 0
    }

    /// Remove every site.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Add every site in `0..capacity`.
    pub fn fill(&mut self) {
        self.bits.fill(u64::MAX);
        let tail = self.capacity % Self::BITS_PER_WORD;
        if tail != 0 {
            if let Some(last) = self.bits.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
    }

    /// Number of sites held.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the region holds no sites.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Iterate over held sites in ascending order.
    pub fn iter(&self) -> RegionIter<'_> {
        RegionIter {
            bits: &self.bits,
            word_idx: 0,
            current: self.bits.first().copied().unwrap_or(0),
        }
    }

    fn locate(site: usize) -> (usize, u64) {
        (
            site / Self::BITS_PER_WORD,
            1u64 << (site % Self::BITS_PER_WORD),
        )
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = usize;
    type IntoIter = RegionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the sites of a [`Region`], ascending.
pub struct RegionIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for RegionIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * Region::BITS_PER_WORD + bit);
            }
            self.word_idx += 1;
            self.current = *self.bits.get(self.word_idx)?;
        }
    }
}
