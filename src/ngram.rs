//! N-gram window extraction
//!
//! Model data is trained on space-padded corpora, so a word is matched as if
//! it were written `" word "`. For bigrams and trigrams the first window
//! therefore starts with a space and the last one ends with a space. The
//! padding is synthesized into the window buffer; the token is never copied.
//!
//! For a token of `L` code units this yields `L` unigrams and
//! `L + 3 - order` windows of order 2 or 3 (`L + 1` bigrams).

/// The space code unit used for boundary padding
pub const SPACE: u16 = b' ' as u16;

/// Largest supported n-gram order
pub const MAX_ORDER: usize = 3;

/// Which n-gram table a window is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NgramOrder {
    Unigram,
    Bigram,
    Trigram,
}

impl NgramOrder {
    pub fn all() -> &'static [NgramOrder] {
        &[NgramOrder::Unigram, NgramOrder::Bigram, NgramOrder::Trigram]
    }

    /// Window length in code units
    pub fn width(self) -> usize {
        match self {
            NgramOrder::Unigram => 1,
            NgramOrder::Bigram => 2,
            NgramOrder::Trigram => 3,
        }
    }

    /// Order for a key of `len` code units, if it is one we store
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(NgramOrder::Unigram),
            2 => Some(NgramOrder::Bigram),
            3 => Some(NgramOrder::Trigram),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NgramOrder::Unigram => "unigram",
            NgramOrder::Bigram => "bigram",
            NgramOrder::Trigram => "trigram",
        }
    }
}

/// A single n-gram window. Slots past `order.width()` are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    order: NgramOrder,
    units: [u16; MAX_ORDER],
}

impl Window {
    /// Build a window from exactly `order.width()` code units
    pub fn new(order: NgramOrder, units: &[u16]) -> Self {
        debug_assert_eq!(units.len(), order.width());
        let mut buf = [0u16; MAX_ORDER];
        buf[..units.len()].copy_from_slice(units);
        Self { order, units: buf }
    }

    pub fn order(&self) -> NgramOrder {
        self.order
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.units[..self.order.width()]
    }

    /// Raw fixed-size buffer, for table lookups
    pub(crate) fn buf(&self) -> &[u16; MAX_ORDER] {
        &self.units
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf16_lossy(self.as_slice()))
    }
}

/// Extract the window at `offset`.
///
/// Returns the window and the offset of the next one, or `None` once the
/// token is exhausted. For orders above one, offsets index the virtually
/// padded token, `0..=len + 1`.
pub fn next_window(units: &[u16], order: NgramOrder, offset: usize) -> Option<(Window, usize)> {
    let len = units.len();
    if len == 0 {
        return None;
    }

    let wlen = order.width();
    let mut buf = [0u16; MAX_ORDER];

    if wlen == 1 {
        if offset >= len {
            return None;
        }
        buf[0] = units[offset];
    } else {
        // Padded sequence has len + 2 slots: leading space, token, trailing space
        if offset + wlen > len + 2 {
            return None;
        }
        for (i, slot) in buf.iter_mut().take(wlen).enumerate() {
            let pos = offset + i;
            *slot = if pos == 0 || pos == len + 1 {
                SPACE
            } else {
                units[pos - 1]
            };
        }
    }

    Some((Window { order, units: buf }, offset + 1))
}

/// Iterator over every window of a token at one order
#[derive(Debug, Clone)]
pub struct NgramWindows<'a> {
    units: &'a [u16],
    order: NgramOrder,
    offset: usize,
}

impl<'a> NgramWindows<'a> {
    pub fn new(units: &'a [u16], order: NgramOrder) -> Self {
        Self {
            units,
            order,
            offset: 0,
        }
    }
}

impl Iterator for NgramWindows<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let (window, next) = next_window(self.units, self.order, self.offset)?;
        self.offset = next;
        Some(window)
    }
}
