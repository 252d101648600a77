//! Support routines for name interning.
//!
//! The pool keeps its entries in a single `Seq`,
//! and performs a linear scan when converting bytes to a symbol
//! (O(n) entries, with an O(m) comparison each).
//! Symbol-to-bytes is constant time.
//!
//! Inputs with many distinct names can use the hashed
//! `string_interner` backend instead; both sit behind `Interner`.

use string_interner::{DefaultStringInterner, DefaultSymbol, Symbol as _};

use super::Seq;

/// Identity of an interned name.
///
/// Two symbols from the same interner are equal iff their contents are equal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol(usize);

impl Symbol {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sym#{}", self.0)
    }
}

/// Something that can turn names into symbols, and back.
///
/// The tokenizer only needs this much of an interner.
pub trait Interner {
    /// Get the symbol for this name, adding it if it's new.
    fn intern_name(&mut self, name: &str) -> Symbol;

    /// Get the name for this symbol, if it came from this interner.
    fn resolve_name(&self, symbol: Symbol) -> Option<&str>;
}

#[derive(Debug)]
struct Entry {
    len: usize,
    content: Box<[u8]>,
}

/// Content-addressed pool of byte strings.
///
/// Entries are never removed; a symbol stays valid for the life of the pool.
#[derive(Debug, Default)]
pub struct InternPool {
    entries: Seq<Entry>,
}

impl InternPool {
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of distinct strings in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the symbol for these bytes, without adding them.
    pub fn get(&self, bytes: &[u8]) -> Option<Symbol> {
        self.entries
            .iter()
            .position(|e| e.len == bytes.len() && &*e.content == bytes)
            .map(Symbol)
    }

    /// Put the bytes into the pool, or find them.
    pub fn intern(&mut self, bytes: &[u8]) -> Symbol {
        if let Some(symbol) = self.get(bytes) {
            return symbol;
        }
        let symbol = Symbol(self.entries.len());
        self.entries.push(Entry {
            len: bytes.len(),
            content: bytes.into(),
        });
        tracing::debug!(%symbol, len = bytes.len(), "interned new string");
        symbol
    }

    /// Get the bytes for a symbol.
    pub fn resolve(&self, symbol: Symbol) -> Option<&[u8]> {
        self.entries.get(symbol.0).map(|e| &*e.content)
    }

    /// Get the bytes for a symbol, if they are UTF-8.
    pub fn resolve_str(&self, symbol: Symbol) -> Option<&str> {
        std::str::from_utf8(self.resolve(symbol)?).ok()
    }
}

impl Interner for InternPool {
    fn intern_name(&mut self, name: &str) -> Symbol {
        self.intern(name.as_bytes())
    }

    fn resolve_name(&self, symbol: Symbol) -> Option<&str> {
        self.resolve_str(symbol)
    }
}

impl Interner for DefaultStringInterner {
    fn intern_name(&mut self, name: &str) -> Symbol {
        Symbol(self.get_or_intern(name).to_usize())
    }

    fn resolve_name(&self, symbol: Symbol) -> Option<&str> {
        self.resolve(DefaultSymbol::try_from_usize(symbol.0)?)
    }
}

/// Reserved names, interned up front so name tokens can be checked by identity.
#[derive(Debug, Clone, Copy)]
pub struct Keywords {
    pub kw_if: Symbol,
    pub kw_for: Symbol,
    pub kw_while: Symbol,
}

impl Keywords {
    pub fn new(interner: &mut impl Interner) -> Self {
        Keywords {
            kw_if: interner.intern_name("if"),
            kw_for: interner.intern_name("for"),
            kw_while: interner.intern_name("while"),
        }
    }

    pub fn is_keyword(&self, symbol: Symbol) -> bool {
        [self.kw_if, self.kw_for, self.kw_while].contains(&symbol)
    }
}
