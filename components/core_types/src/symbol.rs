//! Symbol primitive values and the well-known symbol registry.
//!
//! Symbols are unique, immutable primitive values that can be used as
//! property keys. Identity is the only thing that matters for equality;
//! the description exists for display.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Well-known symbol storage, indexed by `WellKnownSymbol as usize`.
static WELL_KNOWN_SYMBOLS: LazyLock<Vec<SymbolValue>> = LazyLock::new(|| {
    WellKnownSymbol::ALL
        .iter()
        .map(|wk| SymbolValue::new(Some(wk.description())))
        .collect()
});

/// A JavaScript Symbol value
///
/// Each symbol has a unique internal ID and an optional description for
/// debugging. Two symbols are equal only if they share an ID.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with optional description
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue {
            id,
            description: description.map(str::to_string),
        }
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// SymbolDescriptiveString: `Symbol(description)` or `Symbol()`.
    pub fn descriptive_string(&self) -> String {
        format!("Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl Hash for SymbolValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptive_string())
    }
}

/// The well-known symbols shared by every realm.
///
/// # Examples
///
/// ```
/// use core_types::WellKnownSymbol;
///
/// let iterator = WellKnownSymbol::Iterator.symbol();
/// assert_eq!(iterator, WellKnownSymbol::Iterator.symbol());
/// assert_ne!(iterator, WellKnownSymbol::Species.symbol());
/// assert_eq!(iterator.description(), Some("Symbol.iterator"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownSymbol {
    /// `@@asyncIterator`
    AsyncIterator,
    /// `@@hasInstance`
    HasInstance,
    /// `@@isConcatSpreadable`
    IsConcatSpreadable,
    /// `@@iterator`
    Iterator,
    /// `@@match`
    Match,
    /// `@@replace`
    Replace,
    /// `@@search`
    Search,
    /// `@@species`
    Species,
    /// `@@split`
    Split,
    /// `@@toPrimitive`
    ToPrimitive,
    /// `@@toStringTag`
    ToStringTag,
    /// `@@unscopables`
    Unscopables,
}

impl WellKnownSymbol {
    /// Every well-known symbol, in table order.
    pub const ALL: [WellKnownSymbol; 12] = [
        WellKnownSymbol::AsyncIterator,
        WellKnownSymbol::HasInstance,
        WellKnownSymbol::IsConcatSpreadable,
        WellKnownSymbol::Iterator,
        WellKnownSymbol::Match,
        WellKnownSymbol::Replace,
        WellKnownSymbol::Search,
        WellKnownSymbol::Species,
        WellKnownSymbol::Split,
        WellKnownSymbol::ToPrimitive,
        WellKnownSymbol::ToStringTag,
        WellKnownSymbol::Unscopables,
    ];

    /// The `[[Description]]` of the symbol, e.g. `Symbol.iterator`.
    pub fn description(self) -> &'static str {
        match self {
            WellKnownSymbol::AsyncIterator => "Symbol.asyncIterator",
            WellKnownSymbol::HasInstance => "Symbol.hasInstance",
            WellKnownSymbol::IsConcatSpreadable => "Symbol.isConcatSpreadable",
            WellKnownSymbol::Iterator => "Symbol.iterator",
            WellKnownSymbol::Match => "Symbol.match",
            WellKnownSymbol::Replace => "Symbol.replace",
            WellKnownSymbol::Search => "Symbol.search",
            WellKnownSymbol::Species => "Symbol.species",
            WellKnownSymbol::Split => "Symbol.split",
            WellKnownSymbol::ToPrimitive => "Symbol.toPrimitive",
            WellKnownSymbol::ToStringTag => "Symbol.toStringTag",
            WellKnownSymbol::Unscopables => "Symbol.unscopables",
        }
    }

    /// Look a well-known symbol up by its `@@name` (`"@@iterator"`).
    pub fn from_at_name(name: &str) -> Option<Self> {
        let short = name.strip_prefix("@@")?;
        Self::ALL
            .iter()
            .copied()
            .find(|wk| wk.description().strip_prefix("Symbol.") == Some(short))
    }

    /// The shared symbol value.
    pub fn symbol(self) -> SymbolValue {
        WELL_KNOWN_SYMBOLS[self as usize].clone()
    }
}
