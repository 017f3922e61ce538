/// Damm algorithm check symbol computation and validation
/// Symbols are folded through the quasigroup table matching the alphabet size, starting from 0
use crate::alphabet::Alphabet;
use crate::error::{DammError, Result};
use crate::quasigroup::{self, QuasigroupTable};

/// The number of check symbols appended to a sequence
pub const CHECK_SYMBOLS: usize = 1;

/// Incremental Damm accumulator bound to one alphabet.
///
/// The accumulator is single-owner: `update` and `reset` take `&mut self`, so
/// sharing one across threads needs external synchronization. Independent
/// accumulators never share state.
#[derive(Debug, Clone)]
pub struct Damm<A: Alphabet> {
    state: u8,
    alphabet: A,
    table: &'static QuasigroupTable,
}

impl<A: Alphabet> Damm<A> {
    /// Create an accumulator, failing if no table is registered for the alphabet size
    pub fn new(alphabet: A) -> Result<Self> {
        let table = quasigroup::lookup(alphabet.size())?;
        Ok(Self {
            state: 0,
            alphabet,
            table,
        })
    }

    /// Fold more symbols into the accumulator.
    ///
    /// On an invalid symbol the accumulator is left as it was before the call.
    pub fn update(&mut self, symbols: &[u8]) -> Result<()> {
        let mut state = self.state;
        for &symbol in symbols {
            let index = self.alphabet.from_symbol(symbol)?;
            state = self
                .table
                .get(state, index)
                .ok_or(DammError::InvalidSymbol {
                    symbol,
                    expected: "an index below the alphabet size",
                })?;
        }
        self.state = state;
        Ok(())
    }

    /// Current accumulator value
    pub fn state(&self) -> u8 {
        self.state
    }

    /// True if the symbols folded so far end with a correct check symbol
    pub fn is_valid(&self) -> bool {
        self.state == 0
    }

    /// The symbol that would bring the accumulator back to 0
    pub fn check_symbol(&self) -> u8 {
        self.alphabet.to_symbol(self.state)
    }

    /// Restart from the empty sequence
    pub fn reset(&mut self) {
        self.state = 0;
    }

    /// The alphabet this accumulator decodes symbols with
    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }
}

/// Fold a symbol sequence to its final state
pub fn fold<A: Alphabet + ?Sized>(alphabet: &A, symbols: &[u8]) -> Result<u8> {
    let mut damm = Damm::new(alphabet)?;
    damm.update(symbols)?;
    Ok(damm.state())
}

/// Compute the check symbol for a sequence
pub fn check_symbol<A: Alphabet + ?Sized>(alphabet: &A, symbols: &[u8]) -> Result<u8> {
    let state = fold(alphabet, symbols)?;
    Ok(alphabet.to_symbol(state))
}

/// Verify a sequence that already ends with its check symbol
pub fn is_valid<A: Alphabet + ?Sized>(alphabet: &A, symbols: &[u8]) -> Result<bool> {
    Ok(fold(alphabet, symbols)? == 0)
}

/// Copy the sequence and append its check symbol
pub fn append_check_symbol<A: Alphabet + ?Sized>(alphabet: &A, symbols: &[u8]) -> Result<Vec<u8>> {
    let check = check_symbol(alphabet, symbols)?;
    let mut result = Vec::with_capacity(symbols.len() + CHECK_SYMBOLS);
    result.extend_from_slice(symbols);
    result.push(check);
    Ok(result)
}
