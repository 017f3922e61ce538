use damm::{Alphabet, AlphabetKind, Damm, DammError, Digit, UpperHex};

/// Decimal alphabet spelled with the letters `a`-`j`
struct LetterDigits;

impl Alphabet for LetterDigits {
    fn size(&self) -> u8 {
        10
    }

    fn to_symbol(&self, index: u8) -> u8 {
        b'a' + index
    }

    fn from_symbol(&self, symbol: u8) -> damm::Result<u8> {
        match symbol {
            b'a'..=b'j' => Ok(symbol - b'a'),
            _ => Err(DammError::InvalidSymbol {
                symbol,
                expected: "[a-j]",
            }),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Damm Check Symbol Demo\n");

    // One-shot helpers
    let account = b"572";
    let check = damm::check_digit(account)?;
    println!("Check digit for 572: {}", char::from(check));

    let with_check = damm::append_digit(account)?;
    println!("With check digit: {}", String::from_utf8(with_check.clone())?);
    println!("Valid: {}", damm::is_valid_digit(&with_check)?);

    // A single transposition is caught
    println!("5274 valid: {}\n", damm::is_valid_digit(b"5274")?);

    // Explicit alphabet selection
    for kind in AlphabetKind::ALL {
        let input: &[u8] = match kind {
            AlphabetKind::Digit => b"20240115",
            AlphabetKind::UpperHex => b"C0FFEE",
            AlphabetKind::LowerHex => b"c0ffee",
        };
        let extended = damm::append_check_symbol(&kind, input)?;
        println!("{:<20} {}", kind.to_string(), String::from_utf8(extended)?);
    }

    // Streaming accumulator
    println!("\nStreaming:");
    let mut damm = Damm::new(UpperHex)?;
    for chunk in [&b"1A"[..], &b"2B"[..]] {
        damm.update(chunk)?;
        println!("├─ after {:?}: state {}", String::from_utf8_lossy(chunk), damm.state());
    }
    println!("└─ check symbol: {}\n", char::from(damm.check_symbol()));

    // Caller-defined alphabet on a registered size
    let lettered = damm::append_check_symbol(&LetterDigits, b"fhc")?;
    println!("Letter alphabet: {}", String::from_utf8(lettered)?);

    // Errors
    if let Err(e) = damm::check_symbol(&Digit, b"12a4") {
        println!("Error: {}", e);
    }

    Ok(())
}
